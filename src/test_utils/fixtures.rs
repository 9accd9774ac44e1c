use std::path::PathBuf;

use tempfile::TempDir;

/// A realistic short resume used across tests.
pub const SAMPLE_RESUME: &str = "\
Jane Doe
jane.doe@example.com | +1 (555) 010-0199

SKILLS
Python, SQL, Docker, Kubernetes, Airflow

EXPERIENCE
Data Engineer, Acme Corp (2021-2024)
- Built batch pipelines with Airflow on AWS
- Migrated reporting warehouse to PostgreSQL

EDUCATION
BSc Computer Science
";

/// A realistic short job description used across tests.
pub const SAMPLE_JOB: &str = "\
Senior Data Engineer

Requirements:
- 3+ years of Python and SQL
- Docker and Kubernetes in production
- Experience with AWS

Responsibilities:
- Design and maintain batch pipelines
- Collaborate with analytics teams
";

/// A tiny taxonomy JSON document for tests that load from a file.
pub const SAMPLE_TAXONOMY_JSON: &str = r#"[
  {"name": "python", "category": "hard", "aliases": ["py"]},
  {"name": "sql", "category": "hard", "aliases": ["postgresql", "postgres"]},
  {"name": "communication", "category": "soft", "aliases": []},
  {"name": "docker", "category": "cloud_devops", "aliases": []},
  {"name": "aws", "category": "cloud_devops", "aliases": ["amazon web services"]}
]"#;

/// Test fixture providing isolated filesystem environment.
pub struct UnitTestFixture {
    pub temp_dir: TempDir,
    pub data_path: PathBuf,
}

impl Default for UnitTestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl UnitTestFixture {
    #[must_use]
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_path = temp_dir.path().to_path_buf();

        println!("[FIXTURE] Created temp directory: {data_path:?}");

        Self { temp_dir, data_path }
    }

    /// Create a test file with content.
    #[must_use]
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let full_path = self.data_path.join(relative_path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
        println!(
            "[FIXTURE] Created file: {:?} ({} bytes)",
            full_path,
            content.len()
        );
        full_path
    }

    /// Write the sample resume to a file and return its path.
    #[must_use]
    pub fn create_resume(&self) -> PathBuf {
        self.create_file("resume.txt", SAMPLE_RESUME)
    }

    /// Write the sample job description to a file and return its path.
    #[must_use]
    pub fn create_job(&self) -> PathBuf {
        self.create_file("job.txt", SAMPLE_JOB)
    }

    /// Write the sample taxonomy to a JSON file and return its path.
    #[must_use]
    pub fn create_taxonomy(&self) -> PathBuf {
        self.create_file("taxonomy.json", SAMPLE_TAXONOMY_JSON)
    }
}

impl Drop for UnitTestFixture {
    fn drop(&mut self) {
        println!("[FIXTURE] Cleaning up temp directory: {:?}", self.data_path);
    }
}
