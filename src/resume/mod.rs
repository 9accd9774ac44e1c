//! Resume data model: contact info, named sections, and the derived
//! skill set.

pub mod segmenter;

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::Serialize;

use crate::extract;
use crate::taxonomy::SkillTaxonomy;

/// Resume sections recognized by the segmenter, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Summary,
    Skills,
    Experience,
    Education,
    Projects,
}

impl SectionKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Summary => "summary",
            Self::Skills => "skills",
            Self::Experience => "experience",
            Self::Education => "education",
            Self::Projects => "projects",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Contact fields pulled from the resume header. Absence is not an
/// error; fields stay empty when nothing matches.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ContactInfo {
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// A segmented resume with its taxonomy-derived skill set. Immutable
/// once built.
#[derive(Debug, Clone)]
pub struct Resume {
    pub raw_text: String,
    pub contact: ContactInfo,
    pub sections: BTreeMap<SectionKind, String>,
    pub skill_set: BTreeSet<String>,
}

impl Resume {
    /// Segment resume text and derive the canonical skill set.
    ///
    /// Never fails: a resume with no recognizable structure degrades to
    /// a single summary section and whatever skills the taxonomy scan
    /// finds.
    #[must_use]
    pub fn parse(text: &str, taxonomy: &SkillTaxonomy) -> Self {
        let segmented = segmenter::segment(text);
        let skill_set = extract::skills_from_sections(&segmented.sections, taxonomy);
        Self {
            raw_text: text.to_string(),
            contact: segmented.contact,
            sections: segmented.sections,
            skill_set,
        }
    }

    /// Section text, if the section was found.
    #[must_use]
    pub fn section(&self, kind: SectionKind) -> Option<&str> {
        self.sections.get(&kind).map(String::as_str)
    }
}
