//! Skill gap analysis: required vs. possessed skills per taxonomy
//! category, with templated improvement tips.

use std::collections::BTreeSet;

use itertools::Itertools;
use serde::Serialize;

use crate::job::JobDescription;
use crate::resume::Resume;
use crate::taxonomy::{SkillCategory, SkillTaxonomy};

/// Per-category gaps plus the skills both sides share. Sets are
/// ordered so identical input reproduces identical output.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GapReport {
    pub missing_hard: BTreeSet<String>,
    pub missing_soft: BTreeSet<String>,
    pub missing_cloud: BTreeSet<String>,
    pub matched_skills: BTreeSet<String>,
    pub tips: Vec<String>,
}

/// Canonical skills the job requires: taxonomy matches among ranked
/// keywords, the detected tech stack, and the requirement lines.
#[must_use]
pub fn required_skills(job: &JobDescription, taxonomy: &SkillTaxonomy) -> BTreeSet<String> {
    let mut required = BTreeSet::new();
    for keyword in &job.keywords {
        if let Some(name) = taxonomy.canonical(keyword) {
            required.insert(name.to_string());
        }
    }
    required.extend(job.tech_stack.iter().cloned());
    required.extend(taxonomy.scan(&job.requirements_text()));
    required
}

/// Bucket required-but-absent skills by category and render one tip
/// per non-empty bucket.
#[must_use]
pub fn analyze_gaps(resume: &Resume, job: &JobDescription, taxonomy: &SkillTaxonomy) -> GapReport {
    let required = required_skills(job, taxonomy);
    let mut report = GapReport::default();

    for skill in required {
        if resume.skill_set.contains(&skill) {
            report.matched_skills.insert(skill);
            continue;
        }
        match taxonomy.category_of(&skill) {
            Some(SkillCategory::Soft) => {
                report.missing_soft.insert(skill);
            }
            Some(SkillCategory::CloudDevops) => {
                report.missing_cloud.insert(skill);
            }
            // hard is the default bucket for anything uncategorized
            _ => {
                report.missing_hard.insert(skill);
            }
        }
    }

    report.tips = build_tips(&report);
    report
}

fn build_tips(report: &GapReport) -> Vec<String> {
    let mut tips = Vec::new();
    if !report.missing_hard.is_empty() {
        tips.push(format!(
            "Strengthen your core technical stack: the role calls for {}.",
            report.missing_hard.iter().join(", ")
        ));
    }
    if !report.missing_soft.is_empty() {
        tips.push(format!(
            "Surface soft skills the posting asks for, such as {}.",
            report.missing_soft.iter().join(", ")
        ));
    }
    if !report.missing_cloud.is_empty() {
        tips.push(format!(
            "Add cloud or devops evidence covering {}.",
            report.missing_cloud.iter().join(", ")
        ));
    }
    tips
}
