//! jobfit taxonomy - inspect the loaded skill taxonomy

use clap::Args;
use serde::Serialize;

use crate::app::AppContext;
use crate::cli::output::{HumanLayout, emit_human, emit_robot, robot_ok};
use crate::error::{JobfitError, Result};
use crate::taxonomy::SkillCategory;

#[derive(Args, Debug)]
pub struct TaxonomyArgs {
    /// Only list skills in this category (hard, soft, cloud_devops)
    #[arg(long, value_name = "CATEGORY")]
    pub category: Option<SkillCategory>,

    /// Resolve a term to its canonical skill instead of listing
    #[arg(long, value_name = "TERM")]
    pub lookup: Option<String>,
}

#[derive(Serialize)]
struct EntryOutput<'a> {
    name: &'a str,
    category: SkillCategory,
    aliases: &'a [String],
}

#[derive(Serialize)]
struct LookupOutput<'a> {
    term: &'a str,
    canonical: &'a str,
    category: SkillCategory,
}

pub fn run(ctx: &AppContext, args: &TaxonomyArgs) -> Result<()> {
    if let Some(term) = &args.lookup {
        return run_lookup(ctx, term);
    }

    let entries: Vec<EntryOutput<'_>> = ctx
        .taxonomy
        .entries()
        .iter()
        .filter(|entry| args.category.is_none_or(|c| entry.category == c))
        .map(|entry| EntryOutput {
            name: &entry.name,
            category: entry.category,
            aliases: &entry.aliases,
        })
        .collect();

    if ctx.output_mode.is_robot() {
        let payload = serde_json::json!({
            "count": entries.len(),
            "entries": entries,
        });
        return emit_robot(&robot_ok(payload));
    }

    let mut layout = HumanLayout::new();
    layout.title("Skill Taxonomy");
    for category in SkillCategory::ALL {
        if args.category.is_some_and(|c| c != category) {
            continue;
        }
        let in_category: Vec<_> = entries
            .iter()
            .filter(|e| e.category == category)
            .collect();
        if in_category.is_empty() {
            continue;
        }
        layout.section(category.label());
        for entry in in_category {
            if entry.aliases.is_empty() {
                layout.bullet(entry.name);
            } else {
                layout.bullet(&format!("{} ({})", entry.name, entry.aliases.join(", ")));
            }
        }
        layout.blank();
    }
    layout.kv("Total", &entries.len().to_string());
    emit_human(layout);
    Ok(())
}

fn run_lookup(ctx: &AppContext, term: &str) -> Result<()> {
    let canonical = ctx
        .taxonomy
        .canonical(term)
        .ok_or_else(|| JobfitError::InvalidInput(format!("unknown skill term: {term}")))?;
    let category = ctx
        .taxonomy
        .category_of(canonical)
        .ok_or_else(|| JobfitError::Taxonomy(format!("no category for {canonical}")))?;

    if ctx.output_mode.is_robot() {
        return emit_robot(&robot_ok(LookupOutput { term, canonical, category }));
    }

    let mut layout = HumanLayout::new();
    layout
        .kv("Term", term)
        .kv("Canonical", canonical)
        .kv("Category", category.label());
    emit_human(layout);
    Ok(())
}
