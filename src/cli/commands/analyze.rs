//! jobfit analyze - full match report with skill gaps and tips

use std::path::PathBuf;

use clap::Args;

use crate::app::AppContext;
use crate::cli::output::{HumanLayout, emit_human, emit_robot, robot_ok};
use crate::error::Result;
use crate::pipeline::MatchReport;
use crate::utils::format::format_percent;

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Resume text file (`-` for stdin)
    #[arg(long, value_name = "FILE")]
    pub resume: PathBuf,

    /// Job description text file (`-` for stdin)
    #[arg(long, value_name = "FILE")]
    pub job: PathBuf,
}

pub fn run(ctx: &AppContext, args: &AnalyzeArgs) -> Result<()> {
    let resume_text = super::read_document(&args.resume)?;
    let job_text = super::read_document(&args.job)?;

    let report = ctx.matcher().analyze(&resume_text, &job_text)?;

    if ctx.output_mode.is_robot() {
        return emit_robot(&robot_ok(&report));
    }

    emit_human(render_report(&report));
    Ok(())
}

fn render_report(report: &MatchReport) -> HumanLayout {
    let mut layout = HumanLayout::new();
    layout
        .title("Match Analysis")
        .section("Scores")
        .kv(
            "Final",
            &format!(
                "{:.2} ({})",
                report.scores.final_score,
                format_percent(report.scores.final_score)
            ),
        )
        .kv("Semantic", &format!("{:.4}", report.scores.semantic_score))
        .kv("Keyword", &format!("{:.4}", report.scores.keyword_score))
        .blank();

    layout.section("Skills");
    layout.kv("Matched", &join_or_dash(&report.gaps.matched_skills));
    layout.kv("Missing hard", &join_or_dash(&report.gaps.missing_hard));
    layout.kv("Missing soft", &join_or_dash(&report.gaps.missing_soft));
    layout.kv("Missing cloud", &join_or_dash(&report.gaps.missing_cloud));
    layout.blank();

    if !report.gaps.tips.is_empty() {
        layout.section("Tips");
        for tip in &report.gaps.tips {
            layout.bullet(tip);
        }
        layout.blank();
    }

    if !report.top_matches.is_empty() {
        layout.section("Best-aligned lines");
        for top in &report.top_matches {
            layout.push_line(format!(
                "  {:.2}  {}",
                top.score, top.resume_snippet
            ));
            layout.push_line(format!("        {}", top.job_snippet));
        }
    }

    layout
}

fn join_or_dash(skills: &std::collections::BTreeSet<String>) -> String {
    if skills.is_empty() {
        "-".to_string()
    } else {
        skills.iter().cloned().collect::<Vec<_>>().join(", ")
    }
}
