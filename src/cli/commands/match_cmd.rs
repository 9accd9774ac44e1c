//! jobfit match - scores only, no gap analysis

use std::path::PathBuf;

use clap::Args;

use crate::app::AppContext;
use crate::cli::output::{HumanLayout, emit_human, emit_robot, robot_ok};
use crate::error::Result;
use crate::utils::format::format_percent;

#[derive(Args, Debug)]
pub struct MatchArgs {
    /// Resume text file (`-` for stdin)
    #[arg(long, value_name = "FILE")]
    pub resume: PathBuf,

    /// Job description text file (`-` for stdin)
    #[arg(long, value_name = "FILE")]
    pub job: PathBuf,
}

pub fn run(ctx: &AppContext, args: &MatchArgs) -> Result<()> {
    let resume_text = super::read_document(&args.resume)?;
    let job_text = super::read_document(&args.job)?;

    let scores = ctx.matcher().score(&resume_text, &job_text)?;

    if ctx.output_mode.is_robot() {
        return emit_robot(&robot_ok(&scores));
    }

    let mut layout = HumanLayout::new();
    layout
        .title("Match Score")
        .kv(
            "Final",
            &format!("{:.2} ({})", scores.final_score, format_percent(scores.final_score)),
        )
        .kv("Semantic", &format!("{:.4}", scores.semantic_score))
        .kv("Keyword", &format!("{:.4}", scores.keyword_score));
    emit_human(layout);
    Ok(())
}
