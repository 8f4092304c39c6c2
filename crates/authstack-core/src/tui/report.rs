//! Rendering of run outcomes

use crate::product::ProductConfig;
use crate::report::Outcome;
use colored::Colorize;
use std::io;

/// Print the outcome of a run
pub fn report<C: ProductConfig>(config: &C, outcome: &Outcome) -> io::Result<()> {
    match outcome {
        Outcome::Created { project_name, .. } => {
            cliclack::log::success(outcome.headline())?;
            print_next_steps(config, project_name);
            cliclack::outro("Happy coding!")?;
        }
        Outcome::NoTemplates { .. } | Outcome::Cancelled => {
            cliclack::outro_cancel(outcome.headline())?;
        }
        Outcome::ScaffoldFailed(_) => {
            if let Some(detail) = outcome.detail() {
                cliclack::log::error(detail)?;
            }
            cliclack::outro_cancel(outcome.headline())?;
        }
        Outcome::PromptUnsupported(_) | Outcome::Unexpected(_) => {
            // The prompt UI may be what failed, so stay on plain stderr
            eprintln!("{} {}", "Error:".red().bold(), outcome.headline());
            if let Some(detail) = outcome.detail() {
                eprintln!("  {}", detail.dimmed());
            }
        }
    }

    Ok(())
}

fn print_next_steps<C: ProductConfig>(config: &C, project_name: &str) {
    println!();
    for line in next_steps_lines(&config.next_steps(project_name)) {
        println!("{}", line);
    }
    println!();
}

/// Heading and numbered step lines, ready to print
pub fn next_steps_lines(steps: &[String]) -> Vec<String> {
    let mut lines = vec!["  Next steps".to_string(), String::new()];
    lines.extend(
        steps
            .iter()
            .enumerate()
            .map(|(i, step)| format!("  {}.  {}", i + 1, step)),
    );
    lines
}
