//! create-authstack - Project scaffolding for React + Express authentication starters

use authstack_core::context::{executable_templates_dir, TEMPLATES_DIR_NAME};
use authstack_core::report::EXIT_INTERRUPTED;
use authstack_core::{ProductConfig, RunContext};
use clap::{ArgAction, CommandFactory, FromArgMatches, Parser};
use log::LevelFilter;
use std::path::PathBuf;
use std::process::ExitCode;

/// authstack product configuration
#[derive(Clone)]
pub struct AuthstackConfig;

impl ProductConfig for AuthstackConfig {
    fn name(&self) -> &'static str {
        "create-authstack"
    }

    fn display_name(&self) -> &'static str {
        "create-authstack"
    }

    fn cli_description(&self) -> &'static str {
        "Scaffold a React frontend and Express/Mongo backend with authentication"
    }

    fn template_dir_env(&self) -> &'static str {
        "AUTHSTACK_TEMPLATE_DIR"
    }

    fn next_steps(&self, project_name: &str) -> Vec<String> {
        vec![
            format!("cd {}", project_name),
            "npm install (in Backend/ and Frontend/)".to_string(),
            "Copy .env.example to .env and fill in your MongoDB, JWT and OAuth settings"
                .to_string(),
            "npm run dev".to_string(),
        ]
    }
}

// Name and help text come from the product config, see `cli_command`
#[derive(Parser, Debug)]
#[command(version)]
pub struct Args {
    /// Local directory to use for templates instead of the bundled ones (for development use)
    #[arg(long = "template-dir")]
    pub template_dir: Option<PathBuf>,

    /// Increase diagnostic output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Clap command carrying the product's name and description
fn cli_command<C: ProductConfig>(config: &C) -> clap::Command {
    Args::command()
        .name(config.name())
        .bin_name(config.name())
        .about(config.cli_description())
}

/// Map `-v` occurrences to a log level
fn log_level_from_verbose(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Error,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Template roots tried when neither the flag nor the env var is set
fn default_template_dirs() -> Vec<PathBuf> {
    let mut dirs = Vec::new();
    if let Some(dir) = executable_templates_dir() {
        dirs.push(dir);
    }
    // Source checkout, for `cargo run`
    dirs.push(
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join(TEMPLATES_DIR_NAME),
    );
    dirs
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(EXIT_INTERRUPTED as i32);
    })
    .ok();

    let config = AuthstackConfig;
    let matches = cli_command(&config).get_matches();
    let args = Args::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());
    env_logger::Builder::new()
        .filter_level(log_level_from_verbose(args.verbose))
        .init();

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let ctx = RunContext::from_config(&config, cwd, args.template_dir, &default_template_dirs());
    log::info!("Using templates from {}", ctx.templates_root.display());

    let outcome = authstack_core::run(&config, &ctx).await;

    if let Err(e) = authstack_core::tui::report(&config, &outcome) {
        log::error!("Failed to print result: {}", e);
    }

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    ExitCode::from(outcome.exit_code())
}
