//! How a run ended, and the exit code that goes with it

use crate::error::{PromptError, ScaffoldError};
use crate::stack::StackKey;
use crate::templates::{ScaffoldReport, TemplateEntry};

/// Exit code for Ctrl+C, matching shell convention
pub const EXIT_INTERRUPTED: u8 = 130;

/// Final state of one invocation
#[derive(Debug)]
pub enum Outcome {
    /// The project was created
    Created {
        project_name: String,
        template: TemplateEntry,
        report: ScaffoldReport,
    },
    /// Nothing to install for the chosen stack
    NoTemplates { stack: StackKey },
    /// Copying or customizing the template failed
    ScaffoldFailed(ScaffoldError),
    /// Prompts could not be shown in this terminal
    PromptUnsupported(PromptError),
    /// The user interrupted a prompt
    Cancelled,
    Unexpected(anyhow::Error),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Created { .. })
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            Outcome::Created { .. } => 0,
            Outcome::Cancelled => EXIT_INTERRUPTED,
            _ => 1,
        }
    }

    /// One-line summary shown to the user
    pub fn headline(&self) -> String {
        match self {
            Outcome::Created {
                project_name,
                template,
                ..
            } => format!(
                "Project \"{}\" created using \"{}\" template.",
                project_name, template.name
            ),
            Outcome::NoTemplates { stack } => format!(
                "No templates available for {} yet.",
                stack.key()
            ),
            Outcome::ScaffoldFailed(_) => "Failed to create project from template.".to_string(),
            Outcome::PromptUnsupported(_) => {
                "Prompt could not be rendered in the current environment. Run this command in an interactive terminal.".to_string()
            }
            Outcome::Cancelled => "Setup cancelled.".to_string(),
            Outcome::Unexpected(e) => format!("An unexpected error occurred: {:#}", e),
        }
    }

    /// Underlying error chain, if any, for detail lines
    pub fn detail(&self) -> Option<String> {
        match self {
            Outcome::ScaffoldFailed(e) => Some(error_chain(e)),
            Outcome::PromptUnsupported(e) => Some(error_chain(e)),
            _ => None,
        }
    }
}

impl From<PromptError> for Outcome {
    fn from(err: PromptError) -> Self {
        match err {
            PromptError::Interrupted => Outcome::Cancelled,
            PromptError::Unsupported(_) => Outcome::PromptUnsupported(err),
            other => Outcome::Unexpected(other.into()),
        }
    }
}

fn error_chain(err: &dyn std::error::Error) -> String {
    let mut parts = vec![err.to_string()];
    let mut source = err.source();
    while let Some(cause) = source {
        parts.push(cause.to_string());
        source = cause.source();
    }
    parts.join(": ")
}
