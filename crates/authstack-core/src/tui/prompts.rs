//! Charm-style CLI prompts using cliclack

use crate::context::RunContext;
use crate::error::PromptError;
use crate::product::ProductConfig;
use crate::questions::{Prompter, Question, QuestionKind, Sequencer};
use crate::report::Outcome;
use crate::templates::{resolve_templates, scaffold_project};
use anyhow::Result;
use std::io::IsTerminal;

/// [`Prompter`] that renders questions with cliclack
pub struct ClackPrompter {
    _private: (),
}

impl ClackPrompter {
    /// Fails with [`PromptError::Unsupported`] unless stdin and stderr are terminals
    pub fn new() -> Result<Self, PromptError> {
        if !std::io::stdin().is_terminal() || !console::Term::stderr().is_term() {
            return Err(PromptError::Unsupported(None));
        }
        Ok(Self { _private: () })
    }
}

impl Prompter for ClackPrompter {
    fn ask(&mut self, question: &Question, ctx: &RunContext) -> Result<String, PromptError> {
        match &question.kind {
            QuestionKind::Text { validator, default } => {
                let validator = *validator;
                let ctx = ctx.clone();
                let mut input = cliclack::input(question.prompt)
                    .validate(move |value: &String| validator(value, &ctx));
                if let Some(default) = default {
                    input = input.placeholder(default).default_input(default);
                }
                Ok(input.interact()?)
            }
            QuestionKind::SingleChoice { options } => {
                // Indices as values to avoid borrow issues
                let mut select = cliclack::select(question.prompt);
                for (idx, choice) in options.iter().enumerate() {
                    select = select.item(idx, &choice.label, &choice.hint);
                }
                let selected_idx: usize = select.interact()?;

                options
                    .get(selected_idx)
                    .map(|choice| choice.value.clone())
                    .ok_or_else(|| PromptError::UnknownChoice(selected_idx.to_string()))
            }
        }
    }

    fn warn(&mut self, message: &str) -> Result<(), PromptError> {
        cliclack::log::warning(message)?;
        Ok(())
    }
}

/// Run the CLI with interactive prompts
pub async fn run<C: ProductConfig>(config: &C, ctx: &RunContext) -> Outcome {
    let mut prompter = match ClackPrompter::new() {
        Ok(prompter) => prompter,
        Err(e) => return e.into(),
    };

    if let Err(e) = cliclack::intro(config.display_name()) {
        return PromptError::from(e).into();
    }

    create_project(ctx, &mut prompter).await
}

/// Ask every question, resolve templates and scaffold the chosen one
pub async fn create_project<P: Prompter>(ctx: &RunContext, prompter: &mut P) -> Outcome {
    match try_create_project(ctx, prompter).await {
        Ok(outcome) => outcome,
        Err(err) => match err.downcast::<PromptError>() {
            Ok(prompt_err) => prompt_err.into(),
            Err(other) => Outcome::Unexpected(other),
        },
    }
}

async fn try_create_project<P: Prompter>(ctx: &RunContext, prompter: &mut P) -> Result<Outcome> {
    // Step 1: Project name, package name, language, framework
    let answers = Sequencer::new(&mut *prompter, ctx).ask_all()?;
    let stack = answers.stack();

    // Step 2: Find templates for the stack
    let resolution = resolve_templates(ctx, &stack).await;
    for warning in &resolution.warnings {
        prompter.warn(warning)?;
    }
    if resolution.is_empty() {
        return Ok(Outcome::NoTemplates { stack });
    }

    // Step 3: Pick one
    let chosen = Sequencer::new(&mut *prompter, ctx).ask_template(&resolution.entries)?;
    let template = resolution
        .entries
        .into_iter()
        .find(|entry| entry.value == chosen)
        .ok_or(PromptError::UnknownChoice(chosen))?;

    // Step 4: Create project
    let spinner = cliclack::spinner();
    spinner.start("Creating project...");

    match scaffold_project(
        ctx,
        &template.value,
        &answers.project_name,
        &answers.package_name,
    )
    .await
    {
        Ok(report) => {
            spinner.stop(format!(
                "Created {} files in {}",
                report.files_copied.len(),
                report.destination.display()
            ));
            Ok(Outcome::Created {
                project_name: answers.project_name,
                template,
                report,
            })
        }
        Err(e) => {
            spinner.stop("Failed to create project");
            Ok(Outcome::ScaffoldFailed(e))
        }
    }
}
