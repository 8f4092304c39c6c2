//! Question model and the prompt sequence
//!
//! Every question the CLI asks is described by a closed [`Question`] value.
//! A [`Prompter`] renders questions and returns raw answers; the [`Sequencer`]
//! owns the order, re-checks every answer and asks again on rejection, so the
//! same rules hold whichever prompter is plugged in.

use crate::context::RunContext;
use crate::error::{PromptError, ValidationError};
use crate::stack::{Framework, Language, StackKey};
use crate::templates::TemplateEntry;
use crate::validate;

/// Validation hook for free-text questions
pub type Validator = fn(&str, &RunContext) -> Result<(), ValidationError>;

/// Which answer a question fills in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionId {
    ProjectName,
    PackageName,
    Language,
    Framework,
    Template,
}

/// One selectable option of a single-choice question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub value: String,
    pub label: String,
    pub hint: String,
    pub available: bool,
}

impl Choice {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            hint: String::new(),
            available: true,
        }
    }

    /// Mark this option as not selectable yet
    pub fn coming_soon(mut self) -> Self {
        self.available = false;
        self.hint = "coming soon".to_string();
        self
    }
}

#[derive(Debug, Clone)]
pub enum QuestionKind {
    Text {
        validator: Validator,
        default: Option<String>,
    },
    SingleChoice {
        options: Vec<Choice>,
    },
}

#[derive(Debug, Clone)]
pub struct Question {
    pub id: QuestionId,
    pub prompt: &'static str,
    pub kind: QuestionKind,
}

impl Question {
    pub fn project_name() -> Self {
        Self {
            id: QuestionId::ProjectName,
            prompt: "Project name",
            kind: QuestionKind::Text {
                validator: validate::validate_project_name,
                default: None,
            },
        }
    }

    pub fn package_name(suggestion: Option<String>) -> Self {
        Self {
            id: QuestionId::PackageName,
            prompt: "Package name",
            kind: QuestionKind::Text {
                validator: validate::validate_package_name,
                default: suggestion,
            },
        }
    }

    pub fn language() -> Self {
        let options = Language::ALL
            .into_iter()
            .map(|lang| {
                let choice = Choice::new(lang.token(), lang.display_name());
                if lang.is_available() {
                    choice
                } else {
                    choice.coming_soon()
                }
            })
            .collect();
        Self {
            id: QuestionId::Language,
            prompt: "Select a language",
            kind: QuestionKind::SingleChoice { options },
        }
    }

    pub fn framework() -> Self {
        let options = Framework::ALL
            .into_iter()
            .map(|fw| {
                let choice = Choice::new(fw.token(), fw.display_name());
                if fw.is_available() {
                    choice
                } else {
                    choice.coming_soon()
                }
            })
            .collect();
        Self {
            id: QuestionId::Framework,
            prompt: "Select a framework",
            kind: QuestionKind::SingleChoice { options },
        }
    }

    pub fn template(candidates: &[TemplateEntry]) -> Self {
        let options = candidates
            .iter()
            .map(|entry| Choice::new(entry.value.clone(), entry.name.clone()))
            .collect();
        Self {
            id: QuestionId::Template,
            prompt: "Select a template combination",
            kind: QuestionKind::SingleChoice { options },
        }
    }

    /// Check a raw answer against this question's rules
    pub fn check(&self, answer: &str, ctx: &RunContext) -> Result<(), String> {
        match &self.kind {
            QuestionKind::Text { validator, .. } => {
                validator(answer, ctx).map_err(|e| e.to_string())
            }
            QuestionKind::SingleChoice { options } => {
                match options.iter().find(|c| c.value == answer) {
                    Some(choice) if choice.available => Ok(()),
                    Some(choice) => Err(format!("{} is coming soon", choice.label)),
                    None => Err(format!("\"{}\" is not one of the options", answer)),
                }
            }
        }
    }
}

/// Renders questions and returns raw answers
pub trait Prompter {
    /// Ask one question and return the raw answer (a choice's `value` for
    /// single-choice questions)
    fn ask(&mut self, question: &Question, ctx: &RunContext) -> Result<String, PromptError>;

    /// Tell the user an answer was rejected
    fn warn(&mut self, message: &str) -> Result<(), PromptError>;
}

/// The user's responses for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answers {
    pub project_name: String,
    pub package_name: String,
    pub language: Language,
    pub framework: Framework,
}

impl Answers {
    pub fn stack(&self) -> StackKey {
        StackKey::new(self.framework, self.language)
    }
}

/// Asks the fixed sequence of questions through a [`Prompter`]
pub struct Sequencer<'a, P: Prompter> {
    prompter: &'a mut P,
    ctx: &'a RunContext,
}

impl<'a, P: Prompter> Sequencer<'a, P> {
    pub fn new(prompter: &'a mut P, ctx: &'a RunContext) -> Self {
        Self { prompter, ctx }
    }

    /// Ask until the answer passes the question's rules
    fn ask_checked(&mut self, question: &Question) -> Result<String, PromptError> {
        loop {
            let answer = self.prompter.ask(question, self.ctx)?;
            match question.check(&answer, self.ctx) {
                Ok(()) => return Ok(answer),
                Err(message) => self.prompter.warn(&message)?,
            }
        }
    }

    pub fn ask_project_name(&mut self) -> Result<String, PromptError> {
        let answer = self.ask_checked(&Question::project_name())?;
        Ok(answer.trim().to_string())
    }

    pub fn ask_package_name(&mut self, project_name: &str) -> Result<String, PromptError> {
        let question = Question::package_name(validate::suggest_package_name(project_name));
        self.ask_checked(&question)
    }

    pub fn ask_language(&mut self) -> Result<Language, PromptError> {
        let token = self.ask_checked(&Question::language())?;
        Language::from_token(&token).ok_or(PromptError::UnknownChoice(token))
    }

    pub fn ask_framework(&mut self) -> Result<Framework, PromptError> {
        let token = self.ask_checked(&Question::framework())?;
        Framework::from_token(&token).ok_or(PromptError::UnknownChoice(token))
    }

    /// Ask which template to use; `candidates` must not be empty
    pub fn ask_template(&mut self, candidates: &[TemplateEntry]) -> Result<String, PromptError> {
        debug_assert!(!candidates.is_empty(), "caller must handle empty template lists");
        self.ask_checked(&Question::template(candidates))
    }

    /// Ask everything up to (not including) the template choice
    pub fn ask_all(&mut self) -> Result<Answers, PromptError> {
        let project_name = self.ask_project_name()?;
        let package_name = self.ask_package_name(&project_name)?;
        let language = self.ask_language()?;
        let framework = self.ask_framework()?;
        Ok(Answers {
            project_name,
            package_name,
            language,
            framework,
        })
    }
}
