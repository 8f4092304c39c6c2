//! Authstack Core - Shared library for the `create-authstack` scaffolding CLI
//!
//! This library turns a handful of interactive answers (project name, package
//! name, language, framework, template) into a new project directory copied
//! from a local templates root.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Validation, template resolution, directory copying
//!   and `package.json` patching. These are plain functions of a [`RunContext`].
//! - **Layer 2: Workflow Orchestration** - [`ProductConfig`], the [`questions`] model with
//!   its [`Prompter`] seam, and the [`Outcome`] of a run.
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use authstack_core::{templates, RunContext, StackKey, Framework, Language};
//!
//! let ctx = RunContext::new(std::env::current_dir()?, "templates".into());
//! let stack = StackKey::new(Framework::React, Language::JavaScript);
//! let resolution = templates::resolve_templates(&ctx, &stack).await;
//! let entry = &resolution.entries[0];
//! templates::scaffold_project(&ctx, &entry.value, "my-app", "my-app").await?;
//! ```

pub mod context;
pub mod error;
pub mod product;
pub mod questions;
pub mod report;
pub mod stack;
pub mod templates;
pub mod validate;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use context::RunContext;
pub use error::{PromptError, ScaffoldError, ValidationError};
pub use product::ProductConfig;
pub use questions::{Answers, Prompter};
pub use report::Outcome;
pub use stack::{Framework, Language, StackKey};
pub use templates::{resolve_templates, scaffold_project, ScaffoldReport, TemplateEntry};

#[cfg(feature = "tui")]
pub use tui::run;
