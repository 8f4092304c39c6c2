//! CLI prompts using cliclack (Charm-style inline prompts)
//!
//! This module is optional and only available when the `tui` feature is enabled.

#[cfg(feature = "tui")]
mod prompts;
#[cfg(feature = "tui")]
mod report;

#[cfg(feature = "tui")]
pub use prompts::{create_project, run, ClackPrompter};
#[cfg(feature = "tui")]
pub use report::{next_steps_lines, report};
