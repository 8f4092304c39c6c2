//! Template resolution, copying and customization
//!
//! This module provides:
//! - Template discovery by stack prefix (resolver)
//! - Recursive directory copying (copier)
//! - `package.json` name rewriting (package_json)
//! - [`scaffold_project`], which ties copying and rewriting together

pub mod copier;
pub mod package_json;
pub mod resolver;

use crate::context::RunContext;
use crate::error::ScaffoldError;
use std::io;
use std::path::PathBuf;
use tokio::fs;

pub use copier::copy_dir_contents;
pub use package_json::rename_package;
pub use resolver::{display_label, resolve_templates, Resolution, TemplateEntry};

/// What a successful scaffold produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldReport {
    pub destination: PathBuf,
    pub files_copied: Vec<String>,
    /// Whether a root `package.json` had its name rewritten
    pub package_renamed: bool,
}

/// Materialize `template` as `ctx.cwd/project_name`
///
/// The destination must not exist; it is created atomically before anything is
/// copied so an existing directory is never touched. A failure part way
/// through leaves whatever was already written in place.
pub async fn scaffold_project(
    ctx: &RunContext,
    template: &str,
    project_name: &str,
    package_name: &str,
) -> Result<ScaffoldReport, ScaffoldError> {
    let source = ctx.template_path(template);
    let destination = ctx.project_path(project_name);

    match fs::metadata(&source).await {
        Ok(meta) if meta.is_dir() => {}
        _ => return Err(ScaffoldError::TemplateNotFound(source)),
    }

    log::debug!(
        "Scaffolding {} from {}",
        destination.display(),
        source.display()
    );

    fs::create_dir(&destination).await.map_err(|e| {
        if e.kind() == io::ErrorKind::AlreadyExists {
            ScaffoldError::DestinationExists(destination.clone())
        } else {
            ScaffoldError::io("Failed to create directory", &destination, e)
        }
    })?;

    let files_copied = copy_dir_contents(&source, &destination).await?;
    let package_renamed = rename_package(&destination, package_name).await?;

    Ok(ScaffoldReport {
        destination,
        files_copied,
        package_renamed,
    })
}
