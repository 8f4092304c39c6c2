//! Template discovery under the templates root

use crate::context::RunContext;
use crate::stack::StackKey;
use std::io;
use tokio::fs;

/// A discoverable template option
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateEntry {
    /// Human-readable label
    pub name: String,
    /// Directory name under the templates root
    pub value: String,
}

impl TemplateEntry {
    pub fn from_dir_name(dir_name: &str, prefix: &str) -> Self {
        Self {
            name: display_label(dir_name, prefix),
            value: dir_name.to_string(),
        }
    }
}

/// Templates found for a stack, plus anything that went wrong while looking
#[derive(Debug, Clone, Default)]
pub struct Resolution {
    pub entries: Vec<TemplateEntry>,
    pub warnings: Vec<String>,
}

impl Resolution {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// List the templates available for `stack`
///
/// Never fails: a missing root yields nothing, other I/O problems become
/// warnings and scanning keeps whatever it already found. Entries are sorted
/// by directory name.
pub async fn resolve_templates(ctx: &RunContext, stack: &StackKey) -> Resolution {
    let prefix = stack.prefix();
    let root = &ctx.templates_root;
    let mut resolution = Resolution::default();

    log::debug!(
        "Resolving templates for {} (prefix {:?}) in {}",
        stack,
        prefix,
        root.display()
    );

    let mut dir = match fs::read_dir(root).await {
        Ok(dir) => dir,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::debug!("Templates root {} does not exist", root.display());
            return resolution;
        }
        Err(e) => {
            resolution.warnings.push(format!(
                "Could not read templates from {}: {}",
                root.display(),
                e
            ));
            return resolution;
        }
    };

    loop {
        let entry = match dir.next_entry().await {
            Ok(Some(entry)) => entry,
            Ok(None) => break,
            Err(e) => {
                resolution.warnings.push(format!(
                    "Stopped reading {} early: {}",
                    root.display(),
                    e
                ));
                break;
            }
        };

        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            log::trace!("Skipping non UTF-8 entry {:?}", file_name);
            continue;
        };
        if !name.starts_with(&prefix) {
            log::trace!("Skipping {} (no {} prefix)", name, prefix);
            continue;
        }

        // Follows symlinks so a linked template directory still counts
        match fs::metadata(entry.path()).await {
            Ok(meta) if meta.is_dir() => {
                log::debug!("Found template {}", name);
                resolution.entries.push(TemplateEntry::from_dir_name(name, &prefix));
            }
            Ok(_) => log::trace!("Skipping {} (not a directory)", name),
            Err(e) => resolution
                .warnings
                .push(format!("Could not inspect {}: {}", entry.path().display(), e)),
        }
    }

    resolution.entries.sort_by(|a, b| a.value.cmp(&b.value));
    resolution
}

/// Turn a template directory name into a label
///
/// `react_email_google` with prefix `react_` becomes `Email + Google`.
pub fn display_label(dir_name: &str, prefix: &str) -> String {
    let rest = dir_name.strip_prefix(prefix).unwrap_or(dir_name);
    let words: Vec<String> = rest
        .split('_')
        .filter(|w| !w.is_empty())
        .map(title_case)
        .collect();

    if words.is_empty() {
        dir_name.to_string()
    } else {
        words.join(" + ")
    }
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
