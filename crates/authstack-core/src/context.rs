//! Explicit run context threaded through every component

use crate::product::ProductConfig;
use std::path::{Path, PathBuf};

/// Name of the templates directory looked up next to the executable
pub const TEMPLATES_DIR_NAME: &str = "templates";

/// Everything a run needs to know about its environment
///
/// Built once at startup. The resolver and scaffolder read paths from here
/// instead of consulting the process environment themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunContext {
    /// Directory the new project is created in
    pub cwd: PathBuf,
    /// Directory holding one subdirectory per template
    pub templates_root: PathBuf,
}

impl RunContext {
    pub fn new(cwd: PathBuf, templates_root: PathBuf) -> Self {
        Self {
            cwd,
            templates_root,
        }
    }

    /// Build the context for a product
    ///
    /// The templates root is taken from, in order: `template_dir`, the
    /// product's environment variable, then the first existing entry of
    /// `fallbacks` (or the first fallback if none exist).
    pub fn from_config<C: ProductConfig>(
        config: &C,
        cwd: PathBuf,
        template_dir: Option<PathBuf>,
        fallbacks: &[PathBuf],
    ) -> Self {
        let env_dir = std::env::var_os(config.template_dir_env())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        let templates_root = template_dir
            .or(env_dir)
            .map(|p| absolutize(&cwd, p))
            .unwrap_or_else(|| pick_fallback(fallbacks));

        Self::new(cwd, templates_root)
    }

    /// Path a project with this name would be created at
    pub fn project_path(&self, project_name: &str) -> PathBuf {
        self.cwd.join(project_name)
    }

    /// Path of a template directory under the templates root
    pub fn template_path(&self, template: &str) -> PathBuf {
        self.templates_root.join(template)
    }
}

/// Default lookup locations: `templates/` beside the executable
pub fn executable_templates_dir() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(TEMPLATES_DIR_NAME)))
}

fn pick_fallback(fallbacks: &[PathBuf]) -> PathBuf {
    fallbacks
        .iter()
        .find(|p| p.is_dir())
        .or_else(|| fallbacks.first())
        .cloned()
        .unwrap_or_else(|| PathBuf::from(TEMPLATES_DIR_NAME))
}

fn absolutize(base: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct TestConfig;

    impl ProductConfig for TestConfig {
        fn name(&self) -> &'static str {
            "test"
        }
        fn display_name(&self) -> &'static str {
            "Test"
        }
        fn cli_description(&self) -> &'static str {
            "test"
        }
        fn template_dir_env(&self) -> &'static str {
            "AUTHSTACK_CONTEXT_TEST_UNSET_VAR"
        }
        fn next_steps(&self, _project_name: &str) -> Vec<String> {
            Vec::new()
        }
    }

    #[test]
    fn test_explicit_dir_wins_and_is_made_absolute() {
        let cwd = PathBuf::from("/work");
        let ctx = RunContext::from_config(
            &TestConfig,
            cwd,
            Some(PathBuf::from("my-templates")),
            &[PathBuf::from("/opt/templates")],
        );
        assert_eq!(ctx.templates_root, PathBuf::from("/work/my-templates"));
    }

    #[test]
    fn test_fallback_prefers_existing_directory() {
        let existing = tempfile::tempdir().unwrap();
        let ctx = RunContext::from_config(
            &TestConfig,
            PathBuf::from("/work"),
            None,
            &[
                PathBuf::from("/definitely/not/here"),
                existing.path().to_path_buf(),
            ],
        );
        assert_eq!(ctx.templates_root, existing.path());
    }

    #[test]
    fn test_fallback_uses_first_when_none_exist() {
        let ctx = RunContext::from_config(
            &TestConfig,
            PathBuf::from("/work"),
            None,
            &[PathBuf::from("/nope/a"), PathBuf::from("/nope/b")],
        );
        assert_eq!(ctx.templates_root, PathBuf::from("/nope/a"));
    }

    #[test]
    fn test_project_path_joins_cwd() {
        let ctx = RunContext::new(PathBuf::from("/work"), PathBuf::from("/t"));
        assert_eq!(ctx.project_path("app"), PathBuf::from("/work/app"));
        assert_eq!(ctx.template_path("react_x"), PathBuf::from("/t/react_x"));
    }
}
