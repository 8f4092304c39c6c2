//! Validation of typed answers

use crate::context::RunContext;
use crate::error::ValidationError;
use regex::Regex;
use std::sync::LazyLock;

/// Characters that break paths on at least one supported platform
///
/// Control characters are rejected as well.
pub const FORBIDDEN_NAME_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

static PACKAGE_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9@._-]+$").expect("package name pattern is valid"));

/// Validate a project (directory) name against the current directory
///
/// Surrounding whitespace is ignored; the trimmed name is what gets created.
pub fn validate_project_name(input: &str, ctx: &RunContext) -> Result<(), ValidationError> {
    let name = input.trim();
    if name.is_empty() {
        return Err(ValidationError::Empty {
            field: "Project name",
        });
    }
    if name.contains(FORBIDDEN_NAME_CHARS) || name.chars().any(char::is_control) {
        return Err(ValidationError::InvalidCharacters);
    }
    if name == "." || name == ".." {
        return Err(ValidationError::Reserved(name.to_string()));
    }
    // symlink_metadata so that dangling links still count as taken
    if ctx.project_path(name).symlink_metadata().is_ok() {
        return Err(ValidationError::AlreadyExists(name.to_string()));
    }
    Ok(())
}

/// Validate a package name for the generated `package.json`
pub fn validate_package_name(input: &str, _ctx: &RunContext) -> Result<(), ValidationError> {
    if input.trim().is_empty() {
        return Err(ValidationError::Empty {
            field: "Package name",
        });
    }
    if !PACKAGE_NAME_RE.is_match(input) {
        return Err(ValidationError::InvalidPackageName);
    }
    Ok(())
}

/// Derive a package name suggestion from a project name
///
/// Returns `None` when nothing valid is left.
pub fn suggest_package_name(project_name: &str) -> Option<String> {
    let lowered = project_name.trim().to_lowercase();
    let dashed = lowered.split_whitespace().collect::<Vec<_>>().join("-");
    let suggestion: String = dashed
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || "@._-".contains(*c))
        .collect();

    PACKAGE_NAME_RE.is_match(&suggestion).then_some(suggestion)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn ctx_in(dir: &std::path::Path) -> RunContext {
        RunContext::new(dir.to_path_buf(), PathBuf::from("templates"))
    }

    #[test]
    fn test_project_name_rejects_each_forbidden_char() {
        let tmp = tempfile::tempdir().unwrap();
        let ctx = ctx_in(tmp.path());
        for c in FORBIDDEN_NAME_CHARS {
            for name in [format!("{c}"), format!("my{c}app"), format!("app{c}")] {
                assert_eq!(
                    validate_project_name(&name, &ctx),
                    Err(ValidationError::InvalidCharacters),
                    "accepted {name:?}"
                );
            }
        }
    }

    #[test]
    fn test_project_name_rejects_control_chars() {
        let tmp = tempfile::tempdir().unwrap();
        let ctx = ctx_in(tmp.path());
        for name in ["a\0b", "app\u{7}", "line\nbreak", "\u{1b}[31mred"] {
            assert_eq!(
                validate_project_name(name, &ctx),
                Err(ValidationError::InvalidCharacters),
                "accepted {name:?}"
            );
        }
    }

    #[test]
    fn test_empty_and_whitespace_rejected_by_both() {
        let tmp = tempfile::tempdir().unwrap();
        let ctx = ctx_in(tmp.path());
        for input in ["", " ", "\t", "  \n "] {
            assert!(matches!(
                validate_project_name(input, &ctx),
                Err(ValidationError::Empty { .. })
            ));
            assert!(matches!(
                validate_package_name(input, &ctx),
                Err(ValidationError::Empty { .. })
            ));
        }
    }

    #[test]
    fn test_project_name_rejects_existing_entry() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::create_dir(tmp.path().join("taken")).unwrap();
        std::fs::write(tmp.path().join("file.txt"), "x").unwrap();
        let ctx = ctx_in(tmp.path());

        assert_eq!(
            validate_project_name("taken", &ctx),
            Err(ValidationError::AlreadyExists("taken".into()))
        );
        assert_eq!(
            validate_project_name(" file.txt ", &ctx),
            Err(ValidationError::AlreadyExists("file.txt".into()))
        );
        assert_eq!(validate_project_name("fresh", &ctx), Ok(()));
    }

    #[test]
    fn test_project_name_rejects_dot_names() {
        let tmp = tempfile::tempdir().unwrap();
        let ctx = ctx_in(tmp.path());
        assert!(matches!(
            validate_project_name("..", &ctx),
            Err(ValidationError::Reserved(_))
        ));
        assert!(matches!(
            validate_project_name(".", &ctx),
            Err(ValidationError::Reserved(_))
        ));
        assert_eq!(validate_project_name(".hidden-app", &ctx), Ok(()));
    }

    #[test]
    fn test_package_name_accepts_registry_names() {
        let ctx = ctx_in(std::path::Path::new("."));
        for name in ["my-app", "app2", "@scope", "a.b_c-d", "@org.tools_x-1", "0"] {
            assert_eq!(validate_package_name(name, &ctx), Ok(()), "rejected {name:?}");
        }
    }

    #[test]
    fn test_package_name_rejects_uppercase_and_spaces() {
        let ctx = ctx_in(std::path::Path::new("."));
        for name in ["MyApp", "my app", "app ", "aB", "my/app", "café"] {
            assert_eq!(
                validate_package_name(name, &ctx),
                Err(ValidationError::InvalidPackageName),
                "accepted {name:?}"
            );
        }
    }

    #[test]
    fn test_suggest_package_name() {
        assert_eq!(suggest_package_name("My Cool App").as_deref(), Some("my-cool-app"));
        assert_eq!(suggest_package_name("auth_v2").as_deref(), Some("auth_v2"));
        assert_eq!(suggest_package_name("Démo (beta)").as_deref(), Some("dmo-beta"));
        assert_eq!(suggest_package_name("日本"), None);
    }
}
