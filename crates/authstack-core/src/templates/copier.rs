//! Recursive template directory copying

use crate::error::ScaffoldError;
use std::path::Path;
use tokio::fs;
use walkdir::WalkDir;

/// Copy the contents of `source` into the existing directory `target`
///
/// Relative structure is preserved and permission bits travel with each file.
/// Returns the relative paths of copied files in walk order.
pub async fn copy_dir_contents(source: &Path, target: &Path) -> Result<Vec<String>, ScaffoldError> {
    let mut copied_files = Vec::new();

    for entry in WalkDir::new(source).min_depth(1).sort_by_file_name() {
        let entry = entry?;
        let relative = entry
            .path()
            .strip_prefix(source)
            .unwrap_or_else(|_| entry.path());
        let target_path = target.join(relative);
        let file_type = entry.file_type();

        if file_type.is_dir() {
            fs::create_dir(&target_path)
                .await
                .map_err(|e| ScaffoldError::io("Failed to create directory", &target_path, e))?;
            continue;
        }

        if file_type.is_symlink() {
            copy_symlink(entry.path(), &target_path).await?;
        } else {
            fs::copy(entry.path(), &target_path)
                .await
                .map_err(|e| ScaffoldError::io("Failed to copy", entry.path(), e))?;
        }

        log::trace!("Copied {}", relative.display());
        copied_files.push(relative.to_string_lossy().replace('\\', "/"));
    }

    Ok(copied_files)
}

#[cfg(unix)]
async fn copy_symlink(source: &Path, target: &Path) -> Result<(), ScaffoldError> {
    let link = fs::read_link(source)
        .await
        .map_err(|e| ScaffoldError::io("Failed to read link", source, e))?;
    fs::symlink(&link, target)
        .await
        .map_err(|e| ScaffoldError::io("Failed to create link", target, e))
}

#[cfg(not(unix))]
async fn copy_symlink(source: &Path, target: &Path) -> Result<(), ScaffoldError> {
    fs::copy(source, target)
        .await
        .map(|_| ())
        .map_err(|e| ScaffoldError::io("Failed to copy", source, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_copies_nested_tree() {
        let src = tempfile::tempdir().unwrap();
        let dst = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(src.path().join("Backend/routes")).unwrap();
        std::fs::create_dir_all(src.path().join("Frontend/src/empty")).unwrap();
        std::fs::write(src.path().join("Backend/index.js"), "app.listen()").unwrap();
        std::fs::write(src.path().join("Backend/routes/auth.js"), "router").unwrap();
        std::fs::write(src.path().join(".env.example"), "PORT=5000").unwrap();

        let files = copy_dir_contents(src.path(), dst.path()).await.unwrap();

        assert_eq!(
            files,
            vec![".env.example", "Backend/index.js", "Backend/routes/auth.js"]
        );
        assert!(!dir_diff::is_different(src.path(), dst.path()).unwrap());
        assert!(dst.path().join("Frontend/src/empty").is_dir());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_preserves_executable_bit() {
        use std::os::unix::fs::PermissionsExt;

        let src = tempfile::tempdir().unwrap();
        let dst = tempfile::tempdir().unwrap();
        let script = src.path().join("setup.sh");
        std::fs::write(&script, "#!/bin/sh\n").unwrap();
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

        copy_dir_contents(src.path(), dst.path()).await.unwrap();

        let mode = std::fs::metadata(dst.path().join("setup.sh"))
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o111, 0o111);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_recreates_symlinks() {
        let src = tempfile::tempdir().unwrap();
        let dst = tempfile::tempdir().unwrap();
        std::fs::write(src.path().join("real.txt"), "x").unwrap();
        std::os::unix::fs::symlink("real.txt", src.path().join("link.txt")).unwrap();

        copy_dir_contents(src.path(), dst.path()).await.unwrap();

        let link = std::fs::read_link(dst.path().join("link.txt")).unwrap();
        assert_eq!(link, std::path::PathBuf::from("real.txt"));
    }

    #[tokio::test]
    async fn test_missing_source_fails() {
        let dst = tempfile::tempdir().unwrap();
        let missing = dst.path().join("nope");

        let err = copy_dir_contents(&missing, dst.path()).await.unwrap_err();
        assert!(matches!(err, ScaffoldError::Walk(_)));
    }
}
