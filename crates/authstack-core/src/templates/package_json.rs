//! `package.json` name rewriting

use crate::error::ScaffoldError;
use serde_json::Value;
use std::io;
use std::path::Path;
use tokio::fs;

pub const PACKAGE_JSON: &str = "package.json";

/// Set the `name` field of `dir/package.json`
///
/// Returns `Ok(false)` when there is no `package.json`. Key order and all
/// other fields are kept; output uses 2-space indentation.
pub async fn rename_package(dir: &Path, package_name: &str) -> Result<bool, ScaffoldError> {
    let path = dir.join(PACKAGE_JSON);

    let content = match fs::read_to_string(&path).await {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::debug!("No {} in {}, leaving names alone", PACKAGE_JSON, dir.display());
            return Ok(false);
        }
        Err(e) => return Err(ScaffoldError::io("Failed to read", &path, e)),
    };

    let mut manifest: Value =
        serde_json::from_str(&content).map_err(|source| ScaffoldError::PackageJson {
            path: path.clone(),
            source,
        })?;

    let Some(fields) = manifest.as_object_mut() else {
        return Err(ScaffoldError::PackageJsonShape(path));
    };
    fields.insert("name".to_string(), Value::String(package_name.to_string()));

    let mut rendered =
        serde_json::to_string_pretty(&manifest).map_err(|source| ScaffoldError::PackageJson {
            path: path.clone(),
            source,
        })?;
    rendered.push('\n');

    fs::write(&path, rendered)
        .await
        .map_err(|e| ScaffoldError::io("Failed to write", &path, e))?;

    log::debug!("Set package name to {} in {}", package_name, path.display());
    Ok(true)
}
