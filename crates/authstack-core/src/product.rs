//! Product configuration trait for the CLI binary
//!
//! The core library knows nothing about the product it is embedded in. The
//! binary implements this trait to describe its identity and the instructions
//! shown once a project has been created.

/// Configuration trait for the scaffolding product
///
/// Implementors define:
/// - Product identity (name, display name)
/// - Where templates are looked up
/// - Post-setup instructions
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Internal product name (used for CLI command, env vars)
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// CLI description shown in help text
    fn cli_description(&self) -> &'static str;

    /// Environment variable name for overriding the templates root
    fn template_dir_env(&self) -> &'static str;

    /// Generate the "next steps" instructions after project creation
    fn next_steps(&self, project_name: &str) -> Vec<String>;
}
