use std::path::PathBuf;

// =============================================================================
// Time-related constants
// =============================================================================

/// How far ahead an end-of-life date triggers a warning (30 days)
pub const EOL_WARNING_WINDOW_DAYS: u64 = 30;

/// Everything a post-generation step needs to know about the run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookContext {
    /// Root of the freshly generated project
    pub project_root: PathBuf,
    /// Importable package name, possibly dotted (e.g. "acme.tools.cli")
    pub package_name: String,
    /// Distribution name as published to an index (e.g. "acme-tools-cli")
    pub distribution_name: String,
}

impl HookContext {
    /// Path to the project's packaging manifest
    pub fn pyproject_path(&self) -> PathBuf {
        self.project_root.join("pyproject.toml")
    }
}
