//! Namespace package directory restructuring
//!
//! A dotted package name like `acme.tools.cli` comes out of the template as
//! a single directory literally named `acme.tools.cli`. This step rebuilds
//! it as nested namespace packages per PEP 420: the chain `acme/tools/cli`
//! with the package contents at the deepest level and no `__init__.py` on
//! the intermediate levels.

use std::fs;

use tracing::{debug, info, warn};

use crate::config::HookContext;
use crate::hook::HookError;

/// Rebuild the flat package directory as nested namespace packages
pub fn restructure(ctx: &HookContext) -> Result<(), HookError> {
    let parts: Vec<&str> = ctx.package_name.split('.').collect();
    if parts.len() <= 1 {
        debug!(
            "Package {} is not namespaced; keeping the flat layout",
            ctx.package_name
        );
        return Ok(());
    }

    let flat_dir = ctx.project_root.join(&ctx.package_name);
    if !flat_dir.is_dir() {
        warn!(
            "Expected package directory {} is missing; skipping namespace layout",
            flat_dir.display()
        );
        return Ok(());
    }

    let mut nested_dir = ctx.project_root.clone();
    for part in &parts {
        nested_dir.push(part);
    }
    fs::create_dir_all(&nested_dir)
        .map_err(|e| HookError::fs("create directory", &nested_dir, e))?;

    let entries =
        fs::read_dir(&flat_dir).map_err(|e| HookError::fs("read directory", &flat_dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| HookError::fs("read directory", &flat_dir, e))?;
        let source = entry.path();
        let target = nested_dir.join(entry.file_name());
        fs::rename(&source, &target).map_err(|e| HookError::fs("move", &source, e))?;
        debug!("Moved {} to {}", source.display(), target.display());
    }

    fs::remove_dir(&flat_dir).map_err(|e| HookError::fs("remove directory", &flat_dir, e))?;

    // Only the deepest package level keeps its __init__.py; markers on the
    // namespace levels would defeat PEP 420 resolution.
    let mut level = ctx.project_root.clone();
    for part in &parts[..parts.len() - 1] {
        level.push(part);
        let marker = level.join("__init__.py");
        if marker.exists() {
            fs::remove_file(&marker).map_err(|e| HookError::fs("remove", &marker, e))?;
        }
    }

    info!(
        "Namespaced package layout created at {}",
        nested_dir.display()
    );
    Ok(())
}
