//! Flit module-name configuration
//!
//! Flit infers the importable module from the distribution name by turning
//! `-` into `_`. A namespaced package never matches that inference, so the
//! hook pins the module name explicitly in `[tool.flit.module]`.

use std::fs;

use tracing::{debug, info, warn};

use crate::config::HookContext;
use crate::hook::HookError;

/// Table the module section is inserted in front of, when present
const ISORT_TABLE_HEADER: &str = "[tool.isort]";

/// Pin the flit module name when it differs from flit's inference
pub fn update_module_config(ctx: &HookContext) -> Result<(), HookError> {
    let inferred = ctx.distribution_name.replace('-', "_");
    if ctx.package_name == inferred {
        debug!(
            "Module name {} matches flit's inference; nothing to pin",
            inferred
        );
        return Ok(());
    }

    let pyproject = ctx.pyproject_path();
    if !pyproject.is_file() {
        warn!(
            "No pyproject.toml at {}; skipping flit module configuration",
            pyproject.display()
        );
        return Ok(());
    }

    let content =
        fs::read_to_string(&pyproject).map_err(|e| HookError::fs("read", &pyproject, e))?;

    let section = format!("[tool.flit.module]\nname = \"{}\"\n\n", ctx.package_name);
    let updated = if content.contains(ISORT_TABLE_HEADER) {
        content.replacen(
            ISORT_TABLE_HEADER,
            &format!("{}{}", section, ISORT_TABLE_HEADER),
            1,
        )
    } else {
        let mut appended = content;
        if !appended.ends_with('\n') {
            appended.push('\n');
        }
        appended.push_str(&section);
        appended
    };

    fs::write(&pyproject, updated).map_err(|e| HookError::fs("write", &pyproject, e))?;

    info!("Pinned flit module name to {}", ctx.package_name);
    Ok(())
}
