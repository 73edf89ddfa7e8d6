//! Post-generation steps and their sequencing
//!
//! Each step finalizes one aspect of the freshly generated project:
//!
//! - [`namespace`]: Rebuild the flat `a.b.c` directory as nested packages
//! - [`flit`]: Pin the flit module name when inference would get it wrong
//! - [`metadata`]: Resolve supported versions and rewrite derived fields
//! - [`git`]: Create the initial git history

pub mod flit;
pub mod git;
pub mod metadata;
pub mod namespace;

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::config::HookContext;
use crate::version::error::RegistryError;
use crate::version::registry::SupportRegistry;

/// Error raised by a post-generation step
#[derive(Debug, Error)]
pub enum HookError {
    #[error("failed to {action} {}: {source}", .path.display())]
    Filesystem {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Git(#[from] git::GitError),
}

impl HookError {
    pub(crate) fn fs(action: &'static str, path: &Path, source: io::Error) -> Self {
        Self::Filesystem {
            action,
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Run every post-generation step in order.
///
/// Steps run as namespace layout, flit module patch, version metadata,
/// then git init, aborting at the first failure. Nothing is rolled back:
/// the partially finalized project stays on disk for inspection.
pub async fn run(ctx: &HookContext, registry: &dyn SupportRegistry) -> Result<(), HookError> {
    info!("Setting up the namespace package layout");
    namespace::restructure(ctx)?;

    info!("Updating the flit module configuration");
    flit::update_module_config(ctx)?;

    info!("Generating Python version metadata");
    metadata::generate(ctx, registry).await?;

    info!("Initializing the git repository");
    git::initialize_repository(&ctx.project_root)?;

    info!("Project finalized at {}", ctx.project_root.display());
    Ok(())
}
