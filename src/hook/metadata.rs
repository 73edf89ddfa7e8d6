//! Supported-version metadata resolution and rewriting
//!
//! Reads the version range expression left in the generated pyproject.toml,
//! resolves open bounds against the support registry, and rewrites
//! `requires-python` plus the Python version classifiers to match.

use std::fs;

use chrono::Local;
use tracing::{error, info, warn};

use crate::config::HookContext;
use crate::hook::HookError;
use crate::pyproject::MetadataEditor;
use crate::version::error::RegistryError;
use crate::version::range::VersionRange;
use crate::version::registry::SupportRegistry;
use crate::version::support::{self, SupportedReleases};

/// What the metadata step did, for logging and tests
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetadataOutcome {
    /// Both fields were rewritten
    Updated {
        requires_python: String,
        target_minors: Vec<u32>,
    },
    /// The project has no pyproject.toml
    MissingDocument,
    /// pyproject.toml has no requires-python field
    MissingRequiresPython,
    /// The resolved range selects no versions
    EmptyRange { min: u32, max: u32 },
}

/// Resolve the supported version range and rewrite the derived fields.
///
/// A range with both bounds resolves locally; open bounds are filled from
/// the registry's supported set, and the targets are the intersection of
/// that set with the bounds. A missing document, a missing field, or an
/// empty target list leaves the project untouched and reports the outcome.
pub async fn generate(
    ctx: &HookContext,
    registry: &dyn SupportRegistry,
) -> Result<MetadataOutcome, HookError> {
    let pyproject = ctx.pyproject_path();
    if !pyproject.is_file() {
        warn!(
            "No pyproject.toml at {}; skipping version metadata",
            pyproject.display()
        );
        return Ok(MetadataOutcome::MissingDocument);
    }

    let content =
        fs::read_to_string(&pyproject).map_err(|e| HookError::fs("read", &pyproject, e))?;

    let editor = MetadataEditor::new();
    let Some(expression) = editor.requires_python(&content) else {
        warn!("pyproject.toml has no requires-python field; skipping version metadata");
        return Ok(MetadataOutcome::MissingRequiresPython);
    };

    info!("Found requires-python \"{}\"", expression);
    let range = VersionRange::parse(&expression);

    let (low, high, targets) = match (range.min, range.max) {
        (Some(min), Some(max)) => {
            info!("Both bounds given; skipping the registry lookup");
            (min, max, (min..=max).collect::<Vec<u32>>())
        }
        (min, max) => {
            let supported = fetch_supported_releases(registry).await?;
            let (Some(&lowest), Some(&highest)) =
                (supported.minors.first(), supported.minors.last())
            else {
                return Err(HookError::Registry(RegistryError::InvalidResponse(
                    "no supported Python 3 releases in registry data".to_string(),
                )));
            };

            let low = min.unwrap_or(lowest);
            let high = max.unwrap_or(highest);
            if min.is_none() {
                info!("No minimum given; using oldest supported release 3.{}", low);
            }
            if max.is_none() {
                info!("No maximum given; using newest supported release 3.{}", high);
            }

            let targets = supported
                .minors
                .iter()
                .copied()
                .filter(|minor| (low..=high).contains(minor))
                .collect();
            (low, high, targets)
        }
    };

    if targets.is_empty() {
        info!(
            "Range 3.{} to 3.{} selects no versions; leaving {} unchanged",
            low,
            high,
            pyproject.display()
        );
        return Ok(MetadataOutcome::EmptyRange {
            min: low,
            max: high,
        });
    }

    let requires_python = format!(">=3.{}", low);
    let updated = editor.set_requires_python(&content, &requires_python);
    let updated = editor.set_version_classifiers(&updated, &targets);

    fs::write(&pyproject, &updated).map_err(|e| HookError::fs("write", &pyproject, e))?;

    info!(
        "Set requires-python to \"{}\" with classifiers for {}",
        requires_python,
        join_versions(&targets)
    );

    Ok(MetadataOutcome::Updated {
        requires_python,
        target_minors: targets,
    })
}

/// Fetch and classify the registry's release cycles.
///
/// An open-ended range cannot resolve without this data, so a fetch failure
/// is fatal and comes with remediation guidance for the operator.
async fn fetch_supported_releases(
    registry: &dyn SupportRegistry,
) -> Result<SupportedReleases, HookError> {
    let cycles = match registry.fetch_cycles().await {
        Ok(cycles) => cycles,
        Err(e) => {
            error!(
                "Could not fetch supported Python versions: {}\n\
                 The requires-python range is open-ended, so the supported set \
                 must come from the registry. Re-run with network access, or \
                 give both bounds explicitly (e.g. \"3.10-3.13\").",
                e
            );
            return Err(e.into());
        }
    };

    let today = Local::now().date_naive();
    let supported = support::classify_cycles(&cycles, today);

    for notice in &supported.expiring_soon {
        warn!(
            "Python {} reaches end of life on {} ({} days left)",
            notice.cycle, notice.eol, notice.days_left
        );
    }

    info!(
        "Supported Python releases: {}",
        join_versions(&supported.minors)
    );

    Ok(supported)
}

fn join_versions(minors: &[u32]) -> String {
    minors
        .iter()
        .map(|minor| format!("3.{}", minor))
        .collect::<Vec<_>>()
        .join(", ")
}
