//! Registry trait and wire model for release support data

#[cfg(test)]
use mockall::automock;

use serde::Deserialize;

use crate::version::error::RegistryError;

/// One release cycle record as published by the support registry
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ReleaseCycle {
    /// Cycle name, e.g. "3.12"
    #[serde(default)]
    pub cycle: String,
    /// End-of-life marker for the cycle
    #[serde(default)]
    pub eol: Eol,
}

/// End-of-life field of a release cycle.
///
/// The registry publishes this in several shapes: `false` while the cycle
/// is supported, `true` once it is over, a "YYYY-MM-DD" date when the end
/// is scheduled, or null when none is announced.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(untagged)]
pub enum Eol {
    /// No end of life announced
    #[default]
    Unscheduled,
    /// Support flag: true means the cycle is already over
    Flag(bool),
    /// Scheduled end-of-life date in "YYYY-MM-DD" form
    Date(String),
}

/// Trait for fetching release support data from a registry
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait SupportRegistry: Send + Sync {
    /// Fetches all published release cycles for the Python interpreter
    ///
    /// # Returns
    /// * `Ok(Vec<ReleaseCycle>)` - All cycles, in registry order (newest first)
    /// * `Err(RegistryError)` - If the fetch fails
    async fn fetch_cycles(&self) -> Result<Vec<ReleaseCycle>, RegistryError>;
}
