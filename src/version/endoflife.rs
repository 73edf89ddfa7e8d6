//! endoflife.date registry client for Python release support data

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::version::error::RegistryError;
use crate::version::registry::{ReleaseCycle, SupportRegistry};

const DEFAULT_ENDOFLIFE_REGISTRY: &str = "https://endoflife.date";

/// endoflife.date registry client
pub struct EndOfLifeRegistry {
    client: Client,
    base_url: String,
}

impl Default for EndOfLifeRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_ENDOFLIFE_REGISTRY.to_string())
    }
}

impl EndOfLifeRegistry {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }
}

#[async_trait]
impl SupportRegistry for EndOfLifeRegistry {
    async fn fetch_cycles(&self) -> Result<Vec<ReleaseCycle>, RegistryError> {
        let url = format!("{}/api/python.json", self.base_url);
        debug!("Fetching Python release cycles: {}", url);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(RegistryError::InvalidResponse(format!(
                "endoflife.date API returned status {}",
                response.status()
            )));
        }

        let cycles: Vec<ReleaseCycle> = response
            .json()
            .await
            .map_err(|e| RegistryError::InvalidResponse(e.to_string()))?;

        debug!("Found {} release cycles", cycles.len());

        Ok(cycles)
    }
}
