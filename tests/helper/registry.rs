//! Registry test utilities

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use postgen::version::error::RegistryError;
use postgen::version::registry::{Eol, ReleaseCycle, SupportRegistry};

/// In-memory registry stub that counts its calls
pub struct StubRegistry {
    cycles: Vec<ReleaseCycle>,
    failing: bool,
    calls: AtomicUsize,
}

impl StubRegistry {
    pub fn new() -> Self {
        Self {
            cycles: Vec::new(),
            failing: false,
            calls: AtomicUsize::new(0),
        }
    }

    /// Stub whose fetch always fails
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::new()
        }
    }

    pub fn with_cycle(mut self, name: &str, eol: Eol) -> Self {
        self.cycles.push(ReleaseCycle {
            cycle: name.to_string(),
            eol,
        });
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SupportRegistry for StubRegistry {
    async fn fetch_cycles(&self) -> Result<Vec<ReleaseCycle>, RegistryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.failing {
            return Err(RegistryError::InvalidResponse(
                "stubbed registry failure".to_string(),
            ));
        }

        Ok(self.cycles.clone())
    }
}
