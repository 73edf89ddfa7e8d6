//! Supported-release resolution for the Python interpreter
//!
//! Answers one question: which Python 3 minor versions should a freshly
//! generated project declare support for? The range expression found in the
//! project combines with the release support data published by the registry.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │    Range    │     │  Registry   │────▶│   Support   │
//! │  (parse)    │     │  (fetch)    │     │ (classify)  │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        │                   │                   │
//!        └───────────────────┴───────────────────┘
//!                            ▼
//!                     resolved targets
//! ```
//!
//! # Modules
//!
//! - [`range`]: Range expression parsing ("3.9-3.12", "3.10-", ">=3.10", ...)
//! - [`registry`]: Registry trait and the release-cycle wire model
//! - [`endoflife`]: HTTP client for the endoflife.date JSON API
//! - [`support`]: End-of-life classification into the supported set
//! - [`error`]: Registry error types

pub mod endoflife;
pub mod error;
pub mod range;
pub mod registry;
pub mod support;
