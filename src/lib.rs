//! Post-generation hook for Python project templates
//!
//! Finalizes a freshly generated project: namespace package layout, flit
//! module configuration, supported-version metadata, and the initial git
//! history.

pub mod config;
pub mod hook;
pub mod pyproject;
pub mod version;
