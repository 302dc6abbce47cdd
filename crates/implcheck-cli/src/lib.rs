//! Command-line front end for implcheck.
//!
//! Reads JSON type manifests, loads them into a
//! [`DefinitionStore`](implcheck_graph::DefinitionStore), checks every
//! marked method and renders the diagnostics.

pub mod args;
pub mod driver;
pub mod manifest;
pub mod reporter;
pub mod tracing_config;
