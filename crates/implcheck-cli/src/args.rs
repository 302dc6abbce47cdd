use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the implcheck binary.
#[derive(Parser, Debug)]
#[command(
    name = "implcheck",
    version,
    about = "Checks that methods marked with a target interface really implement one of its methods"
)]
pub struct CliArgs {
    /// Manifest files, or directories searched recursively for `*.json` manifests.
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Output format for diagnostics.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, ignore_case = true)]
    pub format: OutputFormat,

    /// Enable color and source snippets in text output.
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub pretty: Option<bool>,

    /// Maximum number of inheritance edges followed during a check.
    #[arg(long = "max-hierarchy-depth", alias = "maxHierarchyDepth")]
    pub max_hierarchy_depth: Option<u32>,

    /// Validate contracts on the current thread only.
    #[arg(long)]
    pub sequential: bool,

    /// Marker name shown in "must be an interface" diagnostics.
    #[arg(long)]
    pub marker: Option<String>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[cfg(test)]
#[path = "tests/args_tests.rs"]
mod tests;
