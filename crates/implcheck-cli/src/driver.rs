//! Input collection, manifest loading and checking for the CLI.

use anyhow::{Context, Result, bail};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::args::{CliArgs, OutputFormat};
use crate::manifest::{Manifest, ManifestSource, load_program};
use crate::reporter::Reporter;
use implcheck_checker::{CheckerOptions, check_program};
use implcheck_common::{Diagnostic, DiagnosticCategory};

/// Result of a completed check.
#[derive(Debug)]
pub struct CheckOutcome {
    pub diagnostics: Vec<Diagnostic>,
    pub manifest_count: usize,
    pub type_count: usize,
}

impl CheckOutcome {
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.category == DiagnosticCategory::Error)
            .count()
    }
}

/// Expand the positional inputs: files are kept as given, directories are
/// walked (sorted by name) for `*.json` files.
pub fn collect_inputs(inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for input in inputs {
        if input.is_dir() {
            for entry in WalkDir::new(input).sort_by_file_name() {
                let entry = entry.with_context(|| format!("failed to walk {}", input.display()))?;
                let path = entry.path();
                if entry.file_type().is_file() && path.extension().is_some_and(|ext| ext == "json")
                {
                    files.push(path.to_path_buf());
                }
            }
        } else if input.is_file() {
            files.push(input.clone());
        } else {
            bail!("input not found: {}", input.display());
        }
    }
    debug!(count = files.len(), "collected manifest files");
    Ok(files)
}

/// The file diagnostics of `manifest` are reported against: its `file`,
/// relative to the manifest's directory, or the manifest itself.
fn display_file(path: &Path, manifest: &Manifest) -> String {
    match &manifest.file {
        Some(file) => {
            let file = Path::new(file);
            match path.parent() {
                Some(dir) if file.is_relative() && !dir.as_os_str().is_empty() => {
                    dir.join(file).display().to_string()
                }
                _ => file.display().to_string(),
            }
        }
        None => path.display().to_string(),
    }
}

pub fn read_manifest(path: &Path) -> Result<ManifestSource> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let manifest = Manifest::from_json(&text)
        .with_context(|| format!("failed to parse manifest {}", path.display()))?;
    Ok(ManifestSource {
        file: display_file(path, &manifest),
        manifest,
    })
}

/// Options from the first manifest that has an `"options"` block, with
/// command-line flags applied on top.
pub fn resolve_options(args: &CliArgs, sources: &[ManifestSource]) -> CheckerOptions {
    let mut options = sources
        .iter()
        .find_map(|source| source.manifest.options.clone())
        .unwrap_or_default();
    if let Some(depth) = args.max_hierarchy_depth {
        options.max_hierarchy_depth = depth;
    }
    if args.sequential {
        options.parallel = false;
    }
    if let Some(marker) = &args.marker {
        options.marker_name = marker.clone();
    }
    options
}

/// Load every input and check it as one program.
pub fn run(args: &CliArgs) -> Result<CheckOutcome> {
    let paths = collect_inputs(&args.inputs)?;
    if paths.is_empty() {
        bail!("no manifest files found");
    }

    let sources = paths
        .iter()
        .map(|path| read_manifest(path))
        .collect::<Result<Vec<_>>>()?;
    let options = resolve_options(args, &sources);
    debug!(?options, "resolved checker options");

    let store = load_program(&sources).context("failed to load manifests")?;
    let diagnostics = check_program(&store, &options);
    info!(
        manifests = sources.len(),
        types = store.len(),
        diagnostics = diagnostics.len(),
        "check finished"
    );

    Ok(CheckOutcome {
        diagnostics,
        manifest_count: sources.len(),
        type_count: store.len(),
    })
}

/// Render the outcome in the requested format.
pub fn render(outcome: &CheckOutcome, format: OutputFormat, pretty: bool) -> Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(&outcome.diagnostics)
            .context("failed to serialize diagnostics"),
        OutputFormat::Text => {
            if outcome.diagnostics.is_empty() {
                return Ok(String::new());
            }
            let mut reporter = Reporter::new(pretty);
            let mut out = reporter.render(&outcome.diagnostics);
            out.push_str("\n\n");
            out.push_str(&reporter.format_summary(outcome.error_count()));
            Ok(out)
        }
    }
}

#[cfg(test)]
#[path = "tests/driver_tests.rs"]
mod tests;
