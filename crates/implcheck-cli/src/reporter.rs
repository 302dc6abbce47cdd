use colored::Colorize;
use rustc_hash::FxHashMap;
use std::path::Path;

use implcheck_common::{Diagnostic, DiagnosticCategory, DiagnosticRelatedInformation};

/// Byte offsets of line starts in a source file.
struct LineMap {
    starts: Vec<u32>,
}

impl LineMap {
    fn build(source: &str) -> Self {
        let mut starts = vec![0];
        starts.extend(
            source
                .bytes()
                .enumerate()
                .filter(|&(_, b)| b == b'\n')
                .map(|(i, _)| (i + 1) as u32),
        );
        Self { starts }
    }

    /// One-based `(line, column)` of `offset`.
    fn position(&self, offset: u32) -> (u32, u32) {
        let line = self.starts.partition_point(|&start| start <= offset).saturating_sub(1);
        let column = offset - self.starts[line];
        (line as u32 + 1, column + 1)
    }
}

/// Renders diagnostics as text, with source snippets when the declaring
/// source file can be read.
pub struct Reporter {
    color: bool,
    sources: FxHashMap<String, Option<String>>,
    line_maps: FxHashMap<String, LineMap>,
}

impl Reporter {
    pub fn new(color: bool) -> Self {
        Reporter {
            color,
            sources: FxHashMap::default(),
            line_maps: FxHashMap::default(),
        }
    }

    /// Register source text for `file` instead of reading it from disk.
    pub fn add_source(&mut self, file: impl Into<String>, text: impl Into<String>) {
        let file = file.into();
        self.line_maps.remove(&file);
        self.sources.insert(file, Some(text.into()));
    }

    pub fn render(&mut self, diagnostics: &[Diagnostic]) -> String {
        let mut out = String::new();
        for (index, diagnostic) in diagnostics.iter().enumerate() {
            if index > 0 {
                out.push('\n');
            }
            out.push_str(&self.format_diagnostic(diagnostic));
        }
        out
    }

    pub fn format_diagnostic(&mut self, diagnostic: &Diagnostic) -> String {
        let mut output = match self.format_location(&diagnostic.file, diagnostic.start) {
            Some(location) => location,
            None if !diagnostic.file.is_empty() => diagnostic.file.clone(),
            None => "<unknown>".to_string(),
        };

        output.push_str(" - ");
        output.push_str(&self.format_category(diagnostic.category));
        let code = self.format_code(diagnostic.code);
        if !code.is_empty() {
            output.push(' ');
            output.push_str(&code);
        }
        output.push_str(": ");
        output.push_str(&diagnostic.message_text);

        if let Some(snippet) =
            self.format_snippet(&diagnostic.file, diagnostic.start, diagnostic.length)
        {
            output.push_str(&snippet);
        }

        for related in &diagnostic.related_information {
            output.push('\n');
            output.push_str(&self.format_related(related));
            if let Some(snippet) = self.format_snippet(&related.file, related.start, related.length)
            {
                output.push_str(&snippet);
            }
        }

        output
    }

    /// Summary line printed after all diagnostics.
    pub fn format_summary(&self, error_count: usize) -> String {
        let text = match error_count {
            1 => "Found 1 error.".to_string(),
            n => format!("Found {n} errors."),
        };
        if self.color && error_count > 0 {
            text.bold().to_string()
        } else {
            text
        }
    }

    /// Source line with the span underlined:
    ///
    /// ```text
    ///     3   public double area() {
    ///                       ~~~~
    /// ```
    fn format_snippet(&mut self, file: &str, start: u32, length: u32) -> Option<String> {
        if file.is_empty() || length == 0 {
            return None;
        }

        let (line_num, column) = self.position_for(file, start)?;
        let source = self.sources.get(file)?.as_deref()?;
        let line_text = source.lines().nth((line_num - 1) as usize)?;

        let mut underline = String::new();
        let span_end = column - 1 + length;
        let mut offset = 0u32;
        for ch in line_text.chars() {
            if offset >= span_end {
                break;
            }
            let width = if ch == '\t' { 4 } else { 1 };
            let mark = if offset < column - 1 { ' ' } else { '~' };
            underline.extend(std::iter::repeat_n(mark, width));
            offset += ch.len_utf8() as u32;
        }
        if !underline.contains('~') {
            underline.push('~');
        }

        let underline = if self.color {
            underline.red().to_string()
        } else {
            underline
        };
        Some(format!("\n  {line_num:>3}   {line_text}\n        {underline}"))
    }

    fn format_related(&mut self, related: &DiagnosticRelatedInformation) -> String {
        let location = self
            .format_location(&related.file, related.start)
            .unwrap_or_else(|| related.file.clone());
        let prefix = if self.color {
            "  Related".dimmed().to_string()
        } else {
            "  Related".to_string()
        };

        format!("{prefix}: {location} - {}", related.message_text)
    }

    fn format_location(&mut self, file: &str, offset: u32) -> Option<String> {
        if file.is_empty() {
            return None;
        }
        let (line, column) = self.position_for(file, offset)?;
        Some(format!("{file}:{line}:{column}"))
    }

    fn position_for(&mut self, file: &str, offset: u32) -> Option<(u32, u32)> {
        if !self.line_maps.contains_key(file) {
            let source = self.ensure_source(file)?;
            let map = LineMap::build(source);
            self.line_maps.insert(file.to_string(), map);
        }
        let source_len = self.sources.get(file)?.as_ref()?.len() as u32;
        if offset > source_len {
            return None;
        }
        Some(self.line_maps.get(file)?.position(offset))
    }

    fn ensure_source(&mut self, file: &str) -> Option<&str> {
        self.sources
            .entry(file.to_string())
            .or_insert_with(|| std::fs::read_to_string(Path::new(file)).ok())
            .as_deref()
    }

    fn format_category(&self, category: DiagnosticCategory) -> String {
        let label = match category {
            DiagnosticCategory::Error => "error",
            DiagnosticCategory::Message => "message",
        };

        if !self.color {
            return label.to_string();
        }

        match category {
            DiagnosticCategory::Error => label.red().bold().to_string(),
            DiagnosticCategory::Message => label.cyan().bold().to_string(),
        }
    }

    fn format_code(&self, code: u32) -> String {
        if code == 0 {
            return String::new();
        }

        let label = format!("IC{code}");
        if self.color {
            label.bright_blue().to_string()
        } else {
            label
        }
    }
}

#[cfg(test)]
#[path = "tests/reporter_tests.rs"]
mod tests;
