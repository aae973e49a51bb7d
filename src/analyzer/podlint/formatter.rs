//! Plain-text reporter for podlint results.
//!
//! One line per diagnostic: `<src>: <subject> <message>`, or
//! `<src>: <message>` when the diagnostic has no subject.

use std::io::{self, Write};

use crate::analyzer::podlint::lint::LintResult;
use crate::analyzer::podlint::types::Diagnostic;

/// Render a single report line.
pub fn format_line(source: &str, subject: Option<&str>, message: &str) -> String {
    match subject {
        Some(subject) => format!("{}: {} {}", source, subject, message),
        None => format!("{}: {}", source, message),
    }
}

/// Render one diagnostic for `source`.
pub fn format_diagnostic(source: &str, diagnostic: &Diagnostic) -> String {
    format_line(
        source,
        diagnostic.subject.as_deref(),
        &diagnostic.violation.to_string(),
    )
}

/// Render every diagnostic of a result, one per line.
pub fn format_result(result: &LintResult) -> String {
    let mut output = String::new();
    for diagnostic in &result.diagnostics {
        output.push_str(&format_diagnostic(&result.file_path, diagnostic));
        output.push('\n');
    }
    output
}

/// Write a result to `writer`.
pub fn write_result<W: Write>(writer: &mut W, result: &LintResult) -> io::Result<()> {
    for diagnostic in &result.diagnostics {
        writeln!(writer, "{}", format_diagnostic(&result.file_path, diagnostic))?;
    }
    writer.flush()
}

/// Print a result to standard output.
pub fn print_result(result: &LintResult) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_result(&mut handle, result)
}
