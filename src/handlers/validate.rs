use std::path::Path;

use crate::analyzer::podlint::{LintConfig, lint_file, print_result};
use crate::error::Result;

/// Validate one manifest and print its diagnostics to stdout.
///
/// Violations are reported, not returned as errors; only read, parse and
/// output failures surface as `Err`.
pub fn handle_validate(path: &Path, config: &LintConfig) -> Result<()> {
    let result = lint_file(path, config)?;
    print_result(&result)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PodlintError;
    use std::io::Write;

    #[test]
    fn test_handle_validate_reports_violations_as_ok() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "kind: Service").unwrap();
        assert!(handle_validate(file.path(), &LintConfig::default()).is_ok());
    }

    #[test]
    fn test_handle_validate_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "kind: [Pod").unwrap();
        let err = handle_validate(file.path(), &LintConfig::default()).unwrap_err();
        assert!(matches!(err, PodlintError::Parse(_)));
    }
}
