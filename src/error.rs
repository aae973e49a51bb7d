use std::path::PathBuf;
use thiserror::Error;

use crate::analyzer::podlint::ParseError;

#[derive(Error, Debug)]
pub enum PodlintError {
    #[error("cannot read file {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("failed to write diagnostics: {0}")]
    Output(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PodlintError>;
