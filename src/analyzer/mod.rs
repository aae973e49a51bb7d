//! Manifest analyzers.

pub mod podlint;
