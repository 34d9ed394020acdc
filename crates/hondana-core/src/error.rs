//! Error types for hondana-core

use thiserror::Error;

/// Result type alias using hondana-core's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for Hondana
#[derive(Error, Debug)]
pub enum Error {
    /// An upstream extension list source stopped emitting
    #[error("Extension source closed: {source_name}")]
    SourceClosed { source_name: &'static str },

    /// Package name not present in the current catalog
    #[error("Unknown extension package: {pkg_name}")]
    UnknownExtension { pkg_name: String },
}
