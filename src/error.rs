//! Error types for mdclean.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for mdclean operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// A document could not be read or is not valid UTF-8.
    #[error("cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A cleaned document could not be written back.
    #[error("cannot write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An input path given on the command line does not exist.
    #[error("{} does not exist", .0.display())]
    NotFound(PathBuf),

    /// An input file was named explicitly but has none of the configured extensions.
    #[error("{} is not a {} file", .path.display(), .extensions)]
    Extension { path: PathBuf, extensions: String },

    /// Directory traversal failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid config {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },
}
