//! Error taxonomy for reading headers and writing rendered docs.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HdocError {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot derive an output name from {}", path.display())]
    NoFileName { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, HdocError>;
