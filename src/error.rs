use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while listing images, reading/writing captions or writing the page.
///
/// Only `DirectoryNotFound` is something the user is expected to fix by hand.
/// The rest are plain filesystem or CSV failures that abort the run.
#[derive(Debug, Error)]
pub enum AlbumError {
    /// The images directory is missing
    #[error("images directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    /// The images directory exists but could not be read
    #[error("failed to scan {}: {source}", path.display())]
    Scan {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// The caption store could not be parsed or serialized
    #[error("caption store {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl AlbumError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AlbumError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        AlbumError::Csv {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, AlbumError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_not_found_names_path() {
        let err = AlbumError::DirectoryNotFound(PathBuf::from("album/images"));
        assert_eq!(err.to_string(), "images directory not found: album/images");
    }
}
