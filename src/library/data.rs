//! Shared data structures for the image library
//!
//! An image is known only by its filename. Bytes and timestamps are never read.

use std::path::Path;

/// Represents a single image in the album folder
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageFile {
    /// Filename only, exactly as on disk (e.g., "200307a.jpg")
    pub filename: String,
}

impl ImageFile {
    pub fn new(filename: impl Into<String>) -> Self {
        ImageFile {
            filename: filename.into(),
        }
    }

    /// Filename without its final extension, used as the `alt` text
    pub fn stem(&self) -> &str {
        Path::new(&self.filename)
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or(&self.filename)
    }
}
