use std::collections::HashSet;

use tracing::{debug, info};

use super::store::{write_rows, CaptionRecord, CaptionRow, CaptionStore};
use crate::config::AlbumConfig;
use crate::error::Result;
use crate::library::{list_images, ImageFile};

/// Result of a caption sync
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncReport {
    /// Images found in the folder (= rows written)
    pub images: usize,
    /// New blank rows for images that had no caption yet
    pub added: usize,
    /// Stale rows for images that are gone
    pub dropped: usize,
}

/// Rewrite captions.csv so it has exactly one row per current image.
///
/// Existing captions are carried over untouched, new images get blank rows,
/// and rows for images no longer in the folder are left out.
pub fn sync_captions(config: &AlbumConfig) -> Result<SyncReport> {
    let images = list_images(config)?;
    let existing = CaptionStore::load(&config.captions_path)?;

    let (rows, report) = reconcile(&images, &existing);
    write_rows(&config.captions_path, &rows)?;

    info!(
        "Synced {}: {} images, {} added, {} dropped",
        config.captions_path.display(),
        report.images,
        report.added,
        report.dropped
    );

    Ok(report)
}

/// Build the new row set in image order
pub fn reconcile(images: &[ImageFile], existing: &CaptionStore) -> (Vec<CaptionRow>, SyncReport) {
    let mut rows = Vec::with_capacity(images.len());
    let mut added = 0;

    for image in images {
        let record = match existing.get(&image.filename) {
            Some(record) => record.clone(),
            None => {
                debug!("New image without caption: {}", image.filename);
                added += 1;
                CaptionRecord::default()
            }
        };
        rows.push(CaptionRow::new(image.filename.clone(), record));
    }

    let current: HashSet<&str> = images.iter().map(|image| image.filename.as_str()).collect();
    let dropped = existing
        .filenames()
        .filter(|filename| !current.contains(filename))
        .inspect(|filename| debug!("Dropping caption for missing image: {}", filename))
        .count();

    let report = SyncReport {
        images: images.len(),
        added,
        dropped,
    };

    (rows, report)
}
