/// Caption sidecar module
///
/// This module handles:
/// - Reading and writing captions.csv (store.rs)
/// - Reconciling captions.csv with the images folder (sync.rs)

pub mod store;
pub mod sync;

pub use store::{write_rows, CaptionRecord, CaptionRow, CaptionStore};
pub use sync::{sync_captions, SyncReport};
