//! Static photo album generator.
//!
//! `sync-captions` keeps `album/captions.csv` in step with `album/images/`,
//! `generate-album` renders `album/index.html` from both.

pub mod captions;
pub mod cli;
pub mod config;
pub mod error;
pub mod library;
pub mod logging;
pub mod render;

pub use captions::{sync_captions, CaptionRecord, CaptionRow, CaptionStore, SyncReport};
pub use config::AlbumConfig;
pub use error::{AlbumError, Result};
pub use library::{list_images, ImageFile};
pub use render::{render_album, render_album_at, RenderReport};
