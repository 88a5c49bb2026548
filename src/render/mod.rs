/// Album page rendering module
///
/// This module handles:
/// - HTML escaping (escape.rs)
/// - The figure blocks and page template (page.rs)
/// - Joining the image list with captions and writing index.html (this file)

pub mod escape;
pub mod page;

use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Local};
use tracing::info;

use crate::captions::{CaptionRecord, CaptionStore};
use crate::config::AlbumConfig;
use crate::error::{AlbumError, Result};
use crate::library::{list_images, ImageFile};

pub use escape::{encode_path_segment, escape_attr, escape_text};
pub use page::{AlbumPage, Figure, PLACEHOLDER_TITLE};

/// Display format of the generation timestamp
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Result of rendering the album page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderReport {
    /// Figures on the page
    pub images: usize,
    /// Figures with a title (the rest show the placeholder)
    pub captioned: usize,
    /// Where the page was written
    pub output: PathBuf,
}

/// Render index.html stamped with the current local time
pub fn render_album(config: &AlbumConfig) -> Result<RenderReport> {
    render_album_at(config, Local::now())
}

/// Render index.html with an explicit generation time
pub fn render_album_at(config: &AlbumConfig, generated_at: DateTime<Local>) -> Result<RenderReport> {
    let images = list_images(config)?;
    let captions = CaptionStore::load(&config.captions_path)?;

    let page = build_page(config, &images, &captions, generated_at);
    let captioned = page
        .figures
        .iter()
        .filter(|figure| !figure.title.is_empty())
        .count();

    let output = &config.output_path;
    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent).map_err(|err| AlbumError::io(parent, err))?;
    }
    fs::write(output, page.render()).map_err(|err| AlbumError::io(output, err))?;

    info!(
        "Rendered {} ({} images, {} captioned)",
        output.display(),
        images.len(),
        captioned
    );

    Ok(RenderReport {
        images: images.len(),
        captioned,
        output: output.clone(),
    })
}

/// Join images with their captions, in image order
pub fn build_page(
    config: &AlbumConfig,
    images: &[ImageFile],
    captions: &CaptionStore,
    generated_at: DateTime<Local>,
) -> AlbumPage {
    let blank = CaptionRecord::default();

    let figures = images
        .iter()
        .map(|image| {
            let record = captions.get(&image.filename).unwrap_or(&blank);
            Figure {
                filename: image.filename.clone(),
                alt: image.stem().to_string(),
                title: record.title.clone(),
                note: record.note.clone(),
            }
        })
        .collect();

    AlbumPage {
        title: config.title.clone(),
        image_prefix: config.image_url_prefix(),
        figures,
        generated_at: generated_at.format(TIMESTAMP_FORMAT).to_string(),
    }
}
