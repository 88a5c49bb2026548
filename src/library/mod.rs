/// Image library module
///
/// This module handles:
/// - The image file model (data.rs)
/// - Scanning the images folder in a stable order (scan.rs)

pub mod data;
pub mod scan;

pub use data::ImageFile;
pub use scan::list_images;
