use std::collections::BTreeSet;
use std::path::{Component, Path, PathBuf};

/// Album folder below the root
pub const ALBUM_DIR: &str = "album";
/// Image folder below the album folder
pub const IMAGES_DIR: &str = "images";
/// Caption sidecar below the album folder
pub const CAPTIONS_FILE: &str = "captions.csv";
/// Rendered page below the album folder
pub const OUTPUT_FILE: &str = "index.html";

/// Supported image extensions (lowercase, no dot)
pub const IMAGE_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "webp", "gif"];

/// Default page title
pub const DEFAULT_TITLE: &str = "アルバム";

/// Paths and settings shared by the synchronizer and the renderer.
///
/// Built once at startup and passed down explicitly, so tests can point
/// every component at a temporary directory.
#[derive(Debug, Clone, PartialEq)]
pub struct AlbumConfig {
    /// Directory scanned for images (not recursive)
    pub images_dir: PathBuf,
    /// CSV caption sidecar
    pub captions_path: PathBuf,
    /// Where the rendered HTML page is written
    pub output_path: PathBuf,
    /// Allowed extensions, lowercase without the dot
    pub extensions: BTreeSet<String>,
    /// Page `<title>` and heading
    pub title: String,
}

impl AlbumConfig {
    /// Standard layout below `root`:
    /// - `album/images/`
    /// - `album/captions.csv`
    /// - `album/index.html`
    pub fn from_root(root: impl AsRef<Path>) -> Self {
        let album = root.as_ref().join(ALBUM_DIR);

        AlbumConfig {
            images_dir: album.join(IMAGES_DIR),
            captions_path: album.join(CAPTIONS_FILE),
            output_path: album.join(OUTPUT_FILE),
            extensions: IMAGE_EXTENSIONS.iter().map(|ext| ext.to_string()).collect(),
            title: DEFAULT_TITLE.to_string(),
        }
    }

    /// Check if a path has one of the allowed extensions (case-insensitive)
    pub fn is_image(&self, path: &Path) -> bool {
        match path.extension() {
            Some(extension) => {
                let ext = extension.to_string_lossy().to_lowercase();
                self.extensions.contains(&ext)
            }
            None => false,
        }
    }

    /// URL prefix for image links, relative to the output page.
    ///
    /// `images` for the standard layout. Falls back to the images
    /// directory's own name when it does not live below the page's folder.
    pub fn image_url_prefix(&self) -> String {
        let page_dir = self.output_path.parent().unwrap_or(Path::new(""));

        let relative = match self.images_dir.strip_prefix(page_dir) {
            Ok(rel) if !rel.as_os_str().is_empty() => rel.to_path_buf(),
            _ => PathBuf::from(self.images_dir.file_name().unwrap_or_default()),
        };

        relative
            .components()
            .filter_map(|c| match c {
                Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("/")
    }
}
