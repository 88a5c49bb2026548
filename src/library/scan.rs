use std::path::Path;

use tracing::{debug, info, warn};
use walkdir::WalkDir;

use super::data::ImageFile;
use crate::config::AlbumConfig;
use crate::error::{AlbumError, Result};

/// List the images directly inside the configured images folder.
///
/// Only regular files (or symlinks to them) with an allowed extension are
/// kept. The result is sorted by lowercased filename so date-style names such
/// as `200307a`, `200307b` come out in shooting order; names that differ only
/// in case are ordered by their raw bytes so repeated runs always agree.
pub fn list_images(config: &AlbumConfig) -> Result<Vec<ImageFile>> {
    let images_dir = &config.images_dir;
    if !images_dir.is_dir() {
        return Err(AlbumError::DirectoryNotFound(images_dir.clone()));
    }

    debug!("🔍 Scanning folder: {}", images_dir.display());

    let mut images = Vec::new();

    for entry in WalkDir::new(images_dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.depth() == 0 => {
                return Err(AlbumError::Scan {
                    path: images_dir.clone(),
                    source: err,
                });
            }
            Err(err) => {
                // Dangling symlinks and unreadable entries
                debug!("Skipping entry: {}", err);
                continue;
            }
        };

        // Only process files (not directories)
        if !entry.file_type().is_file() {
            continue;
        }

        if !config.is_image(entry.path()) {
            continue;
        }

        match entry.file_name().to_str() {
            Some(filename) => images.push(ImageFile::new(filename)),
            None => warn!("Skipping non UTF-8 filename: {}", display_name(entry.path())),
        }
    }

    sort_images(&mut images);

    info!("Found {} images in {}", images.len(), images_dir.display());

    Ok(images)
}

/// Case-insensitive ascending order, raw filename as the tie-breaker
pub fn sort_images(images: &mut [ImageFile]) {
    images.sort_by_cached_key(|image| (image.filename.to_lowercase(), image.filename.clone()));
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn album_with(files: &[&str]) -> (TempDir, AlbumConfig) {
        let root = TempDir::new().unwrap();
        let config = AlbumConfig::from_root(root.path());
        fs::create_dir_all(&config.images_dir).unwrap();
        for name in files {
            fs::write(config.images_dir.join(name), b"").unwrap();
        }
        (root, config)
    }

    fn names(images: &[ImageFile]) -> Vec<&str> {
        images.iter().map(|image| image.filename.as_str()).collect()
    }

    #[test]
    fn test_missing_directory() {
        let root = TempDir::new().unwrap();
        let config = AlbumConfig::from_root(root.path());

        match list_images(&config) {
            Err(AlbumError::DirectoryNotFound(path)) => assert_eq!(path, config.images_dir),
            other => panic!("expected DirectoryNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_sorted_case_insensitively() {
        let (_root, config) = album_with(&["200307b.png", "B.gif", "200307a.jpg", "a.webp"]);

        let images = list_images(&config).unwrap();
        assert_eq!(names(&images), vec!["200307a.jpg", "200307b.png", "a.webp", "B.gif"]);

        // Same directory, same order
        assert_eq!(list_images(&config).unwrap(), images);
    }

    #[test]
    fn test_extension_filtering() {
        let (_root, config) = album_with(&["a.txt", "a.JPG", "c.Jpg", "d.jpeg", "notes"]);
        fs::create_dir(config.images_dir.join("b.jpg")).unwrap();
        fs::create_dir_all(config.images_dir.join("nested")).unwrap();
        fs::write(config.images_dir.join("nested/e.jpg"), b"").unwrap();

        let images = list_images(&config).unwrap();
        assert_eq!(names(&images), vec!["a.JPG", "c.Jpg", "d.jpeg"]);
    }

    #[test]
    fn test_case_only_differences_are_deterministic() {
        let mut images = vec![ImageFile::new("a.jpg"), ImageFile::new("A.jpg")];
        sort_images(&mut images);
        assert_eq!(names(&images), vec!["A.jpg", "a.jpg"]);

        let mut reversed = vec![ImageFile::new("A.jpg"), ImageFile::new("a.jpg")];
        sort_images(&mut reversed);
        assert_eq!(reversed, images);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinks() {
        let (_root, config) = album_with(&["real.jpg"]);
        let dir = &config.images_dir;
        fs::create_dir(dir.join("sub")).unwrap();

        std::os::unix::fs::symlink(dir.join("real.jpg"), dir.join("link.jpg")).unwrap();
        std::os::unix::fs::symlink(dir.join("sub"), dir.join("dirlink.jpg")).unwrap();
        std::os::unix::fs::symlink(dir.join("gone.jpg"), dir.join("broken.jpg")).unwrap();

        let images = list_images(&config).unwrap();
        assert_eq!(names(&images), vec!["link.jpg", "real.jpg"]);
    }
}
