/// Tile decoding for the skin grid
///
/// Tiles are decoded and scaled to a fixed square off the UI thread, then
/// kept for the rest of the session keyed by their path.
use iced::widget::image::Handle;
use image::imageops::FilterType;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use crate::state::data::SkinEntry;

/// Side of a grid tile in pixels (square)
pub const TILE_SIZE: u32 = 80;

/// A decoded tile, RGBA8
#[derive(Debug, Clone)]
pub struct Thumbnail {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Decode and scale the tile at `path`
pub async fn load_thumbnail(path: PathBuf) -> Result<Thumbnail, String> {
    // Spawn blocking because decoding a JPEG is CPU-bound
    tokio::task::spawn_blocking(move || load_thumbnail_blocking(&path))
        .await
        .map_err(|e| format!("Task join error: {}", e))?
}

fn load_thumbnail_blocking(path: &Path) -> Result<Thumbnail, String> {
    let img = image::open(path).map_err(|e| format!("Failed to decode {}: {}", path.display(), e))?;

    let tile = img
        .resize_exact(TILE_SIZE, TILE_SIZE, FilterType::Triangle)
        .to_rgba8();

    Ok(Thumbnail {
        width: tile.width(),
        height: tile.height(),
        pixels: tile.into_raw(),
    })
}

/// Decoded tiles for the session
#[derive(Debug, Default)]
pub struct ThumbnailCache {
    loaded: HashMap<PathBuf, Handle>,
    failed: HashSet<PathBuf>,
    pending: HashSet<PathBuf>,
}

impl ThumbnailCache {
    pub fn get(&self, path: &Path) -> Option<&Handle> {
        self.loaded.get(path)
    }

    /// Tile paths in `entries` that still need decoding.
    ///
    /// Returned paths are marked pending so they are only requested once.
    pub fn request(&mut self, entries: &[SkinEntry]) -> Vec<PathBuf> {
        let mut wanted = Vec::new();
        for path in entries.iter().filter_map(|e| e.thumb_path.as_ref()) {
            if self.loaded.contains_key(path) || self.failed.contains(path) {
                continue;
            }
            if self.pending.insert(path.clone()) {
                wanted.push(path.clone());
            }
        }
        wanted
    }

    /// Store the outcome of a decode started by [`Self::request`]
    pub fn insert(&mut self, path: PathBuf, result: Result<Thumbnail, String>) {
        self.pending.remove(&path);
        match result {
            Ok(thumb) => {
                let handle = Handle::from_rgba(thumb.width, thumb.height, thumb.pixels);
                self.loaded.insert(path, handle);
            }
            Err(_) => {
                self.failed.insert(path);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn entry(folder: &str, thumb: Option<&str>) -> SkinEntry {
        SkinEntry::new(folder.to_string(), thumb.map(PathBuf::from))
    }

    fn tiny() -> Thumbnail {
        Thumbnail {
            width: 1,
            height: 1,
            pixels: vec![0, 0, 0, 255],
        }
    }

    #[tokio::test]
    async fn test_load_thumbnail_scales_to_tile() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("ahri_base_tile_0.jpg");
        image::RgbImage::from_pixel(200, 120, image::Rgb([200, 40, 90]))
            .save(&path)
            .unwrap();

        let thumb = load_thumbnail(path).await.unwrap();
        assert_eq!((thumb.width, thumb.height), (TILE_SIZE, TILE_SIZE));
        assert_eq!(thumb.pixels.len(), (TILE_SIZE * TILE_SIZE * 4) as usize);
    }

    #[tokio::test]
    async fn test_load_thumbnail_rejects_garbage() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("broken_tile_0.jpg");
        std::fs::write(&path, b"not a jpeg").unwrap();

        assert!(load_thumbnail(path).await.is_err());
    }

    #[test]
    fn test_request_skips_missing_pending_and_known() {
        let mut cache = ThumbnailCache::default();
        let entries = vec![
            entry("Skin02", Some("/a/skin02_tile_0.jpg")),
            entry("Skin01", None),
            entry("Base", Some("/a/base_tile_0.jpg")),
        ];

        let first = cache.request(&entries);
        assert_eq!(
            first,
            vec![PathBuf::from("/a/skin02_tile_0.jpg"), PathBuf::from("/a/base_tile_0.jpg")]
        );

        // Still pending, so nothing new
        assert!(cache.request(&entries).is_empty());

        cache.insert(PathBuf::from("/a/skin02_tile_0.jpg"), Ok(tiny()));
        cache.insert(PathBuf::from("/a/base_tile_0.jpg"), Err("bad".into()));
        assert!(cache.get(Path::new("/a/skin02_tile_0.jpg")).is_some());
        assert!(cache.get(Path::new("/a/base_tile_0.jpg")).is_none());
        assert!(cache.request(&entries).is_empty());
    }
}
