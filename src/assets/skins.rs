use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::error::{AssetError, Result};
use super::locator::{list_candidate_skins, list_files, skin_images_dir, BASE_SKIN};
use crate::state::data::{DisplayPrefs, SkinEntry};

/// Tiles at or below this size are placeholders shipped for unreleased skins
pub const PLACEHOLDER_MAX_BYTES: u64 = 20 * 1024;

/// Numbered skin folders are named `Skin01`, `Skin02`, ...
const SKIN_PREFIX: &str = "Skin";

/// Marker in the file name of the square tile art
const TILE_MARKER: &str = "_tile_";

/// Find the tile image in a skin's `Images` folder.
///
/// Candidates are file names containing `_tile_` with a `.jpg`/`.jpeg`
/// extension, compared case-insensitively. The first one by file name wins.
pub fn resolve_thumbnail(images_dir: &Path) -> Result<Option<PathBuf>> {
    Ok(list_files(images_dir)?
        .into_iter()
        .find(|name| is_tile(name))
        .map(|name| images_dir.join(name)))
}

fn is_tile(file_name: &str) -> bool {
    let lower = file_name.to_lowercase();
    lower.contains(TILE_MARKER) && (lower.ends_with(".jpg") || lower.ends_with(".jpeg"))
}

/// Ordering key for a skin folder.
///
/// `Base` and a bare `Skin` are 0, `SkinNN` is NN. Any other name has no key.
pub fn sort_key(folder: &str) -> Option<u64> {
    if folder == BASE_SKIN {
        return Some(0);
    }

    let digits = folder.strip_prefix(SKIN_PREFIX)?;
    if digits.is_empty() {
        return Some(0);
    }
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Build the ordered list of skins to show for `category`.
///
/// Folders are ordered by [`sort_key`] (highest first when
/// `prefs.reverse_order`), then each one's tile is resolved. Unless
/// `prefs.show_placeholder` is set, only skins whose tile is larger than
/// [`PLACEHOLDER_MAX_BYTES`] are kept. Any filesystem error fails the whole
/// query.
pub fn build_skin_list(category: &str, root: &Path, prefs: DisplayPrefs) -> Result<Vec<SkinEntry>> {
    let mut ranked = Vec::new();
    for folder in list_candidate_skins(category, root)? {
        match sort_key(&folder) {
            Some(key) => ranked.push((key, folder)),
            None => warn!(category, folder = %folder, "skipping skin folder with unrecognised name"),
        }
    }

    // Stable in both directions: equal keys keep listing order.
    if prefs.reverse_order {
        ranked.sort_by(|a, b| b.0.cmp(&a.0));
    } else {
        ranked.sort_by(|a, b| a.0.cmp(&b.0));
    }

    let candidates = ranked.len();
    let mut entries = Vec::with_capacity(candidates);
    for (_, folder) in ranked {
        let thumb_path = resolve_thumbnail(&skin_images_dir(root, category, &folder))?;

        if prefs.show_placeholder || is_real_tile(thumb_path.as_deref())? {
            entries.push(SkinEntry::new(folder, thumb_path));
        }
    }

    debug!(category, candidates, kept = entries.len(), "built skin list");
    Ok(entries)
}

fn is_real_tile(thumb: Option<&Path>) -> Result<bool> {
    let Some(path) = thumb else {
        return Ok(false);
    };
    let meta = fs::metadata(path).map_err(|e| AssetError::unavailable(path, e))?;
    Ok(meta.len() > PLACEHOLDER_MAX_BYTES)
}
