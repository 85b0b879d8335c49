use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

use super::error::{AssetError, Result};

/// Folder under each champion that holds one folder per skin
pub const SKINS_DIR: &str = "Skins";
/// Folder under each skin that holds its splash art
pub const IMAGES_DIR: &str = "Images";
/// Skin folder every valid champion ships with
pub const BASE_SKIN: &str = "Base";
/// First numbered skin folder; a champion without it is not listed
pub const FIRST_SKIN: &str = "Skin01";

/// List the champions under `root` that have both a base skin and a first
/// skin with an `Images` folder.
///
/// Names come back in file-name order. A missing or unreadable `root` is an
/// error; dangling symlinks inside it are skipped.
pub fn list_valid_categories(root: &Path) -> Result<Vec<String>> {
    let categories: Vec<String> = list_subdirs(root)?
        .into_iter()
        .filter(|name| {
            let skins = root.join(name).join(SKINS_DIR);
            skins.join(BASE_SKIN).join(IMAGES_DIR).is_dir()
                && skins.join(FIRST_SKIN).join(IMAGES_DIR).is_dir()
        })
        .collect();

    debug!(root = %root.display(), count = categories.len(), "listed champions");
    Ok(categories)
}

/// List the skin folders of `category` that contain an `Images` folder.
///
/// `category` is trusted to be one of [`list_valid_categories`]'s results.
pub fn list_candidate_skins(category: &str, root: &Path) -> Result<Vec<String>> {
    let skins = root.join(category).join(SKINS_DIR);

    Ok(list_subdirs(&skins)?
        .into_iter()
        .filter(|folder| skins.join(folder).join(IMAGES_DIR).is_dir())
        .collect())
}

/// `<root>/<category>/Skins/<folder>/Images`
pub fn skin_images_dir(root: &Path, category: &str, folder: &str) -> PathBuf {
    root.join(category)
        .join(SKINS_DIR)
        .join(folder)
        .join(IMAGES_DIR)
}

/// Names of the immediate sub-directories of `dir`, sorted by file name
pub(crate) fn list_subdirs(dir: &Path) -> Result<Vec<String>> {
    list_entries(dir, true)
}

/// Names of the immediate regular files in `dir`, sorted by file name
pub(crate) fn list_files(dir: &Path) -> Result<Vec<String>> {
    list_entries(dir, false)
}

fn list_entries(dir: &Path, want_dirs: bool) -> Result<Vec<String>> {
    let meta = fs::metadata(dir).map_err(|e| AssetError::unavailable(dir, e))?;
    if !meta.is_dir() {
        return Err(AssetError::unavailable(
            dir,
            io::Error::new(io::ErrorKind::Other, "not a directory"),
        ));
    }

    let mut names = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| {
            let path = e.path().map(Path::to_path_buf).unwrap_or_else(|| dir.to_path_buf());
            AssetError::unavailable(path, e)
        })?;

        // Follows symlinks; a dangling one is neither and gets skipped.
        let path = entry.path();
        let wanted = if want_dirs { path.is_dir() } else { path.is_file() };
        if !wanted {
            continue;
        }

        match entry.file_name().to_str() {
            Some(name) => names.push(name.to_string()),
            None => warn!(path = %path.display(), "skipping non UTF-8 name"),
        }
    }

    Ok(names)
}
