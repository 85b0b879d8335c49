/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the asset scanner and the UI layer.
use std::path::PathBuf;

/// One skin as shown in the thumbnail grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkinEntry {
    /// Skin folder name (e.g., "Skin07"), also used as the tooltip
    pub folder: String,
    /// Tile image inside the skin's `Images` folder, if one was found
    pub thumb_path: Option<PathBuf>,
}

impl SkinEntry {
    pub fn new(folder: String, thumb_path: Option<PathBuf>) -> Self {
        Self { folder, thumb_path }
    }
}

/// Display preferences handed to the skin scanner on every query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayPrefs {
    /// Keep skins whose tile is missing or a small placeholder
    pub show_placeholder: bool,
    /// Newest skins first
    pub reverse_order: bool,
}

impl Default for DisplayPrefs {
    fn default() -> Self {
        Self {
            show_placeholder: false,
            reverse_order: true,
        }
    }
}
