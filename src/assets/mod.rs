/// Champion asset discovery
///
/// This module reads the game's `Character` folder:
/// - Finding champions and their skin folders (locator.rs)
/// - Picking a tile per skin, hiding placeholders, ordering (skins.rs)
/// - Error types shared by both (error.rs)
///
/// Everything here is a plain blocking read of the filesystem. Nothing is
/// cached between calls.

pub mod error;
pub mod locator;
pub mod skins;

use std::path::Path;
use tracing::info;

pub use error::AssetError;

/// Open a folder in the platform file manager
pub fn open_folder(path: &Path) -> error::Result<()> {
    info!(path = %path.display(), "opening folder");
    open::that(path).map_err(|source| AssetError::Open {
        path: path.to_path_buf(),
        source,
    })
}
