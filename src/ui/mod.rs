/// Presentation helpers for the main window
///
/// - Tile decoding and the session thumbnail cache (thumbnail.rs)
/// - The skin grid and double-click handling (grid.rs)

pub mod grid;
pub mod thumbnail;
