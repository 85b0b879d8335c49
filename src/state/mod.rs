/// State management module
///
/// This module handles all application state, including:
/// - Shared data structures (data.rs)
/// - Persisted user settings (settings.rs)

pub mod data;
pub mod settings;
