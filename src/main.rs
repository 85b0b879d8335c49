use iced::widget::{button, column, horizontal_space, pick_list, row, text};
use iced::{Color, Element, Length, Task, Theme};
use rfd::FileDialog;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{error, info, warn};

mod assets;
mod logging;
mod state;
mod ui;

use assets::locator::{list_valid_categories, skin_images_dir};
use assets::skins::build_skin_list;
use state::data::SkinEntry;
use state::settings::{AppTheme, Settings};
use ui::grid::{skin_grid, ClickTracker};
use ui::thumbnail::{load_thumbnail, Thumbnail, ThumbnailCache};

const APP_NAME: &str = "Splash Finder";
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
const APP_AUTHOR: &str = env!("CARGO_PKG_AUTHORS");

/// Main application state
struct SplashFinder {
    settings: Settings,
    /// None when the config directory could not be determined
    settings_path: Option<PathBuf>,
    /// Champions under the configured root
    categories: Vec<String>,
    selected: Option<String>,
    /// Skins of the selected champion, in display order
    skins: Vec<SkinEntry>,
    thumbnails: ThumbnailCache,
    clicks: ClickTracker,
    /// Status message to display to the user
    status: String,
    /// The root folder could not be listed; offer to pick another
    root_unavailable: bool,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// User picked a champion from the list
    CategorySelected(String),
    /// User pressed a skin tile (two quick presses open its folder)
    TileClicked(String),
    /// Background tile decode finished
    ThumbnailLoaded(PathBuf, Result<Thumbnail, String>),
    /// User clicked "Choose folder"
    ChooseRoot,
}

impl SplashFinder {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        let (settings, settings_path, status) = load_settings();

        let mut app = SplashFinder {
            settings,
            settings_path,
            categories: Vec::new(),
            selected: None,
            skins: Vec::new(),
            thumbnails: ThumbnailCache::default(),
            clicks: ClickTracker::default(),
            status: String::new(),
            root_unavailable: false,
        };
        app.reload_categories();
        if let Some(status) = status {
            app.status = status;
        }

        info!(champions = app.categories.len(), "{} v{} started", APP_NAME, APP_VERSION);
        (app, Task::none())
    }

    fn title(&self) -> String {
        format!("{} - v{}", APP_NAME, APP_VERSION)
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::CategorySelected(champion) => self.select_category(champion),
            Message::TileClicked(folder) => {
                if self.clicks.register(&folder, Instant::now()) {
                    self.open_skin_folder(&folder);
                }
                Task::none()
            }
            Message::ThumbnailLoaded(path, result) => {
                if let Err(e) = &result {
                    warn!(path = %path.display(), "thumbnail failed: {}", e);
                }
                self.thumbnails.insert(path, result);
                Task::none()
            }
            Message::ChooseRoot => {
                // Show the native folder picker dialog
                let folder = FileDialog::new()
                    .set_title("Select the League of Legends Character folder")
                    .pick_folder();

                if let Some(folder) = folder {
                    self.settings.root_path = folder;
                    self.save_settings();
                    self.reload_categories();
                }
                Task::none()
            }
        }
    }

    /// Re-scan the root folder for champions and drop the current selection
    fn reload_categories(&mut self) {
        self.selected = None;
        self.skins.clear();
        self.clicks.reset();

        match list_valid_categories(&self.settings.root_path) {
            Ok(categories) => {
                self.root_unavailable = false;
                self.status = if categories.is_empty() {
                    format!("No champions found in {}", self.settings.root_path.display())
                } else {
                    String::new()
                };
                self.categories = categories;
            }
            Err(e) => {
                error!("{}", e);
                self.root_unavailable = true;
                self.categories.clear();
                self.status = e.to_string();
            }
        }
    }

    /// Replace the grid with the skins of `champion` and start decoding their tiles
    fn select_category(&mut self, champion: String) -> Task<Message> {
        self.clicks.reset();
        let prefs = self.settings.display_prefs();

        let result = build_skin_list(&champion, &self.settings.root_path, prefs);
        self.selected = Some(champion);

        match result {
            Ok(skins) => {
                self.skins = skins;
                self.status.clear();
            }
            Err(e) => {
                error!("{}", e);
                self.skins.clear();
                self.status = e.to_string();
                return Task::none();
            }
        }

        let loads = self.thumbnails.request(&self.skins).into_iter().map(|path| {
            let key = path.clone();
            Task::perform(load_thumbnail(path), move |result| {
                Message::ThumbnailLoaded(key.clone(), result)
            })
        });
        Task::batch(loads)
    }

    fn open_skin_folder(&mut self, folder: &str) {
        let Some(champion) = &self.selected else {
            return;
        };

        let path = skin_images_dir(&self.settings.root_path, champion, folder);
        if let Err(e) = assets::open_folder(&path) {
            error!("{}", e);
            self.status = e.to_string();
        }
    }

    fn save_settings(&mut self) {
        let Some(path) = &self.settings_path else {
            return;
        };
        if let Err(e) = self.settings.save(path) {
            error!("{}", e);
            self.status = e.to_string();
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let champions = pick_list(
            self.categories.as_slice(),
            self.selected.as_ref(),
            Message::CategorySelected,
        )
        .placeholder("Select a Champion")
        .text_size(13)
        .width(Length::Fill);

        let hints = row![
            text("Double-click to open a splash folder.").size(9),
            horizontal_space(),
            text(format!("v{} by {}", APP_VERSION, APP_AUTHOR))
                .size(7)
                .color(Color::from_rgb(0.5, 0.5, 0.5)),
        ];

        let mut content = column![champions, hints].spacing(6).padding(10);

        if !self.status.is_empty() {
            content = content.push(text(&self.status).size(11));
        }
        if self.root_unavailable {
            content = content.push(button("Choose folder").on_press(Message::ChooseRoot).padding(6));
        }

        content.push(skin_grid(&self.skins, &self.thumbnails)).into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        match self.settings.theme {
            AppTheme::Dark => Theme::Dark,
            AppTheme::Light => Theme::Light,
        }
    }
}

/// Load settings, falling back to defaults with a status message on failure
fn load_settings() -> (Settings, Option<PathBuf>, Option<String>) {
    let path = match Settings::default_path() {
        Ok(path) => path,
        Err(e) => {
            warn!("{}", e);
            return (Settings::default(), None, Some(e.to_string()));
        }
    };

    match Settings::load_or_init(&path) {
        Ok(settings) => {
            info!(path = %path.display(), "settings loaded");
            (settings, Some(path), None)
        }
        Err(e) => {
            warn!("{}; using defaults", e);
            let status = format!("{}. Using defaults.", e);
            (Settings::default(), Some(path), Some(status))
        }
    }
}

fn main() -> iced::Result {
    if let Err(e) = logging::init_logging("info") {
        eprintln!("Failed to initialize logging: {}", e);
    }

    iced::application(SplashFinder::title, SplashFinder::update, SplashFinder::view)
        .theme(SplashFinder::theme)
        .window_size((390.0, 545.0))
        .resizable(false)
        .centered()
        .run_with(SplashFinder::new)
}
