use iced::widget::image::Handle;
use iced::widget::{container, mouse_area, scrollable, text, tooltip, Image};
use iced::{Element, Length, Pixels};
use iced_aw::Wrap;
use std::time::{Duration, Instant};

use super::thumbnail::{ThumbnailCache, TILE_SIZE};
use crate::state::data::SkinEntry;
use crate::Message;

/// Two presses on the same tile within this window count as a double-click
pub const DOUBLE_CLICK_WINDOW: Duration = Duration::from_millis(400);

const TILE_SPACING: Pixels = Pixels(8.0);

/// Turns single tile presses into double-clicks
#[derive(Debug, Default)]
pub struct ClickTracker {
    last: Option<(String, Instant)>,
}

impl ClickTracker {
    /// Record a press on `folder` at `now`; true if it completes a double-click
    pub fn register(&mut self, folder: &str, now: Instant) -> bool {
        if let Some((prev, at)) = &self.last {
            if prev == folder && now.saturating_duration_since(*at) <= DOUBLE_CLICK_WINDOW {
                self.last = None;
                return true;
            }
        }
        self.last = Some((folder.to_string(), now));
        false
    }

    pub fn reset(&mut self) {
        self.last = None;
    }
}

/// Grid of skin tiles, wrapping to the window width
pub fn skin_grid<'a>(skins: &'a [SkinEntry], thumbnails: &'a ThumbnailCache) -> Element<'a, Message> {
    let tiles: Vec<Element<'a, Message>> = skins
        .iter()
        .map(|skin| skin_tile(skin, thumbnails))
        .collect();

    scrollable(
        Wrap::with_elements(tiles)
            .spacing(TILE_SPACING)
            .line_spacing(TILE_SPACING),
    )
    .height(Length::Fill)
    .into()
}

fn skin_tile<'a>(skin: &'a SkinEntry, thumbnails: &'a ThumbnailCache) -> Element<'a, Message> {
    let side = TILE_SIZE as f32;

    let face: Element<'a, Message> = match skin.thumb_path.as_deref().and_then(|p| thumbnails.get(p)) {
        Some(handle) => Image::<Handle>::new(handle.clone()).width(side).height(side).into(),
        // Placeholder skins and tiles still decoding
        None => container(text(&skin.folder).size(11))
            .center_x(side)
            .center_y(side)
            .style(container::bordered_box)
            .into(),
    };

    tooltip(
        mouse_area(face).on_press(Message::TileClicked(skin.folder.clone())),
        container(text(&skin.folder).size(12)).padding(2),
        tooltip::Position::Bottom,
    )
    .style(container::rounded_box)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_double_click_on_same_tile() {
        let mut clicks = ClickTracker::default();
        let t0 = Instant::now();

        assert!(!clicks.register("Skin02", t0));
        assert!(clicks.register("Skin02", t0 + Duration::from_millis(200)));
        // A third press starts over
        assert!(!clicks.register("Skin02", t0 + Duration::from_millis(300)));
    }

    #[test]
    fn test_slow_or_different_presses_are_single() {
        let mut clicks = ClickTracker::default();
        let t0 = Instant::now();

        assert!(!clicks.register("Skin02", t0));
        assert!(!clicks.register("Skin01", t0 + Duration::from_millis(100)));
        assert!(!clicks.register("Skin01", t0 + Duration::from_millis(600)));
    }

    #[test]
    fn test_reset_forgets_pending_press() {
        let mut clicks = ClickTracker::default();
        let t0 = Instant::now();

        assert!(!clicks.register("Base", t0));
        clicks.reset();
        assert!(!clicks.register("Base", t0 + Duration::from_millis(50)));
    }
}
