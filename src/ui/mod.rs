//! Terminal scenes. Tightly coupled to the binary's event loop and kept
//! out of the library surface.

pub mod setup_scene;
pub mod shop_scene;
pub mod town_scene;

use ratatui::layout::Rect;

/// A centered overlay rect of the given size, clamped to the frame.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect {
        x: area.x + (area.width - w) / 2,
        y: area.y + (area.height - h) / 2,
        width: w,
        height: h,
    }
}
