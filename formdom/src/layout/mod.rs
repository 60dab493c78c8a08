mod rect;

use std::collections::HashMap;

pub use rect::Rect;

/// Client rectangles keyed by element id, as measured by the host after layout.
pub type LayoutResult = HashMap<String, Rect>;

/// The visible window onto the document.
///
/// `scroll_x`/`scroll_y` are the document offsets of the window's top-left
/// corner; element rects in a [`LayoutResult`] are relative to that corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub scroll_x: i32,
    pub scroll_y: i32,
    pub width: i32,
    pub height: i32,
}

impl Viewport {
    pub const fn new(width: i32, height: i32) -> Self {
        Self {
            scroll_x: 0,
            scroll_y: 0,
            width,
            height,
        }
    }

    pub const fn scrolled(mut self, scroll_x: i32, scroll_y: i32) -> Self {
        self.scroll_x = scroll_x;
        self.scroll_y = scroll_y;
        self
    }
}
