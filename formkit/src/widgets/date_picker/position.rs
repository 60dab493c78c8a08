//! Popup placement relative to the field and the viewport.

use formdom::{Rect, Viewport};

/// Where the popup goes, in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub top: i32,
    pub left: i32,
    /// Placed above the field (`is-top`).
    pub above: bool,
}

/// Place a popup of `size` (width, height) next to `anchor`.
///
/// `anchor` is the field's client rect. The popup goes below the field
/// unless the space below is too small *and* the space above fits it. The
/// left edge follows the field, clamped so the popup keeps `margin` from
/// both viewport edges; when the popup is wider than the viewport the left
/// margin wins.
pub fn place(anchor: Rect, size: (i32, i32), viewport: Viewport, margin: i32) -> Placement {
    let (width, height) = size;

    let space_below = viewport.height - anchor.bottom();
    let above = space_below < height && anchor.top() > height;

    let top = if above {
        anchor.top() + viewport.scroll_y - height - margin
    } else {
        anchor.bottom() + viewport.scroll_y + margin
    };

    let min_left = viewport.scroll_x + margin;
    let max_left = viewport.scroll_x + viewport.width - width - margin;
    let left = (anchor.left() + viewport.scroll_x).min(max_left).max(min_left);

    Placement { top, left, above }
}
