use crate::element::Element;
use crate::layout::LayoutResult;

/// Find the deepest clickable element at the given client coordinates.
/// Hidden subtrees never receive hits.
pub fn hit_test(layout: &LayoutResult, root: &Element, x: i32, y: i32) -> Option<String> {
    hit_test_element(layout, root, x, y, true)
}

/// Find the deepest element (clickable or not) at the given client coordinates.
pub fn hit_test_any(layout: &LayoutResult, root: &Element, x: i32, y: i32) -> Option<String> {
    hit_test_element(layout, root, x, y, false)
}

fn hit_test_element(
    layout: &LayoutResult,
    element: &Element,
    x: i32,
    y: i32,
    clickable_only: bool,
) -> Option<String> {
    if element.hidden {
        return None;
    }

    // Children are checked even when this element has no rect: popups and
    // other absolutely placed subtrees can sit outside their parent's box.
    for child in element.child_elements().iter().rev() {
        if let Some(id) = hit_test_element(layout, child, x, y, clickable_only) {
            return Some(id);
        }
    }

    let rect = layout.get(&element.id)?;
    if !rect.contains(x, y) {
        return None;
    }

    if !clickable_only || element.clickable {
        Some(element.id.clone())
    } else {
        None
    }
}
