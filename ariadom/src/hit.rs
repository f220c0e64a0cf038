use crate::element::{Content, Element};
use crate::layout::LayoutResult;

/// Find the deepest clickable element at the given coordinates.
/// Returns None if no clickable element contains the point.
pub fn hit_test(layout: &LayoutResult, root: &Element, x: u16, y: u16) -> Option<String> {
    hit_test_where(layout, root, x, y, &|el| el.clickable)
}

/// Find any element (clickable or not) at the given coordinates.
/// Returns the deepest element containing the point.
pub fn hit_test_any(layout: &LayoutResult, root: &Element, x: u16, y: u16) -> Option<String> {
    hit_test_where(layout, root, x, y, &|_| true)
}

fn hit_test_where(
    layout: &LayoutResult,
    element: &Element,
    x: u16,
    y: u16,
    accept: &dyn Fn(&Element) -> bool,
) -> Option<String> {
    // Only the visible part of an element (after scroll clipping) is hittable
    let visible = layout.visible(&element.id)?;

    // Children of a scrolled container may lie outside it, so descend before
    // rejecting on this element's bounds
    if let Content::Children(children) = &element.content {
        // Check children in reverse order (last rendered = on top)
        for child in children.iter().rev() {
            if let Some(id) = hit_test_where(layout, child, x, y, accept) {
                return Some(id);
            }
        }
    }

    if visible.contains(x, y) && accept(element) {
        Some(element.id.clone())
    } else {
        None
    }
}
