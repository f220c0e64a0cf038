use super::{LayoutResult, Rect, Viewport};
use crate::element::{Content, Element};
use crate::text::display_width;
use crate::types::{Direction, Overflow, Size};

fn clamp_u16(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}

/// Horizontal and vertical space taken by padding and border.
fn chrome(element: &Element) -> (u16, u16) {
    let border = element.style.border.thickness() * 2;
    (
        element.padding.horizontal_total().saturating_add(border),
        element.padding.vertical_total().saturating_add(border),
    )
}

fn content_box(element: &Element, rect: Rect) -> Rect {
    let border = element.style.border.thickness();
    let padding = element.padding;
    rect.shrink(
        padding.top + border,
        padding.right + border,
        padding.bottom + border,
        padding.left + border,
    )
}

fn total_gap(element: &Element, count: usize) -> u16 {
    element
        .gap
        .saturating_mul(clamp_u16(count.saturating_sub(1)))
}

fn cap_height(element: &Element, height: u16) -> u16 {
    element.max_height.map_or(height, |max| height.min(max))
}

/// Width of the element's content plus its chrome, ignoring its own `width`.
pub fn intrinsic_width(element: &Element) -> u16 {
    let (horizontal, _) = chrome(element);
    let content = match &element.content {
        Content::None => 0,
        Content::Text(text) => text.lines().map(display_width).max().unwrap_or(0),
        Content::TextInput {
            value, placeholder, ..
        } => {
            let placeholder = placeholder.as_deref().map_or(0, display_width);
            // One extra cell for the cursor past the last character
            display_width(value).max(placeholder) + 1
        }
        Content::Children(children) => match element.direction {
            Direction::Column => children
                .iter()
                .map(|c| usize::from(natural_width(c)))
                .max()
                .unwrap_or(0),
            Direction::Row => {
                children
                    .iter()
                    .map(|c| usize::from(natural_width(c)))
                    .sum::<usize>()
                    + usize::from(total_gap(element, children.len()))
            }
        },
    };
    clamp_u16(content).saturating_add(horizontal)
}

/// Height of the element's content plus its chrome when laid out at `width`,
/// capped by `max_height`.
pub fn intrinsic_height(element: &Element, width: u16) -> u16 {
    let (horizontal, vertical) = chrome(element);
    let inner_width = width.saturating_sub(horizontal);
    let content = match &element.content {
        Content::None => 0,
        Content::Text(text) => text.lines().count().max(1),
        Content::TextInput { .. } => 1,
        Content::Children(children) => match element.direction {
            Direction::Column => {
                children
                    .iter()
                    .map(|c| usize::from(natural_height(c, inner_width)))
                    .sum::<usize>()
                    + usize::from(total_gap(element, children.len()))
            }
            Direction::Row => children
                .iter()
                .map(|c| usize::from(natural_height(c, inner_width)))
                .max()
                .unwrap_or(0),
        },
    };
    cap_height(element, clamp_u16(content).saturating_add(vertical))
}

fn natural_width(element: &Element) -> u16 {
    match element.width {
        Size::Fixed(n) => n,
        Size::Fill | Size::Auto => intrinsic_width(element),
    }
}

fn natural_height(element: &Element, available_width: u16) -> u16 {
    match element.height {
        Size::Fixed(n) => cap_height(element, n),
        Size::Fill | Size::Auto => {
            intrinsic_height(element, resolve_width(element, available_width))
        }
    }
}

fn resolve_width(element: &Element, available: u16) -> u16 {
    match element.width {
        Size::Fixed(n) => n.min(available),
        Size::Fill => available,
        Size::Auto => intrinsic_width(element).min(available),
    }
}

pub(super) fn layout_element(
    element: &Element,
    available: Rect,
    clip: Rect,
    result: &mut LayoutResult,
) {
    let width = resolve_width(element, available.width);
    let height = match element.height {
        Size::Fixed(n) => cap_height(element, n),
        Size::Fill => cap_height(element, available.height),
        Size::Auto => intrinsic_height(element, width),
    }
    .min(available.height);

    let rect = Rect::new(available.x, available.y, width, height);
    result.insert_clipped(element.id.clone(), rect, rect.intersect(clip));

    let Content::Children(children) = &element.content else {
        return;
    };
    let inner = content_box(element, rect);
    match element.direction {
        Direction::Column => layout_column(element, children, inner, clip, result),
        Direction::Row => layout_row(element, children, inner, clip, result),
    }
}

fn layout_column(
    element: &Element,
    children: &[Element],
    inner: Rect,
    clip: Rect,
    result: &mut LayoutResult,
) {
    let clips_content = element.overflow_y != Overflow::Visible;
    let child_clip = if clips_content {
        inner.intersect(clip)
    } else {
        clip
    };

    // Fill children share what is left after fixed and auto children. A
    // clipping container has no leftover to share; they size to content there.
    let mut heights = Vec::with_capacity(children.len());
    let mut used = total_gap(element, children.len());
    let mut fill_count = 0u16;
    for child in children {
        if child.height == Size::Fill && !clips_content {
            fill_count += 1;
            heights.push(None);
        } else {
            let height = natural_height(child, inner.width);
            used = used.saturating_add(height);
            heights.push(Some(height));
        }
    }
    let fill = inner
        .height
        .saturating_sub(used)
        .checked_div(fill_count)
        .unwrap_or(0);

    let offset = if clips_content {
        u32::from(element.scroll_offset)
    } else {
        0
    };
    let gap = u32::from(element.gap);
    let mut cursor = 0u32;
    for (child, height) in children.iter().zip(heights) {
        let height = height.unwrap_or(fill);
        let top = cursor;
        cursor += u32::from(height) + gap;

        // Rows whose top edge is scrolled past are skipped entirely
        if top < offset {
            continue;
        }
        let y = u32::from(inner.y) + (top - offset);
        if y >= u32::from(inner.bottom()) {
            continue;
        }

        let available = Rect::new(inner.x, y as u16, inner.width, height);
        layout_element(child, available, child_clip, result);
    }

    if clips_content {
        let content_height = if children.is_empty() {
            0
        } else {
            cursor - gap
        };
        // A container running off the clip's bottom edge shows fewer rows
        let visible = clip.bottom().min(inner.bottom()).saturating_sub(inner.y);
        result.set_viewport(
            &element.id,
            Viewport {
                height: visible,
                content_height: u16::try_from(content_height).unwrap_or(u16::MAX),
            },
        );
    }
}

fn layout_row(
    element: &Element,
    children: &[Element],
    inner: Rect,
    clip: Rect,
    result: &mut LayoutResult,
) {
    let mut widths = Vec::with_capacity(children.len());
    let mut used = total_gap(element, children.len());
    let mut fill_count = 0u16;
    for child in children {
        if child.width == Size::Fill {
            fill_count += 1;
            widths.push(None);
        } else {
            let width = resolve_width(child, inner.width);
            used = used.saturating_add(width);
            widths.push(Some(width));
        }
    }
    let fill = inner
        .width
        .saturating_sub(used)
        .checked_div(fill_count)
        .unwrap_or(0);

    let mut x = inner.x;
    for (child, width) in children.iter().zip(widths) {
        let width = width
            .unwrap_or(fill)
            .min(inner.right().saturating_sub(x));
        let available = Rect::new(x, inner.y, width, inner.height);
        layout_element(child, available, clip, result);
        x = x.saturating_add(width).saturating_add(element.gap);
    }
}
