use crate::buffer::Buffer;
use crate::element::{Content, Element};
use crate::layout::{LayoutResult, Rect};
use crate::text::{char_width, display_width, truncate_to_width};
use crate::types::{Border, Rgb, Style, TextStyle};

/// Foreground and text attributes flow down the tree; backgrounds do not
/// need to since children paint over their parent's cells.
#[derive(Debug, Clone, Copy)]
struct Inherited {
    fg: Rgb,
    style: TextStyle,
}

pub fn render_to_buffer(root: &Element, layout: &LayoutResult, buf: &mut Buffer) {
    let inherited = Inherited {
        fg: Rgb::WHITE,
        style: TextStyle::new(),
    };
    render_element(root, layout, buf, inherited);
}

fn render_element(element: &Element, layout: &LayoutResult, buf: &mut Buffer, parent: Inherited) {
    // Elements scrolled out of view have no layout entry
    let (Some(rect), Some(clip)) = (layout.get(&element.id), layout.visible(&element.id)) else {
        return;
    };

    let style = element.effective_style();
    let inherited = Inherited {
        fg: style.foreground.unwrap_or(parent.fg),
        style: merge_text_style(parent.style, style.text_style),
    };

    if !clip.is_empty() {
        if let Some(bg) = style.background {
            fill(buf, clip, bg);
        }
        if style.border != Border::None {
            draw_border(buf, rect, clip, style, inherited.fg);
        }
    }

    let border = style.border.thickness();
    let padding = element.padding;
    let inner = rect.shrink(
        padding.top + border,
        padding.right + border,
        padding.bottom + border,
        padding.left + border,
    );
    let area = inner.intersect(clip);

    match &element.content {
        Content::None => {}
        Content::Text(text) => {
            for (i, line) in text.lines().enumerate() {
                let Ok(offset) = u16::try_from(i) else { break };
                let y = inner.y.saturating_add(offset);
                if y >= inner.bottom() {
                    break;
                }
                let line = truncate_to_width(line, usize::from(inner.width));
                put_str(buf, inner.x, y, &line, area, inherited);
            }
        }
        Content::TextInput {
            value,
            cursor,
            placeholder,
            focused,
        } => draw_input(buf, inner, area, value, *cursor, placeholder.as_deref(), *focused, inherited),
        Content::Children(children) => {
            for child in children {
                render_element(child, layout, buf, inherited);
            }
        }
    }
}

fn merge_text_style(parent: TextStyle, own: TextStyle) -> TextStyle {
    TextStyle {
        bold: parent.bold || own.bold,
        italic: parent.italic || own.italic,
        underline: parent.underline || own.underline,
        dim: parent.dim || own.dim,
        reverse: parent.reverse || own.reverse,
    }
}

fn fill(buf: &mut Buffer, area: Rect, bg: Rgb) {
    for y in area.y..area.bottom() {
        for x in area.x..area.right() {
            if let Some(cell) = buf.get_mut(x, y) {
                cell.char = ' ';
                cell.bg = bg;
                cell.wide_continuation = false;
            }
        }
    }
}

fn put_char(buf: &mut Buffer, x: u16, y: u16, ch: char, clip: Rect, fg: Rgb, style: TextStyle) {
    if !clip.contains(x, y) {
        return;
    }
    if let Some(cell) = buf.get_mut(x, y) {
        cell.char = ch;
        cell.fg = fg;
        cell.style = style;
        cell.wide_continuation = false;
    }
}

/// Write `text` starting at (x, y), keeping each cell's background.
fn put_str(buf: &mut Buffer, x: u16, y: u16, text: &str, clip: Rect, inherited: Inherited) {
    let mut col = x;
    for ch in text.chars() {
        let width = char_width(ch) as u16;
        if width == 0 {
            continue;
        }
        if col.saturating_add(width) > clip.right() {
            break;
        }
        put_char(buf, col, y, ch, clip, inherited.fg, inherited.style);
        if width == 2 && clip.contains(col + 1, y) {
            if let Some(cell) = buf.get_mut(col + 1, y) {
                cell.wide_continuation = true;
            }
        }
        col += width;
    }
}

fn draw_border(buf: &mut Buffer, rect: Rect, clip: Rect, style: &Style, fg: Rgb) {
    if rect.width < 2 || rect.height < 2 {
        return;
    }
    let (tl, tr, bl, br) = match style.border {
        Border::Rounded => ('╭', '╮', '╰', '╯'),
        Border::Single | Border::None => ('┌', '┐', '└', '┘'),
    };
    let fg = style.border_color.unwrap_or(fg);
    let text_style = TextStyle::new();
    let (left, top) = (rect.x, rect.y);
    let (right, bottom) = (rect.right() - 1, rect.bottom() - 1);

    for x in left + 1..right {
        put_char(buf, x, top, '─', clip, fg, text_style);
        put_char(buf, x, bottom, '─', clip, fg, text_style);
    }
    for y in top + 1..bottom {
        put_char(buf, left, y, '│', clip, fg, text_style);
        put_char(buf, right, y, '│', clip, fg, text_style);
    }
    put_char(buf, left, top, tl, clip, fg, text_style);
    put_char(buf, right, top, tr, clip, fg, text_style);
    put_char(buf, left, bottom, bl, clip, fg, text_style);
    put_char(buf, right, bottom, br, clip, fg, text_style);
}

#[allow(clippy::too_many_arguments)]
fn draw_input(
    buf: &mut Buffer,
    inner: Rect,
    area: Rect,
    value: &str,
    cursor: usize,
    placeholder: Option<&str>,
    focused: bool,
    inherited: Inherited,
) {
    if inner.is_empty() {
        return;
    }

    if value.is_empty() {
        if let Some(placeholder) = placeholder {
            let dimmed = Inherited {
                style: inherited.style.dim(),
                ..inherited
            };
            let text = truncate_to_width(placeholder, usize::from(inner.width));
            put_str(buf, inner.x, inner.y, &text, area, dimmed);
        }
    } else {
        // Scroll horizontally so the cursor cell stays inside the field
        let cursor = floor_char_boundary(value, cursor);
        let cursor_col = display_width(&value[..cursor]);
        let skip = (cursor_col + 1).saturating_sub(usize::from(inner.width));
        let mut skipped = 0;
        let visible: String = value
            .chars()
            .skip_while(|c| {
                let take = skipped < skip;
                if take {
                    skipped += char_width(*c);
                }
                take
            })
            .collect();
        put_str(buf, inner.x, inner.y, &visible, area, inherited);

        if focused {
            let col = cursor_col.saturating_sub(skipped);
            draw_cursor(buf, inner, area, col, inherited);
        }
        return;
    }

    if focused {
        draw_cursor(buf, inner, area, 0, inherited);
    }
}

fn draw_cursor(buf: &mut Buffer, inner: Rect, area: Rect, col: usize, inherited: Inherited) {
    let Ok(col) = u16::try_from(col) else { return };
    let x = inner.x.saturating_add(col);
    if !area.contains(x, inner.y) {
        return;
    }
    if let Some(cell) = buf.get_mut(x, inner.y) {
        cell.fg = inherited.fg;
        cell.style = inherited.style.reverse();
    }
}

fn floor_char_boundary(s: &str, index: usize) -> usize {
    let mut index = index.min(s.len());
    while !s.is_char_boundary(index) {
        index -= 1;
    }
    index
}
