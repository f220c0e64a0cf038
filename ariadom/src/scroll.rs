//! Scroll-into-view arithmetic for vertically scrolling containers.

/// Where a target should land in the viewport, after `scrollIntoView`'s
/// `block` option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollBlock {
    Start,
    Center,
    End,
    /// Scroll the least distance that makes the item visible; leave the
    /// offset alone when it already is.
    #[default]
    Nearest,
}

/// Compute the scroll offset that brings `item_start..item_start+item_len`
/// into a viewport of `viewport` rows currently scrolled to `offset`.
pub fn scroll_into_view(
    offset: usize,
    viewport: usize,
    item_start: usize,
    item_len: usize,
    block: ScrollBlock,
) -> usize {
    let item_end = item_start + item_len;
    match block {
        ScrollBlock::Start => item_start,
        ScrollBlock::End => item_end.saturating_sub(viewport),
        ScrollBlock::Center => (item_start + item_len / 2).saturating_sub(viewport / 2),
        ScrollBlock::Nearest => {
            if item_start < offset {
                item_start
            } else if item_end > offset + viewport {
                // Items taller than the viewport align to their top edge
                if item_len > viewport {
                    item_start
                } else {
                    item_end - viewport
                }
            } else {
                offset
            }
        }
    }
}

/// Clamp `offset` so a viewport never scrolls past the content end.
pub fn clamp_offset(offset: usize, viewport: usize, content: usize) -> usize {
    offset.min(content.saturating_sub(viewport))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nearest_leaves_visible_item_alone() {
        assert_eq!(scroll_into_view(2, 5, 4, 1, ScrollBlock::Nearest), 2);
        assert_eq!(scroll_into_view(2, 5, 6, 1, ScrollBlock::Nearest), 2);
    }

    #[test]
    fn test_nearest_scrolls_down_to_bottom_edge() {
        assert_eq!(scroll_into_view(0, 5, 5, 1, ScrollBlock::Nearest), 1);
        assert_eq!(scroll_into_view(0, 5, 9, 1, ScrollBlock::Nearest), 5);
    }

    #[test]
    fn test_nearest_scrolls_up_to_top_edge() {
        assert_eq!(scroll_into_view(6, 5, 3, 1, ScrollBlock::Nearest), 3);
    }

    #[test]
    fn test_other_blocks() {
        assert_eq!(scroll_into_view(0, 4, 10, 1, ScrollBlock::Start), 10);
        assert_eq!(scroll_into_view(0, 4, 10, 1, ScrollBlock::End), 7);
        assert_eq!(scroll_into_view(0, 4, 10, 1, ScrollBlock::Center), 8);
    }

    #[test]
    fn test_clamp_offset() {
        assert_eq!(clamp_offset(9, 4, 10), 6);
        assert_eq!(clamp_offset(3, 4, 2), 0);
    }
}
