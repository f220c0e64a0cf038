mod flex;
mod rect;

use std::collections::HashMap;

pub use flex::{intrinsic_height, intrinsic_width};
pub use rect::Rect;

use crate::element::Element;

/// Scroll metrics for a clipping container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    /// Rows of the content box inside the enclosing clip.
    pub height: u16,
    /// Total height of the laid-out children.
    pub content_height: u16,
}

/// Rects computed by [`layout`], keyed by element ID.
///
/// Elements scrolled out of their container are absent. `visible` is the
/// element's rect clipped by every ancestor scroll container.
#[derive(Debug, Clone, Default)]
pub struct LayoutResult {
    rects: HashMap<String, Rect>,
    clips: HashMap<String, Rect>,
    viewports: HashMap<String, Viewport>,
}

impl LayoutResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an unclipped rect.
    pub fn insert(&mut self, id: impl Into<String>, rect: Rect) {
        self.insert_clipped(id, rect, rect);
    }

    pub fn insert_clipped(&mut self, id: impl Into<String>, rect: Rect, clip: Rect) {
        let id = id.into();
        self.clips.insert(id.clone(), clip);
        self.rects.insert(id, rect);
    }

    pub fn get(&self, id: &str) -> Option<Rect> {
        self.rects.get(id).copied()
    }

    pub fn visible(&self, id: &str) -> Option<Rect> {
        self.clips.get(id).copied()
    }

    pub fn viewport(&self, id: &str) -> Option<Viewport> {
        self.viewports.get(id).copied()
    }

    pub(crate) fn set_viewport(&mut self, id: &str, viewport: Viewport) {
        self.viewports.insert(id.to_string(), viewport);
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }
}

pub fn layout(root: &Element, available: Rect) -> LayoutResult {
    let mut result = LayoutResult::new();
    flex::layout_element(root, available, available, &mut result);
    log::trace!("[layout] {} elements in {:?}", result.len(), available);
    result
}
