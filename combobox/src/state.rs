//! Combobox widget state.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use ariadom::scroll::{ScrollBlock, clamp_offset, scroll_into_view};
use ariadom::{LayoutResult, TextEdit};

use crate::config::ComboboxConfig;
use crate::filter::{filter_options, filter_positions};
use crate::options::OptionSet;

/// Unique identifier for a Combobox widget instance.
///
/// Prefixes the IDs of every element the widget renders, so several
/// comboboxes can share one tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComboboxId(usize);

impl ComboboxId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for ComboboxId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "combobox-{}", self.0)
    }
}

#[derive(Debug)]
pub(crate) struct ComboboxInner {
    pub(crate) options: OptionSet,
    pub(crate) config: ComboboxConfig,
    /// Query text and editing cursor
    pub(crate) query: TextEdit,
    pub(crate) open: bool,
    /// Index into the filtered view; `None` means nothing is highlighted
    pub(crate) highlighted: Option<usize>,
    /// First listbox row in view
    pub(crate) scroll_offset: usize,
    /// Listbox rows the last layout actually showed
    measured_rows: Option<usize>,
    /// Last committed option, until the host takes it
    selection: Option<String>,
}

impl ComboboxInner {
    pub(crate) fn filtered(&self) -> Vec<&str> {
        filter_options(self.options.as_slice(), self.query.text())
    }

    /// Option-set positions of the filtered view, row by row.
    pub(crate) fn matches(&self) -> Vec<usize> {
        filter_positions(self.options.as_slice(), self.query.text())
    }

    /// Rows the listbox can show; the layout may squeeze it below the
    /// configured height.
    pub(crate) fn viewport_rows(&self) -> usize {
        self.measured_rows.unwrap_or_else(|| self.config.viewport_rows())
    }

    /// Change the highlight, scrolling the new row into view.
    fn set_highlight(&mut self, index: Option<usize>) {
        if self.highlighted == index {
            return;
        }
        self.highlighted = index;
        if let Some(index) = index {
            self.scroll_offset = scroll_into_view(
                self.scroll_offset,
                self.viewport_rows(),
                index,
                1,
                ScrollBlock::Nearest,
            );
        }
        log::trace!(
            "[combobox] highlight {:?} scroll {}",
            self.highlighted,
            self.scroll_offset
        );
    }

    /// The filtered view is rebuilt from the new query; positions in the
    /// old view mean nothing in it.
    fn query_changed(&mut self) {
        self.highlighted = None;
        self.scroll_offset = 0;
    }

    fn commit(&mut self, text: String) {
        self.query.set(text.as_str());
        self.query_changed();
        self.open = false;
        self.selection = Some(text);
    }
}

/// An accessible autocomplete input over a fixed set of string options.
///
/// Clones share state, like other widget handles: the clone captured by a
/// document listener sees the same open flag the host renders from.
#[derive(Debug, Clone)]
pub struct Combobox {
    /// Unique identifier for this combobox instance
    id: ComboboxId,
    /// Internal state
    pub(crate) inner: Arc<RwLock<ComboboxInner>>,
    /// Dirty flag for re-render
    dirty: Arc<AtomicBool>,
}

impl Combobox {
    /// Create a combobox over `options` with the default configuration.
    pub fn new<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_config(options, ComboboxConfig::default())
    }

    pub fn with_config<I, S>(options: I, config: ComboboxConfig) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_option_set(OptionSet::new(options), config)
    }

    pub fn from_option_set(options: OptionSet, config: ComboboxConfig) -> Self {
        let id = ComboboxId::new();
        log::debug!("[combobox] {} created with {} options", id, options.len());
        Self {
            id,
            inner: Arc::new(RwLock::new(ComboboxInner {
                options,
                config,
                query: TextEdit::default(),
                open: false,
                highlighted: None,
                scroll_offset: 0,
                measured_rows: None,
                selection: None,
            })),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    fn read<R: Default>(&self, f: impl FnOnce(&ComboboxInner) -> R) -> R {
        self.inner.read().map(|guard| f(&guard)).unwrap_or_default()
    }

    fn update<R: Default>(&self, f: impl FnOnce(&mut ComboboxInner) -> R) -> R {
        match self.inner.write() {
            Ok(mut guard) => {
                let result = f(&mut guard);
                self.dirty.store(true, Ordering::SeqCst);
                result
            }
            Err(_) => R::default(),
        }
    }

    // -------------------------------------------------------------------------
    // Identity
    // -------------------------------------------------------------------------

    /// Get the unique ID for this combobox.
    pub fn id(&self) -> ComboboxId {
        self.id
    }

    /// ID of the outer element carrying `role="combobox"`.
    pub fn wrapper_id(&self) -> String {
        self.id.to_string()
    }

    pub fn input_id(&self) -> String {
        format!("{}-input", self.id)
    }

    pub fn listbox_id(&self) -> String {
        format!("{}-listbox", self.id)
    }

    /// ID of the row showing option `key`, its position in the option set.
    ///
    /// Keyed by option rather than by row, so an ID keeps naming the same
    /// option however the query reorders the view.
    pub fn option_id(&self, key: usize) -> String {
        format!("{}-option-{}", self.id, key)
    }

    /// Inverse of [`Combobox::option_id`].
    pub fn option_key(&self, element_id: &str) -> Option<usize> {
        element_id
            .strip_prefix(self.id.to_string().as_str())?
            .strip_prefix("-option-")?
            .parse()
            .ok()
    }

    /// Where the option a row was rendered for sits in the current view.
    ///
    /// `None` when the list is closed or the option no longer matches the
    /// query; the row is stale then.
    pub fn row_position(&self, element_id: &str) -> Option<usize> {
        let key = self.option_key(element_id)?;
        self.read(|inner| {
            if !inner.open {
                return None;
            }
            inner.matches().iter().position(|&k| k == key)
        })
    }

    // -------------------------------------------------------------------------
    // State queries
    // -------------------------------------------------------------------------

    pub fn options(&self) -> OptionSet {
        self.read(|inner| inner.options.clone())
    }

    pub fn config(&self) -> ComboboxConfig {
        self.read(|inner| inner.config.clone())
    }

    /// Get the current query text.
    pub fn query(&self) -> String {
        self.read(|inner| inner.query.text().to_string())
    }

    /// Get the text cursor position (byte offset).
    pub fn text_cursor(&self) -> usize {
        self.read(|inner| inner.query.cursor())
    }

    /// Check if the option list is open.
    pub fn is_open(&self) -> bool {
        self.read(|inner| inner.open)
    }

    /// Position of the highlighted row in the filtered view.
    pub fn highlighted(&self) -> Option<usize> {
        self.read(|inner| inner.highlighted)
    }

    /// The highlighted position with `-1` meaning none.
    pub fn highlighted_index(&self) -> isize {
        self.highlighted()
            .and_then(|i| isize::try_from(i).ok())
            .unwrap_or(-1)
    }

    /// Options matching the current query, in option-set order.
    pub fn filtered(&self) -> Vec<String> {
        self.read(|inner| inner.filtered().into_iter().map(String::from).collect())
    }

    pub fn filtered_count(&self) -> usize {
        self.read(|inner| inner.filtered().len())
    }

    /// First listbox row currently in view.
    pub fn scroll_offset(&self) -> usize {
        self.read(|inner| inner.scroll_offset)
    }

    /// Take the option committed by Enter or a click since the last call.
    /// Does not mark the widget dirty.
    pub fn take_selection(&self) -> Option<String> {
        self.inner
            .write()
            .map(|mut inner| inner.selection.take())
            .unwrap_or_default()
    }

    // -------------------------------------------------------------------------
    // Text entry
    // -------------------------------------------------------------------------

    /// Replace the query, as a text input's change event does. Opens the
    /// list and clears the highlight.
    pub fn input(&self, value: impl Into<String>) {
        let value = value.into();
        self.update(|inner| {
            inner.query.set(value);
            inner.query_changed();
            inner.open = true;
        });
    }

    /// Apply a text edit; behaves like [`Combobox::input`] when it changes
    /// the text.
    fn edit(&self, f: impl FnOnce(&mut TextEdit) -> bool) -> bool {
        self.update(|inner| {
            let changed = f(&mut inner.query);
            if changed {
                inner.query_changed();
                inner.open = true;
            }
            changed
        })
    }

    fn move_text_cursor(&self, f: impl FnOnce(&mut TextEdit) -> bool) -> bool {
        self.update(|inner| f(&mut inner.query))
    }

    /// Insert a character at the cursor position.
    pub fn insert_char(&self, c: char) -> bool {
        self.edit(|query| query.insert(c))
    }

    /// Delete the character before the cursor (backspace).
    pub fn delete_char_before(&self) -> bool {
        self.edit(TextEdit::backspace)
    }

    /// Delete the character at the cursor (delete key).
    pub fn delete_char_at(&self) -> bool {
        self.edit(TextEdit::delete)
    }

    pub fn text_cursor_left(&self) -> bool {
        self.move_text_cursor(TextEdit::left)
    }

    pub fn text_cursor_right(&self) -> bool {
        self.move_text_cursor(TextEdit::right)
    }

    pub fn text_cursor_home(&self) -> bool {
        self.move_text_cursor(TextEdit::home)
    }

    pub fn text_cursor_end(&self) -> bool {
        self.move_text_cursor(TextEdit::end)
    }

    // -------------------------------------------------------------------------
    // Open/close
    // -------------------------------------------------------------------------

    /// The input gained focus.
    pub fn focus(&self) {
        self.update(|inner| inner.open = true);
    }

    /// A pointer went down outside the widget. Only the open flag changes.
    pub fn click_outside(&self) {
        if self.is_open() {
            log::debug!("[combobox] {} closed by outside click", self.id);
        }
        self.update(|inner| inner.open = false);
    }

    /// Close the list. Returns whether it was open.
    pub fn escape(&self) -> bool {
        self.update(|inner| std::mem::replace(&mut inner.open, false))
    }

    // -------------------------------------------------------------------------
    // Highlight navigation
    // -------------------------------------------------------------------------

    /// Move the highlight down one row, stopping at the last row. With no
    /// rows it stays at none.
    pub fn arrow_down(&self) {
        self.update(|inner| {
            let next = match (inner.highlighted, inner.filtered().len().checked_sub(1)) {
                (_, None) => None,
                (None, Some(_)) => Some(0),
                (Some(index), Some(last)) => Some((index + 1).min(last)),
            };
            inner.set_highlight(next);
        });
    }

    /// Move the highlight up one row; moving up from the first row clears it.
    pub fn arrow_up(&self) {
        self.update(|inner| {
            let prev = inner.highlighted.and_then(|index| index.checked_sub(1));
            inner.set_highlight(prev);
        });
    }

    /// Highlight the row under the pointer. Out-of-range rows are ignored.
    pub fn hover(&self, index: usize) -> bool {
        self.update(|inner| {
            if index >= inner.filtered().len() {
                return false;
            }
            inner.set_highlight(Some(index));
            true
        })
    }

    /// Scroll the listbox by `delta` rows without moving the highlight.
    pub fn scroll_by(&self, delta: i16) {
        self.update(|inner| {
            let content = inner.filtered().len();
            let offset = inner
                .scroll_offset
                .saturating_add_signed(isize::from(delta));
            inner.scroll_offset = clamp_offset(offset, inner.viewport_rows(), content);
        });
    }

    /// Adopt the listbox height `layout` gave, scrolling the highlighted
    /// row back into view if the listbox shrank under it.
    ///
    /// Returns whether the scroll offset moved, in which case the tree the
    /// layout came from is out of date.
    pub fn sync_viewport(&self, layout: &LayoutResult) -> bool {
        let measured = layout
            .viewport(&self.listbox_id())
            .map(|viewport| usize::from(viewport.height).max(1));
        let Ok(mut inner) = self.inner.write() else {
            return false;
        };
        inner.measured_rows = measured;
        let Some(index) = inner.highlighted.filter(|_| inner.open) else {
            return false;
        };
        let offset = scroll_into_view(
            inner.scroll_offset,
            inner.viewport_rows(),
            index,
            1,
            ScrollBlock::Nearest,
        );
        if offset == inner.scroll_offset {
            return false;
        }
        log::debug!(
            "[combobox] {} listbox shows {} rows, scroll {} -> {}",
            self.id,
            inner.viewport_rows(),
            inner.scroll_offset,
            offset
        );
        inner.scroll_offset = offset;
        self.dirty.store(true, Ordering::SeqCst);
        true
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Commit the highlighted option: it becomes the query and the list
    /// closes. Does nothing when no row is highlighted.
    pub fn enter(&self) -> Option<String> {
        self.update(|inner| {
            let index = inner.highlighted?;
            let text = inner.filtered().get(index)?.to_string();
            log::debug!("[combobox] {} selected {:?} by key", self.id, text);
            inner.commit(text.clone());
            Some(text)
        })
    }

    /// Commit the option at `index` in the filtered view.
    ///
    /// Pointer events should go through [`Combobox::handle_event`], which
    /// drops clicks on rows that went stale since they were drawn.
    pub fn click_option(&self, index: usize) -> Option<String> {
        self.update(|inner| {
            let text = inner.filtered().get(index)?.to_string();
            log::debug!("[combobox] {} selected {:?} by click", self.id, text);
            inner.commit(text.clone());
            Some(text)
        })
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the combobox state has changed.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag.
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}
