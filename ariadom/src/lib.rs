pub mod a11y;
pub mod buffer;
pub mod document;
pub mod element;
pub mod event;
pub mod focus;
pub mod hit;
pub mod layout;
pub mod render;
pub mod scroll;
pub mod terminal;
pub mod text;
pub mod text_edit;
pub mod types;

pub use buffer::{Buffer, Cell};
pub use document::{Document, ListenerGuard};
pub use element::{aria, Content, Element, Role};
pub use event::{Event, EventKind, Key, Modifiers, MouseButton};
pub use focus::{collect_focusable, FocusState};
pub use hit::{hit_test, hit_test_any};
pub use layout::{layout, LayoutResult, Rect};
pub use scroll::{scroll_into_view, ScrollBlock};
pub use terminal::Terminal;
pub use text_edit::TextEdit;
pub use types::*;
