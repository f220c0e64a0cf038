#[derive(Debug, Clone, Default, PartialEq)]
pub enum Content {
    #[default]
    None,
    Text(String),
    /// Single-line editable text. `cursor` is a byte offset into `value`.
    TextInput {
        value: String,
        cursor: usize,
        placeholder: Option<String>,
        focused: bool,
    },
    Children(Vec<super::Element>),
}

impl Content {
    /// The text shown for this content, if it is textual.
    pub fn text(&self) -> Option<&str> {
        match self {
            Content::Text(text) => Some(text),
            Content::TextInput { value, .. } => Some(value),
            _ => None,
        }
    }
}
