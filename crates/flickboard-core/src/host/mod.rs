// Flickboard Host Boundary
// The editing primitives the host text field exposes to the engine

pub mod buffer;

pub use buffer::TextBuffer;

/// Bounded read access to the text around the caret.
///
/// Lengths are in codepoints. A host that cannot provide text returns
/// `None`, which the interpreter treats as an empty window.
pub trait SurroundingText {
    /// Up to `max_len` codepoints immediately before the caret
    fn text_before_cursor(&self, max_len: usize) -> Option<String>;

    /// Up to `max_len` codepoints immediately after the caret
    fn text_after_cursor(&self, max_len: usize) -> Option<String>;
}

/// A host text field the engine can edit
pub trait HostEditor: SurroundingText {
    /// Insert `text` at the caret, replacing any selection.
    /// `cursor_advance` of 1 leaves the caret right after the inserted text.
    fn commit_text(&mut self, text: &str, cursor_advance: i32);

    /// Delete `before` codepoints before and `after` codepoints after the
    /// caret in one step
    fn delete_surrounding(&mut self, before: usize, after: usize);

    /// Move the caret or selection
    fn set_selection(&mut self, start: usize, end: usize);

    /// Run the editor's own Enter behavior (submit, search, next field, ...)
    fn perform_default_editor_action(&mut self);
}

/// What the host tells the engine about the focused editor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorInfo {
    /// Whether the editor takes free-form newlines. `None` when the host
    /// never reported it.
    pub accepts_newlines: Option<bool>,
    /// Host-supplied label for the editor action (e.g. "Send")
    pub action_label: Option<String>,
}

impl EditorInfo {
    /// Editor that takes newlines
    pub fn multiline() -> Self {
        Self {
            accepts_newlines: Some(true),
            action_label: None,
        }
    }

    /// Editor whose Enter runs an action instead of inserting a newline
    pub fn single_line(action_label: Option<String>) -> Self {
        Self {
            accepts_newlines: Some(false),
            action_label,
        }
    }

    /// Whether Enter should commit a literal newline.
    ///
    /// Editors that never reported the flag get a newline.
    pub fn enter_inserts_newline(&self) -> bool {
        self.accepts_newlines.unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_policy() {
        assert!(EditorInfo::default().enter_inserts_newline());
        assert!(EditorInfo::multiline().enter_inserts_newline());
        assert!(!EditorInfo::single_line(Some("Go".into())).enter_inserts_newline());
    }
}
