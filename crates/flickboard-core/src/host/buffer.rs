// Flickboard Text Buffer
// In-memory host text field, codepoint indexed

use std::fmt;
use std::sync::Arc;

use super::{HostEditor, SurroundingText};
use crate::state::{CursorTracker, Selection};

/// Marker used by [`TextBuffer::parse_marked`] and [`TextBuffer::marked`]
pub const CARET_MARKER: char = '|';

/// A plain in-memory text field.
///
/// Positions are codepoint offsets. When a [`CursorTracker`] is attached,
/// every edit reports the new selection to it the way a real host sends
/// cursor notifications.
#[derive(Debug, Clone, Default)]
pub struct TextBuffer {
    chars: Vec<char>,
    selection: Selection,
    editor_actions: usize,
    listener: Option<Arc<CursorTracker>>,
}

impl TextBuffer {
    /// Empty buffer with the caret at 0
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffer holding `text` with the caret at the end
    pub fn from_text(text: &str) -> Self {
        let chars: Vec<char> = text.chars().collect();
        let end = chars.len();
        Self {
            chars,
            selection: Selection::caret(end),
            ..Self::default()
        }
    }

    /// Buffer from text containing one `|` (caret) or two (selection bounds).
    ///
    /// Text without a marker gets the caret at the end.
    pub fn parse_marked(marked: &str) -> Self {
        let mut chars = Vec::new();
        let mut marks = Vec::new();
        for ch in marked.chars() {
            if ch == CARET_MARKER && marks.len() < 2 {
                marks.push(chars.len());
            } else {
                chars.push(ch);
            }
        }
        let selection = match marks.as_slice() {
            [] => Selection::caret(chars.len()),
            [caret] => Selection::caret(*caret),
            [start, end, ..] => Selection::new(*start, *end),
        };
        Self {
            chars,
            selection,
            ..Self::default()
        }
    }

    /// Attach a tracker and report the current selection to it
    pub fn with_listener(mut self, tracker: Arc<CursorTracker>) -> Self {
        self.listener = Some(tracker);
        self.notify();
        self
    }

    /// Full contents
    pub fn text(&self) -> String {
        self.chars.iter().collect()
    }

    /// Length in codepoints
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Current selection
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// How many times the default editor action ran
    pub fn editor_action_count(&self) -> usize {
        self.editor_actions
    }

    /// Contents with the caret (or both selection bounds) marked by `|`
    pub fn marked(&self) -> String {
        let mut out = String::with_capacity(self.chars.len() + 2);
        let (left, right) = (self.selection.left(), self.selection.right());
        for (index, ch) in self.chars.iter().enumerate() {
            if index == left {
                out.push(CARET_MARKER);
            }
            if index == right && right != left {
                out.push(CARET_MARKER);
            }
            out.push(*ch);
        }
        if left == self.chars.len() {
            out.push(CARET_MARKER);
        }
        if right == self.chars.len() && right != left {
            out.push(CARET_MARKER);
        }
        out
    }

    fn notify(&self) {
        if let Some(tracker) = &self.listener {
            tracker.update(self.selection.start, self.selection.end);
        }
    }
}

impl fmt::Display for TextBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.marked())
    }
}

impl SurroundingText for TextBuffer {
    fn text_before_cursor(&self, max_len: usize) -> Option<String> {
        let end = self.selection.left().min(self.chars.len());
        let start = end.saturating_sub(max_len);
        Some(self.chars[start..end].iter().collect())
    }

    fn text_after_cursor(&self, max_len: usize) -> Option<String> {
        let start = self.selection.right().min(self.chars.len());
        let end = start.saturating_add(max_len).min(self.chars.len());
        Some(self.chars[start..end].iter().collect())
    }
}

impl HostEditor for TextBuffer {
    fn commit_text(&mut self, text: &str, cursor_advance: i32) {
        let len = self.chars.len();
        let left = self.selection.left().min(len);
        let right = self.selection.right().min(len);
        let inserted: Vec<char> = text.chars().collect();
        let inserted_len = inserted.len();
        self.chars.splice(left..right, inserted);

        let caret = if cursor_advance > 0 {
            left + inserted_len + (cursor_advance as usize - 1)
        } else {
            left.saturating_sub(cursor_advance.unsigned_abs() as usize)
        };
        self.selection = Selection::caret(caret.min(self.chars.len()));
        self.notify();
    }

    fn delete_surrounding(&mut self, before: usize, after: usize) {
        let len = self.chars.len();
        let left = self.selection.left().min(len);
        let right = self.selection.right().min(len);

        let after_end = right.saturating_add(after).min(len);
        self.chars.drain(right..after_end);

        let before_start = left.saturating_sub(before);
        self.chars.drain(before_start..left);

        let removed = left - before_start;
        self.selection = Selection::new(
            self.selection.start.min(len) - removed,
            self.selection.end.min(len) - removed,
        );
        self.notify();
    }

    fn set_selection(&mut self, start: usize, end: usize) {
        let len = self.chars.len();
        self.selection = Selection::new(start.min(len), end.min(len));
        self.notify();
    }

    fn perform_default_editor_action(&mut self) {
        self.editor_actions += 1;
        log::debug!("default editor action #{}", self.editor_actions);
    }
}
