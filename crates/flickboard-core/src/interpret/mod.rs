// Flickboard Action Interpreter
// Turns a resolved Action into the concrete edit the host should apply
//
// Interpretation is a pure function of the action, a bounded view of the
// text around the caret, the last known selection and the editor info.
// Applying the result is a separate step.

pub mod word;

pub use word::{search_buffer, word_delete_length, SEARCH_WINDOW};

use std::fmt;

use crate::action::{Action, DeleteAmount, DeleteDirection};
use crate::host::{EditorInfo, HostEditor, SurroundingText};
use crate::state::Selection;

/// A single host editing operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOp {
    /// Insert text at the caret, replacing any selection
    Commit { text: String, cursor_advance: i32 },
    /// Remove codepoints around the caret
    DeleteSurrounding { before: usize, after: usize },
    /// Move the caret or selection
    SetSelection { start: usize, end: usize },
    /// Let the editor run its own Enter behavior
    DefaultEditorAction,
}

impl EditOp {
    /// Perform this operation on `host`
    pub fn apply<H>(&self, host: &mut H)
    where
        H: HostEditor + ?Sized,
    {
        match self {
            EditOp::Commit {
                text,
                cursor_advance,
            } => host.commit_text(text, *cursor_advance),
            EditOp::DeleteSurrounding { before, after } => {
                host.delete_surrounding(*before, *after)
            }
            EditOp::SetSelection { start, end } => host.set_selection(*start, *end),
            EditOp::DefaultEditorAction => host.perform_default_editor_action(),
        }
    }
}

impl fmt::Display for EditOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditOp::Commit { text, .. } => write!(f, "commit {:?}", text),
            EditOp::DeleteSurrounding { before, after } => {
                write!(f, "delete {} before, {} after", before, after)
            }
            EditOp::SetSelection { start, end } => write!(f, "select {}..{}", start, end),
            EditOp::DefaultEditorAction => write!(f, "editor action"),
        }
    }
}

/// Compute the edit for `action`.
///
/// `selection` is the latest selection the host reported, or `None` if it
/// never reported one.
pub fn interpret<T>(
    action: &Action,
    surrounding: &T,
    selection: Option<Selection>,
    editor: &EditorInfo,
) -> EditOp
where
    T: SurroundingText + ?Sized,
{
    let op = match action {
        Action::Text(text) => EditOp::Commit {
            text: text.clone(),
            cursor_advance: 1,
        },
        Action::Delete { amount, direction } => {
            let length = match amount {
                DeleteAmount::Letter => 1,
                DeleteAmount::Word => word_delete_length(&search_buffer(surrounding, *direction)),
            };
            match direction {
                DeleteDirection::Backwards => EditOp::DeleteSurrounding {
                    before: length,
                    after: 0,
                },
                DeleteDirection::Forwards => EditOp::DeleteSurrounding {
                    before: 0,
                    after: length,
                },
            }
        }
        Action::Enter => {
            if editor.enter_inserts_newline() {
                EditOp::Commit {
                    text: "\n".to_string(),
                    cursor_advance: 1,
                }
            } else {
                EditOp::DefaultEditorAction
            }
        }
        Action::Jump { amount, .. } => {
            let target = jump_target(selection, *amount);
            EditOp::SetSelection {
                start: target,
                end: target,
            }
        }
    };
    log::debug!("{} -> {}", action, op);
    op
}

/// Caret position a jump lands on.
///
/// Left jumps start from the selection's left edge, right jumps from its
/// right edge, so a jump always leaves the selection instead of landing
/// inside it: for (5, 9), -1 gives 4 and +1 gives 10. Basing a forward jump
/// on the selection start (and a backward one on its end) would give 6 and
/// 8 instead. Without any selection report the base is 0. Targets before
/// the start of the text clamp to 0.
pub fn jump_target(selection: Option<Selection>, amount: i32) -> usize {
    let base = match selection {
        Some(selection) if amount < 0 => selection.left(),
        Some(selection) => selection.right(),
        None => 0,
    };
    let target = base as i64 + i64::from(amount);
    usize::try_from(target).unwrap_or(0)
}
