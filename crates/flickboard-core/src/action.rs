// Flickboard Action
// The closed set of edits a key gesture can produce

use std::fmt;

/// How much a delete removes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DeleteAmount {
    #[default]
    Letter,
    Word,
}

/// Which side of the caret a delete removes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DeleteDirection {
    #[default]
    Backwards,
    Forwards,
}

/// An edit produced by a key gesture.
///
/// Actions are plain immutable values. Turning one into a concrete host
/// operation is the job of [`crate::interpret`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Action {
    /// Commit literal text
    Text(String),
    /// Delete a letter or a word on one side of the caret
    Delete {
        amount: DeleteAmount,
        direction: DeleteDirection,
    },
    /// Submit or insert a newline, depending on the host editor
    Enter,
    /// Move the caret by `amount` codepoints; `label` is only shown on the key
    Jump { amount: i32, label: String },
}

impl Action {
    /// Text action
    pub fn text(text: impl Into<String>) -> Self {
        Action::Text(text.into())
    }

    /// Delete one letter backwards
    pub fn delete() -> Self {
        Action::Delete {
            amount: DeleteAmount::default(),
            direction: DeleteDirection::default(),
        }
    }

    /// Delete with explicit amount and direction
    pub fn delete_with(amount: DeleteAmount, direction: DeleteDirection) -> Self {
        Action::Delete { amount, direction }
    }

    /// Caret jump
    pub fn jump(amount: i32, label: impl Into<String>) -> Self {
        Action::Jump {
            amount,
            label: label.into(),
        }
    }

    /// Shifted variant of this action.
    ///
    /// Text is upper-cased where the characters have a case distinction;
    /// everything else passes through unchanged.
    pub fn shifted(&self) -> Action {
        match self {
            Action::Text(text) => Action::Text(text.to_uppercase()),
            other => other.clone(),
        }
    }

    /// Label to draw on a key for this action.
    ///
    /// `enter_label` is the host editor's action label, used for `Enter`
    /// when present.
    pub fn label(&self, enter_label: Option<&str>) -> String {
        match self {
            Action::Text(text) => text.clone(),
            Action::Delete { amount, direction } => match (amount, direction) {
                (DeleteAmount::Letter, DeleteDirection::Backwards) => "⌫".to_string(),
                (DeleteAmount::Letter, DeleteDirection::Forwards) => "⌦".to_string(),
                (DeleteAmount::Word, DeleteDirection::Backwards) => "⌫⌫".to_string(),
                (DeleteAmount::Word, DeleteDirection::Forwards) => "⌦⌦".to_string(),
            },
            Action::Enter => enter_label.unwrap_or("⏎").to_string(),
            Action::Jump { label, .. } => label.clone(),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Text(text) => write!(f, "text({:?})", text),
            Action::Delete { amount, direction } => {
                write!(f, "delete({:?}, {:?})", amount, direction)
            }
            Action::Enter => write!(f, "enter"),
            Action::Jump { amount, label } => write!(f, "jump({:+}, {:?})", amount, label),
        }
    }
}
