// Flickboard Core Library
// Layer composition and gesture dispatch for a directional soft keyboard

pub mod action;
pub mod compose;
pub mod config;
pub mod direction;
pub mod host;
pub mod interpret;
pub mod key;
pub mod layer;
pub mod layout;
pub mod session;
pub mod state;

pub use action::{Action, DeleteAmount, DeleteDirection};
pub use config::{builtin_layout, layout_from_toml, layout_from_toml_path, ConfigError};
pub use direction::Direction;
pub use host::{EditorInfo, HostEditor, SurroundingText, TextBuffer};
pub use interpret::{interpret, EditOp};
pub use key::Key;
pub use layer::Layer;
pub use layout::Layout;
pub use session::InputSession;
pub use state::{CursorTracker, Selection};
