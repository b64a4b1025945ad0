// Flickboard State
// Mutable state shared between the host and the engine

pub mod cursor;

pub use cursor::{CursorTracker, Selection};
