// Flickboard Input Session
// Routes a resolved gesture through key lookup, interpretation and the host

use std::sync::Arc;

use crate::host::{EditorInfo, HostEditor};
use crate::interpret::{interpret, EditOp};
use crate::state::CursorTracker;
use crate::{Action, Direction, Layer, Layout};

/// One keyboard attached to one editor.
///
/// Gestures are handled one at a time: each is interpreted and applied
/// before the next is accepted. The cursor tracker is shared with whatever
/// delivers the host's cursor notifications.
#[derive(Debug)]
pub struct InputSession {
    layout: Layout,
    editor: EditorInfo,
    cursor: Arc<CursorTracker>,
}

impl InputSession {
    /// Create a session for `layout` with no editor info reported yet
    pub fn new(layout: Layout) -> Self {
        Self {
            layout,
            editor: EditorInfo::default(),
            cursor: Arc::new(CursorTracker::new()),
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn editor_info(&self) -> &EditorInfo {
        &self.editor
    }

    /// Record the focused editor's info (called when input starts)
    pub fn set_editor_info(&mut self, editor: EditorInfo) {
        self.editor = editor;
    }

    /// Tracker to hand to the host's cursor notification path
    pub fn cursor(&self) -> Arc<CursorTracker> {
        Arc::clone(&self.cursor)
    }

    /// Compose the layer to display. Cheap enough to call per render.
    pub fn effective_layer(&self) -> Layer {
        self.layout.effective_layer()
    }

    /// Action a gesture on `layer` produces, if the position and direction
    /// are bound
    pub fn action_at<'a>(
        &self,
        layer: &'a Layer,
        row: usize,
        column: usize,
        direction: Direction,
    ) -> Option<&'a Action> {
        layer.key_at(row, column)?.action(direction)
    }

    /// Handle one gesture: look up the action, interpret it and apply the
    /// result to `host`.
    ///
    /// Returns the applied operation, or `None` when nothing is bound there.
    pub fn on_gesture<H>(
        &self,
        layer: &Layer,
        row: usize,
        column: usize,
        direction: Direction,
        host: &mut H,
    ) -> Option<EditOp>
    where
        H: HostEditor + ?Sized,
    {
        let Some(action) = self.action_at(layer, row, column, direction) else {
            log::debug!("no binding at ({}, {}) {}", row, column, direction);
            return None;
        };
        let op = interpret(action, &*host, self.cursor.latest(), &self.editor);
        op.apply(host);
        Some(op)
    }
}
