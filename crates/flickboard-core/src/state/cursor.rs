// Flickboard Cursor Tracker
// Latest caret/selection bounds reported by the host

use parking_lot::RwLock;

/// Caret or selection bounds in codepoints.
///
/// `start == end` is a collapsed caret. Hosts may report the anchor after
/// the focus, so use [`Selection::left`] and [`Selection::right`] for edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Collapsed caret at `position`
    pub fn caret(position: usize) -> Self {
        Self::new(position, position)
    }

    pub fn is_collapsed(&self) -> bool {
        self.start == self.end
    }

    /// Leftmost edge
    pub fn left(&self) -> usize {
        self.start.min(self.end)
    }

    /// Rightmost edge
    pub fn right(&self) -> usize {
        self.start.max(self.end)
    }
}

/// Holds only the most recent selection the host reported.
///
/// The host updates it from its own notification path while gestures read
/// it; share it with `Arc`. Readers may see a slightly stale value, which
/// only affects the base of the next jump.
#[derive(Debug, Default)]
pub struct CursorTracker {
    latest: RwLock<Option<Selection>>,
}

impl CursorTracker {
    /// Create a tracker that has seen no update yet
    pub fn new() -> Self {
        Self {
            latest: RwLock::new(None),
        }
    }

    /// Record a host selection update, replacing the previous one
    pub fn update(&self, start: usize, end: usize) {
        let selection = Selection::new(start, end);
        log::trace!("cursor update: {:?}", selection);
        *self.latest.write() = Some(selection);
    }

    /// Latest reported selection, if any was ever reported
    pub fn latest(&self) -> Option<Selection> {
        *self.latest.read()
    }

    /// Forget the last report (e.g. when the host switches editors)
    pub fn reset(&self) {
        *self.latest.write() = None;
    }
}
