// Flickboard Key
// One key on a layer: a direction -> action mapping plus a display span

use indexmap::IndexMap;

use crate::{Action, Direction};

/// A single multi-direction key.
///
/// Not every direction needs a binding; a gesture in an unbound direction is
/// a silent no-op. `colspan` is the relative display width and is always at
/// least 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key {
    actions: IndexMap<Direction, Action>,
    colspan: usize,
}

impl Default for Key {
    fn default() -> Self {
        Self::empty()
    }
}

impl Key {
    /// Create a key from its bindings, spanning one column
    pub fn new(actions: IndexMap<Direction, Action>) -> Self {
        Self { actions, colspan: 1 }
    }

    /// A key with no bindings at all
    pub fn empty() -> Self {
        Self::new(IndexMap::new())
    }

    /// A key whose only binding is the plain tap
    pub fn tap(action: Action) -> Self {
        Self::empty().bind(Direction::Center, action)
    }

    /// Builder: bind `action` to `direction`, replacing any earlier binding
    pub fn bind(mut self, direction: Direction, action: Action) -> Self {
        self.actions.insert(direction, action);
        self
    }

    /// Builder: set the display span (values below 1 are raised to 1)
    pub fn with_colspan(mut self, colspan: usize) -> Self {
        self.colspan = colspan.max(1);
        self
    }

    /// Action bound to a gesture direction, if any
    pub fn action(&self, direction: Direction) -> Option<&Action> {
        self.actions.get(&direction)
    }

    /// All bindings in insertion order
    pub fn actions(&self) -> &IndexMap<Direction, Action> {
        &self.actions
    }

    /// Relative display width
    pub fn colspan(&self) -> usize {
        self.colspan
    }

    /// Returns true if no direction is bound
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Keep this key's bindings and fill the directions it leaves unbound
    /// from `fallback`. The span stays this key's.
    pub fn with_fallback(&self, fallback: &Key) -> Key {
        let mut actions = self.actions.clone();
        for (direction, action) in &fallback.actions {
            actions
                .entry(*direction)
                .or_insert_with(|| action.clone());
        }
        Key {
            actions,
            colspan: self.colspan,
        }
    }

    /// Union of this key's bindings and `shifted`'s, with `shifted` winning
    /// any direction both define. The span stays this key's.
    pub fn with_shift(&self, shifted: &Key) -> Key {
        let mut actions = self.actions.clone();
        for (direction, action) in &shifted.actions {
            actions.insert(*direction, action.clone());
        }
        Key {
            actions,
            colspan: self.colspan,
        }
    }

    /// Same key with every action replaced by its shifted variant
    pub fn auto_shifted(&self) -> Key {
        Key {
            actions: self
                .actions
                .iter()
                .map(|(direction, action)| (*direction, action.shifted()))
                .collect(),
            colspan: self.colspan,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_lookup() {
        let key = Key::tap(Action::text("a")).bind(Direction::Right, Action::text("b"));
        assert_eq!(key.action(Direction::Center), Some(&Action::text("a")));
        assert_eq!(key.action(Direction::Right), Some(&Action::text("b")));
        assert_eq!(key.action(Direction::Left), None);
        assert_eq!(key.colspan(), 1);
    }

    #[test]
    fn test_colspan_floor() {
        assert_eq!(Key::empty().with_colspan(0).colspan(), 1);
        assert_eq!(Key::empty().with_colspan(3).colspan(), 3);
    }

    #[test]
    fn test_with_fallback_keeps_primary() {
        let primary = Key::tap(Action::text("a")).with_colspan(2);
        let fallback = Key::tap(Action::text("1")).bind(Direction::Top, Action::text("!"));
        let merged = primary.with_fallback(&fallback);
        assert_eq!(merged.action(Direction::Center), Some(&Action::text("a")));
        assert_eq!(merged.action(Direction::Top), Some(&Action::text("!")));
        assert_eq!(merged.colspan(), 2);
    }

    #[test]
    fn test_with_shift_overrides() {
        let base = Key::tap(Action::text("a")).bind(Direction::Left, Action::text("b"));
        let shifted = Key::tap(Action::text("A"));
        let merged = base.with_shift(&shifted);
        assert_eq!(merged.action(Direction::Center), Some(&Action::text("A")));
        assert_eq!(merged.action(Direction::Left), Some(&Action::text("b")));
    }

    #[test]
    fn test_equality_ignores_binding_order() {
        let a = Key::tap(Action::text("a")).bind(Direction::Left, Action::text("b"));
        let b = Key::empty()
            .bind(Direction::Left, Action::text("b"))
            .bind(Direction::Center, Action::text("a"));
        assert_eq!(a, b);
    }
}
