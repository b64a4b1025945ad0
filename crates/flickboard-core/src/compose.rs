// Flickboard Layer Composer
// Resolves a layout's layers into the one effective layer shown to the user
//
// Resolution order:
//   shift     = shift_layer <- numeric fallback
//   main      = (main_layer <- numeric fallback) overlaid with shift
//   effective = numeric layer if present, else main
//   + control row (overlaid with its own auto-shift) chained below
//   + numeric-backed main grid chained below when numeric leads
//
// The result depends only on the layout's contents, so it can be recomputed
// on every render.

use crate::{Layer, Layout};

/// Compose the effective layer for `layout`
pub fn resolve(layout: &Layout) -> Layer {
    let numeric = layout.numeric_layer();

    let shift = layout
        .shift_layer()
        .map(|shift| shift.merge_fallback(numeric));
    let main = layout
        .main_layer()
        .merge_fallback(numeric)
        .merge_shift(shift.as_ref());

    let mut effective = match numeric {
        Some(numeric) => numeric.clone(),
        None => main.clone(),
    };

    if let Some(control) = layout.control_layer() {
        effective = effective.chain(&control_with_shift(control));
    }

    if numeric.is_some() {
        effective = effective.chain(&main.merge_fallback(numeric));
    }

    log::debug!(
        "resolved layout '{}': {} rows x {} columns (shift={}, numeric={}, control={})",
        layout.name(),
        effective.row_count(),
        effective.column_count(),
        layout.shift_layer().is_some(),
        numeric.is_some(),
        layout.control_layer().is_some(),
    );

    effective
}

/// Control layers are never authored with a shift variant; derive one.
fn control_with_shift(control: &Layer) -> Layer {
    let shifted = control.auto_shift();
    control.merge_shift(Some(&shifted))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Action, Direction, Key};
    use pretty_assertions::assert_eq;

    fn row(texts: &[&str]) -> Vec<Key> {
        texts.iter().map(|t| Key::tap(Action::text(*t))).collect()
    }

    #[test]
    fn test_main_only() {
        let main = Layer::new(vec![row(&["a", "b"])]);
        let layout = Layout::new("plain", main.clone());
        assert_eq!(resolve(&layout), main);
    }

    #[test]
    fn test_shift_overlays_main() {
        let main = Layer::new(vec![vec![
            Key::tap(Action::text("a")).bind(Direction::Left, Action::text(","))
        ]]);
        let shift = Layer::new(vec![row(&["A"])]);
        let layout = Layout::new("shifted", main).with_shift(shift);
        let effective = resolve(&layout);
        let key = effective.key_at(0, 0).unwrap();
        assert_eq!(key.action(Direction::Center), Some(&Action::text("A")));
        assert_eq!(key.action(Direction::Left), Some(&Action::text(",")));
    }

    #[test]
    fn test_control_is_chained_below_and_auto_shifted() {
        let main = Layer::new(vec![row(&["a"])]);
        let control = Layer::new(vec![vec![
            Key::tap(Action::text("x")).bind(Direction::Right, Action::delete()),
        ]]);
        let layout = Layout::new("ctl", main).with_control(control);
        let effective = resolve(&layout);
        assert_eq!(effective.row_count(), 2);
        let key = effective.key_at(1, 0).unwrap();
        assert_eq!(key.action(Direction::Center), Some(&Action::text("X")));
        assert_eq!(key.action(Direction::Right), Some(&Action::delete()));
    }

    #[test]
    fn test_numeric_leads_then_control_then_main() {
        let main = Layer::new(vec![row(&["a", "b"])]);
        let numeric = Layer::new(vec![vec![
            Key::tap(Action::text("1")).bind(Direction::Top, Action::text("+")),
        ]]);
        let control = Layer::new(vec![vec![Key::tap(Action::Enter)]]);
        let layout = Layout::new("num", main)
            .with_numeric(numeric.clone())
            .with_control(control);
        let effective = resolve(&layout);

        assert_eq!(effective.row_count(), 3);
        assert_eq!(effective.key_rows()[0], numeric.key_rows()[0]);
        assert_eq!(
            effective.key_at(1, 0).unwrap().action(Direction::Center),
            Some(&Action::Enter)
        );
        let merged_main = effective.key_at(2, 0).unwrap();
        assert_eq!(merged_main.action(Direction::Center), Some(&Action::text("a")));
        assert_eq!(merged_main.action(Direction::Top), Some(&Action::text("+")));
        assert_eq!(effective.key_at(2, 1), Some(&Key::tap(Action::text("b"))));
    }
}
