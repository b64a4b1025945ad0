// Flickboard Composition Tests
//
// Laws of the layer operations and the layout resolution order.
//
// Run with: cargo test -p flickboard-core --test composition_test

use flickboard_core::{builtin_layout, Action, Direction, Key, Layer, Layout};
use pretty_assertions::assert_eq;

// =========================================================================
// Test Helpers
// =========================================================================

/// A small hand-built layer with mixed spans and partial bindings
fn sample_layer() -> Layer {
    Layer::new(vec![
        vec![
            Key::tap(Action::text("a")).bind(Direction::Right, Action::text("b")),
            Key::empty().with_colspan(2),
        ],
        vec![Key::tap(Action::delete()).bind(Direction::Left, Action::jump(-1, "<"))],
    ])
}

fn shifted_layer() -> Layer {
    Layer::new(vec![
        vec![
            Key::tap(Action::text("A")),
            Key::empty().bind(Direction::Top, Action::text("^")),
        ],
        vec![Key::empty()],
    ])
}

// =========================================================================
// Layer laws
// =========================================================================

#[test]
fn test_merge_fallback_identity() {
    let layer = sample_layer();
    assert_eq!(layer.merge_fallback(None), layer);
}

#[test]
fn test_merge_shift_identity_without_shift() {
    let layer = sample_layer();
    assert_eq!(layer.merge_shift(None), layer);
}

#[test]
fn test_merge_shift_override_law() {
    let base = sample_layer();
    let shifted = shifted_layer();
    let merged = base.merge_shift(Some(&shifted));

    assert!(merged.same_shape(&base));
    for (row, keys) in base.key_rows().iter().enumerate() {
        for (column, base_key) in keys.iter().enumerate() {
            let merged_key = merged.key_at(row, column).unwrap();
            let shifted_key = shifted.key_at(row, column).unwrap();
            assert_eq!(merged_key.colspan(), base_key.colspan());
            for direction in Direction::all() {
                let expected = shifted_key
                    .action(direction)
                    .or_else(|| base_key.action(direction));
                assert_eq!(merged_key.action(direction), expected, "({row}, {column}) {direction}");
            }
        }
    }
}

#[test]
fn test_merge_fallback_primary_wins() {
    let primary = sample_layer();
    let fallback = shifted_layer();
    let merged = primary.merge_fallback(Some(&fallback));
    let key = merged.key_at(0, 0).unwrap();
    assert_eq!(key.action(Direction::Center), Some(&Action::text("a")));
    let spacer = merged.key_at(0, 1).unwrap();
    assert_eq!(spacer.action(Direction::Top), Some(&Action::text("^")));
    assert_eq!(spacer.colspan(), 2);
}

#[test]
fn test_chain_concatenates_rows() {
    let a = sample_layer();
    let b = shifted_layer();
    let chained = a.chain(&b);
    assert_eq!(chained.row_count(), a.row_count() + b.row_count());
    assert_eq!(&chained.key_rows()[..a.row_count()], a.key_rows());
    assert_eq!(&chained.key_rows()[a.row_count()..], b.key_rows());
}

#[test]
fn test_operations_leave_inputs_untouched() {
    let layer = sample_layer();
    let before = layer.clone();
    let _ = layer.merge_shift(Some(&layer.auto_shift()));
    let _ = layer.chain(&layer);
    assert_eq!(layer, before);
}

// =========================================================================
// Resolution
// =========================================================================

#[test]
fn test_resolution_is_deterministic() {
    for name in ["en-messagease", "numpad", "common"] {
        let layout = builtin_layout(name).unwrap();
        assert_eq!(layout.effective_layer(), layout.effective_layer());
    }
}

#[test]
fn test_every_optional_layer_combination_resolves() {
    let main = sample_layer();
    let extra = shifted_layer();
    for mask in 0..8u8 {
        let mut layout = Layout::new("combo", main.clone());
        if mask & 1 != 0 {
            layout = layout.with_shift(extra.clone());
        }
        if mask & 2 != 0 {
            layout = layout.with_numeric(extra.clone());
        }
        if mask & 4 != 0 {
            layout = layout.with_control(extra.clone());
        }
        let effective = layout.effective_layer();

        let control_rows = if mask & 4 != 0 { extra.row_count() } else { 0 };
        let expected_rows = if mask & 2 != 0 {
            extra.row_count() + control_rows + main.row_count()
        } else {
            main.row_count() + control_rows
        };
        assert_eq!(effective.row_count(), expected_rows, "mask {mask:03b}");
    }
}

#[test]
fn test_messagease_layout_shape() {
    let layout = builtin_layout("en-messagease").unwrap();
    let effective = layout.effective_layer();
    // 3x3 letter grid plus one control row
    assert_eq!(effective.row_count(), 4);
    assert_eq!(effective.column_count(), 3);
    assert_eq!(
        effective.key_at(1, 1).unwrap().action(Direction::TopLeft),
        Some(&Action::text("u"))
    );
    // The control row is auto-shifted, which leaves space untouched
    assert_eq!(
        effective.key_at(3, 1).unwrap().action(Direction::Center),
        Some(&Action::text(" "))
    );
}

#[test]
fn test_numpad_leads_with_digits() {
    let layout = builtin_layout("numpad").unwrap();
    let effective = layout.effective_layer();
    // 4 digit rows, 1 control row, 3 letter rows
    assert_eq!(effective.row_count(), 8);
    assert_eq!(
        effective.key_at(0, 0).unwrap().action(Direction::Center),
        Some(&Action::text("1"))
    );
    assert_eq!(
        effective.key_at(4, 2).unwrap().action(Direction::Center),
        Some(&Action::Enter)
    );
    // Letters fall back to the digit at the same position
    let letter = effective.key_at(5, 1).unwrap();
    assert_eq!(letter.action(Direction::Center), Some(&Action::text("n")));
    assert_eq!(letter.action(Direction::Bottom), Some(&Action::text("l")));
    assert_eq!(letter.action(Direction::Top), None);
    let h = effective.key_at(6, 0).unwrap();
    assert_eq!(h.action(Direction::Right), Some(&Action::text("k")));
}
