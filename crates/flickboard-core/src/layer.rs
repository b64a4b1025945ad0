// Flickboard Layer
// A grid of keys and the shape-preserving operations that derive new layers
//
// Every operation here returns a fresh Layer and leaves its inputs alone.
// An absent optional layer is an identity input, never an error.

use smallvec::SmallVec;

use crate::Key;

/// Starting grid column of each key in one row
pub type ColumnOffsets = SmallVec<[usize; 8]>;

/// One visual keyboard grid.
///
/// Rows may have different total widths; the grid is as wide as its widest
/// row, measured in colspans.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Layer {
    key_rows: Vec<Vec<Key>>,
}

impl Layer {
    /// Create a layer from its rows
    pub fn new(key_rows: Vec<Vec<Key>>) -> Self {
        Self { key_rows }
    }

    /// All rows, top to bottom
    pub fn key_rows(&self) -> &[Vec<Key>] {
        &self.key_rows
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.key_rows.len()
    }

    /// Key at a grid position, if there is one
    pub fn key_at(&self, row: usize, column: usize) -> Option<&Key> {
        self.key_rows.get(row).and_then(|keys| keys.get(column))
    }

    /// Overall column count: the widest row's summed colspans
    pub fn column_count(&self) -> usize {
        self.key_rows
            .iter()
            .map(|row| row.iter().map(Key::colspan).sum::<usize>())
            .max()
            .unwrap_or(0)
    }

    /// Grid column at which each key of `row` starts
    pub fn column_offsets(&self, row: usize) -> ColumnOffsets {
        let mut offsets = ColumnOffsets::new();
        let mut column = 0;
        if let Some(keys) = self.key_rows.get(row) {
            for key in keys {
                offsets.push(column);
                column += key.colspan();
            }
        }
        offsets
    }

    /// Returns true if each row holds the same number of keys as `other`'s
    pub fn same_shape(&self, other: &Layer) -> bool {
        self.key_rows.len() == other.key_rows.len()
            && self
                .key_rows
                .iter()
                .zip(&other.key_rows)
                .all(|(a, b)| a.len() == b.len())
    }

    /// Fill directions missing from this layer's keys with the fallback's
    /// key at the same position.
    ///
    /// Positions the fallback does not have contribute nothing. Shape and
    /// spans follow `self`.
    pub fn merge_fallback(&self, fallback: Option<&Layer>) -> Layer {
        match fallback {
            Some(fallback) => self.zip_keys(fallback, Key::with_fallback),
            None => self.clone(),
        }
    }

    /// Overlay `shifted` on this layer, the shifted binding winning any
    /// direction both define.
    ///
    /// Shape and spans follow `self`; an absent shift layer leaves it as is.
    pub fn merge_shift(&self, shifted: Option<&Layer>) -> Layer {
        match shifted {
            Some(shifted) => self.zip_keys(shifted, Key::with_shift),
            None => self.clone(),
        }
    }

    /// Stack `below` under this layer
    pub fn chain(&self, below: &Layer) -> Layer {
        let mut key_rows = Vec::with_capacity(self.key_rows.len() + below.key_rows.len());
        key_rows.extend(self.key_rows.iter().cloned());
        key_rows.extend(below.key_rows.iter().cloned());
        Layer { key_rows }
    }

    /// Derive a shifted variant from this layer's own text actions
    pub fn auto_shift(&self) -> Layer {
        Layer {
            key_rows: self
                .key_rows
                .iter()
                .map(|row| row.iter().map(Key::auto_shifted).collect())
                .collect(),
        }
    }

    fn zip_keys(&self, other: &Layer, combine: impl Fn(&Key, &Key) -> Key) -> Layer {
        let key_rows = self
            .key_rows
            .iter()
            .enumerate()
            .map(|(row, keys)| {
                keys.iter()
                    .enumerate()
                    .map(|(column, key)| match other.key_at(row, column) {
                        Some(other_key) => combine(key, other_key),
                        None => {
                            log::trace!("no counterpart at ({}, {}), keeping key", row, column);
                            key.clone()
                        }
                    })
                    .collect()
            })
            .collect();
        Layer { key_rows }
    }
}
