// Flickboard Layout Parser - TOML with Serde
// Parses keyboard layouts from TOML files

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::action::{DeleteAmount, DeleteDirection};
use crate::{Action, Direction, Key, Layer, Layout};

/// Layout loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(String),

    #[error("Invalid direction '{name}' in {layer} layer at row {row}, column {column}")]
    InvalidDirection {
        layer: &'static str,
        row: usize,
        column: usize,
        name: String,
    },

    #[error("Invalid colspan {value} in {layer} layer at row {row}, column {column} (must be at least 1)")]
    InvalidColspan {
        layer: &'static str,
        row: usize,
        column: usize,
        value: i64,
    },

    #[error("The {0} layer has no keys")]
    EmptyLayer(&'static str),

    #[error("Unknown layout: {0}")]
    UnknownLayout(String),
}

/// Root TOML table of a layout file
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutToml {
    /// Layout name shown to the user
    pub name: String,

    /// Main layer (required)
    pub main: LayerToml,

    #[serde(default)]
    pub shift: Option<LayerToml>,

    #[serde(default)]
    pub numeric: Option<LayerToml>,

    #[serde(default)]
    pub control: Option<LayerToml>,
}

/// One layer: rows of keys, top to bottom
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct LayerToml {
    #[serde(default)]
    pub rows: Vec<Vec<KeyToml>>,
}

/// One key: direction name -> action, plus an optional span
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct KeyToml {
    #[serde(default)]
    pub actions: IndexMap<String, ActionToml>,

    #[serde(default)]
    pub colspan: Option<i64>,
}

/// An action: bare string for text, or a table tagged by `type`
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ActionToml {
    Text(String),
    Tagged(TaggedActionToml),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TaggedActionToml {
    Text {
        text: String,
    },
    Delete {
        #[serde(default)]
        amount: DeleteAmountToml,
        #[serde(default)]
        direction: DeleteDirectionToml,
    },
    Enter,
    Jump {
        amount: i32,
        #[serde(default)]
        label: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DeleteAmountToml {
    #[default]
    Letter,
    Word,
}

#[derive(Debug, Clone, Copy, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DeleteDirectionToml {
    #[default]
    Backwards,
    Forwards,
}

impl From<DeleteAmountToml> for DeleteAmount {
    fn from(amount: DeleteAmountToml) -> Self {
        match amount {
            DeleteAmountToml::Letter => DeleteAmount::Letter,
            DeleteAmountToml::Word => DeleteAmount::Word,
        }
    }
}

impl From<DeleteDirectionToml> for DeleteDirection {
    fn from(direction: DeleteDirectionToml) -> Self {
        match direction {
            DeleteDirectionToml::Backwards => DeleteDirection::Backwards,
            DeleteDirectionToml::Forwards => DeleteDirection::Forwards,
        }
    }
}

impl ActionToml {
    fn to_action(&self) -> Action {
        match self {
            ActionToml::Text(text) => Action::Text(text.clone()),
            ActionToml::Tagged(TaggedActionToml::Text { text }) => Action::Text(text.clone()),
            ActionToml::Tagged(TaggedActionToml::Delete { amount, direction }) => {
                Action::delete_with((*amount).into(), (*direction).into())
            }
            ActionToml::Tagged(TaggedActionToml::Enter) => Action::Enter,
            ActionToml::Tagged(TaggedActionToml::Jump { amount, label }) => {
                let label = label.clone().unwrap_or_else(|| default_jump_label(*amount));
                Action::jump(*amount, label)
            }
        }
    }
}

fn default_jump_label(amount: i32) -> String {
    if amount < 0 {
        "←".to_string()
    } else {
        "→".to_string()
    }
}

impl LayerToml {
    fn to_layer(&self, layer: &'static str) -> Result<Layer, ConfigError> {
        let mut key_rows = Vec::with_capacity(self.rows.len());
        for (row, keys) in self.rows.iter().enumerate() {
            let mut converted = Vec::with_capacity(keys.len());
            for (column, key) in keys.iter().enumerate() {
                converted.push(key.to_key(layer, row, column)?);
            }
            key_rows.push(converted);
        }
        if key_rows.iter().all(Vec::is_empty) {
            return Err(ConfigError::EmptyLayer(layer));
        }
        Ok(Layer::new(key_rows))
    }
}

impl KeyToml {
    fn to_key(&self, layer: &'static str, row: usize, column: usize) -> Result<Key, ConfigError> {
        let mut key = Key::empty();
        for (name, action) in &self.actions {
            let direction = Direction::parse(name).ok_or_else(|| ConfigError::InvalidDirection {
                layer,
                row,
                column,
                name: name.clone(),
            })?;
            if key.action(direction).is_some() {
                log::warn!(
                    "{} layer ({}, {}): '{}' binds {} twice, keeping the later one",
                    layer,
                    row,
                    column,
                    name,
                    direction
                );
            }
            key = key.bind(direction, action.to_action());
        }

        let colspan = self.colspan.unwrap_or(1);
        if colspan < 1 {
            return Err(ConfigError::InvalidColspan {
                layer,
                row,
                column,
                value: colspan,
            });
        }
        let colspan = usize::try_from(colspan).map_err(|_| ConfigError::InvalidColspan {
            layer,
            row,
            column,
            value: colspan,
        })?;
        Ok(key.with_colspan(colspan))
    }
}

impl LayoutToml {
    /// Convert to an engine layout, validating every layer
    pub fn to_layout(&self) -> Result<Layout, ConfigError> {
        let main = self.main.to_layer("main")?;
        let mut layout = Layout::new(&self.name, main);

        if let Some(shift) = &self.shift {
            layout = layout.with_shift(shift.to_layer("shift")?);
        }

        if let Some(numeric) = &self.numeric {
            layout = layout.with_numeric(numeric.to_layer("numeric")?);
        }
        if let Some(control) = &self.control {
            layout = layout.with_control(control.to_layer("control")?);
        }

        log::debug!(
            "loaded layout '{}' ({} main rows, shift={}, numeric={}, control={})",
            layout.name(),
            layout.main_layer().row_count(),
            layout.shift_layer().is_some(),
            layout.numeric_layer().is_some(),
            layout.control_layer().is_some(),
        );
        Ok(layout)
    }
}

/// Parse a layout from TOML text
pub fn layout_from_toml(content: &str) -> Result<Layout, ConfigError> {
    let toml_layout: LayoutToml =
        toml::from_str(content).map_err(|e| ConfigError::TomlParse(e.to_string()))?;
    toml_layout.to_layout()
}

/// Parse a layout file
pub fn layout_from_toml_path<P: AsRef<Path>>(path: P) -> Result<Layout, ConfigError> {
    let content = fs::read_to_string(path)?;
    layout_from_toml(&content)
}
