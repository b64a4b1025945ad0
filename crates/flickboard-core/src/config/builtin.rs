// Flickboard Built-in Layouts
// Layouts shipped inside the binary, parsed through the regular loader

use std::path::PathBuf;

use super::parser::{layout_from_toml, layout_from_toml_path, ConfigError};
use crate::Layout;

/// Layout used when nothing else is configured
pub const DEFAULT_LAYOUT: &str = "en-messagease";

const BUILTIN_LAYOUTS: &[(&str, &str)] = &[
    ("en-messagease", include_str!("../../layouts/en_messagease.toml")),
    ("numpad", include_str!("../../layouts/numpad.toml")),
    ("common", include_str!("../../layouts/common.toml")),
];

/// Names of all built-in layouts
pub fn builtin_layout_names() -> impl Iterator<Item = &'static str> {
    BUILTIN_LAYOUTS.iter().map(|(name, _)| *name)
}

/// Load a built-in layout by name
pub fn builtin_layout(name: &str) -> Result<Layout, ConfigError> {
    let (_, content) = BUILTIN_LAYOUTS
        .iter()
        .find(|(builtin, _)| builtin.eq_ignore_ascii_case(name))
        .ok_or_else(|| ConfigError::UnknownLayout(name.to_string()))?;
    layout_from_toml(content)
}

/// Default user layout path (~/.config/flickboard/layout.toml)
pub fn default_layout_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("flickboard").join("layout.toml"))
}

/// Load the user's layout if one exists, otherwise the default built-in
pub fn load_default() -> Result<Layout, ConfigError> {
    if let Some(path) = default_layout_path() {
        if path.exists() {
            log::debug!("loading layout from {}", path.display());
            return layout_from_toml_path(path);
        }
    }
    builtin_layout(DEFAULT_LAYOUT)
}
