// Flickboard Config API
// Layout files and the layouts shipped with the crate

pub mod builtin;
pub mod parser;

pub use builtin::{builtin_layout, builtin_layout_names, default_layout_path, load_default, DEFAULT_LAYOUT};
pub use parser::{layout_from_toml, layout_from_toml_path, ConfigError, LayoutToml};
