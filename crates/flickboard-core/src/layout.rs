// Flickboard Layout
// A named bundle of layers making up one selectable keyboard

use crate::compose;
use crate::Layer;

/// One keyboard: a main layer plus optional shift, numeric and control
/// layers.
///
/// A layout owns its layers and is never mutated once built; the active
/// mode is expressed by which optional layers are present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    name: String,
    main_layer: Layer,
    shift_layer: Option<Layer>,
    numeric_layer: Option<Layer>,
    control_layer: Option<Layer>,
}

impl Layout {
    /// Create a layout with only a main layer
    pub fn new(name: impl Into<String>, main_layer: Layer) -> Self {
        Self {
            name: name.into(),
            main_layer,
            shift_layer: None,
            numeric_layer: None,
            control_layer: None,
        }
    }

    /// Builder: set the shift layer
    pub fn with_shift(mut self, layer: Layer) -> Self {
        self.shift_layer = Some(layer);
        self
    }

    /// Builder: set the numeric layer
    pub fn with_numeric(mut self, layer: Layer) -> Self {
        self.numeric_layer = Some(layer);
        self
    }

    /// Builder: set the control layer
    pub fn with_control(mut self, layer: Layer) -> Self {
        self.control_layer = Some(layer);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn main_layer(&self) -> &Layer {
        &self.main_layer
    }

    pub fn shift_layer(&self) -> Option<&Layer> {
        self.shift_layer.as_ref()
    }

    pub fn numeric_layer(&self) -> Option<&Layer> {
        self.numeric_layer.as_ref()
    }

    pub fn control_layer(&self) -> Option<&Layer> {
        self.control_layer.as_ref()
    }

    /// The single layer to display, composed from this layout's layers
    pub fn effective_layer(&self) -> Layer {
        compose::resolve(self)
    }
}
