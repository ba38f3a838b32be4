//! Attribute definition model.

use serde::{Deserialize, Serialize};

/// Declaration of one typed field that instances of a category may carry.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AttributeDefinition {
    /// Dotted attribute name (e.g., "occi.core.id").
    pub name: String,
    /// The attribute must be present on instances.
    #[serde(default)]
    pub required: bool,
    /// The attribute cannot be changed once set.
    #[serde(default)]
    pub immutable: bool,
}

impl AttributeDefinition {
    /// Creates a definition with both flags cleared.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            required: false,
            immutable: false,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn immutable(mut self) -> Self {
        self.immutable = true;
        self
    }
}
