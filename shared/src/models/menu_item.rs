//! Menu Item Model

use serde::{Deserialize, Serialize};

/// Menu item entity (immutable after seeding)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: u32,
    pub name: String,
    /// Price in currency unit
    pub price: f64,
    pub description: String,
}

impl MenuItem {
    pub fn new(id: u32, name: impl Into<String>, price: f64, description: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            description: description.into(),
        }
    }
}
