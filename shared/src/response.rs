//! API Response types
//!
//! Success envelopes returned by the HTTP API. Errors use
//! [`crate::error::ErrorBody`].
//!
//! | Endpoint | Envelope |
//! |----------|----------|
//! | `GET /menu` | [`MenuListResponse`] |
//! | `GET /menu/{id}` | [`MenuItemResponse`] |
//! | `GET /orders` | [`OrderListResponse`] |
//! | `POST /orders` | [`OrderCreatedResponse`] |
//! | `PATCH /orders/{id}` | bare [`Order`] (no envelope) |
//! | `DELETE /orders/{id}` | [`MessageResponse`] |

use serde::{Deserialize, Serialize};

use crate::models::{MenuItem, Order};

/// `{ "success": true, "items": [...] }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuListResponse {
    pub success: bool,
    pub items: Vec<MenuItem>,
}

impl MenuListResponse {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self {
            success: true,
            items,
        }
    }
}

/// `{ "success": true, "item": {...} }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemResponse {
    pub success: bool,
    pub item: MenuItem,
}

impl MenuItemResponse {
    pub fn new(item: MenuItem) -> Self {
        Self {
            success: true,
            item,
        }
    }
}

/// `{ "success": true, "count": n, "items": [...] }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderListResponse {
    pub success: bool,
    pub count: usize,
    pub items: Vec<Order>,
}

impl OrderListResponse {
    pub fn new(items: Vec<Order>) -> Self {
        Self {
            success: true,
            count: items.len(),
            items,
        }
    }
}

/// `{ "success": true, "order": {...} }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreatedResponse {
    pub success: bool,
    pub order: Order,
}

impl OrderCreatedResponse {
    pub fn new(order: Order) -> Self {
        Self {
            success: true,
            order,
        }
    }
}

/// `{ "success": true, "message": "..." }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}
