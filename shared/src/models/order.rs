//! Order Model
//!
//! An order (comanda) moves through the kitchen lifecycle:
//!
//! ```text
//! pendente ──► Em Preparo ──► Concluído
//!     │             │              │
//!     └─────────────┴──────────────┴──► (deleted)
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Order status
///
/// Serialized with the exact strings the kitchen panel renders.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum OrderStatus {
    #[default]
    #[serde(rename = "pendente")]
    Pending,
    #[serde(rename = "Em Preparo")]
    InPreparation,
    #[serde(rename = "Concluído")]
    Completed,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 3] = [
        OrderStatus::Pending,
        OrderStatus::InPreparation,
        OrderStatus::Completed,
    ];

    /// Wire representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pendente",
            OrderStatus::InPreparation => "Em Preparo",
            OrderStatus::Completed => "Concluído",
        }
    }

    /// The single status that follows this one, if any
    pub const fn next(&self) -> Option<OrderStatus> {
        match self {
            OrderStatus::Pending => Some(OrderStatus::InPreparation),
            OrderStatus::InPreparation => Some(OrderStatus::Completed),
            OrderStatus::Completed => None,
        }
    }

    /// Whether `self → to` is an edge of the kitchen transition table.
    ///
    /// Staying in the same status counts as allowed (re-sent update).
    pub fn can_transition_to(&self, to: OrderStatus) -> bool {
        *self == to || self.next() == Some(to)
    }

    pub const fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Completed)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not one of the known statuses
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown order status: {0:?}")]
pub struct UnknownStatus(pub String);

impl FromStr for OrderStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

/// Order entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: u64,
    pub table: String,
    /// Menu item ids; repeated ids represent quantity
    pub items: Vec<u32>,
    /// Total amount in currency unit
    pub total: f64,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

/// Create order payload
///
/// Fields are optional at the wire level so that a missing field is reported
/// as a validation error instead of a body rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderCreate {
    pub table: Option<String>,
    #[serde(default)]
    pub items: Vec<u32>,
    pub total: Option<f64>,
}

/// Update status payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderStatusUpdate {
    pub status: Option<String>,
}

/// Lifecycle notification emitted after every successful mutation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OrderEvent {
    Created {
        order: Order,
    },
    StatusChanged {
        order: Order,
        from: OrderStatus,
    },
    Deleted {
        id: u64,
    },
}

impl OrderEvent {
    /// Id of the order the event refers to
    pub fn order_id(&self) -> u64 {
        match self {
            OrderEvent::Created { order } | OrderEvent::StatusChanged { order, .. } => order.id,
            OrderEvent::Deleted { id } => *id,
        }
    }

    /// Event name used for the SSE `event:` field
    pub fn name(&self) -> &'static str {
        match self {
            OrderEvent::Created { .. } => "created",
            OrderEvent::StatusChanged { .. } => "status_changed",
            OrderEvent::Deleted { .. } => "deleted",
        }
    }
}
