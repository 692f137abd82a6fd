//! OrdersManager - Order lifecycle operations and event generation
//!
//! This module handles:
//! - Payload validation (table, items, total)
//! - Status transitions (`pendente → Em Preparo → Concluído`)
//! - Storage mutation under a single lock acquisition
//! - Audit logging and event broadcasting
//!
//! # Update Flow
//!
//! ```text
//! update_status(id, payload)
//!     ├─ 1. Require `status` (400 before any lookup)
//!     ├─ 2. Look up order (404)
//!     ├─ 3. Parse status string (400 if not one of the three)
//!     ├─ 4. Check transition table when strict (409)
//!     ├─ 5. Overwrite status in place
//!     ├─ 6. Broadcast StatusChanged
//!     └─ 7. Return the full record
//! ```

mod error;
pub use error::*;

use super::storage::OrderStorage;
use crate::core::config::OrderRules;
use crate::menu::MenuCatalog;
use crate::money;
use crate::utils::validation::{
    validate_amount, validate_required_text, MAX_ORDER_ITEMS, MAX_TABLE_LEN,
};
use chrono::Utc;
use shared::{Order, OrderCreate, OrderEvent, OrderStatus, OrderStatusUpdate};
use std::sync::Arc;
use tokio::sync::broadcast;

/// OrdersManager for lifecycle operations
pub struct OrdersManager {
    storage: OrderStorage,
    menu: Arc<MenuCatalog>,
    rules: OrderRules,
    event_tx: broadcast::Sender<OrderEvent>,
}

impl std::fmt::Debug for OrdersManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrdersManager")
            .field("storage", &"<OrderStorage>")
            .field("event_tx", &"<broadcast::Sender>")
            .field("rules", &self.rules)
            .finish()
    }
}

impl OrdersManager {
    pub fn new(menu: Arc<MenuCatalog>, rules: OrderRules) -> Self {
        let (event_tx, _) = broadcast::channel(rules.event_capacity.max(1));
        tracing::info!(
            strict_transitions = rules.strict_transitions,
            require_items = rules.require_items,
            "OrdersManager started"
        );
        Self {
            storage: OrderStorage::new(),
            menu,
            rules,
            event_tx,
        }
    }

    /// Subscribe to lifecycle events
    pub fn subscribe(&self) -> broadcast::Receiver<OrderEvent> {
        self.event_tx.subscribe()
    }

    /// All orders in insertion order
    pub fn list(&self) -> Vec<Order> {
        self.storage.list()
    }

    pub fn get(&self, id: u64) -> ManagerResult<Order> {
        self.storage.get(id).ok_or(ManagerError::OrderNotFound(id))
    }

    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Create an order in `pendente` status
    pub fn create(&self, payload: OrderCreate) -> ManagerResult<Order> {
        let table = validate_required_text(payload.table.as_deref(), "table", MAX_TABLE_LEN)?;
        let total = validate_amount(payload.total, "total")?;
        self.check_items(&payload.items)?;

        let declared = money::to_decimal(total);
        if let Some(expected) = self.menu.price_of(&payload.items)
            && !money::approx_eq(declared, expected)
        {
            tracing::warn!(
                table = %table,
                declared = %declared,
                expected = %expected,
                "Order total differs from menu prices"
            );
        }

        let order = self.storage.insert_with(|id| Order {
            id,
            table: table.to_string(),
            items: payload.items,
            total: money::to_f64(declared),
            status: OrderStatus::Pending,
            created_at: Utc::now(),
        });

        tracing::info!(
            target: "audit",
            action = "order.created",
            order_id = order.id,
            table = %order.table,
            items = order.items.len(),
            total = order.total,
        );
        self.broadcast(OrderEvent::Created {
            order: order.clone(),
        });
        Ok(order)
    }

    /// Overwrite the status of an order and return the full record
    ///
    /// Re-sending the current status is a no-op and emits no event.
    pub fn update_status(&self, id: u64, payload: OrderStatusUpdate) -> ManagerResult<Order> {
        let Some(raw) = payload.status else {
            return Err(shared::AppError::required("status").into());
        };
        let strict = self.rules.strict_transitions;

        // Lookup, parse and transition check all happen under one write lock
        let (order, from, to) = self
            .storage
            .modify(id, |order| {
                let to: OrderStatus = raw
                    .parse()
                    .map_err(|_| ManagerError::UnknownStatus(raw.clone()))?;
                let from = order.status;
                if strict && !from.can_transition_to(to) {
                    return Err(ManagerError::InvalidTransition { id, from, to });
                }
                order.status = to;
                Ok((order.clone(), from, to))
            })
            .ok_or(ManagerError::OrderNotFound(id))??;

        if from == to {
            tracing::debug!(order_id = id, status = %to, "Status unchanged");
            return Ok(order);
        }

        tracing::info!(
            target: "audit",
            action = "order.status_changed",
            order_id = id,
            from = %from,
            to = %to,
        );
        self.broadcast(OrderEvent::StatusChanged {
            order: order.clone(),
            from,
        });
        Ok(order)
    }

    /// Delete an order in any status
    pub fn delete(&self, id: u64) -> ManagerResult<()> {
        let order = self
            .storage
            .remove(id)
            .ok_or(ManagerError::OrderNotFound(id))?;

        tracing::info!(
            target: "audit",
            action = "order.deleted",
            order_id = id,
            status = %order.status,
        );
        self.broadcast(OrderEvent::Deleted { id });
        Ok(())
    }

    /// Drop every order and restart ids at 1
    pub fn reset(&self) {
        let dropped = self.storage.len();
        self.storage.clear();
        tracing::info!(target: "audit", action = "orders.reset", dropped);
    }

    fn check_items(&self, items: &[u32]) -> ManagerResult<()> {
        if items.len() > MAX_ORDER_ITEMS {
            return Err(ManagerError::TooManyItems {
                count: items.len(),
                max: MAX_ORDER_ITEMS,
            });
        }
        if !self.rules.require_items {
            return Ok(());
        }
        if items.is_empty() {
            return Err(ManagerError::EmptyOrder);
        }
        let unknown = self.menu.unknown_ids(items);
        if !unknown.is_empty() {
            return Err(ManagerError::UnknownMenuItems(unknown));
        }
        Ok(())
    }

    fn broadcast(&self, event: OrderEvent) {
        // No subscribers is fine
        let _ = self.event_tx.send(event);
    }
}

#[cfg(test)]
mod tests;
