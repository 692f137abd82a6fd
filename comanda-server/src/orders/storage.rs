//! In-memory order storage
//!
//! Orders live in a `BTreeMap` keyed by id. Ids come from a monotonic counter
//! that is independent of the number of stored orders, so an id is never
//! handed out twice (deleting order 1 of 2 does not make the next order 2).
//! Because ids only grow, map order equals insertion order.
//!
//! Every method takes the lock once and releases it before returning; the
//! lock is never held across an `.await`.

use parking_lot::RwLock;
use shared::Order;
use std::collections::BTreeMap;

#[derive(Debug)]
struct Inner {
    orders: BTreeMap<u64, Order>,
    next_id: u64,
}

impl Inner {
    fn empty() -> Self {
        Self {
            orders: BTreeMap::new(),
            next_id: 1,
        }
    }
}

/// Shared order storage
#[derive(Debug)]
pub struct OrderStorage {
    inner: RwLock<Inner>,
}

impl Default for OrderStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderStorage {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner::empty()),
        }
    }

    /// All orders in insertion order
    pub fn list(&self) -> Vec<Order> {
        self.inner.read().orders.values().cloned().collect()
    }

    pub fn get(&self, id: u64) -> Option<Order> {
        self.inner.read().orders.get(&id).cloned()
    }

    pub fn len(&self) -> usize {
        self.inner.read().orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().orders.is_empty()
    }

    /// Id the next inserted order will receive
    pub fn peek_next_id(&self) -> u64 {
        self.inner.read().next_id
    }

    /// Assign the next id, build the order with it and store it
    pub fn insert_with(&self, build: impl FnOnce(u64) -> Order) -> Order {
        let mut inner = self.inner.write();
        let id = inner.next_id;
        inner.next_id += 1;
        let order = build(id);
        debug_assert_eq!(order.id, id, "order built with a foreign id");
        inner.orders.insert(id, order.clone());
        order
    }

    /// Run `f` on the stored order under the write lock
    ///
    /// Returns `None` if no order has this id.
    pub fn modify<R>(&self, id: u64, f: impl FnOnce(&mut Order) -> R) -> Option<R> {
        let mut inner = self.inner.write();
        inner.orders.get_mut(&id).map(f)
    }

    /// Remove and return the order
    pub fn remove(&self, id: u64) -> Option<Order> {
        self.inner.write().orders.remove(&id)
    }

    /// Drop every order and restart ids at 1
    pub fn clear(&self) {
        *self.inner.write() = Inner::empty();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use shared::OrderStatus;

    fn build(table: &str) -> impl FnOnce(u64) -> Order + '_ {
        move |id| Order {
            id,
            table: table.to_string(),
            items: vec![1],
            total: 13.0,
            status: OrderStatus::Pending,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_insert_assigns_sequential_ids() {
        let storage = OrderStorage::new();
        assert_eq!(storage.insert_with(build("Mesa 1")).id, 1);
        assert_eq!(storage.insert_with(build("Mesa 2")).id, 2);
        assert_eq!(storage.len(), 2);
        assert_eq!(storage.peek_next_id(), 3);
    }

    #[test]
    fn test_ids_not_reused_after_remove() {
        let storage = OrderStorage::new();
        let a = storage.insert_with(build("A"));
        let b = storage.insert_with(build("B"));

        assert!(storage.remove(a.id).is_some());
        let c = storage.insert_with(build("C"));

        assert_ne!(c.id, a.id);
        assert_ne!(c.id, b.id);
        assert_eq!(c.id, 3);
    }

    #[test]
    fn test_list_keeps_insertion_order() {
        let storage = OrderStorage::new();
        for table in ["A", "B", "C"] {
            storage.insert_with(build(table));
        }
        storage.remove(2);
        let tables: Vec<_> = storage.list().into_iter().map(|o| o.table).collect();
        assert_eq!(tables, vec!["A", "C"]);
    }

    #[test]
    fn test_modify_in_place() {
        let storage = OrderStorage::new();
        let order = storage.insert_with(build("A"));

        let result = storage.modify(order.id, |o| {
            o.status = OrderStatus::InPreparation;
            o.clone()
        });
        assert_eq!(result.unwrap().status, OrderStatus::InPreparation);
        assert_eq!(
            storage.get(order.id).unwrap().status,
            OrderStatus::InPreparation
        );

        assert!(storage.modify(99, |_| ()).is_none());
    }

    #[test]
    fn test_clear_resets_ids() {
        let storage = OrderStorage::new();
        storage.insert_with(build("A"));
        storage.insert_with(build("B"));
        storage.clear();

        assert!(storage.is_empty());
        assert_eq!(storage.insert_with(build("C")).id, 1);
    }
}
