//! Order Lifecycle Module
//!
//! - **storage**: in-memory order store keyed by id
//! - **manager**: lifecycle operations (create, list, update status, delete),
//!   validation rules and event broadcasting
//!
//! # Architecture
//!
//! ```text
//! HTTP handler → OrdersManager ─┬─► OrderStorage (RwLock<BTreeMap>)
//!                               └─► broadcast::Sender<OrderEvent>
//!                                          ↓
//!                                   /orders/events subscribers
//! ```

pub mod manager;
pub mod storage;

pub use manager::OrdersManager;
pub use storage::OrderStorage;
