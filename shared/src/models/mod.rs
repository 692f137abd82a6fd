//! Data models shared between the server and its clients

pub mod menu_item;
pub mod order;

pub use menu_item::MenuItem;
pub use order::{Order, OrderCreate, OrderEvent, OrderStatus, OrderStatusUpdate, UnknownStatus};
