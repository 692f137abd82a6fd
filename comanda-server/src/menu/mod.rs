//! Menu Catalog - 只读菜单
//!
//! 菜单在进程启动时一次性加载，之后不再修改。
//! 提供按 id 查找和价格汇总 (用于订单金额核对)。

mod seed;

use std::collections::HashMap;

use rust_decimal::Decimal;
use shared::MenuItem;
use thiserror::Error;

use crate::money;

pub use seed::default_items;

/// Errors detected while seeding the catalog
#[derive(Debug, Error, PartialEq)]
pub enum MenuError {
    #[error("duplicate menu item id: {0}")]
    DuplicateId(u32),

    #[error("menu item {id} has invalid price {price}")]
    InvalidPrice { id: u32, price: f64 },
}

/// Read-only menu, ordered as seeded
#[derive(Debug, Clone)]
pub struct MenuCatalog {
    items: Vec<MenuItem>,
    /// id → position in `items`
    index: HashMap<u32, usize>,
}

impl MenuCatalog {
    /// Build a catalog from seed items
    ///
    /// Rejects duplicate ids and negative or non-finite prices.
    pub fn new(items: Vec<MenuItem>) -> Result<Self, MenuError> {
        let mut index = HashMap::with_capacity(items.len());
        for (pos, item) in items.iter().enumerate() {
            if !item.price.is_finite() || item.price < 0.0 {
                return Err(MenuError::InvalidPrice {
                    id: item.id,
                    price: item.price,
                });
            }
            if index.insert(item.id, pos).is_some() {
                return Err(MenuError::DuplicateId(item.id));
            }
        }
        Ok(Self { items, index })
    }

    /// Catalog with the restaurant's standard menu
    pub fn with_default_menu() -> Self {
        let items = default_items();
        let index = items
            .iter()
            .enumerate()
            .map(|(pos, item)| (item.id, pos))
            .collect();
        Self { items, index }
    }

    /// All items in seed order
    pub fn list(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn get(&self, id: u32) -> Option<&MenuItem> {
        self.index.get(&id).map(|pos| &self.items[*pos])
    }

    pub fn contains(&self, id: u32) -> bool {
        self.index.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Ids from `ids` that are not on the menu, in input order
    pub fn unknown_ids(&self, ids: &[u32]) -> Vec<u32> {
        ids.iter().copied().filter(|id| !self.contains(*id)).collect()
    }

    /// Sum of the prices of the referenced items (repeats count as quantity)
    ///
    /// `None` if any id is unknown.
    pub fn price_of(&self, ids: &[u32]) -> Option<Decimal> {
        let prices = ids
            .iter()
            .map(|id| self.get(*id).map(|item| item.price))
            .collect::<Option<Vec<f64>>>()?;
        Some(money::sum(prices))
    }
}
