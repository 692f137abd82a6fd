use super::*;
use shared::AppError;

fn create_test_manager() -> OrdersManager {
    create_manager_with(OrderRules::default())
}

fn create_manager_with(rules: OrderRules) -> OrdersManager {
    OrdersManager::new(Arc::new(MenuCatalog::with_default_menu()), rules)
}

fn permissive_rules() -> OrderRules {
    OrderRules {
        strict_transitions: false,
        require_items: false,
        ..OrderRules::default()
    }
}

// ========================================================================
// Payload helpers
// ========================================================================

fn order_payload(table: &str, items: Vec<u32>, total: f64) -> OrderCreate {
    OrderCreate {
        table: Some(table.to_string()),
        items,
        total: Some(total),
    }
}

/// Mesa 5: Prato Feito (13.00) + Suco de Laranja (8.00) + Pepsi (12.00)
fn mesa_5() -> OrderCreate {
    order_payload("Mesa 5", vec![1, 2, 9], 33.0)
}

fn status(value: &str) -> OrderStatusUpdate {
    OrderStatusUpdate {
        status: Some(value.to_string()),
    }
}

fn create_order(manager: &OrdersManager, table: &str) -> Order {
    manager
        .create(order_payload(table, vec![1], 13.0))
        .expect("create order")
}

/// Collect everything currently queued on the receiver
fn drain(rx: &mut broadcast::Receiver<OrderEvent>) -> Vec<OrderEvent> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}

fn app_error(err: ManagerError) -> AppError {
    err.into()
}

mod test_boundary;
