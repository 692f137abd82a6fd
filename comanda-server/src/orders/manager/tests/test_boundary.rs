use super::*;
use shared::ErrorCode;

// ========================================================================
// create: table / total / items
// ========================================================================

#[test]
fn test_create_missing_table() {
    let manager = create_test_manager();
    let payload = OrderCreate {
        table: None,
        items: vec![1],
        total: Some(25.0),
    };

    let app = app_error(manager.create(payload).unwrap_err());

    assert_eq!(app.code, ErrorCode::RequiredField);
    assert_eq!(app.http_status().as_u16(), 400);
    assert!(manager.is_empty());
}

#[test]
fn test_create_blank_table() {
    let manager = create_test_manager();
    let app = app_error(
        manager
            .create(order_payload("   ", vec![1], 13.0))
            .unwrap_err(),
    );
    assert_eq!(app.code, ErrorCode::ValidationFailed);
    assert!(manager.is_empty());
}

#[test]
fn test_create_table_too_long() {
    let manager = create_test_manager();
    let long = "M".repeat(crate::utils::validation::MAX_TABLE_LEN + 1);
    assert!(manager.create(order_payload(&long, vec![1], 13.0)).is_err());
}

#[test]
fn test_create_missing_total() {
    let manager = create_test_manager();
    let payload = OrderCreate {
        table: Some("Mesa 1".into()),
        items: vec![1],
        total: None,
    };
    let app = app_error(manager.create(payload).unwrap_err());
    assert_eq!(app.code, ErrorCode::RequiredField);
}

#[test]
fn test_create_negative_total() {
    let manager = create_test_manager();
    let app = app_error(
        manager
            .create(order_payload("Mesa 1", vec![1], -1.0))
            .unwrap_err(),
    );
    assert_eq!(app.code, ErrorCode::ValueOutOfRange);
    assert_eq!(app.http_status().as_u16(), 400);
}

#[test]
fn test_create_zero_total_accepted_when_items_optional() {
    let manager = create_manager_with(permissive_rules());
    let order = manager
        .create(order_payload("Mesa 1", vec![], 0.0))
        .unwrap();
    assert!(order.items.is_empty());
    assert_eq!(order.total, 0.0);
}

#[test]
fn test_create_empty_items_rejected() {
    let manager = create_test_manager();
    let err = manager
        .create(order_payload("Mesa 1", vec![], 0.0))
        .unwrap_err();
    assert!(matches!(err, ManagerError::EmptyOrder));
    assert_eq!(app_error(err).code, ErrorCode::OrderEmpty);
}

#[test]
fn test_create_unknown_menu_items() {
    let manager = create_test_manager();
    let err = manager
        .create(order_payload("Mesa 1", vec![1, 99, 0], 13.0))
        .unwrap_err();

    match &err {
        ManagerError::UnknownMenuItems(ids) => assert_eq!(ids, &vec![99, 0]),
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(app_error(err).code, ErrorCode::MenuItemNotFound);
}

#[test]
fn test_create_unknown_items_allowed_when_permissive() {
    let manager = create_manager_with(permissive_rules());
    let order = manager
        .create(order_payload("Mesa 1", vec![999], 10.0))
        .unwrap();
    assert_eq!(order.items, vec![999]);
}

#[test]
fn test_create_too_many_items() {
    let manager = create_manager_with(permissive_rules());
    let items = vec![1; crate::utils::validation::MAX_ORDER_ITEMS + 1];
    let err = manager
        .create(order_payload("Mesa 1", items, 13.0))
        .unwrap_err();
    assert!(matches!(err, ManagerError::TooManyItems { .. }));
}

#[test]
fn test_create_total_mismatch_is_not_rejected() {
    let manager = create_test_manager();
    // Menu sum is 33.00
    let order = manager
        .create(order_payload("Mesa 5", vec![1, 2, 9], 30.0))
        .unwrap();
    assert_eq!(order.total, 30.0);
}

#[test]
fn test_create_total_rounded_to_cents() {
    let manager = create_test_manager();
    let order = manager
        .create(order_payload("Mesa 5", vec![1], 13.004))
        .unwrap();
    assert_eq!(order.total, 13.0);
}

// ========================================================================
// update_status
// ========================================================================

#[test]
fn test_update_missing_status_checked_before_lookup() {
    let manager = create_test_manager();

    // Order 999 does not exist, but the missing field wins
    let err = manager
        .update_status(999, OrderStatusUpdate { status: None })
        .unwrap_err();
    let app = app_error(err);

    assert_eq!(app.code, ErrorCode::RequiredField);
    assert_eq!(app.http_status().as_u16(), 400);
}

#[test]
fn test_update_unknown_order() {
    let manager = create_test_manager();
    let err = manager
        .update_status(999_999, status("Em Preparo"))
        .unwrap_err();
    assert!(matches!(err, ManagerError::OrderNotFound(999_999)));
    assert_eq!(app_error(err).http_status().as_u16(), 404);
}

#[test]
fn test_update_missing_order_in_populated_store() {
    let manager = create_test_manager();
    let a = create_order(&manager, "Mesa 1");
    let b = create_order(&manager, "Mesa 2");

    let err = manager
        .update_status(999_999, status("Em Preparo"))
        .unwrap_err();

    assert!(matches!(err, ManagerError::OrderNotFound(999_999)));
    // Neighbours untouched
    assert_eq!(manager.get(a.id).unwrap(), a);
    assert_eq!(manager.get(b.id).unwrap(), b);
}

#[test]
fn test_update_missing_order_wins_over_unknown_status() {
    let manager = create_test_manager();
    create_order(&manager, "Mesa 1");

    let err = manager.update_status(999, status("Pronto")).unwrap_err();

    assert!(matches!(err, ManagerError::OrderNotFound(999)));
    assert_eq!(app_error(err).http_status().as_u16(), 404);
}

#[test]
fn test_update_unknown_status_string() {
    let manager = create_test_manager();
    let order = create_order(&manager, "Mesa 1");

    for bad in ["Pronto", "", "em preparo", "PENDENTE"] {
        let err = manager.update_status(order.id, status(bad)).unwrap_err();
        assert!(
            matches!(err, ManagerError::UnknownStatus(_)),
            "{bad:?} should be rejected"
        );
    }
    assert_eq!(manager.get(order.id).unwrap().status, OrderStatus::Pending);
}

#[test]
fn test_update_unknown_status_rejected_even_when_permissive() {
    let manager = create_manager_with(permissive_rules());
    let order = create_order(&manager, "Mesa 1");
    let err = manager.update_status(order.id, status("Pronto")).unwrap_err();
    assert_eq!(app_error(err).code, ErrorCode::UnknownStatus);
}

#[test]
fn test_strict_rejects_skipping_preparation() {
    let manager = create_test_manager();
    let order = create_order(&manager, "Mesa 1");

    let err = manager
        .update_status(order.id, status("Concluído"))
        .unwrap_err();

    assert!(matches!(
        err,
        ManagerError::InvalidTransition {
            from: OrderStatus::Pending,
            to: OrderStatus::Completed,
            ..
        }
    ));
    assert_eq!(app_error(err).http_status().as_u16(), 409);
    assert_eq!(manager.get(order.id).unwrap().status, OrderStatus::Pending);
}

#[test]
fn test_strict_rejects_going_back() {
    let manager = create_test_manager();
    let order = create_order(&manager, "Mesa 1");
    manager.update_status(order.id, status("Em Preparo")).unwrap();
    manager.update_status(order.id, status("Concluído")).unwrap();

    for back in ["Em Preparo", "pendente"] {
        let err = manager.update_status(order.id, status(back)).unwrap_err();
        assert!(matches!(err, ManagerError::InvalidTransition { .. }));
    }
}

#[test]
fn test_permissive_allows_any_status() {
    let manager = create_manager_with(permissive_rules());
    let order = create_order(&manager, "Mesa 1");

    let done = manager.update_status(order.id, status("Concluído")).unwrap();
    assert_eq!(done.status, OrderStatus::Completed);

    let back = manager.update_status(order.id, status("pendente")).unwrap();
    assert_eq!(back.status, OrderStatus::Pending);
}

#[test]
fn test_same_status_is_noop() {
    let manager = create_test_manager();
    let order = create_order(&manager, "Mesa 1");
    let mut rx = manager.subscribe();

    let same = manager.update_status(order.id, status("pendente")).unwrap();

    assert_eq!(same, order);
    assert!(drain(&mut rx).is_empty());
}

// ========================================================================
// delete
// ========================================================================

#[test]
fn test_delete_unknown_order() {
    let manager = create_test_manager();
    create_order(&manager, "Mesa 1");

    let err = manager.delete(999_999).unwrap_err();

    assert!(matches!(err, ManagerError::OrderNotFound(999_999)));
    assert_eq!(manager.len(), 1);
}

#[test]
fn test_delete_twice() {
    let manager = create_test_manager();
    let order = create_order(&manager, "Mesa 1");
    manager.delete(order.id).unwrap();
    assert!(matches!(
        manager.delete(order.id),
        Err(ManagerError::OrderNotFound(_))
    ));
}
