use inventory::{
    abstract_trait::{
        OrderCommandServiceTrait, OrderQueryServiceTrait, TshirtCommandServiceTrait,
        TshirtQueryServiceTrait,
    },
    domain::requests::CreateOrderRequest,
    state::AppState,
};
use shared::{errors::ServiceError, model::OrderStatus};

fn order_req(tshirt_id: i32, name: &str, phone: &str, quantity: i32) -> CreateOrderRequest {
    CreateOrderRequest {
        tshirt_id,
        customer_name: name.into(),
        customer_phone: phone.into(),
        quantity,
    }
}

#[tokio::test]
async fn reserve_reject_release_scenario() {
    let state = AppState::new();
    let di = &state.di_container;

    // Seed stock for item 1 is 10; reserving 4 leaves 6.
    let order = di
        .order_command
        .create_order(&order_req(1, "A", "1111111111", 4))
        .await
        .unwrap();
    assert_eq!(order.quantity, 4);
    assert_eq!(order.tshirt.price, 720);
    assert_eq!(order.status, OrderStatus::Pending);

    let stock = di.tshirt_query.find_by_id(1).await.unwrap().quantity;
    assert_eq!(stock, 6);

    // A second customer asking for 10 must bounce without moving stock.
    let err = di
        .order_command
        .create_order(&order_req(1, "B", "2222222222", 10))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::InsufficientStock));
    assert_eq!(di.tshirt_query.find_by_id(1).await.unwrap().quantity, 6);

    // Deleting the first order restores the original 10.
    di.order_command.delete_order(order.id).await.unwrap();
    assert_eq!(di.tshirt_query.find_by_id(1).await.unwrap().quantity, 10);
    assert!(di.order_query.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn listed_orders_embed_point_in_time_snapshots() {
    let state = AppState::new();
    let di = &state.di_container;

    di.order_command
        .create_order(&order_req(3, "A", "1111111111", 2))
        .await
        .unwrap();

    // Reset rewrites the catalog underneath the existing order.
    di.tshirt_command.reset_inventory().await.unwrap();

    let orders = di.order_query.find_all().await.unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].tshirt.design_name, "Power to the Meeple");
    assert_eq!(orders[0].tshirt.price, 720);
    assert_eq!(orders[0].tshirt.quantity, 5);
}

#[tokio::test]
async fn reset_after_arbitrary_history_restores_seed() {
    let state = AppState::new();
    let di = &state.di_container;

    for id in [1, 2, 3, 4] {
        di.order_command
            .create_order(&order_req(id, "A", "1111111111", 2))
            .await
            .unwrap();
    }
    di.tshirt_command.update_stock().await.unwrap();
    di.tshirt_command.reset_inventory().await.unwrap();

    let catalog = di.tshirt_query.find_all().await.unwrap();
    assert_eq!(catalog.len(), 6);

    let item = catalog.iter().find(|t| t.id == 3).unwrap();
    assert_eq!(item.design_name, "Power to the Meeple");
    assert_eq!(item.color, "Navy");
    assert_eq!(item.price, 720);
    assert_eq!(item.quantity, 5);

    // Reset keeps the ledger; orders survive the catalog rewrite.
    assert_eq!(di.order_query.find_all().await.unwrap().len(), 4);
}

#[tokio::test]
async fn restock_never_decreases_stock() {
    let state = AppState::new();
    let di = &state.di_container;

    // Drive item 3 (seed 5) down to 1 so it qualifies for a top-up.
    di.order_command
        .create_order(&order_req(3, "A", "1111111111", 4))
        .await
        .unwrap();

    let before = di.tshirt_query.find_all().await.unwrap();
    di.tshirt_command.update_stock().await.unwrap();
    let after = di.tshirt_query.find_all().await.unwrap();

    for (pre, post) in before.iter().zip(after.iter()) {
        assert!(post.quantity >= pre.quantity, "restock decreased stock");
        if pre.quantity >= 5 {
            assert_eq!(post.quantity, pre.quantity);
        }
    }
}
