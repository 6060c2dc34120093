//! Drives the cart crate's checkout against the real reservation stack
//! through an in-process adapter, covering the multi-line partial-success
//! semantics end to end.

use async_trait::async_trait;
use cart::{CartMirror, Customer, OrderDraft, OrderPlacer, PlaceOrderError};
use inventory::{
    abstract_trait::{
        DynOrderCommandService, OrderCommandServiceTrait, OrderQueryServiceTrait,
        TshirtQueryServiceTrait,
    },
    domain::requests::CreateOrderRequest,
    state::AppState,
};

struct ServicePlacer {
    order_command: DynOrderCommandService,
}

#[async_trait]
impl OrderPlacer for ServicePlacer {
    async fn place(&self, draft: &OrderDraft) -> Result<i32, PlaceOrderError> {
        let req = CreateOrderRequest {
            tshirt_id: draft.tshirt_id,
            customer_name: draft.customer_name.clone(),
            customer_phone: draft.customer_phone.clone(),
            quantity: draft.quantity,
        };

        match self.order_command.create_order(&req).await {
            Ok(order) => Ok(order.id),
            Err(err) => Err(PlaceOrderError::Rejected(err.to_string())),
        }
    }
}

async fn synced_cart(state: &AppState) -> CartMirror {
    let catalog = state.di_container.tshirt_query.find_all().await.unwrap();
    let mut cart = CartMirror::new();
    cart.sync(catalog.into_iter().map(Into::into).collect());
    cart
}

fn customer() -> Customer {
    Customer {
        name: "Asha".into(),
        phone: "9876543210".into(),
    }
}

#[tokio::test]
async fn full_checkout_reserves_every_line() {
    let state = AppState::new();
    let placer = ServicePlacer {
        order_command: state.di_container.order_command.clone(),
    };

    let mut cart = synced_cart(&state).await;
    cart.add(1).unwrap();
    cart.add(1).unwrap();
    cart.add(3).unwrap();

    let report = cart.checkout(&customer(), &placer).await;

    assert!(report.all_succeeded());
    assert!(cart.is_empty());

    let di = &state.di_container;
    assert_eq!(di.tshirt_query.find_by_id(1).await.unwrap().quantity, 8);
    assert_eq!(di.tshirt_query.find_by_id(3).await.unwrap().quantity, 4);
    assert_eq!(di.order_query.find_all().await.unwrap().len(), 2);
}

#[tokio::test]
async fn stale_mirror_line_fails_without_rollback_of_siblings() {
    let state = AppState::new();
    let di = &state.di_container;
    let placer = ServicePlacer {
        order_command: di.order_command.clone(),
    };

    let mut cart = synced_cart(&state).await;
    cart.add(1).unwrap();
    cart.add(3).unwrap();
    cart.set_quantity(3, 5).unwrap();

    // Another customer drains item 3 behind the mirror's back.
    di.order_command
        .create_order(&CreateOrderRequest {
            tshirt_id: 3,
            customer_name: "B".into(),
            customer_phone: "2222222222".into(),
            quantity: 4,
        })
        .await
        .unwrap();

    let report = cart.checkout(&customer(), &placer).await;

    assert!(!report.all_succeeded());
    let failed: Vec<i32> = report.failures().map(|o| o.tshirt_id).collect();
    assert_eq!(failed, vec![3]);

    // The accepted line keeps its reservation; the cart survives for a retry.
    assert_eq!(di.tshirt_query.find_by_id(1).await.unwrap().quantity, 9);
    assert_eq!(cart.lines().len(), 2);

    // Re-sync clamps the stale line to what the server still has.
    let catalog = di.tshirt_query.find_all().await.unwrap();
    cart.sync(catalog.into_iter().map(Into::into).collect());

    let stale_line = cart.lines().iter().find(|l| l.tshirt_id == 3).unwrap();
    assert_eq!(stale_line.quantity, 1);
}
