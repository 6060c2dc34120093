use crate::{
    abstract_trait::{
        DynOrderCommandService, DynOrderQueryService, DynTshirtCommandService,
        DynTshirtQueryService,
    },
    repository::{
        order::{OrderCommandRepository, OrderQueryRepository},
        tshirt::{TshirtCommandRepository, TshirtQueryRepository},
    },
    service::{
        order::{OrderCommandService, OrderQueryService},
        tshirt::{TshirtCommandService, TshirtQueryService},
    },
    store::InventoryStore,
};
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub tshirt_query: DynTshirtQueryService,
    pub tshirt_command: DynTshirtCommandService,
    pub order_query: DynOrderQueryService,
    pub order_command: DynOrderCommandService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("tshirt_query", &"TshirtQueryService")
            .field("tshirt_command", &"TshirtCommandService")
            .field("order_query", &"OrderQueryService")
            .field("order_command", &"OrderCommandService")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(store: Arc<InventoryStore>) -> Self {
        let tshirt_query_repo = Arc::new(TshirtQueryRepository::new(store.clone()));
        let tshirt_command_repo = Arc::new(TshirtCommandRepository::new(store.clone()));
        let order_query_repo = Arc::new(OrderQueryRepository::new(store.clone()));
        let order_command_repo = Arc::new(OrderCommandRepository::new(store.clone()));

        let tshirt_query: DynTshirtQueryService =
            Arc::new(TshirtQueryService::new(tshirt_query_repo));
        let tshirt_command: DynTshirtCommandService =
            Arc::new(TshirtCommandService::new(tshirt_command_repo));
        let order_query: DynOrderQueryService = Arc::new(OrderQueryService::new(order_query_repo));
        let order_command: DynOrderCommandService =
            Arc::new(OrderCommandService::new(order_command_repo));

        Self {
            tshirt_query,
            tshirt_command,
            order_query,
            order_command,
        }
    }
}
