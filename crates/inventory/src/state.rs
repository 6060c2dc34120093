use crate::{di::DependenciesInject, seed::seed_tshirts, store::InventoryStore};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
}

impl AppState {
    pub fn new() -> Self {
        let store = Arc::new(InventoryStore::new(seed_tshirts()));

        Self {
            di_container: DependenciesInject::new(store),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
