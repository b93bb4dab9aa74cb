//! Shared application state for all routes.

use crate::service::ProductRepository;
use crate::store::Store;

#[derive(Clone, Debug)]
pub struct AppState {
    pub products: ProductRepository,
}

impl AppState {
    pub fn new(store: Store) -> Self {
        AppState {
            products: ProductRepository::new(store),
        }
    }

    pub fn store(&self) -> &Store {
        self.products.store()
    }
}
