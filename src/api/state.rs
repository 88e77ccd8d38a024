//! API server state

use std::sync::Arc;

use crate::catalog::Catalog;

/// API server state
#[derive(Clone)]
pub struct AppState {
    /// Album catalog shared by every handler
    pub catalog: Arc<Catalog>,
}

impl AppState {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// State backed by a catalog holding the seed albums
    pub fn seeded() -> Self {
        Self::new(Arc::new(Catalog::seeded()))
    }

    /// State backed by an empty catalog
    pub fn empty() -> Self {
        Self::new(Arc::new(Catalog::new()))
    }
}
