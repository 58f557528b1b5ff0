use std::sync::Arc;

use storefront_core::Catalog;

use crate::auth::AdminAccount;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Catalog, // Read-only, shared across requests
    pub admin: Arc<AdminAccount>,
}

impl AppState {
    pub fn new(catalog: Catalog, admin: AdminAccount) -> Self {
        Self {
            catalog,
            admin: Arc::new(admin),
        }
    }
}
