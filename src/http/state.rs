//! # Application State
//!
//! One service per resource group, wired over a single record store
//! and token signer and shared across handlers.

use std::sync::Arc;

use crate::account::AccountService;
use crate::auth::TokenSigner;
use crate::catalog::CatalogService;
use crate::review::ReviewService;
use crate::store::RecordStore;

/// Shared application state behind the routers.
pub struct AppState<S: RecordStore> {
    pub accounts: AccountService<S>,
    pub catalog: CatalogService<S>,
    pub reviews: ReviewService<S>,
    pub signer: Arc<TokenSigner>,
}

/// Handle handed to routers and handlers.
pub type SharedState<S> = Arc<AppState<S>>;

impl<S: RecordStore> AppState<S> {
    /// Wire the services over one store and signer.
    pub fn shared(store: Arc<S>, signer: Arc<TokenSigner>) -> SharedState<S> {
        Arc::new(Self {
            accounts: AccountService::new(store.clone(), signer.clone()),
            catalog: CatalogService::new(store.clone()),
            reviews: ReviewService::new(store),
            signer,
        })
    }
}
