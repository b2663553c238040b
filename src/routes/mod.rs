// HTTP routes: dashboard page, table fragments, channel detail pages

mod fragments;
mod pages;

use axum::{Router, routing::get};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use tower_http::cors::{Any, CorsLayer};

use crate::backend_repo::BackendRepo;
use crate::config::AppConfig;
use crate::panel::{Dashboard, DetailPanel};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) dashboard: Arc<RwLock<Dashboard>>,
    pub(crate) backend_repo: Arc<BackendRepo>,
    /// Last good detail table per channel; serves stale data when a fetch fails.
    pub(crate) item_details: Arc<Mutex<HashMap<String, DetailPanel>>>,
    pub(crate) fluid_details: Arc<Mutex<HashMap<String, DetailPanel>>>,
    pub(crate) config: AppConfig,
}

pub fn app(
    dashboard: Arc<RwLock<Dashboard>>,
    backend_repo: Arc<BackendRepo>,
    config: AppConfig,
) -> Router {
    let state = AppState {
        dashboard,
        backend_repo,
        item_details: Arc::new(Mutex::new(HashMap::new())),
        fluid_details: Arc::new(Mutex::new(HashMap::new())),
        config,
    };
    Router::new()
        .route("/", get(pages::index)) // GET /
        .route("/version", get(pages::version_handler)) // GET /version
        .route("/channels/items.html", get(pages::item_detail)) // GET /channels/items.html?freq=..
        .route("/channels/fluids.html", get(pages::fluid_detail)) // GET /channels/fluids.html?freq=..
        .route("/fragment/items", get(fragments::items))
        .route("/fragment/fluids", get(fragments::fluids))
        .route("/fragment/energy", get(fragments::energy))
        .route("/fragment/clients", get(fragments::clients))
        .layer(CorsLayer::new().allow_origin(Any))
        .with_state(state)
}
