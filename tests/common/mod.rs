// Shared test helpers: canned transport-server backend on an ephemeral port

#![allow(dead_code)]

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Json, Router, routing::get};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use freqdash::models::{ClientStatus, DetailRow, EnergySummary, FrequencySummary};

/// Feed payloads served by the fake backend. Tests mutate this between polls
/// to simulate the game state moving.
#[derive(Clone, Default)]
pub struct FeedData {
    pub item_frequencies: Vec<FrequencySummary>,
    pub fluid_frequencies: Vec<FrequencySummary>,
    pub energy_frequencies: Vec<EnergySummary>,
    pub clients: Vec<ClientStatus>,
    pub items: HashMap<String, Vec<DetailRow>>,
    pub fluids: HashMap<String, Vec<DetailRow>>,
    /// When set, every endpoint answers 500 (dead backend).
    pub fail: bool,
}

pub type SharedFeeds = Arc<Mutex<FeedData>>;

pub fn shared(data: FeedData) -> SharedFeeds {
    Arc::new(Mutex::new(data))
}

fn respond<T: serde::Serialize>(feeds: &SharedFeeds, pick: impl Fn(&FeedData) -> T) -> axum::response::Response {
    let data = feeds.lock().unwrap();
    if data.fail {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }
    Json(pick(&data)).into_response()
}

async fn item_frequency(State(feeds): State<SharedFeeds>) -> impl IntoResponse {
    respond(&feeds, |d| d.item_frequencies.clone())
}

async fn fluid_frequency(State(feeds): State<SharedFeeds>) -> impl IntoResponse {
    respond(&feeds, |d| d.fluid_frequencies.clone())
}

async fn energy_frequency(State(feeds): State<SharedFeeds>) -> impl IntoResponse {
    respond(&feeds, |d| d.energy_frequencies.clone())
}

async fn clients(State(feeds): State<SharedFeeds>) -> impl IntoResponse {
    respond(&feeds, |d| d.clients.clone())
}

async fn items(
    State(feeds): State<SharedFeeds>,
    Query(params): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    let frequency = params.get("frequency").cloned().unwrap_or_default();
    respond(&feeds, |d| {
        d.items.get(&frequency).cloned().unwrap_or_default()
    })
}

async fn fluids(
    State(feeds): State<SharedFeeds>,
    Query(params): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    let frequency = params.get("frequency").cloned().unwrap_or_default();
    respond(&feeds, |d| {
        d.fluids.get(&frequency).cloned().unwrap_or_default()
    })
}

/// Bind the fake backend on 127.0.0.1:0 and return its base URL.
pub async fn spawn_backend(feeds: SharedFeeds) -> String {
    let app = Router::new()
        .route("/api/list/item_frequency.json", get(item_frequency))
        .route("/api/list/fluid_frequency.json", get(fluid_frequency))
        .route("/api/list/energy_frequency.json", get(energy_frequency))
        .route("/api/list/clients.json", get(clients))
        .route("/api/list/items.json", get(items))
        .route("/api/list/fluids.json", get(fluids))
        .with_state(feeds);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

pub fn sample_feeds() -> FeedData {
    FeedData {
        item_frequencies: vec![
            FrequencySummary {
                id: "white".into(),
                size: 5,
            },
            FrequencySummary {
                id: "white,red".into(),
                size: 12,
            },
        ],
        fluid_frequencies: vec![FrequencySummary {
            id: "blue".into(),
            size: 3,
        }],
        energy_frequencies: vec![EnergySummary {
            id: "red".into(),
            value: 1_000_000,
        }],
        clients: vec![ClientStatus {
            name: "factory-1".into(),
            sync: 42,
        }],
        items: HashMap::from([(
            "WHITE".into(),
            vec![
                DetailRow {
                    name: "minecraft:cobblestone".into(),
                    count: 1280,
                    nbt: None,
                },
                DetailRow {
                    name: "thermal:ingot_tin".into(),
                    count: 64,
                    nbt: None,
                },
            ],
        )]),
        fluids: HashMap::from([(
            "BLUE".into(),
            vec![DetailRow {
                name: "minecraft:water".into(),
                count: 16_000,
                nbt: None,
            }],
        )]),
        fail: false,
    }
}
