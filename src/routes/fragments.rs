// Table fragment handlers: the current panel markup, nothing else.
// Meant for embedding or scraping; same HTML the dashboard page wraps.

use axum::{extract::State, response::Html};

use super::AppState;
use super::pages::table_markup;

pub(super) async fn items(State(state): State<AppState>) -> Html<String> {
    let headers = state.config.locale().headers();
    let dashboard = state.dashboard.read().await;
    Html(table_markup(
        "item-list",
        &[headers.channel, headers.queue_size],
        &dashboard.items.table().to_tbody_html(),
    ))
}

pub(super) async fn fluids(State(state): State<AppState>) -> Html<String> {
    let headers = state.config.locale().headers();
    let dashboard = state.dashboard.read().await;
    Html(table_markup(
        "fluid-list",
        &[headers.channel, headers.fluid_type],
        &dashboard.fluids.table().to_tbody_html(),
    ))
}

pub(super) async fn energy(State(state): State<AppState>) -> Html<String> {
    let headers = state.config.locale().headers();
    let dashboard = state.dashboard.read().await;
    Html(table_markup(
        "energy-list",
        &[headers.channel, headers.energy_amount],
        &dashboard.energy.table().to_tbody_html(),
    ))
}

pub(super) async fn clients(State(state): State<AppState>) -> Html<String> {
    let dashboard = state.dashboard.read().await;
    Html(format!(
        "<ul id=\"host-list\">{}</ul>",
        dashboard.clients.to_list_html()
    ))
}
