// GET handlers: version, dashboard page, channel detail pages

use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse},
};
use serde::Deserialize;

use super::AppState;
use crate::locale::{Headers, Locale};
use crate::panel::{SortMode, channel_markup};
use crate::table::{Table, escape};
use crate::version::{NAME, VERSION};

/// GET /version — returns service name and version (from Cargo.toml at build time).
pub(super) async fn version_handler() -> impl IntoResponse {
    axum::Json(serde_json::json!({
        "name": NAME,
        "version": VERSION,
    }))
}

const PAGE_STYLE: &str = "table{border-collapse:collapse}td,th{padding:2px 8px}\
.right-align{text-align:right}.diff-value.add{color:#0a0}.diff-value.sub{color:#c00}\
.diff-value.zero{color:#888}.freq{display:inline-block;width:12px;height:12px}";

pub(super) fn table_markup(id: &str, headers: &[&str], tbody: &str) -> String {
    let mut out = format!("<table id=\"{id}\"><thead><tr>");
    for header in headers {
        out.push_str(&format!("<th>{}</th>", escape(header)));
    }
    out.push_str("</tr></thead><tbody>");
    out.push_str(tbody);
    out.push_str("</tbody></table>");
    out
}

fn page(title: &str, refresh_secs: u64, body: &str) -> String {
    format!(
        "<!DOCTYPE html><html><head><meta charset=\"utf-8\">\
<meta http-equiv=\"refresh\" content=\"{refresh_secs}\">\
<title>{}</title><style>{PAGE_STYLE}</style></head><body>{body}</body></html>",
        escape(title)
    )
}

/// GET / — the four panels, rendered from the worker's current tables.
pub(super) async fn index(State(state): State<AppState>) -> Html<String> {
    let headers = state.config.locale().headers();
    let refresh_secs = (state.config.polling.poll_interval_ms / 1000).max(1);
    let dashboard = state.dashboard.read().await;
    let body = format!(
        "<h2>{}</h2>{}<h2>{}</h2>{}<h2>{}</h2>{}<h2>{}</h2><ul id=\"host-list\">{}</ul>",
        escape(headers.item_info_title),
        table_markup(
            "item-list",
            &[headers.channel, headers.queue_size],
            &dashboard.items.table().to_tbody_html()
        ),
        escape(headers.fluid_info_title),
        table_markup(
            "fluid-list",
            &[headers.channel, headers.fluid_type],
            &dashboard.fluids.table().to_tbody_html()
        ),
        escape(headers.energy_info_title),
        table_markup(
            "energy-list",
            &[headers.channel, headers.energy_amount],
            &dashboard.energy.table().to_tbody_html()
        ),
        escape(headers.client_host_name),
        dashboard.clients.to_list_html(),
    );
    Html(page(headers.item_info_title, refresh_secs, &body))
}

#[derive(Debug, Deserialize)]
pub(super) struct DetailParams {
    /// Channel filter, as linked from the summary panels (uppercase colour csv).
    freq: String,
    sort_by: Option<String>,
    lang: Option<String>,
}

impl DetailParams {
    fn locale(&self, state: &AppState) -> Locale {
        self.lang
            .as_deref()
            .and_then(Locale::parse)
            .unwrap_or_else(|| state.config.locale())
    }
}

fn detail_page(
    state: &AppState,
    locale: Locale,
    title: &str,
    name_header: &str,
    freq: &str,
    table: &Table,
) -> Html<String> {
    let headers: &Headers = locale.headers();
    let (swatches, label) = channel_markup(&freq.to_lowercase(), locale);
    let refresh_secs = (state.config.polling.poll_interval_ms / 1000).max(1);
    let body = format!(
        "<h2>{}</h2><div id=\"channel-title\">{swatches}<p class=\"txt freq-guide\">{label}</p></div>{}",
        escape(title),
        table_markup(
            "item-list",
            &[headers.mod_id, name_header, headers.amount],
            &table.to_tbody_html()
        ),
    );
    Html(page(title, refresh_secs, &body))
}

/// GET /channels/items.html — per-channel item rows, fetched on demand.
/// A failed fetch serves the channel's cached table (stale data, no error UI).
pub(super) async fn item_detail(
    State(state): State<AppState>,
    Query(params): Query<DetailParams>,
) -> Html<String> {
    let locale = params.locale(&state);
    let sort = SortMode::parse(params.sort_by.as_deref());
    let fetched = state.backend_repo.get_items(&params.freq).await;
    let mut panels = state.item_details.lock().await;
    let panel = panels.entry(params.freq.clone()).or_default();
    match fetched {
        Ok(rows) => panel.apply(rows, sort),
        Err(e) => {
            tracing::warn!(error = %e, frequency = %params.freq, "item detail fetch failed; serving stale table");
        }
    }
    let headers = locale.headers();
    detail_page(
        &state,
        locale,
        headers.item_detail_info_title,
        headers.item_name,
        &params.freq,
        panel.table(),
    )
}

/// GET /channels/fluids.html — per-channel fluid rows, fetched on demand.
pub(super) async fn fluid_detail(
    State(state): State<AppState>,
    Query(params): Query<DetailParams>,
) -> Html<String> {
    let locale = params.locale(&state);
    let sort = SortMode::parse(params.sort_by.as_deref());
    let fetched = state.backend_repo.get_fluids(&params.freq).await;
    let mut panels = state.fluid_details.lock().await;
    let panel = panels.entry(params.freq.clone()).or_default();
    match fetched {
        Ok(rows) => panel.apply(rows, sort),
        Err(e) => {
            tracing::warn!(error = %e, frequency = %params.freq, "fluid detail fetch failed; serving stale table");
        }
    }
    let headers = locale.headers();
    detail_page(
        &state,
        locale,
        headers.fluid_detail_info_title,
        headers.fluid_name,
        &params.freq,
        panel.table(),
    )
}
