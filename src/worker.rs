// Background poll worker (same cadence the browser page ran on a timer).
// The fetch is awaited inside the tick arm, so ticks never overlap; if a
// fetch outlasts the interval, the missed ticks are skipped, not queued.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;
use tokio::time::{Duration, interval};

use crate::backend_repo::BackendRepo;
use crate::panel::Dashboard;

/// Repos, shared state, counters, and shutdown for the worker.
pub struct WorkerDeps {
    pub backend_repo: Arc<BackendRepo>,
    pub dashboard: Arc<RwLock<Dashboard>>,
    pub ticks_total: Arc<AtomicU64>,
    pub feed_failures_total: Arc<AtomicU64>,
    pub shutdown_rx: tokio::sync::oneshot::Receiver<()>,
}

/// Worker timing and logging config.
pub struct WorkerConfig {
    pub poll_interval_ms: u64,
    /// How often to log app stats (real seconds).
    pub stats_log_interval_secs: u64,
}

pub fn spawn(deps: WorkerDeps, config: WorkerConfig) -> tokio::task::JoinHandle<()> {
    let WorkerDeps {
        backend_repo,
        dashboard,
        ticks_total,
        feed_failures_total,
        mut shutdown_rx,
    } = deps;
    let WorkerConfig {
        poll_interval_ms,
        stats_log_interval_secs,
    } = config;

    let stats_log_interval = Duration::from_secs(stats_log_interval_secs);

    tokio::spawn(async move {
        let mut tick = interval(Duration::from_millis(poll_interval_ms));
        tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        let mut stats_log_tick = interval(stats_log_interval);
        stats_log_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

        let worker_span = tracing::span!(tracing::Level::DEBUG, "worker", poll_interval_ms);
        let _guard = worker_span.enter();

        loop {
            tokio::select! {
                _ = tick.tick() => {
                    poll_once(&backend_repo, &dashboard, &feed_failures_total).await;
                    ticks_total.fetch_add(1, Ordering::Relaxed);
                }
                _ = &mut shutdown_rx => {
                    tracing::debug!("Worker shutting down");
                    break;
                }
                _ = stats_log_tick.tick() => {
                    tracing::info!(
                        ticks_total = ticks_total.load(Ordering::Relaxed),
                        feed_failures_total = feed_failures_total.load(Ordering::Relaxed),
                        "app stats"
                    );
                }
            }
        }
    })
}

/// One poll pass: fetch the four summary feeds concurrently, then apply each
/// result to its panel under a single write lock. A failed feed leaves its
/// panel's table stale; the page never shows an error state.
pub async fn poll_once(
    backend_repo: &BackendRepo,
    dashboard: &RwLock<Dashboard>,
    feed_failures_total: &AtomicU64,
) {
    let (items, fluids, energy, clients) = tokio::join!(
        backend_repo.get_item_frequencies(),
        backend_repo.get_fluid_frequencies(),
        backend_repo.get_energy_frequencies(),
        backend_repo.get_clients(),
    );

    let mut dashboard = dashboard.write().await;
    match items {
        Ok(rows) => dashboard.items.apply(rows),
        Err(e) => {
            feed_failures_total.fetch_add(1, Ordering::Relaxed);
            tracing::warn!(error = %e, feed = "item_frequency", "feed fetch failed; table left stale");
        }
    }
    match fluids {
        Ok(rows) => dashboard.fluids.apply(rows),
        Err(e) => {
            feed_failures_total.fetch_add(1, Ordering::Relaxed);
            tracing::warn!(error = %e, feed = "fluid_frequency", "feed fetch failed; table left stale");
        }
    }
    match energy {
        Ok(rows) => dashboard.energy.apply(rows),
        Err(e) => {
            feed_failures_total.fetch_add(1, Ordering::Relaxed);
            tracing::warn!(error = %e, feed = "energy_frequency", "feed fetch failed; table left stale");
        }
    }
    match clients {
        Ok(rows) => dashboard.clients.apply(rows),
        Err(e) => {
            feed_failures_total.fetch_add(1, Ordering::Relaxed);
            tracing::warn!(error = %e, feed = "clients", "feed fetch failed; list left stale");
        }
    }
}
