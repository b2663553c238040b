// Energy panel: buffered amount plus an approximate per-tick rate.
// The rate normalizes the raw delta by the wall-clock gap between the two
// applied snapshots, so polling jitter shows up in the number.

use std::time::{Duration, Instant};

use crate::diff::{DeltaClass, energy_rate, format_delta, group_thousands};
use crate::locale::Locale;
use crate::models::EnergySummary;
use crate::table::Table;

use super::channel_markup;

pub struct EnergyPanel {
    locale: Locale,
    rate_suffix: String,
    previous: Vec<EnergySummary>,
    /// When the previous snapshot was applied; None before the first apply,
    /// which renders a zero rate.
    previous_at: Option<Instant>,
    table: Table,
}

impl EnergyPanel {
    pub fn new(locale: Locale, rate_suffix: &str) -> Self {
        EnergyPanel {
            locale,
            rate_suffix: rate_suffix.to_string(),
            previous: Vec::new(),
            previous_at: None,
            table: Table::default(),
        }
    }

    pub fn apply(&mut self, snapshot: Vec<EnergySummary>) {
        let elapsed = self
            .previous_at
            .map(|t| t.elapsed())
            .unwrap_or(Duration::ZERO);
        self.table.reconcile_rows(snapshot.len());
        for (index, row) in snapshot.iter().enumerate() {
            let (swatches, label) = channel_markup(&row.id, self.locale);
            let tr = self.table.row_mut(index);
            tr.cell_mut(0).html =
                format!("<span>{swatches}</span> <span class=\"txt freq-guide\">{label}</span>");

            let delta = row.value - self.previous.get(index).map(|p| p.value).unwrap_or(0);
            let rate = energy_rate(delta, elapsed);
            let cell = tr.cell_mut(1);
            cell.html = format!(
                "{} <span style=\"width:100px\" class=\"diff-value {}\">{}{}</span>",
                group_thousands(row.value),
                DeltaClass::of(rate).css_class(),
                format_delta(rate),
                self.rate_suffix
            );
            cell.add_class("right-align");
        }
        self.previous_at = Some(Instant::now());
        self.previous = snapshot;
    }

    pub fn table(&self) -> &Table {
        &self.table
    }
}
