// Item/fluid summary panels: channel cell + queue size with delta

use crate::diff::{Delta, format_delta, group_thousands};
use crate::locale::Locale;
use crate::models::FrequencySummary;
use crate::table::{Table, escape};

use super::channel_markup;

/// Which summary feed a panel renders; decides the detail page it links to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryKind {
    Items,
    Fluids,
}

impl SummaryKind {
    fn detail_page(self) -> &'static str {
        match self {
            SummaryKind::Items => "/channels/items.html",
            SummaryKind::Fluids => "/channels/fluids.html",
        }
    }
}

pub struct SummaryPanel {
    kind: SummaryKind,
    locale: Locale,
    previous: Vec<FrequencySummary>,
    table: Table,
}

impl SummaryPanel {
    pub fn new(kind: SummaryKind, locale: Locale) -> Self {
        SummaryPanel {
            kind,
            locale,
            previous: Vec::new(),
            table: Table::default(),
        }
    }

    /// Apply a freshly fetched snapshot: reconcile the row count, rewrite both
    /// cells of every row, diff the size against the previous snapshot's row
    /// at the same index, then keep the snapshot for the next tick.
    pub fn apply(&mut self, snapshot: Vec<FrequencySummary>) {
        self.table.reconcile_rows(snapshot.len());
        for (index, row) in snapshot.iter().enumerate() {
            let (swatches, label) = channel_markup(&row.id, self.locale);
            let link = format!(
                "{}?freq={}&lang={}",
                self.kind.detail_page(),
                escape(&row.id.to_uppercase()),
                self.locale.code()
            );
            let tr = self.table.row_mut(index);
            tr.cell_mut(0).html = format!(
                "<a href=\"{link}\">{swatches}</a> <span class=\"txt freq-guide\">{label}</span>"
            );

            let delta = Delta::between(row.size, self.previous.get(index).map(|p| p.size));
            let cell = tr.cell_mut(1);
            cell.html = format!(
                "{} <span class=\"diff-value {}\">{}</span>",
                group_thousands(row.size),
                delta.class.css_class(),
                format_delta(delta.amount)
            );
            cell.add_class("right-align");
        }
        self.previous = snapshot;
    }

    pub fn table(&self) -> &Table {
        &self.table
    }
}
