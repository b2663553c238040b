// Channel detail panel: mod id / name / amount rows, optional sort

use crate::diff::group_thousands;
use crate::models::DetailRow;
use crate::table::{Table, escape};

/// Sort selected via the page's sort_by query value; anything unrecognized
/// leaves the backend order untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    #[default]
    Unsorted,
    Count,
    Name,
}

impl SortMode {
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("count") => SortMode::Count,
            Some("name") => SortMode::Name,
            _ => SortMode::Unsorted,
        }
    }

    /// Unstable on purpose: ties may swap between polls, like the page's
    /// Array.prototype.sort.
    pub fn apply(self, rows: &mut [DetailRow]) {
        match self {
            SortMode::Unsorted => {}
            SortMode::Count => rows.sort_unstable_by(|a, b| b.count.cmp(&a.count)),
            SortMode::Name => {
                rows.sort_unstable_by(|a, b| name_sort_key(&a.name).cmp(&name_sort_key(&b.name)))
            }
        }
    }
}

/// Split "modid:name" on the first ':'; a name without one has an empty mod id.
pub fn split_name(name: &str) -> (&str, &str) {
    match name.split_once(':') {
        Some((modid, rest)) => (modid, rest),
        None => ("", name),
    }
}

/// Name sort compares the concatenation name + modid, ascending.
fn name_sort_key(name: &str) -> String {
    let (modid, rest) = split_name(name);
    format!("{rest}{modid}")
}

#[derive(Default)]
pub struct DetailPanel {
    previous: Vec<DetailRow>,
    table: Table,
}

impl DetailPanel {
    /// Sort, reconcile, and rewrite the three cells of every row. The applied
    /// snapshot is retained like the page retained it, even though nothing
    /// diffs detail rows yet.
    pub fn apply(&mut self, mut snapshot: Vec<DetailRow>, sort: SortMode) {
        sort.apply(&mut snapshot);
        self.table.reconcile_rows(snapshot.len());
        for (index, row) in snapshot.iter().enumerate() {
            let (modid, name) = split_name(&row.name);
            let tr = self.table.row_mut(index);
            let cell = tr.cell_mut(0);
            cell.html = escape(modid);
            cell.add_class("right-align");
            tr.cell_mut(1).html = escape(name);
            let cell = tr.cell_mut(2);
            cell.html = group_thousands(row.count);
            cell.add_class("right-align");
        }
        self.previous = snapshot;
    }

    pub fn previous(&self) -> &[DetailRow] {
        &self.previous
    }

    pub fn table(&self) -> &Table {
        &self.table
    }
}
