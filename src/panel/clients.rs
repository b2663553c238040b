// Connected-clients panel: rebuilt wholesale every tick, no diffing

use crate::models::ClientStatus;
use crate::table::escape;

#[derive(Default)]
pub struct ClientsPanel {
    rows: Vec<ClientStatus>,
}

impl ClientsPanel {
    pub fn apply(&mut self, snapshot: Vec<ClientStatus>) {
        self.rows = snapshot;
    }

    pub fn rows(&self) -> &[ClientStatus] {
        &self.rows
    }

    /// List-item markup: host name plus last sync round-trip.
    pub fn to_list_html(&self) -> String {
        let mut out = String::new();
        for row in &self.rows {
            out.push_str(&format!(
                "<li><span>{}</span><span> {}ms</span></li>",
                escape(&row.name),
                row.sync
            ));
        }
        out
    }
}
