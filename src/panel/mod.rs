// Panel renderers. Each panel owns its table and the previous snapshot it
// diffs against, so there is no shared mutable render state outside the
// instance.

mod clients;
mod detail;
mod energy;
mod summary;

pub use clients::ClientsPanel;
pub use detail::{DetailPanel, SortMode, split_name};
pub use energy::EnergyPanel;
pub use summary::{SummaryKind, SummaryPanel};

use crate::locale::Locale;
use crate::table::escape;

/// Swatch markup and guide label for a channel id ("white,red" renders one
/// swatch div per colour plus the locale colour names).
pub(crate) fn channel_markup(id: &str, locale: Locale) -> (String, String) {
    let swatches = id
        .split(',')
        .map(|c| format!("<div class=\"freq {}\"></div>", escape(c)))
        .collect::<String>();
    let label = id
        .split(',')
        .map(|c| locale.colour_label(c))
        .collect::<Vec<_>>()
        .join(", ");
    (swatches, escape(&label))
}

/// The four panels the poll worker updates together.
pub struct Dashboard {
    pub items: SummaryPanel,
    pub fluids: SummaryPanel,
    pub energy: EnergyPanel,
    pub clients: ClientsPanel,
}

impl Dashboard {
    pub fn new(locale: Locale, rate_suffix: &str) -> Self {
        Dashboard {
            items: SummaryPanel::new(SummaryKind::Items, locale),
            fluids: SummaryPanel::new(SummaryKind::Fluids, locale),
            energy: EnergyPanel::new(locale, rate_suffix),
            clients: ClientsPanel::default(),
        }
    }
}
