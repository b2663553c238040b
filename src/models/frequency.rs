// Per-channel summary rows

use serde::{Deserialize, Serialize};

/// One row of item_frequency.json / fluid_frequency.json: queued stack count
/// per channel. `id` is a comma-separated list of colour ids ("white,red").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencySummary {
    pub id: String,
    pub size: i64,
}

/// One row of energy_frequency.json: buffered energy per channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnergySummary {
    pub id: String,
    pub value: i64,
}
