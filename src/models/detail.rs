// Channel detail rows

use serde::{Deserialize, Serialize};

/// One row of items.json / fluids.json for a single channel. `name` is
/// "modid:name"; `nbt` is an opaque hex hint for stacks with extra data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailRow {
    pub name: String,
    pub count: i64,
    #[serde(default)]
    pub nbt: Option<String>,
}
