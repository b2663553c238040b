// Connected game-server rows

use serde::{Deserialize, Serialize};

/// One row of clients.json: a connected game server and its last full sync
/// round-trip in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientStatus {
    pub name: String,
    pub sync: i64,
}
