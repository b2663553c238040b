// Feed row models (shapes of the transport server's list endpoints)

mod client;
mod detail;
mod frequency;

pub use client::ClientStatus;
pub use detail::DetailRow;
pub use frequency::{EnergySummary, FrequencySummary};
