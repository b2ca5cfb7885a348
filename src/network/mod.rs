use std::fmt;

use serde::{Deserialize, Serialize};

pub mod station_collection;
pub mod transport_network;

pub use transport_network::TransportNetwork;

/// Surcharge applied by the cost policy, see [`connection_weight`].
pub const HUB_PENALTY: u64 = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct StationId(usize);

impl StationId {
    pub fn new(idx: usize) -> Self {
        Self(idx)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct Station {
    #[serde(skip)]
    pub id: StationId,
    pub name: String,
    pub line: String,
    pub major: bool,
}

impl Station {
    pub fn new(id: StationId, name: String, line: String, major: bool) -> Self {
        Self {
            id,
            name,
            line,
            major,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionKind {
    Slow,
    Fast,
}

impl fmt::Display for ConnectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectionKind::Slow => write!(f, "slow"),
            ConnectionKind::Fast => write!(f, "fast"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge {
    pub to: StationId,
    pub weight: u64,
    pub kind: ConnectionKind,
}

/// Effective edge weight for a raw distance.
///
/// Slow service between two hubs and fast service that does not join two
/// hubs both pay [`HUB_PENALTY`]; everything else costs the raw distance.
/// The result is a `u64`, so any `u32` distance plus the penalty fits.
pub fn connection_weight(kind: ConnectionKind, both_major: bool, distance: u32) -> u64 {
    let distance = u64::from(distance);
    match (kind, both_major) {
        (ConnectionKind::Slow, true) | (ConnectionKind::Fast, false) => distance + HUB_PENALTY,
        (ConnectionKind::Slow, false) | (ConnectionKind::Fast, true) => distance,
    }
}
