pub mod json;

use serde::{Deserialize, Serialize};

use crate::network::ConnectionKind;

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct StationRecord {
    pub name: String,
    pub line: String,
    pub major: bool,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ConnectionRecord {
    pub from: String,
    pub to: String,
    pub distance: u32,
    pub kind: ConnectionKind,
}

pub trait NetworkAdapter {
    type Error;

    /// Returns station records in the order they should be added.
    fn stations(&self) -> Result<Vec<StationRecord>, Self::Error>;

    /// Returns connection records in the order they should be added; records
    /// naming unknown stations are skipped by the builder.
    fn connections(&self) -> Result<Vec<ConnectionRecord>, Self::Error>;
}
