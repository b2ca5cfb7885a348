use std::{fs::File, io::BufReader, io::Read, path::Path, str::FromStr};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::adapters::{ConnectionRecord, NetworkAdapter, StationRecord};

const MUMBAI: &str = include_str!("../../data/mumbai.json");

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct NetworkDocument {
    pub stations: Vec<StationRecord>,
    #[serde(default)]
    pub connections: Vec<ConnectionRecord>,
}

/// Loads stations and connections from a JSON document of the form
/// `{ "stations": [...], "connections": [...] }`.
pub struct JsonAdapter {
    document: NetworkDocument,
}

impl JsonAdapter {
    /// The Mumbai suburban Western and Central lines.
    pub fn mumbai() -> Result<Self> {
        MUMBAI.parse().context("parsing built-in Mumbai network")
    }

    pub fn from_reader<R: Read>(r: R) -> Result<Self> {
        let document = serde_json::from_reader(BufReader::new(r))?;
        Ok(Self { document })
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(&path).with_context(|| format!("opening {:?}", path.as_ref()))?;
        Self::from_reader(file).with_context(|| format!("parsing {:?}", path.as_ref()))
    }
}

impl FromStr for JsonAdapter {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let document = serde_json::from_str(s)?;
        Ok(Self { document })
    }
}

impl NetworkAdapter for JsonAdapter {
    type Error = anyhow::Error;

    fn stations(&self) -> Result<Vec<StationRecord>> {
        Ok(self.document.stations.clone())
    }

    fn connections(&self) -> Result<Vec<ConnectionRecord>> {
        Ok(self.document.connections.clone())
    }
}
