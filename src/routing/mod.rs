use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::{
    network::{ConnectionKind, Station, TransportNetwork},
    routing::dijkstra_state::{DijkstraState, State},
};

mod dijkstra_state;
pub mod line_changes;

pub use line_changes::{LineChange, line_changes};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RouteError {
    #[error("Unknown station: {0}")]
    UnknownStation(String),
    #[error("No path exists from {from} to {to}")]
    NoPathExists { from: String, to: String },
}

/// The connection taken between two consecutive stations of a route.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Leg<'a> {
    pub from: &'a str,
    pub to: &'a str,
    pub kind: ConnectionKind,
    pub cost: u64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Route<'a> {
    pub stations: Vec<&'a Station>,
    pub legs: Vec<Leg<'a>>,
    pub total_cost: u64,
}

impl<'a> Route<'a> {
    pub fn line_changes(&self) -> impl Iterator<Item = LineChange<'a>> {
        line_changes(&self.stations)
    }
}

/// A route together with its line changes, as rendered to JSON.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteReport<'a> {
    #[serde(flatten)]
    pub route: Route<'a>,
    pub line_changes: Vec<LineChange<'a>>,
}

impl<'a> From<Route<'a>> for RouteReport<'a> {
    fn from(route: Route<'a>) -> Self {
        let line_changes = route.line_changes().collect();
        Self {
            route,
            line_changes,
        }
    }
}

/// Finds the least-cost route between two named stations.
///
/// Runs Dijkstra over the network's edge weights, stopping as soon as the
/// destination is settled. The network is only read.
pub fn route<'a>(
    network: &'a TransportNetwork,
    source: &str,
    destination: &str,
) -> Result<Route<'a>, RouteError> {
    let from = network
        .station(source)
        .ok_or_else(|| RouteError::UnknownStation(source.to_owned()))?;
    let to = network
        .station(destination)
        .ok_or_else(|| RouteError::UnknownStation(destination.to_owned()))?;

    let mut state = DijkstraState::new(network.station_count(), from.id);

    while let Some(State { cost, station }) = state.pop() {
        if station == to.id {
            break;
        }

        for edge in network.edges(station) {
            state.relax(station, cost, edge);
        }
    }

    let total_cost = state
        .distance(to.id)
        .ok_or_else(|| RouteError::NoPathExists {
            from: source.to_owned(),
            to: destination.to_owned(),
        })?;

    let mut stations = vec![to];
    let mut legs = vec![];
    let mut current = to.id;
    while current != from.id {
        let Some((previous, edge)) = state.predecessor(current) else {
            break;
        };
        let previous_station = network.station_by_id(previous);

        legs.push(Leg {
            from: &previous_station.name,
            to: &network.station_by_id(current).name,
            kind: edge.kind,
            cost: edge.weight,
        });
        stations.push(previous_station);
        current = previous;
    }

    if current != from.id {
        return Err(RouteError::NoPathExists {
            from: source.to_owned(),
            to: destination.to_owned(),
        });
    }

    stations.reverse();
    legs.reverse();

    debug!(%source, %destination, total_cost, stops = stations.len(), "Found route");

    Ok(Route {
        stations,
        legs,
        total_cost,
    })
}
