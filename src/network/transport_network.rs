use tracing::{debug, warn};

use crate::{
    adapters::NetworkAdapter,
    network::{
        ConnectionKind, Edge, Station, StationId, connection_weight,
        station_collection::StationCollection,
    },
};

/// Undirected weighted rail network.
///
/// Every connection is stored on both endpoints with the same weight. Parallel
/// connections between the same pair are kept as separate edges.
#[derive(Debug, Default)]
pub struct TransportNetwork {
    stations: StationCollection,
    adjacency: Vec<Vec<Edge>>,
}

impl TransportNetwork {
    pub fn new() -> Self {
        Default::default()
    }

    /// Builds a network by applying the adapter's stations, then its
    /// connections, in the order the adapter yields them.
    pub fn from_adapter<A: NetworkAdapter>(adapter: &A) -> Result<Self, A::Error> {
        let mut network = Self::new();

        for s in adapter.stations()? {
            network.add_station(&s.name, &s.line, s.major);
        }

        let mut skipped = 0;
        for c in adapter.connections()? {
            let added = match c.kind {
                ConnectionKind::Slow => network.add_slow_connection(&c.from, &c.to, c.distance),
                ConnectionKind::Fast => network.add_fast_connection(&c.from, &c.to, c.distance),
            };
            if !added {
                warn!(from = %c.from, to = %c.to, "Skipping connection with unknown station");
                skipped += 1;
            }
        }

        debug!(
            stations = network.stations.len(),
            edges = network.edge_count(),
            skipped,
            "Built transport network"
        );

        Ok(network)
    }

    /// Adds a station with no connections.
    ///
    /// Re-adding a name replaces the station's line and hub flag and drops
    /// every connection it had.
    pub fn add_station(&mut self, name: &str, line: &str, major: bool) -> StationId {
        let (id, replaced) = self.stations.insert(name, line, major);

        if replaced {
            debug!(%name, "Replacing station and dropping its connections");
            for neighbour in std::mem::take(&mut self.adjacency[id.index()]) {
                self.adjacency[neighbour.to.index()].retain(|e| e.to != id);
            }
        } else {
            self.adjacency.push(Vec::new());
        }

        id
    }

    pub fn add_slow_connection(&mut self, a: &str, b: &str, distance: u32) -> bool {
        self.add_connection(a, b, distance, ConnectionKind::Slow)
    }

    pub fn add_fast_connection(&mut self, a: &str, b: &str, distance: u32) -> bool {
        self.add_connection(a, b, distance, ConnectionKind::Fast)
    }

    /// Connects two stations in both directions, weighting the raw distance
    /// with [`connection_weight`].
    ///
    /// Returns `false` and leaves the network untouched if either name is
    /// unknown.
    fn add_connection(
        &mut self,
        a: &str,
        b: &str,
        distance: u32,
        kind: ConnectionKind,
    ) -> bool {
        let (Some(a), Some(b)) = (self.stations.id_of(a), self.stations.id_of(b)) else {
            return false;
        };

        let both_major = self.stations[a].major && self.stations[b].major;
        let weight = connection_weight(kind, both_major, distance);

        self.adjacency[a.index()].push(Edge { to: b, weight, kind });
        if a != b {
            self.adjacency[b.index()].push(Edge { to: a, weight, kind });
        }

        true
    }

    pub fn station(&self, name: &str) -> Option<&Station> {
        self.stations.get(name)
    }

    pub fn station_by_id(&self, id: StationId) -> &Station {
        &self.stations[id]
    }

    pub fn stations(&self) -> impl Iterator<Item = &Station> {
        self.stations.iter()
    }

    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    pub fn edges(&self, id: StationId) -> impl Iterator<Item = &Edge> {
        match self.adjacency.get(id.index()) {
            Some(edges) => edges.iter(),
            None => [].iter(),
        }
    }

    /// Number of undirected connections.
    pub fn edge_count(&self) -> usize {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(i, edges)| edges.iter().filter(move |e| e.to.index() >= i))
            .count()
    }
}
