use std::{cmp::Ordering, collections::BinaryHeap};

use crate::network::{Edge, StationId};

#[derive(Copy, Clone, Eq, PartialEq)]
pub(super) struct State {
    pub(super) cost: u64,
    pub(super) station: StationId,
}

// Min-heap by cost, then by station id so equal costs pop in a fixed order
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.station.cmp(&self.station))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Working state for a single query. Never shared between queries.
pub(super) struct DijkstraState {
    distances: Vec<Option<u64>>,
    predecessors: Vec<Option<(StationId, Edge)>>,
    heap: BinaryHeap<State>,
}

impl DijkstraState {
    pub(super) fn new(station_count: usize, source: StationId) -> Self {
        let mut state = Self {
            distances: vec![None; station_count],
            predecessors: vec![None; station_count],
            heap: BinaryHeap::new(),
        };
        state.distances[source.index()] = Some(0);
        state.heap.push(State {
            cost: 0,
            station: source,
        });
        state
    }

    /// Pops the cheapest entry, skipping entries made stale by a later
    /// improvement.
    pub(super) fn pop(&mut self) -> Option<State> {
        while let Some(state) = self.heap.pop() {
            if self.distance(state.station).is_some_and(|best| state.cost > best) {
                continue;
            }
            return Some(state);
        }
        None
    }

    /// Relaxes `edge` out of `from`, which was reached at `cost`.
    pub(super) fn relax(&mut self, from: StationId, cost: u64, edge: &Edge) {
        let next_cost = cost + edge.weight;
        let improves = self
            .distance(edge.to)
            .map(|best| next_cost < best)
            .unwrap_or(true);

        if improves {
            self.distances[edge.to.index()] = Some(next_cost);
            self.predecessors[edge.to.index()] = Some((from, *edge));
            self.heap.push(State {
                cost: next_cost,
                station: edge.to,
            });
        }
    }

    pub(super) fn distance(&self, station: StationId) -> Option<u64> {
        self.distances[station.index()]
    }

    pub(super) fn predecessor(&self, station: StationId) -> Option<(StationId, Edge)> {
        self.predecessors[station.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::ConnectionKind;

    fn edge(to: usize, weight: u64) -> Edge {
        Edge {
            to: StationId::new(to),
            weight,
            kind: ConnectionKind::Slow,
        }
    }

    #[test]
    fn test_pops_cheapest_first() {
        let mut state = DijkstraState::new(3, StationId::new(0));
        let source = state.pop().unwrap();
        assert_eq!(source.cost, 0);

        state.relax(StationId::new(0), 0, &edge(1, 7));
        state.relax(StationId::new(0), 0, &edge(2, 3));

        assert_eq!(state.pop().unwrap().station, StationId::new(2));
        assert_eq!(state.pop().unwrap().station, StationId::new(1));
        assert!(state.pop().is_none());
    }

    #[test]
    fn test_stale_entries_are_skipped() {
        let mut state = DijkstraState::new(3, StationId::new(0));
        state.pop();

        state.relax(StationId::new(0), 0, &edge(1, 10));
        state.relax(StationId::new(2), 1, &edge(1, 2));

        let popped = state.pop().unwrap();
        assert_eq!(popped.station, StationId::new(1));
        assert_eq!(popped.cost, 3);
        assert!(state.pop().is_none());
        assert_eq!(state.predecessor(StationId::new(1)).unwrap().0, StationId::new(2));
    }

    #[test]
    fn test_equal_cost_does_not_replace_predecessor() {
        let mut state = DijkstraState::new(3, StationId::new(0));
        state.relax(StationId::new(0), 0, &edge(2, 4));
        state.relax(StationId::new(1), 2, &edge(2, 2));

        assert_eq!(state.distance(StationId::new(2)), Some(4));
        assert_eq!(state.predecessor(StationId::new(2)).unwrap().0, StationId::new(0));
    }
}
