use std::{collections::HashMap, ops::Index};

use crate::network::{Station, StationId};

/// Stations keyed by unique name, stored in an arena indexed by [`StationId`].
#[derive(Debug, Default)]
pub struct StationCollection {
    stations: Vec<Station>,
    by_name: HashMap<String, StationId>,
}

impl StationCollection {
    pub fn new() -> Self {
        Default::default()
    }

    /// Inserts a station, replacing any station of the same name in place.
    ///
    /// Returns the station's id and whether an existing station was replaced.
    /// A replaced station keeps its id.
    pub fn insert(&mut self, name: &str, line: &str, major: bool) -> (StationId, bool) {
        match self.by_name.get(name) {
            Some(&id) => {
                self.stations[id.index()] =
                    Station::new(id, name.to_owned(), line.to_owned(), major);
                (id, true)
            }
            None => {
                let id = StationId::new(self.stations.len());
                self.stations
                    .push(Station::new(id, name.to_owned(), line.to_owned(), major));
                self.by_name.insert(name.to_owned(), id);
                (id, false)
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&Station> {
        self.id_of(name).map(|id| &self[id])
    }

    pub fn id_of(&self, name: &str) -> Option<StationId> {
        self.by_name.get(name).copied()
    }

    /// Stations in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Station> {
        self.stations.iter()
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    #[allow(unused)]
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}

impl Index<StationId> for StationCollection {
    type Output = Station;

    fn index(&self, index: StationId) -> &Self::Output {
        &self.stations[index.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut stations = StationCollection::new();
        let (id, replaced) = stations.insert("Churchgate", "Western", true);

        assert!(!replaced);
        let station = stations.get("Churchgate").unwrap();
        assert_eq!(station.id, id);
        assert_eq!(station.line, "Western");
        assert!(station.major);
        assert!(stations.get("Marine lines").is_none());
    }

    #[test]
    fn test_insert_same_name_replaces_in_place() {
        let mut stations = StationCollection::new();
        let (first, _) = stations.insert("Dadar", "Western", true);
        stations.insert("Bandra", "Western", true);
        let (second, replaced) = stations.insert("Dadar", "Central", false);

        assert!(replaced);
        assert_eq!(first, second);
        assert_eq!(stations.len(), 2);
        assert_eq!(stations[first].line, "Central");
        assert!(!stations[first].major);
    }

    #[test]
    fn test_iter_keeps_insertion_order() {
        let mut stations = StationCollection::new();
        for name in ["CSMT", "Masjid", "Sandhurst Road"] {
            stations.insert(name, "Central", false);
        }

        let names: Vec<_> = stations.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["CSMT", "Masjid", "Sandhurst Road"]);
    }
}
