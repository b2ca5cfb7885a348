use itertools::Itertools;
use serde::Serialize;

use crate::network::Station;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineChange<'a> {
    pub from_line: &'a str,
    pub to_line: &'a str,
    /// Last station on the departing line.
    pub at: &'a str,
}

/// Yields a [`LineChange`] for every consecutive pair of stations whose lines
/// differ.
pub fn line_changes<'a>(path: &[&'a Station]) -> impl Iterator<Item = LineChange<'a>> {
    path.iter()
        .copied()
        .tuple_windows()
        .filter(|(current, next)| current.line != next.line)
        .map(|(current, next)| LineChange {
            from_line: &current.line,
            to_line: &next.line,
            at: &current.name,
        })
}
