// SPDX-License-Identifier: Apache-2.0

use paddock_model::{RankedEntry, RankingSequence};

pub const BASE_TABLE_LEN: usize = 10;

const BASE_ROWS: [(u32, &str, &str, u32); BASE_TABLE_LEN] = [
    (1, "Max Verstappen", "Red Bull Racing", 575),
    (2, "Lewis Hamilton", "Mercedes", 512),
    (3, "Charles Leclerc", "Ferrari", 485),
    (4, "Lando Norris", "McLaren", 452),
    (5, "Carlos Sainz", "Ferrari", 398),
    (6, "George Russell", "Mercedes", 376),
    (7, "Oscar Piastri", "McLaren", 334),
    (8, "Fernando Alonso", "Aston Martin", 298),
    (9, "Sergio Perez", "Red Bull Racing", 267),
    (10, "Pierre Gasly", "Alpine", 189),
];

/// Unmodified 2025 standings.
///
/// Every call builds a fresh, owned sequence; nothing is shared between callers.
#[must_use]
pub fn base_table() -> RankingSequence {
    BASE_ROWS
        .iter()
        .map(|&(position, name, team, points)| {
            RankedEntry::new(position, name, team, points).expect("base table literal is valid")
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_table_is_canonical_and_sorted_by_points() {
        let table = base_table();
        assert_eq!(table.len(), BASE_TABLE_LEN);
        assert!(table.is_canonical());
        assert!(table.points_non_increasing());
        assert!(table.iter().all(|e| !e.is_champion));
    }

    #[test]
    fn verstappen_leads_base_table() {
        let table = base_table();
        let leader = table.first().expect("leader");
        assert_eq!(
            leader,
            &RankedEntry::new(1, "Max Verstappen", "Red Bull Racing", 575).expect("entry")
        );
    }

    #[test]
    fn callers_get_independent_copies() {
        let mut first = base_table().into_entries();
        first[0].position = 42;
        first.clear();
        assert_eq!(base_table().positions(), (1..=10).collect::<Vec<u32>>());
    }
}
