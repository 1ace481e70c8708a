// SPDX-License-Identifier: Apache-2.0

use paddock_model::{RankedEntry, RankingSequence};

const CHAMPION_NAME: &str = "Rubens Barrichello";
const CHAMPION_TEAM: &str = "Ferrari Legends";
const CHAMPION_POINTS: u32 = 999;

/// The synthetic rank-1 entry; never part of the base table.
#[must_use]
pub fn champion_entry() -> RankedEntry {
    RankedEntry::champion(1, CHAMPION_NAME, CHAMPION_TEAM, CHAMPION_POINTS)
        .expect("champion literal is valid")
}

/// Prepends the champion and shifts every input position down by one.
///
/// The shift is an offset, not a renumbering by index, so gaps in the input
/// survive. The input is only borrowed; each carried-over row is a new value.
/// Positions below `u32::MAX` move by exactly one; an entry at `u32::MAX`
/// stays at the ceiling.
#[must_use]
pub fn insert_champion(input: &RankingSequence) -> RankingSequence {
    std::iter::once(champion_entry())
        .chain(
            input
                .iter()
                .map(|entry| entry.with_position(entry.position.saturating_add(1))),
        )
        .collect()
}
