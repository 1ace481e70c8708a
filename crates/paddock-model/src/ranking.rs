// SPDX-License-Identifier: Apache-2.0

use crate::RankedEntry;
use serde::{Deserialize, Serialize};

/// Ordered standings, serialized as a bare JSON array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RankingSequence(Vec<RankedEntry>);

impl RankingSequence {
    #[must_use]
    pub fn new(entries: Vec<RankedEntry>) -> Self {
        Self(entries)
    }

    #[must_use]
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn entries(&self) -> &[RankedEntry] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RankedEntry> {
        self.0.iter()
    }

    #[must_use]
    pub fn first(&self) -> Option<&RankedEntry> {
        self.0.first()
    }

    #[must_use]
    pub fn positions(&self) -> Vec<u32> {
        self.0.iter().map(|e| e.position).collect()
    }

    #[must_use]
    pub fn into_entries(self) -> Vec<RankedEntry> {
        self.0
    }

    /// True when positions run exactly `1..=len` in order.
    #[must_use]
    pub fn is_canonical(&self) -> bool {
        self.0
            .iter()
            .zip(1_u32..)
            .all(|(entry, expected)| entry.position == expected)
    }

    #[must_use]
    pub fn points_non_increasing(&self) -> bool {
        self.0.windows(2).all(|w| w[0].points >= w[1].points)
    }
}

impl From<Vec<RankedEntry>> for RankingSequence {
    fn from(entries: Vec<RankedEntry>) -> Self {
        Self(entries)
    }
}

impl FromIterator<RankedEntry> for RankingSequence {
    fn from_iter<I: IntoIterator<Item = RankedEntry>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a RankingSequence {
    type Item = &'a RankedEntry;
    type IntoIter = std::slice::Iter<'a, RankedEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for RankingSequence {
    type Item = RankedEntry;
    type IntoIter = std::vec::IntoIter<RankedEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(position: u32, points: u32) -> RankedEntry {
        RankedEntry::new(position, "Driver", "Team", points).expect("entry")
    }

    #[test]
    fn canonical_requires_contiguous_positions_from_one() {
        assert!(RankingSequence::empty().is_canonical());
        assert!(RankingSequence::new(vec![entry(1, 10), entry(2, 5)]).is_canonical());
        assert!(!RankingSequence::new(vec![entry(2, 10), entry(3, 5)]).is_canonical());
        assert!(!RankingSequence::new(vec![entry(1, 10), entry(3, 5)]).is_canonical());
    }

    #[test]
    fn points_order_check() {
        assert!(RankingSequence::new(vec![entry(1, 10), entry(2, 10), entry(3, 1)])
            .points_non_increasing());
        assert!(!RankingSequence::new(vec![entry(1, 1), entry(2, 10)]).points_non_increasing());
    }
}
