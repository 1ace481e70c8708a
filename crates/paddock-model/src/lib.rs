// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]
//! Standings model: ranked entries and the ordered sequences built from them.

mod entry;
mod ranking;

pub use entry::{ParseError, RankedEntry, NAME_MAX_LEN};
pub use ranking::RankingSequence;

pub const CRATE_NAME: &str = "paddock-model";
