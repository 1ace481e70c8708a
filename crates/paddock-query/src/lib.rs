// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]
//! Classification queries over the in-memory standings table.
//!
//! The only transformation is champion insertion, gated by the
//! `RUBINHO_CAMPEAO` feature switch.

mod champion;
mod classification;
mod switch;
mod table;

pub use champion::{champion_entry, insert_champion};
pub use classification::{classification, classification_for};
pub use switch::FeatureSwitch;
pub use table::{base_table, BASE_TABLE_LEN};

pub const CRATE_NAME: &str = "paddock-query";
