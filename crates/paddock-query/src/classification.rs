// SPDX-License-Identifier: Apache-2.0

use crate::{base_table, insert_champion, FeatureSwitch};
use paddock_core::EnvPort;
use paddock_model::RankingSequence;
use tracing::debug;

#[must_use]
pub fn classification_for(switch: FeatureSwitch) -> RankingSequence {
    let base = base_table();
    match switch {
        FeatureSwitch::On => insert_champion(&base),
        FeatureSwitch::Off => base,
    }
}

/// Resolves the feature switch through `env` and builds the classification.
///
/// The switch is read on every call, never cached.
#[must_use]
pub fn classification(env: &dyn EnvPort) -> RankingSequence {
    let switch = FeatureSwitch::resolve(env);
    let out = classification_for(switch);
    debug!(switch = %switch, entries = out.len(), "classification resolved");
    out
}
