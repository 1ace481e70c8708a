// SPDX-License-Identifier: Apache-2.0

use crate::{ApiResponseEnvelope, API_TITLE, API_VERSION, ROUTE_CLASSIFICATION};
use paddock_model::RankingSequence;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub type ClassificationResponseDto = ApiResponseEnvelope<RankingSequence>;

/// Static landing payload served at `/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceInfoDto {
    pub message: String,
    pub version: String,
    pub endpoints: BTreeMap<String, String>,
}

impl Default for ServiceInfoDto {
    fn default() -> Self {
        let mut endpoints = BTreeMap::new();
        endpoints.insert(
            ROUTE_CLASSIFICATION.to_string(),
            "Get F1 driver classification".to_string(),
        );
        Self {
            message: API_TITLE.to_string(),
            version: API_VERSION.to_string(),
            endpoints,
        }
    }
}
