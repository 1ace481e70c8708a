// SPDX-License-Identifier: Apache-2.0

use paddock_core::{EnvPort, ENV_RUBINHO_CAMPEAO};
use std::fmt::{Display, Formatter};

/// Per-query state of the champion feature switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FeatureSwitch {
    On,
    #[default]
    Off,
}

impl FeatureSwitch {
    /// Only the literal `true`, in any letter case, turns the switch on.
    /// Absent, blank, `1`, `yes` and padded values all stay off.
    #[must_use]
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw {
            Some(value) if value.to_lowercase() == "true" => Self::On,
            _ => Self::Off,
        }
    }

    #[must_use]
    pub fn resolve(env: &dyn EnvPort) -> Self {
        Self::from_raw(env.var(ENV_RUBINHO_CAMPEAO).as_deref())
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::On => "on",
            Self::Off => "off",
        }
    }
}

impl Display for FeatureSwitch {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
