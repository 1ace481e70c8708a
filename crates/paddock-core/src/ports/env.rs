// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeMap;
use std::sync::RwLock;

/// Narrow read access to string-valued process configuration.
///
/// Callers re-read through the port on every lookup; implementations must not
/// cache values on their behalf.
pub trait EnvPort: Send + Sync {
    fn var(&self, name: &str) -> Option<String>;
}

/// Live view of the process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvPort for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// In-memory environment, mutable through a shared reference.
#[derive(Debug, Default)]
pub struct MemoryEnv {
    vars: RwLock<BTreeMap<String, String>>,
}

impl MemoryEnv {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_var(self, name: &str, value: &str) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&self, name: &str, value: &str) {
        if let Ok(mut vars) = self.vars.write() {
            vars.insert(name.to_string(), value.to_string());
        }
    }

    pub fn remove(&self, name: &str) {
        if let Ok(mut vars) = self.vars.write() {
            vars.remove(name);
        }
    }
}

impl EnvPort for MemoryEnv {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.read().ok()?.get(name).cloned()
    }
}
