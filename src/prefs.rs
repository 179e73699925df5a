//! Ambient OS preference reads, behind an injectable seam.
//!
//! The dock heuristic depends on a process-wide preference store owned by the
//! OS. Abstracting the read lets tests substitute deterministic values instead
//! of whatever the developer's machine happens to have configured.

use std::collections::HashMap;

/// Read-only access to the OS user-preference store.
pub trait PreferenceReader {
    /// The boolean stored under `key` in the preference `domain`, if any.
    fn bool_value(&self, domain: &str, key: &str) -> Option<bool>;
}

/// In-memory preference store for tests and non-macOS builds.
#[derive(Debug, Clone, Default)]
pub struct MemoryPrefs {
    entries: HashMap<(String, String), bool>,
}

impl MemoryPrefs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, domain: &str, key: &str, value: bool) {
        self.entries
            .insert((domain.to_string(), key.to_string()), value);
    }
}

impl PreferenceReader for MemoryPrefs {
    fn bool_value(&self, domain: &str, key: &str) -> Option<bool> {
        self.entries
            .get(&(domain.to_string(), key.to_string()))
            .copied()
    }
}
