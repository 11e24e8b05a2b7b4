//! Core domain types produced by keybinding extraction.

/// A single binding found in a target application's config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeybindingEntry {
    /// The key combination token (first capture group).
    pub binding: String,
    /// The action bound to it (second capture group).
    pub definition: String,
}

impl KeybindingEntry {
    pub fn new(binding: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            binding: binding.into(),
            definition: definition.into(),
        }
    }
}
