//! Shared types, error model, and settings for keybindings.
//!
//! This crate is the foundation depended on by the other keybindings crates.
//! It provides:
//! - [`KeybindingsError`], the unified error type
//! - Domain types ([`KeybindingEntry`])
//! - Settings ([`Settings`], [`ApplicationDescriptor`], bootstrap and loading)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    ApplicationDescriptor, Settings, config_dir, config_file_path, default_settings,
    ensure_config, home_dir, load_config,
};
pub use error::{KeybindingsError, Result};
pub use types::KeybindingEntry;
