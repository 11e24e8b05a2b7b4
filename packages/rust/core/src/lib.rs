//! Extraction, selection and rendering for keybindings.
//!
//! This crate turns a loaded [`keybindings_shared::Settings`] into output:
//! pick an application, scan its config file with the descriptor's pattern,
//! and render the matches as a table.

pub mod extract;
pub mod render;
pub mod select;

pub use extract::{MAX_LINE_LENGTH, compile_pattern, extract_from_file, extract_keybindings};
pub use render::TableRenderer;
pub use select::{find_by_name, prompt_for_choice};
