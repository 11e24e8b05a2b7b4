//! Keybinding extraction.
//!
//! Applies a descriptor's pattern to every line of the target config file.
//! Group 1 of each match is the binding and group 2 the definition.

use std::path::Path;

use keybindings_shared::{KeybindingEntry, KeybindingsError, Result};
use regex::Regex;

/// Line buffer size in bytes; lines of this length or longer are rejected.
pub const MAX_LINE_LENGTH: usize = 64 * 1024;

/// Compile a keybinding pattern, requiring at least two capture groups.
pub fn compile_pattern(pattern: &str) -> Result<Regex> {
    let re = Regex::new(pattern).map_err(|e| KeybindingsError::pattern(pattern, e.to_string()))?;

    // captures_len counts the implicit whole-match group
    let groups = re.captures_len() - 1;
    if groups < 2 {
        return Err(KeybindingsError::pattern(
            pattern,
            format!("expected two capture groups (binding, definition), found {groups}"),
        ));
    }

    Ok(re)
}

/// Collect every match of `re` in `content`, line by line.
///
/// Entries keep file order and, within a line, match order.
pub fn extract_keybindings(content: &str, re: &Regex) -> Result<Vec<KeybindingEntry>> {
    let mut entries = Vec::new();

    for (index, line) in content.lines().enumerate() {
        if line.len() >= MAX_LINE_LENGTH {
            return Err(KeybindingsError::LineTooLong {
                line: index + 1,
                length: line.len(),
            });
        }

        for caps in re.captures_iter(line) {
            let binding = caps.get(1).map_or("", |m| m.as_str());
            let definition = caps.get(2).map_or("", |m| m.as_str());
            tracing::trace!(line = index + 1, binding, definition, "matched keybinding");
            entries.push(KeybindingEntry::new(binding, definition));
        }
    }

    Ok(entries)
}

/// Read `path`, compile `pattern` and extract its keybindings.
pub fn extract_from_file(path: &Path, pattern: &str) -> Result<Vec<KeybindingEntry>> {
    let bytes = std::fs::read(path).map_err(|e| KeybindingsError::io(path, e))?;
    let content = String::from_utf8_lossy(&bytes);

    let re = compile_pattern(pattern)?;

    let entries = extract_keybindings(&content, &re).map_err(|e| match e {
        KeybindingsError::LineTooLong { .. } => KeybindingsError::Scan {
            path: path.to_path_buf(),
            message: e.to_string(),
        },
        other => other,
    })?;

    tracing::info!(?path, count = entries.len(), "extracted keybindings");
    Ok(entries)
}
