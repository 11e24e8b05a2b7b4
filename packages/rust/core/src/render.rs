//! Table rendering for extracted keybindings.

use std::fmt::Write as _;
use std::io::IsTerminal;

use keybindings_shared::KeybindingEntry;
use owo_colors::OwoColorize;
use unicode_width::UnicodeWidthStr;

const BINDING_HEADER: &str = "Binding";
const DEFINITION_HEADER: &str = "Definition";

/// Spaces between the two columns.
const COLUMN_GAP: usize = 2;

/// Renders keybinding entries as a two-column table.
pub struct TableRenderer {
    /// Whether to emit ANSI styling.
    pub use_colors: bool,
}

impl TableRenderer {
    /// Create a renderer with automatic TTY and `NO_COLOR` detection.
    pub fn new(plain: bool) -> Self {
        let is_tty = std::io::stdout().is_terminal();
        let no_color = std::env::var_os("NO_COLOR").is_some();

        Self {
            use_colors: !plain && !no_color && is_tty,
        }
    }

    /// Render the header row followed by one row per entry.
    ///
    /// Every row ends with a newline. The binding column is padded to the
    /// widest binding (or header); definitions are written unchanged.
    pub fn render(&self, entries: &[KeybindingEntry]) -> String {
        let width = entries
            .iter()
            .map(|e| e.binding.width())
            .chain(std::iter::once(BINDING_HEADER.width()))
            .max()
            .unwrap_or_default();

        let mut out = String::new();

        let header_binding = self.header(BINDING_HEADER);
        let header_definition = self.header(DEFINITION_HEADER);
        push_row(&mut out, &header_binding, BINDING_HEADER.width(), width, &header_definition);

        for entry in entries {
            let binding = if self.use_colors {
                entry.binding.yellow().to_string()
            } else {
                entry.binding.clone()
            };
            push_row(&mut out, &binding, entry.binding.width(), width, &entry.definition);
        }

        out
    }

    fn header(&self, label: &str) -> String {
        if self.use_colors {
            label.blue().underline().to_string()
        } else {
            label.to_string()
        }
    }
}

/// Append one row; `first_width` is the display width of `first` before styling.
fn push_row(out: &mut String, first: &str, first_width: usize, column: usize, second: &str) {
    let padding = column - first_width + COLUMN_GAP;
    let _ = writeln!(out, "{first}{:padding$}{second}", "");
}
