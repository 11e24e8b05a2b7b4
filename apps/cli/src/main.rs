//! keybindings CLI: print the keybindings found in another application's config.
//!
//! Applications are described in `~/.config/keybindings/config.yml`, which is
//! created with defaults on first run.

mod commands;

use color_eyre::eyre::Result;

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = commands::parse_cli();
    commands::init_tracing(&cli);
    commands::run(cli)
}
