//! CLI definition, tracing setup, and the run sequence.

use std::io;
use std::path::PathBuf;

use clap::{CommandFactory, FromArgMatches, Parser};
use color_eyre::eyre::{Result, eyre};
use keybindings_core::{TableRenderer, extract_from_file, find_by_name, prompt_for_choice};
use keybindings_shared::{Settings, config_file_path, ensure_config, home_dir, load_config};
use tracing::info;

/// Environment variable that overrides the settings file location.
const CONFIG_ENV: &str = "KEYBINDINGS_CONFIG";

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// keybindings: list the keybindings configured for an application.
#[derive(Parser)]
#[command(
    name = "keybindings",
    version,
    about = "Lists the keybindings of the application name given as an argument.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Application name as listed in the settings file. Omit to choose interactively.
    #[arg(value_name = "APPLICATION", allow_hyphen_values = true)]
    pub applications: Vec<String>,

    /// Settings file to use instead of ~/.config/keybindings/config.yml.
    #[arg(short, long, env = "KEYBINDINGS_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Disable colored output.
    #[arg(long, global = true)]
    pub plain: bool,

    /// Log format: text (default) or json.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

/// Parse the command line, with the settings file location in the help text.
pub(crate) fn parse_cli() -> Cli {
    let command = Cli::command().after_help(format!(
        "Configs can be found at: {}",
        settings_location_hint()
    ));
    let matches = command.get_matches();
    Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit())
}

/// Settings path shown in `--help`; never fails.
fn settings_location_hint() -> String {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return PathBuf::from(path).display().to_string();
    }
    match config_file_path() {
        Ok(path) => path.display().to_string(),
        Err(e) => format!("<unavailable: {e}>"),
    }
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags. Logs go to stderr.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "keybindings=warn",
        1 => "keybindings=info",
        2 => "keybindings=debug",
        _ => "keybindings=trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .with_writer(io::stderr)
                .init();
        }
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .with_writer(io::stderr)
                .init();
        }
    }
}

// ---------------------------------------------------------------------------
// Run sequence
// ---------------------------------------------------------------------------

/// Bootstrap and load settings, select an application, print its keybindings.
pub(crate) fn run(cli: Cli) -> Result<()> {
    let settings_path = match cli.config {
        Some(path) => path,
        None => config_file_path()?,
    };

    ensure_config(&settings_path)?;
    let settings = load_config(&settings_path)?;

    let choice = select_application(&settings, &cli.applications)?;
    let app = &settings.applications[choice];
    info!(name = %app.name, path = %app.path, "selected application");

    let target = app.target_path(&home_dir()?);
    let entries = extract_from_file(&target, &app.pattern)?;

    let table = TableRenderer::new(cli.plain).render(&entries);
    println!();
    print!("{table}");
    println!();

    Ok(())
}

fn select_application(settings: &Settings, names: &[String]) -> Result<usize> {
    match names {
        [] => {
            let mut input = io::stdin().lock();
            let mut output = io::stdout().lock();
            Ok(prompt_for_choice(settings, &mut input, &mut output)?)
        }
        [name] => Ok(find_by_name(settings, name)?),
        _ => Err(eyre!(
            "zero or one application name expected, got {}",
            names.len()
        )),
    }
}
