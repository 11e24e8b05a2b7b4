//! Settings for keybindings.
//!
//! The settings file lives at `~/.config/keybindings/config.yml` and lists
//! the applications whose keybindings can be displayed. It is written with
//! built-in defaults on first run and never overwritten afterwards.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{KeybindingsError, Result};

/// Settings file name.
const CONFIG_FILE_NAME: &str = "config.yml";

/// Settings directory, relative to the user's home.
const CONFIG_DIR_NAME: &str = ".config/keybindings";

// ---------------------------------------------------------------------------
// Settings structs (matching config.yml schema)
// ---------------------------------------------------------------------------

/// Top-level settings, deserialized from YAML.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Known applications, in menu order.
    #[serde(default)]
    pub applications: Vec<ApplicationDescriptor>,
}

/// `applications[]` entry describing one application.
///
/// Absent keys deserialize to empty strings. [`load_config`] warns about
/// them but does not reject the file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationDescriptor {
    /// Display name, also the command-line selector.
    #[serde(default)]
    pub name: String,

    /// Target config file, relative to the home directory.
    #[serde(default)]
    pub path: String,

    /// Regex with two capture groups: binding, then definition.
    #[serde(default, rename = "keybindingpattern", alias = "pattern")]
    pub pattern: String,
}

impl ApplicationDescriptor {
    pub fn new(
        name: impl Into<String>,
        path: impl Into<String>,
        pattern: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            pattern: pattern.into(),
        }
    }

    /// Resolve the target config file against `home`.
    ///
    /// Absolute paths are returned unchanged.
    pub fn target_path(&self, home: &Path) -> PathBuf {
        home.join(&self.path)
    }

    /// Names of the settings keys that were absent or empty.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.is_empty() {
            missing.push("name");
        }
        if self.path.is_empty() {
            missing.push("path");
        }
        if self.pattern.is_empty() {
            missing.push("keybindingpattern");
        }
        missing
    }
}

/// Built-in settings written on first run.
pub fn default_settings() -> Settings {
    Settings {
        applications: vec![
            ApplicationDescriptor::new(
                "i3",
                ".config/i3/config",
                r"bindsym ([a-zA-Z0-9$+]+) (.*)",
            ),
            ApplicationDescriptor::new(
                "vim",
                ".vimrc",
                r"(?:map|nmap|nnoremap|tnoremap) ((?:[a-zA-Z0-9<>-]|[[:punct:]])+) (.*)",
            ),
            ApplicationDescriptor::new(
                "vifm",
                ".config/vifm/vifmrc",
                r"nnoremap ([a-zA-Z0-9<>,]+) (.*)",
            ),
        ],
    }
}

// ---------------------------------------------------------------------------
// Locations
// ---------------------------------------------------------------------------

/// Get the user's home directory.
pub fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().ok_or_else(|| KeybindingsError::config("could not determine home directory"))
}

/// Get the path to the settings directory (`~/.config/keybindings/`).
pub fn config_dir() -> Result<PathBuf> {
    Ok(home_dir()?.join(CONFIG_DIR_NAME))
}

/// Get the path to the settings file (`~/.config/keybindings/config.yml`).
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

// ---------------------------------------------------------------------------
// Bootstrap and loading
// ---------------------------------------------------------------------------

/// Make sure a settings file exists at `path`, writing the defaults if not.
///
/// Returns `true` when the file was created by this call.
pub fn ensure_config(path: &Path) -> Result<bool> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() && !dir.exists() {
            std::fs::create_dir_all(dir).map_err(|e| KeybindingsError::io(dir, e))?;
            tracing::debug!(?dir, "created config directory");
        }
    }

    if path.exists() {
        return Ok(false);
    }

    let content = serde_yaml::to_string(&default_settings()).map_err(|e| {
        KeybindingsError::config(format!("failed to serialize default settings: {e}"))
    })?;

    std::fs::write(path, content).map_err(|e| KeybindingsError::io(path, e))?;
    tracing::info!(?path, "created default config file");

    Ok(true)
}

/// Load the settings from a specific file path.
pub fn load_config(path: &Path) -> Result<Settings> {
    let content = std::fs::read_to_string(path).map_err(|e| KeybindingsError::io(path, e))?;

    let settings: Settings = serde_yaml::from_str(&content).map_err(|e| {
        KeybindingsError::config(format!("failed to parse {}: {e}", path.display()))
    })?;

    for (index, app) in settings.applications.iter().enumerate() {
        let missing = app.missing_fields();
        if !missing.is_empty() {
            tracing::warn!(index, name = %app.name, ?missing, "application entry has empty fields");
        }
    }

    tracing::debug!(?path, count = settings.applications.len(), "loaded settings");
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_have_three_applications() {
        let settings = default_settings();
        let names: Vec<_> = settings
            .applications
            .iter()
            .map(|a| a.name.as_str())
            .collect();
        assert_eq!(names, ["i3", "vim", "vifm"]);
        assert_eq!(settings.applications[0].path, ".config/i3/config");
        assert_eq!(settings.applications[1].path, ".vimrc");
        assert_eq!(settings.applications[2].path, ".config/vifm/vifmrc");
        assert_eq!(
            settings.applications[0].pattern,
            "bindsym ([a-zA-Z0-9$+]+) (.*)"
        );
        assert_eq!(
            settings.applications[1].pattern,
            "(?:map|nmap|nnoremap|tnoremap) ((?:[a-zA-Z0-9<>-]|[[:punct:]])+) (.*)"
        );
        assert_eq!(
            settings.applications[2].pattern,
            "nnoremap ([a-zA-Z0-9<>,]+) (.*)"
        );
    }

    #[test]
    fn ensure_config_writes_defaults_on_fresh_home() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path = tmp.path().join(".config/keybindings/config.yml");

        let created = ensure_config(&path).expect("bootstrap");
        assert!(created);

        let settings = load_config(&path).expect("load");
        assert_eq!(settings, default_settings());
    }

    #[test]
    fn ensure_config_is_idempotent() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path = tmp.path().join("keybindings/config.yml");

        ensure_config(&path).expect("first run");
        let first = std::fs::read(&path).expect("read");

        let created = ensure_config(&path).expect("second run");
        assert!(!created);
        assert_eq!(std::fs::read(&path).expect("read"), first);
    }

    #[test]
    fn ensure_config_keeps_user_edits() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path = tmp.path().join("config.yml");
        let custom = "applications:\n- name: sway\n  path: .config/sway/config\n  keybindingpattern: 'bindsym (\\S+) (.*)'\n";
        std::fs::write(&path, custom).expect("write");

        ensure_config(&path).expect("bootstrap");
        assert_eq!(std::fs::read_to_string(&path).expect("read"), custom);
    }

    #[test]
    fn settings_file_uses_lowercase_key_names() {
        let yaml = serde_yaml::to_string(&default_settings()).expect("serialize");
        assert!(yaml.starts_with("applications:"));
        assert!(yaml.contains("keybindingpattern:"));
        assert!(yaml.contains("name: i3"));
    }

    #[test]
    fn missing_fields_become_empty_strings() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path = tmp.path().join("config.yml");
        std::fs::write(&path, "applications:\n- name: broken\n").expect("write");

        let settings = load_config(&path).expect("load");
        let app = &settings.applications[0];
        assert_eq!(app.name, "broken");
        assert!(app.path.is_empty());
        assert!(app.pattern.is_empty());
        assert_eq!(app.missing_fields(), ["path", "keybindingpattern"]);
    }

    #[test]
    fn pattern_alias_is_accepted() {
        let yaml = "applications:\n- name: tmux\n  path: .tmux.conf\n  pattern: 'bind (\\S+) (.*)'\n";
        let settings: Settings = serde_yaml::from_str(yaml).expect("parse");
        assert_eq!(settings.applications[0].pattern, r"bind (\S+) (.*)");
    }

    #[test]
    fn empty_document_has_no_applications() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path = tmp.path().join("config.yml");
        std::fs::write(&path, "{}\n").expect("write");

        let settings = load_config(&path).expect("load");
        assert!(settings.applications.is_empty());
    }

    #[test]
    fn malformed_settings_are_rejected() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path = tmp.path().join("config.yml");
        std::fs::write(&path, "applications: [name: {").expect("write");

        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, KeybindingsError::Config { .. }));
    }

    #[test]
    fn missing_settings_file_is_io_error() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let err = load_config(&tmp.path().join("absent.yml")).unwrap_err();
        assert!(matches!(err, KeybindingsError::Io { .. }));
    }

    #[test]
    fn target_path_is_relative_to_home() {
        let app = ApplicationDescriptor::new("i3", ".config/i3/config", "x");
        assert_eq!(
            app.target_path(Path::new("/home/alice")),
            PathBuf::from("/home/alice/.config/i3/config")
        );

        let absolute = ApplicationDescriptor::new("etc", "/etc/i3/config", "x");
        assert_eq!(
            absolute.target_path(Path::new("/home/alice")),
            PathBuf::from("/etc/i3/config")
        );
    }
}
