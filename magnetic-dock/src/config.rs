//! `magnetic-dock` configuration

mod checks;
mod default;

use anyhow::Result;
use magnetic_dock_core::config::Config as DockConfig;
use magnetic_dock_core::{ConflictResolution, DockPosition, DockPositionSet};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use xdg::BaseDirectories;

const CONFIG_PREFIX: &str = "magnetic-dock";
const CONFIG_FILE: &str = "config.toml";

/// General configuration
///
/// # Example
///
/// In `config.toml`
///
/// ```toml
/// positions = ["InsideLeft", "OutsideRight"]
/// adsorb_distance = 30.0
/// title_bar_height = 20.0
/// conflict_resolution = "Innermost"
/// log_level = "info"
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Host edges the child may dock to.
    pub positions: Vec<DockPosition>,
    pub adsorb_distance: f64,
    pub title_bar_height: f64,
    pub conflict_resolution: ConflictResolution,
    pub log_level: String,
}

impl DockConfig for Config {
    fn dock_positions(&self) -> DockPositionSet {
        self.positions.iter().copied().collect()
    }

    fn adsorb_distance(&self) -> f64 {
        self.adsorb_distance
    }

    fn title_bar_height(&self) -> f64 {
        self.title_bar_height
    }

    fn conflict_resolution(&self) -> ConflictResolution {
        self.conflict_resolution
    }
}

/// Load the user's configuration, falling back to the defaults if it
/// cannot be read.
#[must_use]
pub fn load() -> Config {
    load_config_file()
        .map_err(|err| tracing::error!("Error loading config: {:?}", err))
        .unwrap_or_default()
}

/// Path of the configuration file in the XDG config directory.
///
/// # Errors
///
/// Errors if the XDG base directories cannot be determined or the config
/// directory cannot be created.
pub fn default_path() -> Result<PathBuf> {
    let path = BaseDirectories::with_prefix(CONFIG_PREFIX)?;
    Ok(path.place_config_file(CONFIG_FILE)?)
}

/// # Errors
///
/// Function will throw an error if `BaseDirectories` doesn't exist, if the
/// user doesn't have permissions to place config.toml, or if config.toml
/// cannot be read or parsed.
/// A default config.toml is written the first time.
pub fn load_config_file() -> Result<Config> {
    tracing::debug!("Loading config file");
    let config_file = default_path()?;
    if config_file.exists() {
        tracing::debug!("Config file '{}' found.", config_file.to_string_lossy());
        load_from_path(&config_file)
    } else {
        tracing::debug!("Config file not found. Using default config file.");
        let config = Config::default();
        write_to_file(&config_file, &config)?;
        Ok(config)
    }
}

/// # Errors
///
/// Errors if the file cannot be read or is not valid TOML for a [`Config`].
pub fn load_from_path(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)?;
    let config = toml::from_str(&contents)?;
    Ok(config)
}

/// # Errors
///
/// Errors if the config cannot be serialized or the file cannot be written.
pub fn write_to_file(path: &Path, config: &Config) -> Result<()> {
    let toml = toml::to_string(config)?;
    fs::write(path, toml)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::PoisonError;

    #[test]
    fn empty_file_should_give_the_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.dock_positions(), DockPositionSet::all());
        assert_eq!(config.adsorb_distance(), 30.0);
    }

    #[test]
    fn positions_should_restrict_the_mask() {
        let config: Config = toml::from_str(
            r#"
            positions = ["InsideLeft", "OutsideRight"]
            adsorb_distance = 12.5
            conflict_resolution = "LastMatch"
            "#,
        )
        .unwrap();
        assert_eq!(
            config.dock_positions(),
            DockPositionSet::INSIDE_LEFT | DockPositionSet::OUTSIDE_RIGHT
        );
        assert_eq!(config.adsorb_distance(), 12.5);
        assert_eq!(config.conflict_resolution(), ConflictResolution::LastMatch);
        assert_eq!(config.title_bar_height(), 20.0);
    }

    #[test]
    fn unknown_position_should_fail_to_parse() {
        let result: Result<Config, _> = toml::from_str(r#"positions = ["Middle"]"#);
        assert!(result.is_err());
    }

    #[test]
    fn positions_accept_the_command_line_spelling() {
        let config: Config =
            toml::from_str(r#"positions = ["inside-left", "outside_right", "InsideTop"]"#).unwrap();
        assert_eq!(
            config.positions,
            vec![
                DockPosition::InsideLeft,
                DockPosition::OutsideRight,
                DockPosition::InsideTop
            ]
        );
    }

    #[test]
    fn missing_config_file_should_be_written_with_the_defaults() {
        let _env = crate::ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        let dir = tempfile::tempdir().unwrap();
        // SAFETY: every test touching the environment holds ENV_LOCK.
        unsafe { std::env::set_var("XDG_CONFIG_HOME", dir.path()) };
        let loaded = load_config_file();
        unsafe { std::env::remove_var("XDG_CONFIG_HOME") };

        assert_eq!(loaded.unwrap(), Config::default());
        let path = dir.path().join(CONFIG_PREFIX).join(CONFIG_FILE);
        assert!(path.is_file());
        assert_eq!(load_from_path(&path).unwrap(), Config::default());
    }

    #[test]
    fn load_from_path_should_read_the_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "title_bar_height = 0.0").unwrap();
        let config = load_from_path(file.path()).unwrap();
        assert_eq!(config.title_bar_height, 0.0);
    }

    #[test]
    fn written_config_should_load_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        let config = Config {
            positions: vec![DockPosition::OutsideBottom],
            ..Config::default()
        };
        write_to_file(&path, &config).unwrap();
        assert_eq!(load_from_path(&path).unwrap(), config);
    }
}
