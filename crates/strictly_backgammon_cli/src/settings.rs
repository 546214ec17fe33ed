//! Loading match settings from TOML.

use crate::cli::MatchArgs;
use derive_more::{Display, Error};
use std::path::Path;
use strictly_backgammon::MatchSettings;
use tracing::{debug, info, instrument};

/// Settings loading error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Settings error: {} at {}:{}", message, file, line)]
pub struct SettingsError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SettingsError {
    /// Creates a new settings error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Parses settings from TOML text; missing keys take their defaults.
#[instrument(skip(content))]
pub fn parse_settings(content: &str) -> Result<MatchSettings, SettingsError> {
    toml::from_str(content)
        .map_err(|e| SettingsError::new(format!("Failed to parse settings: {}", e)))
}

/// Loads settings from a TOML file.
#[instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn load_settings(path: impl AsRef<Path>) -> Result<MatchSettings, SettingsError> {
    debug!("Loading settings from file");
    let content = std::fs::read_to_string(path.as_ref())
        .map_err(|e| SettingsError::new(format!("Failed to read settings file: {}", e)))?;
    let settings = parse_settings(&content)?;
    info!(target_score = *settings.target_score(), "Settings loaded");
    Ok(settings)
}

/// Settings from the optional file, with command-line overrides applied.
#[instrument(skip(args))]
pub fn resolve_settings(args: &MatchArgs) -> Result<MatchSettings, SettingsError> {
    let settings = match &args.settings {
        Some(path) => load_settings(path)?,
        None => MatchSettings::default(),
    };
    Ok(match args.target_score {
        Some(0) => return Err(SettingsError::new("Target score must be at least 1")),
        Some(target) => settings.with_target_score(target),
        None => settings,
    })
}

/// Renders settings as TOML, for writing a starter file.
pub fn to_toml(settings: &MatchSettings) -> Result<String, SettingsError> {
    toml::to_string(settings)
        .map_err(|e| SettingsError::new(format!("Failed to encode settings: {}", e)))
}
