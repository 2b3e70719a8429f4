//! Application configuration.

use crate::consts::cli_consts::{DEFAULT_INDUSTRY, PRODUCT_DESCRIPTION};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::{fs, io};

/// Which intelligence backend answers dashboard requests.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ProviderKind {
    /// Google Gemini with search grounding.
    #[default]
    Gemini,
    /// Any OpenAI-compatible chat completions endpoint.
    #[serde(rename = "openai")]
    #[strum(serialize = "openai")]
    OpenAi,
    /// Offline canned answers, no network.
    Demo,
}

impl FromStr for ProviderKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gemini" => Ok(ProviderKind::Gemini),
            "openai" => Ok(ProviderKind::OpenAi),
            "demo" => Ok(ProviderKind::Demo),
            _ => Err(()),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub provider: ProviderKind,
    /// Model name; the provider default when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Name of the environment variable holding the API key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key_env: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
    /// Industry pre-filled in the market intelligence query.
    pub default_industry: String,
    /// Product the sales copilot pitches.
    pub product_description: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            provider: ProviderKind::default(),
            model: None,
            api_key_env: None,
            base_url: None,
            request_timeout_secs: None,
            default_industry: DEFAULT_INDUSTRY.to_string(),
            product_description: PRODUCT_DESCRIPTION.to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from a JSON file at the given path.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if reading from file fails or JSON is invalid.
    pub fn load_from_file(path: &Path) -> Result<Self, io::Error> {
        let buf = fs::read(path)?;
        let config: Config = serde_json::from_slice(&buf)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(config)
    }

    /// Loads the configuration file if it exists, otherwise the defaults.
    ///
    /// # Errors
    /// Returns an error only when an existing file cannot be read or parsed.
    pub fn load_or_default(path: &Path) -> Result<Self, io::Error> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Saves the configuration to a JSON file at the given path.
    ///
    /// Directories will be created if they don't exist. This method overwrites existing files.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if writing to file fails or serialization fails.
    pub fn save(&self, path: &Path) -> Result<(), io::Error> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("Serialization failed: {}", e),
            )
        })?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Deletes the configuration file. A missing file is not an error.
    pub fn clear(path: &Path) -> Result<(), io::Error> {
        match fs::remove_file(path) {
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            other => other,
        }
    }
}

/// Location of the configuration file: `~/.marketmind/config.json`.
///
/// # Errors
/// Returns an error when the home directory cannot be determined.
pub fn get_config_path() -> Result<PathBuf, io::Error> {
    let home = home::home_dir().ok_or_else(|| {
        io::Error::new(io::ErrorKind::NotFound, "Could not determine home directory")
    })?;
    Ok(home.join(".marketmind").join("config.json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    fn sample() -> Config {
        Config {
            provider: ProviderKind::OpenAi,
            model: Some("gpt-4o-mini".to_string()),
            default_industry: "Fintech".to_string(),
            ..Config::default()
        }
    }

    #[test]
    // Loading a saved configuration file should return the same configuration.
    fn test_load_recovers_saved_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config = sample();
        config.save(&path).unwrap();

        let loaded_config = Config::load_from_file(&path).unwrap();
        assert_eq!(config, loaded_config);
    }

    #[test]
    // Saving a configuration should create directories if they don't exist.
    fn test_save_creates_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nonexistent_dir").join("config.json");

        let result = sample().save(&path);

        assert!(result.is_ok(), "Failed to save config");
        assert!(
            path.parent().unwrap().exists(),
            "Parent directory does not exist"
        );
    }

    #[test]
    // A partial file fills the remaining fields with defaults.
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"provider": "demo"}"#).unwrap();

        let loaded = Config::load_from_file(&path).unwrap();
        assert_eq!(loaded.provider, ProviderKind::Demo);
        assert_eq!(loaded.default_industry, DEFAULT_INDUSTRY);
        assert_eq!(loaded.product_description, PRODUCT_DESCRIPTION);
    }

    #[test]
    // Missing files fall back to defaults instead of failing.
    fn test_load_or_default_without_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.json");
        assert_eq!(Config::load_or_default(&path).unwrap(), Config::default());
    }

    #[test]
    // Loading an invalid JSON file should return an error.
    fn test_load_rejects_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("invalid_config.json");

        let mut file = File::create(&path).unwrap();
        writeln!(file, "invalid json").unwrap();

        let result = Config::load_from_file(&path);
        assert!(result.is_err());
    }

    #[test]
    // Clearing removes the file and tolerates a second call.
    fn test_clear_is_idempotent() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        sample().save(&path).unwrap();

        Config::clear(&path).unwrap();
        assert!(!path.exists());
        Config::clear(&path).unwrap();
    }

    #[test]
    fn test_provider_names_round_trip() {
        for kind in [ProviderKind::Gemini, ProviderKind::OpenAi, ProviderKind::Demo] {
            assert_eq!(kind.to_string().parse::<ProviderKind>(), Ok(kind));
        }
        assert_eq!(serde_json::to_string(&ProviderKind::OpenAi).unwrap(), "\"openai\"");
        assert!("bard".parse::<ProviderKind>().is_err());
    }
}
