use std::path::PathBuf;

use color_eyre::Result;
use color_eyre::eyre::Context;
use serde::{Deserialize, Serialize};

/// Optional config file holding defaults for values that can also be passed
/// as flags or environment variables.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    spotify_access_token: Option<String>,
    #[serde(default)]
    youtube_access_token: Option<String>,
    /// Default source playlist to transfer when none is given on the CLI.
    #[serde(default)]
    pub playlist_id: Option<String>,
}

impl Config {
    /// Load config from a TOML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;
        let config: Config = toml::from_str(&contents)
            .context(format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Get the config file path (similar to beets)
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|path| path.join("instrumental-porter").join("config.toml"))
    }

    /// Load the config from the default location; a missing file just means
    /// all defaults are empty.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Create a commented default config file, if it doesn't exist
    pub fn create_default() -> Result<()> {
        let path = Self::config_path()
            .ok_or_else(|| color_eyre::eyre::eyre!("No default config path found"))?;
        if path.exists() {
            return Ok(());
        }
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .context(format!("Failed to create config directory: {}", parent.display()))?;
        }
        let default = "\
# spotify_access_token = \"...\"
# youtube_access_token = \"...\"
# playlist_id = \"...\"
";
        std::fs::write(&path, default)
            .context(format!("Failed to write config file: {}", path.display()))?;
        Ok(())
    }

    /// Spotify access token from the config, falling back to the environment
    pub fn spotify_access_token(&self) -> Option<String> {
        self.spotify_access_token
            .clone()
            .or_else(|| std::env::var("SPOTIFY_ACCESS_TOKEN").ok())
    }

    /// YouTube access token from the config, falling back to the environment
    pub fn youtube_access_token(&self) -> Option<String> {
        self.youtube_access_token
            .clone()
            .or_else(|| std::env::var("YOUTUBE_ACCESS_TOKEN").ok())
    }
}
