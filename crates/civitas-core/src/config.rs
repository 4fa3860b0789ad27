use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Largest map `validate` accepts, in tiles (a 2048 x 2048 grid).
pub const MAX_MAP_TILES: u64 = 1 << 22;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("yaml parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid session config: {0}")]
    Invalid(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CivDefinition {
    pub name: String,
    pub leader: String,
    /// Capital name; defaults to "Capital of <name>".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capital: Option<String>,
}

impl CivDefinition {
    pub fn new(name: impl Into<String>, leader: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            leader: leader.into(),
            capital: None,
        }
    }

    pub fn capital_name(&self) -> String {
        self.capital
            .clone()
            .unwrap_or_else(|| format!("Capital of {}", self.name))
    }
}

/// Parameters of a standard session. Every field has a default, so a YAML
/// document only needs the keys it overrides.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub width: u32,
    pub height: u32,
    pub seed: u64,
    pub starting_gold: i64,
    /// Human city count that ends the session in victory.
    pub victory_city_count: usize,
    pub player: CivDefinition,
    pub rivals: Vec<CivDefinition>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            width: 20,
            height: 15,
            seed: 0,
            starting_gold: 100,
            victory_city_count: 5,
            player: CivDefinition::new("Rome", "Caesar"),
            rivals: vec![
                CivDefinition::new("Egypt", "Ramesses"),
                CivDefinition::new("Greece", "Alexander"),
            ],
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "grid must be non-empty, got {}x{}",
                self.width, self.height
            )));
        }
        let tiles = u64::from(self.width) * u64::from(self.height);
        if tiles > MAX_MAP_TILES {
            return Err(ConfigError::Invalid(format!(
                "grid {}x{} has {tiles} tiles, limit is {MAX_MAP_TILES}",
                self.width, self.height
            )));
        }
        if self.victory_city_count == 0 {
            return Err(ConfigError::Invalid(
                "victory_city_count must be at least 1".to_string(),
            ));
        }
        if self.rivals.len() >= u8::MAX as usize {
            return Err(ConfigError::Invalid(format!(
                "too many rivals: {}",
                self.rivals.len()
            )));
        }
        for civ in std::iter::once(&self.player).chain(&self.rivals) {
            if civ.name.trim().is_empty() {
                return Err(ConfigError::Invalid(
                    "civilization name must not be empty".to_string(),
                ));
            }
        }
        Ok(())
    }
}

#[derive(Clone, Debug)]
pub enum ConfigSource<'a> {
    Embedded,
    Path(PathBuf),
    Str(&'a str),
}

pub fn load_config(source: ConfigSource<'_>) -> Result<SessionConfig, ConfigError> {
    let config: SessionConfig = match source {
        ConfigSource::Embedded => serde_yaml::from_str(include_str!("../data/session.yaml"))?,
        ConfigSource::Path(path) => {
            let yaml = std::fs::read_to_string(path)?;
            serde_yaml::from_str(&yaml)?
        }
        ConfigSource::Str(yaml) => serde_yaml::from_str(yaml)?,
    };
    config.validate()?;
    Ok(config)
}
