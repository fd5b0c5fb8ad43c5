use std::path::Path;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

pub const DEFAULT_BOT_MOVE_DELAY_MS: u64 = 700;
const MAX_BOT_MOVE_DELAY_MS: u64 = 10_000;

pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

/// Engine tuning knobs. Everything here has a usable default so a missing
/// config file is not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub bot_move_delay_ms: u64,
    pub log_prefix: Option<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            bot_move_delay_ms: DEFAULT_BOT_MOVE_DELAY_MS,
            log_prefix: None,
        }
    }
}

impl Validate for EngineConfig {
    fn validate(&self) -> Result<(), String> {
        if self.bot_move_delay_ms > MAX_BOT_MOVE_DELAY_MS {
            return Err(format!(
                "Bot move delay must be at most {} ms, got {}",
                MAX_BOT_MOVE_DELAY_MS, self.bot_move_delay_ms
            ));
        }
        Ok(())
    }
}

/// Loads and stores the engine config as YAML, caching the parsed value.
pub struct EngineConfigManager {
    file_path: String,
    config: Mutex<Option<EngineConfig>>,
}

impl EngineConfigManager {
    pub fn from_yaml_file(file_path: &str) -> Self {
        Self {
            file_path: file_path.to_string(),
            config: Mutex::new(None),
        }
    }

    pub fn get_config(&self) -> Result<EngineConfig, String> {
        let mut current = self.config.lock().unwrap();

        if let Some(config) = current.as_ref() {
            return Ok(config.clone());
        }

        if !Path::new(&self.file_path).exists() {
            return Ok(EngineConfig::default());
        }

        let content = std::fs::read_to_string(&self.file_path)
            .map_err(|e| format!("Failed to read config file {}: {}", self.file_path, e))?;
        let config: EngineConfig = serde_yaml_ng::from_str(&content)
            .map_err(|e| format!("Failed to parse config file {}: {}", self.file_path, e))?;

        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        *current = Some(config.clone());
        Ok(config)
    }

    pub fn set_config(&self, config: &EngineConfig) -> Result<(), String> {
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        let serialized = serde_yaml_ng::to_string(config)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;
        std::fs::write(&self.file_path, serialized)
            .map_err(|e| format!("Failed to write config file {}: {}", self.file_path, e))?;

        let mut current = self.config.lock().unwrap();
        *current = Some(config.clone());
        Ok(())
    }
}
