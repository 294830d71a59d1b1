//! TOML-based process configuration.
//!
//! Loaded once at startup and treated as read-only input to the
//! collaborators: bot token, recipe-service address and API key,
//! translation and random-recipe endpoints.
//!
//! Default location is `~/.config/recipebot/config.toml`
//! (`RECIPEBOT_ENV=dev` switches to `recipebot-dev`).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::ConfigError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelegramConfig {
    /// Bot token issued by BotFather.
    #[serde(default)]
    pub token: String,
    #[serde(default = "default_telegram_base")]
    pub base_url: String,
    /// Server-side long-poll timeout for getUpdates.
    #[serde(default = "default_poll_timeout")]
    pub poll_timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RecipeServiceConfig {
    #[serde(default)]
    pub base_url: String,
    #[serde(default)]
    pub api_key: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateConfig {
    #[serde(default = "default_translate_base")]
    pub base_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandomRecipeConfig {
    #[serde(default = "default_mealdb_base")]
    pub base_url: String,
}

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub telegram: TelegramConfig,
    #[serde(default)]
    pub recipe_service: RecipeServiceConfig,
    #[serde(default)]
    pub translate: TranslateConfig,
    #[serde(default)]
    pub random_recipe: RandomRecipeConfig,
}

fn default_telegram_base() -> String {
    "https://api.telegram.org".to_string()
}

fn default_poll_timeout() -> u64 {
    30
}

fn default_translate_base() -> String {
    "https://api.mymemory.translated.net".to_string()
}

fn default_mealdb_base() -> String {
    "https://www.themealdb.com/api/json/v1/1".to_string()
}

impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            base_url: default_telegram_base(),
            poll_timeout_secs: default_poll_timeout(),
        }
    }
}

impl Default for TranslateConfig {
    fn default() -> Self {
        Self {
            base_url: default_translate_base(),
        }
    }
}

impl Default for RandomRecipeConfig {
    fn default() -> Self {
        Self {
            base_url: default_mealdb_base(),
        }
    }
}

/// Returns `~/.config/recipebot[-dev]/` based on RECIPEBOT_ENV.
pub fn config_dir() -> PathBuf {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");
    let env = std::env::var("RECIPEBOT_ENV").unwrap_or_else(|_| "production".to_string());
    if env == "dev" {
        base_dir.join("recipebot-dev")
    } else {
        base_dir.join("recipebot")
    }
}

impl Config {
    pub fn default_path() -> PathBuf {
        config_dir().join("config.toml")
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&raw)?)
    }

    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::default_path())
    }

    /// Write the config (used by `config init` to lay down a
    /// template the user fills in).
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
                path: path.to_path_buf(),
                source,
            })?;
        }
        let raw = toml::to_string_pretty(self).map_err(|err| ConfigError::Write {
            path: path.to_path_buf(),
            source: std::io::Error::other(err),
        })?;
        std::fs::write(path, raw).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Fail fast on values the collaborators cannot start without.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.telegram.token.is_empty() {
            return Err(ConfigError::Missing("telegram.token"));
        }
        if self.recipe_service.base_url.is_empty() {
            return Err(ConfigError::Missing("recipe_service.base_url"));
        }
        if self.recipe_service.api_key.is_empty() {
            return Err(ConfigError::Missing("recipe_service.api_key"));
        }
        for base in [
            &self.telegram.base_url,
            &self.recipe_service.base_url,
            &self.translate.base_url,
            &self.random_recipe.base_url,
        ] {
            Url::parse(base)?;
        }
        Ok(())
    }
}
