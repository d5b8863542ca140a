//! Advisor configuration — resolver/ranking tunables and generation settings.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

pub const DEFAULT_PRIMARY_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_FALLBACK_MODEL: &str = "gemini-pro";

/// Entity resolver tunables. The defaults are the validated starting
/// values; they are configuration, not constants of the algorithm.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Minimum combined similarity for a match to be accepted.
    #[serde(default = "default_threshold")]
    pub match_threshold: f64,
    /// Weight of the token-overlap component.
    #[serde(default = "default_token_weight")]
    pub token_weight: f64,
    /// Weight of the edit-distance component.
    #[serde(default = "default_edit_weight")]
    pub edit_weight: f64,
    /// Multiplier applied when the question continues a matched name with
    /// a variant suffix the name does not carry ("S24" followed by "Ultra").
    #[serde(default = "default_suffix_penalty")]
    pub suffix_penalty: f64,
}

fn default_threshold() -> f64 {
    0.72
}
fn default_token_weight() -> f64 {
    0.6
}
fn default_edit_weight() -> f64 {
    0.4
}
fn default_suffix_penalty() -> f64 {
    0.4
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            match_threshold: default_threshold(),
            token_weight: default_token_weight(),
            edit_weight: default_edit_weight(),
            suffix_penalty: default_suffix_penalty(),
        }
    }
}

/// Recommendation ranking tunables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingConfig {
    /// Score every surviving record starts with.
    #[serde(default = "default_base_score")]
    pub base_score: f64,
    /// Bonus for a record in the top tertile of a preferred spec.
    #[serde(default = "default_preference_bonus")]
    pub preference_bonus: f64,
    /// Ranked list is truncated to this many entries.
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

fn default_base_score() -> f64 {
    1.0
}
fn default_preference_bonus() -> f64 {
    0.5
}
fn default_max_results() -> usize {
    5
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            base_score: default_base_score(),
            preference_bonus: default_preference_bonus(),
            max_results: default_max_results(),
        }
    }
}

/// External generation settings. A missing API key simply disables the
/// remote backend; answers then come from the deterministic templates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_primary_model")]
    pub primary_model: String,
    #[serde(default = "default_fallback_model")]
    pub fallback_model: String,
    /// Upper bound for one generation attempt, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_primary_model() -> String {
    DEFAULT_PRIMARY_MODEL.into()
}
fn default_fallback_model() -> String {
    DEFAULT_FALLBACK_MODEL.into()
}
fn default_timeout_secs() -> u64 {
    20
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            primary_model: default_primary_model(),
            fallback_model: default_fallback_model(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Top-level advisor configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdvisorConfig {
    #[serde(default)]
    pub resolver: ResolverConfig,
    #[serde(default)]
    pub ranking: RankingConfig,
    #[serde(default)]
    pub generation: GenerationConfig,
    /// Path to config file for saving.
    #[serde(skip)]
    pub config_path: PathBuf,
}

impl AdvisorConfig {
    /// Load config from file, falling back to env vars and defaults.
    pub fn load(config_path: &Path) -> Self {
        let mut config: AdvisorConfig = std::fs::read_to_string(config_path)
            .ok()
            .and_then(|s| serde_json::from_str(&s).ok())
            .unwrap_or_default();

        config.config_path = config_path.to_path_buf();

        // Env var as fallback for the API key
        if config.generation.api_key.is_none() {
            config.generation.api_key = std::env::var("GEMINI_API_KEY").ok();
        }

        config
    }

    /// Save config to disk.
    pub fn save(&self) -> Result<(), std::io::Error> {
        if let Some(parent) = self.config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        std::fs::write(&self.config_path, json)?;
        info!("Saved advisor config to {}", self.config_path.display());
        Ok(())
    }

    /// Whether the remote generation backend can be used at all.
    pub fn generation_available(&self) -> bool {
        self.generation
            .api_key
            .as_deref()
            .map(|k| !k.is_empty())
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AdvisorConfig::default();
        assert_eq!(config.resolver.match_threshold, 0.72);
        assert_eq!(config.resolver.token_weight, 0.6);
        assert_eq!(config.resolver.edit_weight, 0.4);
        assert_eq!(config.ranking.max_results, 5);
        assert_eq!(config.generation.timeout_secs, 20);
        assert!(!config.generation_available());
    }

    #[test]
    fn test_load_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("advisor.json");
        std::fs::write(
            &path,
            r#"{"resolver": {"match_threshold": 0.8}, "generation": {"api_key": "k"}}"#,
        )
        .unwrap();

        let config = AdvisorConfig::load(&path);
        assert_eq!(config.resolver.match_threshold, 0.8);
        // Unspecified fields keep their defaults
        assert_eq!(config.resolver.token_weight, 0.6);
        assert_eq!(config.ranking.preference_bonus, 0.5);
        assert!(config.generation_available());
    }

    #[test]
    fn test_save_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("advisor.json");

        let mut config = AdvisorConfig::default();
        config.config_path = path.clone();
        config.ranking.max_results = 3;
        config.save().unwrap();

        let loaded = AdvisorConfig::load(&path);
        assert_eq!(loaded.ranking.max_results, 3);
    }
}
