use serde::Deserialize;
use std::path::Path;

/// Startup configuration: two feed groups with opposing editorial leanings
/// plus the synthesis endpoint settings. Loaded once, never mutated.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
    #[serde(default)]
    pub synthesis: SynthesisConfig,
    pub left: FeedGroup,
    pub right: FeedGroup,
}

fn default_listen_addr() -> String {
    "0.0.0.0:3000".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct SynthesisConfig {
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            endpoint: default_endpoint(),
        }
    }
}

fn default_model() -> String {
    "gemma-3-27b-it".to_string()
}

fn default_endpoint() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

/// A named editorial leaning mapped to an ordered list of feed URLs.
#[derive(Debug, Deserialize, Clone)]
pub struct FeedGroup {
    pub label: String,
    pub urls: Vec<String>,
    /// Entries taken per feed, preserving feed order
    #[serde(default = "default_item_limit")]
    pub limit: usize,
}

fn default_item_limit() -> usize {
    5
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Parse config from a TOML string (useful for testing)
    pub fn from_str(content: &str) -> anyhow::Result<Self> {
        let config: Config = toml::from_str(content)?;
        if config.left.label == config.right.label {
            anyhow::bail!(
                "feed group labels must be distinct, both are '{}'",
                config.left.label
            );
        }
        Ok(config)
    }
}
