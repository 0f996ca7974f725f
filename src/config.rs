//! Process configuration: credentials, branding, and keyword lists.
//!
//! Credentials for the Custom Search API are validated once at startup and
//! are immutable afterwards. Missing or empty values fail fast with a
//! descriptive diagnostic instead of surfacing later as opaque provider
//! errors mid-fetch.
//!
//! Sentiment keyword lists are configuration, not derived data: the defaults
//! are the Indonesian business-news terms the dashboard was deployed with,
//! and a YAML file can replace them for other domains or languages.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::cli::Cli;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing Google API key (set --api-key or GOOGLE_API_KEY)")]
    MissingApiKey,
    #[error("missing search engine id (set --search-engine-id or GOOGLE_SEARCH_ENGINE_ID)")]
    MissingEngineId,
    #[error("logo not found at {0} (check --logo-path / LOGO_PATH)")]
    LogoNotFound(PathBuf),
    #[error("failed to read keyword file {path}: {source}")]
    KeywordFileRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse keyword file {path}: {source}")]
    KeywordFileParse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    #[error("keyword config must contain at least one positive and one negative keyword")]
    EmptyKeywordList,
}

/// Validated, immutable process configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_key: String,
    pub engine_id: String,
    /// Optional branding asset embedded in the Markdown header.
    pub logo_path: Option<PathBuf>,
}

impl AppConfig {
    /// Validate CLI/env-supplied configuration, failing fast on anything the
    /// provider would otherwise reject opaquely at request time.
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let api_key = cli
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or(ConfigError::MissingApiKey)?
            .to_string();

        let engine_id = cli
            .search_engine_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .ok_or(ConfigError::MissingEngineId)?
            .to_string();

        let logo_path = match cli.logo_path.as_deref() {
            Some(raw) => {
                let path = PathBuf::from(raw);
                if !path.is_file() {
                    return Err(ConfigError::LogoNotFound(path));
                }
                Some(path)
            }
            None => None,
        };

        Ok(Self {
            api_key,
            engine_id,
            logo_path,
        })
    }
}

/// Positive and negative keyword lists used by the classifier and as the two
/// campaign sweeps.
#[derive(Debug, Clone, Deserialize)]
pub struct KeywordConfig {
    pub positive: Vec<String>,
    pub negative: Vec<String>,
}

impl Default for KeywordConfig {
    fn default() -> Self {
        let to_vec = |words: &[&str]| words.iter().map(|w| w.to_string()).collect();
        Self {
            positive: to_vec(&[
                "ekspansi",
                "laba meningkat",
                "penghargaan",
                "inovasi",
                "kerja sama",
                "investasi",
                "pertumbuhan",
                "sukses",
            ]),
            negative: to_vec(&[
                "masalah",
                "penipuan",
                "gagal bayar",
                "denda",
                "kredit macet",
                "skandal",
                "investigasi",
                "kebangkrutan",
            ]),
        }
    }
}

impl KeywordConfig {
    /// Load keyword lists from a YAML file, or fall back to the defaults.
    pub fn load(path: Option<&str>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(raw) => {
                let path = Path::new(raw);
                let contents =
                    std::fs::read_to_string(path).map_err(|source| ConfigError::KeywordFileRead {
                        path: path.to_path_buf(),
                        source,
                    })?;
                let config: KeywordConfig = serde_yaml::from_str(&contents).map_err(|source| {
                    ConfigError::KeywordFileParse {
                        path: path.to_path_buf(),
                        source,
                    }
                })?;
                info!(path = %path.display(), "Loaded keyword config");
                config
            }
            None => Self::default(),
        };

        if config.positive.is_empty() || config.negative.is_empty() {
            return Err(ConfigError::EmptyKeywordList);
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn cli(args: &[&str]) -> Cli {
        let mut full = vec!["news_insight", "--query", "Acme Corp"];
        full.extend_from_slice(args);
        Cli::try_parse_from(full).unwrap()
    }

    #[test]
    fn test_missing_api_key_fails_fast() {
        let cli = cli(&["--search-engine-id", "cx123"]);
        let err = AppConfig::from_cli(&cli).unwrap_err();
        assert!(matches!(err, ConfigError::MissingApiKey));
    }

    #[test]
    fn test_blank_engine_id_fails_fast() {
        let cli = cli(&["--api-key", "k", "--search-engine-id", "  "]);
        let err = AppConfig::from_cli(&cli).unwrap_err();
        assert!(matches!(err, ConfigError::MissingEngineId));
    }

    #[test]
    fn test_missing_logo_fails_fast() {
        let cli = cli(&[
            "--api-key",
            "k",
            "--search-engine-id",
            "cx",
            "--logo-path",
            "/definitely/not/here.png",
        ]);
        let err = AppConfig::from_cli(&cli).unwrap_err();
        assert!(matches!(err, ConfigError::LogoNotFound(_)));
    }

    #[test]
    fn test_valid_config() {
        let cli = cli(&["--api-key", "k", "--search-engine-id", "cx"]);
        let config = AppConfig::from_cli(&cli).unwrap();
        assert_eq!(config.api_key, "k");
        assert_eq!(config.engine_id, "cx");
        assert!(config.logo_path.is_none());
    }

    #[test]
    fn test_default_keywords_nonempty() {
        let keywords = KeywordConfig::default();
        assert_eq!(keywords.positive.len(), 8);
        assert_eq!(keywords.negative.len(), 8);
        assert!(keywords.negative.contains(&"skandal".to_string()));
    }

    #[test]
    fn test_keyword_yaml_parsing() {
        let yaml = "positive: [bagus, hebat]\nnegative: [jelek]\n";
        let config: KeywordConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.positive, vec!["bagus", "hebat"]);
        assert_eq!(config.negative, vec!["jelek"]);
    }

    #[test]
    fn test_empty_keyword_list_rejected() {
        let dir = std::env::temp_dir().join("news_insight_kw_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("empty.yaml");
        std::fs::write(&path, "positive: []\nnegative: [jelek]\n").unwrap();

        let err = KeywordConfig::load(path.to_str()).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyKeywordList));
    }
}
