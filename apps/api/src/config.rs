use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};

use crate::llm_client::{DEFAULT_BASE_URL, DEFAULT_MODELS};

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Application configuration loaded from environment variables.
/// Fails at startup if a variable is present but malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Optional server-side key; clients may also send their own.
    pub gemini_api_key: Option<String>,
    pub gemini_api_base: String,
    /// Model cascade, most capable first.
    pub gemini_models: Vec<String>,
    pub advisor_timeout: Duration,
    pub scheme_catalog_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let optional = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let gemini_models = match optional("GEMINI_MODELS") {
            Some(raw) => parse_model_list(&raw)?,
            None => DEFAULT_MODELS.iter().map(|m| m.to_string()).collect(),
        };

        let timeout_secs = match optional("ADVISOR_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .context("ADVISOR_TIMEOUT_SECS must be a whole number of seconds")?,
            None => DEFAULT_TIMEOUT_SECS,
        };
        if timeout_secs == 0 {
            bail!("ADVISOR_TIMEOUT_SECS must be greater than zero");
        }

        Ok(Config {
            port: optional("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: optional("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            gemini_api_key: optional("GEMINI_API_KEY"),
            gemini_api_base: optional("GEMINI_API_BASE")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            gemini_models,
            advisor_timeout: Duration::from_secs(timeout_secs),
            scheme_catalog_path: optional("SCHEME_CATALOG_PATH").map(PathBuf::from),
        })
    }
}

fn parse_model_list(raw: &str) -> Result<Vec<String>> {
    let models: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
        .collect();
    if models.is_empty() {
        bail!("GEMINI_MODELS must list at least one model id");
    }
    Ok(models)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
        assert!(config.gemini_api_key.is_none());
        assert_eq!(config.gemini_api_base, DEFAULT_BASE_URL);
        assert_eq!(config.gemini_models, DEFAULT_MODELS.to_vec());
        assert_eq!(config.advisor_timeout, Duration::from_secs(30));
        assert!(config.scheme_catalog_path.is_none());
    }

    #[test]
    fn test_model_list_keeps_priority_order() {
        let config = config_from(&[("GEMINI_MODELS", " gemini-pro , ,gemini-1.5-flash ")]).unwrap();
        assert_eq!(config.gemini_models, vec!["gemini-pro", "gemini-1.5-flash"]);
    }

    #[test]
    fn test_model_list_of_only_commas_is_rejected() {
        assert!(config_from(&[("GEMINI_MODELS", " , ,")]).is_err());
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let err = config_from(&[("PORT", "eighty")]).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        assert!(config_from(&[("ADVISOR_TIMEOUT_SECS", "0")]).is_err());
    }

    #[test]
    fn test_blank_key_is_treated_as_unset() {
        let config = config_from(&[("GEMINI_API_KEY", "  ")]).unwrap();
        assert!(config.gemini_api_key.is_none());
    }
}
