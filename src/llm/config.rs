//! LLM transport configuration: the config file merged with environment overrides.

use super::types::LlmError;
use crate::config::{Config, ProviderKind};
use crate::consts::cli_consts::llm::{
    DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL,
    DEFAULT_OPENAI_BASE_URL, DEFAULT_OPENAI_MODEL, DEFAULT_REQUEST_TIMEOUT_SECS,
};

pub const ENV_PROVIDER: &str = "MARKETMIND_PROVIDER";
pub const ENV_MODEL: &str = "MARKETMIND_MODEL";
pub const ENV_API_KEY_ENV: &str = "MARKETMIND_API_KEY_ENV";
pub const ENV_BASE_URL: &str = "MARKETMIND_BASE_URL";
pub const ENV_REQUEST_TIMEOUT: &str = "MARKETMIND_REQUEST_TIMEOUT_SECS";
pub const ENV_CONNECT_TIMEOUT: &str = "MARKETMIND_CONNECT_TIMEOUT_SECS";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LlmTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl Default for LlmTimeouts {
    fn default() -> Self {
        Self {
            request_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
        }
    }
}

/// The transport a live provider is reached through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LlmProviderKind {
    Gemini,
    OpenAi,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LlmConfig {
    pub provider: LlmProviderKind,
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeouts: LlmTimeouts,
}

/// Provider selected after applying `MARKETMIND_PROVIDER` on top of the file.
///
/// # Errors
/// Returns `LlmError::ConfigParse` for an unknown provider name.
pub fn effective_provider(
    file: &Config,
    lookup: &dyn Fn(&str) -> Option<String>,
) -> Result<ProviderKind, LlmError> {
    match lookup(ENV_PROVIDER) {
        Some(raw) => raw
            .parse::<ProviderKind>()
            .map_err(|_| LlmError::ConfigParse(format!("unknown {ENV_PROVIDER}: {raw}"))),
        None => Ok(file.provider),
    }
}

impl LlmConfig {
    /// Resolve a live provider config from the process environment.
    ///
    /// # Errors
    /// See [`LlmConfig::resolve`].
    pub fn from_env(file: &Config) -> Result<Self, LlmError> {
        Self::resolve(file, &|key| std::env::var(key).ok())
    }

    /// Resolve a live provider config from the config file plus overrides.
    ///
    /// Overrides (all optional):
    /// - `MARKETMIND_PROVIDER`: `gemini`, `openai` or `demo`
    /// - `MARKETMIND_MODEL`: provider default when absent
    /// - `MARKETMIND_API_KEY_ENV`: names the env var holding the key
    /// - `MARKETMIND_BASE_URL`: custom endpoint for compatible APIs
    /// - `MARKETMIND_REQUEST_TIMEOUT_SECS` / `MARKETMIND_CONNECT_TIMEOUT_SECS`
    ///
    /// # Errors
    /// Fails when the provider is unknown or `demo`, or when the API key is missing.
    pub fn resolve(
        file: &Config,
        lookup: &dyn Fn(&str) -> Option<String>,
    ) -> Result<Self, LlmError> {
        let provider = match effective_provider(file, lookup)? {
            ProviderKind::Gemini => LlmProviderKind::Gemini,
            ProviderKind::OpenAi => LlmProviderKind::OpenAi,
            ProviderKind::Demo => {
                return Err(LlmError::ConfigParse(
                    "the demo provider does not use an LLM transport".to_string(),
                ));
            }
        };

        let key_var = lookup(ENV_API_KEY_ENV)
            .or_else(|| file.api_key_env.clone())
            .unwrap_or_else(|| default_api_key_env(provider).to_string());
        let api_key = lookup(&key_var)
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| LlmError::MissingApiKey {
                var: key_var.clone(),
            })?;

        let model = lookup(ENV_MODEL)
            .or_else(|| file.model.clone())
            .unwrap_or_else(|| default_model(provider).to_string());
        let base_url = lookup(ENV_BASE_URL)
            .or_else(|| file.base_url.clone())
            .unwrap_or_else(|| default_base_url(provider).to_string())
            .trim_end_matches('/')
            .to_string();
        let timeouts = LlmTimeouts {
            request_secs: parse_secs(
                lookup(ENV_REQUEST_TIMEOUT),
                file.request_timeout_secs,
                DEFAULT_REQUEST_TIMEOUT_SECS,
            ),
            connect_secs: parse_secs(
                lookup(ENV_CONNECT_TIMEOUT),
                None,
                DEFAULT_CONNECT_TIMEOUT_SECS,
            ),
        };

        Ok(Self {
            provider,
            api_key,
            model,
            base_url,
            timeouts,
        })
    }
}

fn parse_secs(raw: Option<String>, file_value: Option<u64>, default: u64) -> u64 {
    raw.and_then(|v| v.parse::<u64>().ok())
        .or(file_value)
        .unwrap_or(default)
}

pub fn default_api_key_env(provider: LlmProviderKind) -> &'static str {
    match provider {
        LlmProviderKind::Gemini => "GEMINI_API_KEY",
        LlmProviderKind::OpenAi => "OPENAI_API_KEY",
    }
}

pub fn default_model(provider: LlmProviderKind) -> &'static str {
    match provider {
        LlmProviderKind::Gemini => DEFAULT_GEMINI_MODEL,
        LlmProviderKind::OpenAi => DEFAULT_OPENAI_MODEL,
    }
}

pub fn default_base_url(provider: LlmProviderKind) -> &'static str {
    match provider {
        LlmProviderKind::Gemini => DEFAULT_GEMINI_BASE_URL,
        LlmProviderKind::OpenAi => DEFAULT_OPENAI_BASE_URL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn resolve_with(file: &Config, vars: &HashMap<String, String>) -> Result<LlmConfig, LlmError> {
        LlmConfig::resolve(file, &|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_to_gemini() {
        let vars = env(&[("GEMINI_API_KEY", "secret")]);
        let cfg = resolve_with(&Config::default(), &vars).unwrap();

        assert_eq!(cfg.provider, LlmProviderKind::Gemini);
        assert_eq!(cfg.model, DEFAULT_GEMINI_MODEL);
        assert_eq!(cfg.base_url, DEFAULT_GEMINI_BASE_URL);
        assert_eq!(cfg.api_key, "secret");
        assert_eq!(cfg.timeouts, LlmTimeouts::default());
    }

    #[test]
    fn test_env_overrides_file() {
        let file = Config {
            provider: ProviderKind::Gemini,
            model: Some("gemini-from-file".to_string()),
            ..Config::default()
        };
        let vars = env(&[
            (ENV_PROVIDER, "openai"),
            (ENV_API_KEY_ENV, "TEAM_KEY"),
            ("TEAM_KEY", "sk-test"),
            (ENV_MODEL, "gpt-4o-mini"),
            (ENV_BASE_URL, "https://llm.example.test/v1/"),
            (ENV_REQUEST_TIMEOUT, "42"),
            (ENV_CONNECT_TIMEOUT, "7"),
        ]);

        let cfg = resolve_with(&file, &vars).unwrap();
        assert_eq!(cfg.provider, LlmProviderKind::OpenAi);
        assert_eq!(cfg.api_key, "sk-test");
        assert_eq!(cfg.model, "gpt-4o-mini");
        assert_eq!(cfg.base_url, "https://llm.example.test/v1");
        assert_eq!(
            cfg.timeouts,
            LlmTimeouts {
                request_secs: 42,
                connect_secs: 7
            }
        );
    }

    #[test]
    fn test_file_values_apply_without_env() {
        let file = Config {
            provider: ProviderKind::OpenAi,
            model: Some("gpt-4.1".to_string()),
            api_key_env: Some("MY_KEY".to_string()),
            request_timeout_secs: Some(30),
            ..Config::default()
        };
        let vars = env(&[("MY_KEY", "k")]);

        let cfg = resolve_with(&file, &vars).unwrap();
        assert_eq!(cfg.model, "gpt-4.1");
        assert_eq!(cfg.timeouts.request_secs, 30);
        assert_eq!(cfg.base_url, DEFAULT_OPENAI_BASE_URL);
    }

    #[test]
    fn test_missing_key_names_the_variable() {
        let err = resolve_with(&Config::default(), &HashMap::new()).unwrap_err();
        assert!(matches!(err, LlmError::MissingApiKey { ref var } if var == "GEMINI_API_KEY"));
    }

    #[test]
    fn test_blank_key_counts_as_missing() {
        let vars = env(&[("GEMINI_API_KEY", "  ")]);
        assert!(resolve_with(&Config::default(), &vars).is_err());
    }

    #[test]
    fn test_unknown_provider_is_rejected() {
        let vars = env(&[(ENV_PROVIDER, "palm")]);
        assert!(matches!(
            resolve_with(&Config::default(), &vars),
            Err(LlmError::ConfigParse(_))
        ));
    }

    #[test]
    fn test_demo_provider_has_no_transport() {
        let vars = env(&[(ENV_PROVIDER, "demo")]);
        assert_eq!(
            effective_provider(&Config::default(), &|key| vars.get(key).cloned()).unwrap(),
            ProviderKind::Demo
        );
        assert!(resolve_with(&Config::default(), &vars).is_err());
    }
}
