//! Configuration loader with environment variable expansion
//!
//! Loads configuration from `.translumen.toml` in the working directory or the
//! user config directory.

use super::types::TranslumenConfig;
use crate::language::Language;
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Configuration loading error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid language code in {var}: {value}")]
    InvalidLanguage { var: String, value: String },
}

static ENV_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("Failed to compile env var regex"));

/// Load configuration from various sources
///
/// Priority order:
/// 1. Project-level `.translumen.toml`
/// 2. User-level `~/.config/translumen/config.toml`
/// 3. Default configuration
///
/// Environment overrides are applied on top in every case.
pub fn load_config(project_dir: &Path) -> Result<TranslumenConfig, ConfigError> {
    let project_config = project_dir.join(".translumen.toml");
    if project_config.exists() {
        tracing::debug!(path = %project_config.display(), "loading project config");
        return load_from_file(&project_config);
    }

    if let Some(user_config) = user_config_path() {
        if user_config.exists() {
            tracing::debug!(path = %user_config.display(), "loading user config");
            return load_from_file(&user_config);
        }
    }

    apply_env_overrides(TranslumenConfig::default())
}

/// User config file path
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("translumen").join("config.toml"))
}

/// Load configuration from a specific file
pub fn load_from_file(path: &Path) -> Result<TranslumenConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parse configuration text, expand variables and apply overrides
pub fn parse_config(content: &str) -> Result<TranslumenConfig, ConfigError> {
    let mut config: TranslumenConfig = toml::from_str(content)?;
    expand_env_vars(&mut config);
    apply_env_overrides(config)
}

/// Expand ${VAR} patterns in string values
fn expand_env_vars(config: &mut TranslumenConfig) {
    if let Some(ref api_key) = config.api.api_key {
        config.api.api_key = Some(expand_string(api_key));
    }
    config.api.base_url = expand_string(&config.api.base_url);
}

/// Expand environment variables in a single string
fn expand_string(s: &str) -> String {
    ENV_REGEX
        .replace_all(s, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
}

/// Apply environment variable overrides for common settings
///
/// Supports:
/// - ANTHROPIC_API_KEY -> api.api_key
/// - TRANSLUMEN_MODEL -> api.model
/// - TRANSLUMEN_BASE_URL -> api.base_url
/// - TRANSLUMEN_TARGET -> ui.default_target
fn apply_env_overrides(mut config: TranslumenConfig) -> Result<TranslumenConfig, ConfigError> {
    if let Some(key) = non_empty_var("ANTHROPIC_API_KEY") {
        config.api.api_key = Some(key);
    }

    if let Some(model) = non_empty_var("TRANSLUMEN_MODEL") {
        config.api.model = model;
    }

    if let Some(url) = non_empty_var("TRANSLUMEN_BASE_URL") {
        config.api.base_url = url;
    }

    if let Some(code) = non_empty_var("TRANSLUMEN_TARGET") {
        config.ui.default_target = Language::from_code(&code)
            .filter(Language::is_target)
            .ok_or_else(|| ConfigError::InvalidLanguage {
                var: "TRANSLUMEN_TARGET".to_string(),
                value: code,
            })?;
    }

    Ok(config)
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

/// Create a sample configuration file content
pub fn sample_config() -> &'static str {
    r#"# TransLumen Configuration
# Place this file in your working directory as .translumen.toml
# or in ~/.config/translumen/config.toml for global settings

[api]
api_key = "${ANTHROPIC_API_KEY}"
model = "claude-sonnet-4-20250514"
text_max_tokens = 4000
document_max_tokens = 16000

# Request timeout in seconds
timeout = 300

[ui]
default_source = "auto"
default_target = "id"
# output_dir = "/home/me/translations"
"#
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::{ClaudeTranslator, LlmError, TranslationRequest, Translator};
    use parking_lot::{Mutex, MutexGuard};
    use pretty_assertions::assert_eq;

    const OVERRIDE_VARS: [&str; 4] = [
        "ANTHROPIC_API_KEY",
        "TRANSLUMEN_MODEL",
        "TRANSLUMEN_BASE_URL",
        "TRANSLUMEN_TARGET",
    ];

    static ENV_LOCK: Mutex<()> = parking_lot::const_mutex(());

    /// Clears the override variables for one test and restores them after
    struct CleanEnv {
        saved: Vec<(&'static str, Option<String>)>,
        _lock: MutexGuard<'static, ()>,
    }

    impl CleanEnv {
        fn new() -> Self {
            let lock = ENV_LOCK.lock();
            let saved = OVERRIDE_VARS
                .iter()
                .map(|&name| (name, std::env::var(name).ok()))
                .collect();
            for name in OVERRIDE_VARS {
                std::env::remove_var(name);
            }
            Self { saved, _lock: lock }
        }
    }

    impl Drop for CleanEnv {
        fn drop(&mut self) {
            for (name, value) in &self.saved {
                match value {
                    Some(v) => std::env::set_var(name, v),
                    None => std::env::remove_var(name),
                }
            }
        }
    }

    #[test]
    fn test_default_config() {
        let config = TranslumenConfig::default();
        assert_eq!(config.api.model, "claude-sonnet-4-20250514");
        assert_eq!(config.api.text_max_tokens, 4000);
        assert_eq!(config.api.document_max_tokens, 16000);
        assert_eq!(config.ui.default_source, Language::Auto);
        assert_eq!(config.ui.default_target, Language::Id);
    }

    #[test]
    fn test_sample_config_parses() {
        let config: TranslumenConfig = toml::from_str(sample_config()).unwrap();
        assert_eq!(config.api.timeout, 300);
        assert_eq!(config.ui.default_target, Language::Id);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: TranslumenConfig = toml::from_str("[ui]\ndefault_target = \"fr\"\n").unwrap();
        assert_eq!(config.ui.default_target, Language::Fr);
        assert_eq!(config.api.base_url, "https://api.anthropic.com");
    }

    #[test]
    fn test_expand_env_var() {
        std::env::set_var("TRANSLUMEN_TEST_VAR", "test_value");
        let result = expand_string("prefix_${TRANSLUMEN_TEST_VAR}_suffix");
        assert_eq!(result, "prefix_test_value_suffix");
        std::env::remove_var("TRANSLUMEN_TEST_VAR");
    }

    #[test]
    fn test_missing_env_var() {
        let result = expand_string("${TRANSLUMEN_NONEXISTENT_VAR}");
        assert_eq!(result, "${TRANSLUMEN_NONEXISTENT_VAR}");
    }

    #[test]
    fn test_unexpanded_key_is_not_a_key() {
        let mut config = TranslumenConfig::default();
        config.api.api_key = Some("${TRANSLUMEN_NONEXISTENT_VAR}".to_string());
        assert!(!config.has_api_key());
        config.api.api_key = Some("sk-ant-123".to_string());
        assert!(config.has_api_key());
    }

    #[test]
    fn test_load_from_file() {
        let _env = CleanEnv::new();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".translumen.toml");
        std::fs::write(&path, "[api]\nmodel = \"claude-opus-4-20250514\"\n").unwrap();
        let config = load_config(dir.path()).unwrap();
        assert_eq!(config.api.model, "claude-opus-4-20250514");
    }

    #[test]
    fn test_placeholder_key_with_variable_unset() {
        let _env = CleanEnv::new();
        let config = parse_config("[api]\napi_key = \"${ANTHROPIC_API_KEY}\"\n").unwrap();
        assert_eq!(config.api.api_key.as_deref(), Some("${ANTHROPIC_API_KEY}"));
        assert!(!config.has_api_key());

        let translator =
            ClaudeTranslator::from_config(&config.api).with_base_url("http://127.0.0.1:9");
        assert!(!translator.status().is_ready());
        let err = translator
            .translate(&TranslationRequest::Text {
                prompt: "hi".to_string(),
            })
            .unwrap_err();
        assert!(matches!(err, LlmError::ProviderUnavailable(_)));
    }

    #[test]
    fn test_placeholder_key_with_variable_set() {
        let _env = CleanEnv::new();
        std::env::set_var("ANTHROPIC_API_KEY", "sk-ant-from-env");
        let config = parse_config("[api]\napi_key = \"${ANTHROPIC_API_KEY}\"\n").unwrap();
        assert_eq!(config.api.api_key.as_deref(), Some("sk-ant-from-env"));
        assert!(config.has_api_key());
        assert!(ClaudeTranslator::from_config(&config.api).status().is_ready());
    }

    #[test]
    fn test_env_overrides_win_over_file() {
        let _env = CleanEnv::new();
        std::env::set_var("ANTHROPIC_API_KEY", "sk-ant-override");
        std::env::set_var("TRANSLUMEN_MODEL", "claude-opus-4-20250514");
        std::env::set_var("TRANSLUMEN_BASE_URL", "http://proxy.local");

        let config = parse_config(
            "[api]\napi_key = \"sk-ant-file\"\nmodel = \"m\"\nbase_url = \"http://file.local\"\n",
        )
        .unwrap();
        assert_eq!(config.api.api_key.as_deref(), Some("sk-ant-override"));
        assert_eq!(config.api.model, "claude-opus-4-20250514");
        assert_eq!(config.api.base_url, "http://proxy.local");
    }

    #[test]
    fn test_env_overrides_apply_to_defaults() {
        let _env = CleanEnv::new();
        let config = parse_config("").unwrap();
        assert!(!config.has_api_key());

        std::env::set_var("ANTHROPIC_API_KEY", "sk-ant-env");
        let config = parse_config("").unwrap();
        assert!(config.has_api_key());
        assert_eq!(config.api.model, "claude-sonnet-4-20250514");
    }

    #[test]
    fn test_empty_override_is_ignored() {
        let _env = CleanEnv::new();
        std::env::set_var("TRANSLUMEN_MODEL", "");
        let config = parse_config("[api]\nmodel = \"m\"\n").unwrap();
        assert_eq!(config.api.model, "m");
    }

    #[test]
    fn test_invalid_target_override() {
        let _env = CleanEnv::new();
        std::env::set_var("TRANSLUMEN_TARGET", "auto");
        assert!(matches!(
            parse_config(""),
            Err(ConfigError::InvalidLanguage { .. })
        ));
    }

    #[test]
    fn test_invalid_toml() {
        let _env = CleanEnv::new();
        assert!(matches!(
            parse_config("[api\nmodel ="),
            Err(ConfigError::ParseError(_))
        ));
    }
}
