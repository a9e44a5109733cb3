// Configuration type definitions

use serde::Deserialize;

pub const DEFAULT_ENDPOINT: &str = "https://autocomplete.travelpayouts.com/places2";
pub const DEFAULT_LOCALE: &str = "uk";
pub const DEFAULT_MAX_RESULTS: u32 = 10;
pub const DEFAULT_DEBOUNCE_MS: u64 = 200;

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_locale() -> String {
    DEFAULT_LOCALE.to_string()
}

fn default_max_results() -> u32 {
    DEFAULT_MAX_RESULTS
}

fn default_types() -> Vec<String> {
    vec!["city".to_string(), "airport".to_string()]
}

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}

/// Places API configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_locale")]
    pub locale: String,
    #[serde(default = "default_max_results")]
    pub max_results: u32,
    /// Place kinds requested from the API (`types[]` query parameter)
    #[serde(default = "default_types")]
    pub types: Vec<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            endpoint: default_endpoint(),
            locale: default_locale(),
            max_results: default_max_results(),
            types: default_types(),
        }
    }
}

/// Suggestion behaviour section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SuggestConfig {
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        SuggestConfig {
            debounce_ms: default_debounce_ms(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub suggest: SuggestConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.api.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.api.locale, "uk");
        assert_eq!(config.api.max_results, 10);
        assert_eq!(config.api.types, vec!["city", "airport"]);
        assert_eq!(config.suggest.debounce_ms, 200);
    }

    #[test]
    fn test_partial_api_section_keeps_other_defaults() {
        let config: Config = toml::from_str(
            r#"
[api]
locale = "en"
"#,
        )
        .unwrap();
        assert_eq!(config.api.locale, "en");
        assert_eq!(config.api.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.api.max_results, DEFAULT_MAX_RESULTS);
    }

    #[test]
    fn test_wrong_type_is_rejected() {
        let config: Result<Config, _> = toml::from_str(
            r#"
[suggest]
debounce_ms = "fast"
"#,
        );
        assert!(config.is_err());
    }

    // Any debounce delay written to the file is read back unchanged
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_debounce_parsing(debounce_ms in 0u64..10_000u64) {
            let toml_content = format!("[suggest]\ndebounce_ms = {}\n", debounce_ms);

            let config: Result<Config, _> = toml::from_str(&toml_content);
            prop_assert!(config.is_ok(), "Failed to parse debounce_ms: {}", debounce_ms);

            let config = config.unwrap();
            prop_assert_eq!(config.suggest.debounce_ms, debounce_ms);
            prop_assert_eq!(config.api, ApiConfig::default());
        }
    }
}
