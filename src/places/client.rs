use reqwest::Url;

use super::item::{SuggestionItem, parse_places};
use crate::config::ApiConfig;
use crate::error::SuggestError;

/// HTTP client for the places search endpoint
#[derive(Debug, Clone)]
pub struct PlacesClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl PlacesClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }

    /// Query parameters for a search, in the order they are sent
    pub fn query_params(&self, term: &str) -> Vec<(&'static str, String)> {
        let mut params = vec![("term", term.to_string())];
        for place_type in &self.config.types {
            params.push(("types[]", place_type.clone()));
        }
        params.push(("max", self.config.max_results.to_string()));
        params.push(("locale", self.config.locale.clone()));
        params
    }

    /// Full request URL, used when reporting failures
    pub fn request_url(&self, term: &str) -> String {
        Url::parse_with_params(&self.config.endpoint, self.query_params(term))
            .map(|url| url.to_string())
            .unwrap_or_else(|_| self.config.endpoint.clone())
    }

    /// Search for places matching `term`
    pub async fn search(&self, term: &str) -> Result<Vec<SuggestionItem>, SuggestError> {
        let response = self
            .http
            .get(&self.config.endpoint)
            .query(&self.query_params(term))
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        parse_places(&body)
    }
}
