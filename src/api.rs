//! HTTP client for the category/feature catalog API.
//!
//! Two endpoints, both plain GETs returning JSON arrays. The features
//! endpoint returns every feature regardless of category; filtering down to
//! the selected category happens here on the client.

use reqwest::Client;

use crate::error::Result;
use crate::models::{Category, Feature};

/// Default catalog API base URL
pub const DEFAULT_API_BASE: &str = "https://app-cost-calculator-api-backend.vercel.app";

pub struct ApiClient {
    base: String,
    client: Client,
}

impl ApiClient {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into().trim_end_matches('/').to_string();
        Self {
            base,
            client: Client::new(),
        }
    }

    /// GET `<base>/categories/`
    pub async fn fetch_categories(&self) -> Result<Vec<Category>> {
        let url = format!("{}/categories/", self.base);
        tracing::debug!("Fetching categories from {}", url);
        let categories: Vec<Category> = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        tracing::debug!("Loaded {} categories", categories.len());
        Ok(categories)
    }

    /// GET `<base>/features/`, keeping only features of the given category.
    /// The API has no per-category endpoint; it always returns the full list.
    pub async fn fetch_features(&self, category_id: i64) -> Result<Vec<Feature>> {
        let url = format!("{}/features/", self.base);
        tracing::debug!("Fetching features from {} for category {}", url, category_id);
        let features: Vec<Feature> = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        let filtered: Vec<Feature> = features
            .into_iter()
            .filter(|f| f.category == category_id)
            .collect();
        tracing::debug!("Loaded {} features for category {}", filtered.len(), category_id);
        Ok(filtered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn test_fetch_categories_success() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/categories/");
            then.status(200)
                .header("content-type", "application/json")
                .body(r#"[{"id": 1, "name": "Social"}, {"id": 2, "name": "E-commerce"}]"#);
        });

        let client = ApiClient::new(server.base_url());
        let categories = client.fetch_categories().await.unwrap();

        mock.assert();
        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0].name, "Social");
        assert_eq!(categories[1].id, 2);
    }

    #[tokio::test]
    async fn test_fetch_categories_server_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/categories/");
            then.status(500);
        });

        let client = ApiClient::new(server.base_url());
        assert!(client.fetch_categories().await.is_err());
    }

    #[tokio::test]
    async fn test_fetch_features_filters_by_category() {
        let server = MockServer::start();
        // The API returns every feature; the client keeps category 1 only
        server.mock(|when, then| {
            when.method(GET).path("/features/");
            then.status(200)
                .header("content-type", "application/json")
                .body(
                    r#"[
                        {"id": 1, "name": "Login", "category": 1, "hours": 5},
                        {"id": 2, "name": "Chat", "category": 1, "hours": 10},
                        {"id": 3, "name": "Push", "category": 2, "hours": 3}
                    ]"#,
                );
        });

        let client = ApiClient::new(server.base_url());
        let features = client.fetch_features(1).await.unwrap();

        let names: Vec<&str> = features.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["Login", "Chat"]);
    }

    #[tokio::test]
    async fn test_fetch_features_accepts_string_hours() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/features/");
            then.status(200)
                .header("content-type", "application/json")
                .body(r#"[{"id": 1, "name": "Login", "category": 1, "hours": "7.5"}]"#);
        });

        let client = ApiClient::new(server.base_url());
        let features = client.fetch_features(1).await.unwrap();
        assert_eq!(features[0].hours, 7.5);
    }

    #[tokio::test]
    async fn test_fetch_features_unreachable_server() {
        // Nothing listens on this port
        let client = ApiClient::new("http://127.0.0.1:1");
        assert!(client.fetch_features(1).await.is_err());
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = ApiClient::new("http://localhost:8080/");
        assert_eq!(client.base, "http://localhost:8080");
    }
}
