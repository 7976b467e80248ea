use async_trait::async_trait;
use reqwest::StatusCode;
use sarvian_common::{Project, ProjectSlug, ProjectSummary};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

use crate::config::app_config::SanityConfig;

const PROJECT_LIST: &str = r#"*[_type == "project" && defined(mainImage)]{
  _id,
  title,
  location,
  "slug": slug.current,
  "imageUrl": mainImage.asset->url
} | order(_createdAt desc)"#;

const PROJECT_BY_SLUG: &str = r#"*[_type == "project" && slug.current == $slug][0]{
  _id,
  title,
  "slug": slug.current,
  location,
  type,
  year,
  size,
  heroImage{alt, asset->{url, metadata{dimensions}}},
  mainImage{alt, asset->{url, metadata{dimensions}}},
  gallery[]{alt, asset->{url, metadata{dimensions}}},
  intro,
  description,
  body
}"#;

const ALL_SLUGS: &str = r#"*[_type == "project" && defined(slug.current)]{ "slug": slug.current }"#;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("content request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("content store answered {0}")]
    Status(StatusCode),
}

/// Read access to published project documents.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContentSource: Send + Sync {
    async fn list_projects(&self) -> Result<Vec<ProjectSummary>, ContentError>;
    async fn project_by_slug(&self, slug: String) -> Result<Option<Project>, ContentError>;
    async fn project_slugs(&self) -> Result<Vec<ProjectSlug>, ContentError>;
}

#[derive(Deserialize)]
struct QueryResponse<T> {
    result: T,
}

pub struct SanityClient {
    http: reqwest::Client,
    query_url: String,
    read_token: Option<String>,
}

impl SanityClient {
    pub fn new(config: &SanityConfig) -> Self {
        let host = if config.use_cdn { "apicdn" } else { "api" };
        let query_url = format!(
            "https://{}.{}.sanity.io/v{}/data/query/{}",
            config.project_id, host, config.api_version, config.dataset
        );
        Self::with_query_url(query_url, config.read_token.clone())
    }

    pub fn with_query_url(query_url: impl Into<String>, read_token: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            query_url: query_url.into(),
            read_token,
        }
    }

    pub fn query_url(&self) -> &str {
        &self.query_url
    }

    /// Params are passed as GROQ `$name` variables, JSON encoded.
    async fn query<T: DeserializeOwned>(
        &self,
        groq: &str,
        params: &[(&str, &str)],
    ) -> Result<T, ContentError> {
        let mut pairs: Vec<(String, String)> = vec![("query".to_string(), groq.to_string())];
        for (name, value) in params {
            pairs.push((format!("${}", name), serde_json::Value::from(*value).to_string()));
        }

        let mut request = self.http.get(&self.query_url).query(&pairs);
        if let Some(token) = &self.read_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(ContentError::Status(response.status()));
        }
        let body = response.json::<QueryResponse<T>>().await?;
        Ok(body.result)
    }
}

#[async_trait]
impl ContentSource for SanityClient {
    async fn list_projects(&self) -> Result<Vec<ProjectSummary>, ContentError> {
        self.query(PROJECT_LIST, &[]).await
    }

    async fn project_by_slug(&self, slug: String) -> Result<Option<Project>, ContentError> {
        self.query(PROJECT_BY_SLUG, &[("slug", &slug)]).await
    }

    async fn project_slugs(&self) -> Result<Vec<ProjectSlug>, ContentError> {
        self.query(ALL_SLUGS, &[]).await
    }
}
