use async_trait::async_trait;
use reqwest::{header::AUTHORIZATION, Client, Method, Response};
use serde::{de::DeserializeOwned, Deserialize};
use shared::{PageId, PageSummary};
use tracing::debug;
use url::Url;

use crate::config::ApiConfig;
use crate::error::{PageApiError, Result};
use crate::traits::PageBackend;

/// REST adapter for the page backend.
#[derive(Debug, Clone)]
pub struct PageApiClient {
    base_url: Url,
    page_path: String,
    page_user_path: String,
    leave_path: String,
    client: Client,
}

#[derive(Default)]
pub struct PageApiClientBuilder {
    base_url: Option<String>,
    config: Option<ApiConfig>,
}

impl PageApiClientBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn config(mut self, config: ApiConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Overrides the configured base URL.
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = Some(url.to_string());
        self
    }

    pub fn build(self) -> Result<PageApiClient> {
        let config = self.config.unwrap_or_default();
        let base_url_str = self.base_url.unwrap_or_else(|| config.base_url.clone());
        if base_url_str.trim().is_empty() {
            return Err(PageApiError::NotConfigured);
        }
        let base_url = Url::parse(base_url_str.trim().trim_end_matches('/'))?;

        Ok(PageApiClient {
            base_url,
            page_path: config.page_path(),
            page_user_path: config.page_user_path(),
            leave_path: config.leave_path(),
            client: Client::new(),
        })
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl PageApiClient {
    pub fn builder() -> PageApiClientBuilder {
        PageApiClientBuilder::new()
    }

    /// Resolves an absolute path against the base URL, keeping any path
    /// prefix the base URL carries.
    fn endpoint(&self, path: &str) -> Result<Url> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{base}{path}"))?)
    }

    async fn send(&self, method: Method, path: &str, token: Option<&str>) -> Result<Response> {
        let url = self.endpoint(path)?;
        debug!("Request: {} {}", method, url);
        let mut request = self.client.request(method, url);
        if let Some(token) = token {
            request = request.header(AUTHORIZATION, token);
        }
        let response = request.send().await?;
        Self::check_status(response).await
    }

    async fn make_request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        token: Option<&str>,
    ) -> Result<T> {
        let response = self.send(method, path, token).await?;
        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }

    async fn check_status(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let text = response.text().await.unwrap_or_default();
        Err(PageApiError::Api {
            status: status.as_u16(),
            message: error_message(&text, status.canonical_reason()),
        })
    }
}

/// Prefers the JSON `message` field, then the raw body, then the status reason.
fn error_message(body: &str, reason: Option<&str>) -> String {
    if let Ok(ErrorBody { message: Some(m) }) = serde_json::from_str::<ErrorBody>(body) {
        return m;
    }
    let body = body.trim();
    if !body.is_empty() {
        return body.to_string();
    }
    reason.unwrap_or("Unknown error").to_string()
}

#[async_trait(?Send)]
impl PageBackend for PageApiClient {
    async fn leave_page(&self, page_id: PageId, token: Option<&str>) -> Result<()> {
        let path = format!("{}/{}", self.leave_path, page_id);
        self.send(Method::DELETE, &path, token).await?;
        Ok(())
    }

    async fn delete_page(&self, page_id: PageId, token: Option<&str>) -> Result<()> {
        let path = format!("{}/{}", self.page_path, page_id);
        self.send(Method::DELETE, &path, token).await?;
        Ok(())
    }

    async fn list_pages(&self, token: Option<&str>) -> Result<Vec<PageSummary>> {
        self.make_request(Method::GET, &self.page_user_path, token)
            .await
    }
}
