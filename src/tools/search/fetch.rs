use crate::core::error::BoxError;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, CONTENT_TYPE};
use reqwest::StatusCode;
use std::sync::Arc;
use url::Url;

/// A fully-read HTTP response.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl FetchedPage {
    pub fn new(status: StatusCode, headers: HeaderMap, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            headers,
            body: body.into(),
        }
    }

    /// All Content-Type values joined with `", "`; empty when the header is absent.
    pub fn content_type(&self) -> String {
        self.headers
            .get_all(CONTENT_TYPE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Performs the GET for a search. Connection pooling, TLS, redirects and
/// timeouts belong to the implementation.
#[async_trait]
pub trait HttpFetcher: Send + Sync {
    async fn fetch(&self, uri: &Url, headers: HeaderMap) -> Result<FetchedPage, BoxError>;
}

#[async_trait]
impl<T: HttpFetcher + ?Sized> HttpFetcher for Arc<T> {
    async fn fetch(&self, uri: &Url, headers: HeaderMap) -> Result<FetchedPage, BoxError> {
        (**self).fetch(uri, headers).await
    }
}

/// [`HttpFetcher`] over a shared `reqwest::Client`.
#[derive(Debug, Clone, Default)]
pub struct ReqwestFetcher {
    client: reqwest::Client,
}

impl ReqwestFetcher {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }
}

#[async_trait]
impl HttpFetcher for ReqwestFetcher {
    async fn fetch(&self, uri: &Url, headers: HeaderMap) -> Result<FetchedPage, BoxError> {
        let resp = self.client.get(uri.clone()).headers(headers).send().await?;

        let status = resp.status();
        let headers = resp.headers().clone();
        let body = resp.bytes().await?;

        Ok(FetchedPage::new(status, headers, body.to_vec()))
    }
}
