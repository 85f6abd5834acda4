//! reqwest-backed HTTP transport / 基于 reqwest 的 HTTP 传输

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use url::Url;

use super::{ApiClient, MultiSearchParams, MultiSearchResponse, MultiSearchResult, MultiSearchSearchesParameter};
use crate::config::ClientConfig;

pub const API_KEY_HEADER: &str = "X-TYPESENSE-API-KEY";

/// HTTP API client / HTTP API 客户端
pub struct HttpApiClient {
    client: Client,
    multi_search_url: Url,
    api_key: String,
}

impl HttpApiClient {
    pub fn new(config: &ClientConfig) -> crate::error::Result<Self> {
        config.validate()?;

        let client = Client::builder()
            .timeout(config.connection_timeout())
            .build()
            .map_err(|e| crate::error::ClientError::config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            multi_search_url: config.multi_search_url()?,
            api_key: config.api_key.clone(),
        })
    }
}

#[async_trait]
impl ApiClient for HttpApiClient {
    async fn multi_search_with_response(
        &self,
        params: &MultiSearchParams,
        body: &MultiSearchSearchesParameter,
    ) -> Result<MultiSearchResponse> {
        let resp = self.client
            .post(self.multi_search_url.clone())
            .header(API_KEY_HEADER, &self.api_key)
            .query(&params.to_query_pairs())
            .json(body)
            .send()
            .await
            .context("multi_search request failed")?;

        let status = resp.status();
        let body = resp.bytes().await.context("Failed to read multi_search response")?;

        let json_200 = if status == StatusCode::OK {
            let result: MultiSearchResult = serde_json::from_slice(&body)
                .with_context(|| format!(
                    "Failed to parse multi_search response: {}",
                    String::from_utf8_lossy(&body[..body.len().min(200)])
                ))?;
            Some(result)
        } else {
            None
        };

        Ok(MultiSearchResponse { status, body, json_200 })
    }
}
