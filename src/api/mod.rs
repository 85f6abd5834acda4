//! Typed bindings for the search server HTTP API / 搜索服务 HTTP API 绑定
//!
//! The rest of the crate talks to the server only through [`ApiClient`],
//! so tests can swap the HTTP transport for a fake one.

pub mod client;
pub mod types;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::StatusCode;

pub use client::HttpApiClient;
pub use types::*;

/// Raw multi-search response / 多重搜索原始响应
#[derive(Debug, Clone)]
pub struct MultiSearchResponse {
    pub status: StatusCode,
    pub body: Bytes,
    /// Decoded body, only present for `200 OK` / 仅在 200 时解析
    pub json_200: Option<MultiSearchResult>,
}

impl MultiSearchResponse {
    pub fn ok(result: MultiSearchResult) -> Self {
        Self {
            status: StatusCode::OK,
            body: Bytes::new(),
            json_200: Some(result),
        }
    }

    pub fn status_code(&self) -> u16 {
        self.status.as_u16()
    }
}

/// HTTP transport capability / HTTP 传输接口
#[async_trait]
pub trait ApiClient: Send + Sync {
    /// `POST /multi_search` with `params` in the query string and `body` as JSON
    async fn multi_search_with_response(
        &self,
        params: &MultiSearchParams,
        body: &MultiSearchSearchesParameter,
    ) -> anyhow::Result<MultiSearchResponse>;
}
