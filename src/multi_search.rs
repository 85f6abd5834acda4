//! Multi-search: several searches in one round trip / 多重搜索
//!
//! `perform` forwards the parameters to the [`ApiClient`] once and maps the
//! outcome. Results come back in the order the searches were given; nothing
//! here reorders, retries or caches.

use std::sync::Arc;

use crate::api::{ApiClient, MultiSearchParams, MultiSearchResult, MultiSearchSearchesParameter};
use crate::error::{ClientError, Result};

#[derive(Clone)]
pub struct MultiSearch {
    api_client: Arc<dyn ApiClient>,
}

impl MultiSearch {
    pub fn new(api_client: Arc<dyn ApiClient>) -> Self {
        Self { api_client }
    }

    /// Run every search in `body`, with `params` applied to all of them / 执行多重搜索
    pub async fn perform(
        &self,
        params: &MultiSearchParams,
        body: &MultiSearchSearchesParameter,
    ) -> Result<MultiSearchResult> {
        tracing::debug!("Performing multi_search with {} searches", body.searches.len());

        let response = match self.api_client.multi_search_with_response(params, body).await {
            Ok(resp) => resp,
            Err(e) => {
                tracing::error!("multi_search request failed: {:#}", e);
                return Err(ClientError::Transport(e));
            }
        };

        match response.json_200 {
            Some(result) if response.status.is_success() => Ok(result),
            _ => {
                tracing::warn!("multi_search returned status {}", response.status);
                Err(ClientError::HttpStatus {
                    status: response.status.as_u16(),
                    body: response.body,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{
        MaxHits, MultiSearchCollectionParameters, MultiSearchResponse, SearchHighlight, SearchResult,
        SearchResultHit,
    };
    use anyhow::anyhow;
    use async_trait::async_trait;
    use bytes::Bytes;
    use parking_lot::Mutex;
    use reqwest::StatusCode;
    use serde_json::json;

    /// Replays one canned outcome and records every call
    struct FakeApiClient {
        outcome: Mutex<Option<anyhow::Result<MultiSearchResponse>>>,
        calls: Mutex<Vec<(MultiSearchParams, MultiSearchSearchesParameter)>>,
    }

    impl FakeApiClient {
        fn new(outcome: anyhow::Result<MultiSearchResponse>) -> Arc<Self> {
            Arc::new(Self {
                outcome: Mutex::new(Some(outcome)),
                calls: Mutex::new(Vec::new()),
            })
        }

        fn assert_called_once_with(&self, params: &MultiSearchParams, body: &MultiSearchSearchesParameter) {
            let calls = self.calls.lock();
            assert_eq!(calls.len(), 1);
            assert_eq!(&calls[0].0, params);
            assert_eq!(&calls[0].1, body);
        }
    }

    #[async_trait]
    impl ApiClient for FakeApiClient {
        async fn multi_search_with_response(
            &self,
            params: &MultiSearchParams,
            body: &MultiSearchSearchesParameter,
        ) -> anyhow::Result<MultiSearchResponse> {
            self.calls.lock().push((params.clone(), body.clone()));
            self.outcome
                .lock()
                .take()
                .unwrap_or_else(|| Err(anyhow!("unexpected call")))
        }
    }

    fn new_multi_search_params() -> MultiSearchParams {
        MultiSearchParams {
            q: Some("text".to_string()),
            query_by: Some("company_name".to_string()),
            max_hits: Some(MaxHits::All),
            prefix: Some("true".to_string()),
            filter_by: Some("num_employees:=100".to_string()),
            sort_by: Some("num_employees:desc".to_string()),
            facet_by: Some("year_started".to_string()),
            max_facet_values: Some(10),
            facet_query: Some("facetQuery".to_string()),
            num_typos: Some(2),
            page: Some(1),
            per_page: Some(10),
            group_by: Some("country".to_string()),
            group_limit: Some(3),
            include_fields: Some("company_name".to_string()),
        }
    }

    fn new_multi_search_body() -> MultiSearchSearchesParameter {
        MultiSearchSearchesParameter {
            searches: vec![
                MultiSearchCollectionParameters::new("companies", "text", "company_name"),
                MultiSearchCollectionParameters::new("companies", "text", "company_name"),
            ],
        }
    }

    fn new_search_result() -> SearchResult {
        SearchResult {
            facet_counts: Some(vec![]),
            found: Some(1),
            out_of: None,
            page: None,
            search_time_ms: Some(1),
            hits: Some(vec![SearchResultHit {
                highlights: Some(vec![SearchHighlight {
                    field: Some("company_name".to_string()),
                    snippet: Some("<mark>Stark</mark> Industries".to_string()),
                    matched_tokens: Some(vec![json!("Stark")]),
                }]),
                document: json!({
                    "id": "124",
                    "company_name": "Stark Industries",
                    "num_employees": 5215,
                    "country": "USA"
                })
                .as_object()
                .cloned(),
                text_match: None,
            }]),
        }
    }

    fn new_multi_search_result() -> MultiSearchResult {
        MultiSearchResult {
            results: vec![new_search_result(), new_search_result()],
        }
    }

    #[tokio::test]
    async fn test_multi_search() {
        let api = FakeApiClient::new(Ok(MultiSearchResponse::ok(new_multi_search_result())));
        let multi_search = MultiSearch::new(api.clone());

        let result = multi_search
            .perform(&new_multi_search_params(), &new_multi_search_body())
            .await
            .unwrap();

        assert_eq!(result, new_multi_search_result());
        api.assert_called_once_with(&new_multi_search_params(), &new_multi_search_body());
    }

    #[tokio::test]
    async fn test_multi_search_on_http_status_error() {
        let api = FakeApiClient::new(Ok(MultiSearchResponse {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: Bytes::from_static(b"Internal Server error"),
            json_200: None,
        }));
        let multi_search = MultiSearch::new(api.clone());

        let err = multi_search
            .perform(&new_multi_search_params(), &new_multi_search_body())
            .await
            .unwrap_err();

        match err {
            ClientError::HttpStatus { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(&body[..], b"Internal Server error");
            }
            other => panic!("unexpected error: {}", other),
        }
        api.assert_called_once_with(&new_multi_search_params(), &new_multi_search_body());
    }

    #[tokio::test]
    async fn test_multi_search_on_api_client_error() {
        let api = FakeApiClient::new(Err(anyhow!("failed request")));
        let multi_search = MultiSearch::new(api.clone());

        let err = multi_search
            .perform(&new_multi_search_params(), &new_multi_search_body())
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::Transport(_)));
        assert!(err.to_string().contains("failed request"));
        api.assert_called_once_with(&new_multi_search_params(), &new_multi_search_body());
    }

    #[tokio::test]
    async fn test_multi_search_success_status_without_body() {
        let api = FakeApiClient::new(Ok(MultiSearchResponse {
            status: StatusCode::OK,
            body: Bytes::new(),
            json_200: None,
        }));
        let err = MultiSearch::new(api)
            .perform(&MultiSearchParams::default(), &new_multi_search_body())
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(200));
    }

    #[tokio::test]
    async fn test_multi_search_empty_batch() {
        let api = FakeApiClient::new(Ok(MultiSearchResponse::ok(MultiSearchResult::default())));
        let multi_search = MultiSearch::new(api.clone());

        let result = multi_search
            .perform(&MultiSearchParams::default(), &MultiSearchSearchesParameter::default())
            .await
            .unwrap();

        assert!(result.results.is_empty());
        api.assert_called_once_with(&MultiSearchParams::default(), &MultiSearchSearchesParameter::default());
    }
}
