//! Client facade / 客户端入口

use std::sync::Arc;
use std::time::Duration;

use crate::api::{ApiClient, HttpApiClient};
use crate::config::ClientConfig;
use crate::error::Result;
use crate::multi_search::MultiSearch;

/// Search server client / 搜索服务客户端
#[derive(Clone)]
pub struct Client {
    multi_search: MultiSearch,
}

impl Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Build an HTTP client from a configuration / 从配置创建客户端
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        Self::builder().config(config).build()
    }

    pub fn multi_search(&self) -> &MultiSearch {
        &self.multi_search
    }
}

#[derive(Default)]
pub struct ClientBuilder {
    config: ClientConfig,
    api_client: Option<Arc<dyn ApiClient>>,
}

impl ClientBuilder {
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    pub fn server(mut self, val: &str) -> Self {
        self.config.server = val.to_string();
        self
    }

    pub fn api_key(mut self, val: &str) -> Self {
        self.config.api_key = val.to_string();
        self
    }

    /// Whole-request timeout, kept at millisecond precision / 请求超时
    pub fn connection_timeout(mut self, timeout: Duration) -> Self {
        self.config.connection_timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Use a custom transport instead of HTTP, server settings are then ignored / 使用自定义传输
    pub fn api_client(mut self, api_client: Arc<dyn ApiClient>) -> Self {
        self.api_client = Some(api_client);
        self
    }

    pub fn build(self) -> Result<Client> {
        let api_client: Arc<dyn ApiClient> = match self.api_client {
            Some(api_client) => api_client,
            None => Arc::new(HttpApiClient::new(&self.config)?),
        };

        Ok(Client {
            multi_search: MultiSearch::new(api_client),
        })
    }
}
