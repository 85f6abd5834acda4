//! Client configuration module / 客户端配置模块
//!
//! Configuration is stored as JSON. `load_config` creates the file with
//! defaults on first use / 首次加载时创建默认配置文件

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use url::Url;

use crate::error::{ClientError, Result};

/// Client configuration / 客户端配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Server base URL / 服务器地址
    #[serde(default = "default_server")]
    pub server: String,
    /// Sent as `X-TYPESENSE-API-KEY` / API 密钥
    #[serde(default)]
    pub api_key: String,
    /// Request timeout in milliseconds, must be non-zero / 请求超时（毫秒）
    #[serde(default = "default_connection_timeout_ms")]
    pub connection_timeout_ms: u64,
}

fn default_server() -> String { "http://localhost:8108".to_string() }
fn default_connection_timeout_ms() -> u64 { 5000 }

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            api_key: String::new(),
            connection_timeout_ms: default_connection_timeout_ms(),
        }
    }
}

impl ClientConfig {
    pub fn connection_timeout(&self) -> Duration {
        Duration::from_millis(self.connection_timeout_ms)
    }

    /// Check the server address and timeout / 校验配置
    pub fn validate(&self) -> Result<()> {
        self.server_url()?;
        if self.connection_timeout_ms == 0 {
            return Err(ClientError::config("connection timeout must be greater than zero"));
        }
        Ok(())
    }

    /// Parse and check the server address / 校验服务器地址
    pub fn server_url(&self) -> Result<Url> {
        let url = Url::parse(self.server.trim())?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(ClientError::config(format!(
                "unsupported scheme '{}' in server address {}",
                other, self.server
            ))),
        }
    }

    /// Get the multi-search endpoint / 获取多重搜索接口地址
    pub fn multi_search_url(&self) -> Result<Url> {
        let mut url = self.server_url()?;
        // keep any path prefix the server is mounted under
        let path = format!("{}/multi_search", url.path().trim_end_matches('/'));
        url.set_path(&path);
        Ok(url)
    }
}

/// Load configuration from file, or create default if not exists / 加载配置文件，不存在则创建默认配置
pub fn load_config(path: impl AsRef<Path>) -> Result<ClientConfig> {
    let path = path.as_ref();

    if path.exists() {
        let content = std::fs::read_to_string(path)?;
        let config: ClientConfig = serde_json::from_str(&content)?;
        config.validate()?;
        tracing::info!("Loaded client configuration from {:?}", path);
        Ok(config)
    } else {
        let config = ClientConfig::default();
        save_config(path, &config)?;
        tracing::info!("Created default client configuration at {:?}", path);
        Ok(config)
    }
}

/// Save configuration to file / 保存配置到文件
pub fn save_config(path: impl AsRef<Path>, config: &ClientConfig) -> Result<()> {
    let content = serde_json::to_string_pretty(config)?;
    std::fs::write(path, content)?;
    Ok(())
}
