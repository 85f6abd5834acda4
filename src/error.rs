//! Client error types / 客户端错误类型

use bytes::Bytes;
use thiserror::Error;

/// Errors returned by the client / 客户端错误
#[derive(Error, Debug)]
pub enum ClientError {
    /// The HTTP call could not be completed (network, timeout, decoding) / 请求未能完成
    #[error("transport error: {0:#}")]
    Transport(#[source] anyhow::Error),

    /// The server answered with a non-success status / 服务端返回失败状态码
    #[error("status: {status} response: {}", String::from_utf8_lossy(.body))]
    HttpStatus { status: u16, body: Bytes },

    /// Invalid client configuration / 配置无效
    #[error("config error: {0}")]
    Config(String),

    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ClientError>;

impl ClientError {
    pub fn config<S: Into<String>>(msg: S) -> Self {
        ClientError::Config(msg.into())
    }

    /// HTTP status code, if the server answered / 服务端状态码
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}
