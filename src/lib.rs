//! Client for the search server multi-search API / 搜索服务多重搜索客户端
//!
//! ```no_run
//! use typesense_client::{Client, MultiSearchCollectionParameters, MultiSearchParams, MultiSearchSearchesParameter};
//!
//! # async fn run() -> typesense_client::Result<()> {
//! let client = Client::builder()
//!     .server("http://localhost:8108")
//!     .api_key("xyz")
//!     .build()?;
//!
//! let body = MultiSearchSearchesParameter {
//!     searches: vec![MultiSearchCollectionParameters::new("companies", "stark", "company_name")],
//! };
//! let result = client.multi_search().perform(&MultiSearchParams::default(), &body).await?;
//! println!("found {:?}", result.results[0].found);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod multi_search;

pub use api::{
    ApiClient, FacetCount, FacetCounts, HttpApiClient, MaxHits, MultiSearchCollectionParameters,
    MultiSearchParameters, MultiSearchParams, MultiSearchResponse, MultiSearchResult,
    MultiSearchSearchesParameter, SearchHighlight, SearchResult, SearchResultHit,
};
pub use client::{Client, ClientBuilder};
pub use config::ClientConfig;
pub use error::{ClientError, Result};
pub use multi_search::MultiSearch;
