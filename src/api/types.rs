//! Multi-search API data types / 多重搜索 API 数据类型

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

// ============ 请求参数 ============

/// `max_hits` accepts either `all` or a count / 最大命中数
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaxHits {
    All,
    Count(u64),
}

impl fmt::Display for MaxHits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaxHits::All => f.write_str("all"),
            MaxHits::Count(n) => write!(f, "{}", n),
        }
    }
}

impl From<u64> for MaxHits {
    fn from(n: u64) -> Self {
        MaxHits::Count(n)
    }
}

/// Query string parameters shared by every search in the batch / 公共查询参数
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultiSearchParams {
    pub q: Option<String>,
    pub query_by: Option<String>,
    pub max_hits: Option<MaxHits>,
    pub prefix: Option<String>,
    pub filter_by: Option<String>,
    pub sort_by: Option<String>,
    pub facet_by: Option<String>,
    pub max_facet_values: Option<u32>,
    pub facet_query: Option<String>,
    pub num_typos: Option<u32>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub group_by: Option<String>,
    pub group_limit: Option<u32>,
    pub include_fields: Option<String>,
}

impl MultiSearchParams {
    /// Encode set fields as query pairs, unset fields are skipped / 编码为查询参数
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();

        fn push<T: ToString>(pairs: &mut Vec<(&'static str, String)>, key: &'static str, val: &Option<T>) {
            if let Some(v) = val {
                pairs.push((key, v.to_string()));
            }
        }

        push(&mut pairs, "q", &self.q);
        push(&mut pairs, "query_by", &self.query_by);
        push(&mut pairs, "max_hits", &self.max_hits);
        push(&mut pairs, "prefix", &self.prefix);
        push(&mut pairs, "filter_by", &self.filter_by);
        push(&mut pairs, "sort_by", &self.sort_by);
        push(&mut pairs, "facet_by", &self.facet_by);
        push(&mut pairs, "max_facet_values", &self.max_facet_values);
        push(&mut pairs, "facet_query", &self.facet_query);
        push(&mut pairs, "num_typos", &self.num_typos);
        push(&mut pairs, "page", &self.page);
        push(&mut pairs, "per_page", &self.per_page);
        push(&mut pairs, "group_by", &self.group_by);
        push(&mut pairs, "group_limit", &self.group_limit);
        push(&mut pairs, "include_fields", &self.include_fields);

        pairs
    }
}

/// Per-search parameters inside the request body / 单个搜索的参数
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MultiSearchParameters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facet_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_facet_values: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facet_query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_typos: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_fields: Option<String>,
}

/// One search of the batch, bound to a collection / 指定集合的单个搜索
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiSearchCollectionParameters {
    pub collection: String,
    #[serde(flatten)]
    pub parameters: MultiSearchParameters,
}

impl MultiSearchCollectionParameters {
    pub fn new(collection: &str, q: &str, query_by: &str) -> Self {
        Self {
            collection: collection.to_string(),
            parameters: MultiSearchParameters {
                q: Some(q.to_string()),
                query_by: Some(query_by.to_string()),
                ..Default::default()
            },
        }
    }
}

/// Request body: `{"searches": [...]}` / 请求体
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MultiSearchSearchesParameter {
    pub searches: Vec<MultiSearchCollectionParameters>,
}

// ============ 响应 ============

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHighlight {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// Excerpt with `<mark>` around the matched tokens
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
    /// Strings for plain fields, nested arrays for array fields
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_tokens: Option<Vec<Value>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResultHit {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlights: Option<Vec<SearchHighlight>>,
    /// Schemaless document as stored in the collection / 原始文档
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_match: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacetCount {
    pub value: String,
    pub count: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlighted: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacetCounts {
    pub field_name: String,
    #[serde(default)]
    pub counts: Vec<FacetCount>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facet_counts: Option<Vec<FacetCounts>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub found: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub out_of: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_time_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hits: Option<Vec<SearchResultHit>>,
}

/// One result per search, in request order / 按请求顺序返回的结果
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MultiSearchResult {
    pub results: Vec<SearchResult>,
}
