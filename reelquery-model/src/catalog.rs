//! Catalog wire types: the outbound request shape and the slice of the
//! upstream response the formatter actually reads.

use serde::Deserialize;

/// One upstream catalog call: endpoint path plus an ordered, sparse
/// parameter list.
///
/// Parameters keep insertion order and never contain blank values; the
/// gateway appends its own credential on top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogRequest {
    pub endpoint: String,
    pub parameters: Vec<(&'static str, String)>,
}

impl CatalogRequest {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            parameters: Vec::new(),
        }
    }

    /// Append a parameter unconditionally.
    pub fn push(&mut self, key: &'static str, value: impl Into<String>) {
        self.parameters.push((key, value.into()));
    }

    /// Append a parameter only when the value is present and non-blank
    /// after trimming. The sparse-inclusion rule applies to every endpoint.
    pub fn push_opt(&mut self, key: &'static str, value: Option<&str>) {
        if let Some(v) = value {
            let trimmed = v.trim();
            if !trimmed.is_empty() {
                self.parameters.push((key, trimmed.to_owned()));
            }
        }
    }
}

/// One page of catalog results. A response without a `results` list is
/// treated as an empty page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogPage {
    #[serde(default)]
    pub results: Vec<CatalogItem>,
}

/// The formatter's view of a catalog result item.
///
/// Movies carry `title`, TV shows carry `name`; combined search additionally
/// tags each item with `media_type`. Everything else in the upstream record
/// is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CatalogItem {
    pub title: Option<String>,
    pub name: Option<String>,
    pub vote_average: Option<f64>,
    pub media_type: Option<String>,
}
