//! HTTP JSON data source.
//!
//! Fetches rows from an endpoint that accepts `_sort`, `_order`, `_start`
//! and `_end` query parameters and answers with a JSON array of records.

use async_trait::async_trait;
use log::debug;
use reqwest::{Client, Url};

use super::{DataSource, RowQuery, SourceError};
use crate::column::Row;

/// Data source backed by a remote JSON endpoint.
pub struct HttpSource {
    client: Client,
    url: Url,
}

impl HttpSource {
    /// Build a source for `endpoint` relative to `base_url`.
    pub fn new(base_url: &str, endpoint: &str) -> Result<Self, SourceError> {
        let base = Url::parse(base_url)
            .map_err(|e| SourceError::InvalidData(format!("invalid base url '{base_url}': {e}")))?;
        let url = base
            .join(endpoint)
            .map_err(|e| SourceError::InvalidData(format!("invalid endpoint '{endpoint}': {e}")))?;

        Ok(Self {
            client: Client::new(),
            url,
        })
    }

    /// The full request URL for a query, with sort and range parameters
    /// applied.
    pub fn request_url(&self, query: &RowQuery) -> Url {
        let mut url = self.url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("_sort", &query.sort_column);
            pairs.append_pair("_order", query.direction.as_str());
            pairs.append_pair("_start", &query.range_start.to_string());
            if let Some(end) = query.range_end {
                pairs.append_pair("_end", &end.to_string());
            }
        }
        url
    }
}

#[async_trait]
impl DataSource for HttpSource {
    async fn fetch(&self, query: &RowQuery) -> Result<Vec<Row>, SourceError> {
        let url = self.request_url(query);
        debug!("GET {url}");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Http {
                status: status.as_u16(),
            });
        }

        response
            .json::<Vec<Row>>()
            .await
            .map_err(|e| SourceError::InvalidData(e.to_string()))
    }
}
