//! Paginated feature retrieval

use std::collections::{HashMap, HashSet};
use tracing::{debug, instrument};

use super::client::{HttpClient, ReqwestClient};
use super::types::{ApiErrorBody, Feature, FeaturesPage, HttpResponse};
use crate::errors::ApiError;
use crate::redaction;

/// Number of features requested per page
pub const PAGE_SIZE: u64 = 100;

/// Client for the `/api/v1/features` endpoint of one GrowthBook instance
pub struct FeaturesClient<C: HttpClient> {
    client: C,
    base_url: String,
    api_key: String,
}

impl<C: HttpClient> FeaturesClient<C> {
    /// Create a new FeaturesClient with a custom HTTP client
    pub fn new(client: C, base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client,
            base_url,
            api_key: api_key.into(),
        }
    }

    /// Base URL requests are made against
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of the page starting at `offset`
    pub fn page_url(&self, offset: u64) -> String {
        format!(
            "{}/api/v1/features?limit={}&offset={}",
            self.base_url, PAGE_SIZE, offset
        )
    }

    /// Fetch every feature, following `nextOffset` until `hasMore` is false.
    ///
    /// Features are returned in API order with duplicate ids dropped (first
    /// occurrence wins), which can happen when features are created while
    /// paging.
    #[instrument(level = "info", skip(self), fields(base_url = %self.base_url))]
    pub async fn fetch_all_features(&self) -> Result<Vec<Feature>, ApiError> {
        let mut all_features: Vec<Feature> = Vec::new();
        let mut offset = 0;
        let mut page_count = 0;

        loop {
            let page = self.fetch_page(offset).await?;
            page_count += 1;

            debug!(
                "Fetched page {} (offset {}, {} features, total {})",
                page_count,
                offset,
                page.features.len(),
                page.total
            );
            all_features.extend(page.features);

            let next_offset = match (page.has_more, page.next_offset) {
                (false, _) => {
                    debug!("No more pages available (pagination ended at page {})", page_count);
                    break;
                }
                (true, Some(next)) => next,
                (true, None) => {
                    return Err(ApiError::Pagination {
                        message: format!(
                            "page at offset {} reports more features but no nextOffset",
                            offset
                        ),
                    });
                }
            };

            if next_offset <= offset {
                return Err(ApiError::Pagination {
                    message: format!(
                        "nextOffset {} does not advance past offset {}",
                        next_offset, offset
                    ),
                });
            }
            offset = next_offset;
        }

        let mut seen = HashSet::new();
        all_features.retain(|feature| seen.insert(feature.id.clone()));

        debug!(
            "Successfully fetched {} features across {} pages",
            all_features.len(),
            page_count
        );

        Ok(all_features)
    }

    /// Fetch and decode a single page
    async fn fetch_page(&self, offset: u64) -> Result<FeaturesPage, ApiError> {
        let url = self.page_url(offset);

        let mut headers = HashMap::new();
        headers.insert("Accept".to_string(), "application/json".to_string());
        headers.insert(
            "Authorization".to_string(),
            format!("Bearer {}", self.api_key),
        );

        debug!("Fetching features from: {}", url);
        let response = self
            .client
            .get_with_headers(&url, headers)
            .await
            .map_err(|e| ApiError::Network {
                message: redaction::redact(&e.to_string()),
            })?;

        check_status(&response)?;

        serde_json::from_slice(&response.body).map_err(|e| ApiError::Parsing {
            message: format!("page at offset {}: {}", offset, e),
        })
    }
}

/// Map non-success statuses to typed errors, keeping the server's message
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }

    let message = serde_json::from_slice::<ApiErrorBody>(&response.body)
        .map(|body| body.message)
        .unwrap_or_else(|_| String::from_utf8_lossy(&response.body).trim().to_string());
    let message = redaction::redact(&message);

    Err(match response.status {
        401 => ApiError::Unauthorized { message },
        403 => ApiError::Forbidden { message },
        status => ApiError::Status { status, message },
    })
}

/// Create a features client backed by reqwest
pub fn default_features_client(
    base_url: &str,
    api_key: &str,
) -> Result<FeaturesClient<ReqwestClient>, ApiError> {
    let client = ReqwestClient::new().map_err(|e| ApiError::ClientInit {
        message: e.to_string(),
    })?;
    Ok(FeaturesClient::new(client, base_url, api_key))
}

/// Fetch all features of an instance with the default client
pub async fn fetch_all_features(base_url: &str, api_key: &str) -> Result<Vec<Feature>, ApiError> {
    default_features_client(base_url, api_key)?
        .fetch_all_features()
        .await
}
