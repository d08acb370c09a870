//! Wire types for the GrowthBook REST API

use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// Raw HTTP response as seen by the features client
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body
    pub body: Bytes,
}

impl HttpResponse {
    /// Build a 200 response with a JSON body
    pub fn ok_json(body: impl Into<Bytes>) -> Self {
        Self::with_status(200, body)
    }

    /// Build a response with an arbitrary status and body
    pub fn with_status(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the status is 2xx
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Declared value type of a feature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    Boolean,
    String,
    Number,
    Json,
    /// Any value type this CLI does not know about yet
    #[serde(other)]
    Unknown,
}

/// A feature definition, reduced to the fields type generation needs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feature {
    /// Feature key, as used by the SDKs
    pub id: String,
    /// Declared value type
    pub value_type: ValueType,
    /// Default value, always serialized as a string by the API
    #[serde(default)]
    pub default_value: String,
    /// Free-form description
    #[serde(default)]
    pub description: String,
    /// Whether the feature is archived
    #[serde(default)]
    pub archived: bool,
}

/// One page of `GET /api/v1/features`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturesPage {
    pub features: Vec<Feature>,
    #[serde(default)]
    pub limit: u64,
    #[serde(default)]
    pub offset: u64,
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub has_more: bool,
    #[serde(default)]
    pub next_offset: Option<u64>,
}

/// Error body returned by the API on failures
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiErrorBody {
    pub message: String,
}
