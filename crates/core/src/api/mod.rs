//! GrowthBook REST API integration
//!
//! Retrieves feature definitions from `GET /api/v1/features`, which is
//! offset-paginated: every page carries `hasMore` and `nextOffset`, and the
//! client keeps requesting until the server reports no more pages.
//!
//! Requests authenticate with the profile's secret API key as a bearer token.
//! Custom CA certificates for self-hosted instances can be configured via
//! `GROWTHBOOK_CUSTOM_CA_BUNDLE` (path to a PEM file).

mod client;
mod features;
mod types;

pub use client::{
    HttpClient, MockHttpClient, RecordedRequest, ReqwestClient, CUSTOM_CA_BUNDLE_ENV,
};
pub use features::{default_features_client, fetch_all_features, FeaturesClient, PAGE_SIZE};
pub use types::{Feature, FeaturesPage, HttpResponse, ValueType};
