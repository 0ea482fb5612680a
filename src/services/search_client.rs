use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::search::{
    error::SearchError,
    query::SearchQuery,
    record::{ResultRecord, SearchKind},
};

/// A remote API that answers a [`SearchQuery`] with normalized records.
/// Implementations never retry.
#[async_trait]
pub trait SearchClient: Send + Sync {
    fn kind(&self) -> SearchKind;

    /// Whether results still need the client-side radius filter because the
    /// remote does not constrain by radius itself.
    fn filters_radius_locally(&self) -> bool;

    async fn search(&self, query: &SearchQuery) -> Result<Vec<ResultRecord>, SearchError>;
}

/// Reads a JSON body, mapping transport problems and non-2xx statuses to
/// `RemoteUnavailable` and undecodable bodies to `MalformedResponse`.
pub async fn read_json<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, SearchError> {
    let response = response.error_for_status().map_err(SearchError::remote)?;
    let body = response.bytes().await.map_err(SearchError::remote)?;

    serde_json::from_slice::<T>(&body).map_err(SearchError::malformed)
}

/// Decodes each record of a result array on its own, skipping the ones that do
/// not fit `T` so that one bad record does not cost the whole result set.
pub fn decode_records<T: DeserializeOwned>(
    kind: SearchKind,
    values: Vec<serde_json::Value>,
) -> Vec<T> {
    values
        .into_iter()
        .filter_map(|value| match serde_json::from_value::<T>(value) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("Skipping undecodable {} record: {}", kind, e);
                None
            }
        })
        .collect()
}
