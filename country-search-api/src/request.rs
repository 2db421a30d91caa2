//! Sending a request and mapping the response onto [`FetchError`].

use crate::FetchError;
use anyhow::Context;
use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;

/// Send `request` and decode a JSON body from a successful response.
///
/// A 404 becomes [`FetchError::NotFound`]. Any other failure status, or a
/// transport failure while sending or reading the body, becomes
/// [`FetchError::Network`]. A body that is not the expected JSON becomes
/// [`FetchError::Format`].
pub(crate) async fn get_json<T: DeserializeOwned>(
    request: RequestBuilder,
) -> Result<T, FetchError> {
    let response = request
        .send()
        .await
        .context("Sending request")
        .map_err(FetchError::Network)?;

    let status = response.status();
    tracing::debug!(url = %response.url(), %status, "received response");
    if status == StatusCode::NOT_FOUND {
        return Err(FetchError::NotFound);
    }

    let body = response
        .error_for_status()
        .map_err(|error| FetchError::Network(error.into()))?
        .bytes()
        .await
        .context("Reading the response body")
        .map_err(FetchError::Network)?;

    serde_json::from_slice(&body)
        .context("Parsing the JSON response")
        .map_err(FetchError::Format)
}
