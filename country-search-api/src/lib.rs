#![warn(missing_docs, clippy::missing_docs_in_private_items)]

//! Clients for the remote APIs used by country search.
//!
//! - [`CountriesClient`] looks countries up by name in the REST Countries API.
//! - [`ImageSearchClient`] searches photos on Pixabay. The search page does not
//!   use it.
//!
//! Consumers that only need country lookups should depend on the
//! [`CountrySource`] trait, so they can be tested without a network.

mod countries;
mod domain;
mod images;
mod request;

pub use crate::countries::CountriesClient;
pub use crate::domain::{Country, Flags, ImageHit, ImageSearchResponse, Language};
pub use crate::images::ImageSearchClient;

use async_trait::async_trait;
use thiserror::Error;

/// Something that can look up countries by (part of) their name.
#[async_trait]
pub trait CountrySource: Send + Sync {
    /// An operator-visible name for this source.
    fn name(&self) -> String;

    /// Fetch every country whose name matches `name`.
    async fn fetch_countries(&self, name: &str) -> Result<Vec<Country>, FetchError>;
}

/// Errors that may occur while setting up a client.
#[derive(Debug, Error)]
#[allow(missing_docs, clippy::missing_docs_in_private_items)]
pub enum SetupError {
    #[error("This client cannot be used with the current configuration")]
    InvalidConfiguration(#[source] anyhow::Error),

    #[error("There was a network error while setting up this client")]
    Network(#[source] anyhow::Error),
}

/// Errors that may occur while fetching from a remote API.
#[derive(Debug, Error)]
#[allow(missing_docs, clippy::missing_docs_in_private_items)]
pub enum FetchError {
    /// The API answered with HTTP 404. For country lookups this means no
    /// country matched the name.
    #[error("Nothing was found for the request")]
    NotFound,

    #[error("The request could not be built: {0}")]
    InvalidRequest(String),

    #[error("There was a network error while fetching: {0}")]
    Network(#[source] anyhow::Error),

    #[error("The response was not in the expected format: {0}")]
    Format(#[source] anyhow::Error),
}
