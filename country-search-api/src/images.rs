//! A client for the Pixabay image search API.

use crate::{request::get_json, FetchError, ImageSearchResponse, SetupError};
use anyhow::Context;
use country_search_settings::ImageSearchSettings;
use reqwest::Url;

/// Searches photos on Pixabay.
pub struct ImageSearchClient {
    /// The HTTP client used for every request.
    client: reqwest::Client,
    /// Base URL of the API.
    endpoint: Url,
    /// Filters and credentials sent with every request.
    settings: ImageSearchSettings,
}

impl ImageSearchClient {
    /// Create a client from settings.
    ///
    /// # Errors
    /// If the endpoint is not a valid URL, or the HTTP client cannot be built.
    pub fn new(settings: &ImageSearchSettings) -> Result<Self, SetupError> {
        let endpoint = Url::parse(&settings.endpoint)
            .context(format!("Parsing image search endpoint: {}", settings.endpoint))
            .map_err(SetupError::InvalidConfiguration)?;
        let client = reqwest::Client::builder()
            .timeout(settings.request_timeout)
            .build()
            .context("Unable to create the Reqwest client")
            .map_err(SetupError::Network)?;

        Ok(Self {
            client,
            endpoint,
            settings: settings.clone(),
        })
    }

    /// The number of results per page used when the caller has no preference.
    pub fn default_per_page(&self) -> u32 {
        self.settings.per_page
    }

    /// Fetch one page of photos matching `query`. Pages start at 1.
    ///
    /// # Errors
    /// [`FetchError::InvalidRequest`] for page 0, otherwise whatever the
    /// request produced.
    pub async fn fetch_images(
        &self,
        query: &str,
        page: u32,
        per_page: u32,
    ) -> Result<ImageSearchResponse, FetchError> {
        if page == 0 {
            return Err(FetchError::InvalidRequest(
                "image search pages start at 1".to_string(),
            ));
        }

        let page = page.to_string();
        let per_page = per_page.to_string();
        let params = [
            ("key", self.settings.key.as_str()),
            ("q", query),
            ("image_type", self.settings.image_type.as_str()),
            ("orientation", self.settings.orientation.as_str()),
            ("safesearch", if self.settings.safesearch { "true" } else { "false" }),
            ("page", page.as_str()),
            ("per_page", per_page.as_str()),
        ];

        tracing::debug!(%query, %page, %per_page, "searching images");
        get_json(self.client.get(self.endpoint.clone()).query(&params)).await
    }
}
