//! A client for the REST Countries `name` resource.

use crate::{request::get_json, Country, CountrySource, FetchError, SetupError};
use anyhow::{anyhow, Context};
use async_trait::async_trait;
use country_search_settings::CountriesSettings;
use reqwest::Url;

/// Looks countries up by name against the REST Countries API.
pub struct CountriesClient {
    /// The HTTP client used for every request.
    client: reqwest::Client,
    /// Base URL of the API, always usable as a base for more path segments.
    endpoint: Url,
    /// The `fields` filter sent with every request, already joined with commas.
    fields: String,
}

impl CountriesClient {
    /// Create a client from settings.
    ///
    /// # Errors
    /// If the endpoint is not a valid base URL, or the HTTP client cannot be built.
    pub fn new(settings: &CountriesSettings) -> Result<Self, SetupError> {
        let endpoint = Url::parse(&settings.endpoint)
            .context(format!("Parsing countries endpoint: {}", settings.endpoint))
            .map_err(SetupError::InvalidConfiguration)?;
        if endpoint.cannot_be_a_base() {
            return Err(SetupError::InvalidConfiguration(anyhow!(
                "Countries endpoint cannot be used as a base URL: {}",
                endpoint
            )));
        }

        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .context("Unable to create the Reqwest client")
            .map_err(SetupError::Network)?;

        Ok(Self {
            client,
            endpoint,
            fields: settings.fields.join(","),
        })
    }

    /// Build the URL that looks up `name`.
    ///
    /// The name becomes a single path segment, so characters like `/` or `?`
    /// in it are percent-encoded instead of changing the resource.
    pub fn lookup_url(&self, name: &str) -> Url {
        let mut url = self.endpoint.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("name").push(name);
        }
        if !self.fields.is_empty() {
            url.set_query(Some(&format!("fields={}", self.fields)));
        }
        url
    }
}

#[async_trait]
impl CountrySource for CountriesClient {
    fn name(&self) -> String {
        "CountriesClient".to_owned()
    }

    async fn fetch_countries(&self, name: &str) -> Result<Vec<Country>, FetchError> {
        let url = self.lookup_url(name);
        tracing::debug!(%url, "fetching countries");
        get_json(self.client.get(url)).await
    }
}
