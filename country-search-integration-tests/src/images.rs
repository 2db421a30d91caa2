//! Tests the image search client against settings loaded like the application's.
#![cfg(test)]

use crate::{search_test, TestingTools};
use country_search_api::{FetchError, ImageSearchClient};
use httpmock::Method::GET;
use serde_json::json;

#[tokio::test]
async fn image_search_uses_configured_filters() {
    search_test(
        |settings| settings.images.safesearch = false,
        |TestingTools {
             api_mock, settings, ..
         }| async move {
            let search = api_mock.mock(|when, then| {
                when.method(GET)
                    .path("/api/")
                    .query_param("key", "test-key")
                    .query_param("q", "lisbon")
                    .query_param("image_type", "photo")
                    .query_param("orientation", "horizontal")
                    .query_param("safesearch", "false")
                    .query_param("page", "1")
                    .query_param("per_page", "40");
                then.status(200)
                    .json_body(json!({"total": 0, "totalHits": 0, "hits": []}));
            });

            let client = ImageSearchClient::new(&settings.images).expect("valid settings");
            let response = client
                .fetch_images("lisbon", 1, client.default_per_page())
                .await
                .expect("search succeeds");

            search.assert();
            assert!(response.hits.is_empty());
        },
    )
    .await
}

#[tokio::test]
async fn image_search_404_is_not_found() {
    search_test(
        |_| (),
        |TestingTools {
             api_mock, settings, ..
         }| async move {
            api_mock.mock(|when, then| {
                when.method(GET).path("/api/");
                then.status(404);
            });

            let client = ImageSearchClient::new(&settings.images).expect("valid settings");
            let result = client.fetch_images("lisbon", 1, 20).await;

            assert!(matches!(result, Err(FetchError::NotFound)));
        },
    )
    .await
}
