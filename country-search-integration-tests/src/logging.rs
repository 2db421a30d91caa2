//! Tests that searches are visible in the logs.
#![cfg(test)]

use crate::{search_test, TestingTools};
use country_search_page::SearchOutcome;
use httpmock::Method::GET;
use tracing::Level;

#[tokio::test]
async fn unexpected_failures_are_logged() {
    search_test(
        |_| (),
        |TestingTools {
             mut search,
             api_mock,
             mut log_watcher,
             notices,
             ..
         }| async move {
            api_mock.mock(|when, then| {
                when.method(GET).path("/v2/name/peru");
                then.status(502);
            });

            assert_eq!(search.handle_input("peru").await, SearchOutcome::Failed);

            assert!(notices.received().is_empty());
            assert!(log_watcher.has(|event| event.level == Level::ERROR
                && event.field_contains("message", "country search failed")
                && event.field_contains("query", "peru")));
        },
    )
    .await
}

#[tokio::test]
async fn not_found_is_not_an_error() {
    search_test(
        |_| (),
        |TestingTools {
             mut search,
             api_mock,
             mut log_watcher,
             ..
         }| async move {
            api_mock.mock(|when, then| {
                when.method(GET).path("/v2/name/atlantis");
                then.status(404);
            });

            assert_eq!(search.handle_input("atlantis").await, SearchOutcome::NotFound);

            assert!(!log_watcher.has(|event| event.level == Level::ERROR));
            assert!(log_watcher
                .has(|event| event.field_contains("message", "searching countries")));
        },
    )
    .await
}
