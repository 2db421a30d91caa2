//! Tests that bursts of input reach the countries API as a single request.
#![cfg(test)]

use crate::{country_json, search_test, TestingTools};
use country_search_page::{Debounced, SearchOutcome};
use httpmock::Method::GET;
use serde_json::json;
use tokio::sync::mpsc;

#[tokio::test]
async fn typing_burst_sends_one_request() {
    search_test(
        |_| (),
        |TestingTools {
             mut search,
             api_mock,
             settings,
             ..
         }| async move {
            let any_lookup = api_mock.mock(|when, then| {
                when.method(GET).path_contains("/v2/name/");
                then.status(200)
                    .json_body(json!([country_json("Sweden", "Stockholm", 10_353_442)]));
            });

            let (tx, rx) = mpsc::channel(8);
            let mut events = Debounced::new(rx, settings.search.debounce_delay);
            for text in ["s", "sw", "swe", "swed", "sweden"] {
                tx.try_send(text.to_string()).expect("channel has room");
            }

            let settled = events.next().await.expect("an event settles");
            assert_eq!(settled, "sweden");
            let outcome = search.handle_input(&settled).await;

            assert!(matches!(outcome, SearchOutcome::Card(_)));
            any_lookup.assert_hits(1);
        },
    )
    .await
}

#[tokio::test]
async fn clearing_the_box_after_typing_sends_nothing() {
    search_test(
        |_| (),
        |TestingTools {
             mut search,
             api_mock,
             settings,
             ..
         }| async move {
            let any_lookup = api_mock.mock(|when, then| {
                when.method(GET);
                then.status(200).json_body(json!([]));
            });

            let (tx, rx) = mpsc::channel(8);
            let mut events = Debounced::new(rx, settings.search.debounce_delay);
            for text in ["f", "fr", "f", ""] {
                tx.try_send(text.to_string()).expect("channel has room");
            }
            drop(tx);

            while let Some(text) = events.next().await {
                assert_eq!(search.handle_input(&text).await, SearchOutcome::Cleared);
            }
            any_lookup.assert_hits(0);
        },
    )
    .await
}
