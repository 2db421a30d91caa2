//! Tests what searching does to the page, through the real countries client.
#![cfg(test)]

use crate::{country_json, search_test, TestingTools};
use country_search_page::{Notice, SearchOutcome};
use httpmock::{Method::GET, MockServer};
use serde_json::json;

/// The `fields` filter every lookup is expected to send.
const FIELDS: &str = "name,capital,population,flags,languages";

fn mock_lookup<'a>(
    server: &'a MockServer,
    name: &str,
    body: serde_json::Value,
) -> httpmock::Mock<'a> {
    server.mock(|when, then| {
        when.method(GET)
            .path(format!("/v2/name/{}", name))
            .query_param("fields", FIELDS);
        then.status(200).json_body(body);
    })
}

fn mock_not_found<'a>(server: &'a MockServer, name: &str) -> httpmock::Mock<'a> {
    server.mock(|when, then| {
        when.method(GET).path(format!("/v2/name/{}", name));
        then.status(404)
            .json_body(json!({"status": 404, "message": "Not Found"}));
    })
}

/// `n` distinct countries.
fn countries(n: usize) -> serde_json::Value {
    (0..n)
        .map(|i| country_json(&format!("Country {}", i), "Somewhere", 1000 + i as u64))
        .collect()
}

#[tokio::test]
async fn blank_input_sends_no_request() {
    search_test(
        |_| (),
        |TestingTools {
             mut search,
             api_mock,
             notices,
             ..
         }| async move {
            let any_request = api_mock.mock(|when, then| {
                when.method(GET);
                then.status(500);
            });

            assert_eq!(search.handle_input("   ").await, SearchOutcome::Cleared);
            assert!(search.page().is_blank());
            any_request.assert_hits(0);
            assert!(notices.received().is_empty());
        },
    )
    .await
}

#[tokio::test]
async fn single_match_shows_card() {
    search_test(
        |_| (),
        |TestingTools {
             mut search,
             api_mock,
             ..
         }| async move {
            let list = mock_lookup(&api_mock, "ger", countries(2));
            let card = mock_lookup(
                &api_mock,
                "germany",
                json!([country_json("Germany", "Berlin", 83_240_525)]),
            );

            search.handle_input("ger").await;
            assert!(!search.page().list().is_empty());

            let outcome = search.handle_input(" germany ").await;
            assert!(matches!(outcome, SearchOutcome::Card(ref c) if c.name == "Germany"));
            list.assert();
            card.assert();

            let info = search.page().info();
            assert!(search.page().list().is_empty());
            assert!(info.contains("<h1>Germany</h1>"), "{}", info);
            assert!(info.contains("<b>Capital</b>: Berlin"), "{}", info);
            assert!(info.contains("<b>Population</b>: 83240525"), "{}", info);
            assert!(info.contains("<b>Languages</b>: English"), "{}", info);
        },
    )
    .await
}

#[tokio::test]
async fn a_few_matches_show_list() {
    search_test(
        |_| (),
        |TestingTools {
             mut search,
             api_mock,
             notices,
             ..
         }| async move {
            mock_lookup(&api_mock, "germany", json!([country_json("Germany", "Berlin", 1)]));
            mock_lookup(&api_mock, "an", countries(10));

            search.handle_input("germany").await;
            assert!(!search.page().info().is_empty());

            let outcome = search.handle_input("an").await;
            assert!(matches!(outcome, SearchOutcome::List(ref list) if list.len() == 10));
            assert!(search.page().info().is_empty());
            assert_eq!(
                search
                    .page()
                    .list()
                    .matches("<li class=\"country-list-item\">")
                    .count(),
                10
            );
            assert!(search.page().list().contains("<p>Country 9</p>"));
            assert!(notices.received().is_empty());
        },
    )
    .await
}

#[tokio::test]
async fn too_many_matches_clears_page() {
    search_test(
        |_| (),
        |TestingTools {
             mut search,
             api_mock,
             notices,
             ..
         }| async move {
            mock_lookup(&api_mock, "an", countries(3));
            mock_lookup(&api_mock, "a", countries(11));

            search.handle_input("an").await;
            assert_eq!(
                search.handle_input("a").await,
                SearchOutcome::TooManyMatches { count: 11 }
            );
            assert!(search.page().is_blank());
            assert_eq!(notices.received(), vec![Notice::too_many_matches()]);
        },
    )
    .await
}

#[tokio::test]
async fn list_size_follows_settings() {
    search_test(
        |settings| settings.search.max_list_matches = 3,
        |TestingTools {
             mut search,
             api_mock,
             ..
         }| async move {
            mock_lookup(&api_mock, "an", countries(4));

            assert_eq!(
                search.handle_input("an").await,
                SearchOutcome::TooManyMatches { count: 4 }
            );
        },
    )
    .await
}

#[tokio::test]
async fn unknown_country_reports_failure() {
    search_test(
        |_| (),
        |TestingTools {
             mut search,
             api_mock,
             notices,
             ..
         }| async move {
            mock_lookup(&api_mock, "ger", countries(2));
            let not_found = mock_not_found(&api_mock, "gerxx");

            search.handle_input("ger").await;
            assert_eq!(search.handle_input("gerxx").await, SearchOutcome::NotFound);

            not_found.assert();
            assert!(search.page().is_blank());
            assert_eq!(notices.received(), vec![Notice::no_such_country()]);
        },
    )
    .await
}

#[tokio::test]
async fn names_with_spaces_are_looked_up() {
    search_test(
        |_| (),
        |TestingTools {
             mut search,
             api_mock,
             ..
         }| async move {
            let lookup = api_mock.mock(|when, then| {
                when.method(GET)
                    .path_contains("/v2/name/united")
                    .path_contains("kingdom")
                    .query_param("fields", FIELDS);
                then.status(200)
                    .json_body(json!([country_json("United Kingdom", "London", 67_215_293)]));
            });

            let outcome = search.handle_input("united kingdom").await;

            lookup.assert();
            assert!(matches!(outcome, SearchOutcome::Card(_)));
        },
    )
    .await
}
