//! Tools for running tests

use crate::utils::logging::LogWatcher;
use country_search_api::CountriesClient;
use country_search_page::{CountrySearch, Notice, Notifier};
use country_search_settings::Settings;
use httpmock::MockServer;
use serde_json::json;
use std::{
    future::Future,
    sync::{Arc, Mutex},
};
use tracing_futures::Instrument;
use tracing_subscriber::{fmt::MakeWriter, layer::SubscriberExt};

/// Run a test against a [`CountrySearch`] whose countries API is a mock server.
///
/// Settings are loaded with [`Settings::load_for_tests`], then both API
/// endpoints are pointed at the mock server (`/v2/` for countries, `/api/` for
/// images), then `settings_changer` runs.
///
/// # Example
///
/// ```
/// # use country_search_integration_tests::{search_test, TestingTools};
/// #[tokio::test]
/// async fn a_test() {
///     search_test(
///         |settings| settings.search.max_list_matches = 3,
///         |TestingTools { search, .. }| async move {
///             assert!(search.page().is_blank()) // Test goes here
///         }
///     ).await
/// }
/// ```
///
/// # Panics
/// May panic if tests could not be set up correctly.
pub async fn search_test<FSettings, FTest, Fut>(
    settings_changer: FSettings,
    test: FTest,
) -> Fut::Output
where
    FSettings: FnOnce(&mut Settings),
    FTest: Fn(TestingTools) -> Fut,
    Fut: Future,
{
    let test_span = tracing::info_span!("search_test");

    // Set up a mock server for both APIs to talk to
    let api_mock = MockServer::start_async().await;
    let mut settings = Settings::load_for_tests(|settings| {
        settings.countries.endpoint = api_mock.url("/v2/");
        settings.images.endpoint = api_mock.url("/api/");
        settings.images.key = "test-key".to_string();
    });
    settings_changer(&mut settings);

    // Set up logging
    let log_watcher = LogWatcher::default();
    let log_watcher_writer = log_watcher.make_writer();

    let env_filter: tracing_subscriber::EnvFilter = (&settings.logging.levels).into();
    let tracing_subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(move || log_watcher_writer.clone()),
        )
        .with(tracing_subscriber::fmt::layer().pretty().with_test_writer());

    let _tracing_subscriber_guard = tracing::subscriber::set_default(tracing_subscriber);

    let notices = NoticeLog::default();
    let client =
        CountriesClient::new(&settings.countries).expect("Failed to build countries client");
    let search = CountrySearch::new(
        Box::new(client),
        Box::new(notices.clone()),
        &settings.search,
    );

    // Assemble the tools
    let tools = TestingTools {
        search,
        api_mock,
        notices,
        log_watcher,
        settings,
    };
    // Run the test
    test(tools).instrument(test_span).await
}

/// A set of tools for tests, including mock servers and logging helpers.
///
/// The fields of this struct are marked as non-exhaustive, meaning that any
/// destructuring of this struct will require a `..` "and the rest" entry, even
/// if all present items are named. This makes adding tools in the future easier,
/// since old tests won't need to be rewritten to account for the added tools.
#[non_exhaustive]
pub struct TestingTools {
    /// The search under test, backed by a real [`CountriesClient`].
    pub search: CountrySearch,

    /// A [`httpmock::MockServer`] that both APIs have been configured to use.
    /// Does not contain mock responses, any needed must be added.
    pub api_mock: MockServer,

    /// Every notice the search has sent.
    pub notices: NoticeLog,

    /// To make assertions about logs.
    pub log_watcher: LogWatcher,

    /// The settings the search was built from.
    pub settings: Settings,
}

/// A notifier that remembers every notice it receives.
#[derive(Clone, Default)]
pub struct NoticeLog(Arc<Mutex<Vec<Notice>>>);

impl NoticeLog {
    /// The notices received so far, oldest first.
    pub fn received(&self) -> Vec<Notice> {
        self.0.lock().expect("mutex was poisoned").clone()
    }
}

impl Notifier for NoticeLog {
    fn notify(&self, notice: &Notice) {
        self.0.lock().expect("mutex was poisoned").push(notice.clone());
    }
}

/// A country in the shape the countries API returns it.
pub fn country_json(name: &str, capital: &str, population: u64) -> serde_json::Value {
    let code = name.to_lowercase().chars().take(2).collect::<String>();
    json!({
        "name": name,
        "capital": capital,
        "population": population,
        "flags": {
            "svg": format!("https://flagcdn.com/{}.svg", code),
            "png": format!("https://flagcdn.com/w320/{}.png", code),
        },
        "languages": [
            {"iso639_1": "en", "iso639_2": "eng", "name": "English", "nativeName": "English"},
        ],
        "independent": true,
    })
}
