//! Turning search box input into page updates.

use crate::{Notice, Notifier, Page, SearchOutcome};
use country_search_api::{CountrySource, FetchError};
use country_search_settings::SearchSettings;

/// Handles input from the search box.
///
/// Each call to [`CountrySearch::handle_input`] finishes its request before
/// returning, so results are always applied in the order the input arrived.
pub struct CountrySearch {
    /// Where countries are looked up.
    source: Box<dyn CountrySource>,
    /// Where notices are sent.
    notifier: Box<dyn Notifier>,
    /// The most matches that are shown as a list.
    max_list_matches: usize,
    /// The current state of the page.
    page: Page,
}

impl CountrySearch {
    /// Create a search over `source` with an empty page.
    pub fn new(
        source: Box<dyn CountrySource>,
        notifier: Box<dyn Notifier>,
        settings: &SearchSettings,
    ) -> Self {
        Self {
            source,
            notifier,
            max_list_matches: settings.max_list_matches,
            page: Page::default(),
        }
    }

    /// The current state of the page.
    pub fn page(&self) -> &Page {
        &self.page
    }

    /// React to the search box now containing `raw`.
    ///
    /// Surrounding whitespace is ignored. An empty query clears the page without
    /// sending a request.
    pub async fn handle_input(&mut self, raw: &str) -> SearchOutcome {
        self.page.set_query(raw);
        let query = raw.trim();
        if query.is_empty() {
            self.page.clear();
            return SearchOutcome::Cleared;
        }

        tracing::debug!(%query, source = %self.source.name(), "searching countries");
        let outcome = match self.source.fetch_countries(query).await {
            Ok(countries) => SearchOutcome::from_matches(countries, self.max_list_matches),
            Err(FetchError::NotFound) => SearchOutcome::NotFound,
            Err(error) => {
                tracing::error!(r#type = "page.search", %query, ?error, "country search failed");
                SearchOutcome::Failed
            }
        };

        self.apply(&outcome);
        tracing::debug!(%query, ?outcome, "applied search outcome");
        outcome
    }

    /// Update the page and send notices for `outcome`.
    fn apply(&mut self, outcome: &SearchOutcome) {
        match outcome {
            SearchOutcome::TooManyMatches { .. } => {
                self.page.clear();
                self.notifier.notify(&Notice::too_many_matches());
            }
            SearchOutcome::List(countries) => self.page.show_list(countries),
            SearchOutcome::Card(country) => self.page.show_card(country),
            SearchOutcome::NotFound => {
                self.page.clear();
                self.notifier.notify(&Notice::no_such_country());
            }
            SearchOutcome::Cleared => self.page.clear(),
            SearchOutcome::NoMatches | SearchOutcome::Failed => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::CountrySearch;
    use crate::{Notice, NoticeLevel, Notifier, SearchOutcome};
    use async_trait::async_trait;
    use country_search_api::{Country, CountrySource, FetchError};
    use country_search_settings::SearchSettings;
    use fake::{Fake, Faker};
    use std::{
        collections::HashMap,
        sync::{Arc, Mutex},
        time::Duration,
    };

    /// The canned response for a query.
    enum Canned {
        Countries(usize),
        NotFound,
        Broken,
    }

    /// A source that answers from a fixed table and records every query.
    #[derive(Default)]
    struct CannedSource {
        responses: HashMap<&'static str, Canned>,
        queries: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait]
    impl CountrySource for CannedSource {
        fn name(&self) -> String {
            "CannedSource".to_string()
        }

        async fn fetch_countries(&self, name: &str) -> Result<Vec<Country>, FetchError> {
            self.queries.lock().unwrap().push(name.to_string());
            match self.responses.get(name) {
                Some(Canned::Countries(n)) => {
                    Ok(std::iter::repeat_with(|| Faker.fake()).take(*n).collect())
                }
                Some(Canned::NotFound) | None => Err(FetchError::NotFound),
                Some(Canned::Broken) => {
                    Err(FetchError::Network(anyhow::anyhow!("connection reset")))
                }
            }
        }
    }

    #[derive(Clone, Default)]
    struct RecordingNotifier(Arc<Mutex<Vec<Notice>>>);

    impl Notifier for RecordingNotifier {
        fn notify(&self, notice: &Notice) {
            self.0.lock().unwrap().push(notice.clone());
        }
    }

    struct Harness {
        search: CountrySearch,
        queries: Arc<Mutex<Vec<String>>>,
        notices: RecordingNotifier,
    }

    fn harness(responses: Vec<(&'static str, Canned)>) -> Harness {
        let source = CannedSource {
            responses: responses.into_iter().collect(),
            ..CannedSource::default()
        };
        let queries = source.queries.clone();
        let notices = RecordingNotifier::default();
        let settings = SearchSettings {
            debounce_delay: Duration::from_millis(300),
            max_list_matches: 10,
        };
        Harness {
            search: CountrySearch::new(Box::new(source), Box::new(notices.clone()), &settings),
            queries,
            notices,
        }
    }

    #[tokio::test]
    async fn test_blank_input_clears_without_request() {
        let mut h = harness(vec![("peru", Canned::Countries(1))]);
        h.search.handle_input("peru").await;
        assert!(!h.search.page().info().is_empty());

        for blank in ["", "   ", "\t\n"] {
            assert_eq!(h.search.handle_input(blank).await, SearchOutcome::Cleared);
            assert!(h.search.page().is_blank());
        }
        assert_eq!(*h.queries.lock().unwrap(), vec!["peru"]);
        assert!(h.notices.0.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_input_is_trimmed() {
        let mut h = harness(vec![("peru", Canned::Countries(1))]);
        let outcome = h.search.handle_input("  peru \n").await;

        assert!(matches!(outcome, SearchOutcome::Card(_)));
        assert_eq!(*h.queries.lock().unwrap(), vec!["peru"]);
        assert_eq!(h.search.page().query(), "  peru \n");
    }

    #[tokio::test]
    async fn test_single_match_shows_card_and_clears_list() {
        let mut h = harness(vec![
            ("ma", Canned::Countries(4)),
            ("malta", Canned::Countries(1)),
        ]);
        h.search.handle_input("ma").await;
        assert!(!h.search.page().list().is_empty());

        let outcome = h.search.handle_input("malta").await;
        let country = match outcome {
            SearchOutcome::Card(country) => country,
            other => panic!("expected a card, got {:?}", other),
        };
        assert!(h.search.page().list().is_empty());
        assert!(h.search.page().info().contains("<h1>"));
        assert!(h.search.page().info().contains("<b>Population</b>"));
        assert!(h
            .search
            .page()
            .info()
            .contains(&country.population.to_string()));
    }

    #[tokio::test]
    async fn test_few_matches_show_list_and_clear_card() {
        let mut h = harness(vec![
            ("malta", Canned::Countries(1)),
            ("ma", Canned::Countries(10)),
        ]);
        h.search.handle_input("malta").await;
        assert!(!h.search.page().info().is_empty());

        let outcome = h.search.handle_input("ma").await;
        assert!(matches!(outcome, SearchOutcome::List(ref list) if list.len() == 10));
        assert!(h.search.page().info().is_empty());
        assert_eq!(h.search.page().list().matches("<li").count(), 10);
        assert!(h.notices.0.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_too_many_matches_clears_and_informs() {
        let mut h = harness(vec![("ma", Canned::Countries(3)), ("a", Canned::Countries(11))]);
        h.search.handle_input("ma").await;

        let outcome = h.search.handle_input("a").await;
        assert_eq!(outcome, SearchOutcome::TooManyMatches { count: 11 });
        assert!(h.search.page().is_blank());
        let notices = h.notices.0.lock().unwrap();
        assert_eq!(*notices, vec![Notice::too_many_matches()]);
        assert_eq!(notices[0].level, NoticeLevel::Info);
    }

    #[tokio::test]
    async fn test_not_found_clears_and_reports_failure() {
        let mut h = harness(vec![("malta", Canned::Countries(1)), ("xyz", Canned::NotFound)]);
        h.search.handle_input("malta").await;

        assert_eq!(h.search.handle_input("xyz").await, SearchOutcome::NotFound);
        assert!(h.search.page().is_blank());
        assert_eq!(*h.notices.0.lock().unwrap(), vec![Notice::no_such_country()]);
    }

    #[tokio::test]
    async fn test_other_failures_leave_page_unchanged() {
        let mut h = harness(vec![("malta", Canned::Countries(1)), ("mal", Canned::Broken)]);
        h.search.handle_input("malta").await;
        let before = h.search.page().info().to_string();

        assert_eq!(h.search.handle_input("mal").await, SearchOutcome::Failed);
        assert_eq!(h.search.page().info(), before);
        assert!(h.notices.0.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_empty_response_leaves_page_unchanged() {
        let mut h = harness(vec![("ma", Canned::Countries(2)), ("mz", Canned::Countries(0))]);
        h.search.handle_input("ma").await;
        let before = h.search.page().list().to_string();

        assert_eq!(h.search.handle_input("mz").await, SearchOutcome::NoMatches);
        assert_eq!(h.search.page().list(), before);
    }

    #[tokio::test]
    async fn test_outcome_says_whether_the_page_was_cleared() {
        let mut h = harness(vec![
            ("malta", Canned::Countries(1)),
            ("ma", Canned::Countries(3)),
            ("a", Canned::Countries(11)),
            ("mz", Canned::Countries(0)),
            ("xyz", Canned::NotFound),
            ("mal", Canned::Broken),
        ]);

        for input in ["malta", "ma", "a", "mz", "xyz", "mal", "  "] {
            // Start each search from a page that shows something.
            h.search.handle_input("malta").await;
            let outcome = h.search.handle_input(input).await;
            assert_eq!(
                outcome.clears_page(),
                h.search.page().is_blank(),
                "{:?} after {:?}",
                outcome,
                input
            );
        }
    }
}
