//! The possible results of one search, and how a response picks between them.

use country_search_api::Country;

/// What a single search did to the page.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// The query was empty after trimming. Both regions were cleared and no
    /// request was sent.
    Cleared,

    /// More countries matched than can be listed. Both regions were cleared.
    TooManyMatches {
        /// How many countries matched.
        count: usize,
    },

    /// A handful of countries matched and are listed.
    List(Vec<Country>),

    /// Exactly one country matched and its card is shown.
    Card(Country),

    /// The API returned an empty list. The page was left as it was.
    NoMatches,

    /// The API reported that no country has that name. Both regions were cleared.
    NotFound,

    /// The search failed for another reason. The page was left as it was.
    Failed,
}

impl SearchOutcome {
    /// Pick the branch for a successful response.
    ///
    /// At most `max_list_matches` countries are listed; a single match always
    /// gets a card.
    pub fn from_matches(mut countries: Vec<Country>, max_list_matches: usize) -> Self {
        match countries.len() {
            0 => Self::NoMatches,
            1 => Self::Card(countries.remove(0)),
            count if count > max_list_matches => Self::TooManyMatches { count },
            _ => Self::List(countries),
        }
    }

    /// Whether applying this outcome leaves both regions empty.
    pub fn clears_page(&self) -> bool {
        matches!(
            self,
            Self::Cleared | Self::TooManyMatches { .. } | Self::NotFound
        )
    }
}
