//! The state of the two display regions.

use crate::render;
use country_search_api::Country;
use maud::Markup;

/// The search page: the current search box value plus the rendered markup of
/// the country list region and the country info region.
///
/// Only [`Page::show_list`] and [`Page::show_card`] put content into the
/// regions, and each empties the other region, so at most one is non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    /// The search box value that produced the current state.
    query: String,
    /// Markup inside the country list region.
    list: String,
    /// Markup inside the country info region.
    info: String,
}

impl Page {
    /// Record the value of the search box.
    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
    }

    /// Empty both regions.
    pub fn clear(&mut self) {
        self.list.clear();
        self.info.clear();
    }

    /// List `countries` and empty the info region.
    pub fn show_list(&mut self, countries: &[Country]) {
        self.list = render::country_list(countries).into_string();
        self.info.clear();
    }

    /// Show the card for `country` and empty the list region.
    pub fn show_card(&mut self, country: &Country) {
        self.info = render::country_card(country).into_string();
        self.list.clear();
    }

    /// The search box value.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Markup of the country list region.
    pub fn list(&self) -> &str {
        &self.list
    }

    /// Markup of the country info region.
    pub fn info(&self) -> &str {
        &self.info
    }

    /// Whether both regions are empty.
    pub fn is_blank(&self) -> bool {
        self.list.is_empty() && self.info.is_empty()
    }

    /// Render the complete page document.
    pub fn render(&self) -> Markup {
        render::document(self)
    }
}

#[cfg(test)]
mod tests {
    use super::Page;
    use country_search_api::Country;
    use fake::{Fake, Faker};

    #[test]
    fn test_regions_are_exclusive() {
        let mut page = Page::default();
        let countries: Vec<Country> = vec![Faker.fake(), Faker.fake()];

        page.show_list(&countries);
        assert!(!page.list().is_empty());
        assert!(page.info().is_empty());

        page.show_card(&countries[0]);
        assert!(page.list().is_empty());
        assert!(!page.info().is_empty());

        page.show_list(&countries);
        assert!(page.info().is_empty());

        page.clear();
        assert!(page.is_blank());
    }

    #[test]
    fn test_document_contains_regions() {
        let mut page = Page::default();
        let country: Country = Faker.fake();
        page.set_query("\"fr\"");
        page.show_card(&country);

        let document = page.render().into_string();
        assert!(document.starts_with("<!DOCTYPE html>"));
        assert!(document.contains(r#"<input id="search-box" type="text" value="&quot;fr&quot;">"#));
        assert!(document.contains(r#"<ul class="country-list"></ul>"#));
        assert!(document.contains(&format!(r#"<div class="country-info">{}</div>"#, page.info())));
    }
}
