//! Markup for the page and its regions.
//!
//! Everything interpolated from an API response is escaped by [`maud`].

use crate::Page;
use country_search_api::Country;
use maud::{html, Markup, PreEscaped, DOCTYPE};

/// Height of the flag images, as an HTML attribute value.
const FLAG_HEIGHT: &str = "15px";

/// List items for a handful of matching countries: flag and name.
pub fn country_list(countries: &[Country]) -> Markup {
    html! {
        @for country in countries {
            li class="country-list-item" {
                img src=(country.flags.svg) alt="flag" height=(FLAG_HEIGHT);
                p { (country.name) }
            }
        }
    }
}

/// The detail card for a single country.
pub fn country_card(country: &Country) -> Markup {
    let languages = country.language_names().collect::<Vec<_>>().join(", ");
    html! {
        div class="country-list-item" {
            img src=(country.flags.svg) alt="flag" height=(FLAG_HEIGHT);
            h1 { (country.name) }
        }
        ul class="country-list" {
            (card_row("Capital", country.capital.as_deref().unwrap_or_default()))
            (card_row("Population", country.population))
            (card_row("Languages", languages))
        }
    }
}

/// One labelled row of the detail card.
fn card_row(label: &str, value: impl maud::Render) -> Markup {
    html! {
        li { p class="country-list-text" { b { (label) } ": " (value) } }
    }
}

/// The whole page: the search box followed by both regions.
pub fn document(page: &Page) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { "Country search" }
            }
            body {
                input id="search-box" type="text" value=(page.query());
                ul class="country-list" { (PreEscaped(page.list())) }
                div class="country-info" { (PreEscaped(page.info())) }
            }
        }
    }
}
