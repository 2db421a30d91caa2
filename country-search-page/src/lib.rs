#![warn(missing_docs, clippy::missing_docs_in_private_items)]

//! The country search page.
//!
//! Input events flow through [`Debounced`] into [`CountrySearch`], which asks a
//! [`CountrySource`](country_search_api::CountrySource) for matches and
//! applies the resulting [`SearchOutcome`] to a [`Page`]. The page has two
//! regions, the country list and the country info card, and at most one of
//! them has content at a time. Notices go to a [`Notifier`].

mod debounce;
mod notify;
mod outcome;
mod page;
pub mod render;
mod search;

pub use crate::debounce::Debounced;
pub use crate::notify::{Notice, NoticeLevel, Notifier, TracingNotifier};
pub use crate::outcome::SearchOutcome;
pub use crate::page::Page;
pub use crate::search::CountrySearch;
