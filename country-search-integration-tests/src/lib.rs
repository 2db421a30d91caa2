#![warn(missing_docs, clippy::missing_docs_in_private_items)]
// None of the tests are seen by the linter, so none of the utilities are marked
// as used. But docs don't generate for the below if they are `#[cfg(test)]`.
// This is a compromise.
#![allow(dead_code)]

//! Tests for country search that drive the page through real HTTP clients.
//!
//! The remote APIs are replaced by [`httpmock`] servers, so these tests check
//! the exact requests that are sent as well as what ends up on the page.
//!
//! This is structured as a separate crate so that it produces a single test
//! binary instead of one test per file.
//!
//! The primary tool used by tests is [`search_test`], which starts a mock
//! server, points the settings at it, builds a [`CountrySearch`] and provides
//! helpers to inspect notices and logs. It then calls the test function that is
//! passed to it, providing the above tools as an argument.
//!
//! ```
//! use country_search_integration_tests::{search_test, TestingTools};
//!
//! #[tokio::test]
//! async fn blank_input_is_cleared() {
//!     search_test(
//!         |_| (),
//!         |TestingTools { mut search, .. }| async move {
//!             search.handle_input("  ").await;
//!             assert!(search.page().is_blank());
//!         },
//!     )
//!     .await
//! }
//! ```
//!
//! [`CountrySearch`]: country_search_page::CountrySearch

mod debounce;
mod images;
mod logging;
mod search;
mod utils;

pub use crate::utils::{
    logging::{LogWatcher, TracingJsonEvent},
    test_tools::{country_json, search_test, NoticeLog, TestingTools},
};
