//! Shared tools for the tests in this crate.

pub mod logging;
pub mod test_tools;
