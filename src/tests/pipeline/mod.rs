//! Pipeline module tests.

#[cfg(feature = "async")]
mod async_tests;
mod property_tests;
