//! Internal test suite.

mod support;

mod config;
mod pipeline;
mod transport;
