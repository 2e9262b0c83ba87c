//! I/O abstractions for the conversion input and output.
//!
//! This module provides:
//! - `InputProvider`: Trait for CSV sources
//! - `OutputTarget`: Trait for JSON destinations
//! - Standard implementations for files, stdin/stdout
//! - In-memory implementations for testing

mod input;
mod memory;
mod output;
mod std_io;

pub use input::InputProvider;
pub use memory::{InMemorySink, InMemorySource};
pub use output::OutputTarget;
pub use std_io::{FileInput, FileOutput, StdinInput, StdoutOutput};

// Async I/O support
#[cfg(feature = "async")]
mod async_output;
#[cfg(feature = "async")]
mod async_std_io;

#[cfg(feature = "async")]
pub use async_output::AsyncOutputTarget;
#[cfg(feature = "async")]
pub use async_std_io::{AsyncFileOutput, AsyncStdoutOutput};
