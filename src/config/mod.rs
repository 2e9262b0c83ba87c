//! Configuration types for a conversion run.
//!
//! This module provides:
//! - `ConvertConfig`: The explicit value handed to the pipeline
//! - `Settings`: Delimiter, style and channel capacity, loadable from files

mod convert;
mod settings;

pub use convert::ConvertConfig;
pub use settings::{Settings, SettingsError};

// Async version
#[cfg(feature = "async")]
mod async_convert;

#[cfg(feature = "async")]
pub use async_convert::AsyncConvertConfig;
