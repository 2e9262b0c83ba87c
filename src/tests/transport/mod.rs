#[cfg(feature = "async")]
mod async_channel_tests;
