//! Output target trait definition.

use std::fmt::Debug;
use std::io::Write;

/// Trait for JSON output destinations.
pub trait OutputTarget: Send + Sync + Debug {
    /// Returns a unique identifier for this output target.
    ///
    /// This is used for error messages and logging.
    /// Convention: "-" for stdout, file path for files.
    fn id(&self) -> &str;

    /// Open the target for writing, truncating any existing content.
    fn open(&self) -> std::io::Result<Box<dyn Write + Send>>;
}
