//! Shared fixtures for the internal tests.

use std::io::{self, Read, Write};
use std::sync::Arc;

use crate::config::ConvertConfig;
use crate::diagnostics::MemoryDiagnostics;
use crate::io::{InMemorySink, InMemorySource, InputProvider, OutputTarget};
use crate::record::{Header, Record};

pub(crate) fn header(names: &[&str]) -> Arc<Header> {
    Arc::new(Header::new(names.iter().map(|n| n.to_string()).collect()))
}

pub(crate) fn record(header: &Arc<Header>, fields: &[&str]) -> Record {
    Record::from_fields(header, fields.iter().map(|f| f.to_string()).collect())
        .expect("field count matches header")
}

/// In-memory config plus handles on its sink and diagnostics.
pub(crate) fn memory_config(
    csv: &str,
) -> (ConvertConfig, Arc<InMemorySink>, Arc<MemoryDiagnostics>) {
    let sink = Arc::new(InMemorySink::new("out"));
    let diagnostics = Arc::new(MemoryDiagnostics::new());
    let config = ConvertConfig::new(
        Arc::new(InMemorySource::from_string("in", csv)),
        sink.clone(),
    )
    .with_diagnostics(diagnostics.clone());
    (config, sink, diagnostics)
}

/// Input whose open always fails.
#[derive(Debug)]
pub(crate) struct MissingInput;

impl InputProvider for MissingInput {
    fn id(&self) -> &str {
        "missing.csv"
    }

    fn open(&self) -> io::Result<Box<dyn Read + Send>> {
        Err(io::Error::new(io::ErrorKind::NotFound, "no such file"))
    }
}

/// Input that yields `data` and then fails.
#[derive(Debug)]
pub(crate) struct TruncatedInput(pub &'static str);

impl InputProvider for TruncatedInput {
    fn id(&self) -> &str {
        "truncated.csv"
    }

    fn open(&self) -> io::Result<Box<dyn Read + Send>> {
        Ok(Box::new(
            io::Cursor::new(self.0.as_bytes().to_vec()).chain(FailingReader),
        ))
    }
}

struct FailingReader;

impl Read for FailingReader {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::ConnectionReset, "connection reset"))
    }
}

/// Output that either refuses to open or fails every write.
#[derive(Debug)]
pub(crate) struct BrokenOutput {
    pub fail_open: bool,
}

impl OutputTarget for BrokenOutput {
    fn id(&self) -> &str {
        "broken.json"
    }

    fn open(&self) -> io::Result<Box<dyn Write + Send>> {
        if self.fail_open {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only"));
        }
        Ok(Box::new(FailingWriter))
    }
}

pub(crate) struct FailingWriter;

impl Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::other("disk full"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// `count` data rows of `id,name,city`, separated by `delimiter`.
pub(crate) fn generated_csv(count: usize, delimiter: char) -> String {
    let mut csv = format!("id{delimiter}name{delimiter}city\n");
    for i in 0..count {
        csv.push_str(&format!("{i}{delimiter}name-{i}{delimiter}city-{}\n", i % 7));
    }
    csv
}
