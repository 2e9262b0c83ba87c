//! JSON array writer: records in, one well-formed JSON array out.
//!
//! The array is assembled incrementally. The opening bracket is written
//! first, each record is serialized as soon as it arrives and the closing
//! bracket is written when the record stream is closed.

mod formatter;

use std::io::{self, BufWriter, Write};

use serde::Serialize;
use tracing::{debug, info};

use crate::error::WriteError;
use crate::record::Record;
use crate::transport::{Received, RecordReceiver};

use formatter::ArrayItemFormatter;

/// Indentation unit of pretty output.
pub const INDENT: &str = "   ";

/// Rendering mode of the output array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Style {
    /// No whitespace at all
    #[default]
    Compact,
    /// One record per line block, indented by [`INDENT`]
    Pretty,
}

impl Style {
    pub fn from_pretty(pretty: bool) -> Self {
        if pretty { Style::Pretty } else { Style::Compact }
    }

    pub fn is_pretty(self) -> bool {
        matches!(self, Style::Pretty)
    }

    /// Text that opens the array.
    pub fn open(self) -> &'static str {
        match self {
            Style::Compact => "[",
            Style::Pretty => "[\n",
        }
    }

    /// Text written before every record but the first.
    pub fn separator(self) -> &'static str {
        match self {
            Style::Compact => ",",
            Style::Pretty => ",\n",
        }
    }

    /// Text that closes the array.
    pub fn close(self, any_written: bool) -> &'static str {
        match self {
            Style::Pretty if any_written => "\n]",
            Style::Compact | Style::Pretty => "]",
        }
    }
}

/// Render one array element (without separator) into `out`.
pub fn render_record<W: Write>(record: &Record, style: Style, out: &mut W) -> io::Result<()> {
    match style {
        Style::Compact => serde_json::to_writer(&mut *out, record).map_err(io::Error::from),
        Style::Pretty => {
            out.write_all(INDENT.as_bytes())?;
            let formatter = ArrayItemFormatter::new(INDENT.as_bytes(), 1);
            let mut ser = serde_json::Serializer::with_formatter(&mut *out, formatter);
            record.serialize(&mut ser).map_err(io::Error::from)
        }
    }
}

/// Exclusive owner of the output handle.
///
/// Text goes through a buffer; [`FragmentWriter::finish`] flushes it and
/// hands the sink back, so dropping the result releases the handle.
#[derive(Debug)]
pub struct FragmentWriter<W: Write> {
    out: BufWriter<W>,
}

impl<W: Write> FragmentWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            out: BufWriter::new(sink),
        }
    }

    pub fn write_fragment(&mut self, text: &str) -> io::Result<()> {
        self.out.write_all(text.as_bytes())
    }

    /// Flush everything down to the sink and return it.
    pub fn finish(mut self) -> io::Result<W> {
        self.out.flush()?;
        self.out.into_inner().map_err(|e| e.into_error())
    }

    fn buffer(&mut self) -> &mut BufWriter<W> {
        &mut self.out
    }
}

/// Stateful writer for one JSON array.
#[derive(Debug)]
pub struct JsonArrayWriter<W: Write> {
    out: FragmentWriter<W>,
    style: Style,
    written: u64,
}

impl<W: Write> JsonArrayWriter<W> {
    pub fn new(sink: W, style: Style) -> Self {
        Self {
            out: FragmentWriter::new(sink),
            style,
            written: 0,
        }
    }

    pub fn style(&self) -> Style {
        self.style
    }

    /// Records written so far.
    pub fn records_written(&self) -> u64 {
        self.written
    }

    pub fn begin(&mut self) -> io::Result<()> {
        self.out.write_fragment(self.style.open())
    }

    pub fn write_record(&mut self, record: &Record) -> io::Result<()> {
        if self.written > 0 {
            self.out.write_fragment(self.style.separator())?;
        }
        render_record(record, self.style, self.out.buffer())?;
        self.written += 1;
        Ok(())
    }

    /// Close the array, flush and release the sink. Returns the record count.
    pub fn finish(mut self) -> io::Result<u64> {
        self.out.write_fragment(self.style.close(self.written > 0))?;
        self.out.finish()?;
        Ok(self.written)
    }
}

/// Counters reported by the writer loops.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriteSummary {
    pub records_written: u64,
}

/// Consumer loop: write every received record, then close the array.
///
/// An aborted stream leaves the array unterminated and yields
/// [`WriteError::Aborted`]. Returning early drops `receiver`, which stops
/// the producer.
pub fn run_writer<W: Write>(
    mut receiver: RecordReceiver,
    mut writer: JsonArrayWriter<W>,
) -> Result<WriteSummary, WriteError> {
    info!(pretty = writer.style().is_pretty(), "writing JSON array");
    writer.begin()?;

    loop {
        match receiver.recv() {
            Received::Record(record) => writer.write_record(&record)?,
            Received::Closed => break,
            Received::Aborted => {
                debug!(
                    records_written = writer.records_written(),
                    "record stream aborted; output left incomplete"
                );
                return Err(WriteError::Aborted);
            }
        }
    }

    let records_written = writer.finish()?;
    info!(records_written, "JSON array complete");
    Ok(WriteSummary { records_written })
}

/// Async consumer loop writing through a tokio sink.
#[cfg(feature = "async")]
pub async fn run_writer_async<W>(
    mut receiver: crate::transport::AsyncRecordReceiver,
    mut sink: W,
    style: Style,
) -> Result<WriteSummary, WriteError>
where
    W: tokio::io::AsyncWrite + Unpin,
{
    use tokio::io::AsyncWriteExt;

    info!(pretty = style.is_pretty(), "writing JSON array");
    sink.write_all(style.open().as_bytes()).await?;

    let mut records_written = 0u64;
    let mut buf = Vec::new();
    loop {
        match receiver.recv().await {
            Received::Record(record) => {
                buf.clear();
                if records_written > 0 {
                    buf.extend_from_slice(style.separator().as_bytes());
                }
                render_record(&record, style, &mut buf)?;
                sink.write_all(&buf).await?;
                records_written += 1;
            }
            Received::Closed => break,
            Received::Aborted => {
                debug!(records_written, "record stream aborted; output left incomplete");
                return Err(WriteError::Aborted);
            }
        }
    }

    sink.write_all(style.close(records_written > 0).as_bytes()).await?;
    sink.flush().await?;
    sink.shutdown().await?;
    info!(records_written, "JSON array complete");
    Ok(WriteSummary { records_written })
}
