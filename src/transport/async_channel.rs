//! Tokio flavour of the record channel.
//!
//! The producer side is meant for a blocking parser task
//! (`tokio::task::spawn_blocking`), the consumer side for an async writer.

use tokio::sync::mpsc;

use super::{Message, Received, RecordSink, SendError};
use crate::record::Record;

/// Create a bounded async record channel. Tokio channels need a capacity of
/// at least one, so 0 is raised to 1.
pub fn async_channel(capacity: usize) -> (AsyncRecordSender, AsyncRecordReceiver) {
    let (tx, rx) = mpsc::channel(capacity.max(1));
    (
        AsyncRecordSender { tx },
        AsyncRecordReceiver { rx, closed: false },
    )
}

#[derive(Debug)]
pub struct AsyncRecordSender {
    tx: mpsc::Sender<Message>,
}

impl AsyncRecordSender {
    /// Must not be called from within an async context.
    pub fn blocking_send(&self, record: Record) -> Result<(), SendError> {
        self.tx
            .blocking_send(Message::Record(record))
            .map_err(|_| SendError)
    }

    pub fn blocking_close(self) {
        let _ = self.tx.blocking_send(Message::End);
    }
}

impl RecordSink for AsyncRecordSender {
    fn send(&self, record: Record) -> Result<(), SendError> {
        self.blocking_send(record)
    }

    fn close(self) {
        self.blocking_close()
    }
}

#[derive(Debug)]
pub struct AsyncRecordReceiver {
    rx: mpsc::Receiver<Message>,
    closed: bool,
}

impl AsyncRecordReceiver {
    pub async fn recv(&mut self) -> Received {
        if self.closed {
            return Received::Closed;
        }

        match self.rx.recv().await {
            Some(Message::Record(record)) => Received::Record(record),
            Some(Message::End) => {
                self.closed = true;
                Received::Closed
            }
            None => Received::Aborted,
        }
    }
}
