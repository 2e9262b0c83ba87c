//! Single-producer/single-consumer handoff between the parser and the writer.
//!
//! The channel is bounded, so a producer that runs ahead of the consumer
//! blocks in [`RecordSender::send`]. The end of the stream is an explicit
//! marker sent by [`RecordSender::close`], which consumes the sender: sending
//! after close or closing twice cannot be expressed. A sender dropped without
//! being closed is observed by the consumer as [`Received::Aborted`].

use std::sync::mpsc::{self, Receiver, SyncSender};

use thiserror::Error;

use crate::record::Record;

#[cfg(feature = "async")]
mod async_channel;

#[cfg(feature = "async")]
pub use async_channel::{AsyncRecordReceiver, AsyncRecordSender, async_channel};

/// Records in flight between parser and writer (beyond the one being handed over).
pub const DEFAULT_CAPACITY: usize = 1;

#[derive(Debug)]
pub(crate) enum Message {
    Record(Record),
    End,
}

/// The consumer has gone away; the record was not delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("record receiver has been dropped")]
pub struct SendError;

/// What the consumer observes on receive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Received {
    Record(Record),
    /// The producer closed the channel; no more records will arrive.
    Closed,
    /// The producer went away without closing the channel.
    Aborted,
}

/// Producer side of a record channel, as seen by the parser loop.
pub trait RecordSink {
    /// Hand over one record, waiting while the channel is full.
    fn send(&self, record: Record) -> Result<(), SendError>;

    /// Signal that no more records will be sent.
    fn close(self);
}

/// Create a bounded record channel. A capacity of 0 makes every send a rendezvous.
pub fn channel(capacity: usize) -> (RecordSender, RecordReceiver) {
    let (tx, rx) = mpsc::sync_channel(capacity);
    (
        RecordSender { tx },
        RecordReceiver { rx, closed: false },
    )
}

/// Sending half. Deliberately not `Clone`.
#[derive(Debug)]
pub struct RecordSender {
    tx: SyncSender<Message>,
}

impl RecordSender {
    pub fn send(&self, record: Record) -> Result<(), SendError> {
        self.tx.send(Message::Record(record)).map_err(|_| SendError)
    }

    pub fn close(self) {
        // A consumer that already left has nothing to be told.
        let _ = self.tx.send(Message::End);
    }
}

impl RecordSink for RecordSender {
    fn send(&self, record: Record) -> Result<(), SendError> {
        RecordSender::send(self, record)
    }

    fn close(self) {
        RecordSender::close(self)
    }
}

/// Receiving half.
#[derive(Debug)]
pub struct RecordReceiver {
    rx: Receiver<Message>,
    closed: bool,
}

impl RecordReceiver {
    /// Wait for the next record. Once the channel is closed every further
    /// call returns [`Received::Closed`] without blocking.
    pub fn recv(&mut self) -> Received {
        if self.closed {
            return Received::Closed;
        }

        match self.rx.recv() {
            Ok(Message::Record(record)) => Received::Record(record),
            Ok(Message::End) => {
                self.closed = true;
                Received::Closed
            }
            Err(mpsc::RecvError) => Received::Aborted,
        }
    }
}
