//! Tests for the tokio record channel.

use crate::tests::support::{header, record};
use crate::transport::{Received, async_channel};

#[tokio::test]
async fn async_channel_delivers_then_closes() {
    let (sender, mut receiver) = async_channel(0);

    let producer = tokio::task::spawn_blocking(move || {
        let h = header(&["n"]);
        for i in 0..10 {
            sender.blocking_send(record(&h, &[i.to_string().as_str()])).unwrap();
        }
        sender.blocking_close();
    });

    let mut seen = Vec::new();
    while let Received::Record(r) = receiver.recv().await {
        seen.push(r.get("n").unwrap().to_string());
    }
    producer.await.unwrap();

    assert_eq!(seen.len(), 10);
    assert_eq!(seen[9], "9");
    assert_eq!(receiver.recv().await, Received::Closed);
}

#[tokio::test]
async fn async_sender_dropped_without_close_aborts() {
    let (sender, mut receiver) = async_channel(1);
    tokio::task::spawn_blocking(move || drop(sender))
        .await
        .unwrap();

    assert_eq!(receiver.recv().await, Received::Aborted);
}
