use crate::tests::support::{header, record};
use crate::transport::async_channel;
use crate::writer::{Style, run_writer_async};

#[tokio::test]
async fn async_writer_renders_compact_array() {
    let (sender, receiver) = async_channel(2);
    let producer = tokio::task::spawn_blocking(move || {
        let h = header(&["id", "name"]);
        sender.blocking_send(record(&h, &["1", "Ann"])).unwrap();
        sender.blocking_send(record(&h, &["2", "Bo"])).unwrap();
        sender.blocking_close();
    });

    let mut out: Vec<u8> = Vec::new();
    let summary = run_writer_async(receiver, &mut out, Style::Compact)
        .await
        .unwrap();
    producer.await.unwrap();

    assert_eq!(summary.records_written, 2);
    assert_eq!(
        String::from_utf8(out).unwrap(),
        r#"[{"id":"1","name":"Ann"},{"id":"2","name":"Bo"}]"#
    );
}

#[tokio::test]
async fn async_writer_pretty_empty_array() {
    let (sender, receiver) = async_channel(1);
    tokio::task::spawn_blocking(move || sender.blocking_close())
        .await
        .unwrap();

    let mut out: Vec<u8> = Vec::new();
    run_writer_async(receiver, &mut out, Style::Pretty).await.unwrap();
    assert_eq!(out, b"[\n]");
}
