//! Tests for the tokio-based pipeline.

use std::sync::Arc;

use crate::config::AsyncConvertConfig;
use crate::diagnostics::MemoryDiagnostics;
use crate::error::{ParseError, Stage};
use crate::io::{AsyncFileOutput, AsyncOutputTarget, InMemorySink, InMemorySource};
use crate::pipeline_async::AsyncConverter;
use crate::tests::support::{MissingInput, generated_csv};
use crate::convert_async;

fn async_config(csv: &str) -> (AsyncConvertConfig, Arc<InMemorySink>) {
    let sink = Arc::new(InMemorySink::new("out"));
    let config = AsyncConvertConfig::new(
        Arc::new(InMemorySource::from_string("in", csv)),
        sink.clone(),
    );
    (config, sink)
}

#[tokio::test]
async fn async_pipeline_matches_sync_output() {
    let (config, sink) = async_config("id,name\n1,Ann\n2,Bo\n3,4,5\n");
    let diagnostics = Arc::new(MemoryDiagnostics::new());

    let report = convert_async(config.with_diagnostics(diagnostics.clone()))
        .await
        .unwrap();

    assert_eq!(report.records_written, 2);
    assert_eq!(report.rows_skipped, 1);
    assert_eq!(diagnostics.rows()[0].line, 4);
    assert_eq!(
        sink.contents_string(),
        r#"[{"id":"1","name":"Ann"},{"id":"2","name":"Bo"}]"#
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn async_pipeline_preserves_order() {
    let (config, sink) = async_config(&generated_csv(500, ';'));
    let converter = AsyncConverter::new(
        config
            .with_delimiter(crate::Delimiter::Semicolon)
            .pretty(true)
            .with_channel_capacity(0),
    );

    let report = converter.run().await.unwrap();
    assert_eq!(report.records_written, 500);

    let value: serde_json::Value = serde_json::from_str(&sink.contents_string()).unwrap();
    let last = &value.as_array().unwrap()[499];
    assert_eq!(last["id"], "499");
}

#[tokio::test]
async fn async_pipeline_parse_failure() {
    let (config, _) = async_config("");
    let err = AsyncConverter::new(config).run().await.unwrap_err();

    assert_eq!(err.stage, Stage::Parse);
    assert!(matches!(err.cause::<ParseError>(), Some(ParseError::MissingHeader)));
}

#[tokio::test]
async fn async_pipeline_input_open_failure() {
    let config = AsyncConvertConfig::new(
        Arc::new(MissingInput),
        Arc::new(InMemorySink::new("out")),
    );
    let err = convert_async(config).await.unwrap_err();
    assert_eq!(err.stage, Stage::InputOpen);
}

#[tokio::test]
async fn async_pipeline_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.json");
    let output = AsyncFileOutput::new(&path);
    assert_eq!(AsyncOutputTarget::id(&output), path.to_string_lossy());

    let config = AsyncConvertConfig::new(
        Arc::new(InMemorySource::from_string("in", "a\n1\n")),
        Arc::new(output),
    );
    convert_async(config).await.unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), r#"[{"a":"1"}]"#);
}
