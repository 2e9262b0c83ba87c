//! Tests for in-memory IO implementations.

use std::io::{Read, Write};

use crate::{InMemorySink, InMemorySource, InputProvider, OutputTarget};

#[test]
fn in_memory_source_reads_data_on_every_open() {
    let src = InMemorySource::from_string("in", "a,b\n1,2\n");
    assert_eq!(src.id(), "in");

    for _ in 0..2 {
        let mut reader = src.open().expect("open in-memory source");
        let mut buf = String::new();
        reader.read_to_string(&mut buf).unwrap();
        assert_eq!(buf, "a,b\n1,2\n");
    }
}

#[test]
fn in_memory_sink_truncates_on_open() {
    let sink = InMemorySink::new("out");

    {
        let mut w = sink.open().unwrap();
        w.write_all(b"first run").unwrap();
    }
    assert_eq!(sink.contents_string(), "first run");

    {
        let mut w = sink.open().unwrap();
        w.write_all(b"[]").unwrap();
    }
    assert_eq!(sink.contents(), b"[]".to_vec());
}

#[test]
fn in_memory_sink_clones_share_buffer() {
    let sink = InMemorySink::new("out");
    let view = sink.clone();

    sink.open().unwrap().write_all(b"shared").unwrap();
    assert_eq!(view.contents_string(), "shared");

    view.clear();
    assert!(sink.contents().is_empty());
}
