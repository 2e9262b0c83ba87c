//! Tests for standard IO providers.

use std::fs;
use std::io::{Read, Write};

use crate::{FileInput, FileOutput, InputProvider, OutputTarget, StdinInput, StdoutOutput};

#[test]
fn file_input_reads_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("input.csv");
    fs::write(&path, b"id\n1\n").unwrap();

    let inp = FileInput::new(path.clone());
    assert_eq!(inp.path(), path.as_path());
    assert_eq!(inp.id(), path.to_string_lossy());

    let mut buf = String::new();
    inp.open().unwrap().read_to_string(&mut buf).unwrap();
    assert_eq!(buf, "id\n1\n");
}

#[test]
fn file_input_missing_file_fails_on_open() {
    let dir = tempfile::tempdir().unwrap();
    let inp = FileInput::new(dir.path().join("nope.csv"));

    let err = inp.open().err().expect("open fails");
    assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
}

#[test]
fn file_output_creates_and_truncates() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.json");
    fs::write(&path, b"a much longer previous content").unwrap();

    let out = FileOutput::new(path.clone());
    {
        let mut w = out.open().unwrap();
        w.write_all(b"[]").unwrap();
    }

    assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
}

#[test]
fn file_output_in_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let out = FileOutput::new(dir.path().join("missing").join("out.json"));
    assert!(out.open().is_err());
}

#[test]
fn standard_streams_use_dash_id() {
    assert_eq!(StdinInput::new().id(), "-");
    assert_eq!(StdoutOutput::default().id(), "-");
}
