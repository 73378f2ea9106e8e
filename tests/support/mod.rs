#![allow(dead_code)]

use std::io::Write;

use hotspots::testkit::document::DocumentBuilder;
use tempfile::NamedTempFile;

/// Write a result-set document to a temporary `.json` file.
pub fn document_file(doc: &DocumentBuilder) -> NamedTempFile {
    write_temp(".json", &doc.to_json())
}

/// Write TOML configuration to a temporary `.toml` file.
pub fn config_file(content: &str) -> NamedTempFile {
    write_temp(".toml", content)
}

fn write_temp(suffix: &str, content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("create temp file");
    file.write_all(content.as_bytes()).expect("write temp file");
    file.flush().expect("flush temp file");
    file
}
