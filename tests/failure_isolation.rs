use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use corpusmill::{IngestionConfig, IngestionPipeline};
use tempfile::tempdir;
use zip::write::FileOptions;
use zip::ZipWriter;

fn write_entries(dir: &Path, archive_name: &str, entries: &[(&str, &str)]) {
    let file = File::create(dir.join(archive_name)).unwrap();
    let mut writer = ZipWriter::new(file);
    let options = FileOptions::default();
    for (name, body) in entries {
        writer.start_file(*name, options).unwrap();
        writer.write_all(body.as_bytes()).unwrap();
    }
    writer.finish().unwrap();
}

fn valid_document(id: &str) -> String {
    format!(
        "<root><var name='id' value='{id}'/><var name='level' value='15'/>\
         <objects><object name='obj1'/></objects></root>"
    )
}

/// An entry with a missing `level` attribute fails its whole archive, but
/// every other archive's documents still reach the tables and the gap is
/// reported explicitly.
#[test]
fn decode_failure_is_contained_to_its_archive() {
    let corpus = tempdir().unwrap();
    write_entries(
        corpus.path(),
        "a.zip",
        &[("d0.xml", &valid_document("a-doc"))],
    );
    write_entries(
        corpus.path(),
        "b.zip",
        &[
            ("d0.xml", &valid_document("b-good")),
            (
                "d1.xml",
                "<root><var name='id' value='b-bad'/>\
                 <objects><object name='obj1'/></objects></root>",
            ),
        ],
    );
    write_entries(
        corpus.path(),
        "c.zip",
        &[("d0.xml", &valid_document("c-doc"))],
    );

    let outcome = IngestionPipeline::new(IngestionConfig { workers: 3 })
        .run(corpus.path())
        .unwrap();

    assert!(!outcome.is_complete());
    assert_eq!(outcome.failures.len(), 1);
    assert!(outcome.failures[0].path.ends_with("b.zip"));
    assert!(outcome.failures[0].reason.contains("level"));

    // Strict per-archive failure: even b.zip's good entry is dropped.
    let ids: Vec<&str> = outcome
        .summaries
        .iter()
        .map(|row| row.id.as_str())
        .collect();
    assert_eq!(ids, vec!["a-doc", "c-doc"]);
    assert_eq!(outcome.details.len(), 2);
}

/// A file that is not a zip container at all fails its task the same way.
#[test]
fn malformed_container_is_contained_to_its_archive() {
    let corpus = tempdir().unwrap();
    write_entries(
        corpus.path(),
        "good.zip",
        &[("d0.xml", &valid_document("ok"))],
    );
    fs::write(corpus.path().join("junk.zip"), b"PK is not enough").unwrap();

    let outcome = IngestionPipeline::new(IngestionConfig { workers: 2 })
        .run(corpus.path())
        .unwrap();

    assert_eq!(outcome.failures.len(), 1);
    assert!(outcome.failures[0].path.ends_with("junk.zip"));
    assert_eq!(outcome.summaries.len(), 1);
    assert_eq!(outcome.summaries[0].id, "ok");
}

/// Non-document entries are skipped quietly; they are not decode failures.
#[test]
fn non_document_entries_do_not_fail_an_archive() {
    let corpus = tempdir().unwrap();
    write_entries(
        corpus.path(),
        "mixed.zip",
        &[
            ("manifest.json", "{}"),
            ("d0.xml", &valid_document("kept")),
            ("notes.txt", "scratch"),
        ],
    );

    let outcome = IngestionPipeline::new(IngestionConfig::default())
        .run(corpus.path())
        .unwrap();

    assert!(outcome.is_complete());
    assert_eq!(outcome.summaries.len(), 1);
    assert_eq!(outcome.summaries[0].id, "kept");
}
