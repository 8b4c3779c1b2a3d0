use std::collections::HashSet;

use corpusmill::tables::read_rows;
use corpusmill::{
    GenerationConfig, GenerationPipeline, IngestionConfig, IngestionPipeline, TableWriter,
};
use tempfile::tempdir;

/// End-to-end: generate a corpus, ingest it, persist both tables, and
/// read them back.
#[test]
fn generated_corpus_round_trips_into_tables() {
    let corpus = tempdir().unwrap();

    let report = GenerationPipeline::new(GenerationConfig {
        archive_count: 5,
        documents_per_archive: 3,
        workers: 0,
    })
    .run(corpus.path())
    .unwrap();
    assert!(report.is_complete());
    assert_eq!(report.archives_written, 5);
    assert_eq!(report.documents_written, 15);

    let outcome = IngestionPipeline::new(IngestionConfig::default())
        .run(corpus.path())
        .unwrap();
    assert!(outcome.is_complete());
    assert_eq!(outcome.summaries.len(), 15);
    assert_eq!(outcome.stats.len(), 5);
    for stats in &outcome.stats {
        assert_eq!(stats.documents, 3);
        assert!(stats.error.is_none());
    }

    // Document invariants survive the round trip.
    let mut ids = HashSet::new();
    for summary in &outcome.summaries {
        assert!((1..=100).contains(&summary.level));
        assert!(ids.insert(summary.id.clone()), "duplicate document id");
    }
    assert!(outcome.details.len() >= 15);
    assert!(outcome.details.len() <= 150);

    // Every detail row points at a summary row (one-to-many via id).
    for detail in &outcome.details {
        assert!(ids.contains(&detail.id));
    }

    // Persist and re-read both tables; rows must match field for field.
    let output = tempdir().unwrap();
    TableWriter
        .write_all(&outcome.summaries, &outcome.details, output.path())
        .unwrap();

    let summary_rows = read_rows(&output.path().join("summary.csv")).unwrap();
    assert_eq!(summary_rows.len(), outcome.summaries.len());
    for (row, record) in summary_rows.iter().zip(&outcome.summaries) {
        assert_eq!(row[0], record.id);
        assert_eq!(row[1], record.level.to_string());
    }

    let detail_rows = read_rows(&output.path().join("details.csv")).unwrap();
    assert_eq!(detail_rows.len(), outcome.details.len());
    for (row, record) in detail_rows.iter().zip(&outcome.details) {
        assert_eq!(row[0], record.id);
        assert_eq!(row[1], record.object_name);
    }
}

/// Re-running generation into the same directory adds archives; random
/// filenames keep prior output intact.
#[test]
fn reruns_accumulate_instead_of_clobbering() {
    let corpus = tempdir().unwrap();
    let pipeline = GenerationPipeline::new(GenerationConfig {
        archive_count: 3,
        documents_per_archive: 2,
        workers: 2,
    });

    pipeline.run(corpus.path()).unwrap();
    pipeline.run(corpus.path()).unwrap();

    let outcome = IngestionPipeline::new(IngestionConfig::default())
        .run(corpus.path())
        .unwrap();
    assert_eq!(outcome.stats.len(), 6);
    assert_eq!(outcome.summaries.len(), 12);
}
