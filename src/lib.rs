#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Archive container writing and reading.
pub mod archive;
/// XML encode/decode for structured documents.
pub mod codec;
/// Pipeline configuration types.
pub mod config;
/// Centralized constants for document shape, wire format, and output layout.
pub mod constants;
/// Randomized document model and factory.
pub mod document;
/// Archive generation fan-out pipeline.
pub mod generation;
/// Archive ingestion fan-out and ordered aggregation.
pub mod ingestion;
/// Bounded indexed worker pool shared by both pipelines.
pub mod pool;
/// Flattened record and table types.
pub mod records;
/// Delimited table persistence.
pub mod tables;
/// Shared type aliases.
pub mod types;

mod errors;

pub use archive::{ArchiveReader, ArchiveWriter};
pub use config::{GenerationConfig, IngestionConfig};
pub use document::{Document, DocumentFactory, ObjectRef};
pub use errors::CorpusError;
pub use generation::{GenerationPipeline, GenerationReport};
pub use ingestion::{ArchiveIngestStats, IngestionOutcome, IngestionPipeline};
pub use pool::ArchiveFailure;
pub use records::{ArchiveBatch, DetailRecord, FlatRecord, SummaryRecord};
pub use tables::TableWriter;
pub use types::{DocumentId, EntryName, ObjectName};
