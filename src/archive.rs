//! Archive container writing and reading.
//!
//! One archive is a plain zip file whose entries are XML-serialized
//! documents named `<token>.xml`. Writing creates (or truncates) the
//! container in one shot; reading walks entries in the container's own
//! enumeration order, which downstream row ordering depends on.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use rand::Rng;
use tracing::debug;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

use crate::codec;
use crate::constants::archive::ENTRY_EXTENSION;
use crate::document::{random_token, DocumentFactory};
use crate::errors::CorpusError;
use crate::records::ArchiveBatch;

/// Serializes freshly generated documents into one archive on disk.
#[derive(Clone, Copy, Debug, Default)]
pub struct ArchiveWriter {
    factory: DocumentFactory,
}

impl ArchiveWriter {
    pub fn new(factory: DocumentFactory) -> Self {
        Self { factory }
    }

    /// Create an archive at `archive_path` holding `document_count` fresh
    /// documents, one uniquely-named entry each. An existing file at the
    /// path is truncated, never merged into. Returns the entry count.
    pub fn write<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        archive_path: &Path,
        document_count: usize,
    ) -> Result<usize, CorpusError> {
        let file = File::create(archive_path)?;
        let mut writer = ZipWriter::new(file);
        let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

        for _ in 0..document_count {
            let document = self.factory.create(rng);
            let bytes = codec::encode(&document)?;
            let entry_name = format!("{}.{ENTRY_EXTENSION}", random_token());
            writer
                .start_file(entry_name, options)
                .map_err(|err| CorpusError::archive(archive_path, err))?;
            writer.write_all(&bytes)?;
        }

        writer
            .finish()
            .map_err(|err| CorpusError::archive(archive_path, err))?;
        debug!(
            archive = %archive_path.display(),
            documents = document_count,
            "archive written"
        );
        Ok(document_count)
    }
}

/// Parses one archive into flattened record batches.
#[derive(Clone, Copy, Debug, Default)]
pub struct ArchiveReader;

impl ArchiveReader {
    /// Decode every `.xml` entry of the archive, in the container's native
    /// enumeration order, into summary and detail rows.
    ///
    /// Strict by default: a malformed container or a single undecodable
    /// entry fails the whole archive, with no partial extraction.
    pub fn read(&self, archive_path: &Path) -> Result<ArchiveBatch, CorpusError> {
        let file = File::open(archive_path)?;
        let mut container =
            ZipArchive::new(file).map_err(|err| CorpusError::archive(archive_path, err))?;

        let suffix = format!(".{ENTRY_EXTENSION}");
        let mut batch = ArchiveBatch::default();
        let mut bytes = Vec::new();
        for index in 0..container.len() {
            let mut entry = container
                .by_index(index)
                .map_err(|err| CorpusError::archive(archive_path, err))?;
            let entry_name = entry.name().to_string();
            if !entry_name.ends_with(&suffix) {
                continue;
            }
            bytes.clear();
            entry.read_to_end(&mut bytes)?;
            let document = codec::decode(&entry_name, &bytes)?;
            batch.push_document(&document);
        }

        debug!(
            archive = %archive_path.display(),
            documents = batch.document_count(),
            detail_rows = batch.details.len(),
            "archive read"
        );
        Ok(batch)
    }
}
