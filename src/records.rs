use std::borrow::Cow;

use crate::document::Document;
use crate::types::{DocumentId, ObjectName};

/// Flattened summary projection of one document: `(id, level)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummaryRecord {
    /// Owning document id.
    pub id: DocumentId,
    /// Document level copied verbatim.
    pub level: u32,
}

/// Flattened detail projection of one nested object: `(id, object_name)`.
///
/// The owning document's id is denormalized onto every row, giving the
/// one-to-many summary/detail relationship via the shared id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailRecord {
    /// Owning document id.
    pub id: DocumentId,
    /// Name of one nested object.
    pub object_name: ObjectName,
}

/// Row projection used by the table writer: each record serializes to a
/// fixed pair of delimited fields in declared order.
pub trait FlatRecord {
    /// The record's fields, in output column order.
    fn fields(&self) -> [Cow<'_, str>; 2];
}

impl FlatRecord for SummaryRecord {
    fn fields(&self) -> [Cow<'_, str>; 2] {
        [
            Cow::Borrowed(self.id.as_str()),
            Cow::Owned(self.level.to_string()),
        ]
    }
}

impl FlatRecord for DetailRecord {
    fn fields(&self) -> [Cow<'_, str>; 2] {
        [
            Cow::Borrowed(self.id.as_str()),
            Cow::Borrowed(self.object_name.as_str()),
        ]
    }
}

/// Ordered record batches produced by reading one archive.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ArchiveBatch {
    /// One row per decoded document, in entry order.
    pub summaries: Vec<SummaryRecord>,
    /// One row per nested object, grouped under its document in entry order.
    pub details: Vec<DetailRecord>,
}

impl ArchiveBatch {
    /// Append one document's flattened rows to this batch.
    pub fn push_document(&mut self, document: &Document) {
        self.summaries.push(SummaryRecord {
            id: document.id.clone(),
            level: document.level,
        });
        for object in &document.objects {
            self.details.push(DetailRecord {
                id: document.id.clone(),
                object_name: object.name.clone(),
            });
        }
    }

    /// Number of documents flattened into this batch.
    pub fn document_count(&self) -> usize {
        self.summaries.len()
    }
}
