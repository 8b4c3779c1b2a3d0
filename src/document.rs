use rand::Rng;
use uuid::Uuid;

use crate::constants::document::{LEVEL_MAX, LEVEL_MIN, OBJECTS_MAX, OBJECTS_MIN};
use crate::types::{DocumentId, ObjectName};

/// One named object nested inside a document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ObjectRef {
    /// Random token naming this object; unrelated to the owning document id.
    pub name: ObjectName,
}

/// One generated structured document.
///
/// Constructed once by [`DocumentFactory::create`], serialized immediately,
/// and never mutated afterward.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document {
    /// Globally-unique random token identifying this document.
    pub id: DocumentId,
    /// Uniform random level in `[LEVEL_MIN, LEVEL_MAX]`.
    pub level: u32,
    /// Ordered nested objects, between `OBJECTS_MIN` and `OBJECTS_MAX` of them.
    pub objects: Vec<ObjectRef>,
}

/// Builds randomized documents.
///
/// Pure except for RNG consumption; every token is generated independently
/// so collisions stay at the negligible 128-bit-random level.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentFactory;

impl DocumentFactory {
    /// Generate one document with a fresh id, level, and object list.
    pub fn create<R: Rng + ?Sized>(&self, rng: &mut R) -> Document {
        let object_count = rng.random_range(OBJECTS_MIN..=OBJECTS_MAX);
        let objects = (0..object_count)
            .map(|_| ObjectRef {
                name: random_token(),
            })
            .collect();
        Document {
            id: random_token(),
            level: rng.random_range(LEVEL_MIN..=LEVEL_MAX),
            objects,
        }
    }
}

/// Fresh 128-bit random token in UUIDv4 text form.
pub fn random_token() -> String {
    Uuid::new_v4().to_string()
}
