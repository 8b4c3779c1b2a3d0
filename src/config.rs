/// Controls the generation fan-out: how many archives to build and how
/// many documents each one holds.
#[derive(Clone, Debug)]
pub struct GenerationConfig {
    /// Number of independent archives to create.
    pub archive_count: usize,
    /// Number of documents serialized into each archive.
    pub documents_per_archive: usize,
    /// Worker threads for the fan-out; 0 means available parallelism.
    pub workers: usize,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            archive_count: 50,
            documents_per_archive: 100,
            workers: 0,
        }
    }
}

/// Controls the ingestion fan-out over a directory of archives.
#[derive(Clone, Debug)]
pub struct IngestionConfig {
    /// Worker threads for the fan-out; 0 means available parallelism.
    pub workers: usize,
}

impl Default for IngestionConfig {
    fn default() -> Self {
        Self { workers: 0 }
    }
}
