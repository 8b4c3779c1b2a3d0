//! Archive generation fan-out.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::archive::ArchiveWriter;
use crate::config::GenerationConfig;
use crate::constants::archive::ARCHIVE_EXTENSION;
use crate::document::random_token;
use crate::errors::CorpusError;
use crate::pool::{self, ArchiveFailure};

/// Outcome of one generation run.
#[derive(Clone, Debug, Default)]
pub struct GenerationReport {
    /// Archives written successfully.
    pub archives_written: usize,
    /// Documents serialized across all successful archives.
    pub documents_written: usize,
    /// Per-archive failures, isolated from their siblings.
    pub failures: Vec<ArchiveFailure>,
}

impl GenerationReport {
    /// True when every archive task completed.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Fans out independent archive-writing tasks across a bounded worker pool.
///
/// Each task owns a uniquely-named file under the output directory, so no
/// locking is needed between tasks, and re-running never overwrites prior
/// output. There is no ordering guarantee among archives.
pub struct GenerationPipeline {
    config: GenerationConfig,
    writer: ArchiveWriter,
}

impl GenerationPipeline {
    pub fn new(config: GenerationConfig) -> Self {
        Self {
            config,
            writer: ArchiveWriter::default(),
        }
    }

    /// Create `archive_count` archives of `documents_per_archive` documents
    /// each under `output_dir` (which must already exist; directory setup
    /// belongs to the caller).
    ///
    /// Returns only after every task has completed or failed. A single
    /// task's I/O failure is logged and reported, not allowed to abort the
    /// rest of the run.
    pub fn run(&self, output_dir: &Path) -> Result<GenerationReport, CorpusError> {
        if !output_dir.is_dir() {
            return Err(CorpusError::Configuration(format!(
                "output directory '{}' does not exist",
                output_dir.display()
            )));
        }

        let targets: Vec<PathBuf> = (0..self.config.archive_count)
            .map(|_| output_dir.join(format!("{}.{ARCHIVE_EXTENSION}", random_token())))
            .collect();

        let results = pool::run_ordered(&targets, self.config.workers, |_, path| {
            let mut rng = rand::rng();
            self.writer
                .write(&mut rng, path, self.config.documents_per_archive)
        });

        let mut report = GenerationReport::default();
        for (path, result) in targets.iter().zip(results) {
            match result {
                Ok(documents) => {
                    report.archives_written += 1;
                    report.documents_written += documents;
                }
                Err(err) => {
                    warn!(
                        archive = %path.display(),
                        error = %err,
                        "archive generation failed"
                    );
                    report.failures.push(ArchiveFailure {
                        path: path.clone(),
                        reason: err.to_string(),
                    });
                }
            }
        }
        debug!(
            archives = report.archives_written,
            documents = report.documents_written,
            failures = report.failures.len(),
            "generation run finished"
        );
        Ok(report)
    }
}
