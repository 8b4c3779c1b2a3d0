//! Bounded fan-out worker pool shared by both pipelines.
//!
//! Tasks are claimed by index from an atomic counter and every result
//! lands in the slot matching its submission index, so the driver drains
//! results in submission order no matter which task finishes first. The
//! two output tables stay owned by the single aggregating caller; workers
//! only ever return their local batch.

use std::num::NonZeroUsize;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::thread;

use crate::errors::CorpusError;

/// One isolated task failure surfaced by a pipeline report.
///
/// A failing task never aborts its siblings; it is recorded here (and
/// logged) instead of silently vanishing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArchiveFailure {
    /// Archive the task was working on.
    pub path: PathBuf,
    /// Rendered failure reason.
    pub reason: String,
}

/// Resolve a configured worker count; 0 means available parallelism.
pub fn effective_workers(configured: usize) -> usize {
    if configured > 0 {
        return configured;
    }
    thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1)
}

/// Run one closure per task on at most `workers` threads and return the
/// results in submission order.
///
/// Blocks until every task has completed or failed. A panicking task is
/// converted into an error in its own slot; sibling tasks keep running.
pub fn run_ordered<T, U, F>(tasks: &[T], workers: usize, run: F) -> Vec<Result<U, CorpusError>>
where
    T: Sync,
    U: Send,
    F: Fn(usize, &T) -> Result<U, CorpusError> + Sync,
{
    let total = tasks.len();
    if total == 0 {
        return Vec::new();
    }
    let workers = effective_workers(workers).min(total);

    let next = AtomicUsize::new(0);
    let slots: Vec<Mutex<Option<Result<U, CorpusError>>>> =
        (0..total).map(|_| Mutex::new(None)).collect();

    thread::scope(|scope| {
        for _ in 0..workers {
            scope.spawn(|| loop {
                let index = next.fetch_add(1, Ordering::SeqCst);
                if index >= total {
                    break;
                }
                let result = catch_unwind(AssertUnwindSafe(|| run(index, &tasks[index])))
                    .unwrap_or_else(|_| {
                        Err(CorpusError::Configuration(format!(
                            "worker task {index} panicked"
                        )))
                    });
                *slots[index].lock().expect("result slot poisoned") = Some(result);
            });
        }
    });

    slots
        .into_iter()
        .map(|slot| {
            slot.into_inner()
                .expect("result slot poisoned")
                .expect("every task index was claimed")
        })
        .collect()
}
