// std imports
use std::num::NonZeroUsize;
use std::panic::resume_unwind;
use std::sync::atomic::{AtomicBool, Ordering};

// third-party imports
use crossbeam_channel as channel;
use crossbeam_utils::thread;

// local imports
use crate::text::Text;

// ---

/// Batch matches a single subject against many patterns, spreading the patterns over
/// a number of scoped threads.
///
/// Results are returned in pattern order. If any pattern is malformed the whole batch fails
/// with the first error reported by a worker, and workers stop picking up further patterns.
///
/// # Examples
///
/// ```
/// use globfold::Batch;
///
/// let patterns = ["foo*", "Foo*", "baz[0-9]"];
/// assert_eq!(Batch::new().run(&patterns, "foobar"), Ok(vec![true, false, false]));
/// assert_eq!(Batch::new().fold(true).run(&patterns, "foobar"), Ok(vec![true, true, false]));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Batch {
    fold: bool,
    concurrency: NonZeroUsize,
    chunk_size: NonZeroUsize,
}

impl Batch {
    /// Default minimum number of patterns handed to a single worker.
    pub const DEFAULT_CHUNK_SIZE: NonZeroUsize = NonZeroUsize::new(16).unwrap();

    /// Creates a case-sensitive batch using all available CPUs.
    pub fn new() -> Self {
        Self {
            fold: false,
            concurrency: NonZeroUsize::new(num_cpus::get()).unwrap_or(NonZeroUsize::MIN),
            chunk_size: Self::DEFAULT_CHUNK_SIZE,
        }
    }

    /// Enables or disables case folding.
    pub fn fold(self, fold: bool) -> Self {
        Self { fold, ..self }
    }

    /// Sets the maximum number of worker threads, zero is treated as one.
    pub fn concurrency(self, concurrency: usize) -> Self {
        Self {
            concurrency: NonZeroUsize::new(concurrency).unwrap_or(NonZeroUsize::MIN),
            ..self
        }
    }

    /// Sets the minimum number of patterns a worker thread is started for, zero is treated as one.
    pub fn chunk_size(self, chunk_size: usize) -> Self {
        Self {
            chunk_size: NonZeroUsize::new(chunk_size).unwrap_or(NonZeroUsize::MIN),
            ..self
        }
    }

    /// Matches `subject` against every pattern.
    pub fn run<P, S>(&self, patterns: &[P], subject: &S) -> wildcard::Result<Vec<bool>>
    where
        P: Text + Sync,
        S: Text + ?Sized,
    {
        let subject = subject.utf8();
        let subject: &[u8] = &subject;
        let mut results = vec![false; patterns.len()];

        let workers = self.workers(patterns.len());
        if workers <= 1 {
            for (pattern, result) in patterns.iter().zip(results.iter_mut()) {
                *result = self.eval(pattern, subject)?;
            }
            return Ok(results);
        }

        let chunk = patterns.len().div_ceil(workers);
        log::debug!(
            "matching {} patterns using {} workers with up to {} patterns each",
            patterns.len(),
            workers,
            chunk
        );

        let (tx, rx) = channel::bounded(1);
        let failed = AtomicBool::new(false);

        thread::scope(|scope| {
            for (patterns, results) in patterns.chunks(chunk).zip(results.chunks_mut(chunk)) {
                let tx = tx.clone();
                let failed = &failed;
                scope.spawn(move |_| {
                    for (pattern, result) in patterns.iter().zip(results.iter_mut()) {
                        if failed.load(Ordering::Relaxed) {
                            break;
                        }
                        match self.eval(pattern, subject) {
                            Ok(matched) => *result = matched,
                            Err(err) => {
                                failed.store(true, Ordering::Relaxed);
                                // the slot is taken by an earlier error
                                tx.try_send(err).ok();
                                break;
                            }
                        }
                    }
                });
            }
        })
        .unwrap_or_else(|payload| resume_unwind(payload));

        drop(tx);
        match rx.try_recv() {
            Ok(err) => Err(err),
            Err(_) => Ok(results),
        }
    }

    fn workers(&self, patterns: usize) -> usize {
        self.concurrency.get().min(patterns.div_ceil(self.chunk_size.get()))
    }

    #[inline]
    fn eval<P: Text + ?Sized>(&self, pattern: &P, subject: &[u8]) -> wildcard::Result<bool> {
        let pattern = pattern.utf8();
        if self.fold {
            wildcard::matches_fold(&pattern, subject)
        } else {
            wildcard::matches(&pattern, subject)
        }
    }
}

impl Default for Batch {
    fn default() -> Self {
        Self::new()
    }
}

// ---

/// Matches `subject` against every pattern case-sensitively, see [`Batch`].
pub fn matches_many<P, S>(patterns: &[P], subject: &S) -> wildcard::Result<Vec<bool>>
where
    P: Text + Sync,
    S: Text + ?Sized,
{
    Batch::new().run(patterns, subject)
}

/// Matches `subject` against every pattern using case folding, see [`Batch`].
pub fn matches_fold_many<P, S>(patterns: &[P], subject: &S) -> wildcard::Result<Vec<bool>>
where
    P: Text + Sync,
    S: Text + ?Sized,
{
    Batch::new().fold(true).run(patterns, subject)
}
