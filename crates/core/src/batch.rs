//! Concurrent batch classification.
//!
//! A fixed pool of worker threads pulls lines from a bounded queue,
//! classifies and renders each one, then writes the finished block to a
//! shared sink under a single lock. Reports never interleave; their order
//! across lines is completion order.

use std::io::{BufRead, Write};
use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::thread;

use crossbeam_channel::bounded;
use parking_lot::Mutex;

use crate::error::BatchError;
use crate::report::RenderConfig;
use crate::Hashhound;

/// Default number of workers.
pub const DEFAULT_WORKERS: usize = 4;

/// Batch configuration.
#[derive(Debug, Clone, Copy)]
pub struct BatchConfig {
    workers: NonZeroUsize,
    pub render: RenderConfig,
}

impl BatchConfig {
    /// Validate a requested worker count.
    ///
    /// # Errors
    ///
    /// Returns [`BatchError::InvalidWorkerCount`] when `workers` is not
    /// positive.
    pub fn new(workers: i64, render: RenderConfig) -> Result<Self, BatchError> {
        let workers = usize::try_from(workers)
            .ok()
            .and_then(NonZeroUsize::new)
            .ok_or(BatchError::InvalidWorkerCount(workers))?;

        Ok(Self { workers, render })
    }

    #[must_use]
    pub fn workers(&self) -> usize {
        self.workers.get()
    }
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            workers: NonZeroUsize::new(DEFAULT_WORKERS).unwrap_or(NonZeroUsize::MIN),
            render: RenderConfig::default(),
        }
    }
}

/// Runs classifications concurrently and owns the output sink.
pub struct BatchRunner<'a, W> {
    engine: &'a Hashhound,
    sink: Mutex<W>,
    config: BatchConfig,
    reported: AtomicUsize,
    /// Set under the sink lock by the first failed write.
    stopped: AtomicBool,
}

impl<'a, W: Write + Send> BatchRunner<'a, W> {
    pub fn new(engine: &'a Hashhound, sink: W, config: BatchConfig) -> Self {
        Self {
            engine,
            sink: Mutex::new(sink),
            config,
            reported: AtomicUsize::new(0),
            stopped: AtomicBool::new(false),
        }
    }

    /// Classify one line and write its report as a single block.
    ///
    /// The lock is only held for the write, not for classification. After a
    /// failed write the runner is stopped and later blocks are dropped
    /// unwritten until the next run.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the sink fails.
    pub fn process_line(&self, line: &str) -> Result<(), BatchError> {
        let hash = line.trim_end_matches(['\r', '\n']);
        let result = self.engine.classify(hash);
        let block = self.engine.render(&result, &self.config.render);

        {
            let mut sink = self.sink.lock();
            if self.is_stopped() {
                return Ok(());
            }
            if let Err(e) = sink.write_all(block.as_bytes()).and_then(|()| sink.flush()) {
                self.stopped.store(true, Ordering::Release);
                return Err(e.into());
            }
        }

        self.reported.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }

    /// Classify every line using the worker pool.
    ///
    /// Returns the number of reports written by this call.
    ///
    /// # Errors
    ///
    /// Returns the first write error hit by any worker. Nothing is written
    /// after it and remaining input is not processed.
    pub fn run<I>(&self, lines: I) -> Result<usize, BatchError>
    where
        I: IntoIterator<Item = String>,
    {
        self.run_fallible(lines.into_iter().map(Ok))
    }

    /// Classify every line read from `reader`.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing a report fails.
    pub fn run_reader<R: BufRead>(&self, reader: R) -> Result<usize, BatchError> {
        self.run_fallible(reader.lines().map(|l| l.map_err(BatchError::from)))
    }

    fn run_fallible<I>(&self, lines: I) -> Result<usize, BatchError>
    where
        I: Iterator<Item = Result<String, BatchError>>,
    {
        let workers = self.config.workers();
        let before = self.reported.load(Ordering::Relaxed);
        self.stopped.store(false, Ordering::Release);
        tracing::debug!(workers, "starting batch");

        let (tx, rx) = bounded::<String>(workers);

        let outcome = thread::scope(|s| {
            let handles: Vec<_> = (0..workers)
                .map(|_| {
                    let rx = rx.clone();
                    s.spawn(move || -> Result<(), BatchError> {
                        for line in rx.iter() {
                            if self.is_stopped() {
                                break;
                            }
                            self.process_line(&line)?;
                        }
                        Ok(())
                    })
                })
                .collect();
            drop(rx);

            let mut feed_result = Ok(());
            for line in lines {
                match line {
                    // A send error means every worker has stopped.
                    Ok(line) => {
                        if self.is_stopped() || tx.send(line).is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        feed_result = Err(e);
                        break;
                    }
                }
            }
            drop(tx);

            let mut worker_result = Ok(());
            for handle in handles {
                match handle.join() {
                    Ok(Ok(())) => {}
                    Ok(Err(e)) => {
                        if worker_result.is_ok() {
                            worker_result = Err(e);
                        }
                    }
                    Err(panic) => std::panic::resume_unwind(panic),
                }
            }

            worker_result.and(feed_result)
        });

        let reported = self.reported.load(Ordering::Relaxed) - before;
        tracing::debug!(reported, "batch finished");
        outcome.map(|()| reported)
    }

    fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Acquire)
    }

    /// Consume the runner and return the sink.
    pub fn into_inner(self) -> W {
        self.sink.into_inner()
    }
}
