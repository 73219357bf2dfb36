//! A pool of workers, each deciding formulas read from files.
//!
//! Paths are sent to workers over a channel, and each worker sends back an outcome for each path it receives.
//! Outcomes are passed to a callback as they arrive, and so in the order files finish.

use std::{
    path::{Path, PathBuf},
    thread,
    time::Duration,
};

use crossbeam::channel::unbounded;

use crate::{
    bench::metrics::measure,
    builder::dimacs::parse_dimacs_file,
    config::Config,
    misc::log::targets::{self},
    procedures::Engine,
    types::err::{self, ErrorKind},
};

/// The result of deciding the formula of a file.
#[derive(Clone, Debug, PartialEq)]
pub struct FileRecord {
    /// The file name of the path.
    pub name: String,

    pub path: PathBuf,

    pub satisfiable: bool,

    pub elapsed: Duration,

    pub peak_mib: f64,
}

impl std::fmt::Display for FileRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let verdict = match self.satisfiable {
            true => "SAT",
            false => "UNSAT",
        };
        write!(
            f,
            "{}: {verdict} in {:.3}s, {:.2}MiB",
            self.name,
            self.elapsed.as_secs_f64(),
            self.peak_mib
        )
    }
}

/// The outcome of a file sent to a worker.
#[derive(Clone, Debug, PartialEq)]
pub enum FileOutcome {
    /// The formula was decided.
    Decided(FileRecord),

    /// The formula could not be read.
    Failed(PathBuf, ErrorKind),
}

/// The file name of a path, or the whole path if there is no file name.
fn file_name(path: &Path) -> String {
    match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => path.to_string_lossy().into_owned(),
    }
}

/// Reads and decides the formula at `path`.
pub fn decide_file(engine: Engine, path: &Path) -> FileOutcome {
    let parsed = match parse_dimacs_file(path) {
        Ok(parsed) => parsed,
        Err(e) => return FileOutcome::Failed(path.to_owned(), e),
    };

    let measurement = measure(engine, &parsed.formula);

    FileOutcome::Decided(FileRecord {
        name: file_name(path),
        path: path.to_owned(),
        satisfiable: measurement.verdict.satisfiable,
        elapsed: measurement.elapsed,
        peak_mib: measurement.peak_mib,
    })
}

/// Decides the formula of each path on a pool of workers, returning a record for each decided formula.
///
/// `on_outcome` is called with each outcome as it arrives.
pub fn run_pool(
    paths: Vec<PathBuf>,
    config: &Config,
    mut on_outcome: impl FnMut(&FileOutcome),
) -> Result<Vec<FileRecord>, ErrorKind> {
    let worker_count = config.worker_count().min(paths.len()).max(1);
    let engine = config.engine;

    let (path_tx, path_rx) = unbounded::<PathBuf>();
    let (outcome_tx, outcome_rx) = unbounded::<FileOutcome>();

    let expected = paths.len();
    for path in paths {
        // The receiver is held until the workers are spawned, so sending cannot fail.
        let _ = path_tx.send(path);
    }
    drop(path_tx);

    let mut handles = Vec::with_capacity(worker_count);
    for index in 0..worker_count {
        let path_rx = path_rx.clone();
        let outcome_tx = outcome_tx.clone();

        let spawn = thread::Builder::new()
            .name(format!("worker-{index}"))
            .stack_size(config.stack_size())
            .spawn(move || {
                while let Ok(path) = path_rx.recv() {
                    log::debug!(target: targets::BENCH, "Worker {index} deciding {path:?}");
                    if outcome_tx.send(decide_file(engine, &path)).is_err() {
                        break;
                    }
                }
            });

        match spawn {
            Ok(handle) => handles.push(handle),
            Err(_) => return Err(ErrorKind::from(err::BenchError::WorkerSpawn)),
        }
    }
    drop(path_rx);
    drop(outcome_tx);

    let mut records = Vec::with_capacity(expected);
    while let Ok(outcome) = outcome_rx.recv() {
        on_outcome(&outcome);
        match outcome {
            FileOutcome::Decided(record) => records.push(record),
            FileOutcome::Failed(path, e) => {
                log::warn!(target: targets::BENCH, "Skipping {path:?}: {e}");
            }
        }
    }

    for handle in handles {
        if handle.join().is_err() {
            return Err(ErrorKind::from(err::BenchError::WorkerPanic));
        }
    }

    Ok(records)
}
