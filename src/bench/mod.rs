/*!
Benchmarks of a procedure over a directory of formulas.

A benchmark:
1. [Collects](sample::collect_formula_paths) the formula files of a directory, sorted by name.
2. [Samples](sample::sample_blocks) the files, by splitting the sorted files into contiguous blocks and drawing a random sample from each block.
3. [Runs](pool::run_pool) a procedure on each sampled file, on a pool of workers, [measuring](metrics::measure) time and memory.
4. [Summarises](summary::Summary) the records.

Records are delivered in the order files finish, rather than the order files were sampled.

Workers share no state, and a benchmark has no cancellation of its own.
Interrupting the process ends every worker, and any records not yet summarised are lost.

Memory is measured by a [tracking allocator](metrics::TrackingAllocator), which must be installed as the global allocator of the binary.
Without the tracker every peak is zero.
*/

pub mod metrics;
pub mod pool;
pub mod sample;
pub mod summary;

use std::path::PathBuf;

use rand::{rngs::StdRng, SeedableRng};

use crate::{config::Config, misc::log::targets, types::err};

/// The files of a directory selected for a benchmark.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    /// The count of formula files in the directory.
    pub total: usize,

    /// The sampled files.
    pub samples: Vec<PathBuf>,
}

/// Collects and samples the formula files of `dir` in accordance with the configuration.
pub fn select(dir: &std::path::Path, config: &Config) -> Result<Selection, err::ErrorKind> {
    let paths = sample::collect_formula_paths(dir)?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let samples =
        sample::sample_blocks(&paths, config.block_count, config.sample_per_block, &mut rng);

    log::info!(target: targets::BENCH,
        "Sampled {} of {} files from {dir:?}",
        samples.len(),
        paths.len()
    );

    Ok(Selection {
        total: paths.len(),
        samples,
    })
}
