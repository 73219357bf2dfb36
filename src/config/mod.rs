/*!
Configuration of a run.

The procedures themselves have no configuration.
Instead, configuration covers which procedure is used and how a [benchmark](crate::bench) samples and runs formulas.

All configuration is collected in a [Config] struct, with default values in [defaults].

```rust
# use trisat::config::Config;
# use trisat::procedures::Engine;
let mut config = Config::default();
config.engine = Engine::Resolution;
config.sample_per_block = 4;

assert_eq!(config.worker_count().min(1), 1);
```
*/
pub mod defaults;

use crate::procedures::Engine;

/// The configuration of a run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// The procedure used.
    pub engine: Engine,

    /// The count of contiguous blocks a directory is split into.
    pub block_count: usize,

    /// The most formulas sampled from each block.
    pub sample_per_block: usize,

    /// The count of workers, or `0` for the available parallelism.
    pub workers: usize,

    /// The stack of each worker, in MiB.
    pub stack_size_mib: usize,

    /// A seed for sampling, or none for a seed from entropy.
    pub seed: Option<u64>,

    /// Whether to write a model, when found.
    pub show_model: bool,
}

impl Default for Config {
    fn default() -> Self {
        use defaults::*;
        Config {
            engine: ENGINE,
            block_count: BLOCK_COUNT,
            sample_per_block: SAMPLE_PER_BLOCK,
            workers: WORKERS,
            stack_size_mib: STACK_SIZE_MIB,
            seed: None,
            show_model: false,
        }
    }
}

impl Config {
    /// The count of workers to use, resolving `0` to the available parallelism.
    pub fn worker_count(&self) -> usize {
        match self.workers {
            0 => std::thread::available_parallelism()
                .map(|count| count.get())
                .unwrap_or(1),
            count => count,
        }
    }

    /// The stack of each worker, in bytes, saturating at `usize::MAX`.
    pub fn stack_size(&self) -> usize {
        self.stack_size_mib.max(1).saturating_mul(1024 * 1024)
    }
}
