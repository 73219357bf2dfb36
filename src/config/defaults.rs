use crate::procedures::Engine;

/// The count of contiguous blocks a sorted directory of formulas is split into.
pub const BLOCK_COUNT: usize = 10;

/// The most formulas sampled from each block.
pub const SAMPLE_PER_BLOCK: usize = 10;

/// The count of workers, where `0` is the available parallelism.
pub const WORKERS: usize = 0;

/// The stack of each worker, in MiB.
pub const STACK_SIZE_MIB: usize = 16;

pub const ENGINE: Engine = Engine::Dpll;
