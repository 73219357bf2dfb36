use std::path::Path;

use trisat::{
    bench::{
        self,
        metrics::is_tracking,
        pool::{run_pool, FileOutcome},
        summary::Summary,
    },
    config::Config,
    types::err::ErrorKind,
};

pub fn run(dir: &Path, config: &Config) -> Result<(), ErrorKind> {
    let selection = bench::select(dir, config)?;

    if selection.total == 0 {
        println!("No .cnf files in {}", dir.display());
        return Ok(());
    }

    println!(
        "Sampling {} of {} files with {} workers...\n",
        selection.samples.len(),
        selection.total,
        config.worker_count()
    );

    let records = run_pool(selection.samples, config, |outcome| match outcome {
        FileOutcome::Decided(record) => println!("{record}"),
        FileOutcome::Failed(path, e) => println!("c Skipped {}: {e}", path.display()),
    })?;

    if !is_tracking() {
        log::warn!("No allocations were tracked, so peak memory is reported as 0");
    }

    match Summary::from_records(&records) {
        Some(summary) => println!("\n{summary}"),
        None => println!("\nc No formula was decided"),
    }

    Ok(())
}
