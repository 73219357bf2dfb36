use std::path::PathBuf;

use trisat::bench::metrics::TrackingAllocator;

#[cfg(all(feature = "jemalloc", not(target_env = "msvc")))]
#[global_allocator]
static GLOBAL: TrackingAllocator<tikv_jemallocator::Jemalloc> =
    TrackingAllocator::new(tikv_jemallocator::Jemalloc);

#[cfg(not(all(feature = "jemalloc", not(target_env = "msvc"))))]
#[global_allocator]
static GLOBAL: TrackingAllocator<std::alloc::System> = TrackingAllocator::new(std::alloc::System);

mod benchmark;
mod interactive;
mod parse;

fn main() {
    env_logger::init();

    let matches = parse::cli().get_matches();
    let config = parse::config_from_args(&matches);

    let result = match matches.get_one::<PathBuf>("cnf_dir") {
        Some(dir) if dir.is_dir() => benchmark::run(dir, &config),

        Some(dir) => {
            log::warn!("{} is not a directory, reading clauses instead", dir.display());
            interactive::run(&config)
        }

        None => interactive::run(&config),
    };

    if let Err(e) = result {
        println!("c {e}");
        std::process::exit(1);
    }
}
