use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};

use trisat::{
    config::{self, Config},
    procedures::Engine,
};

pub fn cli() -> Command {
    Command::new("trisat")
        .about("Determines whether a formula is satisfiable or unsatisfiable, by DP elimination, DPLL search, or resolution")
        .version(env!("CARGO_PKG_VERSION"))

        .arg(Arg::new("engine")
            .long("engine")
            .short('e')
            .value_name("ENGINE")
            .value_parser(clap::builder::ValueParser::new(engine_parser))
            .required(false)
            .num_args(1)
            .help(format!("The procedure to use.
Default: {}", config::defaults::ENGINE))
            .long_help(format!("The procedure to use.
Default: {}

  - dp        : Davis-Putnam variable elimination.
  - dpll      : DPLL backtracking search, which also finds a model.
  - resolution: Saturation under resolution.", config::defaults::ENGINE)))

        .arg(Arg::new("sample_per_block")
            .long("sample-per-block")
            .value_name("COUNT")
            .value_parser(value_parser!(usize))
            .required(false)
            .num_args(1)
            .help(format!("The most files to sample from each block of a directory.
Default: {}", config::defaults::SAMPLE_PER_BLOCK))
            .long_help(format!("The most files to sample from each block of a directory.
Default: {}

The files of a directory are sorted and split into {} contiguous blocks.
A block with more files than the count is sampled at random.", config::defaults::SAMPLE_PER_BLOCK, config::defaults::BLOCK_COUNT)))

        .arg(Arg::new("workers")
            .long("workers")
            .short('w')
            .value_name("COUNT")
            .value_parser(value_parser!(usize))
            .required(false)
            .num_args(1)
            .help(format!("The count of workers used for a directory, with 0 for one worker per core.
Default: {}", config::defaults::WORKERS)))

        .arg(Arg::new("seed")
            .long("seed")
            .value_name("SEED")
            .value_parser(value_parser!(u64))
            .required(false)
            .num_args(1)
            .help("A seed for sampling files.
Default: A seed from entropy"))

        .arg(Arg::new("stack_size")
            .long("stack-size")
            .value_name("MIB")
            .value_parser(value_parser!(usize))
            .required(false)
            .num_args(1)
            .help(format!("The stack of each worker, in MiB.
Default: {}", config::defaults::STACK_SIZE_MIB)))

        .arg(Arg::new("model")
            .long("model")
            .short('m')
            .action(ArgAction::SetTrue)
            .help("Display a model on finding a formula is satisfiable (dpll only)."))

        .arg(Arg::new("cnf_dir")
            .value_name("CNF_DIR")
            .value_parser(value_parser!(PathBuf))
            .required(false)
            .num_args(1)
            .help("A directory of DIMACS files to benchmark.
Without a directory, clauses are read interactively."))
}

pub fn config_from_args(args: &ArgMatches) -> Config {
    let mut the_config = Config::default();

    if let Ok(Some(engine)) = args.try_get_one::<Engine>("engine") {
        the_config.engine = *engine
    };

    if let Ok(Some(count)) = args.try_get_one::<usize>("sample_per_block") {
        the_config.sample_per_block = *count
    };

    if let Ok(Some(count)) = args.try_get_one::<usize>("workers") {
        the_config.workers = *count
    };

    if let Ok(Some(seed)) = args.try_get_one::<u64>("seed") {
        the_config.seed = Some(*seed)
    };

    if let Ok(Some(mib)) = args.try_get_one::<usize>("stack_size") {
        the_config.stack_size_mib = *mib
    };

    the_config.show_model = args.get_flag("model");

    the_config
}

fn engine_parser(arg: &str) -> Result<Engine, std::io::Error> {
    match arg.parse::<Engine>() {
        Ok(engine) => Ok(engine),
        Err(message) => Err(std::io::Error::new(std::io::ErrorKind::NotFound, message)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let matches = cli().get_matches_from(["trisat"]);
        assert_eq!(config_from_args(&matches), Config::default());
        assert!(matches.get_one::<PathBuf>("cnf_dir").is_none());
    }

    #[test]
    fn options() {
        let matches = cli().get_matches_from([
            "trisat",
            "--engine",
            "resolution",
            "--sample-per-block",
            "3",
            "--workers=2",
            "--seed",
            "11",
            "--model",
            "formulas",
        ]);
        let config = config_from_args(&matches);
        assert_eq!(config.engine, Engine::Resolution);
        assert_eq!(config.sample_per_block, 3);
        assert_eq!(config.workers, 2);
        assert_eq!(config.seed, Some(11));
        assert!(config.show_model);
        assert_eq!(
            matches.get_one::<PathBuf>("cnf_dir"),
            Some(&PathBuf::from("formulas"))
        );
    }

    #[test]
    fn unknown_engine() {
        assert!(cli()
            .try_get_matches_from(["trisat", "--engine", "cdcl"])
            .is_err());
    }
}
