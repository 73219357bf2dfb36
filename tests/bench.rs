use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use trisat::{
    bench::{
        self,
        pool::{decide_file, run_pool, FileOutcome, FileRecord},
        sample::collect_formula_paths,
        summary::Summary,
    },
    config::Config,
    procedures::Engine,
};

/// A fresh directory in the temporary directory, unique to the test.
fn temp_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("trisat-bench-{}-{name}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

/// Writes `count` formulas to `dir`, alternating between satisfiable and unsatisfiable.
fn write_formulas(dir: &Path, count: usize) {
    for index in 0..count {
        let dimacs = match index % 2 {
            0 => "p cnf 2 2\n1 2 0\n-1 0\n",
            _ => "p cnf 1 2\n1 0\n-1 0\n",
        };
        std::fs::write(dir.join(format!("f{index:02}.cnf")), dimacs).unwrap();
    }
    std::fs::write(dir.join("notes.txt"), "not a formula").unwrap();
}

fn record(name: &str, satisfiable: bool, millis: u64, peak_mib: f64) -> FileRecord {
    FileRecord {
        name: name.to_owned(),
        path: PathBuf::from(name),
        satisfiable,
        elapsed: Duration::from_millis(millis),
        peak_mib,
    }
}

mod selection {
    use super::*;

    #[test]
    fn only_formula_files() {
        let dir = temp_dir("only_formula_files");
        write_formulas(&dir, 5);

        let paths = collect_formula_paths(&dir).unwrap();
        assert_eq!(paths.len(), 5);
        assert!(paths.windows(2).all(|pair| pair[0] < pair[1]));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn seeded_sample() {
        let dir = temp_dir("seeded_sample");
        write_formulas(&dir, 40);

        let config = Config {
            sample_per_block: 2,
            seed: Some(3),
            ..Config::default()
        };

        let first = bench::select(&dir, &config).unwrap();
        let second = bench::select(&dir, &config).unwrap();
        assert_eq!(first.total, 40);
        assert_eq!(first.samples.len(), 20);
        assert_eq!(first, second);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_directory() {
        let dir = std::env::temp_dir().join("trisat-bench-no-such-directory");
        assert!(bench::select(&dir, &Config::default()).is_err());
    }
}

mod pool {
    use super::*;

    #[test]
    fn every_file_decided() {
        let dir = temp_dir("every_file_decided");
        write_formulas(&dir, 12);
        let paths = collect_formula_paths(&dir).unwrap();

        for engine in Engine::ALL {
            let config = Config {
                engine,
                workers: 3,
                ..Config::default()
            };

            let mut seen = 0;
            let mut records = run_pool(paths.clone(), &config, |_| seen += 1).unwrap();
            assert_eq!(seen, 12);
            assert_eq!(records.len(), 12);

            records.sort_by(|a, b| a.name.cmp(&b.name));
            for (index, record) in records.iter().enumerate() {
                assert_eq!(record.name, format!("f{index:02}.cnf"));
                assert_eq!(record.satisfiable, index % 2 == 0);
            }
        }

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn unreadable_file() {
        let dir = temp_dir("unreadable_file");
        let path = dir.join("bad.cnf");
        std::fs::write(&path, "1 two 0\n").unwrap();

        assert!(matches!(
            decide_file(Engine::Dpll, &path),
            FileOutcome::Failed(_, _)
        ));

        let records = run_pool(vec![path], &Config::default(), |_| {}).unwrap();
        assert!(records.is_empty());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn record_line() {
        let line = record("uf20-01.cnf", false, 1500, 2.0).to_string();
        assert_eq!(line, "uf20-01.cnf: UNSAT in 1.500s, 2.00MiB");
    }
}

mod summary {
    use super::*;

    #[test]
    fn no_records() {
        assert!(Summary::from_records(&[]).is_none());
    }

    #[test]
    fn extremes() {
        let records = [
            record("a.cnf", true, 200, 1.0),
            record("b.cnf", false, 100, 3.0),
            record("c.cnf", true, 300, 0.5),
            record("d.cnf", true, 100, 3.0),
        ];
        let summary = Summary::from_records(&records).unwrap();

        assert_eq!(summary.files, 4);
        assert_eq!(summary.satisfiable, 3);
        assert_eq!(summary.unsatisfiable, 1);
        assert_eq!(summary.total_time, Duration::from_millis(700));
        assert_eq!(summary.average_time, Duration::from_millis(175));
        assert_eq!(summary.fastest.1, "b.cnf");
        assert_eq!(summary.slowest.1, "c.cnf");
        assert_eq!(summary.lowest_memory.1, "c.cnf");
        assert_eq!(summary.highest_memory.1, "b.cnf");
    }

    #[test]
    fn block() {
        let summary = Summary::from_records(&[record("a.cnf", true, 250, 1.25)]).unwrap();
        let expected = "=== Summary ===
Files tested           : 1
Satisfiable            : 1
Unsatisfiable          : 0
Total time             : 0.250s
Average time           : 0.250s
Fastest solve time     : 0.250s (a.cnf)
Slowest solve time     : 0.250s (a.cnf)
Lowest memory usage    : 1.25 MiB (a.cnf)
Highest memory usage   : 1.25 MiB (a.cnf)";
        assert_eq!(summary.to_string(), expected);
    }
}
