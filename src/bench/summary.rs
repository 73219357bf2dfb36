//! A summary of the records of a benchmark.

use std::time::Duration;

use crate::bench::pool::FileRecord;

/// A summary of some (non-empty) collection of records.
///
/// On ties, the first record is named.
#[derive(Clone, Debug, PartialEq)]
pub struct Summary {
    pub files: usize,
    pub satisfiable: usize,
    pub unsatisfiable: usize,

    pub total_time: Duration,
    pub average_time: Duration,

    /// The least time, and the name of the file.
    pub fastest: (Duration, String),
    /// The greatest time, and the name of the file.
    pub slowest: (Duration, String),

    /// The least peak memory, and the name of the file.
    pub lowest_memory: (f64, String),
    /// The greatest peak memory, and the name of the file.
    pub highest_memory: (f64, String),
}

impl Summary {
    /// A summary of the records, or none if there are no records.
    pub fn from_records(records: &[FileRecord]) -> Option<Summary> {
        let first = records.first()?;

        let mut fastest = first;
        let mut slowest = first;
        let mut lowest = first;
        let mut highest = first;

        for record in records.iter().skip(1) {
            if record.elapsed < fastest.elapsed {
                fastest = record;
            }
            if record.elapsed > slowest.elapsed {
                slowest = record;
            }
            if record.peak_mib < lowest.peak_mib {
                lowest = record;
            }
            if record.peak_mib > highest.peak_mib {
                highest = record;
            }
        }

        let satisfiable = records.iter().filter(|record| record.satisfiable).count();
        let total_time: Duration = records.iter().map(|record| record.elapsed).sum();

        Some(Summary {
            files: records.len(),
            satisfiable,
            unsatisfiable: records.len() - satisfiable,
            total_time,
            average_time: total_time / records.len() as u32,
            fastest: (fastest.elapsed, fastest.name.clone()),
            slowest: (slowest.elapsed, slowest.name.clone()),
            lowest_memory: (lowest.peak_mib, lowest.name.clone()),
            highest_memory: (highest.peak_mib, highest.name.clone()),
        })
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "=== Summary ===")?;
        writeln!(f, "Files tested           : {}", self.files)?;
        writeln!(f, "Satisfiable            : {}", self.satisfiable)?;
        writeln!(f, "Unsatisfiable          : {}", self.unsatisfiable)?;
        writeln!(
            f,
            "Total time             : {:.3}s",
            self.total_time.as_secs_f64()
        )?;
        writeln!(
            f,
            "Average time           : {:.3}s",
            self.average_time.as_secs_f64()
        )?;
        writeln!(
            f,
            "Fastest solve time     : {:.3}s ({})",
            self.fastest.0.as_secs_f64(),
            self.fastest.1
        )?;
        writeln!(
            f,
            "Slowest solve time     : {:.3}s ({})",
            self.slowest.0.as_secs_f64(),
            self.slowest.1
        )?;
        writeln!(
            f,
            "Lowest memory usage    : {:.2} MiB ({})",
            self.lowest_memory.0, self.lowest_memory.1
        )?;
        write!(
            f,
            "Highest memory usage   : {:.2} MiB ({})",
            self.highest_memory.0, self.highest_memory.1
        )
    }
}
