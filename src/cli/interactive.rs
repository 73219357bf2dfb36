use std::io::{BufRead, Write};

use trisat::{
    bench::metrics::{is_tracking, measure},
    builder::dimacs::parse_clause_lines,
    config::Config,
    structures::formula::Formula,
    types::err::{self, ErrorKind},
};

/// Reads a count of clauses, followed by that many clauses, one per line.
pub fn read_formula(input: &mut impl BufRead) -> Result<Formula, ErrorKind> {
    print!("Enter number of clauses: ");
    let _ = std::io::stdout().flush();

    let mut buffer = String::default();
    if input.read_line(&mut buffer).is_err() {
        return Err(err::ErrorKind::from(err::ParseError::Line(1)));
    }
    let count = match buffer.trim().parse::<usize>() {
        Ok(count) => count,
        Err(_) => {
            return Err(err::ErrorKind::from(err::ParseError::Count(
                buffer.trim().to_owned(),
            )))
        }
    };

    println!("Enter each clause:");
    let mut lines = Vec::with_capacity(count);
    for index in 0..count {
        buffer.clear();
        match input.read_line(&mut buffer) {
            Ok(0) | Err(_) => return Err(err::ErrorKind::from(err::ParseError::Line(index + 2))),
            Ok(_) => lines.push(buffer.trim_end().to_owned()),
        }
    }

    parse_clause_lines(lines)
}

pub fn run(config: &Config) -> Result<(), ErrorKind> {
    let formula = read_formula(&mut std::io::stdin().lock())?;

    println!("Solving...");
    let measurement = measure(config.engine, &formula);
    if !is_tracking() {
        log::warn!("No allocations were tracked, so peak memory is reported as 0");
    }

    println!("Result: {}", measurement.verdict);
    println!(
        "Time elapsed: {:.3} seconds",
        measurement.elapsed.as_secs_f64()
    );
    println!("Peak memory usage: {:.2} MiB", measurement.peak_mib);

    if config.show_model {
        match &measurement.verdict.model {
            Some(model) => println!("v {}", model.as_dimacs()),
            None if measurement.verdict.satisfiable => {
                println!("c The {} engine does not find models", config.engine)
            }
            None => {}
        }
    }

    Ok(())
}
