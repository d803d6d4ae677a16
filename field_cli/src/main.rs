//! # Facefield CLI Application
//!
//! Tabulates the roof stress-displacement field over a coordinate grid and
//! prints it as a fixed-width text table.
//!
//! ## Usage
//!
//! ```text
//! field_cli [run.json]
//! ```
//!
//! With a path, the run configuration (grid and rounding policy) is loaded
//! from JSON; without one, a built-in demo grid is used.

use std::env;
use std::fmt::Write as _;
use std::path::Path;
use std::process;

use field_core::config::{GridConfig, RunConfig};
use field_core::errors::FieldError;
use field_core::rounding::RoundingPolicy;
use field_core::solver::{FieldRecord, FieldSolver};

/// Demo run used when no configuration file is given: a coarse quarter-plane
/// mesh ahead of and above the face, rounding disabled.
fn demo_config() -> RunConfig {
    RunConfig {
        label: "demo grid".to_string(),
        grid: GridConfig {
            x: vec![0.0, 0.5, 1.0, 1.5, 2.0],
            z: vec![0.0, 0.5, 1.0, 1.5, 2.0],
        },
        rounding: RoundingPolicy::disabled(),
    }
}

/// Render the tabulation in the fixed-width layout: coordinates at width 5
/// with one decimal, field values at width 10 with three.
fn render_table(records: &[FieldRecord]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>5} {:>5} {:>10} {:>10} {:>10} {:>10} {:>10}",
        "X", "Z", "SIGZ", "SIGX", "TAUXZ", "U", "W"
    );
    for r in records {
        let _ = writeln!(
            out,
            "{:>5.1} {:>5.1} {:>10.3} {:>10.3} {:>10.3} {:>10.3} {:>10.3}",
            r.x, r.z, r.sigma_z, r.sigma_x, r.tau_xz, r.u, r.w
        );
    }
    out
}

fn report_error(error: &FieldError) {
    eprintln!("Error: {}", error);
    if let Ok(json) = serde_json::to_string_pretty(error) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{}", json);
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let config = match args.get(1) {
        Some(path) => match field_core::load_config(Path::new(path)) {
            Ok(config) => config,
            Err(e) => {
                report_error(&e);
                process::exit(1);
            }
        },
        None => demo_config(),
    };

    let solver = match FieldSolver::new(config.rounding) {
        Ok(solver) => solver,
        Err(e) => {
            report_error(&e);
            process::exit(1);
        }
    };

    println!("Facefield - Roof Stress-Displacement Tabulation");
    println!("Run: {}", config.label);
    if solver.rounding().enabled {
        println!(
            "Rounding: {} digits, {:?}",
            solver.rounding().precision,
            solver.rounding().direction
        );
    }
    println!();

    let records = solver.solve(&config.grid.x, &config.grid.z);
    print!("{}", render_table(&records));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_header() {
        let table = render_table(&[]);
        assert_eq!(
            table,
            "    X     Z       SIGZ       SIGX      TAUXZ          U          W\n"
        );
    }

    #[test]
    fn test_table_row_format() {
        let solver = FieldSolver::new(RoundingPolicy::disabled()).unwrap();
        let table = render_table(&solver.solve(&[1.0], &[0.0]));
        let row = table.lines().nth(1).unwrap();
        // ro = 2, fi = 0: both normal stresses are -1/sqrt(2)
        assert_eq!(row, "  1.0   0.0     -0.707     -0.707     -0.000     -0.414      0.000");
    }

    #[test]
    fn test_demo_grid_shape() {
        let config = demo_config();
        let solver = FieldSolver::new(config.rounding).unwrap();
        let records = solver.solve(&config.grid.x, &config.grid.z);
        assert_eq!(records.len(), 25);
        // Row-major: the second record advances x, not z
        assert_eq!((records[1].x, records[1].z), (0.5, 0.0));
    }
}
