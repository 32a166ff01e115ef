//! ferrum CLI: run the vehicle demo or evaluate the numeric utilities.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use ferrum::numerics::{
    arithmetic_mean, factorial_with, geometric_mean, is_prime, product_odd_rows,
    solve_quadratic, sum_even_columns, NumericsConfig,
};
use ferrum::vehicles::{run_garage, GarageConfig};

#[derive(Parser)]
#[command(name = "ferrum")]
#[command(about = "Numeric utilities and the vehicle factory demo")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the vehicle line-up and exercise every vehicle
    Garage {
        /// TOML file overriding the default line-up
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Real roots of a·x² + b·x + c = 0
    Roots {
        #[arg(allow_negative_numbers = true)]
        a: f64,
        #[arg(allow_negative_numbers = true)]
        b: f64,
        #[arg(allow_negative_numbers = true)]
        c: f64,
    },

    /// Statistics of a matrix written as rows separated by ';', e.g. "1 2; 3 4"
    Matrix {
        #[arg(allow_hyphen_values = true)]
        rows: String,
    },

    /// n! in 64-bit arithmetic
    Factorial {
        #[arg(allow_negative_numbers = true)]
        n: i32,

        /// Fail on overflow instead of wrapping
        #[arg(long)]
        checked: bool,
    },

    /// Primality test
    Prime {
        #[arg(allow_negative_numbers = true)]
        n: i32,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Garage { config } => garage(config),
        Commands::Roots { a, b, c } => {
            let roots = solve_quadratic(a, b, c);
            if roots.is_empty() {
                println!("no real roots");
            }
            for root in roots {
                println!("{}", root);
            }
            Ok(())
        }
        Commands::Matrix { rows } => matrix(&rows),
        Commands::Factorial { n, checked } => {
            let config = if checked {
                NumericsConfig::strict()
            } else {
                NumericsConfig::default()
            };
            println!("{}", factorial_with(n, &config)?);
            Ok(())
        }
        Commands::Prime { n } => {
            println!("{} is {}prime", n, if is_prime(n) { "" } else { "not " });
            Ok(())
        }
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn garage(path: Option<PathBuf>) -> Result<()> {
    let config = match path {
        Some(path) => {
            let source = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            GarageConfig::from_toml_str(&source)?
        }
        None => GarageConfig::default(),
    };

    println!("=== Vehicle hierarchy demo ===\n");
    let report = run_garage(&config);
    for event in &report.events {
        println!("{}", event);
    }
    Ok(())
}

fn matrix(rows: &str) -> Result<()> {
    let matrix = parse_matrix(rows)?;

    println!("arithmetic mean:  {}", arithmetic_mean(&matrix)?);
    match geometric_mean(&matrix) {
        Ok(mean) => println!("geometric mean:   {}", mean),
        Err(err) => println!("geometric mean:   undefined ({})", err),
    }
    println!("even columns sum: {}", sum_even_columns(&matrix)?);
    println!("odd rows product: {}", product_odd_rows(&matrix)?);
    Ok(())
}

/// Rows are separated by ';', elements by whitespace or ','.
fn parse_matrix(source: &str) -> Result<Vec<Vec<f64>>> {
    source
        .split(';')
        .map(|row| -> Result<Vec<f64>> {
            row.split(|c: char| c.is_whitespace() || c == ',')
                .filter(|cell| !cell.is_empty())
                .map(|cell| {
                    cell.parse::<f64>()
                        .with_context(|| format!("invalid matrix element '{}'", cell))
                })
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_matrix() {
        assert_eq!(
            parse_matrix("1 2; 3,4 ; 5").unwrap(),
            vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0]]
        );
        assert_eq!(parse_matrix("1;;2").unwrap()[1], Vec::<f64>::new());
        assert!(parse_matrix("1 x").is_err());
    }

    #[test]
    fn test_cli_accepts_negative_coefficients() {
        let cli = Cli::try_parse_from(["ferrum", "roots", "1", "-3", "2"]).unwrap();
        assert!(matches!(cli.command, Commands::Roots { b, .. } if b == -3.0));

        let cli = Cli::try_parse_from(["ferrum", "matrix", "-1 2; 3 4"]).unwrap();
        match cli.command {
            Commands::Matrix { rows } => {
                let matrix = parse_matrix(&rows).unwrap();
                assert_eq!(matrix, vec![vec![-1.0, 2.0], vec![3.0, 4.0]]);
                assert!(geometric_mean(&matrix).is_err());
            }
            _ => panic!("expected the matrix command"),
        }
    }
}
