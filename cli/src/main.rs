//! `padic`: exact p-adic integer calculator.
//!
//! Operands are written in the rendered notation (`...<repetend> <head>`,
//! optionally with the base as a subscript) or as plain decimal integers.
//!
//! **Usage:**
//! ```text
//! padic --base 5 add 7 "...4 "
//! padic --base 3 mul "...1 " -2
//! padic --base 7 neg 12
//! padic --base 2 shift "...01 1" -3
//! padic --base 11 int "...0 a1"
//! padic --base 13 random --count 3 --seed 42
//! ```
//!
//! Logging goes to stderr; raise it with `-v` or `RUST_LOG`.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use padic::{PAdicInteger, PAdicIntegers, SamplingConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

/// Exact arithmetic on eventually periodic p-adic integers.
#[derive(Parser, Debug)]
#[command(name = "padic", version, about)]
struct Cli {
    /// The prime base (2 to 31).
    #[arg(short = 'p', long, global = true, default_value_t = 5)]
    base: u32,

    /// Increase logging verbosity (-v, -vv, -vvv).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sum all operands in a single pass.
    Add {
        /// Values to add.
        #[arg(required = true, allow_negative_numbers = true)]
        operands: Vec<String>,
    },
    /// Multiply two values.
    Mul {
        /// Multiplicand.
        #[arg(allow_negative_numbers = true)]
        left: String,
        /// Multiplier.
        #[arg(allow_negative_numbers = true)]
        right: String,
    },
    /// Negate a value.
    Neg {
        /// Value to negate.
        #[arg(allow_negative_numbers = true)]
        operand: String,
    },
    /// Shift digits: positive `k` multiplies by p^k, negative drops digits.
    Shift {
        /// Value to shift.
        #[arg(allow_negative_numbers = true)]
        operand: String,
        /// Number of positions.
        #[arg(allow_negative_numbers = true)]
        k: i64,
    },
    /// Print a finite value as an exact decimal integer.
    Int {
        /// Value to convert.
        #[arg(allow_negative_numbers = true)]
        operand: String,
    },
    /// Draw random values.
    Random {
        /// How many values to draw.
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
        /// Seed for a reproducible sequence.
        #[arg(long)]
        seed: Option<u64>,
        /// Standard deviation of the head and repetend lengths (0 to 1000).
        #[arg(long, default_value_t = 10.0, allow_negative_numbers = true)]
        sigma: f64,
    },
}

impl Cli {
    fn init_logging(&self) {
        use tracing_subscriber::{fmt, EnvFilter};

        let level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
        fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Read an operand: the rendered notation, or a decimal integer.
fn operand(integers: &Arc<PAdicIntegers>, text: &str) -> Result<PAdicInteger> {
    let text = text.trim();
    if text.starts_with("...") {
        integers
            .parse_notation(text)
            .with_context(|| format!("invalid {integers} value '{text}'"))
    } else {
        let n: i64 = text
            .parse()
            .with_context(|| format!("'{text}' is neither p-adic notation nor an integer"))?;
        Ok(integers.from_integer(n))
    }
}

fn run(cli: &Cli) -> Result<()> {
    let integers = PAdicIntegers::of(cli.base).context("unsupported base")?;
    debug!(%integers, command = ?cli.command, "evaluating");

    match &cli.command {
        Command::Add { operands } => {
            let values = operands
                .iter()
                .map(|text| operand(&integers, text))
                .collect::<Result<Vec<_>>>()?;
            println!("{}", integers.sum(&values)?);
        }
        Command::Mul { left, right } => {
            let left = operand(&integers, left)?;
            let right = operand(&integers, right)?;
            println!("{}", left.times(&right)?);
        }
        Command::Neg { operand: text } => {
            println!("{}", operand(&integers, text)?.negation());
        }
        Command::Shift { operand: text, k } => {
            let value = operand(&integers, text)?;
            let positions = usize::try_from(k.unsigned_abs()).context("shift is too large")?;
            let shifted = if *k >= 0 {
                value.left_shift(positions)
            } else {
                value.right_shift(positions)
            };
            println!("{shifted}");
        }
        Command::Int { operand: text } => {
            let value = operand(&integers, text)?;
            let exact = value
                .to_exact_integer()
                .context("only finite values have an integer form")?;
            println!("{exact}");
        }
        Command::Random { count, seed, sigma } => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(*seed),
                None => StdRng::from_entropy(),
            };
            let config = SamplingConfig {
                head_sigma: *sigma,
                repetend_sigma: *sigma,
            };
            config
                .validate()
                .with_context(|| format!("cannot sample with --sigma {sigma}"))?;
            for _ in 0..*count {
                println!("{}", integers.next_random_with(&mut rng, &config)?);
            }
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.init_logging();
    run(&cli)
}
