use clap::{Parser, Subcommand};
use serde_json::json;
use tracing::info;

use primes::logging::init_logging;
use primes::validation::validate_abort_fraction;
use primes::{
    library_version, require_version, Calculator, CalculatorConfig, FactorizationCalculator,
    HasValue, PrimesError, ProgressReporting, SieveCalculator,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(about = "Factorize numbers and list primes with progress reporting and cancellation")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Factorize a number by trial division
    Factorize {
        /// Number to factorize
        value: u64,

        /// Print progress percentages
        #[arg(long)]
        progress: bool,
    },
    /// List all primes up to a bound
    Sieve {
        /// Upper bound (inclusive)
        value: u64,

        /// Number of progress reports during the sieve
        #[arg(long, default_value_t = default_steps())]
        steps: u32,

        /// Abort once progress exceeds this fraction (0.0 - 1.0)
        #[arg(long)]
        abort_above: Option<f32>,

        /// Refuse bounds above this value
        #[arg(long)]
        max_value: Option<u64>,

        /// Print progress percentages
        #[arg(long)]
        progress: bool,
    },
    /// Factorize 3*3*17*17 and sieve 100, first cancelled halfway, then in full
    Demo,
    /// Show the library version
    Version {
        /// Fail unless the library satisfies this version (major.minor)
        #[arg(long)]
        require: Option<String>,
    },
}

fn default_steps() -> u32 {
    CalculatorConfig::default().progress_steps
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let start_time = std::time::Instant::now();

    match cli.command {
        Commands::Factorize { value, progress } => {
            handle_factorize(value, progress, cli.json)?;
        }
        Commands::Sieve {
            value,
            steps,
            abort_above,
            max_value,
            progress,
        } => {
            let mut config = CalculatorConfig::default().with_progress_steps(steps);
            if let Some(max) = max_value {
                config = config.with_max_sieve_value(max);
            }
            handle_sieve(value, config, abort_above, progress, cli.json)?;
        }
        Commands::Demo => {
            handle_demo()?;
        }
        Commands::Version { require } => {
            handle_version(require.as_deref(), cli.json)?;
        }
    }

    info!(elapsed = ?start_time.elapsed(), "done");
    Ok(())
}

/// Print progress as a whole percentage
fn print_progress(progress: f32) {
    println!("Progress = {}", (progress * 100.0).round());
}

fn handle_factorize(value: u64, progress: bool, json: bool) -> Result<(), PrimesError> {
    let mut calculator = FactorizationCalculator::new();
    if progress {
        calculator.set_progress_callback(|fraction, _| print_progress(fraction));
    }
    calculator.set_value(value)?;
    calculator.calculate()?;
    let factors = calculator.collect_prime_factors()?;

    if json {
        println!("{}", json!({ "value": value, "factors": factors }));
        return Ok(());
    }

    let rendered: Vec<String> = factors.iter().map(ToString::to_string).collect();
    if rendered.is_empty() {
        println!("{value} has no prime factors");
    } else {
        println!("{value} = {}", rendered.join(" * "));
    }
    Ok(())
}

fn handle_sieve(
    value: u64,
    config: CalculatorConfig,
    abort_above: Option<f32>,
    progress: bool,
    json: bool,
) -> Result<(), PrimesError> {
    let abort_above = abort_above.map(validate_abort_fraction).transpose()?;

    let mut calculator = SieveCalculator::with_config(config)?;
    calculator.set_progress_callback(move |fraction, abort| {
        if progress {
            print_progress(fraction);
        }
        if let Some(limit) = abort_above {
            *abort = fraction > limit;
        }
    });
    calculator.set_value(value)?;

    match calculator.calculate() {
        Ok(()) => {}
        Err(PrimesError::CalculationAborted) => {
            if json {
                println!("{}", json!({ "value": value, "aborted": true }));
            } else {
                println!("Calculation aborted");
            }
            return Ok(());
        }
        Err(err) => return Err(err),
    }

    let primes = calculator.collect_primes()?;
    if json {
        println!("{}", json!({ "value": value, "count": primes.len(), "primes": primes }));
    } else {
        print_primes(value, &primes);
    }
    Ok(())
}

fn print_primes(value: u64, primes: &[u64]) {
    println!("Primes <= {value}:");
    let rendered: Vec<String> = primes.iter().map(ToString::to_string).collect();
    println!("{}", rendered.join(" "));
}

fn handle_demo() -> Result<(), PrimesError> {
    handle_factorize(3 * 3 * 17 * 17, false, false)?;

    let mut sieve = SieveCalculator::new();
    sieve.set_value(100)?;

    println!("Calculate using a cancelling callback");
    sieve.set_progress_callback(|fraction, abort| {
        print_progress(fraction);
        *abort = fraction > 0.5;
    });
    match sieve.calculate() {
        Err(PrimesError::CalculationAborted) => println!("Calculation aborted"),
        other => other?,
    }

    println!("Calculate using a noncancelling callback");
    sieve.set_progress_callback(|fraction, abort| {
        print_progress(fraction);
        *abort = false;
    });
    sieve.calculate()?;

    print_primes(100, &sieve.collect_primes()?);
    Ok(())
}

fn handle_version(require: Option<&str>, json: bool) -> Result<(), PrimesError> {
    let version = match require {
        Some(required) => require_version(required)?,
        None => library_version(),
    };

    if json {
        println!("{}", json!({ "version": version.to_string(), "detail": version }));
    } else {
        println!("primes interface version {version}");
    }
    Ok(())
}
