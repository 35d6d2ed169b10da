use clap::{Parser, Subcommand};
use mathfns::MathError;
use serde::Serialize;
use std::fmt::Display;

#[derive(Parser)]
#[command(name = "mathfns", version, about = "Textbook numeric reference functions")]
struct Cli {
    /// Emit the result as a JSON object instead of a bare value
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the nth Fibonacci number (F(0) = 0, F(1) = 1)
    Fib {
        /// Sequence index
        n: u64,
    },
    /// Compute n! (0! = 1)
    Factorial {
        /// Operand
        n: u64,
    },
    /// Check whether n is prime
    Prime {
        /// Number to test; may be negative
        #[arg(allow_negative_numbers = true)]
        n: i64,
    },
}

/// One evaluated call, for `--json` output.
#[derive(Serialize)]
struct Evaluation<I: Serialize, V: Serialize> {
    function: &'static str,
    input: I,
    value: V,
}

fn emit<I, V>(json: bool, function: &'static str, input: I, value: V)
where
    I: Serialize + Display,
    V: Serialize + Display,
{
    if json {
        let record = Evaluation { function, input, value };
        // Flat record of scalars; serialization cannot fail.
        println!("{}", serde_json::to_string(&record).unwrap());
    } else {
        println!("{value}");
    }
}

fn fail(err: MathError) -> ! {
    eprintln!("error: {err}");
    std::process::exit(1)
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Fib { n } => match mathfns::fibonacci(n) {
            Ok(value) => emit(cli.json, "fibonacci", n, value),
            Err(err) => fail(err),
        },
        Commands::Factorial { n } => match mathfns::factorial(n) {
            Ok(value) => emit(cli.json, "factorial", n, value),
            Err(err) => fail(err),
        },
        Commands::Prime { n } => {
            emit(cli.json, "is_prime", n, mathfns::is_prime(n));
        }
    }
}
