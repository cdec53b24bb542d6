use std::{fs, path::PathBuf};

use clap::Parser;
use sciexpr::{error::EvaluationError, evaluate_expression, format_result, normalize};

/// sciexpr evaluates scientific calculator expressions such as `2^10`,
/// `sqrt(16)`, `50%` or `5!!`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Reads one expression per line from this file instead.
    #[arg(short, long, conflicts_with = "expression")]
    file: Option<PathBuf>,

    /// Prints the canonical form of each expression instead of its value.
    #[arg(short, long)]
    normalize: bool,

    /// Significant digits shown for non-integral results.
    #[arg(short, long, default_value_t = sciexpr::util::format::DEFAULT_SIGNIFICANT_DIGITS)]
    digits: usize,

    /// Logs each evaluation to stderr.
    #[arg(short, long)]
    verbose: bool,

    #[arg(required_unless_present = "file")]
    expression: Option<String>,
}

fn main() {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let ok = if let Some(path) = &args.file {
        let script = fs::read_to_string(path).unwrap_or_else(|_| {
                                                  eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                                                            path.display());
                                                  std::process::exit(1);
                                              });
        run_lines(&script, &args)
    } else {
        args.expression
            .as_deref()
            .is_none_or(|text| run_one(text, &args, false))
    };

    if !ok {
        std::process::exit(1);
    }
}

/// Evaluates every non-blank line, continuing past failures.
fn run_lines(script: &str, args: &Args) -> bool {
    let mut ok = true;
    for line in script.lines().map(str::trim).filter(|l| !l.is_empty()) {
        ok &= run_one(line, args, true);
    }
    ok
}

fn run_one(text: &str, args: &Args, echo: bool) -> bool {
    if args.normalize {
        println!("{}", normalize(text));
        return true;
    }

    match evaluate_expression(text) {
        Ok(value) => {
            let shown = format_result(value, args.digits);
            if echo {
                println!("{text} = {shown}");
            } else {
                println!("{shown}");
            }
            true
        },
        Err(EvaluationError::EmptyExpression) => true,
        Err(e) => {
            log::debug!("{text:?} failed: {e:?}");
            eprintln!("Error: {e}");
            false
        },
    }
}
