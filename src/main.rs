use std::{fs, process::ExitCode};

use anyhow::Context as _;
use clap::Parser;
use djerba::{
    config::{Config, DEFAULT_MAX_CALL_DEPTH},
    error::Status,
    interpreter::host::StdHost,
    run_with_config,
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// djerba is a tiny scripting language with a symbolic syntax: `$x <- 1`,
/// `:> $x`, `? cond { }`, `~ cond { }`, `@> $item in $list { }`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells djerba to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// How deeply function calls may nest before the run fails.
    #[arg(long, default_value_t = DEFAULT_MAX_CALL_DEPTH)]
    max_depth: usize,

    /// Log more about what the interpreter does. Repeat for more detail.
    /// `RUST_LOG` takes precedence when set.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// The script itself, or its path with `--file`.
    contents: String,
}

/// Bad input data, as in `sysexits.h`.
const EXIT_DATA_ERR: u8 = 65;
/// The input file could not be opened.
const EXIT_NO_INPUT: u8 = 66;
/// Internal software error; used for runtime failures of the script.
const EXIT_SOFTWARE: u8 = 70;

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    let script = match load_script(&args) {
        Ok(script) => script,
        Err(err) => {
            eprintln!("{err:#}");
            return ExitCode::from(EXIT_NO_INPUT);
        },
    };

    let config = Config::default().with_max_call_depth(args.max_depth);
    let result = run_with_config(&script, &mut StdHost, &config);

    if let Err(err) = &result {
        eprintln!("{err}");
    }

    match Status::from(&result) {
        Status::Success => ExitCode::SUCCESS,
        Status::LexFailure | Status::ParseFailure => ExitCode::from(EXIT_DATA_ERR),
        Status::RuntimeFailure => ExitCode::from(EXIT_SOFTWARE),
    }
}

fn load_script(args: &Args) -> anyhow::Result<String> {
    if !args.file {
        return Ok(args.contents.clone());
    }

    fs::read_to_string(&args.contents).with_context(|| {
                                          format!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                                                  args.contents)
                                      })
}

/// Sends log output to stderr so it never mixes with program output.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry().with(fmt::layer().with_writer(std::io::stderr)
                                                    .with_target(true))
                                  .with(filter)
                                  .init();
}
