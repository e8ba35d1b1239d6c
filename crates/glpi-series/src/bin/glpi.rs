#![forbid(unsafe_code)]

use std::io;
use std::process::ExitCode;

use glpi_runtime::{CheckEvidenceLedger, RuntimeMode};
use glpi_series::{PiCheckOptions, check_pi};

#[derive(Debug, Clone)]
struct CliArgs {
    term_pairs: u64,
    mode: RuntimeMode,
    evidence: bool,
}

#[derive(Debug, Clone)]
enum CliParseError {
    Help,
    Message(String),
}

fn parse_cli_args(args: &[String]) -> Result<CliArgs, CliParseError> {
    let defaults = PiCheckOptions::default();
    let mut term_pairs = defaults.term_pairs;
    let mut mode = defaults.mode;
    let mut evidence = false;

    let mut index = 0;
    while index < args.len() {
        match args[index].as_str() {
            "-h" | "--help" => return Err(CliParseError::Help),
            "--term-pairs" => {
                let Some(value) = args.get(index + 1) else {
                    return Err(CliParseError::Message(String::from(
                        "missing value for --term-pairs",
                    )));
                };
                term_pairs = value.parse().map_err(|_| {
                    CliParseError::Message(format!("invalid --term-pairs value `{value}`"))
                })?;
                index += 2;
            }
            "--mode" => {
                let Some(value) = args.get(index + 1) else {
                    return Err(CliParseError::Message(String::from(
                        "missing value for --mode",
                    )));
                };
                mode = match value.as_str() {
                    "strict" => RuntimeMode::Strict,
                    "hardened" => RuntimeMode::Hardened,
                    other => {
                        return Err(CliParseError::Message(format!(
                            "invalid --mode value `{other}` (expected strict or hardened)"
                        )));
                    }
                };
                index += 2;
            }
            "--evidence" => {
                evidence = true;
                index += 1;
            }
            unknown => {
                return Err(CliParseError::Message(format!(
                    "unknown argument `{unknown}`"
                )));
            }
        }
    }

    Ok(CliArgs {
        term_pairs,
        mode,
        evidence,
    })
}

fn print_usage() {
    println!(
        "usage: glpi [--term-pairs N] [--mode strict|hardened] [--evidence]\n\n\
         Approximate pi with the Gregory-Leibniz series, print `pi = <value>`,\n\
         and fail unless the result lies in [3.1415, 3.1416].\n\n\
         options:\n  \
         --term-pairs N   number of positive+negative term pairs (default 10000)\n  \
         --mode MODE      strict (reference semantics) or hardened (default strict)\n  \
         --evidence       dump the check evidence entry as JSONL to stderr"
    );
}

fn main() -> ExitCode {
    let raw_args: Vec<String> = std::env::args().skip(1).collect();
    let args = match parse_cli_args(&raw_args) {
        Ok(args) => args,
        Err(CliParseError::Help) => {
            print_usage();
            return ExitCode::SUCCESS;
        }
        Err(CliParseError::Message(message)) => {
            eprintln!("glpi: {message}");
            return ExitCode::FAILURE;
        }
    };

    let options = PiCheckOptions {
        term_pairs: args.term_pairs,
        mode: args.mode,
        emit_report: true,
    };
    let mut ledger = CheckEvidenceLedger::new(1);
    let outcome = check_pi(&mut io::stdout().lock(), &options, &mut ledger);

    if args.evidence && !ledger.is_empty() {
        eprintln!("{}", ledger.serialize_jsonl());
    }

    match outcome {
        Ok(_) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("glpi: {error}");
            ExitCode::FAILURE
        }
    }
}
