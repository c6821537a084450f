use anyhow::Context;
use roster_notifier::cli::args::{Invocation, parse_args};
use roster_notifier::cli::commands::{self, shared};
use roster_notifier::cli::help::help_text;
use std::process;

fn main() {
    if let Err(error) = shared::setup_logging() {
        eprintln!("Error: {}", error);
    }

    let args: Vec<String> = std::env::args().skip(1).collect();

    let configuration = match parse_args(&args) {
        Ok(Invocation::Help) => {
            println!("{}", help_text());
            process::exit(0);
        }
        Ok(Invocation::Run(configuration)) => configuration,
        Err(error) => {
            eprintln!("{}", help_text());
            eprintln!("Error: {}", error);
            process::exit(1);
        }
    };

    let input_file = configuration.input_file.display().to_string();
    let result = commands::run(configuration);
    if let Err(error) = &result {
        if error.shows_help() {
            eprintln!("{}", help_text());
        }
    }
    let result =
        result.with_context(|| format!("Failed to notify the households in {}", input_file));

    match result {
        Ok(_stats) => {
            // Success - stats have already been reported by the command
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}
