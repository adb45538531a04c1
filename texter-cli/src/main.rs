//! Command-line interface for texter
//!
//! Scans a Ruby source file, interactively asks which string literals to
//! mark translatable, and writes the rewritten file. Everything the user
//! declines — and every region that is not a string — is copied through
//! byte for byte.
//!
//! Usage:
//!   texter `<inputfile>` [`<outputfile>`]   - output defaults to `<inputfile>`.texter.rb

use clap::{Arg, Command};
use std::fs;
use std::io;
use std::process;

use texter_parser::ruby::parsing::parse;
use texter_parser::ruby::processor::reconstruct;

mod interactive;
use interactive::InteractiveHandler;

fn main() {
    let matches = Command::new("texter")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Marks string literals in Ruby source translatable")
        .arg(Arg::new("input").help("Path to the Ruby source file").index(1))
        .arg(
            Arg::new("output")
                .help("Output path (default: <input>.texter.rb)")
                .index(2),
        )
        .get_matches();

    // a missing input path is a usage request, not an error
    let Some(input_path) = matches.get_one::<String>("input") else {
        println!("Usage: texter <inputfile> [<outputfile>]");
        return;
    };
    let output_path = matches
        .get_one::<String>("output")
        .cloned()
        .unwrap_or_else(|| format!("{input_path}.texter.rb"));

    let source = fs::read_to_string(input_path).unwrap_or_else(|e| {
        eprintln!("Cannot read {input_path}: {e}");
        process::exit(1);
    });

    let root = parse(&source).unwrap_or_else(|e| {
        eprintln!("{input_path}: {e}");
        process::exit(1);
    });

    let stdin = io::stdin();
    let mut handler = InteractiveHandler::new(&source, stdin.lock(), io::stdout());
    let output = reconstruct(&source, &root, &mut handler);

    fs::write(&output_path, output).unwrap_or_else(|e| {
        eprintln!("Cannot write {output_path}: {e}");
        process::exit(1);
    });
}
