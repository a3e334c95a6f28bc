//! Command-line interface for the tokenizer
//!
//! Usage:
//!   tokenizer `<input>`                                 - Tokenize a string with the configured grammar
//!   tokenizer `<input>` --grammar `<file>`                - Use every rule of a grammar file
//!   tokenizer `<input>` --grammar `<file>` --count `<n>`  - Use the first `<n>` rules of a grammar file
//!   tokenizer --test                                  - Run the acceptance fixtures
//!
//! Configuration is read from the embedded defaults, then `tokenizer.toml` in the working
//! directory, then `--config <file>`; flags override all of them.

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::io;
use std::path::PathBuf;
use tokenizer::tokenizer::config::{Loader, Overrides, TokenizerConfig};
use tokenizer::tokenizer::{formats, testing};
use tokenizer::{Error, Result, Scanner};

fn main() {
    let matches = Command::new("tokenizer")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Split a string into the tokens recognized by an ordered list of regex rules")
        .arg_required_else_help(true)
        .arg(
            Arg::new("input")
                .help("The string to tokenize")
                .required_unless_present("test")
                .index(1),
        )
        .arg(
            Arg::new("grammar")
                .long("grammar")
                .short('g')
                .help("Grammar file to load instead of the configured one")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("count")
                .long("count")
                .short('n')
                .help("Number of rules to load from the start of the grammar")
                .value_name("N")
                .allow_negative_numbers(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the defaults")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format")
                .value_parser(["tsv", "tokens", "json"]),
        )
        .arg(
            Arg::new("test")
                .long("test")
                .help("Run the built-in acceptance fixtures against the grammar")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    if let Err(e) = run(&matches) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> Result<()> {
    let config = load_config(matches)?;
    let scanner = Scanner::new(config.grammar.load()?)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if matches.get_flag("test") {
        testing::run_self_test(&scanner, &mut out)?;
        return Ok(());
    }

    let input = matches
        .get_one::<String>("input")
        .ok_or_else(|| Error::InvalidInvocation("an input string is required".to_string()))?;
    formats::write_scan(&scanner, input, config.output.format, &mut out)?;
    Ok(())
}

/// Layer the configuration sources and apply command-line overrides.
fn load_config(matches: &ArgMatches) -> Result<TokenizerConfig> {
    let overrides = Overrides {
        grammar_path: matches.get_one::<PathBuf>("grammar").cloned(),
        rule_count: matches.get_one::<String>("count").cloned(),
        format: matches.get_one::<String>("format").cloned(),
    };
    let config = Loader::for_invocation(matches.get_one::<PathBuf>("config").map(PathBuf::as_path))
        .with_overrides(&overrides)?
        .build()?;
    Ok(config)
}
