//! oldphone - Old Mobile Phone Keypad Decoder
//!
//! Reads a key sequence from the command line, a file or standard input and
//! prints the decoded message.

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use oldphone::config::Settings;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

fn main() -> Result<()> {
    let matches = cli().get_matches();

    let settings = Settings::load()
        .context("failed to load configuration")?
        .merge_flags(
            flag_override(&matches, "report", "no-report"),
            flag_override(&matches, "verbose", "no-verbose"),
        );

    // Initialize logging; RUST_LOG overrides the default filter
    let default_filter = if settings.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let input = read_input(&matches)?;
    log::debug!("read input: {input:?}");

    if settings.report {
        println!("{}", oldphone::analyze(input.as_deref().unwrap_or_default()));
        return Ok(());
    }

    let message =
        oldphone::try_decode(input.as_deref()).context("failed to decode key sequence")?;
    println!("{message}");

    Ok(())
}

/// Command-line definition
fn cli() -> Command {
    Command::new("oldphone")
        .version(oldphone::VERSION)
        .about("Decode old mobile phone keypad input")
        .long_about(
            "oldphone decodes multi-tap keypad sequences such as \"4433555 555666#\" \
             into text. Digits select characters, a space separates runs of the same key, \
             '*' deletes the last character and '#' ends the message.",
        )
        .arg(
            Arg::new("input")
                .help("Key sequence to decode; read from stdin when omitted")
                .index(1)
                .conflicts_with("file"),
        )
        .arg(
            Arg::new("file")
                .short('f')
                .long("file")
                .help("Read the key sequence from a file")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("report")
                .short('r')
                .long("report")
                .help("Print a run-by-run analysis instead of the decoded message")
                .action(ArgAction::SetTrue)
                .overrides_with("no-report"),
        )
        .arg(
            Arg::new("no-report")
                .long("no-report")
                .help("Decode even if the configuration file enables the report")
                .action(ArgAction::SetTrue)
                .overrides_with("report"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable debug logging")
                .action(ArgAction::SetTrue)
                .overrides_with("no-verbose"),
        )
        .arg(
            Arg::new("no-verbose")
                .long("no-verbose")
                .help("Disable debug logging enabled by the configuration file")
                .action(ArgAction::SetTrue)
                .overrides_with("verbose"),
        )
}

/// `Some(true)` for `--on`, `Some(false)` for `--off`, `None` when neither is given.
/// The last of the two on the command line wins.
fn flag_override(matches: &ArgMatches, on: &str, off: &str) -> Option<bool> {
    if matches.get_flag(on) {
        Some(true)
    } else if matches.get_flag(off) {
        Some(false)
    } else {
        None
    }
}

/// Collect the key sequence from the argument, `--file` or piped stdin.
///
/// Returns `None` when nothing was supplied and stdin is an interactive terminal.
fn read_input(matches: &ArgMatches) -> Result<Option<String>> {
    let stdin = io::stdin();
    let piped = (!stdin.is_terminal()).then_some(stdin);
    collect_input(
        matches.get_one::<String>("input"),
        matches.get_one::<PathBuf>("file"),
        piped,
    )
}

/// Pick the input source in priority order: argument, file, then `stdin` if it is piped.
fn collect_input<R: Read>(
    input: Option<&String>,
    file: Option<&PathBuf>,
    stdin: Option<R>,
) -> Result<Option<String>> {
    if let Some(input) = input {
        return Ok(Some(input.clone()));
    }

    if let Some(path) = file {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read input file: {}", path.display()))?;
        return Ok(Some(strip_line_ending(&contents).to_string()));
    }

    let Some(mut stdin) = stdin else {
        return Ok(None);
    };

    let mut contents = String::new();
    stdin
        .read_to_string(&mut contents)
        .context("cannot read standard input")?;
    Ok(Some(strip_line_ending(&contents).to_string()))
}

/// Drop one trailing `\n` or `\r\n` left by editors and shells
fn strip_line_ending(text: &str) -> &str {
    text.strip_suffix("\r\n")
        .or_else(|| text.strip_suffix('\n'))
        .unwrap_or(text)
}
