//! Batch CLI: read an HTML fragment from a file or stdin, print the
//! extracted event names.

use std::env;
use std::fs;
use std::io::{self, Read};
use std::process::ExitCode;

use event_harvest::{extract_with_options, reformat, session, Options};
use serde::Serialize;

const USAGE: &str = "\
Usage: harvest [OPTIONS] [FILE]

Extract event-name strings from an HTML fragment read from FILE or stdin.

Options:
  -j, --join                Print the single-line \" | \"-joined form
  -c, --copy                Also copy the output to the system clipboard
      --json                Emit a JSON envelope instead of plain text
      --label-class NAME    Primary text marker class (default: ant-typography)
      --container-class NAME
                            Flex container marker class (default: flex-1)
      --secondary-class NAME
                            Secondary/muted marker class (default: ant-typography-secondary)
  -h, --help                Show this help
  -V, --version             Show version";

#[derive(Serialize)]
struct Envelope<'a> {
    strategy: Option<&'static str>,
    events: &'a [String],
    output: &'a str,
}

struct Args {
    file: Option<String>,
    join: bool,
    copy: bool,
    json: bool,
    options: Options,
}

fn parse_args() -> Result<Option<Args>, String> {
    let mut args = Args {
        file: None,
        join: false,
        copy: false,
        json: false,
        options: Options::default(),
    };

    let mut iter = env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-j" | "--join" => args.join = true,
            "-c" | "--copy" => args.copy = true,
            "--json" => args.json = true,
            "--label-class" => {
                args.options.label_class = require_value(&arg, iter.next())?;
            }
            "--container-class" => {
                args.options.container_class = require_value(&arg, iter.next())?;
            }
            "--secondary-class" => {
                args.options.secondary_class = require_value(&arg, iter.next())?;
            }
            "-h" | "--help" => {
                println!("{USAGE}");
                return Ok(None);
            }
            "-V" | "--version" => {
                println!("harvest {}", env!("CARGO_PKG_VERSION"));
                return Ok(None);
            }
            _ if arg.starts_with('-') => return Err(format!("unknown option: {arg}")),
            _ => {
                if args.file.replace(arg).is_some() {
                    return Err("only one input file is accepted".to_string());
                }
            }
        }
    }

    Ok(Some(args))
}

fn require_value(flag: &str, value: Option<String>) -> Result<String, String> {
    value.ok_or_else(|| format!("{flag} requires a value"))
}

fn read_input(file: Option<&str>) -> io::Result<Vec<u8>> {
    match file {
        Some(path) => fs::read(path),
        None => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf)?;
            Ok(buf)
        }
    }
}

fn main() -> ExitCode {
    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => return ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("harvest: {err}");
            eprintln!("{USAGE}");
            return ExitCode::from(2);
        }
    };

    let input = match read_input(args.file.as_deref()) {
        Ok(input) => input,
        Err(err) => {
            eprintln!("harvest: failed to read input: {err}");
            return ExitCode::FAILURE;
        }
    };

    let text = event_harvest::encoding::decode(&input);
    if text.trim().is_empty() {
        eprintln!("harvest: no HTML input provided");
        return ExitCode::from(2);
    }

    let result = extract_with_options(&text, &args.options);

    let output = if args.join {
        reformat::single_line(&result.events)
    } else {
        result.events.join("\n")
    };

    if args.json {
        let envelope = Envelope {
            strategy: result.strategy.map(event_harvest::Strategy::as_str),
            events: &result.events,
            output: &output,
        };
        println!("{}", serde_json::to_string(&envelope).unwrap_or_default());
    } else if result.events.is_empty() {
        println!("{}", session::no_matches_text(&args.options));
    } else {
        println!("{output}");
    }

    if args.copy {
        if result.events.is_empty() {
            eprintln!("harvest: nothing to copy");
            return ExitCode::FAILURE;
        }
        if let Err(err) = copy_to_clipboard(&output) {
            eprintln!("harvest: {err}");
            return ExitCode::FAILURE;
        }
        eprintln!("Copied to clipboard.");
    }

    ExitCode::SUCCESS
}

#[cfg(feature = "clipboard")]
fn copy_to_clipboard(text: &str) -> event_harvest::Result<()> {
    event_harvest::clipboard::copy(text)
}

#[cfg(not(feature = "clipboard"))]
fn copy_to_clipboard(_text: &str) -> event_harvest::Result<()> {
    Err(event_harvest::Error::Clipboard(
        "clipboard support not compiled in".to_string(),
    ))
}
