mod report;

use chronoport::{Context, plan_journey};
use chrono::{Datelike, Local};
use std::io::{self, IsTerminal, Read};

fn main() {
    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let ctx = Context { reference_year: config.reference_year };
    let journey = plan_journey(&config.input, None, &ctx);

    if config.json {
        match serde_json::to_string_pretty(&journey) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("error: failed to encode journey: {err}");
                std::process::exit(1);
            }
        }
    } else {
        report::print_journey(&config.input, &journey, config.color);
    }
}

struct CliConfig {
    input: String,
    reference_year: i64,
    json: bool,
    color: bool,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut input: Option<String> = None;
    let mut reference_year = i64::from(Local::now().year());
    let mut json = false;
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1).peekable();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("chronoport {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--json" => json = true,
            "--color" => color = true,
            "--no-color" => color = false,
            "--reference-year" => {
                let value =
                    args.next().ok_or_else(|| "error: --reference-year expects a value".to_string())?;
                reference_year = parse_reference_year(&value)?;
            }
            "--input" | "-i" => {
                let value = args.next().ok_or_else(|| "error: --input expects a value".to_string())?;
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(value);
            }
            "--" => {
                let rest = args.collect::<Vec<_>>().join(" ");
                if !rest.trim().is_empty() {
                    if input.is_some() {
                        return Err("error: input provided multiple times".to_string());
                    }
                    input = Some(rest);
                }
                break;
            }
            _ if arg.starts_with("--reference-year=") => {
                let value = arg.trim_start_matches("--reference-year=");
                reference_year = parse_reference_year(value)?;
            }
            _ if arg.starts_with("--input=") => {
                let value = arg.trim_start_matches("--input=");
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(value.to_string());
            }
            _ if arg.starts_with('-') => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                let rest = std::iter::once(arg).chain(args).collect::<Vec<_>>().join(" ");
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(rest);
                break;
            }
        }
    }

    let input = match input {
        Some(value) => value,
        None => read_stdin_input()?,
    };

    if input.trim().is_empty() {
        return Err(format!("error: no input provided\n\n{}", help_text()));
    }

    Ok(CliConfig { input, reference_year, json, color })
}

fn read_stdin_input() -> Result<String, String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
    Ok(buffer)
}

fn parse_reference_year(value: &str) -> Result<i64, String> {
    value
        .parse::<i64>()
        .map_err(|_| format!("error: invalid --reference-year '{value}' (expected an integer)"))
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "chronoport {version}

Time-travel destination parser and era-data synthesizer CLI.

Usage:
  chronoport [OPTIONS] [--] <destination...>
  chronoport [OPTIONS] --input <text>

Options:
  -i, --input <text>         Destination text, e.g. \"Athens 400 BC\". If
                             omitted, reads remaining args or stdin when no
                             args are provided.
  --reference-year <year>    Calendar year used to resolve relative
                             expressions (\"500 years ago\") and as the
                             default when no year is found.
                             Default: the current year.
  --json                     Print the resolved journey as JSON.
  --color                    Force ANSI color output.
  --no-color                 Disable ANSI color output.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Exit codes:
  0  Success.
  1  Internal error.
  2  Invalid arguments or missing input.
",
        version = env!("CARGO_PKG_VERSION")
    )
}
