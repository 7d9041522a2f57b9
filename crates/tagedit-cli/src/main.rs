//! tagedit - read and rewrite tag values inside fixed-capacity documents
//!
//! Usage:
//!   tagedit [OPTIONS] <COMMAND> <FILE> <TAG> [VALUE]
//!
//! Commands:
//!   get     Print a tag's value
//!   set     Rewrite a tag's value in place and persist the file
//!   probe   Report where a tag's value lives in the document
//!
//! The editor itself performs no I/O: this tool is the caller that
//! round-trips the document buffer through storage and owns the buffer's
//! fixed capacity for the duration of the edit.

use std::env;
use std::fs;
use std::process;

use serde::Serialize;
use tagedit_core::{Document, EditError};

/// Growth headroom reserved above the file size when `--capacity` is not
/// given, so legitimate grow edits do not spuriously overflow.
const DEFAULT_HEADROOM: usize = 4096;

fn main() {
    let args: Vec<String> = env::args().collect();

    match run(&args) {
        Ok(()) => {}
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    }
}

fn run(args: &[String]) -> Result<(), String> {
    let config = parse_args(args)?;

    let content = fs::read(&config.file)
        .map_err(|e| format!("failed to read '{}': {}", config.file, e))?;

    let capacity = match config.capacity {
        Some(n) => n,
        None => content.len() + 1 + DEFAULT_HEADROOM,
    };

    let doc = Document::from_bytes(&content, capacity)
        .map_err(|e| format!("cannot load '{}' with capacity {}: {}", config.file, capacity, e))?;

    match config.command {
        Command::Get => cmd_get(&doc, &config),
        Command::Set => cmd_set(doc, &config),
        Command::Probe => cmd_probe(&doc, &config),
    }
}

#[derive(Debug)]
struct Config {
    command: Command,
    file: String,
    tag: String,
    value: Option<String>,
    capacity: Option<usize>,
    format: OutputFormat,
    verbose: bool,
}

#[derive(Debug, Clone, Copy)]
enum Command {
    Get,
    Set,
    Probe,
}

#[derive(Debug, Clone, Copy)]
enum OutputFormat {
    Text,
    Json,
}

fn parse_args(args: &[String]) -> Result<Config, String> {
    let mut command = None;
    let mut format = OutputFormat::Text;
    let mut verbose = false;
    let mut capacity = None;
    let mut positional: Vec<String> = Vec::new();

    let mut i = 1;
    while i < args.len() {
        let arg = &args[i];
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                process::exit(0);
            }
            "-V" | "--version" => {
                println!("tagedit {}", env!("CARGO_PKG_VERSION"));
                process::exit(0);
            }
            "-v" | "--verbose" => verbose = true,
            "-j" | "--json" => format = OutputFormat::Json,
            "-c" | "--capacity" => {
                i += 1;
                let raw = args
                    .get(i)
                    .ok_or_else(|| "--capacity requires a value".to_string())?;
                let n: usize = raw
                    .parse()
                    .map_err(|_| format!("invalid capacity: {}", raw))?;
                capacity = Some(n);
            }
            "get" if command.is_none() => command = Some(Command::Get),
            "set" if command.is_none() => command = Some(Command::Set),
            "probe" if command.is_none() => command = Some(Command::Probe),
            _ if arg.starts_with('-') => {
                return Err(format!("unknown option: {}", arg));
            }
            _ => positional.push(arg.clone()),
        }
        i += 1;
    }

    let command = command.ok_or_else(|| "no command specified (get, set, probe)".to_string())?;

    let mut positional = positional.into_iter();
    let file = positional
        .next()
        .ok_or_else(|| "no input file specified".to_string())?;
    let tag = positional
        .next()
        .ok_or_else(|| "no tag name specified".to_string())?;
    let value = positional.next();
    if positional.next().is_some() {
        return Err("too many arguments".to_string());
    }

    match command {
        Command::Set if value.is_none() => {
            return Err("set requires a value argument".to_string());
        }
        Command::Get | Command::Probe if value.is_some() => {
            return Err("value argument is only valid for set".to_string());
        }
        _ => {}
    }

    Ok(Config {
        command,
        file,
        tag,
        value,
        capacity,
        format,
        verbose,
    })
}

fn print_help() {
    eprintln!(
        r#"tagedit - bounded in-place tag-value editor

USAGE:
    tagedit [OPTIONS] <COMMAND> <FILE> <TAG> [VALUE]

COMMANDS:
    get     Print the value of <TAG>
    set     Replace the value of <TAG> with <VALUE> and write the file back
    probe   Report the byte span of <TAG>'s value

OPTIONS:
    -c, --capacity <N>   Total document buffer capacity in bytes
                         (default: file size + 1 + 4096 headroom)
    -v, --verbose        Show buffer accounting details
    -j, --json           Output in JSON format
    -h, --help           Print help information
    -V, --version        Print version information

EXAMPLES:
    tagedit get settings.xml serial_id
    tagedit set settings.xml product_area 4
    tagedit -c 1024 set settings.xml region EU
    tagedit -j probe settings.xml model_number
"#
    );
}

fn describe(err: EditError, tag: &str, file: &str) -> String {
    match err {
        EditError::ElementNotFound => format!("tag '{}' not found in '{}'", tag, file),
        EditError::MalformedDocument => {
            format!("'{}' is malformed around tag '{}'", file, tag)
        }
        EditError::DocumentWouldOverflow => format!(
            "new value for '{}' does not fit the document buffer (try --capacity)",
            tag
        ),
        other => other.to_string(),
    }
}

// =============================================================================
// Get Command
// =============================================================================

fn cmd_get(doc: &Document, config: &Config) -> Result<(), String> {
    let value = doc
        .value(&config.tag)
        .map_err(|e| describe(e, &config.tag, &config.file))?;
    let value = String::from_utf8_lossy(value);

    match config.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({ "tag": config.tag, "value": value })
            );
        }
        OutputFormat::Text => println!("{}", value),
    }
    Ok(())
}

// =============================================================================
// Set Command
// =============================================================================

#[derive(Serialize)]
struct SetReport<'a> {
    tag: &'a str,
    value: &'a str,
    length: usize,
    capacity: usize,
    remaining: usize,
}

fn cmd_set(mut doc: Document, config: &Config) -> Result<(), String> {
    let value = config.value.as_deref().unwrap_or_default();

    doc.write_value(&config.tag, value.as_bytes())
        .map_err(|e| describe(e, &config.tag, &config.file))?;

    fs::write(&config.file, doc.as_bytes())
        .map_err(|e| format!("failed to write '{}': {}", config.file, e))?;

    let report = SetReport {
        tag: &config.tag,
        value,
        length: doc.len(),
        capacity: doc.capacity(),
        remaining: doc.remaining(),
    };

    match config.format {
        OutputFormat::Json => {
            let json = serde_json::to_string(&report)
                .map_err(|e| format!("failed to encode report: {}", e))?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            if config.verbose {
                println!(
                    "set {} = {} ({} of {} bytes used, {} free)",
                    report.tag, report.value, report.length, report.capacity, report.remaining
                );
            }
        }
    }
    Ok(())
}

// =============================================================================
// Probe Command
// =============================================================================

fn cmd_probe(doc: &Document, config: &Config) -> Result<(), String> {
    let span = doc
        .value_span(&config.tag)
        .map_err(|e| describe(e, &config.tag, &config.file))?;

    match config.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "tag": config.tag,
                    "start": span.start,
                    "end": span.end,
                    "length": span.len(),
                })
            );
        }
        OutputFormat::Text => {
            println!(
                "{}: bytes {}..{} ({} bytes)",
                config.tag,
                span.start,
                span.end,
                span.len()
            );
            if config.verbose {
                println!(
                    "document: {} of {} bytes used, {} free",
                    doc.len(),
                    doc.capacity(),
                    doc.remaining()
                );
            }
        }
    }
    Ok(())
}
