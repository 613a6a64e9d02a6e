//! `jpath` CLI — read, write and delete nested JSON values by path.
//!
//! ## Usage
//!
//! ```sh
//! # Read a value (stdin → stdout)
//! echo '{"a":{"b":[1,2,3]}}' | jpath get 'a/b[-1]'
//!
//! # Fall back to a default when the path is absent
//! jpath get -i data.json 'settings/theme' --default '"light"'
//!
//! # Write a value, creating missing structure
//! jpath set -i data.json -o data.json 'users[0]/name' Alice
//!
//! # Delete a key or array element
//! jpath remove -i data.json 'users[0]'
//!
//! # Use another separator, or a list-form path
//! jpath get --separator . 'a.b[1]' -i data.json
//! jpath get --path-json '["key/with/slashes", 0]' -i data.json
//!
//! # Show how a path string is split
//! jpath split 'name3[1]/time [ms]'
//! ```

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use jpath_core::{Path, PathSyntax};
use serde_json::Value;
use std::io::{self, Read};

#[derive(Parser)]
#[command(
    name = "jpath",
    version,
    about = "Get, set and remove nested JSON values by path"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the value at PATH
    Get {
        #[command(flatten)]
        path: PathArgs,
        #[command(flatten)]
        io: IoArgs,
        /// JSON value printed when PATH does not resolve
        #[arg(long)]
        default: Option<String>,
    },
    /// Assign VALUE at PATH, creating missing objects and arrays
    Set {
        #[command(flatten)]
        path: PathArgs,
        /// New value, parsed as JSON and otherwise taken as a string
        value: String,
        /// Always treat VALUE as a string
        #[arg(long)]
        string: bool,
        #[command(flatten)]
        io: IoArgs,
    },
    /// Delete the object key or array element at PATH
    Remove {
        #[command(flatten)]
        path: PathArgs,
        #[command(flatten)]
        io: IoArgs,
    },
    /// Print the segments PATH splits into, as a JSON array
    Split {
        #[command(flatten)]
        path: PathArgs,
    },
}

#[derive(Args)]
struct PathArgs {
    /// Path expression, e.g. 'a/b[1]/c'
    path: String,
    /// Segment separator for string paths
    #[arg(short, long, default_value_t = jpath_core::DEFAULT_SEPARATOR)]
    separator: char,
    /// Treat PATH as a JSON array of names (strings) and indices (integers)
    #[arg(long, conflicts_with = "separator")]
    path_json: bool,
}

impl PathArgs {
    fn resolve(&self) -> Result<Path> {
        if self.path_json {
            return serde_json::from_str(&self.path)
                .with_context(|| format!("Invalid list path: {}", self.path));
        }
        let syntax = PathSyntax::new(self.separator)?;
        Ok(syntax.split(&self.path))
    }
}

#[derive(Args)]
struct IoArgs {
    /// Input JSON file (reads from stdin if omitted)
    #[arg(short, long)]
    input: Option<String>,
    /// Output file (writes to stdout if omitted)
    #[arg(short, long)]
    output: Option<String>,
    /// Print compact JSON instead of pretty-printed
    #[arg(long)]
    compact: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Get { path, io, default } => {
            let path = path.resolve()?;
            let root = read_json(io.input.as_deref())?;
            let value = match jpath_core::get(&root, &path) {
                Some(value) => value,
                None => match default {
                    Some(raw) => serde_json::from_str(&raw)
                        .with_context(|| format!("Invalid --default JSON: {}", raw))?,
                    None => anyhow::bail!("No value at path '{}'", path),
                },
            };
            write_json(&io, &value)?;
        }
        Commands::Set {
            path,
            value,
            string,
            io,
        } => {
            let path = path.resolve()?;
            let mut root = read_json(io.input.as_deref())?;
            jpath_core::set(&mut root, &path, parse_value(&value, string));
            write_json(&io, &root)?;
        }
        Commands::Remove { path, io } => {
            let path = path.resolve()?;
            let mut root = read_json(io.input.as_deref())?;
            if jpath_core::remove(&mut root, &path).is_none() {
                tracing::info!(%path, "nothing to remove");
            }
            write_json(&io, &root)?;
        }
        Commands::Split { path } => {
            let path = path.resolve()?;
            println!("{}", serde_json::to_string(&path)?);
        }
    }

    Ok(())
}

/// Install a stderr subscriber. `RUST_LOG` wins over the `-v` count.
fn init_logging(verbose: u8) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr))
        .init();
}

/// Parse a command-line value as JSON, falling back to a plain string.
///
/// - `42`, `true`, `null`, `[1,2]`, `{"a":1}` keep their JSON type
/// - `Alice` (not valid JSON) becomes `"Alice"`
/// - with `--string`, everything is a string
fn parse_value(raw: &str, force_string: bool) -> Value {
    if force_string {
        return Value::String(raw.to_string());
    }
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

/// Read the input document. Blank input starts from `null`, so `set` can
/// build a document from nothing.
fn read_json(path: Option<&str>) -> Result<Value> {
    let text = read_input(path)?;
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(&text).context("Failed to parse input JSON")
}

fn write_json(io: &IoArgs, value: &Value) -> Result<()> {
    let mut text = if io.compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    text.push('\n');
    write_output(io.output.as_deref(), &text)
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
