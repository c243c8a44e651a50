pub mod args;
pub mod logging;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use serde::Serialize;
use std::io::{self, Read, Write};
use tracing::{debug, info};

use self::args::Args;
use crate::config::Config;
use crate::truncate::{parse_limit, parse_separator, TruncateOptions, Truncator};

/// One input item and what became of it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TruncationRecord {
    pub input: String,
    pub output: String,
    pub truncated: bool,
}

/// Main application struct
pub struct App {
    /// Truncator built from flags and config
    truncator: Truncator,
    /// Inline text from the command line, stdin otherwise
    text: Option<String>,
    /// Treat every line as its own item
    per_line: bool,
    /// Emit JSON records
    json: bool,
}

impl App {
    /// Create an application from parsed arguments and a loaded config
    ///
    /// Flags take precedence over config values.
    pub fn new(args: &Args, config: &Config) -> Result<Self> {
        let limit = match (args.limit, config.default_limit) {
            (Some(limit), _) => parse_limit(limit).context("Invalid --limit")?,
            (None, Some(limit)) => parse_limit(i64::try_from(limit).unwrap_or(i64::MAX))
                .context("Invalid default_limit in config")?,
            (None, None) => {
                return Err(anyhow!(
                    "No character limit given; pass --limit or set default_limit in the config"
                ))
            }
        };

        let options = match &args.separator {
            Some(separator) => TruncateOptions::with_separator(
                parse_separator(separator).context("Invalid --separator")?,
            ),
            None => config.truncate_options(),
        };

        let text = if args.text.is_empty() {
            None
        } else {
            Some(args.text.join(" "))
        };

        Ok(Self {
            truncator: Truncator::with_options(limit, options),
            text,
            per_line: args.lines || config.per_line,
            json: args.json || config.json,
        })
    }

    /// Parse arguments, load config and run against stdin/stdout
    pub fn from_env() -> Result<()> {
        let args = Args::parse();
        logging::init(args.verbose);

        if args.init_config {
            let path = Config::create_default_config()?;
            println!("Wrote default config to {}", path.display());
            return Ok(());
        }

        let config = match &args.config {
            Some(path) => Config::load_from_file(path)?,
            None => Config::load()?,
        };

        let app = Self::new(&args, &config)?;
        app.run(io::stdin().lock(), io::stdout().lock())
    }

    /// Truncate the input and write results to `output`
    pub fn run<R: Read, W: Write>(&self, mut input: R, mut output: W) -> Result<()> {
        let text = match &self.text {
            Some(text) => text.clone(),
            None => {
                let mut buf = String::new();
                input
                    .read_to_string(&mut buf)
                    .context("Failed to read text from stdin")?;
                buf
            }
        };

        let records = self.process(&text);
        info!(
            items = records.len(),
            truncated = records.iter().filter(|r| r.truncated).count(),
            "processed input"
        );

        for record in &records {
            if self.json {
                let line = serde_json::to_string(record)
                    .context("Failed to serialize truncation record")?;
                writeln!(output, "{}", line)?;
            } else {
                writeln!(output, "{}", record.output)?;
            }
        }
        output.flush()?;

        Ok(())
    }

    /// Split text into items and truncate each one
    pub fn process(&self, text: &str) -> Vec<TruncationRecord> {
        let items: Vec<&str> = if self.per_line {
            text.lines().collect()
        } else {
            vec![text.trim_end_matches(['\n', '\r'])]
        };

        items
            .into_iter()
            .map(|item| {
                let truncated = !self.truncator.fits(item);
                if truncated {
                    debug!(chars = item.chars().count(), "item exceeds limit");
                }
                TruncationRecord {
                    input: item.to_string(),
                    output: self.truncator.apply(item),
                    truncated,
                }
            })
            .collect()
    }

    pub fn truncator(&self) -> &Truncator {
        &self.truncator
    }
}
