//! Render a verb script to TwiML.
//!
//! # Usage
//!
//! ```bash
//! # YAML or JSON, picked by extension
//! twiml --file ivr.yaml
//!
//! # From stdin, explicit format, into a file
//! cat ivr.json | twiml --format json --output ivr.xml
//! ```

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use twiml::script::{self, ScriptFormat};

#[derive(Parser)]
#[command(name = "twiml")]
#[command(version)]
#[command(about = "Render a YAML or JSON verb script to a TwiML document")]
struct Cli {
    /// Script to render (reads stdin if omitted)
    #[arg(long, short)]
    file: Option<PathBuf>,

    /// Script format, overriding the file extension (stdin defaults to yaml)
    #[arg(long, value_enum)]
    format: Option<FormatArg>,

    /// Write the document here instead of stdout
    #[arg(long, short)]
    output: Option<PathBuf>,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    Yaml,
    Json,
}

impl From<FormatArg> for ScriptFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Yaml => ScriptFormat::Yaml,
            FormatArg::Json => ScriptFormat::Json,
        }
    }
}

/// `RUST_LOG` when it is set and parses, `warn` otherwise.
fn log_filter(spec: Option<&str>) -> EnvFilter {
    spec.filter(|s| !s.trim().is_empty())
        .and_then(|s| EnvFilter::try_new(s).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"))
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(
            std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref(),
        ))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let format = cli.format.map(ScriptFormat::from);
    let response = match &cli.file {
        Some(path) => script::load_file(path, format)
            .with_context(|| format!("failed to load script {}", path.display()))?,
        None => script::from_reader(io::stdin().lock(), format.unwrap_or(ScriptFormat::Yaml))
            .context("failed to read script from stdin")?,
    };

    let sink: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(
            File::create(path).with_context(|| format!("failed to create {}", path.display()))?,
        ),
        None => Box::new(io::stdout().lock()),
    };
    let mut sink = BufWriter::new(sink);

    twiml::encode_response(&mut sink, &response).context("failed to render document")?;
    // The document itself ends without a newline.
    if cli.output.is_none() {
        sink.write_all(b"\n")?;
    }
    sink.flush()?;
    Ok(())
}
