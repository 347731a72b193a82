use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, warn};

use paratext::{export, logging, Config, ExtractionReport, Extractor, OutputFormat};

#[derive(Parser)]
#[command(name = "paratext")]
#[command(version)]
#[command(about = "Extract paragraph text from .docx files", long_about = None)]
struct Cli {
    /// Documents to extract, processed one at a time
    #[arg(value_name = "FILE", required_unless_present = "init_config")]
    paths: Vec<PathBuf>,

    /// Output format (overrides the config file)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Truncate each printed text to this many characters
    #[arg(long, value_name = "N")]
    max_chars: Option<usize>,

    /// Config file to use instead of the default location
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write the default config file and exit
    #[arg(long)]
    init_config: bool,

    /// Log each extraction step to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    logging::init_logger(cli.verbose);

    if cli.init_config {
        let path = Config::init_default()?;
        println!("Wrote default config to {}", path.display());
        return Ok(ExitCode::SUCCESS);
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let format = cli.format.unwrap_or(config.output.format);
    let max_chars = cli.max_chars.or(config.output.max_chars);

    let extractor = Extractor::new(config.layout);
    let mut failures = 0;
    let mut reports = Vec::with_capacity(cli.paths.len());

    for path in &cli.paths {
        let result = extractor.extract_paragraphs(path);
        match &result {
            Ok(text) => debug!(path = %path.display(), paragraphs = text.paragraph_count(), "done"),
            Err(err) => {
                warn!(path = %path.display(), "extraction failed: {err}");
                failures += 1;
            }
        }
        reports.push(ExtractionReport::new(path, &result, max_chars));
    }

    println!("{}", export::render(&reports, format)?);

    Ok(if failures == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
