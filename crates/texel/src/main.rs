//! Texel CLI - hires texture report tool.
//!
//! Texel scans a directory of replacement textures, reads the checksum tag
//! embedded in each filename, and prints one tab-separated row per
//! recognized texture: combined checksum, minimal tile size, size and format
//! codes, and the containing folder.
//!
//! # Usage
//!
//! ```bash
//! # Report to stdout
//! texel ./hires_texpacks/
//!
//! # Report to a file, as JSON Lines
//! texel ./hires_texpacks/ --output report.jsonl --format jsonl
//! ```

use clap::{Parser, ValueEnum};
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use texel_core::{Config, ReportFormat, ReportWriter, TextureAnalyzer};

mod logging;

/// Texel - scan a texture directory and tabulate checksum tags and minimal
/// tile sizes.
#[derive(Parser, Debug)]
#[command(name = "texel")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory of texture images to scan
    directory: String,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Report format (defaults to the configured format, normally tsv)
    #[arg(short, long, value_enum)]
    format: Option<Format>,

    /// Enable verbose (debug) logging
    #[arg(short, long)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long)]
    json_logs: bool,
}

/// Supported report formats.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    /// One tab-separated row per texture
    Tsv,
    /// One JSON object per line (newline-delimited)
    Jsonl,
}

impl From<Format> for ReportFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Tsv => ReportFormat::Tsv,
            Format::Jsonl => ReportFormat::JsonLines,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Note: logging isn't initialized yet, so use eprintln for config warnings.
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Failed to load config: {e}\n  \
                 Using default configuration."
            );
            Config::default()
        }
    };
    logging::init_from_config(&config, cli.verbose, cli.json_logs);

    tracing::debug!("texel v{}", texel_core::VERSION);

    run(cli, config)
}

/// Scan the requested directory and emit the report.
fn run(cli: Cli, config: Config) -> anyhow::Result<()> {
    let root = PathBuf::from(shellexpand::tilde(&cli.directory).into_owned());

    let format = match cli.format {
        Some(format) => format.into(),
        None => ReportFormat::parse(&config.output.format).unwrap_or(ReportFormat::Tsv),
    };

    let analyzer = TextureAnalyzer::new(&config);
    let report = analyzer.scan(&root)?;

    if let Some(ref path) = cli.output {
        let file = File::create(path)?;
        let mut writer = ReportWriter::new(BufWriter::new(file), format);
        writer.write_all(&report.records)?;
        writer.flush()?;
        tracing::info!(
            "Report written to {} ({} row(s))",
            path.display(),
            writer.rows_written()
        );
    } else {
        let stdout = io::stdout();
        let mut writer = ReportWriter::new(stdout.lock(), format);
        writer.write_all(&report.records)?;
        writer.flush()?;
    }

    Ok(())
}
