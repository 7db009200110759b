//! Huffpress command-line compressor
//!
//! ## Usage
//!
//! ```bash
//! # Compress a file to notes.hfc
//! huffpress -c notes.txt
//!
//! # Decompress to a chosen file
//! huffpress -d notes.hfc -o notes.txt
//!
//! # Read standard input
//! cat notes.txt | huffpress -c - -o notes.hfc
//!
//! # Compress literal text, print the decompressed result
//! huffpress -c --text "abcabcabc" -o abc.hfc
//! huffpress -d abc.hfc --stdout
//! ```

mod error;
mod io;

use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgGroup, Parser};
use huffpress::HuffmanCodec;
use huffpress_core::{CompressionStats, Decompressor, Error};
use tracing::{debug, error, info, Level};
use tracing_subscriber::FmtSubscriber;

use crate::error::CliResult;
use crate::io::{load_config, InputSource, Mode, OutputSink};

/// Input argument that selects standard input.
const STDIN_MARKER: &str = "-";

#[derive(Parser, Debug)]
#[command(name = "huffpress")]
#[command(version)]
#[command(about = "Huffman compression for files and text", long_about = None)]
#[command(group(ArgGroup::new("mode").required(true).args(["compress", "decompress"])))]
struct Args {
    /// File to compress or decompress (`-` reads standard input)
    #[arg(required_unless_present = "text", conflicts_with = "text")]
    input: Option<PathBuf>,

    /// Literal text to use as input instead of a file
    #[arg(long)]
    text: Option<String>,

    /// Compress the input
    #[arg(short, long)]
    compress: bool,

    /// Decompress the input
    #[arg(short, long)]
    decompress: bool,

    /// Output file (defaults to <input stem>.hfc or <input stem>.txt)
    #[arg(short, long)]
    out_file: Option<PathBuf>,

    /// Print the result to the terminal instead of writing a file
    #[arg(long, conflicts_with = "out_file")]
    stdout: bool,

    /// JSON configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = init_logging(&args.log_level) {
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(log_level: &str) -> CliResult<()> {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    // Logs go to stderr so --stdout output stays clean.
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn run(args: Args) -> CliResult<()> {
    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => Default::default(),
    };
    debug!(?config, "loaded configuration");

    let mode = if args.compress {
        Mode::Compress
    } else {
        Mode::Decompress
    };

    let source = match (args.input, args.text) {
        (Some(path), _) if path.as_os_str() == STDIN_MARKER => {
            let mut bytes = Vec::new();
            std::io::stdin().lock().read_to_end(&mut bytes)?;
            InputSource::Bytes(bytes)
        }
        (Some(path), _) => InputSource::File(path),
        (None, Some(text)) => InputSource::Text(text),
        (None, None) => {
            return Err(Error::invalid_input("no input file or --text given").into());
        }
    };

    let sink = if args.stdout {
        OutputSink::Display
    } else {
        OutputSink::File(
            args.out_file
                .unwrap_or_else(|| mode.default_output(&source.stem())),
        )
    };

    match &source {
        InputSource::File(path) => info!("{:?} \"{}\"", mode, path.display()),
        InputSource::Text(_) => info!("{:?} literal text", mode),
        InputSource::Bytes(_) => info!("{:?} standard input", mode),
    }

    let input = source.resolve()?;
    let codec = HuffmanCodec::with_config(config);

    let output = match mode {
        Mode::Compress => {
            let (frame, stats) = codec.compress_with_stats(&input)?;
            info!("{}", report(&stats));
            frame
        }
        Mode::Decompress => codec.decompress(&input)?,
    };

    sink.deliver(&output, &mut std::io::stdout().lock())
}

/// One-line compression report: stats summary plus gain per input byte.
fn report(stats: &CompressionStats) -> String {
    let ratio = stats.ratio();
    format!(
        "{}; {:.2} bits per byte, {} bytes saved",
        stats.summary(),
        ratio.bits_per_byte(),
        ratio.bytes_saved()
    )
}
