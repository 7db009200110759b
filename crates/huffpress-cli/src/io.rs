//! Input resolution and output delivery.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use huffpress::HuffmanConfig;
use huffpress_core::{Error, Result};
use tracing::info;

use crate::error::{CliError, CliResult};

/// Stem used for default output names when the input is not a file.
const DEFAULT_STEM: &str = "output";

/// Operation to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Compress,
    Decompress,
}

impl Mode {
    /// Extension of the default output file.
    pub fn extension(self) -> &'static str {
        match self {
            Mode::Compress => "hfc",
            Mode::Decompress => "txt",
        }
    }

    /// `<stem>.hfc` or `<stem>.txt` in the current directory.
    pub fn default_output(self, stem: &str) -> PathBuf {
        PathBuf::from(format!("{}.{}", stem, self.extension()))
    }
}

/// Where the bytes to process come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    File(PathBuf),
    Text(String),
    Bytes(Vec<u8>),
}

impl InputSource {
    /// Read the source into memory.
    ///
    /// A file that does not exist is an [`Error::InvalidInput`].
    pub fn resolve(self) -> Result<Vec<u8>> {
        match self {
            InputSource::File(path) => {
                if !path.is_file() {
                    return Err(Error::invalid_input(format!(
                        "could not find file \"{}\"",
                        path.display()
                    )));
                }
                Ok(fs::read(&path)?)
            }
            InputSource::Text(text) => Ok(text.into_bytes()),
            InputSource::Bytes(bytes) => Ok(bytes),
        }
    }

    /// Base name for a derived output file.
    pub fn stem(&self) -> String {
        match self {
            InputSource::File(path) => path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| DEFAULT_STEM.to_string()),
            InputSource::Text(_) | InputSource::Bytes(_) => DEFAULT_STEM.to_string(),
        }
    }
}

/// Where the result goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputSink {
    File(PathBuf),
    /// Render to the terminal as text.
    Display,
}

impl OutputSink {
    /// Write `data` to the sink. `terminal` receives displayed output.
    pub fn deliver<W: Write>(&self, data: &[u8], terminal: &mut W) -> CliResult<()> {
        match self {
            OutputSink::File(path) => {
                info!("Writing {} bytes to \"{}\"", data.len(), path.display());
                fs::write(path, data)?;
            }
            OutputSink::Display => {
                let text =
                    std::str::from_utf8(data).map_err(|_| CliError::NotDisplayable(data.len()))?;
                writeln!(terminal, "{}", text)?;
            }
        }
        Ok(())
    }
}

/// Load a JSON configuration file. Missing fields take their defaults.
pub fn load_config(path: &Path) -> CliResult<HuffmanConfig> {
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}
