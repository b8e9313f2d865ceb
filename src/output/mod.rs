//! Output formatting and writing modules

pub mod formats;

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;

use crate::config::{OutputConfig, OutputFormat};
use crate::decode::Recognition;

pub use formats::{format_json, format_text};

/// Output writer that handles multiple destinations
pub struct OutputWriter {
    config: OutputConfig,
    file: Option<File>,
    written: u32,
}

impl OutputWriter {
    /// Create a new output writer
    pub fn new(config: OutputConfig) -> io::Result<Self> {
        let file = if let Some(ref path) = config.output_path {
            // Ensure parent directory exists
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }

            Some(OpenOptions::new().create(true).append(true).open(path)?)
        } else {
            None
        };

        Ok(Self {
            config,
            file,
            written: 0,
        })
    }

    /// Write a recognition result; empty text is skipped
    pub fn write(&mut self, result: &Recognition) -> io::Result<()> {
        if result.text.trim().is_empty() {
            return Ok(());
        }

        self.written += 1;

        let formatted = self.format(result);

        if self.config.enable_console {
            self.write_console(&formatted)?;
        }

        if let Some(ref mut file) = self.file {
            writeln!(file, "{}", formatted)?;
            file.flush()?;
        }

        Ok(())
    }

    fn format(&self, result: &Recognition) -> String {
        match self.config.format {
            OutputFormat::Text => format_text(result),
            OutputFormat::Json => format_json(result),
        }
    }

    fn write_console(&self, text: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", text)?;
        stdout.flush()
    }

    /// Flush any buffered output
    pub fn flush(&mut self) -> io::Result<()> {
        if let Some(ref mut file) = self.file {
            file.flush()?;
        }
        Ok(())
    }

    /// Number of results written so far
    pub fn written(&self) -> u32 {
        self.written
    }

    /// Get the output file path if configured
    pub fn output_path(&self) -> Option<&PathBuf> {
        self.config.output_path.as_ref()
    }
}
