//! Report formatting for TSV and JSONL output.

use std::io::{self, Write};

use crate::types::TextureRecord;

/// Report format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    /// One tab-separated row per record
    Tsv,
    /// One JSON object per line (newline-delimited JSON)
    JsonLines,
}

impl ReportFormat {
    /// Parse format from string (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "tsv" => Some(Self::Tsv),
            "jsonl" | "jsonlines" | "ndjson" => Some(Self::JsonLines),
            _ => None,
        }
    }
}

/// A writer that serializes texture records to the report stream.
///
/// TSV rows carry the fields in fixed order (crc, min width, min height,
/// size, format, folder) with integers in decimal and no header row.
pub struct ReportWriter<W: Write> {
    writer: W,
    format: ReportFormat,
    rows_written: usize,
}

impl<W: Write> ReportWriter<W> {
    /// Create a new report writer over a sink.
    pub fn new(writer: W, format: ReportFormat) -> Self {
        Self {
            writer,
            format,
            rows_written: 0,
        }
    }

    /// Write a single record.
    pub fn write(&mut self, record: &TextureRecord) -> io::Result<()> {
        match self.format {
            ReportFormat::Tsv => {
                writeln!(
                    self.writer,
                    "{}\t{}\t{}\t{}\t{}\t{}",
                    record.crc,
                    record.min_width,
                    record.min_height,
                    record.size,
                    record.format,
                    record.folder
                )?;
            }
            ReportFormat::JsonLines => {
                serde_json::to_writer(&mut self.writer, record).map_err(io::Error::other)?;
                writeln!(self.writer)?;
            }
        }
        self.rows_written += 1;
        Ok(())
    }

    /// Write all records in order.
    pub fn write_all(&mut self, records: &[TextureRecord]) -> io::Result<()> {
        for record in records {
            self.write(record)?;
        }
        Ok(())
    }

    /// Get the number of rows written.
    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    /// Flush the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    /// Consume the writer and return the underlying sink.
    pub fn into_inner(self) -> W {
        self.writer
    }
}
