//! Texel Core - Embeddable hires texture scanning library.
//!
//! Texel walks a directory of texture images, parses the checksum tag
//! embedded in each filename, reduces each image's dimensions to their
//! minimal power-of-two repeat unit, and collects one report row per
//! recognized texture.
//!
//! # Architecture
//!
//! A strictly forward, single-threaded pipeline:
//!
//! ```text
//! Discover files → Probe dimensions → Parse tag → Reduce → Report rows
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use texel_core::{Config, ReportFormat, ReportWriter, TextureAnalyzer};
//!
//! fn main() -> texel_core::Result<()> {
//!     let analyzer = TextureAnalyzer::new(&Config::load()?);
//!     let report = analyzer.scan("./textures".as_ref())?;
//!
//!     let mut writer = ReportWriter::new(std::io::stdout().lock(), ReportFormat::Tsv);
//!     writer.write_all(&report.records)?;
//!     writer.flush()?;
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod config;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod types;

// Re-exports for convenient access
pub use config::Config;
pub use error::{ConfigError, Result, ScanError, ScanResult, TexelError};
pub use output::{ReportFormat, ReportWriter};
pub use pipeline::{ScanReport, TextureAnalyzer};
pub use types::{ScanStats, TextureRecord};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
