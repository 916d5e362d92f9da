//! Texture scanning pipeline components.
//!
//! This module contains all the stages of the scanning pipeline:
//! - **discovery**: Find candidate files under the scan root
//! - **probe**: Read image dimensions without decoding pixel data
//! - **tag**: Extract the checksum tag from a filename
//! - **reduce**: Strip shared power-of-two factors from dimensions
//! - **analyzer**: Orchestrates the full pipeline

pub mod analyzer;
pub mod discovery;
pub mod probe;
pub mod reduce;
pub mod tag;

// Re-exports for convenient access
pub use analyzer::{ScanReport, TextureAnalyzer};
pub use discovery::{DiscoveredFile, FileDiscovery};
pub use probe::probe_dimensions;
pub use reduce::min_square_size;
pub use tag::{parse_tag, HiresTag, TagParse};
