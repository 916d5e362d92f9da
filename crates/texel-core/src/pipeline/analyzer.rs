//! Scan orchestration - wires discovery, probing, tag parsing, and reduction.

use std::path::Path;

use crate::config::Config;
use crate::error::ScanResult;
use crate::types::{ScanStats, TextureRecord};

use super::discovery::{DiscoveredFile, FileDiscovery};
use super::probe::probe_dimensions;
use super::reduce::min_square_size;
use super::tag::{parse_tag, TagParse};

/// Everything a scan produced: report rows plus per-run counters.
#[derive(Debug, Default)]
pub struct ScanReport {
    /// One row per recognized texture, in traversal order
    pub records: Vec<TextureRecord>,
    /// Counters for the run summary
    pub stats: ScanStats,
}

/// The main analyzer that orchestrates the scanning pipeline.
pub struct TextureAnalyzer {
    discovery: FileDiscovery,
}

impl TextureAnalyzer {
    /// Create a new analyzer with the given configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            discovery: FileDiscovery::new(&config.scan),
        }
    }

    /// Scan a directory tree and collect a report row for every recognized
    /// hires texture.
    ///
    /// Per-file failures (unopenable image, malformed tag, degenerate
    /// dimensions) are diagnosed and skipped; only traversal errors abort
    /// the run.
    pub fn scan(&self, root: &Path) -> ScanResult<ScanReport> {
        let files = self.discovery.discover(root)?;
        tracing::debug!("Found {} file(s) under {}", files.len(), root.display());

        let mut report = ScanReport::default();
        for file in &files {
            if let Some(record) = self.analyze(root, file, &mut report.stats) {
                report.records.push(record);
                report.stats.analyzed += 1;
            }
        }

        tracing::info!(
            "Scanned {} file(s): {} recognized, {} untagged, {} unparseable, {} unreadable",
            report.stats.total(),
            report.stats.analyzed,
            report.stats.untagged,
            report.stats.malformed,
            report.stats.unreadable
        );
        Ok(report)
    }

    /// Analyze a single discovered file, counting it under exactly one
    /// `ScanStats` bucket. Returns `None` when the file produces no row.
    fn analyze(
        &self,
        root: &Path,
        file: &DiscoveredFile,
        stats: &mut ScanStats,
    ) -> Option<TextureRecord> {
        let rel = &file.path;
        tracing::trace!("Analyzing {}", rel.display());

        let (width, height) = match probe_dimensions(&root.join(rel)) {
            Ok(dims) => dims,
            Err(e) => {
                tracing::warn!("Could not open {}", rel.display());
                tracing::debug!("  open failed: {e}");
                stats.unreadable += 1;
                return None;
            }
        };

        let (min_width, min_height) = match min_square_size(width, height) {
            Ok(dims) => dims,
            Err(e) => {
                tracing::warn!("Skipping {}: {e}", rel.display());
                stats.unreadable += 1;
                return None;
            }
        };

        // Non-UTF-8 basenames cannot carry a tag
        let name = rel.file_name().and_then(|n| n.to_str()).unwrap_or_default();
        let tag = match parse_tag(name) {
            TagParse::Tag(tag) => tag,
            TagParse::Untagged => {
                stats.untagged += 1;
                return None;
            }
            TagParse::Malformed => {
                tracing::warn!("Could not parse filename {name}");
                stats.malformed += 1;
                return None;
            }
        };

        let folder = rel
            .parent()
            .map(|p| p.display().to_string())
            .unwrap_or_default();

        Some(TextureRecord {
            crc: tag.crc,
            min_width,
            min_height,
            size: tag.size,
            format: tag.format,
            folder,
        })
    }
}
