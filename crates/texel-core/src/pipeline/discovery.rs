//! File discovery for finding scan candidates under a root directory.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::ScanConfig;
use crate::error::{ScanError, ScanResult};

/// Discovers regular files under a scan root.
pub struct FileDiscovery {
    follow_links: bool,
}

/// Information about a discovered file.
#[derive(Debug, Clone)]
pub struct DiscoveredFile {
    /// Path relative to the scan root
    pub path: PathBuf,
}

impl FileDiscovery {
    /// Create a new file discovery instance.
    pub fn new(config: &ScanConfig) -> Self {
        Self {
            follow_links: config.follow_links,
        }
    }

    /// Discover all regular files under a root directory.
    ///
    /// Every file is expressed relative to the root. No filtering by
    /// extension and no sorting: whether a file is an image is decided when
    /// it is opened, and report order follows host traversal order.
    ///
    /// Any traversal error (missing or unreadable root, unreadable
    /// subdirectory) is fatal and aborts the scan.
    pub fn discover(&self, root: &Path) -> ScanResult<Vec<DiscoveredFile>> {
        let mut files = Vec::new();

        for entry in WalkDir::new(root).follow_links(self.follow_links) {
            let entry = entry.map_err(|source| ScanError::Walk {
                root: root.to_path_buf(),
                source,
            })?;
            if entry.file_type().is_file() {
                let path = entry
                    .path()
                    .strip_prefix(root)
                    .unwrap_or_else(|_| entry.path())
                    .to_path_buf();
                files.push(DiscoveredFile { path });
            }
        }

        Ok(files)
    }
}
