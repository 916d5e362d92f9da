//! Image dimension probing.

use image::ImageReader;
use std::path::Path;

use crate::error::{ScanError, ScanResult};

/// Read the pixel dimensions of an image file.
///
/// The format is detected from file content, not the extension, and only the
/// header is read; pixel data is never decoded. The file handle is released
/// before this returns.
pub fn probe_dimensions(path: &Path) -> ScanResult<(u32, u32)> {
    let reader = ImageReader::open(path)
        .map_err(|e| ScanError::Open {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .with_guessed_format()
        .map_err(|e| ScanError::Open {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    reader.into_dimensions().map_err(|e| ScanError::Open {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_missing_file() {
        let err = probe_dimensions(Path::new("/nonexistent/file.png")).unwrap_err();
        assert!(matches!(err, ScanError::Open { .. }));
    }

    #[test]
    fn test_probe_non_image() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, b"not an image at all").unwrap();

        let err = probe_dimensions(&path).unwrap_err();
        assert!(matches!(err, ScanError::Open { .. }));
    }

    #[test]
    fn test_probe_png_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("img.png");
        image::RgbaImage::new(64, 32).save(&path).unwrap();

        assert_eq!(probe_dimensions(&path).unwrap(), (64, 32));
    }

    #[test]
    fn test_probe_ignores_misleading_extension() {
        // PNG bytes behind a .jpg name still probe as 16x16
        let dir = tempfile::tempdir().unwrap();
        let png = dir.path().join("real.png");
        image::RgbaImage::new(16, 16).save(&png).unwrap();
        let misnamed = dir.path().join("fake.jpg");
        std::fs::copy(&png, &misnamed).unwrap();

        assert_eq!(probe_dimensions(&misnamed).unwrap(), (16, 16));
    }
}
