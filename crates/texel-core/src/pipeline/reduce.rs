//! Minimum-square-size reduction.

use crate::error::{ScanError, ScanResult};

/// Reduce a width/height pair to its smallest repeat unit by stripping the
/// largest power-of-two factor shared by both dimensions.
///
/// At least one component of the result is odd, and the function is a fixed
/// point on its own output. A zero width or height has no trailing-zero
/// count and is rejected as `InvalidDimensions`.
pub fn min_square_size(width: u32, height: u32) -> ScanResult<(u32, u32)> {
    if width == 0 || height == 0 {
        return Err(ScanError::InvalidDimensions { width, height });
    }

    let shift = width.trailing_zeros().min(height.trailing_zeros());
    Ok((width >> shift, height >> shift))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduces_shared_factor() {
        assert_eq!(min_square_size(64, 32).unwrap(), (2, 1));
        assert_eq!(min_square_size(32, 64).unwrap(), (1, 2));
        assert_eq!(min_square_size(256, 256).unwrap(), (1, 1));
    }

    #[test]
    fn test_odd_dimension_is_untouched() {
        assert_eq!(min_square_size(7, 64).unwrap(), (7, 64));
        assert_eq!(min_square_size(64, 7).unwrap(), (64, 7));
        assert_eq!(min_square_size(3, 5).unwrap(), (3, 5));
    }

    #[test]
    fn test_partial_shared_factor() {
        // 48 = 16*3, 64 = 16*4: the shared factor is 16
        assert_eq!(min_square_size(48, 64).unwrap(), (3, 4));
        // 12 = 4*3, 20 = 4*5
        assert_eq!(min_square_size(12, 20).unwrap(), (3, 5));
    }

    #[test]
    fn test_result_has_an_odd_component() {
        for w in 1u32..=128 {
            for h in 1u32..=128 {
                let (rw, rh) = min_square_size(w, h).unwrap();
                assert!(rw % 2 == 1 || rh % 2 == 1, "{w}x{h} -> {rw}x{rh}");
            }
        }
    }

    #[test]
    fn test_idempotent() {
        for &(w, h) in &[(64u32, 32u32), (48, 64), (1, 1), (1024, 12), (7, 7)] {
            let first = min_square_size(w, h).unwrap();
            let second = min_square_size(first.0, first.1).unwrap();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_zero_dimension_is_rejected() {
        assert!(matches!(
            min_square_size(0, 32),
            Err(ScanError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            min_square_size(32, 0),
            Err(ScanError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            min_square_size(0, 0),
            Err(ScanError::InvalidDimensions { .. })
        ));
    }
}
