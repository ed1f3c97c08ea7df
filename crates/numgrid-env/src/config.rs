//! World configuration.

use crate::error::WorldError;
use std::collections::BTreeSet;
use std::path::PathBuf;

/// Configuration for a [`NumGrid`](crate::NumGrid) world.
///
/// All fields are named and typed; [`Default`] mirrors the original task's
/// stock setup (a 10×10 MNIST grid with a 10×10-pixel cursor).
#[derive(Clone, Debug)]
pub struct WorldConfig {
    /// Grid dimensions in tiles, `(width, height)`. Default: `(10, 10)`.
    pub size: (u32, u32),
    /// Cursor dimensions in pixels, `(width, height)`. Default: `(10, 10)`.
    pub cursor_size: (u32, u32),
    /// Restrict which labels are eligible for sampling into the mosaic.
    /// `None` accepts every label. Default: `None`.
    pub digits: Option<BTreeSet<u8>>,
    /// Episode length in steps; `None` for a continuing task that never
    /// signals `done`. Default: `Some(1000)`.
    pub num_steps: Option<u32>,
    /// Path to the gzip IDX images file.
    /// Default: `train-images-idx3-ubyte.gz`.
    pub images_path: PathBuf,
    /// Path to the gzip IDX labels file.
    /// Default: `train-labels-idx1-ubyte.gz`.
    pub labels_path: PathBuf,
    /// Seed for the world's private RNG (cursor resets). Default: `0`.
    pub seed: u64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            size: (10, 10),
            cursor_size: (10, 10),
            digits: None,
            num_steps: Some(1000),
            images_path: PathBuf::from("train-images-idx3-ubyte.gz"),
            labels_path: PathBuf::from("train-labels-idx1-ubyte.gz"),
            seed: 0,
        }
    }
}

impl WorldConfig {
    /// Check structural invariants that need no I/O.
    ///
    /// # Errors
    ///
    /// - `EmptyGrid` if either grid axis is zero tiles
    /// - `ZeroCursor` if either cursor axis is zero pixels
    /// - `InvalidDigit` if the digit filter holds a value above 9
    pub fn validate(&self) -> Result<(), WorldError> {
        if self.size.0 == 0 || self.size.1 == 0 {
            return Err(WorldError::EmptyGrid);
        }
        if self.cursor_size.0 == 0 || self.cursor_size.1 == 0 {
            return Err(WorldError::ZeroCursor);
        }
        if let Some(digits) = &self.digits {
            if let Some(&digit) = digits.iter().find(|&&d| d > 9) {
                return Err(WorldError::InvalidDigit { digit });
            }
            if digits.is_empty() {
                return Err(WorldError::NotEnoughRecords {
                    needed: (self.size.0 * self.size.1) as usize,
                    available: 0,
                });
            }
        }
        Ok(())
    }

    /// Number of tiles the grid needs.
    pub(crate) fn tile_count(&self) -> usize {
        (self.size.0 as usize) * (self.size.1 as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        assert!(WorldConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_axes_are_rejected() {
        let config = WorldConfig {
            size: (0, 3),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(WorldError::EmptyGrid)));

        let config = WorldConfig {
            cursor_size: (4, 0),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(WorldError::ZeroCursor)));
    }

    #[test]
    fn digit_filter_is_range_checked() {
        let config = WorldConfig {
            digits: Some([3, 10].into_iter().collect()),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(WorldError::InvalidDigit { digit: 10 })
        ));

        let config = WorldConfig {
            digits: Some(BTreeSet::new()),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(WorldError::NotEnoughRecords { available: 0, .. })
        ));
    }
}
