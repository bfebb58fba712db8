use std::path::{Path, PathBuf};
use crate::error::PadError;

pub const DEFAULT_CANVAS_SIZE: u32 = 1024;
pub const DEFAULT_LOGO_PERCENTAGE: f64 = 0.65; // 65% of canvas
/// Grow icons smaller than the target box until they fill it.
pub const DEFAULT_ALLOW_UPSCALE: bool = false;

pub const INPUT_ICON: &str = "assets/images/icon.png";
pub const OUTPUT_ICON: &str = "assets/images/icon-padded.png";

#[derive(Debug, Clone, PartialEq)]
pub struct PaddingConfig {
    pub canvas_size: u32,
    pub logo_percentage: f64, // (0.0, 1.0]
    pub allow_upscale: bool,
}

impl Default for PaddingConfig {
    fn default() -> Self {
        Self {
            canvas_size: DEFAULT_CANVAS_SIZE,
            logo_percentage: DEFAULT_LOGO_PERCENTAGE,
            allow_upscale: DEFAULT_ALLOW_UPSCALE,
        }
    }
}

impl PaddingConfig {
    pub fn validate(&self) -> Result<(), PadError> {
        if self.canvas_size == 0 {
            return Err(PadError::InvalidConfig("canvas size must be positive".to_string()));
        }

        if !self.logo_percentage.is_finite()
            || self.logo_percentage <= 0.0
            || self.logo_percentage > 1.0
        {
            return Err(PadError::InvalidConfig(format!(
                "logo percentage must be in (0, 1], got {}",
                self.logo_percentage
            )));
        }

        Ok(())
    }

    /// Side of the square box the logo is fitted into, truncated and never zero.
    pub fn target_box(&self) -> u32 {
        ((self.canvas_size as f64 * self.logo_percentage) as u32).max(1)
    }
}

/// Input and output icon paths under `base`.
pub fn asset_paths<P: AsRef<Path>>(base: P) -> (PathBuf, PathBuf) {
    let base = base.as_ref();
    (base.join(INPUT_ICON), base.join(OUTPUT_ICON))
}
