use image::codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder};
use image::imageops::{self, FilterType};
use image::{ColorType, ImageEncoder, RgbaImage};
use log::{debug, info};
use std::fmt;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::PadError;
use crate::padding_config::PaddingConfig;

#[derive(Debug, Clone, PartialEq)]
pub struct PadReport {
    pub original_size: (u32, u32),
    pub logo_size: (u32, u32),
    pub offset: (u32, u32),
    pub canvas_size: u32,
    pub logo_percentage: f64,
    pub output_path: PathBuf,
}

impl fmt::Display for PadReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "✓ Padded icon created successfully!")?;
        writeln!(f, "  Original size: {}x{}", self.original_size.0, self.original_size.1)?;
        writeln!(f, "  Logo size: {}x{}", self.logo_size.0, self.logo_size.1)?;
        writeln!(f, "  Canvas size: {}x{}", self.canvas_size, self.canvas_size)?;
        writeln!(f, "  Logo occupies: {:.0}% of canvas", self.logo_percentage * 100.0)?;
        write!(f, "  Saved to: {}", self.output_path.display())
    }
}

/// Pads the icon at `input_path` onto a transparent square canvas and writes it as PNG.
///
/// The logo is scaled to fit inside `config.target_box()` keeping its aspect ratio,
/// then centered. Unless `allow_upscale` is set, a logo already smaller than the box
/// keeps its native size.
pub fn pad<P: AsRef<Path>, Q: AsRef<Path>>(
    input_path: P,
    output_path: Q,
    config: &PaddingConfig,
) -> Result<PadReport, PadError> {
    let input_path = input_path.as_ref();
    let output_path = output_path.as_ref();

    if !input_path.exists() {
        return Err(PadError::MissingInput(input_path.to_path_buf()));
    }
    config.validate()?;

    debug!("Loading icon from {}", input_path.display());
    let original = image::io::Reader::open(input_path)?
        .with_guessed_format()?
        .decode()?
        .into_rgba8();
    let original_size = original.dimensions();

    let target = config.target_box();
    let (logo_w, logo_h) = fit_within(original_size.0, original_size.1, target, config.allow_upscale);
    let logo = if (logo_w, logo_h) == original_size {
        original
    } else {
        debug!(
            "Resizing {}x{} -> {}x{} (box {})",
            original_size.0, original_size.1, logo_w, logo_h, target
        );
        imageops::resize(&original, logo_w, logo_h, FilterType::Lanczos3)
    };

    let offset = (
        center_offset(config.canvas_size, logo_w),
        center_offset(config.canvas_size, logo_h),
    );
    debug!("Centering logo at offset ({}, {})", offset.0, offset.1);
    let canvas = compose(&logo, config.canvas_size, offset);

    save_png(&canvas, output_path)?;
    info!("Wrote padded icon to {}", output_path.display());

    Ok(PadReport {
        original_size,
        logo_size: (logo_w, logo_h),
        offset,
        canvas_size: config.canvas_size,
        logo_percentage: config.logo_percentage,
        output_path: output_path.to_path_buf(),
    })
}

/// Proportional fit of `width`x`height` into a `target`-sided square.
///
/// The longer side becomes exactly `target`; the shorter one is rounded to
/// nearest and never drops below 1.
pub fn fit_within(width: u32, height: u32, target: u32, allow_upscale: bool) -> (u32, u32) {
    let longest = width.max(height);
    if width == 0 || height == 0 || longest == target {
        return (width, height);
    }
    if longest < target && !allow_upscale {
        return (width, height);
    }

    let longest = longest as u64;
    let scale = |side: u32| -> u32 {
        let scaled = (side as u64 * target as u64 * 2 + longest) / (2 * longest);
        scaled.max(1) as u32
    };
    (scale(width), scale(height))
}

pub fn center_offset(canvas_size: u32, side: u32) -> u32 {
    canvas_size.saturating_sub(side) / 2
}

/// Transparent `canvas_size` square with `logo` pasted at `offset`.
///
/// Over a fully transparent canvas the alpha composite is the logo pixel itself,
/// so the pixels are copied as-is and partial alpha survives bit for bit.
pub fn compose(logo: &RgbaImage, canvas_size: u32, offset: (u32, u32)) -> RgbaImage {
    let mut canvas = RgbaImage::new(canvas_size, canvas_size);
    imageops::replace(&mut canvas, logo, offset.0 as i64, offset.1 as i64);
    canvas
}

/// Sibling file the PNG is encoded into before it replaces `path`.
pub fn staging_path(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();
    path.with_file_name(format!(".{}.tmp", file_name))
}

/// Writes `image` as PNG. An existing file at `path` is only replaced once encoding succeeded.
pub fn save_png<P: AsRef<Path>>(image: &RgbaImage, path: P) -> Result<(), PadError> {
    let path = path.as_ref();
    let staging = staging_path(path);

    if let Err(e) = write_png(image, &staging) {
        let _ = fs::remove_file(&staging);
        return Err(e);
    }
    fs::rename(&staging, path)?;
    Ok(())
}

fn write_png(image: &RgbaImage, path: &Path) -> Result<(), PadError> {
    let mut writer = BufWriter::new(File::create(path)?);
    let encoder = PngEncoder::new_with_quality(&mut writer, CompressionType::Best, PngFilterType::Adaptive);
    encoder.write_image(image.as_raw(), image.width(), image.height(), ColorType::Rgba8)?;
    writer.flush()?;
    Ok(())
}
