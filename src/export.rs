//! Card export: turn a captured window frame into a PNG file on disk.
//!
//! The window screenshot is taken by the GUI runtime in physical pixels. The
//! preview region is cropped out of it and scaled back to the card's logical
//! size, so the written image is always the card at 1x.

use anyhow::{Context, Result, anyhow};
use image::imageops::{self, FilterType};
use image::{ImageFormat, RgbaImage};
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Raw RGBA pixels of a captured window.
#[derive(Clone)]
pub struct CapturedFrame {
    pub rgba: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl std::fmt::Debug for CapturedFrame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CapturedFrame")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.rgba.len())
            .finish()
    }
}

/// Region of the window in logical coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogicalRegion {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Everything needed to produce one export file.
#[derive(Debug, Clone)]
pub struct ExportJob {
    pub frame: CapturedFrame,
    pub region: LogicalRegion,
    /// Physical pixels per logical pixel.
    pub scale: f32,
    pub target_width: u32,
    pub target_height: u32,
    pub directory: PathBuf,
    pub file_name: &'static str,
}

/// Directory used when the config does not name one: the user's download
/// folder, like a browser download would land.
pub fn default_export_dir() -> PathBuf {
    dirs::download_dir().unwrap_or_else(|| PathBuf::from("."))
}

/// Crop `region` out of `frame` and resize it to the target size.
pub fn crop_card(
    frame: &CapturedFrame,
    region: LogicalRegion,
    scale: f32,
    target_width: u32,
    target_height: u32,
) -> Result<RgbaImage> {
    let expected = (frame.width as usize) * (frame.height as usize) * 4;
    if frame.rgba.len() != expected {
        return Err(anyhow!(
            "frame has {} bytes, expected {expected} for {}x{}",
            frame.rgba.len(),
            frame.width,
            frame.height
        ));
    }
    if !(scale.is_finite() && scale > 0.0) {
        return Err(anyhow!("invalid window scale {scale}"));
    }

    let left = (region.x * scale).round().max(0.0) as u32;
    let top = (region.y * scale).round().max(0.0) as u32;
    let right = ((region.x + region.width) * scale).round().max(0.0) as u32;
    let bottom = ((region.y + region.height) * scale).round().max(0.0) as u32;
    let right = right.min(frame.width);
    let bottom = bottom.min(frame.height);
    if right <= left || bottom <= top {
        return Err(anyhow!(
            "preview region {region:?} lies outside the {}x{} frame",
            frame.width,
            frame.height
        ));
    }

    let source = RgbaImage::from_raw(frame.width, frame.height, frame.rgba.clone())
        .ok_or_else(|| anyhow!("frame buffer does not match its dimensions"))?;
    let cropped = imageops::crop_imm(&source, left, top, right - left, bottom - top).to_image();
    debug!(
        left,
        top,
        width = cropped.width(),
        height = cropped.height(),
        scale,
        "Cropped preview from frame"
    );

    if cropped.dimensions() == (target_width, target_height) {
        Ok(cropped)
    } else {
        Ok(imageops::resize(
            &cropped,
            target_width,
            target_height,
            FilterType::Triangle,
        ))
    }
}

pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>> {
    let mut buffer = Cursor::new(Vec::new());
    image
        .write_to(&mut buffer, ImageFormat::Png)
        .context("failed to encode PNG")?;
    Ok(buffer.into_inner())
}

/// Write encoded bytes to `directory/file_name`, replacing an older export.
pub fn write_export(directory: &Path, file_name: &str, bytes: &[u8]) -> Result<PathBuf> {
    fs::create_dir_all(directory)
        .with_context(|| format!("failed to create {}", directory.display()))?;
    let path = directory.join(file_name);
    fs::write(&path, bytes).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(path)
}

/// Run the whole pipeline for one job and return the written path.
pub fn run_export(job: &ExportJob) -> Result<PathBuf> {
    let card = crop_card(
        &job.frame,
        job.region,
        job.scale,
        job.target_width,
        job.target_height,
    )?;
    let bytes = encode_png(&card)?;
    let path = write_export(&job.directory, job.file_name, &bytes)?;
    info!(
        path = %path.display(),
        bytes = bytes.len(),
        "Exported card image"
    );
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

    /// Frame whose left half is red and right half is blue.
    fn split_frame(width: u32, height: u32) -> CapturedFrame {
        let mut rgba = Vec::with_capacity((width * height * 4) as usize);
        for _y in 0..height {
            for x in 0..width {
                if x < width / 2 {
                    rgba.extend_from_slice(&[255, 0, 0, 255]);
                } else {
                    rgba.extend_from_slice(&[0, 0, 255, 255]);
                }
            }
        }
        CapturedFrame {
            rgba,
            width,
            height,
        }
    }

    fn region(x: f32, y: f32, width: f32, height: f32) -> LogicalRegion {
        LogicalRegion {
            x,
            y,
            width,
            height,
        }
    }

    #[test]
    fn crops_region_at_unit_scale() {
        let frame = split_frame(40, 20);
        let card = crop_card(&frame, region(20.0, 5.0, 10.0, 10.0), 1.0, 10, 10)
            .expect("crop succeeds");
        assert_eq!(card.dimensions(), (10, 10));
        assert_eq!(card.get_pixel(0, 0).0, [0, 0, 255, 255]);
    }

    #[test]
    fn scales_hidpi_capture_back_to_logical_size() {
        let frame = split_frame(80, 40);
        let card = crop_card(&frame, region(0.0, 0.0, 20.0, 10.0), 2.0, 20, 10)
            .expect("crop succeeds");
        assert_eq!(card.dimensions(), (20, 10));
        assert_eq!(card.get_pixel(5, 5).0, [255, 0, 0, 255]);
    }

    #[test]
    fn rejects_region_outside_frame() {
        let frame = split_frame(10, 10);
        assert!(crop_card(&frame, region(20.0, 20.0, 5.0, 5.0), 1.0, 5, 5).is_err());
    }

    #[test]
    fn rejects_truncated_frame() {
        let mut frame = split_frame(10, 10);
        frame.rgba.truncate(12);
        assert!(crop_card(&frame, region(0.0, 0.0, 5.0, 5.0), 1.0, 5, 5).is_err());
    }

    #[test]
    fn rejects_zero_scale() {
        let frame = split_frame(10, 10);
        assert!(crop_card(&frame, region(0.0, 0.0, 5.0, 5.0), 0.0, 5, 5).is_err());
    }

    #[test]
    fn writes_png_with_fixed_file_name() {
        let directory = std::env::temp_dir().join(format!(
            "fortune-card-export-test-{}",
            std::process::id()
        ));
        let job = ExportJob {
            frame: split_frame(60, 90),
            region: region(0.0, 0.0, 60.0, 90.0),
            scale: 1.0,
            target_width: 60,
            target_height: 90,
            directory: directory.clone(),
            file_name: "命理小卡.png",
        };

        let path = run_export(&job).expect("export succeeds");
        assert_eq!(path, directory.join("命理小卡.png"));
        let bytes = fs::read(&path).expect("file written");
        assert_eq!(bytes[..8], PNG_SIGNATURE);
        let decoded = image::load_from_memory(&bytes).expect("decodes");
        assert_eq!((decoded.width(), decoded.height()), (60, 90));

        let _ = fs::remove_dir_all(directory);
    }
}
