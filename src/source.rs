//! Source image preparation
//!
//! Decodes the source image exactly once, enforces the square invariant, and
//! optionally punches out rounded corners. The prepared buffer is shared
//! read-only by every resize task.

use std::path::Path;

use image::RgbaImage;

use crate::error::{IconError, IconResult};

/// Corner radius as a fraction of the source edge length, matching standard
/// mobile icon corner conventions.
pub const CORNER_RADIUS_RATIO: f32 = 0.0833;

/// Decoded, validated source image
#[derive(Debug, Clone)]
pub struct PreparedSource {
    image: RgbaImage,
}

impl PreparedSource {
    /// Load and validate the source image.
    ///
    /// Fails if the file is missing, undecodable, or not square.
    pub fn load(path: &Path, round_corners: bool) -> IconResult<Self> {
        if !path.is_file() {
            return Err(IconError::SourceNotFound {
                path: path.to_path_buf(),
            });
        }

        let decoded = image::open(path).map_err(|source| IconError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
        let mut image = decoded.into_rgba8();

        let (width, height) = image.dimensions();
        if width != height {
            return Err(IconError::NotSquare { width, height });
        }

        if round_corners {
            punch_rounded_corners(&mut image);
        }

        Ok(Self { image })
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }
}

/// Make every pixel outside a rounded rectangle fully transparent.
///
/// A pixel is inside when its center lies within `radius` of the rectangle
/// inset by `radius` on every side.
fn punch_rounded_corners(image: &mut RgbaImage) {
    let size = image.width() as f32;
    let radius = size * CORNER_RADIUS_RATIO;
    let radius_sq = radius * radius;

    for (x, y, pixel) in image.enumerate_pixels_mut() {
        let px = x as f32 + 0.5;
        let py = y as f32 + 0.5;
        let nearest_x = px.clamp(radius, size - radius);
        let nearest_y = py.clamp(radius, size - radius);
        let dx = px - nearest_x;
        let dy = py - nearest_y;
        if dx * dx + dy * dy > radius_sq {
            pixel.0[3] = 0;
        }
    }
}
