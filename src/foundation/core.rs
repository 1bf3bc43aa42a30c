use crate::foundation::error::{ArcError, ArcResult};

pub use kurbo::{Affine, BezPath, Point, Vec2};

/// Drawing surface size in pixels.
///
/// Dimensions are `f64` because the geometry is evaluated in continuous pixel space; the
/// rasterizer rounds them up when allocating a pixmap.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> ArcResult<Self> {
        if !width.is_finite() || !height.is_finite() {
            return Err(ArcError::validation("viewport width/height must be finite"));
        }
        if width <= 0.0 || height <= 0.0 {
            return Err(ArcError::validation("viewport width/height must be > 0"));
        }
        Ok(Self { width, height })
    }

    pub fn center(self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// Pixel size used when rasterizing this viewport.
    pub fn pixel_size(self) -> (u32, u32) {
        (
            self.width.ceil().max(1.0) as u32,
            self.height.ceil().max(1.0) as u32,
        )
    }
}

/// Straight (non-premultiplied) RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[serde(default = "opaque")]
    pub a: u8,
}

fn opaque() -> u8 {
    255
}

impl Rgba8 {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Gray level shorthand, `gray(100)` is `rgb(100, 100, 100)`.
    pub const fn gray(v: u8) -> Self {
        Self::rgb(v, v, v)
    }

    /// `#rrggbb` form used for SVG paint attributes.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn opacity(self) -> f64 {
        f64::from(self.a) / 255.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
