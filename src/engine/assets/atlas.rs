// Frame regions inside a spritesheet

use glam::Vec2;

/// A rectangular region of a spritesheet texture
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtlasRegion {
    /// Position in the sheet (pixels)
    pub x: u32,
    pub y: u32,

    /// Size of the region (pixels)
    pub width: u32,
    pub height: u32,

    /// UV coordinates (0.0 to 1.0)
    pub uv_min: Vec2,
    pub uv_max: Vec2,
}

impl AtlasRegion {
    /// Create a new region with calculated UV coordinates
    pub fn new(x: u32, y: u32, width: u32, height: u32, sheet_width: u32, sheet_height: u32) -> Self {
        let uv_min = Vec2::new(
            x as f32 / sheet_width as f32,
            y as f32 / sheet_height as f32,
        );
        let uv_max = Vec2::new(
            (x + width) as f32 / sheet_width as f32,
            (y + height) as f32 / sheet_height as f32,
        );

        Self {
            x,
            y,
            width,
            height,
            uv_min,
            uv_max,
        }
    }

    /// UV corners for drawing, mirrored horizontally when `flip` is set.
    ///
    /// Returns `(top_left, bottom_right)`.
    pub fn uv_corners(&self, flip: bool) -> (Vec2, Vec2) {
        if flip {
            (
                Vec2::new(self.uv_max.x, self.uv_min.y),
                Vec2::new(self.uv_min.x, self.uv_max.y),
            )
        } else {
            (self.uv_min, self.uv_max)
        }
    }
}
