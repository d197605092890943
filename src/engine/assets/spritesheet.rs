// Spritesheet decoding and frame slicing

use super::{AssetError, AtlasRegion};
use image::{Rgba, RgbaImage};
use std::path::Path;

/// Transparent color key used by the demo art
pub const DEMO_COLORKEY: [u8; 3] = [0, 255, 81];

/// A decoded spritesheet image
#[derive(Debug, Clone)]
pub struct SpriteSheet {
    image: RgbaImage,
}

impl SpriteSheet {
    /// Load a sheet from disk, turning `colorkey` pixels transparent
    pub fn load(path: impl AsRef<Path>, colorkey: Option<[u8; 3]>) -> Result<Self, AssetError> {
        let path = path.as_ref();
        let image = image::open(path)
            .map_err(|source| AssetError::Image {
                path: path.to_string_lossy().to_string(),
                source,
            })?
            .to_rgba8();

        log::info!(
            "Loaded spritesheet {} ({}x{})",
            path.display(),
            image.width(),
            image.height()
        );

        Ok(Self::from_image(image, colorkey))
    }

    /// Wrap an already decoded image
    pub fn from_image(mut image: RgbaImage, colorkey: Option<[u8; 3]>) -> Self {
        if let Some([r, g, b]) = colorkey {
            for pixel in image.pixels_mut() {
                if pixel.0[..3] == [r, g, b] {
                    *pixel = Rgba([r, g, b, 0]);
                }
            }
        }
        Self { image }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Pixel data for GPU upload
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Region of the sheet at `(x, y, width, height)` pixels
    pub fn region(&self, x: u32, y: u32, width: u32, height: u32) -> Result<AtlasRegion, AssetError> {
        let fits = x.checked_add(width).is_some_and(|right| right <= self.width())
            && y.checked_add(height).is_some_and(|bottom| bottom <= self.height());
        if !fits {
            return Err(AssetError::RegionOutOfBounds {
                region: (x, y, width, height),
                width: self.width(),
                height: self.height(),
            });
        }
        Ok(AtlasRegion::new(
            x,
            y,
            width,
            height,
            self.width(),
            self.height(),
        ))
    }

    /// Several regions at once
    pub fn regions(&self, rects: &[(u32, u32, u32, u32)]) -> Result<Vec<AtlasRegion>, AssetError> {
        rects
            .iter()
            .map(|&(x, y, width, height)| self.region(x, y, width, height))
            .collect()
    }

    /// `count` equally sized frames laid out left to right from `(x, y)`
    pub fn strip(
        &self,
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        count: u32,
    ) -> Result<Vec<AtlasRegion>, AssetError> {
        (0..count)
            .map(|i| self.region(x + width * i, y, width, height))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet(width: u32, height: u32) -> SpriteSheet {
        SpriteSheet::from_image(RgbaImage::from_pixel(width, height, Rgba([9, 9, 9, 255])), None)
    }

    #[test]
    fn test_colorkey_becomes_transparent() {
        let mut image = RgbaImage::from_pixel(2, 1, Rgba([10, 20, 30, 255]));
        image.put_pixel(1, 0, Rgba([0, 255, 81, 255]));

        let sheet = SpriteSheet::from_image(image, Some(DEMO_COLORKEY));
        assert_eq!(sheet.image().get_pixel(0, 0).0[3], 255);
        assert_eq!(sheet.image().get_pixel(1, 0).0[3], 0);
    }

    #[test]
    fn test_strip_slices_left_to_right() {
        let sheet = sheet(256, 64);
        let frames = sheet.strip(0, 32, 32, 32, 4).unwrap();
        assert_eq!(frames.len(), 4);
        assert_eq!(frames[3].x, 96);
        assert_eq!(frames[3].y, 32);
    }

    #[test]
    fn test_region_out_of_bounds() {
        let sheet = sheet(64, 64);
        let err = sheet.region(48, 0, 32, 32).unwrap_err();
        assert!(matches!(err, AssetError::RegionOutOfBounds { .. }));
        assert!(sheet.regions(&[(0, 0, 32, 32), (32, 32, 32, 32)]).is_ok());
    }

    #[test]
    fn test_missing_file_is_fatal_error() {
        let err = SpriteSheet::load("/no/such/sheet.png", None).unwrap_err();
        assert!(matches!(err, AssetError::Image { .. }));
    }
}
