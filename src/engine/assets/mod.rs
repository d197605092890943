// Asset management
//
// Resolves files under the resources directory and slices spritesheets into
// frame regions. Asset failures are fatal at startup.

mod atlas;
mod loader;
mod spritesheet;

pub use atlas::AtlasRegion;
pub use loader::{check_extension, AssetLoader, AssetType};
pub use spritesheet::{SpriteSheet, DEMO_COLORKEY};

/// Asset loading errors
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("Asset not found: {0}")]
    NotFound(String),

    #[error("Unable to load spritesheet image {path}: {source}")]
    Image {
        path: String,
        #[source]
        source: image::ImageError,
    },

    #[error("Region {region:?} lies outside the {width}x{height} sheet")]
    RegionOutOfBounds {
        region: (u32, u32, u32, u32),
        width: u32,
        height: u32,
    },

    #[error("Unsupported asset format: {0}")]
    UnsupportedFormat(String),
}
