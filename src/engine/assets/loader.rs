// Asset path resolution

use super::AssetError;
use std::path::{Path, PathBuf};

/// Supported asset types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetType {
    Map,
    Art,
}

impl AssetType {
    /// Get the default directory for this asset type
    pub fn default_directory(&self) -> &'static str {
        match self {
            AssetType::Map => "maps",
            AssetType::Art => "art",
        }
    }

    /// Get supported file extensions for this asset type
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            AssetType::Map => &["tmj", "json"],
            AssetType::Art => &["png"],
        }
    }
}

/// Finds asset files below a resources directory
#[derive(Debug, Clone)]
pub struct AssetLoader {
    base_path: PathBuf,
}

impl AssetLoader {
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Get the full path for an asset
    ///
    /// `name` may already contain the type directory (`maps/dungeon_0.tmj`),
    /// in which case it is only joined to the base path.
    pub fn resolve_path(&self, asset_type: AssetType, name: &str) -> PathBuf {
        let directory = asset_type.default_directory();
        if Path::new(name).starts_with(directory) {
            self.base_path.join(name)
        } else {
            self.base_path.join(directory).join(name)
        }
    }

    /// Resolve a path and make sure it names an existing file of a known format
    pub fn locate(&self, asset_type: AssetType, name: &str) -> Result<PathBuf, AssetError> {
        let path = self.resolve_path(asset_type, name);
        if !path.is_file() {
            return Err(AssetError::NotFound(path.to_string_lossy().to_string()));
        }
        check_extension(asset_type, &path)?;
        Ok(path)
    }
}

/// Fail unless `path` carries one of the extensions of `asset_type`
pub fn check_extension(asset_type: AssetType, path: &Path) -> Result<(), AssetError> {
    let known = path
        .extension()
        .map(|ext| asset_type.extensions().contains(&ext.to_string_lossy().as_ref()))
        .unwrap_or(false);
    if known {
        Ok(())
    } else {
        Err(AssetError::UnsupportedFormat(path.to_string_lossy().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_type_directories() {
        assert_eq!(AssetType::Map.default_directory(), "maps");
        assert_eq!(AssetType::Art.default_directory(), "art");
    }

    #[test]
    fn test_asset_type_extensions() {
        assert!(AssetType::Map.extensions().contains(&"tmj"));
        assert!(AssetType::Art.extensions().contains(&"png"));
    }

    #[test]
    fn test_loader_path_resolution() {
        let loader = AssetLoader::new("/game/data");
        let path = loader.resolve_path(AssetType::Art, "hero.png");
        assert_eq!(path, PathBuf::from("/game/data/art/hero.png"));
    }

    #[test]
    fn test_loader_keeps_prefixed_names() {
        let loader = AssetLoader::new("data");
        let path = loader.resolve_path(AssetType::Map, "maps/dungeon_0.tmj");
        assert_eq!(path, PathBuf::from("data/maps/dungeon_0.tmj"));
    }

    #[test]
    fn test_missing_asset_is_not_found() {
        let loader = AssetLoader::new("/definitely/not/here");
        let err = loader.locate(AssetType::Art, "nope.png").unwrap_err();
        assert!(matches!(err, AssetError::NotFound(_)));
    }

    #[test]
    fn test_locate_bundled_assets() {
        let loader = AssetLoader::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("data"));
        let map = loader.locate(AssetType::Map, "dungeon_0.tmj").unwrap();
        assert!(map.ends_with("data/maps/dungeon_0.tmj"));
        assert!(loader.locate(AssetType::Art, "platformer_template_g.png").is_ok());
    }

    #[test]
    fn test_unknown_extension_is_rejected() {
        assert!(check_extension(AssetType::Map, Path::new("maps/level.tmj")).is_ok());
        assert!(check_extension(AssetType::Map, Path::new("maps/level.json")).is_ok());

        let err = check_extension(AssetType::Map, Path::new("maps/level.tmx")).unwrap_err();
        assert!(matches!(err, AssetError::UnsupportedFormat(_)));
        assert!(check_extension(AssetType::Art, Path::new("art/hero")).is_err());
    }
}
