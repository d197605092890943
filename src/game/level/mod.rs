// Level loading
//
// A level is built once from a Tiled map: wall and stair rectangles plus the
// Hero spawn point. Nothing here changes during play.

pub mod geometry;
pub mod tiled;

pub use geometry::StaticGeometry;
pub use tiled::TiledMap;

use std::path::{Path, PathBuf};

use glam::Vec2;
use log::{debug, info, warn};
use thiserror::Error;

use crate::core::Rect;

#[derive(Debug, Error)]
pub enum LevelError {
    #[error("Failed to read map {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse map {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Map {0} has no object of type 'hero'")]
    MissingSpawn(PathBuf),
}

/// Everything the game needs from a map
#[derive(Debug, Clone)]
pub struct Level {
    pub geometry: StaticGeometry,
    /// Top-left of the Hero at level start
    pub spawn: Vec2,
    /// Map size in pixels
    pub size: Vec2,
}

impl Level {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LevelError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| LevelError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let map = TiledMap::from_json(&json).map_err(|source| LevelError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        let level =
            Self::from_tiled(&map).ok_or_else(|| LevelError::MissingSpawn(path.to_path_buf()))?;
        info!(
            "Loaded level {}: {} walls, {} stairs, spawn {:?}",
            path.display(),
            level.geometry.walls().len(),
            level.geometry.stairs().len(),
            level.spawn
        );
        Ok(level)
    }

    /// Build a level from a parsed map; `None` when the map has no Hero spawn
    pub fn from_tiled(map: &TiledMap) -> Option<Self> {
        let mut walls = Vec::new();
        let mut stairs = Vec::new();
        let mut spawn = None;

        for object in map.objects() {
            let rect = Rect::new(object.x, object.y, object.width, object.height);
            match object.object_type() {
                "wall" => walls.push(rect),
                "stair" => stairs.push(rect),
                "hero" => {
                    if spawn.is_some() {
                        warn!("Extra hero spawn (object {}) ignored", object.id);
                    } else {
                        spawn = Some(Vec2::new(object.x, object.y));
                    }
                }
                "guard" => warn!("Guard object {} skipped: NPCs are not implemented", object.id),
                other => debug!("Skipping map object {} of type '{}'", object.id, other),
            }
        }

        let (width, height) = map.pixel_size();
        Some(Self {
            geometry: StaticGeometry::new(walls, stairs),
            spawn: spawn?,
            size: Vec2::new(width as f32, height as f32),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(objects: &str) -> TiledMap {
        let json = format!(
            r#"{{ "width": 10, "height": 8, "tilewidth": 32, "tileheight": 32,
                 "layers": [ {{ "type": "objectgroup", "objects": [{objects}] }} ] }}"#
        );
        TiledMap::from_json(&json).unwrap()
    }

    #[test]
    fn test_from_tiled_sorts_objects_by_type() {
        let map = map(
            r#"{ "id": 1, "type": "wall", "x": 0, "y": 224, "width": 320, "height": 32 },
               { "id": 2, "type": "stair", "x": 96, "y": 208, "width": 32, "height": 16 },
               { "id": 3, "type": "hero", "x": 40, "y": 192 },
               { "id": 4, "type": "guard", "x": 200, "y": 192 },
               { "id": 5, "type": "torch", "x": 10, "y": 10 },
               { "id": 6, "class": "wall", "x": 300, "y": 0, "width": 20, "height": 224 }"#,
        );
        let level = Level::from_tiled(&map).unwrap();

        assert_eq!(
            level.geometry.walls(),
            &[
                Rect::new(0.0, 224.0, 320.0, 32.0),
                Rect::new(300.0, 0.0, 20.0, 224.0)
            ]
        );
        assert_eq!(level.geometry.stairs(), &[Rect::new(96.0, 208.0, 32.0, 16.0)]);
        assert_eq!(level.spawn, Vec2::new(40.0, 192.0));
        assert_eq!(level.size, Vec2::new(320.0, 256.0));
    }

    #[test]
    fn test_missing_spawn() {
        let map = map(r#"{ "id": 1, "type": "wall", "x": 0, "y": 0, "width": 8, "height": 8 }"#);
        assert!(Level::from_tiled(&map).is_none());
    }

    #[test]
    fn test_first_spawn_wins() {
        let map = map(
            r#"{ "id": 1, "type": "hero", "x": 1, "y": 2 },
               { "id": 2, "type": "hero", "x": 3, "y": 4 }"#,
        );
        assert_eq!(Level::from_tiled(&map).unwrap().spawn, Vec2::new(1.0, 2.0));
    }

    #[test]
    fn test_load_bundled_map() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/maps/dungeon_0.tmj");
        let level = Level::load(path).unwrap();

        assert_eq!(level.spawn, Vec2::new(48.0, 256.0));
        assert_eq!(level.size, Vec2::new(640.0, 320.0));
        assert!(!level.geometry.walls().is_empty());
        assert!(!level.geometry.stairs().is_empty());
    }

    #[test]
    fn test_load_missing_file() {
        let err = Level::load("does/not/exist.tmj").unwrap_err();
        assert!(matches!(err, LevelError::Io { .. }));
    }

    #[test]
    fn test_load_reports_parse_and_spawn_errors() {
        let dir = std::env::temp_dir().join(format!("quest-level-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        let broken = dir.join("broken.tmj");
        std::fs::write(&broken, "not json").unwrap();
        assert!(matches!(Level::load(&broken), Err(LevelError::Parse { .. })));

        let empty = dir.join("empty.tmj");
        std::fs::write(
            &empty,
            r#"{ "width": 1, "height": 1, "tilewidth": 16, "tileheight": 16, "layers": [] }"#,
        )
        .unwrap();
        assert!(matches!(Level::load(&empty), Err(LevelError::MissingSpawn(_))));

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
