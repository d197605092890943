// Tiled JSON map format
//
// Only the parts of a .tmj export the demo reads: map dimensions and object
// layers. Tile layers, tilesets and properties are ignored by serde.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct TiledMap {
    /// Map width in tiles
    pub width: u32,
    /// Map height in tiles
    pub height: u32,
    pub tilewidth: u32,
    pub tileheight: u32,
    #[serde(default)]
    pub layers: Vec<TiledLayer>,
}

impl TiledMap {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Map size in pixels
    pub fn pixel_size(&self) -> (u32, u32) {
        (self.width * self.tilewidth, self.height * self.tileheight)
    }

    /// Every object of every object layer, groups flattened, in file order
    pub fn objects(&self) -> Vec<&TiledObject> {
        let mut objects = Vec::new();
        for layer in &self.layers {
            layer.collect_objects(&mut objects);
        }
        objects
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TiledLayer {
    #[serde(rename = "objectgroup")]
    ObjectGroup {
        #[serde(default)]
        objects: Vec<TiledObject>,
    },
    Group {
        #[serde(default)]
        layers: Vec<TiledLayer>,
    },
    /// Tile and image layers
    #[serde(other)]
    Other,
}

impl TiledLayer {
    fn collect_objects<'a>(&'a self, out: &mut Vec<&'a TiledObject>) {
        match self {
            TiledLayer::ObjectGroup { objects } => out.extend(objects.iter()),
            TiledLayer::Group { layers } => {
                for layer in layers {
                    layer.collect_objects(out);
                }
            }
            TiledLayer::Other => {}
        }
    }
}

/// Rectangle or point object placed in an object layer
#[derive(Debug, Clone, Deserialize)]
pub struct TiledObject {
    #[serde(default)]
    pub id: u32,
    /// Tiled before 1.9 writes `type`
    #[serde(default, rename = "type")]
    pub kind: String,
    /// Tiled 1.9+ writes `class`
    #[serde(default)]
    pub class: String,
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub width: f32,
    #[serde(default)]
    pub height: f32,
}

impl TiledObject {
    /// User type of the object, whichever field the exporter used
    pub fn object_type(&self) -> &str {
        if self.kind.is_empty() {
            &self.class
        } else {
            &self.kind
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAP: &str = r#"{
        "width": 20, "height": 15, "tilewidth": 16, "tileheight": 16,
        "orientation": "orthogonal",
        "layers": [
            { "type": "tilelayer", "name": "ground", "data": [1, 2, 3] },
            { "type": "objectgroup", "name": "collision", "objects": [
                { "id": 1, "type": "wall", "x": 0, "y": 224, "width": 320, "height": 16 }
            ]},
            { "type": "group", "name": "actors", "layers": [
                { "type": "objectgroup", "objects": [
                    { "id": 2, "class": "hero", "x": 32, "y": 192, "point": true }
                ]}
            ]}
        ]
    }"#;

    #[test]
    fn test_parse_map_dimensions() {
        let map = TiledMap::from_json(MAP).unwrap();
        assert_eq!(map.pixel_size(), (320, 240));
        assert_eq!(map.layers.len(), 3);
        assert!(matches!(map.layers[0], TiledLayer::Other));
    }

    #[test]
    fn test_objects_flatten_groups_in_order() {
        let map = TiledMap::from_json(MAP).unwrap();
        let objects = map.objects();
        assert_eq!(objects.len(), 2);
        assert_eq!(objects[0].object_type(), "wall");
        assert_eq!(objects[0].width, 320.0);
        assert_eq!(objects[1].object_type(), "hero");
        assert_eq!(objects[1].width, 0.0);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(TiledMap::from_json("{ \"width\": 3 }").is_err());
    }
}
