// Static level geometry

use crate::core::Rect;

/// Immutable wall and stair rectangles, built once at level load.
///
/// Queries are linear scans; levels hold a few dozen rectangles.
#[derive(Debug, Clone, Default)]
pub struct StaticGeometry {
    walls: Vec<Rect>,
    stairs: Vec<Rect>,
}

impl StaticGeometry {
    pub fn new(walls: Vec<Rect>, stairs: Vec<Rect>) -> Self {
        Self { walls, stairs }
    }

    pub fn walls(&self) -> &[Rect] {
        &self.walls
    }

    pub fn stairs(&self) -> &[Rect] {
        &self.stairs
    }

    /// Walls overlapping `sensor`, in level order
    pub fn walls_overlapping<'a>(&'a self, sensor: &'a Rect) -> impl Iterator<Item = &'a Rect> + 'a {
        self.walls.iter().filter(move |wall| sensor.overlaps(wall))
    }

    pub fn touches_wall(&self, sensor: &Rect) -> bool {
        sensor.overlaps_any(&self.walls)
    }

    /// First stair overlapping `sensor`
    pub fn stair_under(&self, sensor: &Rect) -> Option<&Rect> {
        sensor.first_overlap(&self.stairs)
    }
}
