// Math utilities: axis-aligned rectangles and float helpers
//
// Map space has y growing downward, so `top` is the smallest y value.

use glam::Vec2;

/// Axis-aligned rectangle in map space
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle from its top-left corner and size
    pub fn from_min_size(min: Vec2, size: Vec2) -> Self {
        Self::new(min.x, min.y, size.x, size.y)
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn min(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Move the rectangle so its left edge sits at `left`
    pub fn set_left(&mut self, left: f32) {
        self.x = left;
    }

    /// Move the rectangle so its right edge sits at `right`
    pub fn set_right(&mut self, right: f32) {
        self.x = right - self.width;
    }

    /// Move the rectangle so its top edge sits at `top`
    pub fn set_top(&mut self, top: f32) {
        self.y = top;
    }

    /// Move the rectangle so its bottom edge sits at `bottom`
    pub fn set_bottom(&mut self, bottom: f32) {
        self.y = bottom - self.height;
    }

    /// Return a copy shifted by `offset`
    pub fn translate(&self, offset: Vec2) -> Self {
        Self::new(self.x + offset.x, self.y + offset.y, self.width, self.height)
    }

    /// Whole-pixel copy for display; the origin is floored, the size kept
    pub fn snapped(&self) -> Self {
        Self::new(self.x.floor(), self.y.floor(), self.width, self.height)
    }

    /// Strict overlap test.
    ///
    /// Rectangles that only share an edge do not overlap, and empty
    /// rectangles never overlap anything.
    pub fn overlaps(&self, other: &Rect) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// Check whether any rectangle in `others` overlaps this one
    pub fn overlaps_any(&self, others: &[Rect]) -> bool {
        others.iter().any(|other| self.overlaps(other))
    }

    /// First rectangle in `others` that overlaps this one
    pub fn first_overlap<'a>(&self, others: &'a [Rect]) -> Option<&'a Rect> {
        others.iter().find(|other| self.overlaps(other))
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Clamp a value between min and max (does not panic when `min > max`)
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let rect = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(rect.left(), 10.0);
        assert_eq!(rect.right(), 40.0);
        assert_eq!(rect.top(), 20.0);
        assert_eq!(rect.bottom(), 60.0);
        assert_eq!(rect.center(), Vec2::new(25.0, 40.0));
    }

    #[test]
    fn test_edge_setters_keep_size() {
        let mut rect = Rect::new(0.0, 0.0, 24.0, 32.0);
        rect.set_right(100.0);
        assert_eq!(rect.x, 76.0);
        rect.set_bottom(50.0);
        assert_eq!(rect.y, 18.0);
        rect.set_left(5.0);
        rect.set_top(6.0);
        assert_eq!(rect, Rect::new(5.0, 6.0, 24.0, 32.0));
    }

    #[test]
    fn test_overlap_is_strict() {
        let floor = Rect::new(0.0, 100.0, 200.0, 16.0);
        let standing = Rect::new(10.0, 68.0, 16.0, 32.0);
        assert!(!standing.overlaps(&floor), "touching edges must not overlap");

        let sunk = standing.translate(Vec2::new(0.0, 0.5));
        assert!(sunk.overlaps(&floor));
        assert!(floor.overlaps(&sunk));
    }

    #[test]
    fn test_empty_rect_never_overlaps() {
        let wall = Rect::new(0.0, 0.0, 10.0, 10.0);
        let empty = Rect::new(5.0, 5.0, 0.0, 3.0);
        assert!(!empty.overlaps(&wall));
        assert!(!wall.overlaps(&empty));
    }

    #[test]
    fn test_first_overlap() {
        let walls = [
            Rect::new(0.0, 0.0, 10.0, 10.0),
            Rect::new(20.0, 0.0, 10.0, 10.0),
        ];
        let sensor = Rect::new(25.0, 5.0, 2.0, 2.0);
        assert_eq!(sensor.first_overlap(&walls), Some(&walls[1]));
        assert!(sensor.overlaps_any(&walls));
        assert!(!Rect::new(12.0, 0.0, 4.0, 4.0).overlaps_any(&walls));
        assert!(sensor.first_overlap(&[]).is_none());
    }

    #[test]
    fn test_snapped_floors_origin() {
        let rect = Rect::new(10.7, -3.2, 24.0, 32.0).snapped();
        assert_eq!(rect, Rect::new(10.0, -4.0, 24.0, 32.0));
    }

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(5.0, 0.0, 10.0), 5.0);
        assert_eq!(clamp(-5.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp(15.0, 0.0, 10.0), 10.0);
    }
}
