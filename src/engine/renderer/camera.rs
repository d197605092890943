// Follow camera for a y-down 2D map

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec2};

use crate::core::math::clamp;

/// 2D camera looking at map space (y grows downward)
#[derive(Debug, Clone)]
pub struct Camera {
    /// Map point at the center of the screen
    pub position: Vec2,
    /// Screen pixels per map pixel
    pub zoom: f32,
    viewport_width: f32,
    viewport_height: f32,
    view_proj: Mat4,
}

impl Camera {
    pub fn new(position: Vec2, viewport_width: f32, viewport_height: f32) -> Self {
        let mut camera = Self {
            position,
            zoom: 1.0,
            viewport_width,
            viewport_height,
            view_proj: Mat4::IDENTITY,
        };
        camera.update_view_proj();
        camera
    }

    /// Half of the visible area, in map pixels
    pub fn half_extent(&self) -> Vec2 {
        Vec2::new(self.viewport_width, self.viewport_height) / (2.0 * self.zoom)
    }

    fn update_view_proj(&mut self) {
        let half = self.half_extent();

        // bottom > top flips the y axis so map y points down the screen
        self.view_proj = Mat4::orthographic_rh(
            self.position.x - half.x,
            self.position.x + half.x,
            self.position.y + half.y,
            self.position.y - half.y,
            -100.0,
            100.0,
        );
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
        self.update_view_proj();
    }

    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom.max(0.1);
        self.update_view_proj();
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport_width = width.max(1.0);
        self.viewport_height = height.max(1.0);
        self.update_view_proj();
    }

    /// Center on `target` without showing anything outside `[0, map_size]`.
    ///
    /// On an axis where the map is smaller than the view the map is centered.
    pub fn follow(&mut self, target: Vec2, map_size: Vec2) {
        let half = self.half_extent();
        let axis = |target: f32, half: f32, size: f32| {
            if size <= 2.0 * half {
                size / 2.0
            } else {
                clamp(target, half, size - half)
            }
        };
        self.set_position(Vec2::new(
            axis(target.x, half.x, map_size.x),
            axis(target.y, half.y, map_size.y),
        ));
    }

    pub fn view_proj_matrix(&self) -> Mat4 {
        self.view_proj
    }

    /// Visible area in map space
    pub fn viewport_bounds(&self) -> Viewport {
        let half = self.half_extent();
        Viewport {
            min: self.position - half,
            max: self.position + half,
        }
    }
}

/// Visible area in map space
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub min: Vec2,
    pub max: Vec2,
}

impl Viewport {
    /// Whether any part of a top-left/size rectangle is visible
    pub fn intersects_rect(&self, min: Vec2, size: Vec2) -> bool {
        let max = min + size;
        max.x >= self.min.x && min.x <= self.max.x && max.y >= self.min.y && min.y <= self.max.y
    }
}

/// Camera uniform for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
}

impl CameraUniform {
    pub fn new(camera: &Camera) -> Self {
        Self {
            view_proj: camera.view_proj_matrix().to_cols_array_2d(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use glam::Vec4;

    fn camera() -> Camera {
        let mut camera = Camera::new(Vec2::ZERO, 800.0, 600.0);
        camera.set_zoom(2.0);
        camera
    }

    #[test]
    fn test_half_extent_uses_zoom() {
        assert_eq!(camera().half_extent(), Vec2::new(200.0, 150.0));
    }

    #[test]
    fn test_follow_inside_map() {
        let mut camera = camera();
        camera.follow(Vec2::new(500.0, 400.0), Vec2::new(1000.0, 1000.0));
        assert_eq!(camera.position, Vec2::new(500.0, 400.0));
    }

    #[test]
    fn test_follow_clamps_at_map_edges() {
        let mut camera = camera();
        let map = Vec2::new(1000.0, 1000.0);

        camera.follow(Vec2::new(10.0, 10.0), map);
        assert_eq!(camera.position, Vec2::new(200.0, 150.0));

        camera.follow(Vec2::new(990.0, 990.0), map);
        assert_eq!(camera.position, Vec2::new(800.0, 850.0));
        assert_eq!(camera.viewport_bounds().max, map);
    }

    #[test]
    fn test_follow_centers_small_map() {
        let mut camera = camera();
        camera.follow(Vec2::new(10.0, 300.0), Vec2::new(320.0, 1000.0));
        assert_eq!(camera.position, Vec2::new(160.0, 300.0));
    }

    #[test]
    fn test_projection_is_y_down() {
        let camera = camera();
        let bounds = camera.viewport_bounds();

        let top_left = camera.view_proj_matrix() * Vec4::new(bounds.min.x, bounds.min.y, 0.0, 1.0);
        assert_relative_eq!(top_left.x, -1.0, epsilon = 1e-5);
        assert_relative_eq!(top_left.y, 1.0, epsilon = 1e-5);

        let bottom_right = camera.view_proj_matrix() * Vec4::new(bounds.max.x, bounds.max.y, 0.0, 1.0);
        assert_relative_eq!(bottom_right.x, 1.0, epsilon = 1e-5);
        assert_relative_eq!(bottom_right.y, -1.0, epsilon = 1e-5);
    }

    #[test]
    fn test_viewport_culls_offscreen_rects() {
        let mut camera = camera();
        camera.follow(Vec2::new(500.0, 500.0), Vec2::new(1000.0, 1000.0));
        let visible = camera.viewport_bounds();

        assert!(visible.intersects_rect(Vec2::new(290.0, 340.0), Vec2::new(16.0, 16.0)));
        assert!(!visible.intersects_rect(Vec2::new(100.0, 500.0), Vec2::new(16.0, 16.0)));
        assert!(!visible.intersects_rect(Vec2::new(500.0, 700.0), Vec2::new(16.0, 16.0)));
    }
}
