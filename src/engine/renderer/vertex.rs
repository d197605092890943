// Vertex layout shared by every quad

use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec3, Vec4};

use crate::core::Rect;

/// Vertex for 2D sprite rendering
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    /// Map-space position, z unused
    pub position: [f32; 3],
    /// Texture coordinates (UV)
    pub tex_coords: [f32; 2],
    /// Vertex color (RGBA)
    pub color: [f32; 4],
}

impl Vertex {
    pub fn new(position: Vec3, tex_coords: Vec2, color: Vec4) -> Self {
        Self {
            position: position.to_array(),
            tex_coords: tex_coords.to_array(),
            color: color.to_array(),
        }
    }

    /// Corners of `rect` clockwise from the top-left, as seen on screen.
    ///
    /// `uv_top_left` lands on the rect's top-left corner; passing swapped u
    /// coordinates mirrors the image.
    pub fn quad(rect: &Rect, uv_top_left: Vec2, uv_bottom_right: Vec2, color: Vec4) -> [Vertex; 4] {
        let (u0, v0) = (uv_top_left.x, uv_top_left.y);
        let (u1, v1) = (uv_bottom_right.x, uv_bottom_right.y);
        [
            Vertex::new(Vec3::new(rect.left(), rect.top(), 0.0), Vec2::new(u0, v0), color),
            Vertex::new(Vec3::new(rect.right(), rect.top(), 0.0), Vec2::new(u1, v0), color),
            Vertex::new(Vec3::new(rect.right(), rect.bottom(), 0.0), Vec2::new(u1, v1), color),
            Vertex::new(Vec3::new(rect.left(), rect.bottom(), 0.0), Vec2::new(u0, v1), color),
        ]
    }

    /// Vertex buffer layout matching `VertexInput` in sprite.wgsl
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                // Position
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                // Tex Coords
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x2,
                },
                // Color
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 5]>() as wgpu::BufferAddress,
                    shader_location: 2,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}
