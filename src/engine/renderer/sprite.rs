// Sprite rendering: quad batches and the pipeline that draws them

use super::{CameraUniform, Texture, Vertex};
use crate::core::Rect;
use crate::engine::assets::AtlasRegion;
use glam::{Mat4, Vec2, Vec4};
use wgpu::util::DeviceExt;

const QUAD_INDICES: [u32; 6] = [0, 1, 2, 0, 2, 3];

/// CPU-side list of quads sharing one texture
#[derive(Debug, Clone, Default)]
pub struct QuadBatch {
    vertices: Vec<Vertex>,
    indices: Vec<u32>,
}

impl QuadBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
    }

    /// Flat colored rectangle; the batch texture must be white
    pub fn push_rect(&mut self, rect: &Rect, color: Vec4) {
        self.push_quad(Vertex::quad(rect, Vec2::ZERO, Vec2::ONE, color));
    }

    /// Atlas region stretched over `rect`, mirrored when `flip` is set
    pub fn push_sprite(&mut self, rect: &Rect, region: &AtlasRegion, flip: bool) {
        let (uv_top_left, uv_bottom_right) = region.uv_corners(flip);
        self.push_quad(Vertex::quad(rect, uv_top_left, uv_bottom_right, Vec4::ONE));
    }

    fn push_quad(&mut self, quad: [Vertex; 4]) {
        let base = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&quad);
        self.indices.extend(QUAD_INDICES.iter().map(|i| base + i));
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn quad_count(&self) -> usize {
        self.vertices.len() / 4
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

/// GPU buffers holding one uploaded `QuadBatch`; grow on demand
pub struct GpuBatch {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    capacity: usize,
    index_count: u32,
    label: &'static str,
}

impl GpuBatch {
    pub fn new(device: &wgpu::Device, label: &'static str, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let (vertex_buffer, index_buffer) = Self::create_buffers(device, label, capacity);
        Self {
            vertex_buffer,
            index_buffer,
            capacity,
            index_count: 0,
            label,
        }
    }

    fn create_buffers(
        device: &wgpu::Device,
        label: &str,
        capacity: usize,
    ) -> (wgpu::Buffer, wgpu::Buffer) {
        let vertex_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(label),
            size: (capacity * 4 * std::mem::size_of::<Vertex>()) as wgpu::BufferAddress,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let index_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(label),
            size: (capacity * QUAD_INDICES.len() * std::mem::size_of::<u32>())
                as wgpu::BufferAddress,
            usage: wgpu::BufferUsages::INDEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        (vertex_buffer, index_buffer)
    }

    pub fn upload(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, batch: &QuadBatch) {
        if batch.quad_count() > self.capacity {
            self.capacity = batch.quad_count().next_power_of_two();
            let (vertex_buffer, index_buffer) =
                Self::create_buffers(device, self.label, self.capacity);
            self.vertex_buffer = vertex_buffer;
            self.index_buffer = index_buffer;
            log::debug!("Grew {} to {} quads", self.label, self.capacity);
        }

        self.index_count = batch.indices().len() as u32;
        if batch.is_empty() {
            return;
        }
        queue.write_buffer(&self.vertex_buffer, 0, bytemuck::cast_slice(batch.vertices()));
        queue.write_buffer(&self.index_buffer, 0, bytemuck::cast_slice(batch.indices()));
    }
}

/// Pipeline and camera binding for drawing quad batches
pub struct SpriteRenderer {
    render_pipeline: wgpu::RenderPipeline,
    camera_buffer: wgpu::Buffer,
    camera_bind_group: wgpu::BindGroup,
    texture_bind_group_layout: wgpu::BindGroupLayout,
}

impl SpriteRenderer {
    pub fn new(device: &wgpu::Device, format: wgpu::TextureFormat) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Sprite Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/sprite.wgsl").into()),
        });

        let camera_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Camera Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            });

        let texture_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Texture Bind Group Layout"),
                entries: &[
                    wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Texture {
                            multisampled: false,
                            view_dimension: wgpu::TextureViewDimension::D2,
                            sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        },
                        count: None,
                    },
                    wgpu::BindGroupLayoutEntry {
                        binding: 1,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                        count: None,
                    },
                ],
            });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Sprite Pipeline Layout"),
            bind_group_layouts: &[&camera_bind_group_layout, &texture_bind_group_layout],
            push_constant_ranges: &[],
        });

        let render_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Sprite Render Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: "vs_main",
                buffers: &[Vertex::desc()],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: "fs_main",
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                // The y-down projection reverses winding
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
        });

        let camera_uniform = CameraUniform {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
        };
        let camera_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Camera Buffer"),
            contents: bytemuck::cast_slice(&[camera_uniform]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let camera_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Camera Bind Group"),
            layout: &camera_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: camera_buffer.as_entire_binding(),
            }],
        });

        Self {
            render_pipeline,
            camera_buffer,
            camera_bind_group,
            texture_bind_group_layout,
        }
    }

    pub fn texture_bind_group_layout(&self) -> &wgpu::BindGroupLayout {
        &self.texture_bind_group_layout
    }

    pub fn update_camera(&self, queue: &wgpu::Queue, uniform: CameraUniform) {
        queue.write_buffer(&self.camera_buffer, 0, bytemuck::cast_slice(&[uniform]));
    }

    /// Draw an uploaded batch with its texture
    pub fn draw<'a>(
        &'a self,
        render_pass: &mut wgpu::RenderPass<'a>,
        batch: &'a GpuBatch,
        texture: &'a Texture,
    ) {
        if batch.index_count == 0 {
            return;
        }
        render_pass.set_pipeline(&self.render_pipeline);
        render_pass.set_bind_group(0, &self.camera_bind_group, &[]);
        render_pass.set_bind_group(1, &texture.bind_group, &[]);
        render_pass.set_vertex_buffer(0, batch.vertex_buffer.slice(..));
        render_pass.set_index_buffer(batch.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        render_pass.draw_indexed(0..batch.index_count, 0, 0..1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_indices_offset_per_quad() {
        let mut batch = QuadBatch::new();
        batch.push_rect(&Rect::new(0.0, 0.0, 16.0, 16.0), Vec4::ONE);
        batch.push_rect(&Rect::new(16.0, 0.0, 16.0, 16.0), Vec4::ONE);

        assert_eq!(batch.quad_count(), 2);
        assert_eq!(batch.indices(), &[0, 1, 2, 0, 2, 3, 4, 5, 6, 4, 6, 7]);

        batch.clear();
        assert!(batch.is_empty());
    }

    #[test]
    fn test_rect_uses_full_texture_and_tint() {
        let mut batch = QuadBatch::new();
        let red = Vec4::new(1.0, 0.0, 0.0, 1.0);
        batch.push_rect(&Rect::new(0.0, 0.0, 8.0, 8.0), red);

        let vertices = batch.vertices();
        assert_eq!(vertices[0].tex_coords, [0.0, 0.0]);
        assert_eq!(vertices[2].tex_coords, [1.0, 1.0]);
        assert!(vertices.iter().all(|v| v.color == [1.0, 0.0, 0.0, 1.0]));
    }

    #[test]
    fn test_flipped_sprite_swaps_u() {
        let region = AtlasRegion::new(0, 0, 32, 32, 128, 64);
        let rect = Rect::new(0.0, 0.0, 32.0, 32.0);

        let mut batch = QuadBatch::new();
        batch.push_sprite(&rect, &region, false);
        batch.push_sprite(&rect, &region, true);

        let vertices = batch.vertices();
        assert_eq!(vertices[0].tex_coords, [0.0, 0.0]);
        assert_eq!(vertices[1].tex_coords, [0.25, 0.0]);
        assert_eq!(vertices[4].tex_coords, [0.25, 0.0]);
        assert_eq!(vertices[5].tex_coords, [0.0, 0.0]);
        assert_eq!(vertices[6].tex_coords, [0.0, 0.5]);
    }
}
