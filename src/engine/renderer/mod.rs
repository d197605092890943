// Rendering system using wgpu

mod camera;
mod sprite;
mod texture;
mod vertex;

pub use camera::{Camera, CameraUniform};
pub use sprite::{GpuBatch, QuadBatch, SpriteRenderer};
pub use texture::Texture;
pub use vertex::Vertex;

use anyhow::Result;
use glam::{Vec2, Vec4};
use log::{info, warn};
use std::sync::Arc;
use winit::window::Window;

use crate::engine::assets::{AtlasRegion, SpriteSheet};
use crate::game::FrameView;

const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.1,
    g: 0.1,
    b: 0.15,
    a: 1.0,
};
const WALL_COLOR: Vec4 = Vec4::new(0.35, 0.33, 0.4, 1.0);
const STAIR_COLOR: Vec4 = Vec4::new(0.55, 0.42, 0.25, 1.0);
const DEBUG_COLOR: Vec4 = Vec4::new(1.0, 0.0, 0.0, 1.0);

/// Owns the wgpu device and draws one `FrameView` per frame
pub struct Renderer {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    size: winit::dpi::PhysicalSize<u32>,
    sprite_renderer: SpriteRenderer,
    camera: Camera,

    /// White texture for flat level geometry
    blank: Texture,
    spritesheet: Texture,

    level_quads: QuadBatch,
    hero_quads: QuadBatch,
    overlay_quads: QuadBatch,
    level_batch: GpuBatch,
    hero_batch: GpuBatch,
    overlay_batch: GpuBatch,
}

impl Renderer {
    /// Create a renderer for the window and upload the spritesheet
    pub async fn new(window: Arc<Window>, sheet: &SpriteSheet, zoom: f32) -> Result<Self> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance.create_surface(window.clone())?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("Failed to find suitable GPU adapter"))?;

        info!("Using GPU: {}", adapter.get_info().name);

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("Main Device"),
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::downlevel_webgl2_defaults()
                        .using_resolution(adapter.limits()),
                },
                None,
            )
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .or_else(|| surface_caps.formats.first())
            .copied()
            .ok_or_else(|| anyhow::anyhow!("Surface reports no texture formats"))?;
        let alpha_mode = surface_caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let sprite_renderer = SpriteRenderer::new(&device, surface_format);
        let layout = sprite_renderer.texture_bind_group_layout();
        let blank = Texture::from_color(&device, &queue, layout, [255; 4], "Blank Texture");
        let spritesheet =
            Texture::from_rgba(&device, &queue, layout, sheet.image(), "Hero Spritesheet");

        let mut camera = Camera::new(Vec2::ZERO, config.width as f32, config.height as f32);
        camera.set_zoom(zoom);

        let level_batch = GpuBatch::new(&device, "Level Quads", 64);
        let hero_batch = GpuBatch::new(&device, "Hero Quads", 1);
        let overlay_batch = GpuBatch::new(&device, "Debug Quads", 1);

        info!(
            "Renderer initialized with {}x{} resolution",
            config.width, config.height
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            size,
            sprite_renderer,
            camera,
            blank,
            spritesheet,
            level_quads: QuadBatch::new(),
            hero_quads: QuadBatch::new(),
            overlay_quads: QuadBatch::new(),
            level_batch,
            hero_batch,
            overlay_batch,
        })
    }

    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.size = new_size;
            self.config.width = new_size.width;
            self.config.height = new_size.height;
            self.surface.configure(&self.device, &self.config);
            self.camera
                .resize(new_size.width as f32, new_size.height as f32);
            info!("Renderer resized to {}x{}", new_size.width, new_size.height);
        }
    }

    /// Build the quad batches for a frame
    fn prepare(&mut self, view: &FrameView<'_, AtlasRegion>) {
        self.camera.follow(view.camera_target, view.map_size);
        let visible = self.camera.viewport_bounds();

        self.level_quads.clear();
        for wall in view.walls.iter().filter(|r| visible.intersects_rect(r.min(), r.size())) {
            self.level_quads.push_rect(wall, WALL_COLOR);
        }
        for stair in view.stairs.iter().filter(|r| visible.intersects_rect(r.min(), r.size())) {
            self.level_quads.push_rect(stair, STAIR_COLOR);
        }

        self.hero_quads.clear();
        self.hero_quads.push_sprite(
            &view.hero_rect,
            view.hero_frame.frame,
            view.hero_frame.flip_horizontal,
        );

        self.overlay_quads.clear();
        if let Some(sensor) = &view.debug_rect {
            self.overlay_quads.push_rect(sensor, DEBUG_COLOR);
        }
    }

    pub fn render(&mut self, view: &FrameView<'_, AtlasRegion>) -> Result<()> {
        let output = match self.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.resize(self.size);
                return Ok(());
            }
            Err(wgpu::SurfaceError::Timeout) => {
                warn!("Surface timed out, skipping frame");
                return Ok(());
            }
            Err(err) => return Err(err.into()),
        };
        let target = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.prepare(view);
        self.sprite_renderer
            .update_camera(&self.queue, CameraUniform::new(&self.camera));
        self.level_batch
            .upload(&self.device, &self.queue, &self.level_quads);
        self.hero_batch
            .upload(&self.device, &self.queue, &self.hero_quads);
        self.overlay_batch
            .upload(&self.device, &self.queue, &self.overlay_quads);

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Main Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &target,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            self.sprite_renderer
                .draw(&mut render_pass, &self.level_batch, &self.blank);
            self.sprite_renderer
                .draw(&mut render_pass, &self.hero_batch, &self.spritesheet);
            self.sprite_renderer
                .draw(&mut render_pass, &self.overlay_batch, &self.blank);
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}
