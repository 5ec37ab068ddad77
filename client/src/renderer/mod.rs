pub mod draw;
pub mod init;
pub mod pipeline;
pub mod resources;
pub mod shaders;
pub mod text;

use std::collections::HashMap;
use std::sync::Arc;

use crate::camera::Camera;
use crate::error::InitError;
use crate::mesh::{create_circle, create_rectangle, Mesh};
use game_core::{Canvas, Color, Rect};
use resources::{GameBuffers, InstanceData, TextTexture};
use text::TextRasterizer;
use wgpu::*;
use winit::window::Window;

/// Rasterized text is cached per string and pixel size
pub type TextKey = (String, u32);

const TEXT_CACHE_LIMIT: usize = 64;

pub struct TextDraw {
    pub key: TextKey,
    pub x: i32,
    pub y: i32,
    pub color: Color,
}

/// Everything drawn since the last `present`
pub struct FrameList {
    pub clear: Color,
    pub rects: Vec<InstanceData>,
    pub circles: Vec<InstanceData>,
    pub texts: Vec<TextDraw>,
}

impl FrameList {
    fn new() -> Self {
        Self {
            clear: Color::BLACK,
            rects: Vec::new(),
            circles: Vec::new(),
            texts: Vec::new(),
        }
    }

    fn reset(&mut self) {
        self.rects.clear();
        self.circles.clear();
        self.texts.clear();
    }
}

/// wgpu-backed canvas for one window
pub struct Renderer {
    pub device: Device,
    pub queue: Queue,
    pub surface: Surface<'static>,
    pub surface_config: SurfaceConfiguration,

    // Pipelines
    pub shape_pipeline: RenderPipeline,
    pub text_pipeline: RenderPipeline,

    // Bind Groups
    pub camera_bind_group: BindGroup,
    pub text_layout: BindGroupLayout,
    pub text_sampler: Sampler,

    // Resources
    pub buffers: GameBuffers,
    pub meshes: (Mesh, Mesh), // rect, circle

    // State
    pub text: TextRasterizer,
    pub text_cache: HashMap<TextKey, Option<TextTexture>>,
    pub frame: FrameList,
}

impl Renderer {
    /// `view` is the drawing area in pixels, stretched over the whole surface
    pub async fn new(
        window: Arc<Window>,
        text: TextRasterizer,
        view: (u32, u32),
    ) -> Result<Self, InitError> {
        let ctx = init::init_wgpu(window).await?;
        let camera = Camera::pixel_space(view.0 as f32, view.1 as f32);

        let buffers = resources::create_buffers(&ctx.device, &camera);
        let pipes = pipeline::create_pipelines(&ctx.device, ctx.config.format);
        let text_sampler = resources::create_text_sampler(&ctx.device);

        // Meshes
        let rect_mesh = create_rectangle(&ctx.device);
        let circle_mesh = create_circle(&ctx.device, 32);

        let camera_bind_group = ctx.device.create_bind_group(&BindGroupDescriptor {
            label: Some("Camera Bind Group"),
            layout: &pipes.camera_layout,
            entries: &[BindGroupEntry {
                binding: 0,
                resource: buffers.camera.as_entire_binding(),
            }],
        });

        tracing::debug!(
            width = ctx.config.width,
            height = ctx.config.height,
            format = ?ctx.config.format,
            "renderer ready"
        );

        Ok(Self {
            device: ctx.device,
            queue: ctx.queue,
            surface: ctx.surface,
            surface_config: ctx.config,
            shape_pipeline: pipes.shape_pipeline,
            text_pipeline: pipes.text_pipeline,
            camera_bind_group,
            text_layout: pipes.text_layout,
            text_sampler,
            buffers,
            meshes: (rect_mesh, circle_mesh),
            text,
            text_cache: HashMap::new(),
            frame: FrameList::new(),
        })
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.surface_config.width = width;
        self.surface_config.height = height;
        self.surface.configure(&self.device, &self.surface_config);
    }

    /// Rasterize and upload a line of text unless it is cached already
    fn prepare_text(&mut self, key: &TextKey) {
        if self.text_cache.contains_key(key) {
            return;
        }
        if self.text_cache.len() >= TEXT_CACHE_LIMIT {
            self.text_cache.clear();
        }

        let texture = self
            .text
            .rasterize(&key.0, f32::from_bits(key.1))
            .map(|bitmap| {
                resources::create_text_texture(
                    &self.device,
                    &self.queue,
                    &self.text_layout,
                    &self.text_sampler,
                    &bitmap,
                )
            });
        self.text_cache.insert(key.clone(), texture);
    }
}

impl Canvas for Renderer {
    fn clear(&mut self, color: Color) {
        self.frame.reset();
        self.frame.clear = color;
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.frame.rects.push(InstanceData::rect(rect, color));
    }

    fn fill_circle(&mut self, center: (i32, i32), radius: i32, color: Color) {
        self.frame
            .circles
            .push(InstanceData::circle(center, radius, color));
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32, size: f32, color: Color) {
        self.frame.texts.push(TextDraw {
            key: (text.to_string(), size.to_bits()),
            x,
            y,
            color,
        });
    }

    fn present(&mut self) {
        draw::draw_frame(self);
        self.frame.reset();
    }
}
