use super::text::TextBitmap;
use crate::camera::{Camera, CameraUniform};
use game_core::{Color, Rect};
use wgpu::util::DeviceExt;
use wgpu::*;

/// Instance data for rendering (matches shader InstanceInput).
/// Must use `repr(C)` and `bytemuck` to safely cast to raw bytes for the GPU buffer.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceData {
    pub transform: [f32; 4], // x, y, scale_x, scale_y
    pub tint: [f32; 4],      // rgba
}

impl InstanceData {
    pub fn quad(x: f32, y: f32, width: f32, height: f32, color: Color) -> Self {
        Self {
            transform: [x, y, width, height],
            tint: color.to_f32(),
        }
    }

    pub fn rect(rect: Rect, color: Color) -> Self {
        Self::quad(
            rect.x as f32,
            rect.y as f32,
            rect.w as f32,
            rect.h as f32,
            color,
        )
    }

    /// The unit circle mesh spans its bounding square
    pub fn circle(center: (i32, i32), radius: i32, color: Color) -> Self {
        let diameter = (radius * 2) as f32;
        Self::quad(
            (center.0 - radius) as f32,
            (center.1 - radius) as f32,
            diameter,
            diameter,
            color,
        )
    }
}

/// Growable per-frame instance buffer
pub struct InstanceBuffer {
    pub buffer: Buffer,
    label: &'static str,
    capacity: usize,
}

impl InstanceBuffer {
    pub fn new(device: &Device, label: &'static str, capacity: usize) -> Self {
        Self {
            buffer: Self::allocate(device, label, capacity),
            label,
            capacity,
        }
    }

    fn allocate(device: &Device, label: &'static str, capacity: usize) -> Buffer {
        device.create_buffer(&BufferDescriptor {
            label: Some(label),
            size: (capacity * std::mem::size_of::<InstanceData>()) as u64,
            usage: BufferUsages::VERTEX | BufferUsages::COPY_DST,
            mapped_at_creation: false,
        })
    }

    pub fn upload(&mut self, device: &Device, queue: &Queue, instances: &[InstanceData]) {
        if instances.len() > self.capacity {
            self.capacity = instances.len().next_power_of_two();
            self.buffer = Self::allocate(device, self.label, self.capacity);
        }
        if !instances.is_empty() {
            queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(instances));
        }
    }
}

pub struct GameBuffers {
    pub camera: Buffer,
    pub rects: InstanceBuffer,
    pub circles: InstanceBuffer,
    pub text: InstanceBuffer,
}

pub fn create_buffers(device: &Device, camera: &Camera) -> GameBuffers {
    // Camera buffer
    let camera_uniform = CameraUniform::from_camera(camera);
    let camera_buffer = device.create_buffer_init(&util::BufferInitDescriptor {
        label: Some("Camera Buffer"),
        contents: bytemuck::cast_slice(&[camera_uniform]),
        usage: BufferUsages::UNIFORM | BufferUsages::COPY_DST,
    });

    GameBuffers {
        camera: camera_buffer,
        rects: InstanceBuffer::new(device, "Rect Instance Buffer", 8),
        circles: InstanceBuffer::new(device, "Circle Instance Buffer", 4),
        text: InstanceBuffer::new(device, "Text Instance Buffer", 8),
    }
}

pub fn create_text_sampler(device: &Device) -> Sampler {
    device.create_sampler(&SamplerDescriptor {
        label: Some("Text Sampler"),
        address_mode_u: AddressMode::ClampToEdge,
        address_mode_v: AddressMode::ClampToEdge,
        address_mode_w: AddressMode::ClampToEdge,
        mag_filter: FilterMode::Linear,
        min_filter: FilterMode::Linear,
        mipmap_filter: FilterMode::Nearest,
        ..Default::default()
    })
}

/// A rasterized line of text living on the GPU
pub struct TextTexture {
    _texture: Texture,
    pub bind_group: BindGroup,
    pub width: u32,
    pub height: u32,
}

pub fn create_text_texture(
    device: &Device,
    queue: &Queue,
    layout: &BindGroupLayout,
    sampler: &Sampler,
    bitmap: &TextBitmap,
) -> TextTexture {
    let size = Extent3d {
        width: bitmap.width,
        height: bitmap.height,
        depth_or_array_layers: 1,
    };
    let texture = device.create_texture(&TextureDescriptor {
        label: Some("Text Texture"),
        size,
        mip_level_count: 1,
        sample_count: 1,
        dimension: TextureDimension::D2,
        format: TextureFormat::R8Unorm,
        usage: TextureUsages::TEXTURE_BINDING | TextureUsages::COPY_DST,
        view_formats: &[],
    });

    queue.write_texture(
        TexelCopyTextureInfo {
            texture: &texture,
            mip_level: 0,
            origin: Origin3d::ZERO,
            aspect: TextureAspect::All,
        },
        &bitmap.coverage,
        TexelCopyBufferLayout {
            offset: 0,
            bytes_per_row: Some(bitmap.width),
            rows_per_image: Some(bitmap.height),
        },
        size,
    );

    let view = texture.create_view(&TextureViewDescriptor::default());
    let bind_group = device.create_bind_group(&BindGroupDescriptor {
        label: Some("Text Bind Group"),
        layout,
        entries: &[
            BindGroupEntry {
                binding: 0,
                resource: BindingResource::TextureView(&view),
            },
            BindGroupEntry {
                binding: 1,
                resource: BindingResource::Sampler(sampler),
            },
        ],
    });

    TextTexture {
        _texture: texture,
        bind_group,
        width: bitmap.width,
        height: bitmap.height,
    }
}
