//! Camera for Pong game
//!
//! 2D orthographic camera in playfield pixels, origin top-left, y down

use glam::Mat4;

/// Camera struct
pub struct Camera {
    pub view: Mat4,
    pub projection: Mat4,
}

impl Camera {
    /// Map a `width` x `height` pixel area onto the whole surface
    pub fn pixel_space(width: f32, height: f32) -> Self {
        // Top and bottom swapped so y grows downwards like window coordinates
        let projection = Mat4::orthographic_rh(0.0, width, height, 0.0, -1.0, 1.0);

        Self {
            view: Mat4::IDENTITY,
            projection,
        }
    }
}

/// Camera uniform data (matches WGSL struct, 256-byte aligned)
#[repr(C, align(256))]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    view_proj: [[f32; 4]; 4], // 64 bytes (mat4x4)
    _padding: [f32; 48],      // 192 bytes padding (48 * 4) to reach 256 bytes
}

impl CameraUniform {
    pub fn from_camera(camera: &Camera) -> Self {
        let view_proj = camera.projection * camera.view;
        Self {
            view_proj: view_proj.to_cols_array_2d(),
            _padding: [0.0; 48],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_pixel_corners_map_to_clip_corners() {
        let camera = Camera::pixel_space(1280.0, 720.0);
        let view_proj = camera.projection * camera.view;

        let top_left = view_proj.project_point3(Vec3::new(0.0, 0.0, 0.0));
        let bottom_right = view_proj.project_point3(Vec3::new(1280.0, 720.0, 0.0));

        assert!((top_left.x + 1.0).abs() < 1e-5 && (top_left.y - 1.0).abs() < 1e-5);
        assert!((bottom_right.x - 1.0).abs() < 1e-5 && (bottom_right.y + 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_uniform_is_256_bytes() {
        assert_eq!(std::mem::size_of::<CameraUniform>(), 256);
    }
}
