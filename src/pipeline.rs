//! The transform pipeline.
//!
//! Carries world-space triangles through view and clip space, performs the
//! perspective divide and screen mapping, culls back-facing triangles and
//! hands the survivors to the rasterizer. The pipeline owns its render
//! target; there is no process-wide display handle.

use crate::colors::Color;
use crate::math::mat4::Mat4;
use crate::math::vec2::Vec2;
use crate::math::vec3::Vec3;
use crate::math::vec4::Vec4;
use crate::mesh::Mesh;
use crate::projection::Projection;
use crate::render::{fill_triangle, FrameBuffer, PixelSink, ScreenPos};

pub struct Pipeline {
    framebuffer: FrameBuffer,
    view_matrix: Mat4,
    projection_matrix: Mat4,
}

impl Pipeline {
    pub fn new(width: u32, height: u32, projection: Projection) -> Self {
        Self {
            framebuffer: FrameBuffer::new(width, height),
            view_matrix: Mat4::identity(),
            projection_matrix: projection.matrix(),
        }
    }

    pub fn set_view_matrix(&mut self, view_matrix: Mat4) {
        self.view_matrix = view_matrix;
    }

    pub fn width(&self) -> u32 {
        self.framebuffer.width()
    }

    pub fn height(&self) -> u32 {
        self.framebuffer.height()
    }

    /// Resets the framebuffer to the background color.
    pub fn clear(&mut self) {
        self.framebuffer.clear(crate::colors::BACKGROUND);
    }

    /// The rendered frame as bytes for presentation (ARGB8888).
    pub fn as_bytes(&self) -> &[u8] {
        self.framebuffer.as_bytes()
    }

    pub fn framebuffer(&self) -> &FrameBuffer {
        &self.framebuffer
    }

    /// Renders a flat vertex list, three entries per triangle, with one flat
    /// color. A trailing partial triangle is ignored.
    ///
    /// Each vertex goes through the view matrix, the projection matrix, the
    /// perspective divide and the screen mapping. Triangles with a vertex
    /// exactly on the camera plane (`w == 0`) are skipped; triangles behind
    /// the camera are not clipped, only backface culled. Front faces wind
    /// clockwise in screen space (y-down): the projected signed area of a
    /// visible triangle is negative.
    pub fn render_triangles(&mut self, vertices: &[Vec3], color: Color) {
        for tri in vertices.chunks_exact(3) {
            let mut projected = [Vec2::ZERO; 3];
            let mut on_camera_plane = false;
            for (corner, vertex) in projected.iter_mut().zip(tri) {
                let view = self.view_matrix * Vec4::from(*vertex);
                let clip = self.projection_matrix * view;
                if clip.w == 0.0 {
                    on_camera_plane = true;
                    break;
                }
                *corner = self.screen_project(clip);
            }
            if on_camera_plane {
                continue;
            }

            let wind = (projected[1] - projected[0]).cross(projected[2] - projected[0]);
            if wind >= 0.0 {
                continue;
            }

            fill_triangle(
                &mut self.framebuffer,
                ScreenPos::from_vec2(projected[0]),
                ScreenPos::from_vec2(projected[1]),
                ScreenPos::from_vec2(projected[2]),
                color,
            );
        }
    }

    pub fn render_mesh(&mut self, mesh: &Mesh, color: Color) {
        self.render_triangles(mesh.vertices(), color);
    }

    /// Perspective divide and screen mapping. The caller guarantees
    /// `clip.w != 0`; there is no y flip, so clip-space +y maps downward on
    /// screen.
    fn screen_project(&self, clip: Vec4) -> Vec2 {
        let half_w = self.framebuffer.width() as f32 / 2.0;
        let half_h = self.framebuffer.height() as f32 / 2.0;
        Vec2::new(
            clip.x / clip.w * half_w + half_w,
            clip.y / clip.w * half_h + half_h,
        )
    }
}
