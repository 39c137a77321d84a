//! A minimal CPU-based software 3D triangle renderer.
//!
//! Triangle geometry is transformed through view and projection space and
//! rasterized into a pixel buffer with an edge-function (half-space)
//! algorithm in fixed-point screen coordinates. SDL2 is used only for window
//! management and display; all rendering happens on the CPU.
//!
//! There is no clipping, depth buffering, lighting or texturing: triangles
//! are backface culled, then filled with a flat color per triangle.
//!
//! # Quick Start
//!
//! ```ignore
//! use tryangle::prelude::*;
//!
//! let mut pipeline = Pipeline::new(640, 480, Projection::new(0.1, 1000.0));
//! pipeline.set_view_matrix(Mat4::translation(Vec3::new(0.0, 0.0, -3.0)));
//! pipeline.render_triangles(&QUAD_VERTICES, colors::FILL);
//! ```

// Public API - exposed to library consumers
pub mod colors;
pub mod math;
pub mod mesh;
pub mod pipeline;
pub mod projection;
pub mod window;

// Internal modules - used within the crate only
pub(crate) mod render;

// Re-export commonly needed types at crate root for convenience
pub use mesh::{LoadError, Mesh};
pub use pipeline::Pipeline;
pub use projection::Projection;

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use tryangle::prelude::*;
/// ```
pub mod prelude {
    // Colors
    pub use crate::colors::{self, Color};

    // Geometry
    pub use crate::mesh::{LoadError, Mesh, QUAD_VERTICES};

    // Pipeline
    pub use crate::pipeline::Pipeline;
    pub use crate::projection::Projection;

    // Math
    pub use crate::math::mat4::Mat4;
    pub use crate::math::vec2::Vec2;
    pub use crate::math::vec3::Vec3;
    pub use crate::math::vec4::Vec4;

    // Window
    pub use crate::window::{FrameLimiter, Window, WindowEvent};
}

/// Module exposing internals for benchmarking. Not part of the stable API.
pub mod bench {
    pub use crate::render::{fill_triangle, EdgeFn, FrameBuffer, PixelSink, ScreenPos, FRAC_BITS};
}
