//! Edge function triangle rasterization in fixed-point screen coordinates.
//!
//! Screen positions carry [`FRAC_BITS`] fractional bits so vertices can sit
//! between pixel centers without floating-point rounding deciding coverage.
//! Each triangle edge becomes a linear function `a*x + b*y + c` of integer
//! pixel coordinates; a pixel is inside the triangle iff all three edge
//! functions evaluate to `>= 0`. A top-left fill-rule bias tie-breaks pixels
//! lying exactly on a shared edge so that adjacent triangles cover every
//! pixel exactly once.
//!
//! # References
//!
//! - Juan Pineda, "A Parallel Algorithm for Polygon Rasterization" (1988)

use super::PixelSink;
use crate::colors::Color;
use crate::math::vec2::Vec2;

/// Fractional bits of sub-pixel precision in [`ScreenPos`] coordinates.
pub const FRAC_BITS: i32 = 8;

/// Largest fixed-point coordinate magnitude [`ScreenPos::from_vec2`]
/// produces (half a million pixels off-screen). Keeping coordinates inside
/// this range keeps every edge-function intermediate within `i64`.
pub const COORD_LIMIT: i32 = 1 << 27;

/// A screen-space position in fixed-point coordinates: each component is the
/// real coordinate scaled by `1 << FRAC_BITS`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScreenPos {
    pub x: i32,
    pub y: i32,
}

impl ScreenPos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Converts a floating-point screen position to fixed point, truncating
    /// toward zero. Truncation (not rounding) is part of the pipeline's
    /// sub-pixel placement contract.
    ///
    /// Coordinates are clamped to [`COORD_LIMIT`], a range far beyond any
    /// framebuffer: vertices projected from just in front of the camera
    /// plane blow up toward the integer limits, where edge-function setup
    /// would overflow.
    pub fn from_vec2(v: Vec2) -> Self {
        let scale = (1 << FRAC_BITS) as f32;
        Self {
            x: ((v.x * scale) as i32).clamp(-COORD_LIMIT, COORD_LIMIT),
            y: ((v.y * scale) as i32).clamp(-COORD_LIMIT, COORD_LIMIT),
        }
    }
}

/// Edge function `a*x + b*y + c` for the directed edge v0 -> v1, evaluated at
/// integer pixel coordinates. Points outside a convex polygon have at least
/// one negative edge function.
///
/// `a` and `b` are in fixed-point units; `c` is kept wide since its
/// intermediate products span twice the coordinate range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EdgeFn {
    pub a: i32,
    pub b: i32,
    pub c: i64,
}

impl EdgeFn {
    /// Builds the raw (unbiased) edge function for v0 -> v1.
    ///
    /// The constant term is shifted back down by [`FRAC_BITS`] because it is
    /// a product of two fixed-point values; the arithmetic shift floors.
    pub fn from_verts(v0: ScreenPos, v1: ScreenPos) -> Self {
        Self {
            a: v1.y - v0.y,
            b: v0.x - v1.x,
            c: (v0.y as i64 * (v1.x - v0.x) as i64 - v0.x as i64 * (v1.y - v0.y) as i64)
                >> FRAC_BITS,
        }
    }

    /// Biases left (`a > 0`) and top-horizontal (`a == 0 && b > 0`) edges so
    /// pixels exactly on a shared edge belong to exactly one of the two
    /// adjacent triangles.
    pub fn apply_fill_bias(&mut self) {
        if (self.a == 0 && self.b > 0) || self.a > 0 {
            self.c -= 1;
        }
    }

    /// Evaluates at integer pixel coordinates (not fixed-point; sampling is
    /// at integer resolution).
    #[inline]
    pub fn eval(&self, x: i32, y: i32) -> i64 {
        self.a as i64 * x as i64 + self.b as i64 * y as i64 + self.c
    }
}

/// Fixed-point signed area term for orientation: `(v1-v0) x (v2-v0)`.
fn signed_area(v0: ScreenPos, v1: ScreenPos, v2: ScreenPos) -> i64 {
    (v1.x - v0.x) as i64 * (v2.y - v0.y) as i64 - (v1.y - v0.y) as i64 * (v2.x - v0.x) as i64
}

/// Rasterizes a flat-colored triangle into `sink`, emitting every covered
/// pixel exactly once.
///
/// Vertices may arrive in either winding order: coverage is orientation
/// normalized before the fill-rule bias is applied, so reversing the vertex
/// order reports the same pixel set. Degenerate (zero-area) triangles and
/// triangles fully outside the sink produce no pixels.
pub fn fill_triangle<S: PixelSink>(
    sink: &mut S,
    v0: ScreenPos,
    v1: ScreenPos,
    v2: ScreenPos,
    color: Color,
) {
    let area = signed_area(v0, v1, v2);
    if area == 0 {
        return;
    }

    // Interior evaluations are positive for the clockwise (y-down) order;
    // mirror the counter-clockwise case onto it by swapping two vertices.
    // Rebuilding the edges from the swapped order keeps the floored
    // constant terms exact, so any vertex order yields the same pixel set.
    let (v1, v2) = if area > 0 { (v2, v1) } else { (v1, v2) };

    let mut edges = [
        EdgeFn::from_verts(v0, v1),
        EdgeFn::from_verts(v1, v2),
        EdgeFn::from_verts(v2, v0),
    ];
    for edge in edges.iter_mut() {
        edge.apply_fill_bias();
    }

    // Scanning the bounding box instead of the full extent is a pure
    // optimization: pixels outside it always fail the inside test. The
    // range math is done wide: saturated fixed-point coordinates sit near
    // i32::MAX, and the ceiling adjustment must not wrap.
    let frac_round = (1i64 << FRAC_BITS) - 1;
    let min_x = ((v0.x.min(v1.x).min(v2.x) as i64 >> FRAC_BITS).max(0)) as i32;
    let min_y = ((v0.y.min(v1.y).min(v2.y) as i64 >> FRAC_BITS).max(0)) as i32;
    let max_x = (((v0.x.max(v1.x).max(v2.x) as i64 + frac_round) >> FRAC_BITS)
        .min(sink.width() as i64 - 1)) as i32;
    let max_y = (((v0.y.max(v1.y).max(v2.y) as i64 + frac_round) >> FRAC_BITS)
        .min(sink.height() as i64 - 1)) as i32;

    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let inside = edges.iter().all(|e| e.eval(x, y) >= 0);
            if inside {
                sink.put_pixel(x, y, color.r as i32, color.g as i32, color.b as i32);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors;

    const W: u32 = 320;
    const H: u32 = 400;

    /// Counts how many times each pixel is emitted.
    struct CoverageSink {
        counts: Vec<u8>,
        width: u32,
        height: u32,
    }

    impl CoverageSink {
        fn new(width: u32, height: u32) -> Self {
            Self {
                counts: vec![0; (width * height) as usize],
                width,
                height,
            }
        }

        fn count(&self, x: i32, y: i32) -> u8 {
            self.counts[(y as u32 * self.width + x as u32) as usize]
        }

        fn total(&self) -> usize {
            self.counts.iter().map(|&c| c as usize).sum()
        }
    }

    impl PixelSink for CoverageSink {
        fn width(&self) -> u32 {
            self.width
        }

        fn height(&self) -> u32 {
            self.height
        }

        fn put_pixel(&mut self, x: i32, y: i32, _r: i32, _g: i32, _b: i32) {
            assert!(x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32);
            self.counts[(y as u32 * self.width + x as u32) as usize] += 1;
        }
    }

    fn fixed(x: i32, y: i32) -> ScreenPos {
        ScreenPos::new(x << FRAC_BITS, y << FRAC_BITS)
    }

    #[test]
    fn bias_applies_to_left_edge_only() {
        // Vertical edge going down (+y): a > 0, classified "left", biased.
        let mut down = EdgeFn::from_verts(fixed(0, 0), fixed(0, 10));
        down.apply_fill_bias();
        assert_eq!(down.a, 10 << FRAC_BITS);
        assert_eq!(down.c, -1);

        // The reverse edge has a < 0: no bias.
        let mut up = EdgeFn::from_verts(fixed(0, 10), fixed(0, 0));
        up.apply_fill_bias();
        assert_eq!(up.a, -(10 << FRAC_BITS));
        assert_eq!(up.c, 0);
    }

    #[test]
    fn bias_applies_to_top_edge_only() {
        // Horizontal edge with b > 0 is a "top" edge.
        let mut top = EdgeFn::from_verts(fixed(10, 0), fixed(0, 0));
        top.apply_fill_bias();
        assert_eq!(top.a, 0);
        assert!(top.b > 0);
        assert_eq!(top.c, -1);

        let mut bottom = EdgeFn::from_verts(fixed(0, 0), fixed(10, 0));
        bottom.apply_fill_bias();
        assert_eq!(bottom.c, 0);
    }

    #[test]
    fn constant_term_shift_floors() {
        // Odd sub-pixel coordinates make the numerator a negative
        // non-multiple of the fixed-point scale; the arithmetic shift must
        // floor toward negative infinity, not truncate toward zero.
        let e = EdgeFn::from_verts(ScreenPos::new(3, 1), ScreenPos::new(-5, 257));
        // Numerator is 1*(-8) - 3*256 = -776; -776/256 truncated is -3.
        assert_eq!(e.c, -4);
    }

    #[test]
    fn shared_edge_pixels_belong_to_exactly_one_triangle() {
        // Two clockwise-front triangles tiling a convex quad along the
        // shared edge (80,200)-(220,110).
        let a = fixed(100, 100);
        let b = fixed(80, 200);
        let c = fixed(220, 110);
        let d = fixed(220, 300);

        let mut sink = CoverageSink::new(W, H);
        fill_triangle(&mut sink, a, b, c, colors::FILL);
        fill_triangle(&mut sink, b, d, c, colors::FILL);

        // Quad membership computed independently from its four edges with
        // the same inside test the rasterizer uses.
        let mut quad = [
            EdgeFn::from_verts(a, b),
            EdgeFn::from_verts(b, d),
            EdgeFn::from_verts(d, c),
            EdgeFn::from_verts(c, a),
        ];
        for edge in quad.iter_mut() {
            edge.apply_fill_bias();
        }

        let mut covered = 0usize;
        for y in 0..H as i32 {
            for x in 0..W as i32 {
                let count = sink.count(x, y);
                assert!(count <= 1, "pixel ({x},{y}) covered {count} times");

                let in_quad = quad.iter().all(|e| e.eval(x, y) >= 0);
                assert_eq!(
                    count == 1,
                    in_quad,
                    "pixel ({x},{y}) coverage disagrees with quad membership"
                );
                covered += count as usize;
            }
        }
        assert!(covered > 0);
    }

    #[test]
    fn coverage_is_invariant_under_vertex_reversal() {
        let v0 = fixed(100, 100);
        let v1 = fixed(80, 200);
        let v2 = fixed(220, 110);

        let mut forward = CoverageSink::new(W, H);
        let mut reversed = CoverageSink::new(W, H);
        fill_triangle(&mut forward, v0, v1, v2, colors::FILL);
        fill_triangle(&mut reversed, v0, v2, v1, colors::FILL);

        assert!(forward.total() > 0);
        assert_eq!(forward.counts, reversed.counts);
    }

    #[test]
    fn subpixel_coverage_is_invariant_under_vertex_reversal() {
        // Raw fixed-point coordinates with fractional parts: the floored
        // constant terms are not multiples of the fixed-point scale, so
        // boundary ownership must not depend on the vertex order.
        let triangles = [
            (
                ScreenPos::new(2649, 2726),
                ScreenPos::new(23043, 5258),
                ScreenPos::new(10270, 20593),
            ),
            (
                ScreenPos::new(1031, 399),
                ScreenPos::new(30011, 1537),
                ScreenPos::new(15373, 27777),
            ),
            (
                ScreenPos::new(511, 511),
                ScreenPos::new(255, 12801),
                ScreenPos::new(25601, 6399),
            ),
        ];

        for (v0, v1, v2) in triangles {
            let mut forward = CoverageSink::new(W, H);
            let mut reversed = CoverageSink::new(W, H);
            fill_triangle(&mut forward, v0, v1, v2, colors::FILL);
            fill_triangle(&mut reversed, v0, v2, v1, colors::FILL);

            assert!(forward.total() > 0);
            assert_eq!(forward.counts, reversed.counts);
        }
    }

    #[test]
    fn saturated_coordinates_emit_nothing() {
        // A vertex projected from just in front of the camera plane
        // saturates the fixed-point cast; the scan range must degenerate
        // to empty instead of wrapping.
        let mut sink = CoverageSink::new(W, H);
        fill_triangle(
            &mut sink,
            ScreenPos::new(i32::MAX, i32::MAX),
            ScreenPos::new(i32::MAX, i32::MAX - (1 << FRAC_BITS)),
            ScreenPos::new(i32::MAX - (1 << FRAC_BITS), i32::MAX),
            colors::FILL,
        );
        fill_triangle(
            &mut sink,
            ScreenPos::new(i32::MIN, i32::MIN),
            ScreenPos::new(i32::MIN + (1 << FRAC_BITS), i32::MIN),
            ScreenPos::new(i32::MIN, i32::MIN + (1 << FRAC_BITS)),
            colors::FILL,
        );
        assert_eq!(sink.total(), 0);
    }

    #[test]
    fn degenerate_triangles_emit_nothing() {
        let mut sink = CoverageSink::new(W, H);
        // Coincident vertices.
        fill_triangle(&mut sink, fixed(5, 5), fixed(5, 5), fixed(5, 5), colors::FILL);
        // Collinear vertices.
        fill_triangle(&mut sink, fixed(0, 0), fixed(10, 10), fixed(20, 20), colors::FILL);
        assert_eq!(sink.total(), 0);
    }

    #[test]
    fn offscreen_triangle_emits_nothing() {
        let mut sink = CoverageSink::new(W, H);
        fill_triangle(
            &mut sink,
            fixed(-300, -300),
            fixed(-100, -300),
            fixed(-200, -100),
            colors::FILL,
        );
        fill_triangle(
            &mut sink,
            fixed(W as i32 + 10, 0),
            fixed(W as i32 + 60, 0),
            fixed(W as i32 + 30, 50),
            colors::FILL,
        );
        assert_eq!(sink.total(), 0);
    }

    #[test]
    fn fixed_point_conversion_truncates_toward_zero() {
        let p = ScreenPos::from_vec2(Vec2::new(1.9, -1.9));
        assert_eq!(p.x, (1.9 * 256.0) as i32);
        assert_eq!(p.y, (-1.9 * 256.0) as i32);
        // Toward zero, not floor.
        assert_eq!(p.y, -486);
    }

    #[test]
    fn fixed_point_conversion_clamps_blown_up_coordinates() {
        // A vertex just in front of the camera plane projects to enormous
        // screen coordinates; the conversion pins them to the safe range.
        let p = ScreenPos::from_vec2(Vec2::new(1e30, -1e30));
        assert_eq!(p, ScreenPos::new(COORD_LIMIT, -COORD_LIMIT));
    }
}
