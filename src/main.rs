use tryangle::prelude::*;

const SCREEN_WIDTH: u32 = 640;
const SCREEN_HEIGHT: u32 = 480;

/// Spins vertices about the vertical axis by rotating each (x, z) pair.
/// Positive angles turn clockwise seen from above, per `Vec2::rotate`.
fn spin_y(vertices: &[Vec3], theta: f32) -> Vec<Vec3> {
    vertices
        .iter()
        .map(|v| {
            let xz = Vec2::new(v.x, v.z).rotate(theta);
            Vec3::new(xz.x, v.y, xz.y)
        })
        .collect()
}

fn main() -> Result<(), String> {
    // An optional .tri path replaces the built-in demo quad.
    let mesh = match std::env::args().nth(1) {
        Some(path) => {
            let mesh = Mesh::from_tri_file(&path).map_err(|e| e.to_string())?;
            println!("Loaded {} triangles", mesh.triangle_count());
            mesh
        }
        None => Mesh::from_vertices(QUAD_VERTICES.to_vec()),
    };

    let mut window = Window::new("Tryangle", SCREEN_WIDTH, SCREEN_HEIGHT)?;
    let mut pipeline = Pipeline::new(SCREEN_WIDTH, SCREEN_HEIGHT, Projection::new(0.1, 1000.0));
    pipeline.set_view_matrix(Mat4::translation(Vec3::new(0.0, 0.0, -3.0)));

    let mut frame_limiter = FrameLimiter::new(&window);

    loop {
        if window.poll_events() == WindowEvent::Quit {
            break;
        }

        let theta = window.elapsed_ms() as f32 / 1000.0;
        let vertices = spin_y(mesh.vertices(), theta);

        pipeline.clear();
        pipeline.render_triangles(&vertices, colors::FILL);
        window.present(pipeline.as_bytes())?;

        frame_limiter.wait_and_get_delta(&window);
    }

    Ok(())
}
