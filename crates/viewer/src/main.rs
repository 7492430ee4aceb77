//! Window viewer for the scatter / hull / triangle scene.
//!
//! The kernel computes the scene once at startup; this binary owns the
//! window, the event loop, and the drawing, and only ever reads the result.
//! Closing the window ends the process.

use clap::Parser;
use macroquad::prelude::*;
use tracing_subscriber::fmt::SubscriberBuilder;

use hulltri::geom::rand::{ReplayToken, ScatterCfg};
use hulltri::geom::Point;
use hulltri::scene::{compute_scene, Scene};

const WIN_W: i32 = 852;
const WIN_H: i32 = 852;
const POINT_RADIUS: f32 = 5.0;
const OUTLINE_THICKNESS: f32 = 2.0;

#[derive(Parser)]
#[command(name = "viewer")]
#[command(about = "Scatter random points, hull them, inscribe the largest triangle")]
struct Args {
    /// Number of points to scatter
    #[arg(long, default_value_t = 20)]
    count: usize,
    /// Inclusive lower coordinate bound
    #[arg(long, default_value_t = -400, allow_negative_numbers = true)]
    min: i32,
    /// Inclusive upper coordinate bound
    #[arg(long, default_value_t = 400, allow_negative_numbers = true)]
    max: i32,
    /// Scatter seed; drawn from OS entropy when absent
    #[arg(long)]
    seed: Option<u64>,
}

fn window_conf() -> Conf {
    Conf {
        window_title: "hulltri".to_owned(),
        window_width: WIN_W,
        window_height: WIN_H,
        ..Default::default()
    }
}

fn build_scene(args: &Args) -> anyhow::Result<(Scene, u64)> {
    let seed = args.seed.unwrap_or_else(::rand::random);
    let cfg = ScatterCfg {
        count: args.count,
        coord_min: args.min,
        coord_max: args.max,
    };
    let scene = compute_scene(cfg, ReplayToken { seed, index: 0 })?;
    Ok((scene, seed))
}

/// World origin sits at the window center, +y up.
fn to_screen(p: Point) -> Vec2 {
    vec2(
        WIN_W as f32 / 2.0 + p.x as f32,
        WIN_H as f32 / 2.0 - p.y as f32,
    )
}

fn draw_closed_outline(vertices: &[Point], color: Color) {
    if vertices.len() < 2 {
        return;
    }
    for i in 0..vertices.len() {
        let a = to_screen(vertices[i]);
        let b = to_screen(vertices[(i + 1) % vertices.len()]);
        draw_line(a.x, a.y, b.x, b.y, OUTLINE_THICKNESS, color);
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    SubscriberBuilder::default().with_target(false).init();
    let args = Args::parse();
    let (scene, seed) = match build_scene(&args) {
        Ok(built) => built,
        Err(err) => {
            tracing::error!(%err, "scene computation failed");
            return;
        }
    };
    tracing::info!(
        seed,
        points = scene.points.len(),
        hull_vertices = scene.hull.len(),
        best_area = ?scene.triangle.as_ref().map(|t| t.area),
        "scene ready"
    );

    loop {
        clear_background(WHITE);
        for p in &scene.points {
            let s = to_screen(*p);
            draw_circle(s.x, s.y, POINT_RADIUS, BLUE);
        }
        draw_closed_outline(&scene.hull, GREEN);
        if let Some(tri) = &scene.triangle {
            draw_closed_outline(&tri.vertices, RED);
        }
        next_frame().await
    }
}
