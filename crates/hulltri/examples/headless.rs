//! Headless timing probe for the scatter → hull → triangle pipeline.
//!
//! Purpose
//! - Show that the kernel runs without any window or event loop attached.
//! - Provide a reproducible, code-backed data point for how long one full
//!   pipeline run takes at the default point count.

use std::time::Instant;

use hulltri::prelude::*;

fn main() {
    let cfg = ScatterCfg::default();
    let tok = ReplayToken { seed: 42, index: 0 };

    let start = Instant::now();
    let scene = compute_scene(cfg, tok).expect("pipeline succeeds");
    let elapsed_ms = start.elapsed().as_secs_f64() * 1e3;

    println!(
        "points={} hull_vertices={} seed={} index={}",
        scene.points.len(),
        scene.hull.len(),
        tok.seed,
        tok.index
    );
    for v in &scene.hull {
        println!("hull ({}, {})", v.x, v.y);
    }
    match &scene.triangle {
        Some(tri) => {
            for v in &tri.vertices {
                println!("triangle ({}, {})", v.x, v.y);
            }
            println!("triangle_area={:.1}", tri.area);
        }
        None => println!("triangle none"),
    }
    println!("pipeline_time_ms={elapsed_ms:.3}");
}
