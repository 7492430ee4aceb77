//! Compute-once scene pipeline: scatter → sort → hull → max triangle.
//!
//! The pipeline returns plain data. A renderer (or a test) reads the result;
//! nothing here calls back out, polls events, or holds onto the RNG.

use crate::geom::rand::{draw_points_uniform, ReplayToken, ScatterCfg};
use crate::geom::{build_hull, max_inscribed_triangle, sort_points, GeomError, MaxTriangle, Point};

/// Plain-data result of one pipeline run. Computed at startup, read-only
/// afterwards.
#[derive(Clone, Debug)]
pub struct Scene {
    /// The full scatter, lexicographically sorted.
    pub points: Vec<Point>,
    /// Convex hull in counter-clockwise traversal order; empty when the
    /// scatter has fewer than three points.
    pub hull: Vec<Point>,
    /// Maximum-area triangle over hull vertices; `None` when the hull is
    /// empty or fully degenerate.
    pub triangle: Option<MaxTriangle>,
}

/// Run the whole pipeline for one replay token.
pub fn compute_scene(cfg: ScatterCfg, tok: ReplayToken) -> Result<Scene, GeomError> {
    let mut points = draw_points_uniform(cfg, tok)?;
    sort_points(&mut points);
    let hull = build_hull(&points)?;
    let triangle = max_inscribed_triangle(&hull);
    Ok(Scene {
        points,
        hull,
        triangle,
    })
}
