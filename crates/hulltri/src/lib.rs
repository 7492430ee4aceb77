//! Geometry kernel for the scatter → hull → triangle pipeline.
//!
//! The library draws a reproducible random point scatter, wraps it in its
//! convex hull, and searches the hull vertices for the maximum-area inscribed
//! triangle. Everything is computed once and returned as plain data; nothing
//! in here knows about windows or frames. Drawing is a separate consumer
//! (see the `viewer` crate).

pub mod geom;
pub mod scene;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom::{GeomError, Orientation, Point};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom::rand::{draw_points_uniform, ReplayToken, ScatterCfg};
    pub use crate::geom::{
        build_hull, max_inscribed_triangle, orientation, sort_points, triangle_area, GeomError,
        MaxTriangle, Orientation, Point,
    };
    pub use crate::scene::{compute_scene, Scene};
}
