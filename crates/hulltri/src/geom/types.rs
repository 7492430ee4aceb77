//! Basic types shared across the kernel.
//!
//! - `Point`: integer 2D coordinates, immutable value type. Duplicates are
//!   permitted and never deduplicated.
//! - `Orientation` / `orientation`: exact turn classification of a triple.
//! - `sort_points`: the lexicographic pre-sort the pipeline runs before
//!   hull construction.
//! - `GeomError`: the kernel's only error type.

use std::cmp::Ordering;
use std::fmt;

use nalgebra::Vector2;

/// Integer 2D point. Coordinates fit `i32`; products are taken in `i64`.
pub type Point = Vector2<i32>;

/// Error type shared by the kernel's fallible operations.
#[derive(Debug)]
pub enum GeomError {
    InvalidParams { reason: String },
    DegenerateInput { reason: String },
}

impl GeomError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }

    pub(crate) fn degenerate(reason: impl Into<String>) -> Self {
        Self::DegenerateInput {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for GeomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParams { reason } => write!(f, "invalid params: {reason}"),
            Self::DegenerateInput { reason } => write!(f, "degenerate input: {reason}"),
        }
    }
}

impl std::error::Error for GeomError {}

/// Turn direction of the ordered triple `(a, b, c)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Collinear,
    Clockwise,
    CounterClockwise,
}

/// Classify the turn `a → b → c` from the sign of
/// `(b.y − a.y)·(c.x − b.x) − (b.x − a.x)·(c.y − b.y)`.
///
/// Zero is collinear, positive clockwise, negative counter-clockwise. The
/// operand arrangement fixes the hull's handedness downstream; it is not
/// interchangeable with the `(b − a) × (c − a)` form, whose sign is flipped.
#[inline]
pub fn orientation(a: Point, b: Point, c: Point) -> Orientation {
    let val = (i64::from(b.y) - i64::from(a.y)) * (i64::from(c.x) - i64::from(b.x))
        - (i64::from(b.x) - i64::from(a.x)) * (i64::from(c.y) - i64::from(b.y));
    match val.cmp(&0) {
        Ordering::Equal => Orientation::Collinear,
        Ordering::Greater => Orientation::Clockwise,
        Ordering::Less => Orientation::CounterClockwise,
    }
}

/// In-place stable sort by `(x, y)` ascending. Order among exact duplicates
/// is unspecified (they are indistinguishable).
pub fn sort_points(points: &mut [Point]) {
    points.sort_by_key(|p| (p.x, p.y));
}
