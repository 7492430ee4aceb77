//! Convex hull by gift-wrapping (Jarvis march) on integer points.

use super::types::{orientation, GeomError, Orientation, Point};

/// Wrap `points` in their convex hull, returned in the traversal order of the
/// turn rule (counter-clockwise, collinear vertices tolerated).
///
/// Fewer than three input points yield an empty hull. Wrapping starts from
/// index 0 of the input order; callers that sort lexicographically first
/// therefore start from the lexicographic minimum, which is extreme. The wrap
/// appends at most `n` vertices; inputs that fail to close the loop within
/// that cap (duplicates of the start vertex, other degenerate layouts) are
/// reported as `DegenerateInput` rather than looped on.
pub fn build_hull(points: &[Point]) -> Result<Vec<Point>, GeomError> {
    let n = points.len();
    if n < 3 {
        return Ok(Vec::new());
    }
    let start = 0usize;
    let mut hull: Vec<Point> = Vec::new();
    let mut p = start;
    loop {
        if hull.len() == n {
            // A convex polygon on n points has at most n vertices; appending
            // an (n+1)-th means the wrap cannot return to its start.
            return Err(GeomError::degenerate(format!(
                "gift-wrapping did not close after {n} vertices"
            )));
        }
        hull.push(points[p]);
        // Provisional successor, then sweep: any candidate strictly
        // counter-clockwise of the current choice replaces it.
        let mut q = (p + 1) % n;
        for i in 0..n {
            if orientation(points[p], points[i], points[q]) == Orientation::CounterClockwise {
                q = i;
            }
        }
        p = q;
        if p == start {
            break;
        }
    }
    Ok(hull)
}
