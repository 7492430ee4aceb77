//! Triangle area and exhaustive maximum inscribed triangle search.

use super::types::Point;

/// Maximum-area triangle drawn from a hull's vertices.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MaxTriangle {
    pub vertices: [Point; 3],
    pub area: f64,
}

/// Absolute shoelace area of the triangle `(p1, p2, p3)`:
/// `|x1(y2−y3) + x2(y3−y1) + x3(y1−y2)| / 2`.
///
/// Exact in `i64` up to the final halving, so the result is symmetric under
/// any permutation of the arguments. Collinear triples yield `0.0`.
#[inline]
pub fn triangle_area(p1: Point, p2: Point, p3: Point) -> f64 {
    let (x1, y1) = (i64::from(p1.x), i64::from(p1.y));
    let (x2, y2) = (i64::from(p2.x), i64::from(p2.y));
    let (x3, y3) = (i64::from(p3.x), i64::from(p3.y));
    let twice = x1 * (y2 - y3) + x2 * (y3 - y1) + x3 * (y1 - y2);
    twice.abs() as f64 / 2.0
}

/// Exhaustive maximum-area search over all `i < j < k` vertex triples of
/// `hull`, in the hull's fixed order.
///
/// The incumbent only moves on a strict `>`, so the first triple found at the
/// maximum wins exact ties, and a hull whose triples are all degenerate
/// (zero area) yields `None`. Hulls with fewer than three vertices yield
/// `None` as well. Cubic in hull size; fine for hulls of a few tens of
/// vertices.
pub fn max_inscribed_triangle(hull: &[Point]) -> Option<MaxTriangle> {
    let n = hull.len();
    if n < 3 {
        return None;
    }
    let mut max_area = 0.0f64;
    let mut best: Option<MaxTriangle> = None;
    for i in 0..n {
        for j in i + 1..n {
            for k in j + 1..n {
                let area = triangle_area(hull[i], hull[j], hull[k]);
                if area > max_area {
                    max_area = area;
                    best = Some(MaxTriangle {
                        vertices: [hull[i], hull[j], hull[k]],
                        area,
                    });
                }
            }
        }
    }
    best
}
