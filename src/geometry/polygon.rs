//! Simple polygon helpers used to turn traced outlines into renderable / collidable shapes.

use bevy::math::Vec2;

/// Positive for counter-clockwise winding in a y-up frame.
pub fn signed_area(points: &[Vec2]) -> f32 {
    if points.len() < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for (i, a) in points.iter().enumerate() {
        let b = points[(i + 1) % points.len()];
        sum += a.perp_dot(b);
    }
    sum * 0.5
}

/// Area centroid; falls back to the vertex average for degenerate polygons.
pub fn centroid(points: &[Vec2]) -> Vec2 {
    if points.is_empty() {
        return Vec2::ZERO;
    }
    let area = signed_area(points);
    if area.abs() <= f32::EPSILON {
        return points.iter().copied().sum::<Vec2>() / points.len() as f32;
    }
    let mut acc = Vec2::ZERO;
    for (i, a) in points.iter().enumerate() {
        let b = points[(i + 1) % points.len()];
        acc += (*a + b) * a.perp_dot(b);
    }
    acc / (6.0 * area)
}

/// Drop repeated vertices (including a closing copy of the first) and nearly collinear ones.
pub fn clean(points: &[Vec2], tolerance: f32) -> Vec<Vec2> {
    let mut out: Vec<Vec2> = Vec::with_capacity(points.len());
    for &p in points {
        if out.last().map_or(true, |last| last.distance_squared(p) > tolerance * tolerance) {
            out.push(p);
        }
    }
    while out.len() > 1 && out[0].distance_squared(out[out.len() - 1]) <= tolerance * tolerance {
        out.pop();
    }

    // Repeat until stable: removing one vertex can make its neighbours collinear.
    let mut changed = true;
    while changed && out.len() >= 3 {
        changed = false;
        let mut i = 0;
        while i < out.len() && out.len() >= 3 {
            let n = out.len();
            let prev = out[(i + n - 1) % n];
            let next = out[(i + 1) % n];
            if (out[i] - prev).perp_dot(next - out[i]).abs() <= tolerance {
                out.remove(i);
                changed = true;
            } else {
                i += 1;
            }
        }
    }
    out
}

/// Triangulate a simple polygon with earcut. Triangles come out counter-clockwise (y-up)
/// regardless of the input winding. Empty when no triangulation exists.
pub fn triangulate(points: &[Vec2]) -> Vec<[u32; 3]> {
    if points.len() < 3 {
        return Vec::new();
    }
    let flat: Vec<f64> = points
        .iter()
        .flat_map(|p| [f64::from(p.x), f64::from(p.y)])
        .collect();
    let indices = earcutr::earcut(&flat, &[], 2).unwrap_or_default();
    indices
        .chunks_exact(3)
        .map(|t| {
            let tri = [t[0] as u32, t[1] as u32, t[2] as u32];
            let corners = tri.map(|i| points[i as usize]);
            if signed_area(&corners) < 0.0 {
                [tri[0], tri[2], tri[1]]
            } else {
                tri
            }
        })
        .collect()
}

/// Closed polyline over `0..len`, as vertex index pairs.
pub fn ring_edges(len: usize) -> Vec<[u32; 2]> {
    (0..len as u32)
        .map(|i| [i, (i + 1) % len as u32])
        .collect()
}

/// Distance from the origin to the farthest vertex.
pub fn bounding_radius(points: &[Vec2]) -> f32 {
    points.iter().map(|p| p.length()).fold(0.0, f32::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Vec2> {
        vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(0.0, 10.0),
        ]
    }

    #[test]
    fn area_sign_follows_winding() {
        let sq = square();
        assert_eq!(signed_area(&sq), 100.0);
        let rev: Vec<Vec2> = sq.into_iter().rev().collect();
        assert_eq!(signed_area(&rev), -100.0);
    }

    #[test]
    fn centroid_of_square() {
        assert_eq!(centroid(&square()), Vec2::new(5.0, 5.0));
    }

    #[test]
    fn clean_removes_duplicates_closing_point_and_collinear() {
        let pts = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(5.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(0.0, 10.0),
            Vec2::new(0.0, 0.0),
        ];
        assert_eq!(clean(&pts, 0.01), square());
    }

    #[test]
    fn concave_polygon_triangulates_ccw() {
        // L shape, clockwise input.
        let l: Vec<Vec2> = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(0.0, 20.0),
            Vec2::new(10.0, 20.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(20.0, 10.0),
            Vec2::new(20.0, 0.0),
        ];
        let tris = triangulate(&l);
        assert_eq!(tris.len(), l.len() - 2);
        let mut total = 0.0;
        for [a, b, c] in &tris {
            let t = [l[*a as usize], l[*b as usize], l[*c as usize]];
            let area = signed_area(&t);
            assert!(area > 0.0, "triangle {t:?} not ccw");
            total += area;
        }
        assert!((total - signed_area(&l).abs()).abs() < 1e-3);
    }

    #[test]
    fn degenerate_input_has_no_triangulation() {
        assert!(triangulate(&[Vec2::ZERO, Vec2::X]).is_empty());
        assert!(triangulate(&[Vec2::ZERO, Vec2::X, Vec2::X * 2.0]).is_empty());
    }

    #[test]
    fn collinear_vertices_still_cover_the_area() {
        // (0, 10) lies on the left edge, (10, 10) on the line through the notch
        let pts = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(20.0, 0.0),
            Vec2::new(20.0, 10.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(10.0, 20.0),
            Vec2::new(0.0, 20.0),
            Vec2::new(0.0, 10.0),
        ];
        let tris = triangulate(&pts);
        assert!(!tris.is_empty());
        let total: f32 = tris
            .iter()
            .map(|t| signed_area(&t.map(|i| pts[i as usize])))
            .sum();
        assert!((total - signed_area(&pts)).abs() < 1e-3);
    }

    #[test]
    fn ring_edges_close_the_loop() {
        assert_eq!(ring_edges(3), vec![[0, 1], [1, 2], [2, 0]]);
    }

    #[test]
    fn radius_is_farthest_vertex() {
        assert_eq!(bounding_radius(&[Vec2::new(3.0, 4.0), Vec2::X]), 5.0);
    }
}
