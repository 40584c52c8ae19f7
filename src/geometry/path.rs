//! SVG path data (`d` attribute) tracing into a flat list of outline points.
//!
//! `svgtypes` resolves the grammar (relative commands, H/V, smooth curves, arcs) into
//! absolute moves, lines, quadratics and cubics. Every subpath is appended in order, lines
//! contribute their end points and curves are sampled so consecutive points are roughly
//! `sample_length` apart. Coordinates are returned untouched (y-down, like the document).

use bevy::math::Vec2;
use svgtypes::{SimplePathSegment, SimplifyingPathParser};

pub const DEFAULT_SAMPLE_LENGTH: f32 = 15.0;
const MAX_SEGMENTS_PER_CURVE: usize = 256;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PathError {
    #[error("path data is empty")]
    Empty,
    #[error("malformed path data: {0}")]
    Syntax(String),
    #[error("path traced to fewer than three distinct points")]
    Degenerate,
}

impl From<svgtypes::Error> for PathError {
    fn from(e: svgtypes::Error) -> Self {
        PathError::Syntax(e.to_string())
    }
}

struct Tracer {
    points: Vec<Vec2>,
    current: Vec2,
    subpath_start: Vec2,
    sample_length: f32,
}

impl Tracer {
    fn segments_for(&self, approx_len: f32) -> usize {
        ((approx_len / self.sample_length).ceil() as usize).clamp(1, MAX_SEGMENTS_PER_CURVE)
    }

    fn move_to(&mut self, p: Vec2) {
        self.points.push(p);
        self.current = p;
        self.subpath_start = p;
    }

    fn line_to(&mut self, p: Vec2) {
        self.points.push(p);
        self.current = p;
    }

    fn cubic_to(&mut self, c1: Vec2, c2: Vec2, end: Vec2) {
        let p0 = self.current;
        let approx = (p0.distance(c1) + c1.distance(c2) + c2.distance(end) + p0.distance(end)) * 0.5;
        let n = self.segments_for(approx);
        for i in 1..=n {
            let t = i as f32 / n as f32;
            let mt = 1.0 - t;
            let p = p0 * (mt * mt * mt)
                + c1 * (3.0 * mt * mt * t)
                + c2 * (3.0 * mt * t * t)
                + end * (t * t * t);
            self.points.push(p);
        }
        self.current = end;
    }

    fn quad_to(&mut self, c: Vec2, end: Vec2) {
        let p0 = self.current;
        let approx = (p0.distance(c) + c.distance(end) + p0.distance(end)) * 0.5;
        let n = self.segments_for(approx);
        for i in 1..=n {
            let t = i as f32 / n as f32;
            let mt = 1.0 - t;
            self.points
                .push(p0 * (mt * mt) + c * (2.0 * mt * t) + end * (t * t));
        }
        self.current = end;
    }

    fn close(&mut self) {
        self.current = self.subpath_start;
    }
}

#[inline]
fn pt(x: f64, y: f64) -> Vec2 {
    Vec2::new(x as f32, y as f32)
}

/// Trace path data into outline points. `sample_length <= 0` selects [`DEFAULT_SAMPLE_LENGTH`].
pub fn trace_path(data: &str, sample_length: f32) -> Result<Vec<Vec2>, PathError> {
    if data.trim().is_empty() {
        return Err(PathError::Empty);
    }
    let mut tracer = Tracer {
        points: Vec::new(),
        current: Vec2::ZERO,
        subpath_start: Vec2::ZERO,
        sample_length: if sample_length > 0.0 {
            sample_length
        } else {
            DEFAULT_SAMPLE_LENGTH
        },
    };

    for segment in SimplifyingPathParser::from(data) {
        match segment? {
            SimplePathSegment::MoveTo { x, y } => tracer.move_to(pt(x, y)),
            SimplePathSegment::LineTo { x, y } => tracer.line_to(pt(x, y)),
            SimplePathSegment::Quadratic { x1, y1, x, y } => tracer.quad_to(pt(x1, y1), pt(x, y)),
            SimplePathSegment::CurveTo {
                x1,
                y1,
                x2,
                y2,
                x,
                y,
            } => tracer.cubic_to(pt(x1, y1), pt(x2, y2), pt(x, y)),
            SimplePathSegment::ClosePath => tracer.close(),
        }
    }

    if tracer.points.is_empty() {
        return Err(PathError::Empty);
    }
    Ok(tracer.points)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_and_relative_lines() {
        let abs = trace_path("M0 0 L10 0 L10 10 L0 10 Z", 0.0).unwrap();
        let rel = trace_path("m0,0 l10,0 0,10 -10,0 z", 0.0).unwrap();
        let expected = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(0.0, 10.0),
        ];
        assert_eq!(abs, expected);
        assert_eq!(rel, expected);
    }

    #[test]
    fn horizontal_vertical_and_implicit_lineto() {
        let pts = trace_path("M5 5 20 5 V20 h-15", 0.0).unwrap();
        assert_eq!(
            pts,
            vec![
                Vec2::new(5.0, 5.0),
                Vec2::new(20.0, 5.0),
                Vec2::new(20.0, 20.0),
                Vec2::new(5.0, 20.0),
            ]
        );
    }

    #[test]
    fn compact_number_syntax() {
        // "-.5.5" is two numbers, exponent forms are accepted
        let pts = trace_path("M1e1-.5.5 2E0z", 0.0).unwrap();
        assert_eq!(pts, vec![Vec2::new(10.0, -0.5), Vec2::new(0.5, 2.0)]);
    }

    #[test]
    fn cubic_is_sampled_and_ends_on_endpoint() {
        let pts = trace_path("M0 0 C0 100 100 100 100 0", 10.0).unwrap();
        assert!(pts.len() > 5, "expected sampling, got {}", pts.len());
        assert_eq!(*pts.last().unwrap(), Vec2::new(100.0, 0.0));
        // the curve bulges toward +y
        assert!(pts.iter().any(|p| p.y > 50.0));
    }

    #[test]
    fn smooth_quadratic_reflects_previous_control() {
        let pts = trace_path("M0 0 Q10 10 20 0 T40 0", 1000.0).unwrap();
        // one segment per curve at this sample length
        assert_eq!(pts, vec![Vec2::ZERO, Vec2::new(20.0, 0.0), Vec2::new(40.0, 0.0)]);
    }

    #[test]
    fn half_circle_arc_stays_near_radius() {
        let pts = trace_path("M0 0 A10 10 0 0 1 20 0", 2.0).unwrap();
        let center = Vec2::new(10.0, 0.0);
        assert!(pts.len() > 4);
        for p in &pts[1..] {
            assert!((p.distance(center) - 10.0).abs() < 0.05, "{p:?}");
        }
        assert!(pts.last().unwrap().distance(Vec2::new(20.0, 0.0)) < 1e-3);
    }

    #[test]
    fn packed_arc_flags() {
        let pts = trace_path("M0 0a10 10 0 0120 0", 1000.0).unwrap();
        assert!(pts.last().unwrap().distance(Vec2::new(20.0, 0.0)) < 1e-3);
    }

    #[test]
    fn errors_are_reported() {
        assert_eq!(trace_path("   ", 0.0), Err(PathError::Empty));
        assert!(matches!(trace_path("L0 0", 0.0), Err(PathError::Syntax(_))));
        assert!(matches!(trace_path("M0 0 L5", 0.0), Err(PathError::Syntax(_))));
        assert!(matches!(trace_path("M0 0 #", 0.0), Err(PathError::Syntax(_))));
    }
}
