use bevy::math::Vec2;
use bevy_rapier2d::prelude::Collider;

use super::path::{trace_path, PathError};
use super::polygon;

const CLEAN_TOLERANCE: f32 = 0.01;

/// A traced outline ready to become a body: local y-up points centered on the centroid.
#[derive(Debug, Clone, PartialEq)]
pub struct Outline {
    pub points: Vec<Vec2>,
    /// Counter-clockwise triangles over `points`, used for the fill mesh.
    pub triangles: Vec<[u32; 3]>,
    pub radius: f32,
}

impl Outline {
    pub fn from_path_data(data: &str, sample_length: f32) -> Result<Self, PathError> {
        let traced = trace_path(data, sample_length)?;
        // document space is y-down
        let flipped: Vec<Vec2> = traced.into_iter().map(|p| Vec2::new(p.x, -p.y)).collect();
        Self::from_points(&flipped)
    }

    pub fn from_points(points: &[Vec2]) -> Result<Self, PathError> {
        let cleaned = polygon::clean(points, CLEAN_TOLERANCE);
        if cleaned.len() < 3 {
            return Err(PathError::Degenerate);
        }
        let center = polygon::centroid(&cleaned);
        let local: Vec<Vec2> = cleaned.iter().map(|p| *p - center).collect();
        let triangles = polygon::triangulate(&local);
        let radius = polygon::bounding_radius(&local);
        Ok(Self {
            points: local,
            triangles,
            radius,
        })
    }

    /// Convex decomposition of the closed outline, so concave shapes collide as drawn.
    pub fn collider(&self) -> Collider {
        Collider::convex_decomposition(&self.points, &polygon::ring_edges(self.points.len()))
    }
}
