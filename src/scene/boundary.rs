//! Geometry of the static boundary rectangles, in container space.

use bevy::prelude::*;

use crate::core::components::Boundary;
use crate::core::config::BoundaryConfig;
use crate::scene::container::ContainerDimensions;

pub const THICKNESS: f32 = 60.0;
pub const OVERSIZE: f32 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryRect {
    pub center: Vec2,
    pub size: Vec2,
}

impl BoundaryRect {
    pub fn half_extents(&self) -> Vec2 {
        self.size * 0.5
    }
}

/// Wall thickness plus the long-axis oversize factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryLayout {
    pub thickness: f32,
    pub oversize: f32,
}

impl Default for BoundaryLayout {
    fn default() -> Self {
        Self {
            thickness: THICKNESS,
            oversize: OVERSIZE,
        }
    }
}

impl From<&BoundaryConfig> for BoundaryLayout {
    fn from(cfg: &BoundaryConfig) -> Self {
        Self {
            thickness: cfg.thickness,
            oversize: cfg.oversize,
        }
    }
}

impl BoundaryLayout {
    /// Center just outside the matching container edge.
    pub fn center(&self, boundary: Boundary, dims: ContainerDimensions) -> Vec2 {
        let t = self.thickness;
        let (w, h) = (dims.width, dims.height);
        match boundary {
            Boundary::Ground => Vec2::new(w / 2.0, h + t / 2.0),
            Boundary::RightWall => Vec2::new(w + t / 2.0, h / 2.0),
            Boundary::LeftWall => Vec2::new(-t / 2.0, h / 2.0),
        }
    }

    pub fn size(&self, boundary: Boundary, dims: ContainerDimensions) -> Vec2 {
        match boundary {
            Boundary::Ground => Vec2::new(dims.width * self.oversize, self.thickness),
            Boundary::LeftWall | Boundary::RightWall => {
                Vec2::new(self.thickness, dims.height * self.oversize)
            }
        }
    }

    pub fn rect(&self, boundary: Boundary, dims: ContainerDimensions) -> BoundaryRect {
        BoundaryRect {
            center: self.center(boundary, dims),
            size: self.size(boundary, dims),
        }
    }

    /// Whether a boundary follows the container on resize. The left wall never does.
    pub fn tracks_resize(boundary: Boundary) -> bool {
        matches!(boundary, Boundary::Ground | Boundary::RightWall)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_for_800_by_600() {
        let layout = BoundaryLayout::default();
        let dims = ContainerDimensions::new(800.0, 600.0);

        let ground = layout.rect(Boundary::Ground, dims);
        assert_eq!(ground.size, Vec2::new(4000.0, 60.0));
        assert_eq!(ground.center, Vec2::new(400.0, 630.0));

        let right = layout.rect(Boundary::RightWall, dims);
        assert_eq!(right.size, Vec2::new(60.0, 3000.0));
        assert_eq!(right.center, Vec2::new(860.0, 300.0));

        let left = layout.rect(Boundary::LeftWall, dims);
        assert_eq!(left.size, Vec2::new(60.0, 3000.0));
        assert_eq!(left.center, Vec2::new(-30.0, 300.0));
    }

    #[test]
    fn degenerate_container_still_places_walls_outside() {
        let layout = BoundaryLayout::default();
        let dims = ContainerDimensions::new(0.0, 0.0);
        assert_eq!(layout.center(Boundary::Ground, dims), Vec2::new(0.0, 30.0));
        assert_eq!(layout.center(Boundary::RightWall, dims), Vec2::new(30.0, 0.0));
        assert_eq!(layout.size(Boundary::Ground, dims), Vec2::new(0.0, 60.0));
    }

    #[test]
    fn only_ground_and_right_wall_track_resize() {
        assert!(BoundaryLayout::tracks_resize(Boundary::Ground));
        assert!(BoundaryLayout::tracks_resize(Boundary::RightWall));
        assert!(!BoundaryLayout::tracks_resize(Boundary::LeftWall));
    }
}
