use bevy::prelude::*;

use crate::core::components::Boundary;
use crate::scene::boundary::BoundaryLayout;
use crate::scene::container::{to_world, ContainerDimensions};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BootstrapError {
    #[error("scene container not found ({selector})")]
    ContainerNotFound { selector: String },
}

/// Observable result of the startup bootstrap.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneStatus {
    Ready,
    ContainerNotFound,
}

/// Size of the surface the scene renders to. Mirrors the container after every resize.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RenderSurface {
    pub width: f32,
    pub height: f32,
}

impl From<ContainerDimensions> for RenderSurface {
    fn from(d: ContainerDimensions) -> Self {
        Self {
            width: d.width,
            height: d.height,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundaryHandles {
    pub ground: Entity,
    pub left_wall: Entity,
    pub right_wall: Entity,
}

impl BoundaryHandles {
    pub fn entity(&self, boundary: Boundary) -> Entity {
        match boundary {
            Boundary::Ground => self.ground,
            Boundary::LeftWall => self.left_wall,
            Boundary::RightWall => self.right_wall,
        }
    }
}

/// A boundary entity and the world position it moves to after a resize.
pub type BoundaryMove = (Boundary, Entity, Vec2);

/// Everything the scene needs after startup: the container it lives in, the last measured
/// dimensions and handles to the boundary bodies the resize handler moves.
#[derive(Resource, Debug, Clone)]
pub struct SceneController {
    container: Entity,
    dimensions: ContainerDimensions,
    surface: RenderSurface,
    layout: BoundaryLayout,
    boundaries: BoundaryHandles,
    bodies_created: u32,
}

impl SceneController {
    pub fn new(
        container: Entity,
        dimensions: ContainerDimensions,
        layout: BoundaryLayout,
        boundaries: BoundaryHandles,
    ) -> Self {
        Self {
            container,
            dimensions,
            surface: dimensions.into(),
            layout,
            boundaries,
            bodies_created: 0,
        }
    }

    pub fn container(&self) -> Entity {
        self.container
    }

    pub fn dimensions(&self) -> ContainerDimensions {
        self.dimensions
    }

    pub fn surface(&self) -> RenderSurface {
        self.surface
    }

    pub fn bodies_created(&self) -> u32 {
        self.bodies_created
    }

    /// Container-space spawn point for circle bodies: horizontally centered, top edge.
    pub fn spawn_point(&self) -> Vec2 {
        Vec2::new(self.dimensions.width / 2.0, 0.0)
    }

    pub fn record_body(&mut self) -> u32 {
        self.bodies_created += 1;
        self.bodies_created
    }

    /// Adopt freshly measured dimensions. The surface always takes the new size; only the
    /// boundaries that track resizes get new positions.
    pub fn apply_resize(&mut self, dimensions: ContainerDimensions) -> Vec<BoundaryMove> {
        self.dimensions = dimensions;
        self.surface = dimensions.into();
        Boundary::ALL
            .into_iter()
            .filter(|b| BoundaryLayout::tracks_resize(*b))
            .map(|b| {
                let center = self.layout.center(b, dimensions);
                (b, self.boundaries.entity(b), to_world(center))
            })
            .collect()
    }
}
