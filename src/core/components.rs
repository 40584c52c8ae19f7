use bevy::prelude::*;

use crate::core::config::BodyKind;

/// The three static rectangles fencing the container.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Boundary {
    Ground,
    LeftWall,
    RightWall,
}

impl Boundary {
    pub const ALL: [Boundary; 3] = [Boundary::Ground, Boundary::LeftWall, Boundary::RightWall];

    pub fn label(self) -> &'static str {
        match self {
            Boundary::Ground => "Ground",
            Boundary::LeftWall => "LeftWall",
            Boundary::RightWall => "RightWall",
        }
    }
}

/// Marker for bodies subject to the full simulation (gravity, collisions, drag).
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DynamicBody {
    pub kind: BodyKind,
}

/// Distance from the body center within which the pointer can grab it.
#[derive(Component, Debug, Deref, DerefMut, Copy, Clone)]
pub struct GrabRadius(pub f32);

/// How a dynamic body is painted. Resolved into meshes / sprites by the rendering plugin.
#[derive(Component, Debug, Clone)]
pub enum BodyVisual {
    Circle {
        radius: f32,
        fill: Color,
        stroke: Color,
    },
    Texture {
        path: String,
        radius: f32,
        scale: f32,
    },
    Outline {
        /// Local polygon, y-up, centered on the body origin.
        points: Vec<Vec2>,
        triangles: Vec<[u32; 3]>,
        fill: Color,
        stroke: Color,
    },
}
