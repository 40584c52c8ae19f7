//! Container measurement and the container-space <-> world mapping.
//!
//! Container space has its origin at the top-left corner of the container with y pointing
//! down, the same convention SVG path data uses. World space is Bevy's y-up space; the
//! camera is parked so that container (0, 0) sits at the top-left of the render surface.

use bevy::prelude::*;

use crate::core::config::ContainerSelector;

/// Measured container size in logical pixels. Never negative.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ContainerDimensions {
    pub width: f32,
    pub height: f32,
}

impl ContainerDimensions {
    pub fn new(width: f32, height: f32) -> Self {
        // f32::max also maps NaN to 0.0
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// Read the live layout size of a window.
    pub fn measure(window: &Window) -> Self {
        Self::new(window.width(), window.height())
    }

    pub fn as_vec2(self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

#[inline]
pub fn to_world(container_point: Vec2) -> Vec2 {
    Vec2::new(container_point.x, -container_point.y)
}

/// World-space position of the camera that keeps container (0, 0) at the surface's top-left.
pub fn camera_center(dimensions: ContainerDimensions) -> Vec2 {
    to_world(dimensions.as_vec2() * 0.5)
}

/// Resolve the selector against the open windows.
pub fn find_container<'a, I>(selector: &ContainerSelector, windows: I) -> Option<(Entity, &'a Window)>
where
    I: IntoIterator<Item = (Entity, &'a Window, bool)>,
{
    windows
        .into_iter()
        .find(|(_, window, is_primary)| match selector {
            ContainerSelector::Primary => *is_primary,
            ContainerSelector::Title(title) => window.title == *title,
        })
        .map(|(entity, window, _)| (entity, window))
}
