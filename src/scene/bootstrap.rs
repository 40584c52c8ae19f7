// This file is part of Drop Scene.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_rapier2d::prelude::*;

use crate::core::components::Boundary;
use crate::core::config::{BodyKind, ContainerSelector, SceneConfig};
use crate::gameplay::spawn::outline::OutlineLibrary;
use crate::gameplay::spawn::spawn::spawn_body_kind;
use crate::interaction::mouse_constraint::MouseConstraint;
use crate::scene::boundary::BoundaryLayout;
use crate::scene::container::{find_container, to_world, ContainerDimensions};
use crate::scene::controller::{BootstrapError, BoundaryHandles, SceneController, SceneStatus};

const LOG_TARGET: &str = "drop_scene::bootstrap";

fn describe(selector: &ContainerSelector) -> String {
    match selector {
        ContainerSelector::Primary => "primary window".into(),
        ContainerSelector::Title(title) => format!("window titled '{title}'"),
    }
}

fn spawn_boundary(
    commands: &mut Commands,
    layout: &BoundaryLayout,
    boundary: Boundary,
    dims: ContainerDimensions,
) -> Entity {
    let rect = layout.rect(boundary, dims);
    let half = rect.half_extents();
    commands
        .spawn((
            Name::new(boundary.label()),
            boundary,
            Transform::from_translation(to_world(rect.center).extend(0.0)),
            RigidBody::Fixed,
            Collider::cuboid(half.x, half.y),
        ))
        .id()
}

/// Build the scene inside the selected container.
///
/// Nothing is spawned when the container is missing. Otherwise the container is measured
/// once, the three boundaries are placed around it and each requested body strategy runs
/// in order.
pub fn initialize<'w, I>(
    commands: &mut Commands,
    windows: I,
    selector: &ContainerSelector,
    bodies: &[BodyKind],
    config: &SceneConfig,
    library: &OutlineLibrary,
) -> Result<SceneController, BootstrapError>
where
    I: IntoIterator<Item = (Entity, &'w Window, bool)>,
{
    let (container, window) =
        find_container(selector, windows).ok_or_else(|| BootstrapError::ContainerNotFound {
            selector: describe(selector),
        })?;
    let dims = ContainerDimensions::measure(window);
    let layout = BoundaryLayout::from(&config.boundaries);

    let boundaries = BoundaryHandles {
        ground: spawn_boundary(commands, &layout, Boundary::Ground, dims),
        left_wall: spawn_boundary(commands, &layout, Boundary::LeftWall, dims),
        right_wall: spawn_boundary(commands, &layout, Boundary::RightWall, dims),
    };
    let mut controller = SceneController::new(container, dims, layout, boundaries);
    for kind in bodies {
        spawn_body_kind(commands, &mut controller, *kind, config, library);
    }
    Ok(controller)
}

pub fn bootstrap_scene(
    mut commands: Commands,
    windows: Query<(Entity, &Window, Has<PrimaryWindow>)>,
    config: Res<SceneConfig>,
    library: Option<Res<OutlineLibrary>>,
) {
    let empty = OutlineLibrary::default();
    let library = library.as_deref().unwrap_or(&empty);
    match initialize(
        &mut commands,
        windows.iter(),
        &config.container,
        &config.startup_bodies,
        &config,
        library,
    ) {
        Ok(controller) => {
            let dims = controller.dimensions();
            info!(
                target: LOG_TARGET,
                width = dims.width,
                height = dims.height,
                bodies = controller.bodies_created(),
                "Scene ready"
            );
            if config.mouse_constraint.enabled {
                commands.insert_resource(MouseConstraint::from(&config.mouse_constraint));
            }
            commands.insert_resource(controller);
            commands.insert_resource(SceneStatus::Ready);
        }
        Err(e) => {
            debug!(target: LOG_TARGET, "{e}; scene stays inert");
            commands.insert_resource(SceneStatus::ContainerNotFound);
        }
    }
}
