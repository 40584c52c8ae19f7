// This file is part of Drop Scene.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::prelude::*;
use bevy::window::WindowResized;

use crate::core::config::{parse_color, SceneConfig};
use crate::core::system::system_order::SceneSet;
use crate::gameplay::spawn::add_trigger::{add_on_button, add_on_key, spawn_add_button};
use crate::gameplay::spawn::outline::load_outline_library;
use crate::gameplay::spawn::spawn::{create_dynamic_bodies, SpawnDynamicBody};
use crate::interaction::mouse_constraint::{drive_grabbed_body, grab_under_pointer, track_pointer};
use crate::interaction::session::auto_close::AutoClosePlugin;
use crate::physics::rapier::rapier_physics::PhysicsSetupPlugin;
use crate::rendering::bodies::indicators::{configure_gizmos, draw_body_strokes};
use crate::rendering::bodies::visuals::attach_body_visuals;
use crate::rendering::camera::camera::{follow_container, spawn_camera};
use crate::scene::bootstrap::bootstrap_scene;
use crate::scene::controller::SceneStatus;
use crate::scene::resize::handle_resize;

/// Bootstrap, resize handling and body creation. Needs no renderer, so headless apps
/// (`MinimalPlugins` plus a hand-made window) can run it.
pub struct SceneCorePlugin;

impl Plugin for SceneCorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SceneConfig>()
            .add_event::<SpawnDynamicBody>()
            .add_event::<WindowResized>()
            .configure_sets(
                Update,
                (SceneSet::Resize, SceneSet::Spawn, SceneSet::Interaction).chain(),
            )
            .add_systems(PreStartup, load_outline_library)
            .add_systems(Startup, bootstrap_scene)
            .add_systems(
                Update,
                (
                    handle_resize.in_set(SceneSet::Resize),
                    create_dynamic_bodies.in_set(SceneSet::Spawn),
                ),
            );
    }
}

/// Add trigger (key + button) and pointer drag.
pub struct SceneInteractionPlugin;

impl Plugin for SceneInteractionPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Startup,
            spawn_add_button
                .after(bootstrap_scene)
                .run_if(resource_exists_and_equals(SceneStatus::Ready)),
        )
        .add_systems(
            Update,
            (
                (add_on_key, add_on_button).before(SceneSet::Spawn),
                (track_pointer, grab_under_pointer)
                    .chain()
                    .in_set(SceneSet::Interaction),
            ),
        )
        .add_systems(FixedUpdate, drive_grabbed_body);
    }
}

pub struct SceneRenderPlugin;

impl Plugin for SceneRenderPlugin {
    fn build(&self, app: &mut App) {
        let background = app
            .world()
            .get_resource::<SceneConfig>()
            .and_then(|cfg| parse_color(&cfg.render.background))
            .unwrap_or(Color::NONE);
        app.insert_resource(ClearColor(background))
            .add_systems(
                Startup,
                (
                    spawn_camera
                        .after(bootstrap_scene)
                        .run_if(resource_exists_and_equals(SceneStatus::Ready)),
                    configure_gizmos,
                ),
            )
            .add_systems(
                Update,
                (
                    follow_container.after(SceneSet::Resize),
                    attach_body_visuals,
                    draw_body_strokes,
                ),
            );
    }
}

fn log_config_warnings(cfg: Res<SceneConfig>) {
    for w in cfg.validate() {
        warn!("CONFIG WARNING: {w}");
    }
}

pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            SceneCorePlugin,
            PhysicsSetupPlugin,
            SceneInteractionPlugin,
            SceneRenderPlugin,
            AutoClosePlugin,
        ))
        .add_systems(PreStartup, log_config_warnings);
    }
}
