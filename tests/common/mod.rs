#![allow(dead_code)]

use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowResized, WindowResolution};

use drop_scene::core::config::SceneConfig;
use drop_scene::SceneCorePlugin;

/// Config with no outline document so tests don't depend on the asset tree.
pub fn test_config() -> SceneConfig {
    let mut cfg = SceneConfig::default();
    cfg.outlines.document = None;
    cfg.startup_bodies.clear();
    cfg
}

pub fn window(width: f32, height: f32, title: &str) -> Window {
    Window {
        title: title.into(),
        resolution: WindowResolution::new(width, height),
        ..default()
    }
}

/// Headless app with the core scene plugin and an 800x600 primary window.
pub fn headless_app(cfg: SceneConfig) -> (App, Entity) {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins).insert_resource(cfg);
    let win = app
        .world_mut()
        .spawn((window(800.0, 600.0, "scene"), PrimaryWindow))
        .id();
    app.add_plugins(SceneCorePlugin);
    (app, win)
}

pub fn resize(app: &mut App, win: Entity, width: f32, height: f32) {
    if let Some(mut window) = app.world_mut().get_mut::<Window>(win) {
        window.resolution.set(width, height);
    }
    app.world_mut().send_event(WindowResized {
        window: win,
        width,
        height,
    });
    app.update();
}

pub fn boundary_position(app: &mut App, which: drop_scene::Boundary) -> Vec2 {
    let mut q = app
        .world_mut()
        .query::<(&drop_scene::Boundary, &Transform)>();
    q.iter(app.world())
        .find(|(b, _)| **b == which)
        .map(|(_, tf)| tf.translation.truncate())
        .expect("boundary spawned")
}

pub fn dynamic_bodies(app: &mut App) -> Vec<Vec2> {
    let mut q = app
        .world_mut()
        .query_filtered::<&Transform, With<drop_scene::DynamicBody>>();
    q.iter(app.world())
        .map(|tf| tf.translation.truncate())
        .collect()
}
