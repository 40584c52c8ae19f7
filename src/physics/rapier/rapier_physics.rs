use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::core::config::SceneConfig;

const LOG_TARGET: &str = "drop_scene::physics";

/// Rapier in the fixed-timestep schedule, so stepping runs independently of the frame rate.
pub struct PhysicsSetupPlugin;

impl Plugin for PhysicsSetupPlugin {
    fn build(&self, app: &mut App) {
        let cfg = app
            .world()
            .get_resource::<SceneConfig>()
            .cloned()
            .unwrap_or_default();
        let step_hz = if cfg.physics.step_hz > 0.0 {
            cfg.physics.step_hz
        } else {
            60.0
        };
        app.insert_resource(Time::<Fixed>::from_hz(step_hz))
            .add_plugins(
                RapierPhysicsPlugin::<NoUserData>::pixels_per_meter(
                    cfg.physics.pixels_per_meter.max(f32::EPSILON),
                )
                .in_fixed_schedule(),
            )
            .add_systems(Update, (configure_gravity, toggle_pause));

        if cfg.render.debug_colliders {
            app.add_plugins(RapierDebugRenderPlugin::default());
        }
    }
}

/// Gravity in pixels / s^2, applied once the Rapier context exists.
fn configure_gravity(
    mut rapier_cfg: Query<&mut RapierConfiguration, Added<RapierConfiguration>>,
    cfg: Res<SceneConfig>,
) {
    for mut rc in rapier_cfg.iter_mut() {
        rc.gravity = Vect::new(cfg.physics.gravity.x, cfg.physics.gravity.y);
        debug!(target: LOG_TARGET, gravity = ?rc.gravity, "gravity configured");
    }
}

fn toggle_pause(
    keys: Option<Res<ButtonInput<KeyCode>>>,
    mut rapier_cfg: Query<&mut RapierConfiguration>,
) {
    let Some(keys) = keys else {
        return;
    };
    if !keys.just_pressed(KeyCode::KeyP) {
        return;
    }
    if let Some(mut cfg) = rapier_cfg.iter_mut().next() {
        cfg.physics_pipeline_active = !cfg.physics_pipeline_active;
        info!(
            target: LOG_TARGET,
            "Physics {}",
            if cfg.physics_pipeline_active { "resumed" } else { "paused" }
        );
    }
}
