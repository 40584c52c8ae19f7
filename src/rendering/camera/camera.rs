use bevy::prelude::*;
use bevy::render::camera::RenderTarget;
use bevy::window::WindowRef;

use crate::scene::container::camera_center;
use crate::scene::controller::SceneController;

#[derive(Component, Debug)]
pub struct SceneCamera;

/// Bevy 0.16+: spawn Camera2d directly; required components supply the rest. The camera
/// targets the container window and is centered on it. Only runs once the scene is ready.
pub fn spawn_camera(mut commands: Commands, controller: Res<SceneController>) {
    let center = camera_center(controller.dimensions());
    commands.spawn((
        Camera2d,
        Camera {
            target: RenderTarget::Window(WindowRef::Entity(controller.container())),
            ..default()
        },
        Transform::from_translation(center.extend(0.0)),
        SceneCamera,
    ));
}

/// Keep container (0, 0) at the top-left corner of the surface after a resize.
pub fn follow_container(
    controller: Option<Res<SceneController>>,
    mut cameras: Query<&mut Transform, With<SceneCamera>>,
) {
    let Some(controller) = controller else {
        return;
    };
    if !controller.is_changed() {
        return;
    }
    let center = camera_center(controller.dimensions());
    for mut tf in cameras.iter_mut() {
        tf.translation.x = center.x;
        tf.translation.y = center.y;
    }
}
