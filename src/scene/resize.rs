use bevy::prelude::*;
use bevy::window::WindowResized;

use crate::scene::container::ContainerDimensions;
use crate::scene::controller::SceneController;

const LOG_TARGET: &str = "drop_scene::resize";

/// Re-measure the container after it resized and move the ground and right wall with it.
/// Resizes of other windows are ignored; only the last event of a frame matters.
pub fn handle_resize(
    mut resized: EventReader<WindowResized>,
    windows: Query<&Window>,
    controller: Option<ResMut<SceneController>>,
    mut transforms: Query<&mut Transform>,
) {
    let Some(mut controller) = controller else {
        resized.clear();
        return;
    };
    let container = controller.container();
    let Some(last) = resized.read().filter(|e| e.window == container).last() else {
        return;
    };
    let dims = match windows.get(container) {
        Ok(window) => ContainerDimensions::measure(window),
        Err(_) => ContainerDimensions::new(last.width, last.height),
    };

    for (_, entity, pos) in controller.apply_resize(dims) {
        if let Ok(mut tf) = transforms.get_mut(entity) {
            tf.translation.x = pos.x;
            tf.translation.y = pos.y;
        }
    }
    debug!(target: LOG_TARGET, width = dims.width, height = dims.height, "container resized");
}
