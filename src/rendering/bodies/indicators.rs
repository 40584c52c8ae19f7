use bevy::color::Alpha;
use bevy::prelude::*;

use crate::core::components::{BodyVisual, DynamicBody};
use crate::core::config::SceneConfig;

/// Outline strokes and, when enabled, the angle indicator of every dynamic body.
pub fn draw_body_strokes(
    mut gizmos: Gizmos,
    bodies: Query<(&Transform, &BodyVisual), With<DynamicBody>>,
    config: Res<SceneConfig>,
) {
    let show_angle = config.render.show_angle_indicator;
    for (tf, visual) in bodies.iter() {
        let center = tf.translation.truncate();
        let rotation = tf.rotation;
        let to_world = |p: Vec2| center + rotation.mul_vec3(p.extend(0.0)).truncate();
        match visual {
            BodyVisual::Circle { radius, stroke, .. } => {
                if !stroke.is_fully_transparent() {
                    gizmos.circle_2d(center, *radius, *stroke);
                }
                if show_angle {
                    gizmos.line_2d(center, to_world(Vec2::X * *radius), *stroke);
                }
            }
            BodyVisual::Texture { radius, scale, .. } => {
                if show_angle {
                    gizmos.line_2d(center, to_world(Vec2::X * radius * scale), Color::BLACK);
                }
            }
            BodyVisual::Outline { points, stroke, .. } => {
                if points.is_empty() {
                    continue;
                }
                if !stroke.is_fully_transparent() {
                    let closed = points.iter().chain(points.first()).map(|p| to_world(*p));
                    gizmos.linestrip_2d(closed, *stroke);
                }
                if show_angle {
                    let reach = points.iter().map(|p| p.length()).fold(0.0, f32::max);
                    gizmos.line_2d(center, to_world(Vec2::X * reach), *stroke);
                }
            }
        }
    }
}

/// Stroke width for every gizmo line, taken from the outline settings.
pub fn configure_gizmos(mut store: ResMut<GizmoConfigStore>, config: Res<SceneConfig>) {
    let (gizmo_cfg, _) = store.config_mut::<DefaultGizmoConfigGroup>();
    gizmo_cfg.line.width = config.outlines.line_width.max(1.0);
}
