use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::core::components::{BodyVisual, DynamicBody, GrabRadius};
use crate::core::config::{parse_color, BodyKind, SceneConfig};
use crate::gameplay::spawn::outline::{create_outline_bodies, OutlineLibrary};
use crate::scene::container::to_world;
use crate::scene::controller::SceneController;

const LOG_TARGET: &str = "drop_scene::spawn";

/// Request for new dynamic bodies. Circle variants add exactly one body, `Outlines` adds one
/// body per traced outline.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnDynamicBody {
    pub kind: BodyKind,
}

/// The single-body strategies: same physics, different paint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CircleKind {
    Plain,
    Textured,
}

impl From<CircleKind> for BodyKind {
    fn from(kind: CircleKind) -> Self {
        match kind {
            CircleKind::Plain => BodyKind::Circle,
            CircleKind::Textured => BodyKind::TexturedCircle,
        }
    }
}

/// Add one circle (plain or textured) at the controller's spawn point: horizontally centered
/// on the current width, at the top edge.
pub fn create_dynamic_body(
    commands: &mut Commands,
    controller: &mut SceneController,
    kind: CircleKind,
    config: &SceneConfig,
) -> Entity {
    let c = &config.circle;
    let world = to_world(controller.spawn_point());
    let visual = match kind {
        CircleKind::Textured => BodyVisual::Texture {
            path: config.texture.path.clone(),
            radius: c.radius,
            scale: config.texture.scale,
        },
        CircleKind::Plain => BodyVisual::Circle {
            radius: c.radius,
            fill: parse_color(&c.fill).unwrap_or(Color::WHITE),
            stroke: parse_color(&c.stroke).unwrap_or(Color::BLACK),
        },
    };
    // air friction is a per-step fraction at 60 Hz
    let damping = c.air_friction * 60.0;
    let count = controller.record_body();
    let entity = commands
        .spawn((
            Name::new(format!("Circle{count}")),
            DynamicBody { kind: kind.into() },
            GrabRadius(c.radius),
            visual,
            Transform::from_translation(world.extend(0.0)),
            RigidBody::Dynamic,
            Collider::ball(c.radius),
            Restitution {
                coefficient: c.restitution,
                combine_rule: CoefficientCombineRule::Max,
            },
            Friction {
                coefficient: c.friction,
                combine_rule: CoefficientCombineRule::Min,
            },
            Damping {
                linear_damping: damping,
                angular_damping: damping,
            },
            Velocity::zero(),
        ))
        .id();
    debug!(target: LOG_TARGET, ?kind, ?entity, x = world.x, "dynamic body added");
    entity
}

/// Dispatch on the body strategy.
pub fn spawn_body_kind(
    commands: &mut Commands,
    controller: &mut SceneController,
    kind: BodyKind,
    config: &SceneConfig,
    library: &OutlineLibrary,
) -> Vec<Entity> {
    match kind {
        BodyKind::Circle => vec![create_dynamic_body(commands, controller, CircleKind::Plain, config)],
        BodyKind::TexturedCircle => {
            vec![create_dynamic_body(commands, controller, CircleKind::Textured, config)]
        }
        BodyKind::Outlines => create_outline_bodies(commands, controller, library, config),
    }
}

pub fn create_dynamic_bodies(
    mut commands: Commands,
    mut requests: EventReader<SpawnDynamicBody>,
    controller: Option<ResMut<SceneController>>,
    config: Res<SceneConfig>,
    library: Option<Res<OutlineLibrary>>,
) {
    let Some(mut controller) = controller else {
        if !requests.is_empty() {
            debug!(target: LOG_TARGET, "no scene; dropping {} spawn request(s)", requests.len());
            requests.clear();
        }
        return;
    };
    let empty = OutlineLibrary::default();
    let library = library.as_deref().unwrap_or(&empty);
    for request in requests.read() {
        spawn_body_kind(&mut commands, &mut controller, request.kind, &config, library);
    }
}
