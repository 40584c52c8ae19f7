//! Pointer drag: a spring-like link between the pointer and the body under it.
//!
//! Grab and release follow the left mouse button or the first touch. While a body is held,
//! every fixed step closes `stiffness` of the gap between the pointer and the grab point by
//! setting the body's velocity. Scroll-wheel input is never read, so the page (or any other
//! consumer) keeps it.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::core::components::{DynamicBody, GrabRadius};
use crate::core::config::MouseConstraintConfig;
use crate::scene::controller::SceneController;

const LOG_TARGET: &str = "drop_scene::mouse";

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct MouseConstraint {
    pub stiffness: f32,
    pub max_speed: f32,
    /// Pointer position in world space, `None` while no pointer is over the container.
    pub pointer: Option<Vec2>,
    pub grabbed: Option<Entity>,
    /// Grab point relative to the body center, in the body's local frame.
    pub local_anchor: Vec2,
}

impl From<&MouseConstraintConfig> for MouseConstraint {
    fn from(cfg: &MouseConstraintConfig) -> Self {
        Self {
            stiffness: cfg.stiffness.clamp(0.0, 1.0),
            max_speed: cfg.max_speed,
            pointer: None,
            grabbed: None,
            local_anchor: Vec2::ZERO,
        }
    }
}

impl MouseConstraint {
    pub fn grab(&mut self, entity: Entity, body: &Transform, point: Vec2) {
        let offset = point - body.translation.truncate();
        self.local_anchor = body.rotation.inverse().mul_vec3(offset.extend(0.0)).truncate();
        self.grabbed = Some(entity);
    }

    pub fn release(&mut self) {
        self.grabbed = None;
        self.local_anchor = Vec2::ZERO;
    }
}

/// Nearest body whose grab radius contains `point`.
pub fn pick_body<I>(point: Vec2, bodies: I) -> Option<Entity>
where
    I: IntoIterator<Item = (Entity, Vec2, f32)>,
{
    bodies
        .into_iter()
        .filter_map(|(entity, center, radius)| {
            let d2 = center.distance_squared(point);
            (d2 <= radius * radius).then_some((entity, d2))
        })
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(entity, _)| entity)
}

/// Velocity that closes `stiffness` of `gap` within one step of `dt` seconds.
pub fn spring_velocity(gap: Vec2, stiffness: f32, dt: f32, max_speed: f32) -> Vec2 {
    if dt <= 0.0 {
        return Vec2::ZERO;
    }
    let v = gap * stiffness / dt;
    if max_speed > 0.0 {
        v.clamp_length_max(max_speed)
    } else {
        v
    }
}

/// Screen position of the first touch, or of the cursor when nothing touches the window.
fn pointer_screen_pos(window: &Window, touches: &Touches) -> Option<Vec2> {
    match touches.iter().next() {
        Some(touch) => Some(touch.position()),
        None => window.cursor_position(),
    }
}

/// Follow the pointer over the container window, in world space.
pub fn track_pointer(
    touches: Res<Touches>,
    windows: Query<&Window>,
    camera_q: Query<(&Camera, &GlobalTransform)>,
    controller: Option<Res<SceneController>>,
    constraint: Option<ResMut<MouseConstraint>>,
) {
    let (Some(controller), Some(mut constraint)) = (controller, constraint) else {
        return;
    };
    let screen = windows
        .get(controller.container())
        .ok()
        .and_then(|window| pointer_screen_pos(window, &touches));
    constraint.pointer = screen.and_then(|screen| {
        let (camera, cam_tf) = camera_q.iter().next()?;
        camera.viewport_to_world_2d(cam_tf, screen).ok()
    });
}

/// Grab the body under the pointer on press, let go on release.
pub fn grab_under_pointer(
    buttons: Res<ButtonInput<MouseButton>>,
    touches: Res<Touches>,
    constraint: Option<ResMut<MouseConstraint>>,
    bodies: Query<(Entity, &Transform, &GrabRadius), With<DynamicBody>>,
) {
    let Some(mut constraint) = constraint else {
        return;
    };
    let released =
        buttons.just_released(MouseButton::Left) || touches.iter_just_released().next().is_some();
    if released && constraint.grabbed.is_some() {
        trace!(target: LOG_TARGET, "release");
        constraint.release();
    }
    let pressed =
        buttons.just_pressed(MouseButton::Left) || touches.iter_just_pressed().next().is_some();
    if !pressed || constraint.grabbed.is_some() {
        return;
    }
    let Some(point) = constraint.pointer else {
        return;
    };
    let candidates = bodies
        .iter()
        .map(|(e, tf, r)| (e, tf.translation.truncate(), r.0));
    if let Some(entity) = pick_body(point, candidates) {
        if let Ok((_, tf, _)) = bodies.get(entity) {
            constraint.grab(entity, tf, point);
            trace!(target: LOG_TARGET, ?entity, "grab");
        }
    }
}

/// Pull the grabbed body toward the pointer. Runs in the fixed schedule next to the solver.
pub fn drive_grabbed_body(
    time: Res<Time>,
    constraint: Option<ResMut<MouseConstraint>>,
    mut bodies: Query<(&Transform, &mut Velocity), With<DynamicBody>>,
) {
    let Some(mut constraint) = constraint else {
        return;
    };
    let (Some(entity), Some(pointer)) = (constraint.grabbed, constraint.pointer) else {
        return;
    };
    let Ok((tf, mut vel)) = bodies.get_mut(entity) else {
        // body is gone
        constraint.release();
        return;
    };
    let dt = time.delta_secs();
    let center = tf.translation.truncate();
    let arm = tf.rotation.mul_vec3(constraint.local_anchor.extend(0.0)).truncate();
    let gap = pointer - (center + arm);
    vel.linvel = spring_velocity(gap, constraint.stiffness, dt, constraint.max_speed);

    let arm_len2 = arm.length_squared();
    if arm_len2 > 1.0 {
        // rotate the arm toward the pointer as well
        vel.angvel = arm.perp_dot(gap) / arm_len2 * constraint.stiffness / dt.max(f32::EPSILON);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::time::TimeUpdateStrategy;
    use std::time::Duration;

    #[test]
    fn pick_prefers_nearest_inside_radius() {
        let a = Entity::from_raw(1);
        let b = Entity::from_raw(2);
        let c = Entity::from_raw(3);
        let bodies = [
            (a, Vec2::new(0.0, 0.0), 50.0),
            (b, Vec2::new(30.0, 0.0), 50.0),
            (c, Vec2::new(500.0, 0.0), 1000.0),
        ];
        assert_eq!(pick_body(Vec2::new(20.0, 0.0), bodies), Some(b));
        assert_eq!(pick_body(Vec2::new(-40.0, 0.0), bodies), Some(a));
        assert_eq!(pick_body(Vec2::new(-40.0, 0.0), bodies[..2].iter().copied()), Some(a));
        assert_eq!(pick_body(Vec2::new(0.0, 900.0), bodies[..2].iter().copied()), None);
    }

    #[test]
    fn spring_closes_fraction_of_gap_per_step() {
        let v = spring_velocity(Vec2::new(60.0, 0.0), 0.2, 1.0 / 60.0, 0.0);
        assert!((v.x - 720.0).abs() < 1e-3);
        let capped = spring_velocity(Vec2::new(6000.0, 0.0), 0.2, 1.0 / 60.0, 4000.0);
        assert!((capped.length() - 4000.0).abs() < 1e-2);
        assert_eq!(spring_velocity(Vec2::ONE, 0.2, 0.0, 0.0), Vec2::ZERO);
    }

    #[test]
    fn grab_anchor_is_in_body_frame() {
        let mut mc = MouseConstraint::from(&MouseConstraintConfig::default());
        let body = Transform::from_xyz(100.0, 0.0, 0.0)
            .with_rotation(Quat::from_rotation_z(std::f32::consts::FRAC_PI_2));
        mc.grab(Entity::from_raw(7), &body, Vec2::new(100.0, 10.0));
        assert_eq!(mc.grabbed, Some(Entity::from_raw(7)));
        assert!((mc.local_anchor - Vec2::new(10.0, 0.0)).length() < 1e-4);
        mc.release();
        assert!(mc.grabbed.is_none());
    }

    #[test]
    fn cursor_is_the_pointer_without_touches() {
        let mut window = Window::default();
        assert_eq!(pointer_screen_pos(&window, &Touches::default()), None);
        window.set_cursor_position(Some(Vec2::new(120.0, 40.0)));
        let pos = pointer_screen_pos(&window, &Touches::default()).expect("cursor");
        assert!((pos - Vec2::new(120.0, 40.0)).length() < 1e-3);
    }

    fn grab_app() -> (App, Entity) {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .init_resource::<ButtonInput<MouseButton>>()
            .init_resource::<Touches>()
            .insert_resource(MouseConstraint::from(&MouseConstraintConfig::default()))
            .add_systems(Update, grab_under_pointer);
        let body = app
            .world_mut()
            .spawn((
                DynamicBody {
                    kind: crate::core::config::BodyKind::Circle,
                },
                Transform::from_xyz(400.0, -100.0, 0.0),
                GrabRadius(80.0),
            ))
            .id();
        (app, body)
    }

    fn point_at(app: &mut App, p: Vec2) {
        app.world_mut().resource_mut::<MouseConstraint>().pointer = Some(p);
    }

    fn left(app: &mut App, down: bool) {
        let mut buttons = app.world_mut().resource_mut::<ButtonInput<MouseButton>>();
        buttons.clear();
        if down {
            buttons.press(MouseButton::Left);
        } else {
            buttons.release(MouseButton::Left);
        }
    }

    #[test]
    fn press_over_body_grabs_and_release_lets_go() {
        let (mut app, body) = grab_app();
        point_at(&mut app, Vec2::new(430.0, -90.0));
        left(&mut app, true);
        app.update();
        let mc = app.world().resource::<MouseConstraint>();
        assert_eq!(mc.grabbed, Some(body));
        assert!((mc.local_anchor - Vec2::new(30.0, 10.0)).length() < 1e-4);

        left(&mut app, false);
        app.update();
        assert_eq!(app.world().resource::<MouseConstraint>().grabbed, None);
    }

    #[test]
    fn press_over_empty_space_grabs_nothing() {
        let (mut app, _) = grab_app();
        point_at(&mut app, Vec2::new(100.0, -500.0));
        left(&mut app, true);
        app.update();
        assert_eq!(app.world().resource::<MouseConstraint>().grabbed, None);
    }

    #[test]
    fn press_without_pointer_grabs_nothing() {
        let (mut app, _) = grab_app();
        left(&mut app, true);
        app.update();
        assert_eq!(app.world().resource::<MouseConstraint>().grabbed, None);
    }

    #[test]
    fn drive_moves_body_toward_pointer() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(16)));
        let body = app
            .world_mut()
            .spawn((
                DynamicBody {
                    kind: crate::core::config::BodyKind::Circle,
                },
                Transform::default(),
                Velocity::zero(),
            ))
            .id();
        let mut mc = MouseConstraint::from(&MouseConstraintConfig::default());
        mc.grabbed = Some(body);
        mc.pointer = Some(Vec2::new(0.0, 50.0));
        app.insert_resource(mc);
        app.add_systems(Update, drive_grabbed_body);
        // first frame has a zero delta
        app.update();
        app.update();
        let vel = app.world().get::<Velocity>(body).expect("velocity");
        assert_eq!(vel.linvel.x, 0.0);
        assert!(vel.linvel.y > 0.0);
    }
}
