//! Unattended runs: `window.autoClose` seconds after startup the app exits on its own.

use bevy::prelude::*;

use crate::core::config::SceneConfig;

const LOG_TARGET: &str = "drop_scene::session";

/// Time left before the session ends. Absent when `window.autoClose` is 0.
#[derive(Resource, Deref, DerefMut)]
pub struct SessionDeadline(Timer);

pub struct AutoClosePlugin;

impl Plugin for AutoClosePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, arm_deadline)
            .add_systems(Update, end_session_at_deadline);
    }
}

fn arm_deadline(mut commands: Commands, cfg: Res<SceneConfig>) {
    let secs = cfg.window.auto_close;
    if secs <= 0.0 {
        return;
    }
    info!(target: LOG_TARGET, seconds = secs, "session ends in {secs}s (window.autoClose)");
    commands.insert_resource(SessionDeadline(Timer::from_seconds(secs, TimerMode::Once)));
}

fn end_session_at_deadline(
    mut commands: Commands,
    time: Res<Time>,
    deadline: Option<ResMut<SessionDeadline>>,
    mut exit: EventWriter<AppExit>,
) {
    let Some(mut deadline) = deadline else {
        return;
    };
    if !deadline.tick(time.delta()).just_finished() {
        return;
    }
    info!(target: LOG_TARGET, "session deadline reached, exiting");
    exit.write(AppExit::Success);
    commands.remove_resource::<SessionDeadline>();
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::time::TimeUpdateStrategy;
    use std::time::Duration;

    fn app_with(auto_close: f32) -> App {
        let mut cfg = SceneConfig::default();
        cfg.window.auto_close = auto_close;
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(100)))
            .insert_resource(cfg)
            .add_plugins(AutoClosePlugin);
        app
    }

    #[test]
    fn exits_once_timer_elapses() {
        let mut app = app_with(0.25);
        let exited = (0..10).any(|_| {
            app.update();
            app.should_exit().is_some()
        });
        assert!(exited);
        app.update();
        assert!(app.world().get_resource::<SessionDeadline>().is_none());
    }

    #[test]
    fn zero_disables() {
        let mut app = app_with(0.0);
        for _ in 0..5 {
            app.update();
        }
        assert!(app.world().get_resource::<SessionDeadline>().is_none());
        assert!(app.should_exit().is_none());
    }
}
