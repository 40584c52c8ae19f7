//! Central system ordering labels to make the update sequence explicit.
//! Stages (high-level):
//! 1. Resize (re-measure the container, move size-dependent boundaries)
//! 2. Spawn (bodies requested by the add trigger)
//! 3. Interaction (mouse constraint drives the grabbed body)
//! 4. Rapier step (fixed schedule, handled by the plugin)
//! 5. Rendering (implicit)
use bevy::prelude::*;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum SceneSet {
    Resize,
    Spawn,
    Interaction,
}
