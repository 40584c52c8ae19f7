pub mod bootstrap;
pub mod boundary;
pub mod container;
pub mod controller;
pub mod resize;

pub use bootstrap::{bootstrap_scene, initialize};
pub use controller::{BootstrapError, SceneController, SceneStatus};
