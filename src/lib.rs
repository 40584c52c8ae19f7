pub mod app;
pub mod core;
pub mod gameplay;
pub mod geometry;
pub mod interaction;
pub mod physics;
pub mod rendering;
pub mod scene;

// Curated re-exports
pub use app::scene::{SceneCorePlugin, SceneInteractionPlugin, ScenePlugin};
pub use crate::core::components::{BodyVisual, Boundary, DynamicBody};
pub use crate::core::config::{SceneConfig, WindowConfig};
pub use scene::{initialize, BootstrapError, SceneController, SceneStatus};
