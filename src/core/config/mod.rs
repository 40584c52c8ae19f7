pub mod config;

pub use config::{
    parse_color, AddTriggerConfig, BodyKind, BoundaryConfig, CircleConfig, ConfigError,
    ContainerSelector, GravityConfig, MouseConstraintConfig, OutlineConfig, PhysicsConfig,
    RenderConfig, SceneConfig, TextureConfig, WindowConfig,
};
