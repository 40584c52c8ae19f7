use bevy::prelude::*;
use serde::Deserialize;
use std::{fs, path::Path};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{path}: read error: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{path}: parse error: {source}")]
    Parse {
        path: String,
        #[source]
        source: ron::error::SpannedError,
    },
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
    /// Automatically close the app after this many seconds. 0.0 (or omitted) = run indefinitely.
    #[serde(rename = "autoClose")]
    pub auto_close: f32,
    /// CSS selector of a pre-existing canvas to render into (wasm32 only).
    pub canvas: Option<String>,
    /// Keep the canvas sized to its parent element (wasm32 only).
    pub fit_canvas_to_parent: bool,
    /// Leave wheel / touch events to the page so scrolling over the canvas still works.
    pub allow_page_scroll: bool,
    pub transparent: bool,
}
impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
            title: "Drop Scene".into(),
            auto_close: 0.0,
            canvas: Some("#wb-canvas".into()),
            fit_canvas_to_parent: true,
            allow_page_scroll: true,
            transparent: false,
        }
    }
}

/// Which window hosts the scene. Written as `(title: None)` for the primary window or
/// `(title: Some("..."))` to pick a window by title.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq, Default)]
#[serde(from = "ContainerSection")]
pub enum ContainerSelector {
    #[default]
    Primary,
    Title(String),
}

// Layered loading goes through `ron::Value`, which drops enum variant names, so the
// selector is stored as a plain struct.
#[derive(Deserialize, Default)]
#[serde(default)]
struct ContainerSection {
    title: Option<String>,
}

impl From<ContainerSection> for ContainerSelector {
    fn from(section: ContainerSection) -> Self {
        match section.title {
            Some(title) => ContainerSelector::Title(title),
            None => ContainerSelector::Primary,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct BoundaryConfig {
    pub thickness: f32,
    /// Long-axis multiplier so a grown container never exposes a gap.
    pub oversize: f32,
}
impl Default for BoundaryConfig {
    fn default() -> Self {
        Self {
            thickness: 60.0,
            oversize: 5.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct GravityConfig {
    pub x: f32,
    pub y: f32,
}
impl Default for GravityConfig {
    fn default() -> Self {
        Self { x: 0.0, y: -980.0 }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PhysicsConfig {
    pub gravity: GravityConfig,
    pub pixels_per_meter: f32,
    /// Fixed simulation rate; rendering runs independently at frame rate.
    pub step_hz: f64,
}
impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: GravityConfig::default(),
            pixels_per_meter: 100.0,
            step_hz: 60.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct CircleConfig {
    pub radius: f32,
    pub friction: f32,
    /// Fraction of velocity lost per simulation step to air drag.
    pub air_friction: f32,
    pub restitution: f32,
    pub fill: String,
    pub stroke: String,
}
impl Default for CircleConfig {
    fn default() -> Self {
        Self {
            radius: 80.0,
            friction: 0.5,
            air_friction: 0.00001,
            restitution: 0.8,
            fill: "#F35e66".into(),
            stroke: "black".into(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct TextureConfig {
    /// Asset path of the image painted onto textured circles.
    pub path: String,
    pub scale: f32,
}
impl Default for TextureConfig {
    fn default() -> Self {
        Self {
            path: "textures/logo.png".into(),
            scale: 1.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct OutlineConfig {
    /// SVG document whose `svg > path` elements are traced into bodies.
    pub document: Option<String>,
    /// Extra inline path data traced after the document paths.
    pub paths: Vec<String>,
    /// Curve sampling distance in pixels; 0 selects the default of 15.
    pub sample_length: f32,
    /// Horizontal spacing between successive outline bodies.
    pub stride: f32,
    /// X position of the first outline body.
    pub offset: f32,
    pub friction: f32,
    pub air_friction: f32,
    pub restitution: f32,
    pub fill: String,
    pub stroke: String,
    pub line_width: f32,
}
impl Default for OutlineConfig {
    fn default() -> Self {
        Self {
            document: Some("assets/outlines/logo.svg".into()),
            paths: Vec::new(),
            sample_length: 0.0,
            stride: 100.0,
            offset: 100.0,
            friction: 0.1,
            air_friction: 0.01,
            restitution: 0.0,
            fill: "black".into(),
            stroke: "black".into(),
            line_width: 1.0,
        }
    }
}

/// Dynamic body strategies the scene can seed. Named by string in RON (`"Circle"`) for the
/// same reason as [`ContainerSelector`].
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(try_from = "String")]
pub enum BodyKind {
    Circle,
    TexturedCircle,
    Outlines,
}

impl TryFrom<String> for BodyKind {
    type Error = String;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        match name.as_str() {
            "Circle" => Ok(BodyKind::Circle),
            "TexturedCircle" => Ok(BodyKind::TexturedCircle),
            "Outlines" => Ok(BodyKind::Outlines),
            other => Err(format!(
                "unknown body kind '{other}' (expected Circle, TexturedCircle or Outlines)"
            )),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AddTriggerConfig {
    pub enabled: bool,
    /// Key name, e.g. "Space", "Enter", "KeyA" or "A".
    pub key: String,
    pub show_button: bool,
    pub body: BodyKind,
}
impl Default for AddTriggerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            key: "Space".into(),
            show_button: true,
            body: BodyKind::Circle,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct MouseConstraintConfig {
    pub enabled: bool,
    /// Fraction of the pointer offset closed per frame.
    pub stiffness: f32,
    /// Upper bound on the velocity the constraint may impose (0 = unbounded).
    pub max_speed: f32,
}
impl Default for MouseConstraintConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            stiffness: 0.2,
            max_speed: 4000.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct RenderConfig {
    pub background: String,
    pub show_angle_indicator: bool,
    pub debug_colliders: bool,
}
impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            background: "transparent".into(),
            show_angle_indicator: true,
            debug_colliders: false,
        }
    }
}

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct SceneConfig {
    pub window: WindowConfig,
    pub container: ContainerSelector,
    pub boundaries: BoundaryConfig,
    pub physics: PhysicsConfig,
    pub circle: CircleConfig,
    pub texture: TextureConfig,
    pub outlines: OutlineConfig,
    pub startup_bodies: Vec<BodyKind>,
    pub add_trigger: AddTriggerConfig,
    pub mouse_constraint: MouseConstraintConfig,
    pub render: RenderConfig,
}
impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            window: Default::default(),
            container: Default::default(),
            boundaries: Default::default(),
            physics: Default::default(),
            circle: Default::default(),
            texture: Default::default(),
            outlines: Default::default(),
            startup_bodies: vec![BodyKind::Outlines, BodyKind::Circle],
            add_trigger: Default::default(),
            mouse_constraint: Default::default(),
            render: Default::default(),
        }
    }
}

impl SceneConfig {
    pub fn from_ron_str(raw: &str) -> Result<Self, ron::error::SpannedError> {
        ron::from_str(raw)
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let data = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        ron::from_str(&data).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Load multiple config layers, later files overriding earlier ones (deep merge of maps).
    /// Missing files are skipped; returns (config, list_of_layer_paths_used, list_of_errors).
    pub fn load_layered<P, I>(paths: I) -> (Self, Vec<String>, Vec<String>)
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = P>,
    {
        use ron::value::Value;
        let mut merged: Option<Value> = None;
        let mut used = Vec::new();
        let mut errors = Vec::new();

        fn merge_value(base: &mut Value, overlay: Value) {
            match (base, overlay) {
                (Value::Map(bm), Value::Map(om)) => {
                    for (k, v) in om.into_iter() {
                        let existing = bm.iter_mut().find(|(ek, _)| **ek == k).map(|(_, ev)| ev);
                        if let Some(ev) = existing {
                            merge_value(ev, v);
                        } else {
                            bm.insert(k, v);
                        }
                    }
                }
                (b, o) => *b = o,
            }
        }

        for p in paths {
            let path_ref = p.as_ref();
            if !path_ref.exists() {
                continue;
            }
            match fs::read_to_string(path_ref) {
                Ok(txt) => match ron::from_str::<Value>(&txt) {
                    Ok(val) => {
                        if let Some(cur) = &mut merged {
                            merge_value(cur, val);
                        } else {
                            merged = Some(val);
                        }
                        used.push(path_ref.display().to_string());
                    }
                    Err(e) => errors.push(format!("{}: parse error: {e}", path_ref.display())),
                },
                Err(e) => errors.push(format!("{}: read error: {e}", path_ref.display())),
            }
        }

        match merged {
            Some(val) => match val.into_rust::<SceneConfig>() {
                Ok(cfg) => (cfg, used, errors),
                Err(e) => {
                    errors.push(format!(
                        "failed to deserialize merged config; using defaults: {e}"
                    ));
                    (SceneConfig::default(), used, errors)
                }
            },
            None => (SceneConfig::default(), used, errors),
        }
    }

    /// Validate the configuration returning a list of human‑readable warning strings.
    /// These represent suspicious / potentially unintended values but are not hard errors.
    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            w.push("window dimensions must be > 0".into());
        }
        if self.window.auto_close < 0.0 {
            w.push(format!(
                "window.autoClose {} negative -> treated as disabled (should be >= 0)",
                self.window.auto_close
            ));
        }
        if let ContainerSelector::Title(title) = &self.container {
            if title.is_empty() {
                w.push("container title selector is empty; no window will match".into());
            }
        }
        if self.boundaries.thickness <= 0.0 {
            w.push(format!(
                "boundaries.thickness {} must be > 0",
                self.boundaries.thickness
            ));
        }
        if self.boundaries.oversize < 1.0 {
            w.push(format!(
                "boundaries.oversize {} < 1 leaves gaps once the container grows",
                self.boundaries.oversize
            ));
        }
        if self.physics.gravity.y > 0.0 {
            w.push(format!(
                "physics.gravity.y is positive ({}); bodies will fall upward",
                self.physics.gravity.y
            ));
        }
        if self.physics.pixels_per_meter <= 0.0 {
            w.push("physics.pixels_per_meter must be > 0".into());
        }
        if self.physics.step_hz <= 0.0 {
            w.push("physics.step_hz must be > 0".into());
        }
        if self.circle.radius <= 0.0 {
            w.push("circle.radius must be > 0".into());
        }
        if !(0.0..=1.0).contains(&self.circle.air_friction) {
            w.push(format!(
                "circle.air_friction {} outside 0..1",
                self.circle.air_friction
            ));
        }
        if !(0.0..=1.5).contains(&self.circle.restitution) {
            w.push(format!(
                "circle.restitution {} outside recommended 0..1.5",
                self.circle.restitution
            ));
        }
        if self.outlines.stride <= 0.0 {
            w.push("outlines.stride must be > 0 or outline bodies start overlapped".into());
        }
        if self.outlines.sample_length < 0.0 {
            w.push("outlines.sample_length negative -> default sampling used".into());
        }
        if self.startup_bodies.is_empty() {
            w.push("startup_bodies is empty; only the add trigger will create bodies".into());
        }
        if !(0.0..=1.0).contains(&self.mouse_constraint.stiffness) {
            w.push(format!(
                "mouse_constraint.stiffness {} outside 0..1",
                self.mouse_constraint.stiffness
            ));
        }
        if self.add_trigger.enabled && crate::gameplay::spawn::add_trigger::parse_key_name(&self.add_trigger.key).is_none() {
            w.push(format!("add_trigger.key '{}' not recognized", self.add_trigger.key));
        }
        for (label, value) in [
            ("circle.fill", &self.circle.fill),
            ("circle.stroke", &self.circle.stroke),
            ("outlines.fill", &self.outlines.fill),
            ("outlines.stroke", &self.outlines.stroke),
            ("render.background", &self.render.background),
        ] {
            if parse_color(value).is_none() {
                w.push(format!("{label} '{value}' is not a recognized color"));
            }
        }
        w
    }
}

/// Parse a CSS-like color: `#rgb`, `#rrggbb`, `#rrggbbaa` or a handful of names.
pub fn parse_color(raw: &str) -> Option<Color> {
    let trimmed = raw.trim();
    match trimmed.to_ascii_lowercase().as_str() {
        "transparent" | "none" => return Some(Color::NONE),
        "black" => return Some(Color::BLACK),
        "white" => return Some(Color::WHITE),
        _ => {}
    }
    if !trimmed.starts_with('#') {
        return None;
    }
    Srgba::hex(trimmed).ok().map(Color::Srgba)
}
