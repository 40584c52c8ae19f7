use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::core::components::{BodyVisual, DynamicBody, GrabRadius};
use crate::core::config::{parse_color, BodyKind, OutlineConfig, SceneConfig};
use crate::geometry::{direct_child_paths, Outline};
use crate::scene::container::to_world;
use crate::scene::controller::SceneController;

const LOG_TARGET: &str = "drop_scene::outline";

#[cfg(target_arch = "wasm32")]
const EMBEDDED_DOCUMENT: &str = include_str!("../../../assets/outlines/logo.svg");

/// Traced outlines, in spawn order: document paths first, then inline path data.
#[derive(Resource, Debug, Clone, Default)]
pub struct OutlineLibrary {
    pub outlines: Vec<Outline>,
}

impl OutlineLibrary {
    /// Trace every source named by the config. Paths that fail to trace are skipped.
    pub fn from_config(cfg: &OutlineConfig) -> Self {
        let mut sources: Vec<(String, String)> = Vec::new();
        if let Some(document) = &cfg.document {
            match read_document(document) {
                Ok(svg) => match direct_child_paths(&svg) {
                    Ok(paths) => {
                        if paths.is_empty() {
                            warn!(target: LOG_TARGET, "{document}: no svg > path elements");
                        }
                        sources.extend(
                            paths
                                .into_iter()
                                .enumerate()
                                .map(|(i, d)| (format!("{document}#{i}"), d)),
                        );
                    }
                    Err(e) => warn!(target: LOG_TARGET, "{document}: not a readable svg ({e})"),
                },
                Err(e) => warn!(target: LOG_TARGET, "{document}: {e}"),
            }
        }
        sources.extend(
            cfg.paths
                .iter()
                .enumerate()
                .map(|(i, d)| (format!("outlines.paths[{i}]"), d.clone())),
        );
        Self::from_sources(sources, cfg.sample_length)
    }

    pub fn from_sources<I>(sources: I, sample_length: f32) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut outlines = Vec::new();
        for (label, data) in sources {
            match Outline::from_path_data(&data, sample_length) {
                Ok(outline) => {
                    trace!(target: LOG_TARGET, "{label}: {} points", outline.points.len());
                    outlines.push(outline);
                }
                Err(e) => warn!(target: LOG_TARGET, "{label}: skipped ({e})"),
            }
        }
        Self { outlines }
    }

    pub fn len(&self) -> usize {
        self.outlines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outlines.is_empty()
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn read_document(path: &str) -> std::io::Result<String> {
    std::fs::read_to_string(path)
}

#[cfg(target_arch = "wasm32")]
fn read_document(_path: &str) -> std::io::Result<String> {
    Ok(EMBEDDED_DOCUMENT.to_string())
}

pub fn load_outline_library(mut commands: Commands, config: Res<SceneConfig>) {
    let library = OutlineLibrary::from_config(&config.outlines);
    info!(target: LOG_TARGET, outlines = library.len(), "Outline library ready");
    commands.insert_resource(library);
}

/// Container-space position of the `index`-th outline body.
pub fn outline_position(cfg: &OutlineConfig, index: usize) -> Vec2 {
    Vec2::new(cfg.offset + index as f32 * cfg.stride, 0.0)
}

/// Spawn one body per traced outline, stepping right by the configured stride.
pub fn create_outline_bodies(
    commands: &mut Commands,
    controller: &mut SceneController,
    library: &OutlineLibrary,
    config: &SceneConfig,
) -> Vec<Entity> {
    let cfg = &config.outlines;
    let fill = parse_color(&cfg.fill).unwrap_or(Color::BLACK);
    let stroke = parse_color(&cfg.stroke).unwrap_or(Color::BLACK);
    let damping = cfg.air_friction * 60.0;

    let mut spawned = Vec::with_capacity(library.len());
    for (i, outline) in library.outlines.iter().enumerate() {
        let world = to_world(outline_position(cfg, i));
        let entity = commands
            .spawn((
                Name::new(format!("Outline{i}")),
                DynamicBody {
                    kind: BodyKind::Outlines,
                },
                GrabRadius(outline.radius),
                BodyVisual::Outline {
                    points: outline.points.clone(),
                    triangles: outline.triangles.clone(),
                    fill,
                    stroke,
                },
                Transform::from_translation(world.extend(0.0)),
                RigidBody::Dynamic,
                outline.collider(),
                Restitution {
                    coefficient: cfg.restitution,
                    combine_rule: CoefficientCombineRule::Max,
                },
                Friction {
                    coefficient: cfg.friction,
                    combine_rule: CoefficientCombineRule::Min,
                },
                Damping {
                    linear_damping: damping,
                    angular_damping: damping,
                },
                Velocity::zero(),
            ))
            .id();
        controller.record_body();
        spawned.push(entity);
    }
    spawned
}
