use bevy::prelude::*;

use drop_scene::{SceneConfig, ScenePlugin};

// ---------------- Config Loading ----------------

#[cfg(any(target_arch = "wasm32", feature = "embedded_config"))]
fn load_config() -> SceneConfig {
    // Embed base config (no layered local override here).
    const RAW: &str = include_str!("../assets/config/scene.ron");
    SceneConfig::from_ron_str(RAW).unwrap_or_else(|e| {
        warn!("CONFIG (embedded) parse failure: {e}; using defaults");
        SceneConfig::default()
    })
}

#[cfg(not(any(target_arch = "wasm32", feature = "embedded_config")))]
fn load_config() -> SceneConfig {
    let (cfg, used, errors) = SceneConfig::load_layered([
        std::path::Path::new("assets/config/scene.ron"),
        std::path::Path::new("assets/config/scene.local.ron"),
    ]);
    for e in errors {
        warn!("CONFIG LOAD ISSUE: {e}");
    }
    if used.is_empty() {
        info!("No config layers found; using defaults");
    } else {
        info!(?used, "Config layers loaded");
    }
    cfg
}

fn primary_window(cfg: &SceneConfig) -> Window {
    let w = &cfg.window;
    Window {
        title: w.title.clone(),
        resolution: (w.width, w.height).into(),
        resizable: true,
        transparent: w.transparent,
        canvas: w.canvas.clone(),
        fit_canvas_to_parent: w.fit_canvas_to_parent,
        // leave wheel / touch scrolling to the page
        prevent_default_event_handling: !w.allow_page_scroll,
        ..Default::default()
    }
}

// ---------------- Main ----------------

fn main() {
    #[cfg(target_arch = "wasm32")]
    {
        // Better panic messages on wasm
        console_error_panic_hook::set_once();
    }

    let cfg = load_config();
    let window = primary_window(&cfg);

    App::new()
        .insert_resource(cfg)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(window),
            ..Default::default()
        }))
        .add_plugins(ScenePlugin)
        .run();
}
