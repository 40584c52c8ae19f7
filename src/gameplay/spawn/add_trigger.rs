use bevy::prelude::*;

use crate::core::config::SceneConfig;
use crate::gameplay::spawn::spawn::SpawnDynamicBody;

const LOG_TARGET: &str = "drop_scene::add_trigger";

const BUTTON_IDLE: Color = Color::srgba(0.05, 0.05, 0.08, 0.6);
const BUTTON_HOVER: Color = Color::srgba(0.08, 0.08, 0.12, 0.7);
const BUTTON_PRESSED: Color = Color::srgba(0.15, 0.15, 0.25, 0.8);

/// The on-screen "Add" control.
#[derive(Component, Debug)]
pub struct AddButton;

/// Map a configured key name to a key code. Accepts both `KeyA` and the short `A` form.
pub fn parse_key_name(name: &str) -> Option<KeyCode> {
    let name = name.trim();
    let short = name.strip_prefix("Key").filter(|s| s.len() == 1).unwrap_or(name);
    if short.len() == 1 {
        let ch = short.chars().next()?.to_ascii_uppercase();
        return letter_key(ch).or_else(|| digit_key(ch));
    }
    if let Some(d) = name.strip_prefix("Digit").filter(|s| s.len() == 1) {
        return digit_key(d.chars().next()?);
    }
    Some(match name {
        "Space" => KeyCode::Space,
        "Enter" => KeyCode::Enter,
        "NumpadEnter" => KeyCode::NumpadEnter,
        "Tab" => KeyCode::Tab,
        "Backspace" => KeyCode::Backspace,
        "Insert" => KeyCode::Insert,
        "ArrowUp" => KeyCode::ArrowUp,
        "ArrowDown" => KeyCode::ArrowDown,
        "ArrowLeft" => KeyCode::ArrowLeft,
        "ArrowRight" => KeyCode::ArrowRight,
        "NumpadAdd" => KeyCode::NumpadAdd,
        "Equal" => KeyCode::Equal,
        "F1" => KeyCode::F1,
        "F2" => KeyCode::F2,
        "F3" => KeyCode::F3,
        "F4" => KeyCode::F4,
        _ => return None,
    })
}

fn letter_key(ch: char) -> Option<KeyCode> {
    const LETTERS: [KeyCode; 26] = [
        KeyCode::KeyA,
        KeyCode::KeyB,
        KeyCode::KeyC,
        KeyCode::KeyD,
        KeyCode::KeyE,
        KeyCode::KeyF,
        KeyCode::KeyG,
        KeyCode::KeyH,
        KeyCode::KeyI,
        KeyCode::KeyJ,
        KeyCode::KeyK,
        KeyCode::KeyL,
        KeyCode::KeyM,
        KeyCode::KeyN,
        KeyCode::KeyO,
        KeyCode::KeyP,
        KeyCode::KeyQ,
        KeyCode::KeyR,
        KeyCode::KeyS,
        KeyCode::KeyT,
        KeyCode::KeyU,
        KeyCode::KeyV,
        KeyCode::KeyW,
        KeyCode::KeyX,
        KeyCode::KeyY,
        KeyCode::KeyZ,
    ];
    ch.is_ascii_uppercase()
        .then(|| LETTERS[(ch as u8 - b'A') as usize])
}

fn digit_key(ch: char) -> Option<KeyCode> {
    const DIGITS: [KeyCode; 10] = [
        KeyCode::Digit0,
        KeyCode::Digit1,
        KeyCode::Digit2,
        KeyCode::Digit3,
        KeyCode::Digit4,
        KeyCode::Digit5,
        KeyCode::Digit6,
        KeyCode::Digit7,
        KeyCode::Digit8,
        KeyCode::Digit9,
    ];
    ch.to_digit(10).map(|d| DIGITS[d as usize])
}

pub fn spawn_add_button(mut commands: Commands, config: Res<SceneConfig>) {
    let trigger = &config.add_trigger;
    if !trigger.enabled || !trigger.show_button {
        return;
    }
    commands
        .spawn((
            Name::new("AddButton"),
            Button,
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(12.0),
                right: Val::Px(12.0),
                padding: UiRect::axes(Val::Px(14.0), Val::Px(6.0)),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(BUTTON_IDLE),
            BorderRadius::all(Val::Px(6.0)),
            AddButton,
        ))
        .with_children(|btn| {
            btn.spawn((
                Text::new("Add"),
                TextFont::from_font_size(18.0),
                TextColor(Color::WHITE),
            ));
        });
}

pub fn add_on_key(
    keys: Option<Res<ButtonInput<KeyCode>>>,
    config: Res<SceneConfig>,
    mut requests: EventWriter<SpawnDynamicBody>,
) {
    let trigger = &config.add_trigger;
    if !trigger.enabled {
        return;
    }
    let Some(keys) = keys else {
        return;
    };
    let Some(key) = parse_key_name(&trigger.key) else {
        return;
    };
    if keys.just_pressed(key) {
        trace!(target: LOG_TARGET, ?key, "add via key");
        requests.write(SpawnDynamicBody { kind: trigger.body });
    }
}

pub fn add_on_button(
    mut q_btn: Query<(&Interaction, &mut BackgroundColor), (Changed<Interaction>, With<AddButton>)>,
    config: Res<SceneConfig>,
    mut requests: EventWriter<SpawnDynamicBody>,
) {
    for (interaction, mut bg) in q_btn.iter_mut() {
        match *interaction {
            Interaction::Pressed => {
                *bg = BackgroundColor(BUTTON_PRESSED);
                if config.add_trigger.enabled {
                    trace!(target: LOG_TARGET, "add via button");
                    requests.write(SpawnDynamicBody {
                        kind: config.add_trigger.body,
                    });
                }
            }
            Interaction::Hovered => *bg = BackgroundColor(BUTTON_HOVER),
            Interaction::None => *bg = BackgroundColor(BUTTON_IDLE),
        }
    }
}
