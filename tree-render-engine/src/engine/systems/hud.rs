use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;

use crate::engine::morph::transition::{Formedness, is_settled};
use crate::engine::vision::classifier::GestureState;

#[derive(Component)]
pub struct FpsText;

#[derive(Component)]
pub struct FormednessText;

pub fn spawn_hud(mut commands: Commands) {
    commands
        .spawn(Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                Text::new("FPS: "),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgb(0.831, 0.686, 0.216)),
                Node {
                    position_type: PositionType::Absolute,
                    bottom: Val::Px(12.0),
                    right: Val::Px(12.0),
                    ..default()
                },
                FpsText,
            ));
            parent.spawn((
                Text::new(""),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(Color::srgb(0.831, 0.686, 0.216)),
                Node {
                    position_type: PositionType::Absolute,
                    bottom: Val::Px(12.0),
                    left: Val::Px(12.0),
                    ..default()
                },
                FormednessText,
            ));
        });
}

pub fn fps_text_update_system(
    diagnostics: Res<DiagnosticsStore>,
    mut query: Query<&mut Text, With<FpsText>>,
) {
    for mut text in &mut query {
        if let Some(fps) = diagnostics.get(&FrameTimeDiagnosticsPlugin::FPS) {
            if let Some(value) = fps.smoothed() {
                text.0 = format!("FPS: {value:.1}");
            }
        }
    }
}

pub fn formedness_text_update_system(
    formedness: Res<Formedness>,
    gesture: Res<GestureState>,
    mut query: Query<&mut Text, With<FormednessText>>,
) {
    for mut text in &mut query {
        let hand = if gesture.formed { "fist" } else { "open" };
        let marker = if is_settled(formedness.foliage, gesture.formed)
            && is_settled(formedness.photos, gesture.formed)
        {
            " *"
        } else {
            ""
        };
        text.0 = format!(
            "{hand}  tree {:.2}  photos {:.2}{marker}",
            formedness.foliage, formedness.photos
        );
    }
}
