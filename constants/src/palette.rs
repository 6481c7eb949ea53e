use bevy::prelude::*;

pub struct PaletteEntry {
    pub name: &'static str,
    pub rgb: [f32; 3],
}

/// Ornament body colours, drawn per entity at population time
pub const ORNAMENT_PALETTE: &[PaletteEntry] = &[
    PaletteEntry {
        name: "antique gold",
        rgb: [0.831, 0.686, 0.216],
    },
    PaletteEntry {
        name: "pine green",
        rgb: [0.016, 0.224, 0.153],
    },
    PaletteEntry {
        name: "dark red",
        rgb: [0.545, 0.0, 0.0],
    },
    PaletteEntry {
        name: "white",
        rgb: [1.0, 1.0, 1.0],
    },
];

/// Warm gold used for every light ornament
pub const LIGHT_RGB: [f32; 3] = [1.0, 0.843, 0.0];

pub fn palette_color(index: usize) -> Color {
    let entry = &ORNAMENT_PALETTE[index % ORNAMENT_PALETTE.len()];
    Color::srgb(entry.rgb[0], entry.rgb[1], entry.rgb[2])
}

pub fn light_color() -> Color {
    Color::srgb(LIGHT_RGB[0], LIGHT_RGB[1], LIGHT_RGB[2])
}
