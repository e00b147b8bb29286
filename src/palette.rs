use macroquad::prelude::Color;
use ::rand::Rng;

/// The sixteen burst colors of the classic effect.
pub const EXPLOSION: [Color; 16] = [
    Color::new(1.00, 0.32, 0.32, 1.0), // #FF5252 red
    Color::new(1.00, 0.25, 0.51, 1.0), // #FF4081 pink
    Color::new(0.88, 0.25, 0.98, 1.0), // #E040FB purple
    Color::new(0.49, 0.30, 1.00, 1.0), // #7C4DFF deep purple
    Color::new(0.33, 0.43, 1.00, 1.0), // #536DFE indigo
    Color::new(0.27, 0.54, 1.00, 1.0), // #448AFF blue
    Color::new(0.25, 0.77, 1.00, 1.0), // #40C4FF light blue
    Color::new(0.09, 1.00, 1.00, 1.0), // #18FFFF cyan
    Color::new(0.39, 1.00, 0.85, 1.0), // #64FFDA teal
    Color::new(0.41, 0.94, 0.68, 1.0), // #69F0AE green
    Color::new(0.70, 1.00, 0.35, 1.0), // #B2FF59 light green
    Color::new(0.93, 1.00, 0.25, 1.0), // #EEFF41 lime
    Color::new(1.00, 1.00, 0.00, 1.0), // #FFFF00 yellow
    Color::new(1.00, 0.84, 0.25, 1.0), // #FFD740 amber
    Color::new(1.00, 0.67, 0.25, 1.0), // #FFAB40 orange
    Color::new(1.00, 0.43, 0.25, 1.0), // #FF6E40 deep orange
];

/// Hotter, whiter tones for the wind-up visuals.
pub const CHARGE: [Color; 8] = [
    Color::new(1.00, 1.00, 1.00, 1.0), // #FFFFFF white
    Color::new(1.00, 0.96, 0.62, 1.0), // #FFF59D pale yellow
    Color::new(1.00, 0.84, 0.25, 1.0), // #FFD740 amber
    Color::new(1.00, 0.67, 0.25, 1.0), // #FFAB40 orange
    Color::new(0.50, 0.85, 1.00, 1.0), // #80D8FF sky
    Color::new(0.52, 1.00, 1.00, 1.0), // #84FFFF ice
    Color::new(0.73, 0.96, 0.79, 1.0), // #B9F6CA mint
    Color::new(1.00, 0.50, 0.67, 1.0), // #FF80AB rose
];

/// Accent for the four-pointed sparkle glyphs on charge orbs.
pub const SPARKLE_ACCENT: Color = Color::new(1.0, 0.99, 0.85, 1.0);

/// Core of the central charge glow.
pub const CHARGE_GLOW: Color = Color::new(1.0, 0.97, 0.88, 0.55);

/// Per-frame overlay that fades previous frames into motion trails.
pub const TRAIL_FADE: Color = Color::new(0.0, 0.0, 0.0, 0.1);

pub fn explosion_color(rng: &mut impl Rng) -> Color {
    EXPLOSION[rng.gen_range(0..EXPLOSION.len())]
}

pub fn charge_color(rng: &mut impl Rng) -> Color {
    CHARGE[rng.gen_range(0..CHARGE.len())]
}
