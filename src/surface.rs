use macroquad::prelude::{Color, Vec2};

/// Drawing primitives the effect core needs from its backend.
///
/// The shell hands the engine a screen-backed implementation; tests hand it
/// a recording stub. Opacity always rides in the color's alpha channel.
pub trait Surface {
    /// Fill the whole frame with `color` (the trail overlay).
    fn overlay(&mut self, color: Color);
    /// Filled circle.
    fn circle(&mut self, center: Vec2, radius: f32, color: Color);
    /// Radial gradient, `color` at the center fading to transparent at `radius`.
    fn glow(&mut self, center: Vec2, radius: f32, color: Color);
    /// Four-pointed sparkle glyph with points `size` out from the center.
    fn star(&mut self, center: Vec2, size: f32, color: Color);
}

/// Counts primitive calls without touching a real backend.
#[cfg(test)]
#[derive(Default)]
pub struct RecordingSurface {
    pub overlays: usize,
    pub circles: usize,
    pub glows: usize,
    pub stars: usize,
}

#[cfg(test)]
impl Surface for RecordingSurface {
    fn overlay(&mut self, _color: Color) {
        self.overlays += 1;
    }

    fn circle(&mut self, _center: Vec2, _radius: f32, _color: Color) {
        self.circles += 1;
    }

    fn glow(&mut self, _center: Vec2, _radius: f32, _color: Color) {
        self.glows += 1;
    }

    fn star(&mut self, _center: Vec2, _size: f32, _color: Color) {
        self.stars += 1;
    }
}
