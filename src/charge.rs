use macroquad::prelude::*;
use ::rand::Rng;

use crate::config;
use crate::palette;
use crate::surface::Surface;

/// Scale curve shared by orb distance, orb size, and the central glow.
/// Charge visuals start at the growth floor and reach full scale at a
/// fully held charge.
pub fn growth_factor(ratio: f32) -> f32 {
    config::GROWTH_FLOOR + (1.0 - config::GROWTH_FLOOR) * ratio
}

/// A decorative orb circling the press anchor while a charge winds up.
///
/// Orbs are never integrated. Position and size are re-derived every tick
/// from the current anchor, hold ratio, and wall clock, so a moving pointer
/// drags the whole formation with it and nothing accumulates drift.
pub struct ChargeParticle {
    pub base_angle: f32,
    pub angle: f32,
    pub base_distance: f32,
    pub orbit_speed: f32,
    pub base_size: f32,
    pub color: Color,
    pub pulse_speed: f32,
    pub pulse_amp: f32,
    pub pulse_phase: f32,
    pub sparkle: bool,
    pub sparkle_rate: f32,
    pub sparkle_phase: f32,
    pos: Vec2,
    size_now: f32,
}

impl ChargeParticle {
    pub fn spawn(
        anchor: Vec2,
        base_angle: f32,
        base_distance: f32,
        orbit_speed: f32,
        base_size: f32,
        rng: &mut impl Rng,
    ) -> Self {
        let mut orb = Self {
            base_angle,
            angle: base_angle,
            base_distance,
            orbit_speed,
            base_size,
            color: palette::charge_color(rng),
            pulse_speed: rng.gen_range(config::PULSE_SPEED_MIN..config::PULSE_SPEED_MAX),
            pulse_amp: rng.gen_range(config::PULSE_AMP_MIN..config::PULSE_AMP_MAX),
            pulse_phase: rng.gen_range(0.0..std::f32::consts::TAU),
            sparkle: rng.gen::<f32>() < config::SPARKLE_CHANCE,
            sparkle_rate: rng.gen_range(config::SPARKLE_RATE_MIN..config::SPARKLE_RATE_MAX),
            sparkle_phase: rng.gen_range(0.0..std::f32::consts::TAU),
            pos: Vec2::ZERO,
            size_now: 0.0,
        };
        orb.derive(anchor, 0.0, 0.0);
        orb
    }

    /// Step the orbit by one tick and re-derive position and size.
    pub fn advance(&mut self, anchor: Vec2, ratio: f32, now_ms: f64) {
        self.angle += self.orbit_speed;
        self.derive(anchor, ratio, now_ms);
    }

    fn derive(&mut self, anchor: Vec2, ratio: f32, now_ms: f64) {
        let growth = growth_factor(ratio);
        let distance = self.base_distance * growth;
        self.pos = anchor + vec2(self.angle.cos(), self.angle.sin()) * distance;
        let pulse =
            1.0 + self.pulse_amp * (now_ms as f32 * self.pulse_speed + self.pulse_phase).sin();
        self.size_now = self.base_size * growth * pulse;
    }

    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    pub fn current_size(&self) -> f32 {
        self.size_now
    }

    /// Soft halo, solid core, and (for sparkle orbs on the bright half of
    /// their wave) a star glyph on top.
    pub fn draw(&self, surface: &mut impl Surface, now_ms: f64) {
        surface.glow(self.pos, self.size_now * 2.0, self.color);
        surface.circle(self.pos, self.size_now, self.color);
        if self.sparkle {
            let wave = (now_ms as f32 * self.sparkle_rate + self.sparkle_phase).sin();
            let opacity = (wave + 1.0) * 0.5;
            if opacity > config::SPARKLE_THRESHOLD {
                let c = palette::SPARKLE_ACCENT;
                surface.star(
                    self.pos,
                    self.size_now * 0.5,
                    Color::new(c.r, c.g, c.b, opacity),
                );
            }
        }
    }
}
