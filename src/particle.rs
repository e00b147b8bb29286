use macroquad::prelude::*;

use crate::config;
use crate::surface::Surface;

/// One physically integrated point of an explosion or charging spark.
///
/// Integration is per tick, not per second: position moves by one velocity
/// step each frame and gravity bends the velocity afterwards.
#[derive(Clone, Copy, Debug)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    pub color: Color,
    pub gravity: f32,
    pub life: i32,
}

impl Particle {
    pub fn new(pos: Vec2, vel: Vec2, size: f32, color: Color, gravity: f32, life: i32) -> Self {
        Self {
            pos,
            vel,
            size,
            color,
            gravity,
            life,
        }
    }

    /// Opacity derived from remaining life over the full-life span.
    pub fn alpha(&self) -> f32 {
        self.life.max(0) as f32 / config::PARTICLE_LIFE as f32
    }

    /// One tick of integration. Returns whether the particle is still alive.
    pub fn advance(&mut self) -> bool {
        self.pos += self.vel;
        self.vel.y += self.gravity;
        self.life -= 1;
        self.life > 0
    }

    pub fn draw(&self, surface: &mut impl Surface) {
        let c = self.color;
        surface.circle(self.pos, self.size, Color::new(c.r, c.g, c.b, self.alpha()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::RecordingSurface;

    fn test_particle(life: i32) -> Particle {
        Particle::new(
            vec2(0.0, 0.0),
            vec2(1.0, -2.0),
            3.0,
            WHITE,
            config::GRAVITY,
            life,
        )
    }

    #[test]
    fn advance_applies_velocity_before_gravity() {
        let mut p = test_particle(config::PARTICLE_LIFE);
        p.advance();
        assert_eq!(p.pos, vec2(1.0, -2.0));
        assert!((p.vel.y - (-2.0 + config::GRAVITY)).abs() < 1e-6);
        p.advance();
        assert!((p.pos.y - (-2.0 + (-2.0 + config::GRAVITY))).abs() < 1e-6);
    }

    #[test]
    fn alpha_tracks_remaining_life_and_only_falls() {
        let mut p = test_particle(config::PARTICLE_LIFE);
        let mut prev = p.alpha();
        assert_eq!(prev, 1.0);
        while p.advance() {
            let a = p.alpha();
            assert!((a - p.life as f32 / config::PARTICLE_LIFE as f32).abs() < 1e-6);
            assert!(a < prev);
            prev = a;
        }
        assert_eq!(p.alpha(), 0.0);
    }

    #[test]
    fn advance_reports_death_exactly_when_life_runs_out() {
        let mut p = test_particle(3);
        assert!(p.advance());
        assert!(p.advance());
        assert!(!p.advance());
        assert_eq!(p.life, 0);
    }

    #[test]
    fn short_lived_spark_starts_at_partial_alpha() {
        let p = test_particle(config::CHARGE_SPARK_LIFE);
        assert!((p.alpha() - 0.4).abs() < 1e-6);
    }

    #[test]
    fn draw_emits_a_single_circle() {
        let p = test_particle(50);
        let mut surface = RecordingSurface::default();
        p.draw(&mut surface);
        assert_eq!(surface.circles, 1);
        assert_eq!(surface.overlays + surface.glows + surface.stars, 0);
    }
}
