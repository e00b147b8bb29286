use macroquad::prelude::*;
use ::rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::charge::{growth_factor, ChargeParticle};
use crate::config;
use crate::palette;
use crate::particle::Particle;
use crate::surface::Surface;

/// Hold duration mapped onto [0, 1] across the configured hold window.
/// Durations outside the window clamp to the nearest end.
pub fn hold_ratio(hold_ms: f64) -> f32 {
    let span = config::MAX_HOLD_MS - config::MIN_HOLD_MS;
    ((hold_ms - config::MIN_HOLD_MS) / span).clamp(0.0, 1.0) as f32
}

/// Owns the two particle populations and every mutation of them.
///
/// Explosion particles integrate velocity and gravity until their life runs
/// out; charge orbs are rebuilt per press and follow the anchor they are
/// given each frame. The shell drives the engine once per frame and all
/// drawing goes through the `Surface` it hands in.
pub struct EffectEngine {
    particles: Vec<Particle>,
    charge: Vec<ChargeParticle>,
    rng: ChaCha8Rng,
}

impl EffectEngine {
    pub fn new(seed: u64) -> Self {
        assert!(
            config::MIN_HOLD_MS < config::MAX_HOLD_MS,
            "hold window is empty: MIN_HOLD_MS must lie below MAX_HOLD_MS"
        );
        Self {
            particles: Vec::with_capacity(config::MAX_PARTICLES * 2),
            charge: Vec::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Build a fresh orb formation around `anchor`, replacing any formation
    /// already in flight. Each ring spaces its orbs evenly; outer rings sit
    /// farther out with slower rotation and smaller orbs.
    pub fn begin_charge(&mut self, anchor: Vec2) {
        self.charge.clear();
        for ring in 0..config::CHARGE_RINGS {
            let count = config::RING_BASE_COUNT + config::RING_COUNT_STEP * ring;
            let distance = config::RING_BASE_DISTANCE + config::RING_DISTANCE_STEP * ring as f32;
            let orbit_speed =
                config::RING_BASE_ORBIT_SPEED - config::RING_ORBIT_SPEED_STEP * ring as f32;
            let size = config::RING_BASE_SIZE - config::RING_SIZE_STEP * ring as f32;
            for slot in 0..count {
                let base_angle = slot as f32 / count as f32 * std::f32::consts::TAU;
                let orb = ChargeParticle::spawn(
                    anchor,
                    base_angle,
                    distance,
                    orbit_speed,
                    size,
                    &mut self.rng,
                );
                self.charge.push(orb);
            }
        }
    }

    /// Advance every orb against the current anchor and hold ratio. The
    /// formation lives and dies as a whole; nothing is pruned here.
    pub fn update_charging(&mut self, anchor: Vec2, ratio: f32, now_ms: f64) {
        for orb in &mut self.charge {
            orb.advance(anchor, ratio, now_ms);
        }
    }

    /// Draw the charging visuals: the central glow with the orbs over it,
    /// shedding the occasional spark into the live particle population.
    pub fn render_charging(
        &mut self,
        surface: &mut impl Surface,
        anchor: Vec2,
        ratio: f32,
        now_ms: f64,
    ) {
        let growth = growth_factor(ratio);
        let breath = (now_ms as f32 * config::GLOW_PULSE_RATE).sin() * config::GLOW_PULSE_AMPLITUDE;
        let radius = (config::GLOW_BASE_RADIUS + config::GLOW_RADIUS_SPAN * ratio) * growth
            + breath * growth;
        surface.glow(anchor, radius * config::GLOW_FALLOFF, palette::CHARGE_GLOW);

        for orb in &self.charge {
            orb.draw(surface, now_ms);
        }

        if self.rng.gen::<f32>() < config::CHARGE_SPARK_CHANCE {
            for _ in 0..config::CHARGE_SPARK_COUNT {
                self.shed_spark(anchor, radius);
            }
        }
    }

    /// A short-lived ember rising off the glow. Joins the regular particle
    /// population and fades there.
    fn shed_spark(&mut self, anchor: Vec2, radius: f32) {
        let angle = self.rng.gen_range(0.0..std::f32::consts::TAU);
        let offset = vec2(angle.cos(), angle.sin()) * (self.rng.gen::<f32>() * radius);
        let vel = vec2(
            self.rng
                .gen_range(-config::CHARGE_SPARK_DRIFT..config::CHARGE_SPARK_DRIFT),
            -self
                .rng
                .gen_range(config::CHARGE_SPARK_RISE_MIN..config::CHARGE_SPARK_RISE_MAX),
        );
        let size =
            config::CHARGE_SPARK_SIZE_MIN + self.rng.gen::<f32>() * config::CHARGE_SPARK_SIZE_SPAN;
        let color = palette::charge_color(&mut self.rng);
        self.particles.push(Particle::new(
            anchor + offset,
            vel,
            size,
            color,
            config::GRAVITY * config::CHARGE_SPARK_GRAVITY_SCALE,
            config::CHARGE_SPARK_LIFE,
        ));
    }

    /// Radial burst scaled by how long the press was held. Ends the charging
    /// session by dropping the orb formation. Returns the number of
    /// particles spawned.
    pub fn explode(&mut self, at: Vec2, hold_ms: f64) -> usize {
        let ratio = hold_ratio(hold_ms);
        let count = (config::MIN_PARTICLES as f32
            + ratio * (config::MAX_PARTICLES - config::MIN_PARTICLES) as f32)
            .floor() as usize;

        // Each burst commits to a three-color scheme up front.
        let scheme = [
            palette::explosion_color(&mut self.rng),
            palette::explosion_color(&mut self.rng),
            palette::explosion_color(&mut self.rng),
        ];

        for _ in 0..count {
            let angle = self.rng.gen_range(0.0..std::f32::consts::TAU);
            let speed = config::MIN_VELOCITY
                + self.rng.gen::<f32>()
                    * (config::MAX_VELOCITY - config::MIN_VELOCITY)
                    * (1.0 + ratio);
            let size = config::MIN_SIZE
                + self.rng.gen::<f32>() * (config::MAX_SIZE - config::MIN_SIZE) * (1.0 + ratio);
            let color = scheme[self.rng.gen_range(0..scheme.len())];
            self.particles.push(Particle::new(
                at,
                vec2(angle.cos(), angle.sin()) * speed,
                size,
                color,
                config::GRAVITY,
                config::PARTICLE_LIFE,
            ));
        }

        self.charge.clear();
        count
    }

    /// Abandon the charging session without firing.
    pub fn cancel_charge(&mut self) {
        self.charge.clear();
    }

    /// One frame of the live population: trail overlay, integrate, prune the
    /// dead, draw survivors. Insertion order is preserved throughout.
    pub fn tick(&mut self, surface: &mut impl Surface) {
        surface.overlay(palette::TRAIL_FADE);
        self.particles.retain_mut(|p| p.advance());
        for p in &self.particles {
            p.draw(surface);
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn charge_orbs(&self) -> &[ChargeParticle] {
        &self.charge
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    pub fn charge_count(&self) -> usize {
        self.charge.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::RecordingSurface;

    fn distinct_colors(particles: &[Particle]) -> usize {
        let mut seen: Vec<Color> = Vec::new();
        for p in particles {
            if !seen.contains(&p.color) {
                seen.push(p.color);
            }
        }
        seen.len()
    }

    #[test]
    fn hold_ratio_is_linear_and_clamped() {
        assert_eq!(hold_ratio(config::MIN_HOLD_MS), 0.0);
        assert_eq!(hold_ratio(config::MAX_HOLD_MS), 1.0);
        assert_eq!(hold_ratio(0.0), 0.0);
        assert_eq!(hold_ratio(20_000.0), 1.0);
        assert!((hold_ratio(3550.0) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn begin_charge_builds_three_rings_of_orbs() {
        let mut engine = EffectEngine::new(42);
        engine.begin_charge(vec2(10.0, 10.0));

        let orbs = engine.charge_orbs();
        assert_eq!(orbs.len(), 21);

        // 5, 7, then 9 orbs per ring.
        let rings = [&orbs[0..5], &orbs[5..12], &orbs[12..21]];
        let distances = [20.0, 35.0, 50.0];
        let speeds = [0.03, 0.025, 0.02];
        let sizes = [3.0, 2.5, 2.0];
        for (i, ring) in rings.iter().enumerate() {
            for orb in ring.iter() {
                assert_eq!(orb.base_distance, distances[i]);
                assert!((orb.orbit_speed - speeds[i]).abs() < 1e-6);
                assert_eq!(orb.base_size, sizes[i]);
            }
        }
    }

    #[test]
    fn ring_slots_are_evenly_spaced() {
        let mut engine = EffectEngine::new(1);
        engine.begin_charge(Vec2::ZERO);
        let first_ring = &engine.charge_orbs()[0..5];
        for (slot, orb) in first_ring.iter().enumerate() {
            let expected = slot as f32 / 5.0 * std::f32::consts::TAU;
            assert!((orb.base_angle - expected).abs() < 1e-6);
        }
    }

    #[test]
    fn a_second_press_replaces_the_formation() {
        let mut engine = EffectEngine::new(42);
        engine.begin_charge(vec2(0.0, 0.0));
        engine.begin_charge(vec2(300.0, 300.0));
        assert_eq!(engine.charge_count(), 21);
    }

    #[test]
    fn explosion_count_scales_with_hold() {
        let mut engine = EffectEngine::new(42);
        assert_eq!(engine.explode(Vec2::ZERO, config::MIN_HOLD_MS), 50);
        assert_eq!(engine.explode(Vec2::ZERO, config::MAX_HOLD_MS), 200);
        assert_eq!(engine.explode(Vec2::ZERO, 4000.0), 134);
        // Past the cap the ratio clamps, so the count does too.
        assert_eq!(engine.explode(Vec2::ZERO, 20_000.0), 200);
        assert_eq!(engine.particle_count(), 50 + 200 + 134 + 200);
    }

    #[test]
    fn each_burst_commits_to_at_most_three_colors() {
        let mut engine = EffectEngine::new(7);
        engine.explode(vec2(50.0, 50.0), config::MAX_HOLD_MS);
        let distinct = distinct_colors(engine.particles());
        assert!(distinct >= 1 && distinct <= 3, "saw {distinct} colors");
    }

    #[test]
    fn burst_particles_start_at_the_press_point_within_bounds() {
        let mut engine = EffectEngine::new(9);
        let at = vec2(320.0, 240.0);
        engine.explode(at, config::MAX_HOLD_MS);

        for p in engine.particles() {
            assert_eq!(p.pos, at);
            assert_eq!(p.life, config::PARTICLE_LIFE);
            assert_eq!(p.gravity, config::GRAVITY);
            let speed = p.vel.length();
            // Full charge doubles the random span on top of the base.
            let speed_span = 2.0 * (config::MAX_VELOCITY - config::MIN_VELOCITY);
            assert!(speed >= config::MIN_VELOCITY - 1e-3);
            assert!(speed < config::MIN_VELOCITY + speed_span + 1e-3);
            assert!(p.size >= config::MIN_SIZE);
            assert!(p.size < config::MIN_SIZE + 2.0 * (config::MAX_SIZE - config::MIN_SIZE));
        }
    }

    #[test]
    fn explode_ends_the_charging_session() {
        let mut engine = EffectEngine::new(42);
        engine.begin_charge(vec2(5.0, 5.0));
        engine.explode(vec2(5.0, 5.0), 3000.0);
        assert_eq!(engine.charge_count(), 0);
    }

    #[test]
    fn cancel_drops_the_formation_and_nothing_else() {
        let mut engine = EffectEngine::new(42);
        engine.explode(Vec2::ZERO, config::MIN_HOLD_MS);
        engine.begin_charge(Vec2::ZERO);
        engine.cancel_charge();
        assert_eq!(engine.charge_count(), 0);
        assert_eq!(engine.particle_count(), 50);
    }

    #[test]
    fn tick_on_an_empty_engine_draws_only_the_overlay() {
        let mut engine = EffectEngine::new(1);
        let mut surface = RecordingSurface::default();
        engine.tick(&mut surface);
        assert_eq!(surface.overlays, 1);
        assert_eq!(surface.circles + surface.glows + surface.stars, 0);
    }

    #[test]
    fn tick_prunes_particles_the_tick_their_life_ends() {
        let mut engine = EffectEngine::new(42);
        engine.explode(Vec2::ZERO, config::MIN_HOLD_MS);

        let mut surface = RecordingSurface::default();
        for _ in 0..config::PARTICLE_LIFE - 1 {
            engine.tick(&mut surface);
        }
        assert_eq!(engine.particle_count(), config::MIN_PARTICLES);

        let mut last = RecordingSurface::default();
        engine.tick(&mut last);
        assert_eq!(engine.particle_count(), 0);
        assert_eq!(last.overlays, 1);
        assert_eq!(last.circles, 0);
    }

    #[test]
    fn render_charging_draws_glow_and_every_orb() {
        let mut engine = EffectEngine::new(42);
        engine.begin_charge(vec2(100.0, 100.0));
        let mut surface = RecordingSurface::default();
        engine.render_charging(&mut surface, vec2(100.0, 100.0), 0.5, 500.0);
        // One central glow plus a halo per orb.
        assert_eq!(surface.glows, 22);
        assert_eq!(surface.circles, 21);
        assert_eq!(surface.overlays, 0);
    }

    #[test]
    fn charging_sheds_sparks_into_the_particle_population() {
        let mut engine = EffectEngine::new(42);
        engine.begin_charge(vec2(100.0, 100.0));
        let mut surface = RecordingSurface::default();
        for frame in 0..60 {
            engine.render_charging(&mut surface, vec2(100.0, 100.0), 0.5, frame as f64 * 16.0);
        }
        assert!(engine.particle_count() > 0);

        let spark_gravity = config::GRAVITY * config::CHARGE_SPARK_GRAVITY_SCALE;
        for spark in engine.particles() {
            assert_eq!(spark.life, config::CHARGE_SPARK_LIFE);
            assert!((spark.gravity - spark_gravity).abs() < 1e-6);
            assert!(spark.vel.y < 0.0);
            assert!(spark.vel.x.abs() <= config::CHARGE_SPARK_DRIFT);
        }
    }
}
