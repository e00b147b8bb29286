// All tunable effect constants in one place.

// Explosion physics (parity with the classic canvas fireworks effect)
pub const GRAVITY: f32 = 0.1;
pub const MIN_PARTICLES: usize = 50;
pub const MAX_PARTICLES: usize = 200;
pub const MIN_VELOCITY: f32 = 2.0;
pub const MAX_VELOCITY: f32 = 5.0;
pub const MIN_SIZE: f32 = 2.0;
pub const MAX_SIZE: f32 = 4.0;
pub const PARTICLE_LIFE: i32 = 100;

// Hold window, milliseconds. Releases shorter than MIN fizzle; holds that
// reach MAX fire on their own.
pub const MIN_HOLD_MS: f64 = 100.0;
pub const MAX_HOLD_MS: f64 = 7000.0;

// Charge orbit rings. Ring i carries RING_BASE_COUNT + RING_COUNT_STEP * i
// orbs; distance grows with the ring index while orbit speed and orb size
// taper off.
pub const CHARGE_RINGS: usize = 3;
pub const RING_BASE_COUNT: usize = 5;
pub const RING_COUNT_STEP: usize = 2;
pub const RING_BASE_DISTANCE: f32 = 20.0;
pub const RING_DISTANCE_STEP: f32 = 15.0;
pub const RING_BASE_ORBIT_SPEED: f32 = 0.03; // radians per tick
pub const RING_ORBIT_SPEED_STEP: f32 = 0.005;
pub const RING_BASE_SIZE: f32 = 3.0;
pub const RING_SIZE_STEP: f32 = 0.5;

// Charge orb rhythm. Angular rates are radians per millisecond of wall
// clock; each orb draws its own values from these ranges at spawn.
pub const GROWTH_FLOOR: f32 = 0.2;
pub const SPARKLE_CHANCE: f32 = 0.3;
pub const PULSE_SPEED_MIN: f32 = 0.005;
pub const PULSE_SPEED_MAX: f32 = 0.015;
pub const PULSE_AMP_MIN: f32 = 0.2;
pub const PULSE_AMP_MAX: f32 = 0.5;
pub const SPARKLE_RATE_MIN: f32 = 0.010;
pub const SPARKLE_RATE_MAX: f32 = 0.020;
pub const SPARKLE_THRESHOLD: f32 = 0.7;

// Central charge glow
pub const GLOW_BASE_RADIUS: f32 = 10.0;
pub const GLOW_RADIUS_SPAN: f32 = 25.0;
pub const GLOW_PULSE_AMPLITUDE: f32 = 3.0;
pub const GLOW_PULSE_RATE: f32 = 0.008; // radians per millisecond
pub const GLOW_FALLOFF: f32 = 1.5; // gradient reaches transparent at this multiple

// Sparks shed from the glow while charging
pub const CHARGE_SPARK_CHANCE: f32 = 0.3;
pub const CHARGE_SPARK_COUNT: usize = 2;
pub const CHARGE_SPARK_LIFE: i32 = 40;
pub const CHARGE_SPARK_GRAVITY_SCALE: f32 = 0.1;
pub const CHARGE_SPARK_SIZE_MIN: f32 = 1.0;
pub const CHARGE_SPARK_SIZE_SPAN: f32 = 2.0;
pub const CHARGE_SPARK_DRIFT: f32 = 0.5; // horizontal speed half-range
pub const CHARGE_SPARK_RISE_MIN: f32 = 0.2; // upward speed range
pub const CHARGE_SPARK_RISE_MAX: f32 = 1.2;
