use macroquad::prelude::*;

use crate::config;
use crate::engine::{hold_ratio, EffectEngine};

/// Where a release ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChargeOutcome {
    /// Held long enough; an explosion of the given size fired.
    Fired(usize),
    /// A tap below the hold threshold; the orb formation was discarded.
    Fizzled,
    /// No charge was in progress.
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Idle,
    Charging { pressed_at_ms: f64 },
}

/// Press, hold, and release state machine driving the engine.
///
/// Pointer events land here first; the engine's populations are only ever
/// touched through these transitions. Timestamps come in from the shell so
/// the whole machine can be exercised on a fake clock.
pub struct InputController {
    phase: Phase,
    anchor: Vec2,
}

impl InputController {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            anchor: Vec2::ZERO,
        }
    }

    /// Begin (or restart) a charging session anchored at `pos`.
    pub fn press(&mut self, engine: &mut EffectEngine, pos: Vec2, now_ms: f64) {
        self.anchor = pos;
        self.phase = Phase::Charging {
            pressed_at_ms: now_ms,
        };
        engine.begin_charge(pos);
    }

    /// Track the pointer while charging; ignored when idle.
    pub fn move_to(&mut self, pos: Vec2) {
        if let Phase::Charging { .. } = self.phase {
            self.anchor = pos;
        }
    }

    /// End the session: fire if the hold cleared the threshold, fizzle the
    /// formation otherwise.
    pub fn release(&mut self, engine: &mut EffectEngine, now_ms: f64) -> ChargeOutcome {
        let pressed_at_ms = match self.phase {
            Phase::Charging { pressed_at_ms } => pressed_at_ms,
            Phase::Idle => return ChargeOutcome::Ignored,
        };
        self.phase = Phase::Idle;
        let hold = now_ms - pressed_at_ms;
        if hold >= config::MIN_HOLD_MS {
            ChargeOutcome::Fired(engine.explode(self.anchor, hold))
        } else {
            engine.cancel_charge();
            ChargeOutcome::Fizzled
        }
    }

    /// Per-frame duty. Fires the auto-explosion the frame the hold reaches
    /// the cap, clamped to a full charge; otherwise keeps the formation
    /// advancing, with the ratio pinned to zero inside the warmup window.
    pub fn frame(&mut self, engine: &mut EffectEngine, now_ms: f64) -> Option<usize> {
        let pressed_at_ms = match self.phase {
            Phase::Charging { pressed_at_ms } => pressed_at_ms,
            Phase::Idle => return None,
        };
        let hold = now_ms - pressed_at_ms;
        if hold >= config::MAX_HOLD_MS {
            self.phase = Phase::Idle;
            return Some(engine.explode(self.anchor, config::MAX_HOLD_MS));
        }
        let ratio = if hold >= config::MIN_HOLD_MS {
            hold_ratio(hold)
        } else {
            0.0
        };
        engine.update_charging(self.anchor, ratio, now_ms);
        None
    }

    /// Anchor and ratio for this frame's charging visuals. None while idle
    /// or still inside the warmup window, where the wind-up stays invisible.
    pub fn charging_visuals(&self, now_ms: f64) -> Option<(Vec2, f32)> {
        let pressed_at_ms = match self.phase {
            Phase::Charging { pressed_at_ms } => pressed_at_ms,
            Phase::Idle => return None,
        };
        let hold = now_ms - pressed_at_ms;
        if hold < config::MIN_HOLD_MS {
            return None;
        }
        Some((self.anchor, hold_ratio(hold)))
    }

    /// Abandon any in-progress charge, firing nothing.
    pub fn cancel(&mut self, engine: &mut EffectEngine) {
        if let Phase::Charging { .. } = self.phase {
            self.phase = Phase::Idle;
            engine.cancel_charge();
        }
    }

    pub fn is_charging(&self) -> bool {
        matches!(self.phase, Phase::Charging { .. })
    }

    pub fn hold_ms(&self, now_ms: f64) -> Option<f64> {
        match self.phase {
            Phase::Charging { pressed_at_ms } => Some(now_ms - pressed_at_ms),
            Phase::Idle => None,
        }
    }

    pub fn anchor(&self) -> Vec2 {
        self.anchor
    }
}
