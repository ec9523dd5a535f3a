use std::f64::consts::PI;
use crate::constants::TICK_KICK_SHARE;
use crate::easing::{KICK_RETURN, QUAD_OUT};
use crate::wheel_config::TickerConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KickPhase {
    Idle,
    Kicking,
    Returning,
}

/// Pointer recoil played on every tick.
///
/// The pointer sprite rests at π (flipped to point into the wheel). A kick swings
/// it back by `angle_deg * intensity` with a quad ease-out, then lets it spring
/// home with an elastic ease-out.
#[derive(Debug, Clone, PartialEq)]
pub struct PointerKick {
    rest: f64,
    angle: f64,
    phase: KickPhase,
    from: f64,
    peak: f64,
    started_at: f64,
    kick_ms: f64,
    return_ms: f64,
}

impl Default for PointerKick {
    fn default() -> Self {
        Self::new(PI)
    }
}

impl PointerKick {
    pub fn new(rest: f64) -> Self {
        Self {
            rest,
            angle: rest,
            phase: KickPhase::Idle,
            from: rest,
            peak: rest,
            started_at: 0.0,
            kick_ms: 0.0,
            return_ms: 0.0,
        }
    }

    pub fn rest(&self) -> f64 {
        self.rest
    }

    pub fn phase(&self) -> KickPhase {
        self.phase
    }

    pub fn is_idle(&self) -> bool {
        self.phase == KickPhase::Idle
    }

    /// Whole kick length for a tick of the given intensity, in milliseconds.
    pub fn duration_for(intensity: f64, ticker: &TickerConfig) -> f64 {
        (ticker.base_duration_ms / (2.0 * intensity + 0.5)).max(ticker.min_duration_ms)
    }

    /// Starts a new kick from wherever the pointer is now, replacing any kick in flight.
    pub fn trigger(&mut self, now: f64, intensity: f64, ticker: &TickerConfig) {
        let current = self.sample(now);
        let total = Self::duration_for(intensity, ticker);

        self.from = current;
        self.peak = self.rest - ticker.angle_deg.to_radians() * intensity;
        self.started_at = now;
        self.kick_ms = total * TICK_KICK_SHARE;
        self.return_ms = total - self.kick_ms;
        self.phase = KickPhase::Kicking;
    }

    /// Pointer angle at `now`. Advances the phase as time passes.
    pub fn sample(&mut self, now: f64) -> f64 {
        let elapsed = now - self.started_at;

        if self.phase == KickPhase::Kicking {
            if elapsed < self.kick_ms {
                let t = elapsed / self.kick_ms;
                self.angle = self.from + (self.peak - self.from) * QUAD_OUT.apply(t);
                return self.angle;
            }
            self.phase = KickPhase::Returning;
        }

        if self.phase == KickPhase::Returning {
            let t = (elapsed - self.kick_ms) / self.return_ms;
            if t < 1.0 {
                self.angle = self.peak + (self.rest - self.peak) * KICK_RETURN.apply(t);
                return self.angle;
            }
            self.phase = KickPhase::Idle;
        }

        self.angle = self.rest;
        self.angle
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }
}
