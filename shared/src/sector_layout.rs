use std::f64::consts::TAU;
use crate::constants::{EMPTY_PRIZES_ERROR, INVALID_WEIGHT_ERROR};
use crate::error::WheelError;
use crate::wheel_config::Prize;

/// Wraps any angle into `[0, 2π)`.
pub fn normalize_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if wrapped >= TAU { 0.0 } else { wrapped }
}

/// Angular layout of the prize sectors in the wheel's own frame.
///
/// Angles are measured from the start of sector 0, in the same direction the
/// canvas draws arcs. The wheel turns by `rotation`, so the wheel-frame angle
/// sitting under the pointer is `alignment - rotation` where `alignment` is the
/// pointer's screen angle minus the screen angle of sector 0's start.
#[derive(Debug, Clone, PartialEq)]
pub struct SectorLayout {
    starts: Vec<f64>,
    arcs: Vec<f64>,
    alignment: f64,
}

impl SectorLayout {
    pub fn new(prizes: &[Prize], alignment: f64) -> Result<Self, WheelError> {
        if prizes.is_empty() {
            return Err(WheelError::InvalidConfiguration(EMPTY_PRIZES_ERROR.to_string()));
        }

        let total: f64 = prizes.iter().map(|p| p.weight).sum();
        if !total.is_finite() || total <= 0.0 || prizes.iter().any(|p| !(p.weight > 0.0)) {
            return Err(WheelError::InvalidConfiguration(INVALID_WEIGHT_ERROR.to_string()));
        }

        let mut starts = Vec::with_capacity(prizes.len());
        let mut arcs = Vec::with_capacity(prizes.len());
        let mut cumulative = 0.0;
        for prize in prizes {
            let start = TAU * cumulative / total;
            cumulative += prize.weight;
            let end = TAU * cumulative / total;
            starts.push(start);
            arcs.push(end - start);
        }

        Ok(Self { starts, arcs, alignment })
    }

    pub fn len(&self) -> usize {
        self.starts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.starts.is_empty()
    }

    pub fn alignment(&self) -> f64 {
        self.alignment
    }

    pub fn start(&self, index: usize) -> f64 {
        self.starts[index]
    }

    pub fn arc(&self, index: usize) -> f64 {
        self.arcs[index]
    }

    pub fn arcs(&self) -> &[f64] {
        &self.arcs
    }

    pub fn mid(&self, index: usize) -> f64 {
        self.starts[index] + self.arcs[index] / 2.0
    }

    /// Sector containing a wheel-frame angle.
    pub fn sector_at(&self, angle: f64) -> usize {
        let angle = normalize_angle(angle);
        let after = self.starts.partition_point(|start| *start <= angle);
        after.saturating_sub(1).min(self.len() - 1)
    }

    /// Wheel-frame angle currently under the pointer.
    pub fn pointer_angle(&self, rotation: f64) -> f64 {
        normalize_angle(self.alignment - rotation)
    }

    pub fn sector_under_pointer(&self, rotation: f64) -> usize {
        self.sector_at(self.pointer_angle(rotation))
    }

    /// Unwrapped sector ordinal under the pointer: `turns * len + index`.
    ///
    /// Consecutive rotations differ by exactly the number of sector boundaries
    /// that passed the pointer between them.
    pub fn boundary_ordinal(&self, rotation: f64) -> i64 {
        let raw = self.alignment - rotation;
        let within = normalize_angle(raw);
        let turns = ((raw - within) / TAU).round() as i64;
        turns * self.len() as i64 + self.sector_at(within) as i64
    }

    pub fn crossings_between(&self, from: f64, to: f64) -> u64 {
        (self.boundary_ordinal(to) - self.boundary_ordinal(from)).unsigned_abs()
    }
}
