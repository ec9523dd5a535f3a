use std::f64::consts::TAU;
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;
use crate::error::WheelError;
use crate::sector_layout::{normalize_angle, SectorLayout};
use crate::wheel_config::AnimationConfig;

/// Outcome of a spin, decided before the wheel starts moving.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinPlan {
    pub winning_index: usize,
    pub start_rotation: f64,
    pub target_rotation: f64,
    /// Signed stop offset from the winning sector's centre, in radians.
    pub jitter: f64,
}

impl SpinPlan {
    pub fn total_rotation(&self) -> f64 {
        self.target_rotation - self.start_rotation
    }
}

/// Picks the winning sector with probability `weight_i / Σweight`.
pub fn choose_winner<R: Rng + ?Sized>(layout: &SectorLayout, rng: &mut R) -> Result<usize, WheelError> {
    // Arcs are proportional to the weights, so they double as the distribution.
    let dist = WeightedIndex::new(layout.arcs())
        .map_err(|e| WheelError::InvalidConfiguration(format!("cannot weight prizes: {}", e)))?;
    Ok(dist.sample(rng))
}

/// Rotation that stops the wheel with `winning_index` under the pointer.
///
/// `jitter_unit` in `[-1, 1]` is scaled by `jitter_fraction` of half the sector,
/// so the stop never leaves the sector as long as the fraction stays below 1.
pub fn target_rotation(
    layout: &SectorLayout,
    current_rotation: f64,
    turns: u32,
    winning_index: usize,
    jitter_unit: f64,
    jitter_fraction: f64,
) -> (f64, f64) {
    let half_arc = layout.arc(winning_index) / 2.0;
    let jitter = jitter_unit.clamp(-1.0, 1.0) * jitter_fraction * half_arc;
    let whole_turns = current_rotation - normalize_angle(current_rotation);

    let mut target = whole_turns + turns as f64 * TAU + layout.alignment() - layout.mid(winning_index) + jitter;
    while target < current_rotation {
        target += TAU;
    }
    (target, jitter)
}

pub fn plan_for_outcome(
    layout: &SectorLayout,
    current_rotation: f64,
    animation: &AnimationConfig,
    winning_index: usize,
    jitter_unit: f64,
) -> Result<SpinPlan, WheelError> {
    if winning_index >= layout.len() {
        return Err(WheelError::InvalidConfiguration(format!(
            "winning index {} out of range for {} sectors",
            winning_index,
            layout.len()
        )));
    }
    if !jitter_unit.is_finite() {
        return Err(WheelError::InvalidConfiguration(format!("jitter {} is not a finite number", jitter_unit)));
    }

    let (target, jitter) = target_rotation(
        layout,
        current_rotation,
        animation.spins,
        winning_index,
        jitter_unit,
        animation.jitter,
    );

    Ok(SpinPlan {
        winning_index,
        start_rotation: current_rotation,
        target_rotation: target,
        jitter,
    })
}

/// Decides the winner and the stop angle for a spin from `current_rotation`.
/// The RNG is drawn only here; nothing later re-randomizes the outcome.
pub fn plan_spin<R: Rng + ?Sized>(
    layout: &SectorLayout,
    current_rotation: f64,
    animation: &AnimationConfig,
    rng: &mut R,
) -> Result<SpinPlan, WheelError> {
    let winning_index = choose_winner(layout, rng)?;
    let jitter_unit = if animation.jitter > 0.0 { rng.gen_range(-1.0..=1.0) } else { 0.0 };
    let plan = plan_for_outcome(layout, current_rotation, animation, winning_index, jitter_unit)?;

    log::debug!(
        "Spin planned: sector {} target {:.4} rad ({:.2} turns)",
        plan.winning_index,
        plan.target_rotation,
        plan.total_rotation() / TAU
    );
    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use crate::wheel_config::{default_prizes, Prize};

    fn eight() -> SectorLayout {
        SectorLayout::new(&default_prizes(), 0.0).unwrap()
    }

    fn animation(spins: u32) -> AnimationConfig {
        AnimationConfig { spins, ..AnimationConfig::default() }
    }

    #[test]
    fn test_concrete_scenario_index_three() {
        let layout = eight();
        let plan = plan_for_outcome(&layout, 0.0, &animation(15), 3, 0.0).unwrap();

        assert!((plan.target_rotation.to_degrees() - 5242.5).abs() < 1e-9);
        let stop = normalize_angle(plan.target_rotation);
        assert!((stop.to_degrees() - 202.5).abs() < 1e-9);
        assert_eq!(layout.sector_under_pointer(stop), 3);
        assert_eq!(layout.sector_under_pointer(plan.target_rotation), 3);
    }

    #[test]
    fn test_uniform_selection() {
        let layout = eight();
        let mut rng = SmallRng::seed_from_u64(7);
        let mut counts = [0u32; 8];
        let spins = 100_000;
        for _ in 0..spins {
            counts[choose_winner(&layout, &mut rng).unwrap()] += 1;
        }
        let expected = spins as f64 / 8.0;
        for count in counts {
            // ~5 standard deviations for p = 1/8
            assert!((count as f64 - expected).abs() < 525.0, "counts {:?}", counts);
        }
    }

    #[test]
    fn test_weighted_selection() {
        let prizes = vec![
            Prize::new(1, "common", 0).with_weight(3.0),
            Prize::new(2, "rare", 0).with_weight(1.0),
        ];
        let layout = SectorLayout::new(&prizes, 0.0).unwrap();
        let mut rng = SmallRng::seed_from_u64(11);
        let rare = (0..40_000)
            .filter(|_| choose_winner(&layout, &mut rng).unwrap() == 1)
            .count();
        let share = rare as f64 / 40_000.0;
        assert!((share - 0.25).abs() < 0.015, "rare share {}", share);
    }

    #[test]
    fn test_every_plan_lands_on_winner() {
        let layout = eight();
        let mut rng = SmallRng::seed_from_u64(42);
        let config = AnimationConfig::default();
        let mut rotation = 0.0;
        for _ in 0..10_000 {
            let plan = plan_spin(&layout, rotation, &config, &mut rng).unwrap();
            assert_eq!(layout.sector_under_pointer(plan.target_rotation), plan.winning_index);
            rotation = normalize_angle(plan.target_rotation);
        }
    }

    #[test]
    fn test_forward_spin_from_accumulated_rotation() {
        let layout = eight();
        let mut rng = SmallRng::seed_from_u64(3);
        for spins in [1, 2, 15] {
            let config = animation(spins);
            let mut rotation = 0.37;
            // Never normalize here: rotation keeps growing like 50 raw spins would.
            for _ in 0..50 {
                let plan = plan_spin(&layout, rotation, &config, &mut rng).unwrap();
                assert!(plan.target_rotation >= rotation);
                assert_eq!(layout.sector_under_pointer(plan.target_rotation), plan.winning_index);
                rotation = plan.target_rotation;
            }
            assert!(rotation > 49.0 * (spins as f64 - 1.0) * TAU);
        }
    }

    #[test]
    fn test_negative_start_still_spins_forward() {
        let layout = eight();
        let plan = plan_for_outcome(&layout, -100.0, &animation(1), 5, 1.0).unwrap();
        assert!(plan.target_rotation >= -100.0);
        assert_eq!(layout.sector_under_pointer(plan.target_rotation), 5);
    }

    #[test]
    fn test_jitter_stays_inside_sector() {
        let layout = eight();
        let arc = TAU / 8.0;
        let config = AnimationConfig::default();
        for index in 0..8 {
            for unit in [-1.0, -0.5, 0.0, 0.5, 1.0] {
                let plan = plan_for_outcome(&layout, 0.0, &config, index, unit).unwrap();
                assert!(plan.jitter.abs() <= 0.4 * arc / 2.0 + 1e-12);
                assert_eq!(layout.sector_under_pointer(plan.target_rotation), index);

                let offset = layout.pointer_angle(plan.target_rotation) - layout.start(index);
                assert!(offset > 0.0 && offset < arc);
            }
        }
    }

    #[test]
    fn test_out_of_range_index_rejected() {
        let layout = eight();
        assert!(plan_for_outcome(&layout, 0.0, &AnimationConfig::default(), 8, 0.0).is_err());
    }

    #[test]
    fn test_non_finite_jitter_rejected() {
        let layout = eight();
        let config = AnimationConfig::default();
        for unit in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(
                plan_for_outcome(&layout, 0.0, &config, 2, unit),
                Err(WheelError::InvalidConfiguration(_))
            ));
        }
    }
}
