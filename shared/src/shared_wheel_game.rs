use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use crate::click_sound::ClickParams;
use crate::error::WheelError;
use crate::pointer_kick::PointerKick;
use crate::sector_layout::SectorLayout;
use crate::spin_engine::{plan_for_outcome, plan_spin, SpinPlan};
use crate::spin_state::{SpinEvent, SpinState};
use crate::tick::{strongest, TickEvent};
use crate::wheel_config::{Prize, WheelConfig};

/// Represents the result of a wheel spin
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WheelResult {
    pub prize: Prize,
    pub winning_index: usize,
    /// Resting rotation, already wrapped into `[0, 2π)`.
    pub rotation: f64,
}

/// What the renderer needs after one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameOutput {
    pub rotation: f64,
    pub pointer_rotation: f64,
    pub ticks: Vec<TickEvent>,
    /// At most one click per frame, sized for the strongest tick.
    pub click: Option<ClickParams>,
    pub completed: Option<WheelResult>,
}

/// The wheel component state: configuration, current rotation and the one
/// spin that may be in flight.
#[derive(Debug, Clone)]
pub struct WheelGame<R: Rng = SmallRng> {
    config: WheelConfig,
    layout: SectorLayout,
    rng: R,
    rotation: f64,
    pointer: PointerKick,
    spin: Option<SpinState>,
    last_result: Option<WheelResult>,
}

impl WheelGame<SmallRng> {
    pub fn new(config: WheelConfig) -> Result<Self, WheelError> {
        Self::with_rng(config, SmallRng::from_entropy())
    }

    /// Same seed, same sequence of outcomes.
    pub fn with_seed(config: WheelConfig, seed: u64) -> Result<Self, WheelError> {
        Self::with_rng(config, SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> WheelGame<R> {
    pub fn with_rng(config: WheelConfig, rng: R) -> Result<Self, WheelError> {
        config.validate_config()?;
        let layout = SectorLayout::new(&config.prizes, config.alignment())?;

        log::debug!("Wheel ready with {} sectors", layout.len());
        Ok(Self {
            config,
            layout,
            rng,
            rotation: 0.0,
            pointer: PointerKick::default(),
            spin: None,
            last_result: None,
        })
    }

    pub fn config(&self) -> &WheelConfig {
        &self.config
    }

    pub fn layout(&self) -> &SectorLayout {
        &self.layout
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn pointer_rotation(&self) -> f64 {
        self.pointer.angle()
    }

    pub fn is_spinning(&self) -> bool {
        self.spin.is_some()
    }

    /// Spinning, or the pointer is still springing back from a tick.
    pub fn is_animating(&self) -> bool {
        self.is_spinning() || !self.pointer.is_idle()
    }

    /// Only an active spin blocks a new one; a settling pointer does not.
    pub fn can_spin(&self) -> bool {
        !self.is_spinning()
    }

    pub fn last_result(&self) -> Option<&WheelResult> {
        self.last_result.as_ref()
    }

    /// Draws the outcome and starts animating towards it.
    pub fn start_spin(&mut self, now: f64) -> Result<SpinPlan, WheelError> {
        self.ensure_idle()?;
        let plan = plan_spin(&self.layout, self.rotation, &self.config.animation, &mut self.rng)?;
        self.begin(plan, now);
        Ok(plan)
    }

    /// Starts a spin whose outcome was decided elsewhere, e.g. by a server.
    pub fn start_spin_to(&mut self, now: f64, winning_index: usize, jitter_unit: f64) -> Result<SpinPlan, WheelError> {
        self.ensure_idle()?;
        let plan = plan_for_outcome(&self.layout, self.rotation, &self.config.animation, winning_index, jitter_unit)?;
        self.begin(plan, now);
        Ok(plan)
    }

    fn ensure_idle(&self) -> Result<(), WheelError> {
        if self.is_spinning() {
            log::warn!("Spin requested while the wheel is still turning");
            return Err(WheelError::AnimationInterrupted);
        }
        Ok(())
    }

    fn begin(&mut self, plan: SpinPlan, now: f64) {
        let animation = &self.config.animation;
        self.spin = Some(SpinState::new(&plan, &self.layout, now, animation.duration_ms, animation.ease));
        self.last_result = None;
    }

    /// Advances the wheel to `now`. Call once per animation frame.
    pub fn frame(&mut self, now: f64) -> FrameOutput {
        let mut ticks = Vec::new();
        let mut completed = None;

        if let Some(state) = self.spin {
            let (next, events) = state.step(&self.layout, &self.config.ticker, now);
            self.spin = Some(next);

            for event in events {
                match event {
                    SpinEvent::Frame { rotation, .. } => self.rotation = rotation,
                    SpinEvent::Tick(tick) => ticks.push(tick),
                    SpinEvent::Completed { winning_index, rotation } => {
                        completed = Some(self.complete_spin(winning_index, rotation));
                    }
                }
            }
        }

        let mut click = None;
        if let Some(tick) = strongest(&ticks) {
            log::debug!("Tick x{} into sector {} at {:.2}", ticks.len(), tick.sector_index, tick.intensity);
            self.pointer.trigger(now, tick.intensity, &self.config.ticker);
            if self.config.audio.enabled {
                click = Some(ClickParams::for_intensity(tick.intensity, &self.config.audio));
            }
        }

        FrameOutput {
            rotation: self.rotation,
            pointer_rotation: self.pointer.sample(now),
            ticks,
            click,
            completed,
        }
    }

    fn complete_spin(&mut self, winning_index: usize, rotation: f64) -> WheelResult {
        self.spin = None;
        self.rotation = rotation;

        let result = WheelResult {
            prize: self.config.prizes[winning_index].clone(),
            winning_index,
            rotation,
        };
        log::info!("Wheel stopped on '{}' (sector {})", result.prize.label, winning_index);
        self.last_result = Some(result.clone());
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::TAU;

    fn fast_config() -> WheelConfig {
        let mut config = WheelConfig::default();
        config.animation.duration_ms = 1000.0;
        config
    }

    /// Runs frames at 60fps until the spin settles.
    fn run_to_completion<R: Rng>(game: &mut WheelGame<R>, start: f64) -> (WheelResult, Vec<FrameOutput>) {
        let mut outputs = Vec::new();
        let mut now = start;
        loop {
            now += 1000.0 / 60.0;
            let out = game.frame(now);
            let done = out.completed.clone();
            outputs.push(out);
            if let Some(result) = done {
                return (result, outputs);
            }
            assert!(now < start + 60_000.0, "spin never completed");
        }
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = WheelConfig { prizes: vec![], ..WheelConfig::default() };
        assert!(matches!(WheelGame::with_seed(config, 1), Err(WheelError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_concrete_scenario_lands_on_empty() {
        let mut game = WheelGame::with_seed(fast_config(), 1).unwrap();
        let plan = game.start_spin_to(0.0, 3, 0.0).unwrap();
        assert!((plan.target_rotation.to_degrees() - 5242.5).abs() < 1e-9);

        let (result, _) = run_to_completion(&mut game, 0.0);
        assert_eq!(result.winning_index, 3);
        assert_eq!(result.prize.label, "EMPTY");
        assert!((game.rotation().to_degrees() - 202.5).abs() < 1e-9);
        assert_eq!(game.last_result(), Some(&result));
    }

    #[test]
    fn test_spin_rejected_while_active() {
        let mut game = WheelGame::with_seed(fast_config(), 9).unwrap();
        game.start_spin(0.0).unwrap();
        game.frame(100.0);
        let before = game.spin;
        let rotation = game.rotation();

        assert_eq!(game.start_spin(150.0), Err(WheelError::AnimationInterrupted));
        assert_eq!(game.start_spin_to(150.0, 0, 0.0), Err(WheelError::AnimationInterrupted));
        assert_eq!(game.spin, before);
        assert_eq!(game.rotation(), rotation);
        assert!(!game.can_spin());
    }

    #[test]
    fn test_nan_jitter_leaves_wheel_untouched() {
        let mut game = WheelGame::with_seed(fast_config(), 5).unwrap();
        game.start_spin_to(0.0, 3, 0.0).unwrap();
        let (first, _) = run_to_completion(&mut game, 0.0);

        assert!(matches!(
            game.start_spin_to(2000.0, 2, f64::NAN),
            Err(WheelError::InvalidConfiguration(_))
        ));
        assert!(!game.is_spinning());
        assert_eq!(game.rotation(), first.rotation);

        let plan = game.start_spin_to(2000.0, 2, 0.5).unwrap();
        assert_eq!(plan.start_rotation, first.rotation);
        let (second, _) = run_to_completion(&mut game, 2000.0);
        assert!(second.rotation.is_finite());
        assert_eq!(second.winning_index, 2);
    }

    #[test]
    fn test_pointer_settling_does_not_block_next_spin() {
        let mut game = WheelGame::with_seed(fast_config(), 8).unwrap();
        game.start_spin(0.0).unwrap();
        assert!(!game.can_spin());
        let (_, outputs) = run_to_completion(&mut game, 0.0);
        let done_at = outputs.len() as f64 * 1000.0 / 60.0;

        // Kick the pointer by hand so it is mid-swing when the spin is requested
        let ticker = game.config().ticker.clone();
        game.pointer.trigger(done_at, 1.0, &ticker);
        game.pointer.sample(done_at + 1.0);
        assert!(game.is_animating());
        assert!(game.can_spin());
        assert!(game.start_spin(done_at + 1.0).is_ok());
    }

    #[test]
    fn test_completion_reported_once() {
        let mut game = WheelGame::with_seed(fast_config(), 4).unwrap();
        game.start_spin(0.0).unwrap();
        let (_, outputs) = run_to_completion(&mut game, 0.0);
        assert_eq!(outputs.iter().filter(|o| o.completed.is_some()).count(), 1);

        let after = game.frame(5000.0);
        assert!(after.completed.is_none());
        assert!(after.ticks.is_empty());
        assert!(game.can_spin());
        assert!(!game.is_animating());
    }

    #[test]
    fn test_sequential_spins_stay_normalized_and_aligned() {
        let mut game = WheelGame::with_seed(fast_config(), 21).unwrap();
        let mut now = 0.0;
        for _ in 0..40 {
            let plan = game.start_spin(now).unwrap();
            assert!(plan.target_rotation >= plan.start_rotation);
            let (result, outputs) = run_to_completion(&mut game, now);
            now += outputs.len() as f64 * 1000.0 / 60.0 + 10.0;

            assert!(game.rotation() >= 0.0 && game.rotation() < TAU);
            assert_eq!(result.rotation, game.rotation());
            assert_eq!(game.layout().sector_under_pointer(game.rotation()), result.winning_index);

            let ticks: usize = outputs.iter().map(|o| o.ticks.len()).sum();
            let expected = game.layout().crossings_between(plan.start_rotation, plan.target_rotation);
            assert_eq!(ticks as u64, expected);
        }
    }

    #[test]
    fn test_same_seed_same_outcomes() {
        let winners = |seed| {
            let mut game = WheelGame::with_seed(fast_config(), seed).unwrap();
            (0..10)
                .map(|i| {
                    let start = i as f64 * 2000.0;
                    game.start_spin(start).unwrap();
                    run_to_completion(&mut game, start).0.winning_index
                })
                .collect::<Vec<_>>()
        };
        assert_eq!(winners(77), winners(77));
    }

    #[test]
    fn test_ticks_kick_pointer_and_click() {
        let mut game = WheelGame::with_seed(fast_config(), 2).unwrap();
        game.start_spin(0.0).unwrap();
        let (_, outputs) = run_to_completion(&mut game, 0.0);

        let ticking = outputs.iter().find(|o| !o.ticks.is_empty()).unwrap();
        assert!(ticking.click.is_some());
        let rest = game.pointer.rest();
        assert!(outputs.iter().any(|o| (o.pointer_rotation - rest).abs() > 1e-3));

        let clicks = outputs.iter().filter(|o| o.click.is_some()).count();
        let ticking_frames = outputs.iter().filter(|o| !o.ticks.is_empty()).count();
        assert_eq!(clicks, ticking_frames);
    }

    #[test]
    fn test_muted_wheel_still_kicks() {
        let mut config = fast_config();
        config.audio.enabled = false;
        let mut game = WheelGame::with_seed(config, 2).unwrap();
        game.start_spin(0.0).unwrap();
        let (_, outputs) = run_to_completion(&mut game, 0.0);
        assert!(outputs.iter().all(|o| o.click.is_none()));
        assert!(outputs.iter().any(|o| !o.ticks.is_empty()));
    }
}
