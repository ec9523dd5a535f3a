use crate::easing::Easing;
use crate::sector_layout::{normalize_angle, SectorLayout};
use crate::spin_engine::SpinPlan;
use crate::tick::{tick_intensity, ticks_between, TickEvent};
use crate::wheel_config::TickerConfig;

/// Everything that happened in one animation frame, in order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpinEvent {
    Frame { rotation: f64, delta: f64 },
    Tick(TickEvent),
    /// Fires once. `rotation` is the target wrapped into `[0, 2π)`.
    Completed { winning_index: usize, rotation: f64 },
}

/// The single in-flight spin. Times are milliseconds on the frame clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinState {
    pub winning_index: usize,
    pub start_rotation: f64,
    pub target_rotation: f64,
    pub start_time: f64,
    pub duration: f64,
    pub easing: Easing,
    pub last_sampled_rotation: f64,
    pub last_crossed_sector_index: usize,
    pub finished: bool,
    last_ordinal: i64,
}

impl SpinState {
    /// Boundary tracking starts from the rest position, so the first frame can
    /// only tick for a boundary it really crossed.
    pub fn new(plan: &SpinPlan, layout: &SectorLayout, now: f64, duration: f64, easing: Easing) -> Self {
        Self {
            winning_index: plan.winning_index,
            start_rotation: plan.start_rotation,
            target_rotation: plan.target_rotation,
            start_time: now,
            duration,
            easing,
            last_sampled_rotation: plan.start_rotation,
            last_crossed_sector_index: layout.sector_under_pointer(plan.start_rotation),
            finished: false,
            last_ordinal: layout.boundary_ordinal(plan.start_rotation),
        }
    }

    pub fn progress(&self, now: f64) -> f64 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        ((now - self.start_time) / self.duration).clamp(0.0, 1.0)
    }

    pub fn rotation_at(&self, now: f64) -> f64 {
        let t = self.progress(now);
        if t >= 1.0 {
            return self.target_rotation;
        }
        self.start_rotation + (self.target_rotation - self.start_rotation) * self.easing.apply(t)
    }

    /// Advances the spin to `now` without touching `self`.
    pub fn step(&self, layout: &SectorLayout, ticker: &TickerConfig, now: f64) -> (SpinState, Vec<SpinEvent>) {
        if self.finished {
            return (*self, Vec::new());
        }

        let rotation = self.rotation_at(now);
        let delta = rotation - self.last_sampled_rotation;
        let ordinal = layout.boundary_ordinal(rotation);

        let mut events = vec![SpinEvent::Frame { rotation, delta }];
        if ordinal != self.last_ordinal {
            let intensity = tick_intensity(delta, ticker);
            events.extend(
                ticks_between(self.last_ordinal, ordinal, layout.len(), intensity)
                    .into_iter()
                    .map(SpinEvent::Tick),
            );
        }

        let finished = self.progress(now) >= 1.0;
        if finished {
            events.push(SpinEvent::Completed {
                winning_index: self.winning_index,
                rotation: normalize_angle(self.target_rotation),
            });
        }

        let next = SpinState {
            last_sampled_rotation: rotation,
            last_crossed_sector_index: layout.sector_under_pointer(rotation),
            last_ordinal: ordinal,
            finished,
            ..*self
        };
        (next, events)
    }
}

/// Drives `state` across the given frame timestamps.
///
/// `on_frame(rotation, delta)` runs every frame and `on_complete(winning_index)`
/// once when the spin settles. Returns the final state; timestamps after
/// completion are ignored.
pub fn animate<I, F, C>(
    mut state: SpinState,
    layout: &SectorLayout,
    ticker: &TickerConfig,
    frame_times: I,
    mut on_frame: F,
    on_complete: C,
) -> SpinState
where
    I: IntoIterator<Item = f64>,
    F: FnMut(f64, f64),
    C: FnOnce(usize),
{
    let mut on_complete = Some(on_complete);
    for now in frame_times {
        if state.finished {
            break;
        }
        let (next, events) = state.step(layout, ticker, now);
        state = next;
        for event in events {
            match event {
                SpinEvent::Frame { rotation, delta } => on_frame(rotation, delta),
                SpinEvent::Completed { winning_index, .. } => {
                    if let Some(done) = on_complete.take() {
                        done(winning_index);
                    }
                }
                SpinEvent::Tick(_) => {}
            }
        }
    }
    state
}
