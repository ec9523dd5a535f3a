use crate::wheel_config::TickerConfig;

/// A sector boundary passed the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickEvent {
    /// Sector that just arrived under the pointer.
    pub sector_index: usize,
    /// Feedback strength in `[min_intensity, max_intensity]`.
    pub intensity: f64,
}

/// Per-frame rotation delta is the velocity proxy: faster spin, stronger tick.
pub fn tick_intensity(delta: f64, ticker: &TickerConfig) -> f64 {
    (delta.abs() * ticker.intensity_scale).clamp(ticker.min_intensity, ticker.max_intensity)
}

/// Tick events for a move from `previous_ordinal` to `ordinal`, one per boundary.
pub fn ticks_between(previous_ordinal: i64, ordinal: i64, sector_count: usize, intensity: f64) -> Vec<TickEvent> {
    let n = sector_count as i64;
    let step = if ordinal >= previous_ordinal { 1 } else { -1 };
    let mut ticks = Vec::with_capacity((ordinal - previous_ordinal).unsigned_abs() as usize);
    let mut current = previous_ordinal;
    while current != ordinal {
        current += step;
        ticks.push(TickEvent {
            sector_index: current.rem_euclid(n) as usize,
            intensity,
        });
    }
    ticks
}

/// Kick and click both react to the strongest tick of a frame only.
pub fn strongest(ticks: &[TickEvent]) -> Option<TickEvent> {
    ticks
        .iter()
        .copied()
        .max_by(|a, b| a.intensity.total_cmp(&b.intensity))
}
