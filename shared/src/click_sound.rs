use crate::wheel_config::ClickConfig;

/// Parameters of one procedural click: a short triangle-wave burst.
///
/// Times are in seconds from the start of the burst so they can be handed to
/// audio parameter automation directly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClickParams {
    pub start_frequency: f64,
    pub end_frequency: f64,
    pub peak_gain: f64,
    pub attack: f64,
    pub duration: f64,
    pub floor_gain: f64,
}

impl ClickParams {
    /// Stronger ticks start higher and louder.
    pub fn for_intensity(intensity: f64, audio: &ClickConfig) -> Self {
        let intensity = intensity.clamp(0.0, 1.0);
        Self {
            start_frequency: audio.base_freq + audio.freq_range * intensity,
            end_frequency: audio.base_freq,
            peak_gain: (audio.max_gain * intensity).max(audio.floor_gain),
            attack: audio.attack_ms / 1000.0,
            duration: audio.duration_ms / 1000.0,
            floor_gain: audio.floor_gain,
        }
    }

    /// Exponential sweep from `start_frequency` down to `end_frequency`.
    pub fn frequency_at(&self, t: f64) -> f64 {
        let t = (t / self.duration).clamp(0.0, 1.0);
        self.start_frequency * (self.end_frequency / self.start_frequency).powf(t)
    }

    /// Linear attack from silence, then exponential decay to `floor_gain`.
    pub fn gain_at(&self, t: f64) -> f64 {
        if t <= 0.0 {
            return 0.0;
        }
        if t < self.attack {
            return self.peak_gain * t / self.attack;
        }
        if t >= self.duration {
            return self.floor_gain;
        }
        let decay = (t - self.attack) / (self.duration - self.attack);
        self.peak_gain * (self.floor_gain / self.peak_gain).powf(decay)
    }
}
