use wasm_bindgen::JsValue;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{AudioContext, AudioContextState, OscillatorType};
use shared::click_sound::ClickParams;
use shared::WheelError;

/// Web Audio click synthesizer. Everything here is best effort: without a
/// usable context the wheel simply ticks silently.
pub struct ClickSynth {
    context: Option<AudioContext>,
    resume_requested: bool,
}

impl ClickSynth {
    pub fn new(enabled: bool) -> Self {
        let context = if enabled {
            AudioContext::new()
                .map_err(|e| log::warn!("{}", unavailable(&e)))
                .ok()
        } else {
            None
        };
        Self {
            context,
            resume_requested: false,
        }
    }

    /// Browsers start contexts suspended until a user gesture, so the first spin resumes it.
    pub fn resume_once(&mut self) {
        if self.resume_requested {
            return;
        }
        self.resume_requested = true;

        let Some(context) = &self.context else { return };
        if context.state() != AudioContextState::Suspended {
            return;
        }
        match context.resume() {
            Ok(promise) => spawn_local(async move {
                if let Err(e) = JsFuture::from(promise).await {
                    log::warn!("{}", unavailable(&e));
                }
            }),
            Err(e) => log::warn!("{}", unavailable(&e)),
        }
    }

    pub fn play(&self, click: &ClickParams) {
        let Some(context) = &self.context else { return };
        if context.state() != AudioContextState::Running {
            return;
        }
        if let Err(e) = schedule_click(context, click) {
            log::warn!("{}", unavailable(&e));
        }
    }
}

fn unavailable(err: &JsValue) -> WheelError {
    WheelError::AudioUnavailable(format!("{:?}", err))
}

fn schedule_click(context: &AudioContext, click: &ClickParams) -> Result<(), JsValue> {
    let start = context.current_time();
    let end = start + click.duration;

    let oscillator = context.create_oscillator()?;
    oscillator.set_type(OscillatorType::Triangle);
    let frequency = oscillator.frequency();
    frequency.set_value_at_time(click.start_frequency as f32, start)?;
    frequency.exponential_ramp_to_value_at_time(click.end_frequency as f32, end)?;

    let envelope = context.create_gain()?;
    let gain = envelope.gain();
    gain.set_value_at_time(0.0, start)?;
    gain.linear_ramp_to_value_at_time(click.peak_gain as f32, start + click.attack)?;
    gain.exponential_ramp_to_value_at_time(click.floor_gain as f32, end)?;

    oscillator.connect_with_audio_node(&envelope)?;
    envelope.connect_with_audio_node(&context.destination())?;
    oscillator.start()?;
    oscillator.stop_with_when(end)?;
    Ok(())
}
