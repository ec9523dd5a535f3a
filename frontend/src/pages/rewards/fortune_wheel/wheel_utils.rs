use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;
use web_sys::{window, CustomEvent, CustomEventInit};
use wasm_bindgen::JsValue;
use shared::{Prize, WheelGame, WheelResult};
use crate::styles;

pub const WHEEL_RESULT_EVENT: &str = "wheelResult";

/// Shared handle to the wheel. Props compare by identity, not by game state.
#[derive(Clone)]
pub struct WheelHandle(pub Rc<RefCell<WheelGame>>);

impl PartialEq for WheelHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Frame clock shared with requestAnimationFrame timestamps.
pub fn now_ms() -> f64 {
    window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

/// JSON payload carried in the event's `detail`.
fn event_detail(result: &WheelResult) -> Result<String, serde_json::Error> {
    serde_json::to_string(result)
}

/// Lets the surrounding storefront react to a win without depending on this component.
pub fn dispatch_result_event(result: &WheelResult) {
    let Some(window) = window() else { return };
    let detail = match event_detail(result) {
        Ok(json) => json,
        Err(e) => {
            log::error!("Failed to serialize wheel result: {}", e);
            return;
        }
    };

    let event_init = CustomEventInit::new();
    event_init.set_detail(&JsValue::from_str(&detail));
    let event = match CustomEvent::new_with_event_init_dict(WHEEL_RESULT_EVENT, &event_init) {
        Ok(event) => event,
        Err(e) => {
            log::warn!("Failed to create {} event: {:?}", WHEEL_RESULT_EVENT, e);
            return;
        }
    };
    if let Err(e) = window.dispatch_event(&event) {
        log::warn!("Failed to dispatch {} event: {:?}", WHEEL_RESULT_EVENT, e);
    }
}

pub fn prize_chance(prizes: &[Prize], index: usize) -> f64 {
    let total: f64 = prizes.iter().map(|p| p.weight).sum();
    prizes[index].weight / total * 100.0
}

#[derive(Properties, PartialEq)]
pub struct ResultDisplayProps {
    pub result: Option<WheelResult>,
}

#[function_component(ResultDisplay)]
pub fn result_display(props: &ResultDisplayProps) -> Html {
    let Some(result) = &props.result else {
        return html! {};
    };

    html! {
        <div class="mt-8 mb-4 flex flex-col items-center justify-center">
            <div class={styles::RESULT_BANNER}>
                <span>{format!("You won {}!", result.prize.label)}</span>
            </div>
            <div class="text-sm text-gray-600 dark:text-gray-400 mt-3 bg-gray-100 dark:bg-gray-800 px-4 py-2 rounded-full">
                {format!("Sector {} at {:.1}°", result.winning_index + 1, result.rotation.to_degrees())}
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PrizeTableProps {
    pub prizes: Vec<Prize>,
}

#[function_component(PrizeTable)]
pub fn prize_table(props: &PrizeTableProps) -> Html {
    html! {
        <div class="grid grid-cols-2 md:grid-cols-4 gap-3 mt-4">
            { for props.prizes.iter().enumerate().map(|(index, prize)| html! {
                <div key={prize.id} class={styles::PRIZE_TILE}>
                    <div
                        class="w-4 h-4 rounded-full mr-3 flex-shrink-0 border border-gray-400"
                        style={format!("background-color: {}", prize.color.css())}
                    ></div>
                    <div class="text-left">
                        <div class="font-medium text-gray-900 dark:text-white">{&prize.label}</div>
                        <div class={styles::TEXT_SMALL}>
                            {format!("{:.1}% chance", prize_chance(&props.prizes, index))}
                        </div>
                    </div>
                </div>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::wheel_config::default_prizes;

    #[test]
    fn test_prize_chance() {
        let mut prizes = default_prizes();
        assert!((prize_chance(&prizes, 0) - 12.5).abs() < 1e-9);
        prizes[0].weight = 9.0;
        assert!((prize_chance(&prizes, 0) - 56.25).abs() < 1e-9);
    }

    #[test]
    fn test_event_detail_carries_result() {
        let result = WheelResult {
            prize: default_prizes()[3].clone(),
            winning_index: 3,
            rotation: 202.5f64.to_radians(),
        };
        let detail = event_detail(&result).unwrap();
        let value: serde_json::Value = serde_json::from_str(&detail).unwrap();
        assert_eq!(value["winning_index"], 3);
        assert_eq!(value["prize"]["label"], "EMPTY");
        assert_eq!(value["prize"]["id"], 4);
        let parsed: WheelResult = serde_json::from_str(&detail).unwrap();
        assert_eq!(parsed.prize, result.prize);
        assert!((parsed.rotation - result.rotation).abs() < 1e-12);
    }
}
