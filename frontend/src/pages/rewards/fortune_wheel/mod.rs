mod wheel_audio;
mod wheel_canvas;
mod wheel_utils;

use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;
use gloo_events::EventListener;
use gloo_render::{request_animation_frame, AnimationFrame};
use web_sys::{window, HtmlCanvasElement};
use shared::scene_layout::button_rect;
use shared::{Prize, WheelResult};

use wheel_audio::ClickSynth;
use wheel_canvas::WheelPainter;
use wheel_utils::{dispatch_result_event, now_ms, ResultDisplay};

pub use wheel_utils::{PrizeTable, WheelHandle, WHEEL_RESULT_EVENT};

#[derive(Properties, PartialEq)]
pub struct FortuneWheelProps {
    pub wheel: WheelHandle,
    /// Fires once per spin, after the wheel has settled.
    #[prop_or_default]
    pub on_spin_complete: Callback<Prize>,
}

/// Everything a frame callback needs, cloned into each scheduled frame.
#[derive(Clone)]
struct FrameLoop {
    wheel: WheelHandle,
    painter: Rc<RefCell<Option<WheelPainter>>>,
    audio: Rc<RefCell<ClickSynth>>,
    frame: Rc<RefCell<Option<AnimationFrame>>>,
    spinning: UseStateHandle<bool>,
    result: UseStateHandle<Option<WheelResult>>,
    on_spin_complete: Callback<Prize>,
}

impl FrameLoop {
    /// Replacing the stored handle drops the previous request, so at most one
    /// callback is ever pending.
    fn schedule(&self) {
        let this = self.clone();
        let handle = request_animation_frame(move |now| this.tick(now));
        *self.frame.borrow_mut() = Some(handle);
    }

    fn tick(&self, now: f64) {
        let output = self.wheel.0.borrow_mut().frame(now);

        if let Some(click) = &output.click {
            self.audio.borrow().play(click);
        }

        if let Some(painter) = self.painter.borrow().as_ref() {
            let spinning = self.wheel.0.borrow().is_spinning();
            if let Err(e) = painter.paint(output.rotation, output.pointer_rotation, spinning) {
                log::error!("Failed to paint wheel: {:?}", e);
            }
        }

        if let Some(result) = output.completed {
            self.spinning.set(false);
            self.result.set(Some(result.clone()));
            dispatch_result_event(&result);
            self.on_spin_complete.emit(result.prize);
        }

        // Keep drawing until the pointer has settled after the last tick
        if self.wheel.0.borrow().is_animating() {
            self.schedule();
        } else {
            self.frame.borrow_mut().take();
        }
    }

    fn repaint(&self) {
        let game = self.wheel.0.borrow();
        if let Some(painter) = self.painter.borrow().as_ref() {
            if let Err(e) = painter.paint(game.rotation(), game.pointer_rotation(), game.is_spinning()) {
                log::error!("Failed to paint wheel: {:?}", e);
            }
        }
    }
}

#[function_component(FortuneWheel)]
pub fn fortune_wheel(props: &FortuneWheelProps) -> Html {
    let canvas_ref = use_node_ref();
    let spinning = use_state(|| false);
    let result = use_state(|| None::<WheelResult>);
    let painter = use_mut_ref(|| None::<WheelPainter>);
    let frame = use_mut_ref(|| None::<AnimationFrame>);
    let audio = {
        let enabled = props.wheel.0.borrow().config().audio.enabled;
        use_mut_ref(move || ClickSynth::new(enabled))
    };

    let frame_loop = FrameLoop {
        wheel: props.wheel.clone(),
        painter: painter.clone(),
        audio: audio.clone(),
        frame: frame.clone(),
        spinning: spinning.clone(),
        result: result.clone(),
        on_spin_complete: props.on_spin_complete.clone(),
    };

    // Attach the painter once the canvas exists, and keep it sized to the element
    {
        let canvas_ref = canvas_ref.clone();
        let frame_loop = frame_loop.clone();
        use_effect_with(props.wheel.clone(), move |wheel| {
            if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                match WheelPainter::new(canvas, &wheel.0.borrow()) {
                    Ok(p) => *frame_loop.painter.borrow_mut() = Some(p),
                    Err(e) => log::error!("Failed to set up wheel canvas: {:?}", e),
                }
            }
            frame_loop.repaint();

            let listener = window().map(|window| {
                let frame_loop = frame_loop.clone();
                EventListener::new(&window, "resize", move |_| {
                    if let Some(painter) = frame_loop.painter.borrow_mut().as_mut() {
                        painter.resize();
                    }
                    frame_loop.repaint();
                })
            });

            move || {
                drop(listener);
                // Unmounting cancels any pending frame
                frame_loop.frame.borrow_mut().take();
            }
        });
    }

    let onpointerdown = {
        let frame_loop = frame_loop.clone();
        Callback::from(move |e: PointerEvent| {
            let Some(fit) = frame_loop.painter.borrow().as_ref().map(|p| p.fit()) else {
                return;
            };
            let (x, y) = fit.to_scene(e.offset_x() as f64, e.offset_y() as f64);
            if !button_rect(frame_loop.wheel.0.borrow().config()).contains(x, y) {
                return;
            }
            if !frame_loop.wheel.0.borrow().can_spin() {
                log::debug!("Spin button pressed while the wheel is turning");
                return;
            }

            frame_loop.audio.borrow_mut().resume_once();
            let started = frame_loop.wheel.0.borrow_mut().start_spin(now_ms());
            match started {
                Ok(plan) => {
                    log::debug!("Spin started towards sector {}", plan.winning_index);
                    frame_loop.spinning.set(true);
                    frame_loop.result.set(None);
                    frame_loop.schedule();
                }
                Err(e) => log::debug!("Spin ignored: {}", e),
            }
        })
    };

    let cursor = if *spinning { "cursor-wait" } else { "cursor-pointer" };

    html! {
        <div class="w-full">
            <div class="relative w-full aspect-video">
                <canvas
                    ref={canvas_ref}
                    class={classes!("absolute", "inset-0", "w-full", "h-full", "rounded-xl", "touch-none", cursor)}
                    onpointerdown={onpointerdown}
                />
            </div>
            <ResultDisplay result={(*result).clone()} />
        </div>
    }
}
