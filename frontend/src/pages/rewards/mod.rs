pub mod fortune_wheel;

use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;
use shared::{Prize, WheelError, WheelGame};
use crate::config::{get_seed_override, load_wheel_config};
use crate::styles;
use fortune_wheel::{FortuneWheel, PrizeTable, WheelHandle};

fn build_wheel() -> Result<WheelHandle, WheelError> {
    let config = load_wheel_config()?;
    let game = match get_seed_override() {
        Some(seed) => {
            log::info!("Wheel seeded with {}", seed);
            WheelGame::with_seed(config, seed)?
        }
        None => WheelGame::new(config)?,
    };
    Ok(WheelHandle(Rc::new(RefCell::new(game))))
}

#[function_component(Rewards)]
pub fn rewards() -> Html {
    let wheel = use_memo((), |_| {
        build_wheel().map_err(|e| {
            log::error!("{}", e);
            e
        })
    });
    let spins = use_state(|| 0u32);

    let on_spin_complete = {
        let spins = spins.clone();
        Callback::from(move |_: Prize| spins.set(*spins + 1))
    };

    html! {
        <div class={styles::CONTAINER}>
            <div class={styles::CONTAINER_LG}>
                <h1 class="text-3xl font-bold mb-6 text-center text-gray-900 dark:text-white">
                    <span class="bg-clip-text text-transparent bg-gradient-to-r from-yellow-400 to-orange-500">{"Fortune Wheel"}</span>
                </h1>
                {
                    match &*wheel {
                        Ok(handle) => {
                            let prizes = handle.0.borrow().config().prizes.clone();
                            html! {
                                <div class={styles::WHEEL_CARD}>
                                    <FortuneWheel wheel={handle.clone()} on_spin_complete={on_spin_complete} />
                                    <div class="mt-8 text-center bg-gray-50 dark:bg-gray-700/30 p-6 rounded-xl shadow-sm">
                                        <h3 class="font-bold text-lg mb-3 text-gray-800 dark:text-gray-200">{"Prizes"}</h3>
                                        <p class={styles::TEXT_BODY}>{"Press SPIN on the wheel. The pointer shows your prize."}</p>
                                        <PrizeTable prizes={prizes} />
                                        if *spins > 0 {
                                            <div class="mt-4 text-xs text-gray-500 dark:text-gray-400 bg-gray-100 dark:bg-gray-800 p-2 rounded-md inline-block">
                                                {format!("Spins this session: {}", *spins)}
                                            </div>
                                        }
                                    </div>
                                </div>
                            }
                        }
                        Err(e) => html! {
                            <div class={styles::CARD_ERROR}>
                                <p class="font-medium">{"The wheel is unavailable right now."}</p>
                                <p class="text-sm mt-1">{e.to_string()}</p>
                            </div>
                        },
                    }
                }
            </div>
        </div>
    }
}
