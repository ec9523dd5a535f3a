pub mod styles;
pub mod pages;
pub mod config;

use yew::prelude::*;
use crate::pages::rewards::Rewards;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <div class="min-h-screen w-full">
            <div class="mx-auto">
                <Rewards />
            </div>
        </div>
    }
}
