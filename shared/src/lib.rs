pub mod constants;
pub mod error;
pub mod validation;
pub mod wheel_config;
pub mod easing;
pub mod sector_layout;
pub mod spin_engine;
pub mod tick;
pub mod spin_state;
pub mod pointer_kick;
pub mod click_sound;
pub mod scene_layout;
pub mod shared_wheel_game;

pub use error::WheelError;
pub use shared_wheel_game::{FrameOutput, WheelGame, WheelResult};
pub use wheel_config::{Prize, Rgb, WheelConfig, WheelGeometry};
