// src/lib.rs - Library interface for internal module access

pub mod animation;
pub mod cli;
pub mod config;
pub mod constants;
pub mod data_analysis;
pub mod data_input;
pub mod error;
pub mod font_config;
pub mod output_dir;
pub mod plot_framework;

pub use animation::{make_animation, AnimationSummary, Animator};
pub use config::AnimationConfig;
pub use error::AnimationError;

pub fn crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
