//! Four toggle-driven animations on a single terminal screen.
//!
//! Each animator owns one boolean state cell and the tween that follows it.
//! The [`screen::DemoScreen`] rebuilds the element tree from that state on
//! every frame; the tweens supply the in-between values.

pub mod animators;
pub mod app;
pub mod config;
pub mod error;
pub mod paths;
pub mod scale;
pub mod screen;
pub mod theme;
pub mod widgets;

pub use config::Config;
pub use error::{Error, Result};
pub use screen::DemoScreen;
