//! The four toggle-driven animators.
//!
//! Each animator owns exactly one boolean state cell. Its `toggle` is the only
//! writer and its `view` the only reader; the tween next to the cell is derived
//! state that follows it.

pub mod alpha;
pub mod padding;
pub mod size;
pub mod visibility;

use std::time::Instant;

pub use alpha::AlphaAnimator;
pub use padding::PaddingAnimator;
pub use size::SizeAnimator;
pub use visibility::VisibilityAnimator;

use tuimotion::{Element, TransitionConfig};

use crate::scale::Scale;

pub trait Animator {
    /// Id of the element whose click toggles this animator.
    fn target_id(&self) -> &'static str;

    /// Flip the state cell and retarget the animation from its current value.
    fn toggle(&mut self, transition: TransitionConfig, now: Instant);

    fn is_animating(&self, now: Instant) -> bool;

    /// Drop finished animation bookkeeping.
    fn settle(&mut self, now: Instant);

    fn view(&self, scale: &Scale, now: Instant) -> Element;
}

/// Identifies one animator on the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    Visibility,
    Alpha,
    Size,
    Padding,
}

impl Unit {
    pub const ALL: [Unit; 4] = [Unit::Visibility, Unit::Alpha, Unit::Size, Unit::Padding];

    /// Number keys `1`-`4` select units in screen order.
    pub fn from_key(key: char) -> Option<Unit> {
        match key {
            '1' => Some(Unit::Visibility),
            '2' => Some(Unit::Alpha),
            '3' => Some(Unit::Size),
            '4' => Some(Unit::Padding),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Unit::Visibility => "visibility",
            Unit::Alpha => "alpha",
            Unit::Size => "size",
            Unit::Padding => "padding",
        }
    }
}
