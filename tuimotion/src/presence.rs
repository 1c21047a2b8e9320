//! Enter/exit state for elements that mount and unmount.
//!
//! A [`Presence`] tracks whether content should be shown and how far its
//! enter or exit animation has progressed. Content stays mounted while an exit
//! animation plays and is removed once it finishes.

use std::time::Instant;

use crate::transitions::TransitionConfig;
use crate::tween::Tween;

#[derive(Debug, Clone)]
pub struct Presence {
    visible: bool,
    progress: Tween<f32>,
}

impl Presence {
    pub fn new(visible: bool) -> Self {
        Self {
            visible,
            progress: Tween::new(if visible { 1.0 } else { 0.0 }),
        }
    }

    /// Target state: true once `show` has been requested.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn show(&mut self, config: TransitionConfig, now: Instant) {
        self.set_visible(true, config, now);
    }

    pub fn hide(&mut self, config: TransitionConfig, now: Instant) {
        self.set_visible(false, config, now);
    }

    pub fn set_visible(&mut self, visible: bool, config: TransitionConfig, now: Instant) {
        self.visible = visible;
        let target = if visible { 1.0 } else { 0.0 };
        self.progress.animate_to(target, config, now);
    }

    /// 0.0 = fully exited, 1.0 = fully entered.
    pub fn progress(&self, now: Instant) -> f32 {
        self.progress.value(now)
    }

    /// Whether the content belongs in the tree at `now`.
    pub fn is_mounted(&self, now: Instant) -> bool {
        self.visible || self.progress.is_running(now)
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.progress.is_running(now)
    }

    pub fn settle(&mut self, now: Instant) {
        self.progress.settle(now);
    }
}
