use std::time::Instant;

use tuimotion::{Align, Element, Size, Style, TransitionConfig, Tween};

use super::Animator;
use crate::scale::Scale;
use crate::theme;

pub const BOX_ID: &str = "size-box";

pub const COLLAPSED_HEIGHT_DP: f32 = 100.0;
pub const EXPANDED_HEIGHT_DP: f32 = 200.0;
const WIDTH_DP: f32 = 200.0;

/// A tappable box whose height animates between two fixed targets.
#[derive(Debug, Clone)]
pub struct SizeAnimator {
    expanded: bool,
    height: Tween<f32>,
}

impl Default for SizeAnimator {
    fn default() -> Self {
        Self {
            expanded: false,
            height: Tween::new(COLLAPSED_HEIGHT_DP),
        }
    }
}

impl SizeAnimator {
    pub fn expanded(&self) -> bool {
        self.expanded
    }

    /// Rendered height in dp at `now`.
    pub fn height(&self, now: Instant) -> f32 {
        self.height.value(now)
    }

    /// Follows the target state, not the animation.
    pub fn label(&self) -> &'static str {
        if self.expanded {
            "Tap here to contract!"
        } else {
            "Tap here to expand!"
        }
    }
}

impl Animator for SizeAnimator {
    fn target_id(&self) -> &'static str {
        BOX_ID
    }

    fn toggle(&mut self, transition: TransitionConfig, now: Instant) {
        self.expanded = !self.expanded;
        let target = if self.expanded {
            EXPANDED_HEIGHT_DP
        } else {
            COLLAPSED_HEIGHT_DP
        };
        self.height.animate_to(target, transition, now);
    }

    fn is_animating(&self, now: Instant) -> bool {
        self.height.is_running(now)
    }

    fn settle(&mut self, now: Instant) {
        self.height.settle(now);
    }

    fn view(&self, scale: &Scale, now: Instant) -> Element {
        Element::col()
            .id("size")
            .width(Size::Fill)
            .align(Align::Center)
            .child(
                Element::col()
                    .id(BOX_ID)
                    .clickable(true)
                    .clip(true)
                    .width(Size::Fixed(scale.columns(WIDTH_DP)))
                    .height(Size::Fixed(scale.rows(self.height.value(now))))
                    .style(Style::new().background(theme::BLUE))
                    .child(
                        Element::text(self.label())
                            .style(Style::new().foreground(theme::ON_PRIMARY)),
                    ),
            )
    }
}
