use std::time::Instant;

use tuimotion::{Element, Size, Style, TransitionConfig, Tween};

use super::Animator;
use crate::scale::Scale;
use crate::theme;

pub const FRAME_ID: &str = "padding-frame";
pub const SURFACE_ID: &str = "padding-surface";

pub const LABEL: &str = "Tap to toggle padding";

pub const PADDED_DP: f32 = 20.0;
pub const FLUSH_DP: f32 = 0.0;
const HEIGHT_DP: f32 = 200.0;
const TEXT_INSET_DP: f32 = 8.0;

/// A fixed-size frame whose inner inset animates; the surface inside it is
/// the tap target.
#[derive(Debug, Clone)]
pub struct PaddingAnimator {
    toggled: bool,
    padding: Tween<f32>,
}

impl Default for PaddingAnimator {
    fn default() -> Self {
        Self {
            toggled: false,
            padding: Tween::new(PADDED_DP),
        }
    }
}

impl PaddingAnimator {
    pub fn toggled(&self) -> bool {
        self.toggled
    }

    /// Inset in dp at `now`.
    pub fn padding(&self, now: Instant) -> f32 {
        self.padding.value(now)
    }
}

impl Animator for PaddingAnimator {
    fn target_id(&self) -> &'static str {
        SURFACE_ID
    }

    fn toggle(&mut self, transition: TransitionConfig, now: Instant) {
        self.toggled = !self.toggled;
        let target = if self.toggled { FLUSH_DP } else { PADDED_DP };
        self.padding.animate_to(target, transition, now);
    }

    fn is_animating(&self, now: Instant) -> bool {
        self.padding.is_running(now)
    }

    fn settle(&mut self, now: Instant) {
        self.padding.settle(now);
    }

    fn view(&self, scale: &Scale, now: Instant) -> Element {
        Element::col()
            .id(FRAME_ID)
            .width(Size::Fill)
            .height(Size::Fixed(scale.rows(HEIGHT_DP)))
            .padding(scale.inset(self.padding.value(now)))
            .child(
                Element::col()
                    .id(SURFACE_ID)
                    .clickable(true)
                    .width(Size::Fill)
                    .height(Size::Fill)
                    .style(Style::new().background(theme::MINT))
                    .child(
                        Element::text(LABEL)
                            .padding(scale.inset(TEXT_INSET_DP))
                            .style(Style::new().foreground(theme::BLACK)),
                    ),
            )
    }
}
