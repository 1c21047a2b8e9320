use std::time::Instant;

use tuimotion::{Align, Border, Element, Size, Style, TransitionConfig, Tween};

use super::Animator;
use crate::scale::Scale;
use crate::{theme, widgets};

pub const BUTTON_ID: &str = "alpha-button";
pub const BOX_ID: &str = "alpha-box";

pub const BUTTON_LABEL: &str = "Toggle visibility of the text bellow (Alpha)";
pub const TEXT: &str = "I may disappear!";

const BOX_SIZE_DP: f32 = 200.0;
const INSET_DP: f32 = 16.0;

/// Fades a box in and out. The box keeps its place in layout and stays
/// hit-testable even at zero opacity.
#[derive(Debug, Clone)]
pub struct AlphaAnimator {
    visible: bool,
    alpha: Tween<f32>,
}

impl Default for AlphaAnimator {
    fn default() -> Self {
        Self {
            visible: true,
            alpha: Tween::new(1.0),
        }
    }
}

impl AlphaAnimator {
    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn alpha(&self, now: Instant) -> f32 {
        self.alpha.value(now)
    }
}

impl Animator for AlphaAnimator {
    fn target_id(&self) -> &'static str {
        BUTTON_ID
    }

    fn toggle(&mut self, transition: TransitionConfig, now: Instant) {
        self.visible = !self.visible;
        let target = if self.visible { 1.0 } else { 0.0 };
        self.alpha.animate_to(target, transition, now);
    }

    fn is_animating(&self, now: Instant) -> bool {
        self.alpha.is_running(now)
    }

    fn settle(&mut self, now: Instant) {
        self.alpha.settle(now);
    }

    fn view(&self, scale: &Scale, now: Instant) -> Element {
        Element::col()
            .id("alpha")
            .width(Size::Fill)
            .align(Align::Center)
            .child(widgets::button(BUTTON_ID, BUTTON_LABEL))
            .child(
                Element::col()
                    .id(BOX_ID)
                    .width(Size::Fixed(scale.columns(BOX_SIZE_DP)))
                    .height(Size::Fixed(scale.rows(BOX_SIZE_DP)))
                    .opacity(self.alpha.value(now))
                    .clip(true)
                    .padding(scale.inset(INSET_DP))
                    .style(
                        Style::new()
                            .background(theme::BLUE)
                            .foreground(theme::BLUE)
                            .border(Border::Rounded),
                    )
                    .child(Element::text(TEXT).style(Style::new().foreground(theme::ON_PRIMARY))),
            )
    }
}
