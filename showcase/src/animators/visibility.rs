use std::time::Instant;

use tuimotion::{Align, Element, Presence, Size, Style, TransitionConfig};

use super::Animator;
use crate::scale::Scale;
use crate::{theme, widgets};

pub const BUTTON_ID: &str = "visibility-button";
pub const CONTENT_ID: &str = "visibility-content";
pub const TEXT_ID: &str = "visibility-text";

pub const BUTTON_LABEL: &str = "Toggle visibility of the text bellow (AnimatedVisibility)";
pub const TEXT: &str = "I'm being animated when the visibility changes!";

const TEXT_INSET_DP: f32 = 16.0;

/// Mounts and unmounts a line of text with a fade + vertical expand.
///
/// While hidden the text is not part of the element tree at all, so it takes
/// no space and can't be hit. Hiding plays the exit animation first.
#[derive(Debug, Clone)]
pub struct VisibilityAnimator {
    presence: Presence,
}

impl Default for VisibilityAnimator {
    fn default() -> Self {
        Self {
            presence: Presence::new(true),
        }
    }
}

impl VisibilityAnimator {
    pub fn visible(&self) -> bool {
        self.presence.is_visible()
    }

    pub fn is_mounted(&self, now: Instant) -> bool {
        self.presence.is_mounted(now)
    }

    /// Enter progress: 0.0 fully exited, 1.0 fully entered.
    pub fn progress(&self, now: Instant) -> f32 {
        self.presence.progress(now)
    }
}

impl Animator for VisibilityAnimator {
    fn target_id(&self) -> &'static str {
        BUTTON_ID
    }

    fn toggle(&mut self, transition: TransitionConfig, now: Instant) {
        let visible = !self.presence.is_visible();
        self.presence.set_visible(visible, transition, now);
    }

    fn is_animating(&self, now: Instant) -> bool {
        self.presence.is_animating(now)
    }

    fn settle(&mut self, now: Instant) {
        self.presence.settle(now);
    }

    fn view(&self, scale: &Scale, now: Instant) -> Element {
        let unit = Element::col()
            .id("visibility")
            .width(Size::Fill)
            .align(Align::Center)
            .child(widgets::button(BUTTON_ID, BUTTON_LABEL));

        if !self.presence.is_mounted(now) {
            return unit;
        }

        let progress = self.presence.progress(now);
        unit.child(
            Element::col()
                .id(CONTENT_ID)
                .reveal(progress)
                .opacity(progress)
                .clip(true)
                .child(
                    Element::text(TEXT)
                        .id(TEXT_ID)
                        .padding(scale.inset(TEXT_INSET_DP))
                        .style(Style::new().foreground(theme::ON_BACKGROUND)),
                ),
        )
    }
}
