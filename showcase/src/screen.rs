use std::time::Instant;

use tuimotion::{Align, Edges, Element, Event, Key, MouseButton, Size, Style, TransitionConfig};

use crate::animators::{
    AlphaAnimator, Animator, PaddingAnimator, SizeAnimator, Unit, VisibilityAnimator,
};
use crate::config::{AnimationConfig, Config};
use crate::scale::Scale;
use crate::{theme, widgets};

pub const HELP: &str = "click or press 1-4 to toggle · r reduced motion · q quit";

const SCREEN_PADDING_DP: f32 = 16.0;

/// What the event loop should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Continue,
    Quit,
}

/// The single screen: four independent animators stacked in a column.
#[derive(Debug, Clone)]
pub struct DemoScreen {
    visibility: VisibilityAnimator,
    alpha: AlphaAnimator,
    size: SizeAnimator,
    padding: PaddingAnimator,
    animation: AnimationConfig,
    scale: Scale,
    reduced_motion: bool,
}

impl DemoScreen {
    pub fn new(config: &Config) -> Self {
        Self {
            visibility: VisibilityAnimator::default(),
            alpha: AlphaAnimator::default(),
            size: SizeAnimator::default(),
            padding: PaddingAnimator::default(),
            animation: config.animation,
            scale: config.scale,
            reduced_motion: config.reduced_motion,
        }
    }

    pub fn visibility(&self) -> &VisibilityAnimator {
        &self.visibility
    }

    pub fn alpha(&self) -> &AlphaAnimator {
        &self.alpha
    }

    pub fn size(&self) -> &SizeAnimator {
        &self.size
    }

    pub fn padding(&self) -> &PaddingAnimator {
        &self.padding
    }

    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    /// When enabled, toggles jump straight to their targets.
    pub fn set_reduced_motion(&mut self, enabled: bool) {
        self.reduced_motion = enabled;
        log::info!("reduced motion {}", if enabled { "on" } else { "off" });
    }

    fn animator(&self, unit: Unit) -> &dyn Animator {
        match unit {
            Unit::Visibility => &self.visibility,
            Unit::Alpha => &self.alpha,
            Unit::Size => &self.size,
            Unit::Padding => &self.padding,
        }
    }

    fn animator_mut(&mut self, unit: Unit) -> &mut dyn Animator {
        match unit {
            Unit::Visibility => &mut self.visibility,
            Unit::Alpha => &mut self.alpha,
            Unit::Size => &mut self.size,
            Unit::Padding => &mut self.padding,
        }
    }

    fn transition(&self, unit: Unit) -> TransitionConfig {
        if self.reduced_motion {
            return TransitionConfig::instant();
        }
        match unit {
            Unit::Visibility => self.animation.visibility(),
            Unit::Alpha => self.animation.alpha(),
            Unit::Size => self.animation.size(),
            Unit::Padding => self.animation.padding(),
        }
    }

    pub fn toggle(&mut self, unit: Unit, now: Instant) {
        let transition = self.transition(unit);
        log::debug!(
            "toggle {} ({:?}, {})",
            unit.name(),
            transition.duration,
            transition.easing
        );
        self.animator_mut(unit).toggle(transition, now);
    }

    /// Unit whose tap target has this element id.
    pub fn unit_for_target(&self, id: &str) -> Option<Unit> {
        Unit::ALL
            .into_iter()
            .find(|unit| self.animator(*unit).target_id() == id)
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        Unit::ALL
            .into_iter()
            .any(|unit| self.animator(unit).is_animating(now))
    }

    pub fn settle(&mut self, now: Instant) {
        for unit in Unit::ALL {
            self.animator_mut(unit).settle(now);
        }
    }

    pub fn handle_event(&mut self, event: &Event, now: Instant) -> Action {
        match event {
            Event::Key {
                key: Key::Char('q'),
                ..
            }
            | Event::Key {
                key: Key::Escape, ..
            } => return Action::Quit,
            Event::Key {
                key: Key::Char('c'),
                modifiers,
            } if modifiers.ctrl => return Action::Quit,
            Event::Key {
                key: Key::Char('r'),
                modifiers,
            } if modifiers.none() => {
                self.set_reduced_motion(!self.reduced_motion);
            }
            Event::Key {
                key: Key::Char(c),
                modifiers,
            } if modifiers.none() => {
                if let Some(unit) = Unit::from_key(*c) {
                    self.toggle(unit, now);
                }
            }
            Event::Click {
                target: Some(id),
                button: MouseButton::Left,
                ..
            } => {
                if let Some(unit) = self.unit_for_target(id) {
                    self.toggle(unit, now);
                }
            }
            Event::Resize { width, height } => {
                log::debug!("resize to {width}x{height}");
            }
            _ => {}
        }
        Action::Continue
    }

    /// Build the element tree for the state at `now`.
    pub fn view(&self, now: Instant) -> Element {
        let scale = &self.scale;
        let vertical = scale.spacing_rows(SCREEN_PADDING_DP);

        Element::col()
            .id("screen")
            .width(Size::Fill)
            .height(Size::Fill)
            .align(Align::Center)
            .padding(Edges::symmetric(vertical, 0))
            .style(
                Style::new()
                    .background(theme::BACKGROUND)
                    .foreground(theme::ON_BACKGROUND),
            )
            .child(self.visibility.view(scale, now))
            .child(widgets::divider())
            .child(self.alpha.view(scale, now))
            .child(widgets::divider())
            .child(self.size.view(scale, now))
            .child(widgets::divider())
            .child(self.padding.view(scale, now))
            .child(
                Element::text(HELP)
                    .id("help")
                    .style(Style::new().foreground(theme::MUTED).dim()),
            )
    }
}
