//! Small element builders shared by the animators.

use tuimotion::{Edges, Element, Size, Style};

use crate::theme;

const DIVIDER_WIDTH: usize = 512;

/// A filled, single-row button.
pub fn button(id: &str, label: &str) -> Element {
    Element::text(label)
        .id(id)
        .clickable(true)
        .padding(Edges::symmetric(0, 2))
        .style(
            Style::new()
                .background(theme::PRIMARY)
                .foreground(theme::ON_PRIMARY)
                .bold(),
        )
}

/// A one-row horizontal rule spanning the parent.
pub fn divider() -> Element {
    Element::text("─".repeat(DIVIDER_WIDTH))
        .width(Size::Fill)
        .height(Size::Fixed(1))
        .style(Style::new().foreground(theme::DIVIDER))
}
