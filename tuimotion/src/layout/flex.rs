use std::collections::HashMap;

use super::Rect;
use crate::element::{Content, Element};
use crate::text::{display_width, wrap_words};
use crate::types::{Align, Direction, Justify, Size};

pub type LayoutResult = HashMap<String, Rect>;

pub fn layout(element: &Element, available: Rect) -> LayoutResult {
    let mut result = LayoutResult::new();

    let width = match element.width {
        Size::Fixed(n) => n.min(available.width),
        Size::Fill => available.width,
        Size::Auto => intrinsic_width(element).min(available.width),
    };
    let height = match element.height {
        Size::Fixed(n) => n.min(available.height),
        Size::Fill => available.height,
        Size::Auto => intrinsic_height(element, width).min(available.height),
    };

    let rect = Rect::new(available.x, available.y, width, height);
    result.insert(element.id.clone(), rect);
    layout_children(element, rect, &mut result);
    result
}

/// Area inside an element's border and padding.
pub fn content_rect(element: &Element, rect: Rect) -> Rect {
    let border = element.style.border_size();
    rect.shrink(
        element.padding.top + border,
        element.padding.right + border,
        element.padding.bottom + border,
        element.padding.left + border,
    )
}

fn layout_children(element: &Element, rect: Rect, result: &mut LayoutResult) {
    let Content::Children(children) = &element.content else {
        return;
    };

    if children.is_empty() {
        return;
    }

    let inner = content_rect(element, rect);
    let is_row = element.direction == Direction::Row;
    let main_size = if is_row { inner.width } else { inner.height };
    let cross_size = if is_row { inner.height } else { inner.width };
    let gap_total = element.gap * children.len().saturating_sub(1) as u16;

    // Columns need the cross size (width) first to measure wrapped text height.
    let crosses: Vec<Option<u16>> = children
        .iter()
        .map(|child| (!is_row).then(|| cross_extent(element, child, cross_size, None)))
        .collect();

    // First pass: sizes of non-fill children, count fill children
    let mut fixed_total = 0u16;
    let mut fill_count = 0u16;
    let mut mains: Vec<Option<u16>> = Vec::with_capacity(children.len());

    for (child, cross) in children.iter().zip(&crosses) {
        let size = if is_row { child.width } else { child.height };
        let main = match size {
            Size::Fixed(n) => Some(n),
            Size::Auto if is_row => Some(intrinsic_width(child)),
            Size::Auto => Some(intrinsic_height(child, cross.unwrap_or(cross_size))),
            Size::Fill => None,
        };
        match main {
            Some(n) => fixed_total = fixed_total.saturating_add(n),
            None => fill_count += 1,
        }
        mains.push(main);
    }

    let remaining = main_size.saturating_sub(fixed_total.saturating_add(gap_total));
    let fill_size = if fill_count > 0 {
        remaining / fill_count
    } else {
        0
    };
    let mains: Vec<u16> = mains.into_iter().map(|m| m.unwrap_or(fill_size)).collect();

    let total: u16 = mains.iter().fold(gap_total, |acc, m| acc.saturating_add(*m));
    let extra = main_size.saturating_sub(total);
    let mut offset = match element.justify {
        Justify::Start => 0,
        Justify::Center => extra / 2,
        Justify::End => extra,
    };

    // Second pass: assign rects
    for ((child, main), cross) in children.iter().zip(mains).zip(crosses) {
        let cross = cross.unwrap_or_else(|| cross_extent(element, child, cross_size, Some(main)));
        let clamped_main = main.min(main_size.saturating_sub(offset));
        let clamped_cross = cross.min(cross_size);

        let cross_offset = match element.align {
            Align::Start | Align::Stretch => 0,
            Align::Center => cross_size.saturating_sub(clamped_cross) / 2,
            Align::End => cross_size.saturating_sub(clamped_cross),
        };

        let child_rect = if is_row {
            Rect::new(
                inner.x + offset,
                inner.y + cross_offset,
                clamped_main,
                clamped_cross,
            )
        } else {
            Rect::new(
                inner.x + cross_offset,
                inner.y + offset,
                clamped_cross,
                clamped_main,
            )
        };

        result.insert(child.id.clone(), child_rect);
        layout_children(child, child_rect, result);

        offset = offset.saturating_add(main).saturating_add(element.gap);
    }
}

/// Size of `child` on its parent's cross axis. `main` is the child's
/// resolved main size, needed by rows to measure wrapped text height.
fn cross_extent(parent: &Element, child: &Element, available: u16, main: Option<u16>) -> u16 {
    let is_row = parent.direction == Direction::Row;
    let size = if is_row { child.height } else { child.width };

    match size {
        Size::Fixed(n) => n,
        Size::Fill => available,
        Size::Auto if parent.align == Align::Stretch => available,
        Size::Auto if is_row => intrinsic_height(child, main.unwrap_or(available)),
        Size::Auto => intrinsic_width(child).min(available),
    }
}

/// Preferred width of an element from its content.
fn intrinsic_width(element: &Element) -> u16 {
    if let Size::Fixed(n) = element.width {
        return n;
    }

    let chrome = element.padding.horizontal_total() + element.style.border_size() * 2;
    let content = match &element.content {
        Content::None => 0,
        Content::Text(text) => text
            .lines()
            .map(|line| display_width(line) as u16)
            .max()
            .unwrap_or(0),
        Content::Children(children) => {
            let widths = children.iter().map(intrinsic_width);
            if element.direction == Direction::Row {
                let gaps = element.gap * children.len().saturating_sub(1) as u16;
                widths.sum::<u16>() + gaps
            } else {
                widths.max().unwrap_or(0)
            }
        }
    };

    content + chrome
}

/// Preferred height of an element laid out at `width`, scaled by `reveal`.
fn intrinsic_height(element: &Element, width: u16) -> u16 {
    if let Size::Fixed(n) = element.height {
        return n;
    }

    let full = measured_height(element, width);
    if element.reveal >= 1.0 {
        full
    } else {
        (full as f32 * element.reveal).round() as u16
    }
}

fn measured_height(element: &Element, width: u16) -> u16 {
    let border = element.style.border_size();
    let chrome = element.padding.vertical_total() + border * 2;
    let inner_width = width.saturating_sub(element.padding.horizontal_total() + border * 2);

    let content = match &element.content {
        Content::None => 0,
        Content::Text(text) => wrap_words(text, inner_width as usize).len() as u16,
        Content::Children(children) => {
            if element.direction == Direction::Column {
                let gaps = element.gap * children.len().saturating_sub(1) as u16;
                children
                    .iter()
                    .map(|c| intrinsic_height(c, cross_extent(element, c, inner_width, None)))
                    .sum::<u16>()
                    + gaps
            } else {
                children
                    .iter()
                    .map(|c| intrinsic_height(c, intrinsic_width(c).min(inner_width)))
                    .max()
                    .unwrap_or(0)
            }
        }
    };

    content + chrome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Edges;

    #[test]
    fn wrapped_text_grows_auto_height() {
        let text = Element::text("aaaa bbbb cccc").width(Size::Fixed(9));
        assert_eq!(intrinsic_height(&text, 9), 2);
        assert_eq!(intrinsic_height(&text, 20), 1);
    }

    #[test]
    fn chrome_counts_toward_intrinsic_size() {
        let el = Element::text("hello").padding(Edges::symmetric(1, 2));
        assert_eq!(intrinsic_width(&el), 9);
        assert_eq!(intrinsic_height(&el, 9), 3);
    }
}
