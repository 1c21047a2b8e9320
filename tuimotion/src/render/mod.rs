use std::time::Instant;

use crate::buffer::{Buffer, Cell};
use crate::element::{Content, Element};
use crate::layout::{LayoutResult, Rect};
use crate::text::{align_offset, char_width, display_width, wrap_words};
use crate::types::{Border, Rgb};

/// Inherited state while walking the tree.
#[derive(Debug, Clone, Copy)]
struct Paint {
    clip: Option<Rect>,
    opacity: f32,
}

pub fn render_to_buffer(element: &Element, layout: &LayoutResult, buf: &mut Buffer) {
    let t0 = Instant::now();
    let mut painted = 0usize;

    render_element(
        element,
        layout,
        buf,
        Paint {
            clip: None,
            opacity: 1.0,
        },
        &mut painted,
    );

    log::trace!(
        "render: {} elements in {:.2}µs",
        painted,
        t0.elapsed().as_secs_f64() * 1_000_000.0
    );
}

fn render_element(
    element: &Element,
    layout: &LayoutResult,
    buf: &mut Buffer,
    inherited: Paint,
    painted: &mut usize,
) {
    let Some(rect) = layout.get(&element.id).copied() else {
        return;
    };

    let opacity = inherited.opacity * element.opacity;
    // Fully transparent subtrees stay in layout but paint nothing.
    if opacity <= 0.0 {
        return;
    }

    let visible = match inherited.clip {
        Some(clip) => rect.intersect(clip),
        None => rect,
    };
    if visible.is_empty() {
        return;
    }
    *painted += 1;

    if let Some(bg) = &element.style.background {
        fill_rect(buf, visible, bg.to_rgb(), opacity);
    }

    render_border(element, rect, buf, visible, opacity);

    match &element.content {
        Content::None => {}
        Content::Text(text) => render_text(text, element, rect, buf, visible, opacity),
        Content::Children(children) => {
            let child_clip = if element.clip {
                let inner = crate::layout::content_rect(element, rect);
                Some(inner.intersect(visible))
            } else {
                inherited.clip
            };
            let paint = Paint {
                clip: child_clip,
                opacity,
            };
            for child in children {
                render_element(child, layout, buf, paint, painted);
            }
        }
    }
}

fn fill_rect(buf: &mut Buffer, rect: Rect, bg: Rgb, opacity: f32) {
    for y in rect.y..rect.bottom().min(buf.height()) {
        for x in rect.x..rect.right().min(buf.width()) {
            if let Some(cell) = buf.get_mut(x, y) {
                let under = cell.bg;
                cell.bg = under.mix(bg, opacity);
                if opacity >= 1.0 {
                    cell.char = ' ';
                    cell.wide_continuation = false;
                } else {
                    // Glyphs underneath fade out with the background they sat on
                    cell.fg = cell.fg.mix(cell.bg, opacity);
                }
            }
        }
    }
}

fn render_text(
    text: &str,
    element: &Element,
    rect: Rect,
    buf: &mut Buffer,
    visible: Rect,
    opacity: f32,
) {
    let fg = element
        .style
        .foreground
        .as_ref()
        .map(|c| c.to_rgb())
        .unwrap_or(Rgb::WHITE);

    let inner = crate::layout::content_rect(element, rect);
    if inner.is_empty() {
        return;
    }

    let max_width = inner.width as usize;
    for (line_idx, line) in wrap_words(text, max_width).iter().enumerate() {
        let y = inner.y + line_idx as u16;
        if y >= inner.bottom() {
            break;
        }
        if y < visible.y || y >= visible.bottom() {
            continue;
        }

        let x_offset = align_offset(display_width(line), max_width, element.text_align) as u16;
        let mut x = inner.x + x_offset;

        for ch in line.chars() {
            let ch_w = char_width(ch) as u16;
            if ch_w == 0 {
                continue;
            }
            if x + ch_w > inner.right() {
                break;
            }
            if x < visible.x || x + ch_w > visible.right() {
                x += ch_w;
                continue;
            }

            let bg = buf.get(x, y).map(|c| c.bg).unwrap_or(Rgb::BLACK);
            let cell = Cell::new(ch)
                .with_fg(bg.mix(fg, opacity))
                .with_bg(bg)
                .with_style(element.style.text_style);
            buf.set(x, y, cell);

            if ch_w == 2 {
                let mut continuation = cell;
                continuation.char = ' ';
                continuation.wide_continuation = true;
                buf.set(x + 1, y, continuation);
            }

            x += ch_w;
        }
    }
}

fn render_border(element: &Element, rect: Rect, buf: &mut Buffer, visible: Rect, opacity: f32) {
    let (tl, tr, bl, br, h, v) = match element.style.border {
        Border::None => return,
        Border::Single => ('┌', '┐', '└', '┘', '─', '│'),
        Border::Rounded => ('╭', '╮', '╰', '╯', '─', '│'),
    };

    if rect.width < 2 || rect.height < 2 {
        return;
    }

    let fg = element
        .style
        .foreground
        .as_ref()
        .map(|c| c.to_rgb())
        .unwrap_or(Rgb::WHITE);

    let mut set = |x: u16, y: u16, ch: char| {
        if !visible.contains(x, y) {
            return;
        }
        if let Some(cell) = buf.get_mut(x, y) {
            cell.char = ch;
            cell.fg = cell.bg.mix(fg, opacity);
            cell.wide_continuation = false;
        }
    };

    let right = rect.right() - 1;
    let bottom = rect.bottom() - 1;

    set(rect.x, rect.y, tl);
    set(right, rect.y, tr);
    set(rect.x, bottom, bl);
    set(right, bottom, br);

    for x in (rect.x + 1)..right {
        set(x, rect.y, h);
        set(x, bottom, h);
    }

    for y in (rect.y + 1)..bottom {
        set(rect.x, y, v);
        set(right, y, v);
    }
}
