use tuimotion::layout::layout;
use tuimotion::render::render_to_buffer;
use tuimotion::{Border, Buffer, Color, Edges, Element, Rect, Rgb, Size, Style, TextAlign};

fn render(root: &Element, width: u16, height: u16) -> Buffer {
    let result = layout(root, Rect::from_size(width, height));
    let mut buf = Buffer::new(width, height);
    render_to_buffer(root, &result, &mut buf);
    buf
}

fn filled(id: &str, color: Color) -> Element {
    Element::col()
        .id(id)
        .width(Size::Fixed(10))
        .height(Size::Fixed(4))
        .style(Style::new().background(color))
}

#[test]
fn test_background_fills_rect() {
    let root = filled("root", Color::rgb(0, 0, 255));
    let buf = render(&root, 20, 6);

    assert_eq!(buf.get(0, 0).unwrap().bg, Rgb::new(0, 0, 255));
    assert_eq!(buf.get(9, 3).unwrap().bg, Rgb::new(0, 0, 255));
    assert_eq!(buf.get(10, 0).unwrap().bg, Rgb::BLACK);
    assert_eq!(buf.get(0, 4).unwrap().bg, Rgb::BLACK);
}

#[test]
fn test_text_is_painted_inside_padding() {
    let root = Element::text("hello")
        .id("t")
        .width(Size::Fixed(10))
        .height(Size::Fixed(3))
        .padding(Edges::new(1, 0, 0, 2));
    let buf = render(&root, 10, 3);

    assert_eq!(buf.row_text(1), "  hello   ");
    assert_eq!(buf.row_text(0).trim(), "");
}

#[test]
fn test_text_alignment_center() {
    let root = Element::text("ab")
        .width(Size::Fixed(6))
        .height(Size::Fixed(1))
        .text_align(TextAlign::Center);
    let buf = render(&root, 6, 1);

    assert_eq!(buf.row_text(0), "  ab  ");
}

#[test]
fn test_zero_opacity_paints_nothing() {
    let root = Element::col()
        .id("root")
        .width(Size::Fixed(10))
        .height(Size::Fixed(4))
        .child(
            filled("box", Color::rgb(0, 0, 255))
                .opacity(0.0)
                .child(Element::text("hidden")),
        );
    let buf = render(&root, 10, 4);

    assert_eq!(buf.get(0, 0).unwrap().bg, Rgb::BLACK);
    assert_eq!(buf.row_text(0).trim(), "");
}

#[test]
fn test_partial_opacity_blends_with_backdrop() {
    let root = filled("box", Color::rgb(0, 0, 255)).opacity(0.5);
    let buf = render(&root, 10, 4);

    let bg = buf.get(0, 0).unwrap().bg;
    assert_ne!(bg, Rgb::BLACK);
    assert_ne!(bg, Rgb::new(0, 0, 255));
}

#[test]
fn test_opacity_is_inherited_by_children() {
    let root = filled("box", Color::rgb(0, 0, 255))
        .opacity(0.5)
        .child(Element::text("x").style(Style::new().foreground(Color::rgb(255, 255, 255))));
    let buf = render(&root, 10, 4);

    let cell = buf.get(0, 0).unwrap();
    assert_eq!(cell.char, 'x');
    assert_ne!(cell.fg, Rgb::WHITE);
}

#[test]
fn test_full_opacity_is_exact() {
    let root = filled("box", Color::rgb(0, 0, 255)).opacity(1.0);
    let buf = render(&root, 10, 4);
    assert_eq!(buf.get(0, 0).unwrap().bg, Rgb::new(0, 0, 255));
}

#[test]
fn test_clip_hides_overflowing_text() {
    let root = Element::col()
        .id("root")
        .width(Size::Fixed(5))
        .height(Size::Fixed(1))
        .clip(true)
        .child(Element::text("abcdefgh").width(Size::Fixed(8)));
    let buf = render(&root, 10, 1);

    assert_eq!(buf.row_text(0), "abcde     ");
}

#[test]
fn test_rounded_border() {
    let root = Element::col()
        .width(Size::Fixed(4))
        .height(Size::Fixed(3))
        .style(Style::new().border(Border::Rounded));
    let buf = render(&root, 4, 3);

    assert_eq!(buf.row_text(0), "╭──╮");
    assert_eq!(buf.row_text(1), "│  │");
    assert_eq!(buf.row_text(2), "╰──╯");
}

#[test]
fn test_single_border() {
    let root = Element::col()
        .width(Size::Fixed(3))
        .height(Size::Fixed(2))
        .style(Style::new().border(Border::Single));
    let buf = render(&root, 3, 2);

    assert_eq!(buf.row_text(0), "┌─┐");
    assert_eq!(buf.row_text(1), "└─┘");
}

#[test]
fn test_wrapped_text_uses_multiple_rows() {
    let root = Element::text("one two")
        .width(Size::Fixed(4))
        .height(Size::Fixed(2));
    let buf = render(&root, 4, 2);

    assert_eq!(buf.row_text(0), "one ");
    assert_eq!(buf.row_text(1), "two ");
}
