mod flex;
mod rect;

pub use flex::{content_rect, layout, LayoutResult};
pub use rect::Rect;
