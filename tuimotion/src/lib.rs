pub mod buffer;
pub mod element;
pub mod event;
pub mod hit;
pub mod layout;
pub mod presence;
pub mod render;
pub mod terminal;
pub mod text;
pub mod transitions;
pub mod tween;
pub mod types;

pub use buffer::Buffer;
pub use element::Element;
pub use event::{Event, Key, Modifiers, MouseButton};
pub use hit::{hit_test, hit_test_any};
pub use layout::{LayoutResult, Rect};
pub use presence::Presence;
pub use terminal::Terminal;
pub use transitions::{Easing, TransitionConfig};
pub use tween::{Lerp, Tween};
pub use types::*;
