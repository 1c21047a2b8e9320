//! Colors used by the demo screen.
//!
//! Neutrals share one faint violet hue and differ only in lightness, so they
//! are written in Oklch. Accent colors are the literal sRGB values.

use tuimotion::Color;

const NEUTRAL_HUE: f32 = 305.0;

pub const BACKGROUND: Color = Color::oklch(0.21, 0.006, NEUTRAL_HUE);
pub const ON_BACKGROUND: Color = Color::oklch(0.91, 0.006, NEUTRAL_HUE);
pub const MUTED: Color = Color::oklch(0.65, 0.015, NEUTRAL_HUE);
pub const DIVIDER: Color = Color::oklch(0.40, 0.02, NEUTRAL_HUE);

/// Filled button container and label.
pub const PRIMARY: Color = Color::rgb(0x67, 0x50, 0xa4);
pub const ON_PRIMARY: Color = Color::rgb(0xff, 0xff, 0xff);

pub const BLUE: Color = Color::rgb(0x00, 0x00, 0xff);
pub const MINT: Color = Color::rgb(0x53, 0xd9, 0xa1);
pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
