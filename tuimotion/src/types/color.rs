use palette::{IntoColor, Oklab, Oklch, Srgb};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    Oklch { l: f32, c: f32, h: f32 },
    Rgb { r: u8, g: u8, b: u8 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Mix toward `other` by `amount` (0.0 = self, 1.0 = other) in Oklab space.
    pub fn mix(self, other: Rgb, amount: f32) -> Rgb {
        let amount = amount.clamp(0.0, 1.0);
        if amount <= 0.0 {
            return self;
        }
        if amount >= 1.0 {
            return other;
        }

        let from = self.to_oklab();
        let to = other.to_oklab();
        let mixed = Oklab::new(
            from.l + (to.l - from.l) * amount,
            from.a + (to.a - from.a) * amount,
            from.b + (to.b - from.b) * amount,
        );
        let srgb: Srgb = mixed.into_color();
        let (r, g, b) = srgb.into_format::<u8>().into_components();
        Rgb::new(r, g, b)
    }

    fn to_oklab(self) -> Oklab {
        Srgb::<u8>::new(self.r, self.g, self.b)
            .into_format::<f32>()
            .into_color()
    }
}

impl Color {
    pub const fn oklch(l: f32, c: f32, h: f32) -> Self {
        Self::Oklch { l, c, h }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb { r, g, b }
    }

    pub fn to_rgb(&self) -> Rgb {
        match *self {
            Self::Rgb { r, g, b } => Rgb::new(r, g, b),
            Self::Oklch { l, c, h } => oklch_to_rgb(l, c, h),
        }
    }
}

fn oklch_to_rgb(l: f32, c: f32, h: f32) -> Rgb {
    let oklch = Oklch::new(l, c, h);
    let srgb: Srgb = oklch.into_color();
    let (r, g, b) = srgb.into_format::<u8>().into_components();

    Rgb::new(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn achromatic_oklch_is_grey() {
        let Rgb { r, g, b } = Color::oklch(0.6, 0.0, 300.0).to_rgb();
        assert!(r.abs_diff(g) <= 1 && g.abs_diff(b) <= 1);
        assert!(r > 64 && r < 192);
    }

    #[test]
    fn oklch_lightness_orders_output() {
        let dark = Color::oklch(0.2, 0.01, 300.0).to_rgb();
        let light = Color::oklch(0.9, 0.01, 300.0).to_rgb();
        assert!(dark.g < light.g);
        let white = Color::oklch(1.0, 0.0, 0.0).to_rgb();
        assert!(white.r >= 254 && white.g >= 254 && white.b >= 254);
    }

    #[test]
    fn mix_endpoints_are_exact() {
        let blue = Rgb::new(0, 0, 255);
        assert_eq!(Rgb::BLACK.mix(blue, 0.0), Rgb::BLACK);
        assert_eq!(Rgb::BLACK.mix(blue, 1.0), blue);
    }
}
