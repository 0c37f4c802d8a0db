use crate::model::{Style, Theme};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const fn from_hex(hex: u32) -> Self {
        Rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }

    fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Rgb(mix(self.0, other.0), mix(self.1, other.1), mix(self.2, other.2))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

pub const GITHUB_LIGHT: [Rgb; 5] = [
    Rgb::from_hex(0xebedf0),
    Rgb::from_hex(0xc6e48b),
    Rgb::from_hex(0x7bc96f),
    Rgb::from_hex(0x239a3b),
    Rgb::from_hex(0x196127),
];

pub const GITHUB_DARK: [Rgb; 5] = [
    Rgb::from_hex(0x161b22),
    Rgb::from_hex(0x0e4429),
    Rgb::from_hex(0x006d32),
    Rgb::from_hex(0x26a641),
    Rgb::from_hex(0x39d353),
];

// ColorBrewer "Greens", 9-class sequential.
pub const GREENS: [Rgb; 9] = [
    Rgb::from_hex(0xf7fcf5),
    Rgb::from_hex(0xe5f5e0),
    Rgb::from_hex(0xc7e9c0),
    Rgb::from_hex(0xa1d99b),
    Rgb::from_hex(0x74c476),
    Rgb::from_hex(0x41ab5d),
    Rgb::from_hex(0x238b45),
    Rgb::from_hex(0x006d2c),
    Rgb::from_hex(0x00441b),
];

pub const DARK_GREEN: [Rgb; 4] = [
    Rgb::from_hex(0x0d1117),
    Rgb::from_hex(0x003d00),
    Rgb::from_hex(0x006600),
    Rgb::from_hex(0x00cc00),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Palette {
    /// Fixed bins, lowest activity first.
    Discrete(Vec<Rgb>),
    /// Evenly spaced stops, linearly interpolated.
    Gradient(Vec<Rgb>),
}

impl Palette {
    /// Color at position `t` in `[0, 1]`. Values outside are clamped.
    pub fn color_at(&self, t: f64) -> Rgb {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Palette::Discrete(colors) | Palette::Gradient(colors) if colors.len() <= 1 => {
                colors.first().copied().unwrap_or(Rgb(0, 0, 0))
            }
            Palette::Discrete(colors) => {
                let n = colors.len();
                let idx = ((t * n as f64).floor() as usize).min(n - 1);
                colors[idx]
            }
            Palette::Gradient(stops) => {
                let segments = (stops.len() - 1) as f64;
                let pos = t * segments;
                let idx = (pos.floor() as usize).min(stops.len() - 2);
                stops[idx].lerp(stops[idx + 1], pos - idx as f64)
            }
        }
    }

    /// Normalises `value` against `[min, max]`; a flat range maps to the
    /// lowest color.
    pub fn color_for(&self, value: u32, min: u32, max: u32) -> Rgb {
        if max <= min {
            return self.color_at(0.0);
        }
        let t = (value.saturating_sub(min)) as f64 / (max - min) as f64;
        self.color_at(t)
    }
}

pub fn resolve(theme: Theme, style: Style) -> Palette {
    match (style, theme) {
        (Style::Github, Theme::Light) => Palette::Discrete(GITHUB_LIGHT.to_vec()),
        (Style::Github, Theme::Dark) => Palette::Discrete(GITHUB_DARK.to_vec()),
        (Style::Gradient, Theme::Light) => Palette::Gradient(GREENS.to_vec()),
        (Style::Gradient, Theme::Dark) => Palette::Gradient(DARK_GREEN.to_vec()),
    }
}
