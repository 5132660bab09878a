// File: crates/meridian-core/src/theme.rs
// Summary: RGBA colors and the screen/export style sheets applied to chart surfaces.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::from_rgb(0, 0, 0);
    pub const WHITE: Color = Color::from_rgb(255, 255, 255);

    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self { Self { r, g, b, a } }
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self { Self::from_argb(255, r, g, b) }

    /// `#rgb`, `#rrggbb` or `#rrggbbaa`.
    pub fn from_hex(s: &str) -> Option<Self> {
        let h = s.strip_prefix('#')?;
        let byte = |i: usize| u8::from_str_radix(h.get(i..i + 2)?, 16).ok();
        match h.len() {
            3 => {
                let mut it = h.chars().map(|c| c.to_digit(16).map(|d| (d * 17) as u8));
                Some(Self::from_rgb(it.next()??, it.next()??, it.next()??))
            }
            6 => Some(Self::from_rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Some(Self::from_argb(byte(6)?, byte(0)?, byte(2)?, byte(4)?)),
            _ => None,
        }
    }

    /// Hex notation or one of a small set of CSS color names.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.starts_with('#') { return Self::from_hex(s); }
        let named = match s.to_ascii_lowercase().as_str() {
            "black" => Self::BLACK,
            "white" => Self::WHITE,
            "red" => Self::from_rgb(255, 0, 0),
            "green" => Self::from_rgb(0, 128, 0),
            "blue" => Self::from_rgb(0, 0, 255),
            "orange" => Self::from_rgb(255, 165, 0),
            "purple" => Self::from_rgb(128, 0, 128),
            "gray" | "grey" => Self::from_rgb(128, 128, 128),
            "steelblue" => Self::from_rgb(70, 130, 180),
            "none" | "transparent" => Self::from_argb(0, 0, 0, 0),
            _ => return None,
        };
        Some(named)
    }

    pub const fn with_alpha(self, a: u8) -> Self { Self { a, ..self } }

    pub fn to_hex(&self) -> String { format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b) }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.to_hex()) }
}

/// Style sheet applied to a surface before rasterizing or serializing it.
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Option<Color>,
    pub text: Color,
    pub font_family: &'static str,
    pub font_size: f64,
    pub font_weight: u16,
    pub axis_stroke: Color,
    pub tick_opacity: f64,
    pub selector_stroke: Option<Color>,
    pub selector_stroke_width: f64,
    pub density_tick_width: f64,
    pub viewbox_fill: Color,
    pub glyph_stroke: Color,
}

impl Theme {
    pub fn screen() -> Self {
        Self {
            name: "screen",
            background: None,
            text: Color::from_rgb(0x33, 0x33, 0x33),
            font_family: "sans-serif",
            font_size: 10.0,
            font_weight: 400,
            axis_stroke: Color::BLACK,
            tick_opacity: 1.0,
            selector_stroke: None,
            selector_stroke_width: 0.0,
            density_tick_width: 1.0,
            viewbox_fill: Color::from_argb(40, 0x44, 0x44, 0x44),
            glyph_stroke: Color::from_rgb(0x55, 0x55, 0x55),
        }
    }

    /// Sheet for exported images: white background, light axes, Helvetica 12/300.
    pub fn export() -> Self {
        Self {
            name: "export",
            background: Some(Color::WHITE),
            text: Color::from_rgb(0x33, 0x33, 0x33),
            font_family: "Helvetica",
            font_size: 12.0,
            font_weight: 300,
            axis_stroke: Color::from_rgb(0xbb, 0xbb, 0xbb),
            tick_opacity: 0.5,
            selector_stroke: Some(Color::from_rgb(0xbb, 0xbb, 0xbb)),
            selector_stroke_width: 1.0,
            density_tick_width: 1.5,
            ..Self::screen()
        }
    }
}

/// Built-in themes by name.
pub fn presets() -> Vec<Theme> { vec![Theme::screen(), Theme::export()] }

pub fn find(name: &str) -> Option<Theme> {
    presets().into_iter().find(|t| t.name.eq_ignore_ascii_case(name))
}
