use std::str::FromStr;
use std::{error, fmt};

mod named;

pub use named::*;

/// An 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorU8 {
    r: u8,
    g: u8,
    b: u8,
    a: u8,
}

impl ColorU8 {
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        ColorU8 { r, g, b, a: 255 }
    }

    pub const fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        ColorU8 { r, g, b, a }
    }

    pub const fn from_rgb_f32(r: f32, g: f32, b: f32) -> Self {
        let r = (r.clamp(0.0, 1.0) * 255.0) as u8;
        let g = (g.clamp(0.0, 1.0) * 255.0) as u8;
        let b = (b.clamp(0.0, 1.0) * 255.0) as u8;
        ColorU8 { r, g, b, a: 255 }
    }

    /// Build a color from an html literal known at compile time.
    ///
    /// Panics on malformed input; use [`ColorU8::parse_hex`] for runtime strings.
    pub const fn from_html(hex: &[u8]) -> Self {
        match decode_hex(hex) {
            Ok(c) => c,
            Err(_) => panic!("Invalid hex color"),
        }
    }

    /// Parse `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa`
    pub fn parse_hex(hex: &str) -> Result<Self, ParseError> {
        decode_hex(hex.trim().as_bytes())
    }

    pub const fn rgb(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    pub const fn rgba(&self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub const fn rgb_f32(&self) -> [f32; 3] {
        [self.r as f32 / 255.0, self.g as f32 / 255.0, self.b as f32 / 255.0]
    }

    pub const fn alpha(&self) -> u8 {
        self.a
    }

    pub const fn opacity(&self) -> Option<f32> {
        if self.a == 255 {
            None
        } else {
            Some(self.a as f32 / 255.0)
        }
    }

    pub fn html(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        ColorU8 { a, ..self }
    }

    /// Replace the alpha channel with `opacity` (0.0 to 1.0)
    pub fn with_opacity(self, opacity: f32) -> Self {
        ColorU8 {
            a: (opacity.clamp(0.0, 1.0) * 255.0).round() as u8,
            ..self
        }
    }

    pub const fn without_opacity(self) -> Self {
        ColorU8 { a: 255, ..self }
    }
}

const fn decode_hex(hex: &[u8]) -> Result<ColorU8, ParseError> {
    if hex.is_empty() || hex[0] != b'#' {
        return Err(ParseError::InvalidHex);
    }
    match hex.len() {
        4 | 5 => {
            let r = match hex_to_u8(hex[1]) {
                Some(v) => v,
                None => return Err(ParseError::InvalidHex),
            };
            let g = match hex_to_u8(hex[2]) {
                Some(v) => v,
                None => return Err(ParseError::InvalidHex),
            };
            let b = match hex_to_u8(hex[3]) {
                Some(v) => v,
                None => return Err(ParseError::InvalidHex),
            };
            let a = if hex.len() == 5 {
                match hex_to_u8(hex[4]) {
                    Some(v) => v,
                    None => return Err(ParseError::InvalidHex),
                }
            } else {
                0xf
            };
            Ok(ColorU8::from_rgba(r << 4 | r, g << 4 | g, b << 4 | b, a << 4 | a))
        }
        7 | 9 => {
            let r = match hex_pair(hex[1], hex[2]) {
                Some(v) => v,
                None => return Err(ParseError::InvalidHex),
            };
            let g = match hex_pair(hex[3], hex[4]) {
                Some(v) => v,
                None => return Err(ParseError::InvalidHex),
            };
            let b = match hex_pair(hex[5], hex[6]) {
                Some(v) => v,
                None => return Err(ParseError::InvalidHex),
            };
            let a = if hex.len() == 9 {
                match hex_pair(hex[7], hex[8]) {
                    Some(v) => v,
                    None => return Err(ParseError::InvalidHex),
                }
            } else {
                255
            };
            Ok(ColorU8::from_rgba(r, g, b, a))
        }
        _ => Err(ParseError::InvalidHex),
    }
}

const fn hex_pair(hi: u8, lo: u8) -> Option<u8> {
    match (hex_to_u8(hi), hex_to_u8(lo)) {
        (Some(hi), Some(lo)) => Some(hi << 4 | lo),
        _ => None,
    }
}

const fn hex_to_u8(hex: u8) -> Option<u8> {
    match hex {
        b'0'..=b'9' => Some(hex - b'0'),
        b'a'..=b'f' => Some(hex - b'a' + 10),
        b'A'..=b'F' => Some(hex - b'A' + 10),
        _ => None,
    }
}

/// Error while parsing a [`ColorU8`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// Empty or blank input
    InvalidFormat,
    /// Bad length or non-hex digit after `#`
    InvalidHex,
    /// Not a `#` literal and not in the analysis color table
    UnknownName,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::InvalidFormat => write!(f, "invalid color format"),
            ParseError::InvalidHex => write!(f, "invalid hex color"),
            ParseError::UnknownName => write!(f, "unknown color name"),
        }
    }
}

impl error::Error for ParseError {}

impl FromStr for ColorU8 {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        if raw.is_empty() {
            return Err(ParseError::InvalidFormat);
        }
        if raw.starts_with('#') {
            ColorU8::parse_hex(raw)
        } else {
            named::lookup_name(raw).ok_or(ParseError::UnknownName)
        }
    }
}
