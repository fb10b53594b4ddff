//! Color handles and their resolution from names, hex literals and builtin symbols.
//!
//! Strings resolve in this order:
//!  1. `#...` is a hex literal (`#rgb`, `#rrggbb`, with optional alpha)
//!  2. a name of the analysis color table (see [`hepstyle_base::color::names`])
//!  3. a builtin symbol with an offset, `kRed+2` or `azure-4`
//!  4. a builtin symbol, `kBlack` or `black`
use hepstyle_base::color::{self as base, ColorU8};

use crate::{Error, Result};

/// A concrete color handle, as stored in drawable attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Index in the renderer palette (builtin symbols and their offsets)
    Index(i32),
    /// Explicit RGBA value
    Rgb(ColorU8),
}

impl Color {
    /// Builtin white
    pub const WHITE: Color = Color::Index(0);
    /// Builtin black
    pub const BLACK: Color = Color::Index(1);
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

impl From<ColorU8> for Color {
    fn from(c: ColorU8) -> Self {
        Color::Rgb(c)
    }
}

/// Builtin palette symbols and their palette index
const BUILTIN: &[(&str, i32)] = &[
    ("White", 0),
    ("Black", 1),
    ("Gray", 920),
    ("Red", 632),
    ("Green", 416),
    ("Blue", 600),
    ("Yellow", 400),
    ("Magenta", 616),
    ("Cyan", 432),
    ("Orange", 800),
    ("Spring", 820),
    ("Teal", 840),
    ("Azure", 860),
    ("Violet", 880),
    ("Pink", 900),
];

/// Look up a builtin symbol. `kRed`, `red` and `Red` all name the same symbol.
pub fn builtin(name: &str) -> Option<i32> {
    let bare = match name.strip_prefix('k') {
        Some(rest) if rest.starts_with(|c: char| c.is_ascii_uppercase()) => rest,
        _ => name,
    };
    BUILTIN
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(bare))
        .map(|(_, idx)| *idx)
}

/// A color given either as a handle or as a string to resolve
#[derive(Debug, Clone, PartialEq)]
pub enum ColorSpec {
    /// Already resolved, passed through unchanged
    Handle(Color),
    /// Resolved with [`get_color`]
    Name(String),
}

impl Default for ColorSpec {
    fn default() -> Self {
        ColorSpec::Handle(Color::BLACK)
    }
}

impl From<Color> for ColorSpec {
    fn from(c: Color) -> Self {
        ColorSpec::Handle(c)
    }
}

impl From<ColorU8> for ColorSpec {
    fn from(c: ColorU8) -> Self {
        ColorSpec::Handle(Color::Rgb(c))
    }
}

impl From<&str> for ColorSpec {
    fn from(name: &str) -> Self {
        ColorSpec::Name(name.to_string())
    }
}

impl From<String> for ColorSpec {
    fn from(name: String) -> Self {
        ColorSpec::Name(name)
    }
}

/// Anything that can be turned into a [`Color`] handle
pub trait IntoColor {
    /// Resolve into a handle
    fn into_color(self) -> Result<Color>;
}

impl IntoColor for Color {
    fn into_color(self) -> Result<Color> {
        Ok(self)
    }
}

impl IntoColor for ColorU8 {
    fn into_color(self) -> Result<Color> {
        Ok(Color::Rgb(self))
    }
}

impl IntoColor for &str {
    fn into_color(self) -> Result<Color> {
        resolve_name(self)
    }
}

impl IntoColor for &String {
    fn into_color(self) -> Result<Color> {
        resolve_name(self)
    }
}

impl IntoColor for String {
    fn into_color(self) -> Result<Color> {
        resolve_name(&self)
    }
}

impl IntoColor for &ColorSpec {
    fn into_color(self) -> Result<Color> {
        match self {
            ColorSpec::Handle(c) => Ok(*c),
            ColorSpec::Name(name) => resolve_name(name),
        }
    }
}

impl IntoColor for ColorSpec {
    fn into_color(self) -> Result<Color> {
        (&self).into_color()
    }
}

/// Resolve a color from a handle, a name or a hex literal
pub fn get_color(c: impl IntoColor) -> Result<Color> {
    c.into_color()
}

fn resolve_name(s: &str) -> Result<Color> {
    if s.starts_with('#') {
        return ColorU8::parse_hex(s)
            .map(Color::Rgb)
            .map_err(|_| Error::InvalidHex(s.to_string()));
    }
    if let Some(c) = base::lookup_name(s) {
        return Ok(Color::Rgb(c));
    }
    if let Some(pos) = s.rfind(['+', '-']).filter(|&p| p > 0) {
        let (sym, offset) = (&s[..pos], &s[pos + 1..]);
        if offset.is_empty() || !offset.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::UnknownColor(s.to_string()));
        }
        let n: i32 = offset
            .parse()
            .map_err(|_| Error::UnknownColor(s.to_string()))?;
        let idx = builtin(sym).ok_or_else(|| Error::UnknownColor(s.to_string()))?;
        let idx = if s.as_bytes()[pos] == b'+' {
            idx.checked_add(n)
        } else {
            idx.checked_sub(n)
        };
        return idx
            .map(Color::Index)
            .ok_or_else(|| Error::UnknownColor(s.to_string()));
    }
    builtin(s)
        .map(Color::Index)
        .ok_or_else(|| Error::UnknownColor(s.to_string()))
}
