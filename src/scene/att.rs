//! Line, marker and fill attributes

use crate::Color;

/// Line style code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineStyle(pub u8);

impl LineStyle {
    /// Continuous line
    pub const SOLID: LineStyle = LineStyle(1);
    /// Dashed line
    pub const DASHED: LineStyle = LineStyle(2);
    /// Dotted line
    pub const DOTTED: LineStyle = LineStyle(3);
    /// Alternating dashes and dots
    pub const DASH_DOTTED: LineStyle = LineStyle(4);
}

impl Default for LineStyle {
    fn default() -> Self {
        LineStyle::SOLID
    }
}

/// Marker style code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MarkerStyle(pub u8);

impl MarkerStyle {
    /// Single pixel dot
    pub const DOT: MarkerStyle = MarkerStyle(1);
    /// Full circle
    pub const FULL_CIRCLE: MarkerStyle = MarkerStyle(20);
    /// Full square
    pub const FULL_SQUARE: MarkerStyle = MarkerStyle(21);
    /// Full upward triangle
    pub const FULL_TRIANGLE_UP: MarkerStyle = MarkerStyle(22);
    /// Open circle
    pub const OPEN_CIRCLE: MarkerStyle = MarkerStyle(24);
}

impl Default for MarkerStyle {
    fn default() -> Self {
        MarkerStyle::DOT
    }
}

/// Fill style code: 0 is hollow, 1001 solid, 3000-3999 hatches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FillStyle(pub u16);

impl FillStyle {
    /// No fill
    pub const HOLLOW: FillStyle = FillStyle(0);
    /// Solid fill
    pub const SOLID: FillStyle = FillStyle(1001);
    /// Diagonal hatches
    pub const HATCH_DIAG: FillStyle = FillStyle(3354);
}

impl Default for FillStyle {
    fn default() -> Self {
        FillStyle::SOLID
    }
}

/// Line attributes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineAtt {
    /// Line color
    pub color: Color,
    /// Line style code
    pub style: LineStyle,
    /// Line width in pixels
    pub width: f32,
}

impl Default for LineAtt {
    fn default() -> Self {
        LineAtt {
            color: Color::BLACK,
            style: LineStyle::SOLID,
            width: 1.0,
        }
    }
}

/// Marker attributes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerAtt {
    /// Marker color
    pub color: Color,
    /// Marker style code
    pub style: MarkerStyle,
    /// Marker size
    pub size: f32,
}

impl Default for MarkerAtt {
    fn default() -> Self {
        MarkerAtt {
            color: Color::BLACK,
            style: MarkerStyle::DOT,
            size: 1.0,
        }
    }
}

/// Fill attributes.
/// `alpha` blends the fill color when set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillAtt {
    /// Fill color
    pub color: Color,
    /// Fill transparency, opaque if `None`
    pub alpha: Option<f32>,
    /// Fill style code
    pub style: FillStyle,
}

impl FillAtt {
    /// A fully transparent fill, as used by legends and text boxes
    pub const fn transparent() -> Self {
        FillAtt {
            color: Color::WHITE,
            alpha: Some(0.0),
            style: FillStyle::SOLID,
        }
    }
}

impl Default for FillAtt {
    fn default() -> Self {
        FillAtt {
            color: Color::WHITE,
            alpha: None,
            style: FillStyle::SOLID,
        }
    }
}
