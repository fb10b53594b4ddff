//! Primitives drawn onto pads. A pad owns what is drawn on it.

use crate::Color;
use crate::geom::NdcRect;

use super::{FillAtt, LineAtt};

/// A straight line segment in data coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    /// Start X
    pub x1: f64,
    /// Start Y
    pub y1: f64,
    /// End X
    pub x2: f64,
    /// End Y
    pub y2: f64,
    /// Line attributes
    pub att: LineAtt,
}

impl Line {
    /// A horizontal line at `y` from `x1` to `x2`
    pub fn horizontal(x1: f64, x2: f64, y: f64, att: LineAtt) -> Self {
        Line {
            x1,
            y1: y,
            x2,
            y2: y,
            att,
        }
    }

    /// A vertical line at `x` from `y1` to `y2`
    pub fn vertical(x: f64, y1: f64, y2: f64, att: LineAtt) -> Self {
        Line {
            x1: x,
            y1,
            x2: x,
            y2,
            att,
        }
    }
}

/// A text in markup syntax (`#bf{...}`, `#it{...}`, `#sqrt{...}`, `^{...}`)
#[derive(Debug, Clone, PartialEq)]
pub struct Latex {
    /// X position
    pub x: f64,
    /// Y position
    pub y: f64,
    /// Whether `x` and `y` are NDC or data coordinates
    pub ndc: bool,
    /// Text with TLatex markup
    pub text: String,
    /// Font code
    pub font: u16,
    /// Text size
    pub size: f32,
    /// Text color
    pub color: Color,
}

/// An entry of a [`Legend`]
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    /// Name of the object the entry describes
    pub object: String,
    /// Text of the entry
    pub label: String,
    /// Which attributes to show: any of `l` (line), `p` (marker), `f` (fill), `e` (error)
    pub option: String,
}

/// A legend box
#[derive(Debug, Clone, PartialEq)]
pub struct Legend {
    /// Rectangle of the box, in NDC
    pub rect: NdcRect,
    /// Border width, 0 for none
    pub border_size: u16,
    /// Font code of the entries
    pub text_font: u16,
    /// Text size of the entries
    pub text_size: f32,
    /// Vertical space between entries
    pub entry_separation: f32,
    /// Background fill
    pub fill: FillAtt,
    /// Number of entry columns
    pub columns: u32,
    entries: Vec<LegendEntry>,
}

impl Legend {
    /// An empty legend at `rect` with a border and a white fill
    pub fn new(rect: NdcRect) -> Self {
        Legend {
            rect,
            border_size: 1,
            text_font: 42,
            text_size: 0.0,
            entry_separation: 0.1,
            fill: FillAtt::default(),
            columns: 1,
            entries: Vec::new(),
        }
    }

    /// Add an entry for the object named `object`
    pub fn add_entry(&mut self, object: &str, label: &str, option: &str) {
        self.entries.push(LegendEntry {
            object: object.to_string(),
            label: label.to_string(),
            option: option.to_string(),
        });
    }

    /// The entries, in insertion order
    pub fn entries(&self) -> &[LegendEntry] {
        &self.entries
    }
}

/// A box of text lines
#[derive(Debug, Clone, PartialEq)]
pub struct PaveText {
    /// Rectangle of the box, in NDC
    pub rect: NdcRect,
    /// Text lines, top to bottom
    pub lines: Vec<String>,
    /// Font code
    pub text_font: u16,
    /// Text size
    pub text_size: f32,
    /// Border width, 0 for none
    pub border_size: u16,
    /// Background fill
    pub fill: FillAtt,
}

/// Any object a pad can own
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// A line segment
    Line(Line),
    /// A text
    Latex(Latex),
    /// A legend box
    Legend(Legend),
    /// A box of text lines
    PaveText(PaveText),
}

impl From<Line> for Primitive {
    fn from(line: Line) -> Self {
        Primitive::Line(line)
    }
}

impl From<Latex> for Primitive {
    fn from(latex: Latex) -> Self {
        Primitive::Latex(latex)
    }
}

impl From<Legend> for Primitive {
    fn from(legend: Legend) -> Self {
        Primitive::Legend(legend)
    }
}

impl From<PaveText> for Primitive {
    fn from(pave: PaveText) -> Self {
        Primitive::PaveText(pave)
    }
}
