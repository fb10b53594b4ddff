//! Text labels: plain, experiment and luminosity captions.
//!
//! Every function draws onto the pad, which takes ownership of the text,
//! and returns the index of the new primitive.
use crate::Color;
use crate::defaults;
use crate::scene::{Latex, Pad};

fn latex(x: f64, y: f64, ndc: bool, size: f32, text: String) -> Latex {
    Latex {
        x,
        y,
        ndc,
        text,
        font: defaults::TEXT_FONT,
        size,
        color: Color::BLACK,
    }
}

/// Draw `msg` at `(x, y)` in NDC
pub fn latex_label(pad: &mut Pad, size: f32, x: f64, y: f64, msg: &str) -> usize {
    pad.draw(latex(x, y, true, size, msg.to_string()))
}

/// Options of [`atlas_label`]
#[derive(Debug, Clone, PartialEq)]
pub struct AtlasLabel {
    /// X position
    pub x: f64,
    /// Y position
    pub y: f64,
    /// Text size
    pub size: f32,
    /// Text following the experiment name
    pub msg: String,
    /// Whether `x` and `y` are NDC or data coordinates
    pub ndc: bool,
}

impl AtlasLabel {
    /// An "ATLAS Internal" label at `(x, y)` in NDC
    pub fn new(x: f64, y: f64) -> Self {
        AtlasLabel {
            x,
            y,
            size: defaults::LABEL_TEXT_SIZE,
            msg: defaults::ATLAS_SUFFIX.to_string(),
            ndc: true,
        }
    }

    /// Set the text after the experiment name and return self for chaining
    pub fn with_msg(self, msg: &str) -> Self {
        Self {
            msg: msg.to_string(),
            ..self
        }
    }

    /// Set the text size and return self for chaining
    pub fn with_size(self, size: f32) -> Self {
        Self { size, ..self }
    }

    /// Place the label in data coordinates and return self for chaining
    pub fn in_data_coords(self) -> Self {
        Self { ndc: false, ..self }
    }
}

/// Draw the experiment label: a bold italic "ATLAS" followed by the message
pub fn atlas_label(pad: &mut Pad, label: &AtlasLabel) -> usize {
    let text = format!("#bf{{#it{{ATLAS}}}} {}", label.msg);
    pad.draw(latex(label.x, label.y, label.ndc, label.size, text))
}

/// Options of [`lumi_label`]
#[derive(Debug, Clone, PartialEq)]
pub struct LumiLabel {
    /// X position
    pub x: f64,
    /// Y position
    pub y: f64,
    /// Text size
    pub size: f32,
    /// Center-of-mass energy in TeV
    pub sqrt_s: f64,
    /// Integrated luminosity in fb^-1
    pub lumi: f64,
    /// Whether `x` and `y` are NDC or data coordinates
    pub ndc: bool,
}

impl LumiLabel {
    /// A 13 TeV, 139 fb^-1 caption at `(x, y)` in NDC
    pub fn new(x: f64, y: f64) -> Self {
        LumiLabel {
            x,
            y,
            size: defaults::LABEL_TEXT_SIZE,
            sqrt_s: defaults::SQRT_S_TEV,
            lumi: defaults::LUMI_FB,
            ndc: true,
        }
    }

    /// Set energy and luminosity and return self for chaining
    pub fn with_run(self, sqrt_s: f64, lumi: f64) -> Self {
        Self {
            sqrt_s,
            lumi,
            ..self
        }
    }

    /// Set the text size and return self for chaining
    pub fn with_size(self, size: f32) -> Self {
        Self { size, ..self }
    }

    /// The caption text, both values with one decimal
    pub fn text(&self) -> String {
        format!(
            "#sqrt{{s}} = {:.1} TeV, {:.1} fb^{{-1}}",
            self.sqrt_s, self.lumi
        )
    }
}

/// Draw the center-of-mass energy and luminosity caption
pub fn lumi_label(pad: &mut Pad, label: &LumiLabel) -> usize {
    pad.draw(latex(label.x, label.y, label.ndc, label.size, label.text()))
}
