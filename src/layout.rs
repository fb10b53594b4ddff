//! Canvas layouts: a single drawing area, or a main pad above a ratio pad.
//!
//! The two-pad layout splits the canvas vertically: the upper pad takes about the top 70%,
//! the lower pad the bottom 29%, with a thin gap between them.
//! Each pad has its own margins so axis labels do not collide at the split.
use crate::defaults;
use crate::geom::{Margin, NdcRect};
use crate::scene::{Canvas, Pad};
use crate::style::{self, Style};

/// Options of the canvas builders
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasOpts {
    /// Canvas name
    pub name: String,
    /// Canvas title
    pub title: String,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Log scale on X, applied to both pads of a ratio layout
    pub log_x: bool,
    /// Log scale on Y, applied to the main pad only
    pub log_y: bool,
    /// Margins of the canvas itself
    pub margin: Margin,
    /// Margins of the upper pad.
    /// Defaults to the canvas left and right margins, with a thin bottom margin.
    pub upper_margin: Option<Margin>,
    /// Margins of the lower pad.
    /// Defaults to the canvas left and right margins, with room for the X axis at the bottom.
    pub lower_margin: Option<Margin>,
    /// Style of the canvas. Defaults to [`style::current`].
    pub style: Option<Style>,
}

impl Default for CanvasOpts {
    fn default() -> Self {
        CanvasOpts {
            name: "c".to_string(),
            title: String::new(),
            width: defaults::CANVAS_WIDTH,
            height: defaults::CANVAS_HEIGHT,
            log_x: false,
            log_y: false,
            margin: defaults::CANVAS_MARGIN,
            upper_margin: None,
            lower_margin: None,
            style: None,
        }
    }
}

impl CanvasOpts {
    /// Options taking the canvas margins from `style`, and building the canvas with it
    pub fn from_style(style: Style) -> Self {
        CanvasOpts {
            margin: style.pad_margin,
            style: Some(style),
            ..Default::default()
        }
    }

    /// Set the canvas name and title and return self for chaining
    pub fn with_name(self, name: &str, title: &str) -> Self {
        Self {
            name: name.to_string(),
            title: title.to_string(),
            ..self
        }
    }

    /// Set the pixel size and return self for chaining
    pub fn with_size(self, width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..self
        }
    }

    /// Set the log scales and return self for chaining
    pub fn with_log(self, log_x: bool, log_y: bool) -> Self {
        Self {
            log_x,
            log_y,
            ..self
        }
    }

    /// Set the canvas margins and return self for chaining
    pub fn with_margin(self, margin: impl Into<Margin>) -> Self {
        Self {
            margin: margin.into(),
            ..self
        }
    }

    /// Set the upper pad margins and return self for chaining
    pub fn with_upper_margin(self, margin: impl Into<Margin>) -> Self {
        Self {
            upper_margin: Some(margin.into()),
            ..self
        }
    }

    /// Set the lower pad margins and return self for chaining
    pub fn with_lower_margin(self, margin: impl Into<Margin>) -> Self {
        Self {
            lower_margin: Some(margin.into()),
            ..self
        }
    }

    /// Set the style and return self for chaining
    pub fn with_style(self, style: Style) -> Self {
        Self {
            style: Some(style),
            ..self
        }
    }

    fn upper_pad_margin(&self) -> Margin {
        self.upper_margin.unwrap_or_else(|| {
            self.margin
                .with_top(defaults::UPPER_PAD_TOP_MARGIN)
                .with_bottom(defaults::UPPER_PAD_BOTTOM_MARGIN)
        })
    }

    fn lower_pad_margin(&self) -> Margin {
        self.lower_margin.unwrap_or_else(|| {
            self.margin
                .with_top(defaults::LOWER_PAD_TOP_MARGIN)
                .with_bottom(defaults::LOWER_PAD_BOTTOM_MARGIN)
        })
    }

    fn canvas(&self) -> Canvas {
        let style = self.style.clone().unwrap_or_else(style::current);
        let mut canvas = Canvas::new(&self.name, &self.title, self.width, self.height, &style);
        let pad = canvas.pad_mut();
        pad.set_margin(self.margin);
        canvas
    }
}

/// A canvas split in a main pad and a ratio pad below it
#[derive(Debug, Clone)]
pub struct RatioCanvas {
    canvas: Canvas,
}

const UPPER: usize = 0;
const LOWER: usize = 1;

impl RatioCanvas {
    /// The canvas holding both pads
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// The main pad
    pub fn upper(&self) -> &Pad {
        &self.canvas.subpads()[UPPER]
    }

    /// The main pad
    pub fn upper_mut(&mut self) -> &mut Pad {
        &mut self.canvas.subpads_mut()[UPPER]
    }

    /// The ratio pad
    pub fn lower(&self) -> &Pad {
        &self.canvas.subpads()[LOWER]
    }

    /// The ratio pad
    pub fn lower_mut(&mut self) -> &mut Pad {
        &mut self.canvas.subpads_mut()[LOWER]
    }

    /// Both pads at once, upper first
    pub fn pads_mut(&mut self) -> (&mut Pad, &mut Pad) {
        let (upper, lower) = self.canvas.subpads_mut().split_at_mut(LOWER);
        (&mut upper[UPPER], &mut lower[0])
    }

    /// The canvas holding both pads, consuming the layout
    pub fn into_canvas(self) -> Canvas {
        self.canvas
    }
}

/// Either layout built by [`format_canvas`]
#[derive(Debug, Clone)]
pub enum Layout {
    /// A canvas with a single pad
    Single(Canvas),
    /// A canvas with a main pad above a ratio pad
    Ratio(RatioCanvas),
}

impl Layout {
    /// The top-level canvas of either layout
    pub fn canvas(&self) -> &Canvas {
        match self {
            Layout::Single(c) => c,
            Layout::Ratio(r) => r.canvas(),
        }
    }

    /// The pad holding the main plot
    pub fn main_pad_mut(&mut self) -> &mut Pad {
        match self {
            Layout::Single(c) => c.pad_mut(),
            Layout::Ratio(r) => r.upper_mut(),
        }
    }
}

/// A single-pad canvas
pub fn single_canvas(opts: &CanvasOpts) -> Canvas {
    let mut canvas = opts.canvas();
    let pad = canvas.pad_mut();
    pad.set_log_x(opts.log_x);
    pad.set_log_y(opts.log_y);
    canvas
}

/// A canvas with a main pad above a ratio pad
pub fn ratio_canvas(opts: &CanvasOpts) -> RatioCanvas {
    let mut canvas = opts.canvas();
    let [xl, yl, xu, yu] = defaults::UPPER_PAD_NDC;
    let upper = canvas.add_subpad("u", "u", NdcRect::new(xl, yl, xu, yu));
    let [xl, yl, xu, yu] = defaults::LOWER_PAD_NDC;
    let lower = canvas.add_subpad("d", "d", NdcRect::new(xl, yl, xu, yu));
    debug_assert_eq!((upper, lower), (UPPER, LOWER));

    let mut ratio = RatioCanvas { canvas };
    let (upper, lower) = ratio.pads_mut();
    upper.set_margin(opts.upper_pad_margin());
    upper.set_log_x(opts.log_x);
    upper.set_log_y(opts.log_y);
    lower.set_margin(opts.lower_pad_margin());
    lower.set_log_x(opts.log_x);
    ratio
}

/// Build a single or a ratio layout
pub fn format_canvas(ratio: bool, opts: &CanvasOpts) -> Layout {
    if ratio {
        Layout::Ratio(ratio_canvas(opts))
    } else {
        Layout::Single(single_canvas(opts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{Near, assert_near};

    #[test]
    fn ratio_pads_do_not_overlap() {
        let c = ratio_canvas(&CanvasOpts::default());
        assert_eq!(c.canvas().subpads().len(), 2);
        let up = c.upper().rect();
        let down = c.lower().rect();
        let gap = down.gap_below(&up);
        assert!(gap >= 0.0);
        assert_near!(abs, gap, 0.01_f32);
        assert!(up.height() > down.height());
    }

    #[test]
    fn single_has_no_subpad() {
        match format_canvas(false, &CanvasOpts::default()) {
            Layout::Single(c) => assert!(c.subpads().is_empty()),
            Layout::Ratio(_) => panic!("expected a single canvas"),
        }
        assert!(matches!(
            format_canvas(true, &CanvasOpts::default()),
            Layout::Ratio(_)
        ));
    }

    #[test]
    fn log_scales() {
        let opts = CanvasOpts::default().with_log(true, true);
        let c = ratio_canvas(&opts);
        assert!(c.upper().log_x() && c.lower().log_x());
        assert!(c.upper().log_y());
        assert!(!c.lower().log_y());
        assert!(!c.canvas().pad().log_y());

        let c = single_canvas(&opts);
        assert!(c.pad().log_x() && c.pad().log_y());
    }

    #[test]
    fn pad_margins() {
        let c = ratio_canvas(&CanvasOpts::default());
        let m = c.upper().margin();
        assert_eq!(m.left(), 0.13);
        assert_eq!(m.right(), 0.03);
        assert_eq!(m.bottom(), 0.005);
        assert_eq!(m.top(), 0.08);
        let m = c.lower().margin();
        assert_eq!(m.bottom(), 0.35);
        assert_eq!(m.top(), 0.0054);

        let c = ratio_canvas(&CanvasOpts::default().with_lower_margin(0.2));
        assert_eq!(c.lower().margin(), Margin::Even(0.2));
    }

    #[test]
    fn explicit_style() {
        let c = single_canvas(&CanvasOpts::default().with_style(Style::atlas()));
        assert_eq!(c.style(), &Style::atlas());
        assert_eq!(c.pad().margin(), defaults::CANVAS_MARGIN);
    }

    #[test]
    fn margins_and_ticks_from_style() {
        let style = Style {
            ticks: (false, true),
            ..Style::atlas()
        };
        let opts = CanvasOpts::from_style(style.clone());
        let c = ratio_canvas(&opts);
        assert_eq!(c.canvas().pad().margin(), style.pad_margin);
        assert_eq!(c.canvas().pad().ticks(), (false, true));
        assert_eq!(c.upper().ticks(), (false, true));
        assert_eq!(c.lower().ticks(), (false, true));
        assert_eq!(c.upper().margin().left(), style.pad_margin.left());
    }
}
