//! Axis formatting for the upper pad, the ratio pad and 2D maps.
//!
//! Each formatter takes a [`Frame`], applies the ranges to its range target
//! (see [`RangeTarget`]) and the text attributes to whichever axes it has.
//!
//! Range rules:
//!  - a log axis whose lower bound is exactly zero gets a positive floor instead:
//!    `1e-4` if the upper bound is at most 1, and `1` otherwise
//!  - the displayed value range of stacks, curves and 2D maps is set on the object itself,
//!    and on the axis for plain histograms
use crate::defaults;
use crate::geom::Size;
use crate::scene::{Axis, Frame, Pad, RangeTarget};

/// A text size, either relative to the pad or in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TextSize {
    /// Fraction of the pad size
    Fixed(f32),
    /// Pixels, converted to a fraction of the smallest pad side.
    /// The same pixel size is therefore relatively larger on a smaller pad.
    Pixels(f32),
}

impl TextSize {
    /// Resolve to a fraction of the pad.
    /// Without a pad size, pixel sizes are resolved against the default canvas.
    pub fn resolve(&self, pad_px: Option<Size>) -> f32 {
        match self {
            TextSize::Fixed(sz) => *sz,
            TextSize::Pixels(px) => {
                let side = pad_px.map(|s| s.min_side()).unwrap_or(
                    defaults::CANVAS_WIDTH.min(defaults::CANVAS_HEIGHT) as f32,
                );
                px / side
            }
        }
    }
}

impl From<f32> for TextSize {
    fn from(size: f32) -> Self {
        TextSize::Fixed(size)
    }
}

/// Lower bound usable on a log axis
fn log_safe_min(lo: f64, hi: f64, log: bool) -> f64 {
    if !log || lo != 0.0 {
        return lo;
    }
    let floor = if hi <= 1.0 {
        defaults::LOG_FLOOR_SMALL
    } else {
        defaults::LOG_FLOOR_UNIT
    };
    log::debug!("log axis range [0, {}]: lower bound set to {}", hi, floor);
    floor
}

fn set_value_range<F: Frame + ?Sized>(frame: &mut F, (lo, hi): (f64, f64), log: bool) {
    let lo = log_safe_min(lo, hi, log);
    match frame.range_target() {
        RangeTarget::Axis(axis) => axis.set_range_user(lo, hi),
        RangeTarget::Object(obj) => {
            obj.set_minimum(lo);
            obj.set_maximum(hi);
        }
    }
}

fn set_text(axis: &mut Axis, title: Option<&str>, offset: f32, title_size: f32, label_size: f32) {
    if let Some(title) = title {
        axis.set_title(title);
    }
    axis.set_title_offset(offset);
    axis.set_title_size(title_size);
    axis.set_label_size(label_size);
}

/// Options of [`format_upper_pad_axis`].
///
/// The defaults depend on whether the pad is the upper part of a ratio layout:
/// the X axis text is hidden, and the Y axis text is larger and closer to the axis.
#[derive(Debug, Clone, PartialEq)]
pub struct UpperAxisOpts {
    /// Whether the pad is the upper part of a ratio layout
    pub ratio: bool,
    /// X axis title, left untouched if `None`
    pub x_title: Option<String>,
    /// Y axis title, left untouched if `None`
    pub y_title: Option<String>,
    /// Displayed X range
    pub x_range: Option<(f64, f64)>,
    /// Displayed Y range, applied to the range target
    pub y_range: Option<(f64, f64)>,
    /// Floor the lower X bound for a log scale
    pub log_x: bool,
    /// Floor the lower Y bound for a log scale
    pub log_y: bool,
    /// X divisions code
    pub x_divisions: Option<i32>,
    /// Y divisions code
    pub y_divisions: Option<i32>,
    /// X title offset
    pub x_title_offset: f32,
    /// Y title offset
    pub y_title_offset: f32,
    /// X title size
    pub x_title_size: TextSize,
    /// Y title size
    pub y_title_size: TextSize,
    /// X tick label size
    pub x_label_size: TextSize,
    /// Y tick label size
    pub y_label_size: TextSize,
    /// Pixel size of the pad, to resolve [`TextSize::Pixels`]
    pub pad_size: Option<Size>,
}

impl UpperAxisOpts {
    /// Defaults for a ratio layout or a single plot
    pub fn new(ratio: bool) -> Self {
        let (y_offset, text, x_text) = if ratio {
            (1.1, 0.05, 0.0)
        } else {
            (1.8, 0.04, 0.04)
        };
        UpperAxisOpts {
            ratio,
            x_title: None,
            y_title: None,
            x_range: None,
            y_range: None,
            log_x: false,
            log_y: false,
            x_divisions: None,
            y_divisions: None,
            x_title_offset: 1.2,
            y_title_offset: y_offset,
            x_title_size: TextSize::Fixed(x_text),
            y_title_size: TextSize::Fixed(text),
            x_label_size: TextSize::Fixed(x_text),
            y_label_size: TextSize::Fixed(text),
            pad_size: None,
        }
    }

    /// Defaults for the upper pad of a ratio layout
    pub fn ratio() -> Self {
        Self::new(true)
    }

    /// Defaults for a single plot
    pub fn single() -> Self {
        Self::new(false)
    }

    /// Set the axis titles and return self for chaining
    pub fn with_titles(self, x_title: &str, y_title: &str) -> Self {
        Self {
            x_title: Some(x_title.to_string()),
            y_title: Some(y_title.to_string()),
            ..self
        }
    }

    /// Set the X range and return self for chaining
    pub fn with_x_range(self, min: f64, max: f64) -> Self {
        Self {
            x_range: Some((min, max)),
            ..self
        }
    }

    /// Set the Y range and return self for chaining
    pub fn with_y_range(self, min: f64, max: f64) -> Self {
        Self {
            y_range: Some((min, max)),
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

    /// Set the number of divisions and return self for chaining
    pub fn with_divisions(self, x: Option<i32>, y: Option<i32>) -> Self {
        Self {
            x_divisions: x,
            y_divisions: y,
            ..self
        }
    }

    /// Set the title offsets and return self for chaining
    pub fn with_title_offsets(self, x: f32, y: f32) -> Self {
        Self {
            x_title_offset: x,
            y_title_offset: y,
            ..self
        }
    }

    /// Set all the title and label sizes and return self for chaining
    pub fn with_text_size(self, size: impl Into<TextSize>) -> Self {
        let size = size.into();
        Self {
            x_title_size: size,
            y_title_size: size,
            x_label_size: size,
            y_label_size: size,
            ..self
        }
    }

    /// Resolve pixel text sizes against `pad` and return self for chaining
    pub fn with_pad(self, pad: &Pad) -> Self {
        Self {
            pad_size: Some(pad.size_px()),
            ..self
        }
    }
}

impl Default for UpperAxisOpts {
    fn default() -> Self {
        Self::ratio()
    }
}

/// Format the axes of the main plot
pub fn format_upper_pad_axis<F: Frame + ?Sized>(frame: &mut F, opts: &UpperAxisOpts) {
    if let Some(range) = opts.y_range {
        set_value_range(frame, range, opts.log_y);
    }
    let px = opts.pad_size;
    if let Some(ay) = frame.y_axis_mut() {
        set_text(
            ay,
            opts.y_title.as_deref(),
            opts.y_title_offset,
            opts.y_title_size.resolve(px),
            opts.y_label_size.resolve(px),
        );
        if let Some(n) = opts.y_divisions {
            ay.set_ndivisions(n);
        }
    }
    if let Some(ax) = frame.x_axis_mut() {
        if let Some((lo, hi)) = opts.x_range {
            ax.set_range_user(log_safe_min(lo, hi, opts.log_x), hi);
        }
        set_text(
            ax,
            opts.x_title.as_deref(),
            opts.x_title_offset,
            opts.x_title_size.resolve(px),
            opts.x_label_size.resolve(px),
        );
        if let Some(n) = opts.x_divisions {
            ax.set_ndivisions(n);
        }
    }
}

/// Options of [`format_lower_pad_axis`]
#[derive(Debug, Clone, PartialEq)]
pub struct LowerAxisOpts {
    /// Whether the pad is the lower part of a ratio layout. Y divisions are only set if so.
    pub ratio: bool,
    /// X axis title, left untouched if `None`
    pub x_title: Option<String>,
    /// Y axis title, left untouched if `None`
    pub y_title: Option<String>,
    /// Displayed X range
    pub x_range: Option<(f64, f64)>,
    /// Displayed Y range, applied to the range target
    pub y_range: (f64, f64),
    /// Floor the lower X bound for a log scale
    pub log_x: bool,
    /// X title offset
    pub x_title_offset: f32,
    /// Y title offset
    pub y_title_offset: f32,
    /// X tick label offset
    pub x_label_offset: f32,
    /// Y tick label offset
    pub y_label_offset: f32,
    /// X tick length, left untouched if `None`
    pub x_tick_length: Option<f32>,
    /// Y tick length, left untouched if `None`
    pub y_tick_length: Option<f32>,
    /// X title size
    pub x_title_size: TextSize,
    /// Y title size
    pub y_title_size: TextSize,
    /// X tick label size
    pub x_label_size: TextSize,
    /// Y tick label size
    pub y_label_size: TextSize,
    /// X divisions code
    pub x_divisions: i32,
    /// Y divisions code
    pub y_divisions: i32,
    /// Pixel size of the pad, to resolve [`TextSize::Pixels`]
    pub pad_size: Option<Size>,
}

impl Default for LowerAxisOpts {
    fn default() -> Self {
        LowerAxisOpts {
            ratio: true,
            x_title: None,
            y_title: None,
            x_range: None,
            y_range: defaults::LOWER_PAD_Y_RANGE,
            log_x: false,
            x_title_offset: 1.10,
            y_title_offset: 0.4,
            x_label_offset: 0.0,
            y_label_offset: 0.015,
            x_tick_length: Some(0.06),
            y_tick_length: None,
            x_title_size: TextSize::Fixed(0.12),
            y_title_size: TextSize::Fixed(0.12),
            x_label_size: TextSize::Fixed(0.14),
            y_label_size: TextSize::Fixed(0.12),
            x_divisions: defaults::LOWER_PAD_X_DIVISIONS,
            y_divisions: defaults::LOWER_PAD_Y_DIVISIONS,
            pad_size: None,
        }
    }
}

impl LowerAxisOpts {
    /// Set the axis titles and return self for chaining
    pub fn with_titles(self, x_title: &str, y_title: &str) -> Self {
        Self {
            x_title: Some(x_title.to_string()),
            y_title: Some(y_title.to_string()),
            ..self
        }
    }

    /// Set the X range and return self for chaining
    pub fn with_x_range(self, min: f64, max: f64) -> Self {
        Self {
            x_range: Some((min, max)),
            ..self
        }
    }

    /// Set the Y range and return self for chaining
    pub fn with_y_range(self, min: f64, max: f64) -> Self {
        Self {
            y_range: (min, max),
            ..self
        }
    }

    /// Set log scale on X and return self for chaining
    pub fn with_log_x(self, log_x: bool) -> Self {
        Self { log_x, ..self }
    }

    /// Resolve pixel text sizes against `pad` and return self for chaining
    pub fn with_pad(self, pad: &Pad) -> Self {
        Self {
            pad_size: Some(pad.size_px()),
            ..self
        }
    }
}

/// Format the axes of the ratio plot. The Y title is centered.
pub fn format_lower_pad_axis<F: Frame + ?Sized>(frame: &mut F, opts: &LowerAxisOpts) {
    set_value_range(frame, opts.y_range, false);
    let px = opts.pad_size;
    if let Some(ay) = frame.y_axis_mut() {
        if opts.ratio {
            ay.set_ndivisions(opts.y_divisions);
        }
        ay.center_title(true);
        if let Some(len) = opts.y_tick_length {
            ay.set_tick_length(len);
        }
        set_text(
            ay,
            opts.y_title.as_deref(),
            opts.y_title_offset,
            opts.y_title_size.resolve(px),
            opts.y_label_size.resolve(px),
        );
        ay.set_label_offset(opts.y_label_offset);
    }
    if let Some(ax) = frame.x_axis_mut() {
        if let Some((lo, hi)) = opts.x_range {
            ax.set_range_user(log_safe_min(lo, hi, opts.log_x), hi);
        }
        ax.set_ndivisions(opts.x_divisions);
        if let Some(len) = opts.x_tick_length {
            ax.set_tick_length(len);
        }
        set_text(
            ax,
            opts.x_title.as_deref(),
            opts.x_title_offset,
            opts.x_title_size.resolve(px),
            opts.x_label_size.resolve(px),
        );
        ax.set_label_offset(opts.x_label_offset);
    }
}

/// Options of [`format_2d_axis`]
#[derive(Debug, Clone, PartialEq)]
pub struct Axis2dOpts {
    /// X axis title, left untouched if `None`
    pub x_title: Option<String>,
    /// Y axis title, left untouched if `None`
    pub y_title: Option<String>,
    /// Title of the color scale
    pub z_title: Option<String>,
    /// Displayed X range
    pub x_range: Option<(f64, f64)>,
    /// Displayed Y range
    pub y_range: Option<(f64, f64)>,
    /// Displayed value range
    pub z_range: Option<(f64, f64)>,
    /// Floor the lower value bound for a log color scale
    pub log_z: bool,
    /// X title offset
    pub x_title_offset: f32,
    /// Y title offset
    pub y_title_offset: f32,
    /// Color scale title offset
    pub z_title_offset: f32,
    /// X and Y title size
    pub title_size: TextSize,
    /// X and Y tick label size
    pub label_size: TextSize,
    /// Color scale title size
    pub z_title_size: TextSize,
    /// Color scale label size
    pub z_label_size: TextSize,
    /// Pixel size of the pad, to resolve [`TextSize::Pixels`]
    pub pad_size: Option<Size>,
}

impl Default for Axis2dOpts {
    fn default() -> Self {
        Axis2dOpts {
            x_title: None,
            y_title: None,
            z_title: None,
            x_range: None,
            y_range: None,
            z_range: None,
            log_z: false,
            x_title_offset: 1.2,
            y_title_offset: 1.4,
            z_title_offset: 1.3,
            title_size: TextSize::Fixed(0.04),
            label_size: TextSize::Fixed(0.035),
            z_title_size: TextSize::Fixed(0.04),
            z_label_size: TextSize::Fixed(0.03),
            pad_size: None,
        }
    }
}

impl Axis2dOpts {
    /// Set the axis titles and return self for chaining
    pub fn with_titles(self, x_title: &str, y_title: &str) -> Self {
        Self {
            x_title: Some(x_title.to_string()),
            y_title: Some(y_title.to_string()),
            ..self
        }
    }

    /// Set the color scale title and return self for chaining
    pub fn with_z_title(self, z_title: &str) -> Self {
        Self {
            z_title: Some(z_title.to_string()),
            ..self
        }
    }

    /// Set the displayed value range and return self for chaining
    pub fn with_z_range(self, min: f64, max: f64) -> Self {
        Self {
            z_range: Some((min, max)),
            ..self
        }
    }

    /// Set log scale on Z and return self for chaining
    pub fn with_log_z(self, log_z: bool) -> Self {
        Self { log_z, ..self }
    }

    /// Resolve pixel text sizes against `pad` and return self for chaining
    pub fn with_pad(self, pad: &Pad) -> Self {
        Self {
            pad_size: Some(pad.size_px()),
            ..self
        }
    }
}

/// Format the axes and color scale of a 2D map
pub fn format_2d_axis<F: Frame + ?Sized>(frame: &mut F, opts: &Axis2dOpts) {
    if let Some(range) = opts.z_range {
        set_value_range(frame, range, opts.log_z);
    }
    let px = opts.pad_size;
    let title_size = opts.title_size.resolve(px);
    let label_size = opts.label_size.resolve(px);
    if let Some(ax) = frame.x_axis_mut() {
        if let Some((lo, hi)) = opts.x_range {
            ax.set_range_user(lo, hi);
        }
        set_text(ax, opts.x_title.as_deref(), opts.x_title_offset, title_size, label_size);
    }
    if let Some(ay) = frame.y_axis_mut() {
        if let Some((lo, hi)) = opts.y_range {
            ay.set_range_user(lo, hi);
        }
        set_text(ay, opts.y_title.as_deref(), opts.y_title_offset, title_size, label_size);
    }
    if let Some(az) = frame.z_axis_mut() {
        set_text(
            az,
            opts.z_title.as_deref(),
            opts.z_title_offset,
            opts.z_title_size.resolve(px),
            opts.z_label_size.resolve(px),
        );
    }
}
