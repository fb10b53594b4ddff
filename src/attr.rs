//! Color and style application on drawable objects
use crate::color::{ColorSpec, IntoColor};
use crate::defaults;
use crate::scene::{FillStyle, LineStyle, MarkerStyle, Styleable};
use crate::style::Style;
use crate::{Result, get_color};

/// Set line and marker color of `obj`.
///
/// The fill color is only set if `fill` is true, blended with `alpha` when given.
pub fn set_color<S>(obj: &mut S, color: impl IntoColor, fill: bool, alpha: Option<f32>) -> Result<()>
where
    S: Styleable + ?Sized,
{
    let color = get_color(color)?;
    obj.line_mut().color = color;
    obj.marker_mut().color = color;
    if fill {
        let att = obj.fill_mut();
        att.color = color;
        att.alpha = alpha;
    }
    Ok(())
}

/// Options of [`set_style`]
#[derive(Debug, Clone, PartialEq)]
pub struct StyleOpts {
    /// Line and marker color, also the fill color when filling
    pub color: ColorSpec,
    /// Fill transparency
    pub alpha: Option<f32>,
    /// Marker style code
    pub marker_style: MarkerStyle,
    /// Marker size
    pub marker_size: f32,
    /// Line style, left untouched if `None`
    pub line_style: Option<LineStyle>,
    /// Line width in pixels
    pub line_width: f32,
    /// Fill style, left untouched if `None`. Setting it implies `fill`.
    pub fill_style: Option<FillStyle>,
    /// Whether the fill color is set
    pub fill: bool,
    /// X axis title, left untouched if `None`
    pub x_title: Option<String>,
    /// Y axis title, left untouched if `None`
    pub y_title: Option<String>,
    /// Displayed X range, left untouched if `None`
    pub x_range: Option<(f64, f64)>,
    /// Displayed Y range, left untouched if `None`
    pub y_range: Option<(f64, f64)>,
}

impl Default for StyleOpts {
    fn default() -> Self {
        StyleOpts {
            color: ColorSpec::default(),
            alpha: None,
            marker_style: MarkerStyle(defaults::MARKER_STYLE),
            marker_size: defaults::MARKER_SIZE,
            line_style: None,
            line_width: defaults::LINE_WIDTH,
            fill_style: None,
            fill: false,
            x_title: None,
            y_title: None,
            x_range: None,
            y_range: None,
        }
    }
}

impl StyleOpts {
    /// Options with the marker and line defaults of `style`
    pub fn from_style(style: &Style) -> Self {
        StyleOpts {
            marker_style: style.marker_style,
            marker_size: style.marker_size,
            line_width: style.line_width,
            ..Default::default()
        }
    }

    /// Set the color and return self for chaining
    pub fn with_color(self, color: impl Into<ColorSpec>) -> Self {
        Self {
            color: color.into(),
            ..self
        }
    }

    /// Set the fill transparency and return self for chaining
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self {
            alpha: Some(alpha),
            ..self
        }
    }

    /// Set the marker style and size and return self for chaining
    pub fn with_marker(self, style: MarkerStyle, size: f32) -> Self {
        Self {
            marker_style: style,
            marker_size: size,
            ..self
        }
    }

    /// Set the line style and return self for chaining
    pub fn with_line_style(self, line_style: LineStyle) -> Self {
        Self {
            line_style: Some(line_style),
            ..self
        }
    }

    /// Set the line width and return self for chaining
    pub fn with_line_width(self, line_width: f32) -> Self {
        Self { line_width, ..self }
    }

    /// Set the fill style and return self for chaining
    pub fn with_fill_style(self, fill_style: FillStyle) -> Self {
        Self {
            fill_style: Some(fill_style),
            ..self
        }
    }

    /// Request the fill color and return self for chaining
    pub fn with_fill(self, fill: bool) -> Self {
        Self { fill, ..self }
    }

    /// Set the axis titles and return self for chaining
    pub fn with_titles(self, x_title: &str, y_title: &str) -> Self {
        Self {
            x_title: Some(x_title.to_string()),
            y_title: Some(y_title.to_string()),
            ..self
        }
    }

    /// Set the X user range and return self for chaining
    pub fn with_x_range(self, min: f64, max: f64) -> Self {
        Self {
            x_range: Some((min, max)),
            ..self
        }
    }

    /// Set the Y user range and return self for chaining
    pub fn with_y_range(self, min: f64, max: f64) -> Self {
        Self {
            y_range: Some((min, max)),
            ..self
        }
    }

    fn wants_fill(&self) -> bool {
        self.fill || self.fill_style.is_some()
    }
}

/// Apply a complete style to `obj`.
///
/// The object title is cleared and its statistics box hidden.
/// Applying the same options twice leaves the object as applying them once.
pub fn set_style<S>(obj: &mut S, opts: &StyleOpts) -> Result<()>
where
    S: Styleable + ?Sized,
{
    obj.set_title("");
    obj.set_stats(false);

    set_color(obj, &opts.color, opts.wants_fill(), opts.alpha)?;

    let marker = obj.marker_mut();
    marker.style = opts.marker_style;
    marker.size = opts.marker_size;

    let line = obj.line_mut();
    line.width = opts.line_width;
    if let Some(style) = opts.line_style {
        line.style = style;
    }

    if let Some(style) = opts.fill_style {
        obj.fill_mut().style = style;
    }

    if let Some(ax) = obj.x_axis_mut() {
        if let Some(title) = &opts.x_title {
            ax.set_title(title);
        }
        if let Some((min, max)) = opts.x_range {
            ax.set_range_user(min, max);
        }
    }
    if let Some(ay) = obj.y_axis_mut() {
        if let Some(title) = &opts.y_title {
            ay.set_title(title);
        }
        if let Some((min, max)) = opts.y_range {
            ay.set_range_user(min, max);
        }
    }
    Ok(())
}
