#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
/*!
 * # hepstyle
 * _publication-style physics plots_. Helpers that dress histograms, ratio plots and 2D maps
 * with a consistent look.
 *
 * The crate is organized in two layers:
 *  - [`scene`]: a small retained model of the drawable objects (canvas, pads, axes,
 *    histograms, graphs, stacks, legends, texts). It only stores attributes and never renders.
 *  - the helpers: stateless functions and option structs that mutate scene objects
 *    ([`attr`], [`layout`], [`axes`], [`range`], [`legend`], [`label`], [`fit`], [`overlay`], [`style`]).
 *
 * ## A ratio plot in a few calls
 *
 * ```
 * use hepstyle::{attr, axes, layout, legend, range, scene};
 * # fn main() -> hepstyle::Result<()> {
 * let mut canvas = layout::ratio_canvas(&layout::CanvasOpts::default());
 *
 * let mut data = scene::Hist1D::new("data", "", scene::Binning::uniform(10, 0.0, 100.0));
 * data.set_bin_content(3, 42.0);
 * data.set_bin_error(3, 6.5);
 * attr::set_style(&mut data, &attr::StyleOpts::default().with_color("blue"))?;
 *
 * let max = range::y_extremum([&data], range::Bound::Max, &Default::default())?;
 * axes::format_upper_pad_axis(
 *     &mut data,
 *     &axes::UpperAxisOpts::ratio().with_y_range(0.0, 1.3 * max.value()),
 * );
 *
 * let leg = legend::format_legend(&legend::LegendOpts::named("right", true)?);
 * canvas.upper_mut().draw(leg);
 * # Ok(())
 * # }
 * ```
 *
 * Objects drawn onto a pad with [`scene::Pad::draw`] are owned by that pad and are
 * released together with the canvas.
 */
// hepstyle is released under the MIT License

use std::fmt;

pub mod attr;
pub mod axes;
pub mod color;
pub mod fit;
pub mod label;
pub mod layout;
pub mod legend;
pub mod overlay;
pub mod range;
pub mod scene;
pub mod style;

mod defaults;

pub use color::{Color, ColorSpec, get_color};
pub use style::Style;

/// Rexports of [`hepstyle_base::geom`] items
pub mod geom {
    pub use hepstyle_base::geom::*;
}

/// Errors raised by the helpers
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Not a hex literal, not in the color table, and not a builtin symbol
    UnknownColor(String),
    /// A `#` literal that is not a valid hex color
    InvalidHex(String),
    /// A legend position tag that is not one of the presets
    UnknownLegendPos(String),
    /// Range computation over an empty collection
    EmptyInput,
    /// Range computation where every bin was excluded by the threshold
    NoValidBins,
    /// Neither an explicit range nor a visible axis range was available
    UndefinedRange,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownColor(name) => write!(f, "Unknown color: {}", name),
            Error::InvalidHex(hex) => write!(f, "Invalid hex color: {}", hex),
            Error::UnknownLegendPos(tag) => write!(f, "Unknown legend position: {}", tag),
            Error::EmptyInput => write!(f, "No histogram to compute a range from"),
            Error::NoValidBins => write!(f, "No bin satisfies the range threshold"),
            Error::UndefinedRange => write!(f, "No explicit nor visible range available"),
        }
    }
}

impl std::error::Error for Error {}

/// Result type of the fallible helpers
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
pub(crate) mod tests {
    pub trait Near {
        fn near_abs(&self, other: &Self, tol: f64) -> bool;
    }

    impl Near for f64 {
        fn near_abs(&self, other: &Self, tol: f64) -> bool {
            (self - other).abs() <= tol
        }
    }

    impl Near for f32 {
        fn near_abs(&self, other: &Self, tol: f64) -> bool {
            (self - other).abs() as f64 <= tol
        }
    }

    macro_rules! assert_near {
        (abs, $a:expr, $b:expr, $tol:expr) => {
            assert!($a.near_abs(&$b, $tol), "Assertion failed: Values are not close enough.\nValue 1: {:?}\nValue 2: {:?}\nTolerance: {}", $a, $b, $tol);
        };
        (abs, $a:expr, $b:expr) => {
            assert_near!(abs, $a, $b, 1e-6);
        };
    }

    pub(crate) use assert_near;

    #[test]
    fn test_close_to() {
        let a = 1.0;
        let b = 1.0 + 1e-9;
        assert_near!(abs, a, b);
        assert!(!a.near_abs(&b, 1e-10));
    }
}
