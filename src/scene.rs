/*!
 * # Retained scene model
 *
 * Minimal stand-ins for the drawable objects of a plotting toolkit.
 * They hold attributes and data, and know just enough to answer the queries the helpers need
 * (bin lookup, visible ranges, extrema). Nothing here renders.
 *
 * The capabilities the helpers rely on are expressed as traits:
 *  - [`Frame`]: an object with axes, and a target for its displayed value range
 *  - [`Styleable`]: an object with line, marker and fill attributes
 *  - [`BinnedData`]: an object exposing per-bin contents and errors
 */
mod att;
mod axis;
mod func;
mod graph;
mod hist;
mod pad;
mod primitive;

pub use att::{FillAtt, FillStyle, LineAtt, LineStyle, MarkerAtt, MarkerStyle};
pub use axis::{Axis, Binning};
pub use func::{Func, FuncParam};
pub use graph::{Graph, Stack};
pub use hist::{Hist1D, Hist2D};
pub use pad::{Canvas, Pad};
pub use primitive::{Latex, Legend, LegendEntry, Line, PaveText, Primitive};

/// Where the displayed value range of a [`Frame`] is set
#[derive(Debug)]
pub enum RangeTarget<'a> {
    /// The range is a user range of a plain axis
    Axis(&'a mut Axis),
    /// The object carries its own displayed minimum and maximum (stacks, curves, 2D maps)
    Object(&'a mut dyn RangeSettable),
}

/// Objects that carry their own displayed minimum and maximum
pub trait RangeSettable: std::fmt::Debug {
    /// Set the displayed minimum
    fn set_minimum(&mut self, min: f64);
    /// Set the displayed maximum
    fn set_maximum(&mut self, max: f64);
    /// The displayed minimum, if set
    fn minimum(&self) -> Option<f64>;
    /// The displayed maximum, if set
    fn maximum(&self) -> Option<f64>;
}

/// An object drawn with axes
pub trait Frame {
    /// The X axis, if any
    fn x_axis(&self) -> Option<&Axis>;
    /// The X axis, if any
    fn x_axis_mut(&mut self) -> Option<&mut Axis>;
    /// The Y axis, if any
    fn y_axis_mut(&mut self) -> Option<&mut Axis>;
    /// The Z axis, only for 2D objects
    fn z_axis_mut(&mut self) -> Option<&mut Axis> {
        None
    }
    /// Target of the displayed value range: Y for 1D objects, Z for 2D maps
    fn range_target(&mut self) -> RangeTarget<'_>;

    /// The X range currently visible
    fn visible_x_range(&self) -> Option<(f64, f64)> {
        self.x_axis().and_then(Axis::visible_range)
    }
}

/// An object with line, marker and fill attributes
pub trait Styleable: Frame {
    /// Set the object title
    fn set_title(&mut self, title: &str);
    /// Line attributes
    fn line_mut(&mut self) -> &mut LineAtt;
    /// Marker attributes
    fn marker_mut(&mut self) -> &mut MarkerAtt;
    /// Fill attributes
    fn fill_mut(&mut self) -> &mut FillAtt;
    /// Show or hide the statistics box. No-op for objects without one.
    fn set_stats(&mut self, _show: bool) {}
}

/// Content and error of a bin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bin {
    /// Bin content
    pub content: f64,
    /// Bin error
    pub error: f64,
}

/// Objects with binned contents
pub trait BinnedData {
    /// The bins inside the visible range
    fn visible_bins(&self) -> Vec<Bin>;

    /// A displayed minimum forced on the object
    fn minimum_override(&self) -> Option<f64> {
        None
    }

    /// A displayed maximum forced on the object
    fn maximum_override(&self) -> Option<f64> {
        None
    }

    /// Largest visible content, strictly below `below` when given.
    ///
    /// Without a limit, a maximum forced on the object wins over the contents.
    fn content_maximum(&self, below: Option<f64>) -> Option<f64> {
        if below.is_none() {
            if let Some(max) = self.maximum_override() {
                return Some(max);
            }
        }
        self.visible_bins()
            .iter()
            .map(|b| b.content)
            .filter(|c| below.is_none_or(|lim| *c < lim))
            .reduce(f64::max)
    }

    /// Smallest visible content, strictly above `above` when given.
    ///
    /// Without a limit, a minimum forced on the object wins over the contents.
    fn content_minimum(&self, above: Option<f64>) -> Option<f64> {
        if above.is_none() {
            if let Some(min) = self.minimum_override() {
                return Some(min);
            }
        }
        self.visible_bins()
            .iter()
            .map(|b| b.content)
            .filter(|c| above.is_none_or(|lim| *c > lim))
            .reduce(f64::min)
    }
}

impl<T: BinnedData + ?Sized> BinnedData for &T {
    fn visible_bins(&self) -> Vec<Bin> {
        (**self).visible_bins()
    }

    fn minimum_override(&self) -> Option<f64> {
        (**self).minimum_override()
    }

    fn maximum_override(&self) -> Option<f64> {
        (**self).maximum_override()
    }
}

