//! Curves and stacked histograms: objects that carry their own displayed range

use super::{
    Axis, Bin, BinnedData, FillAtt, Frame, Hist1D, LineAtt, MarkerAtt, RangeSettable,
    RangeTarget, Styleable,
};

/// A curve through points with symmetric Y errors
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Graph {
    name: String,
    title: String,
    x: Vec<f64>,
    y: Vec<f64>,
    ey: Vec<f64>,
    x_axis: Axis,
    y_axis: Axis,
    minimum: Option<f64>,
    maximum: Option<f64>,
    line: LineAtt,
    marker: MarkerAtt,
    fill: FillAtt,
}

impl Graph {
    /// An empty graph
    pub fn new(name: &str) -> Self {
        Graph {
            name: name.to_string(),
            ..Default::default()
        }
    }

    /// Graph name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Graph title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Append a point
    pub fn push(&mut self, x: f64, y: f64, ey: f64) {
        self.x.push(x);
        self.y.push(y);
        self.ey.push(ey);
    }

    /// Number of points
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Whether the graph has no point
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Coordinates of point `i`
    pub fn point(&self, i: usize) -> (f64, f64) {
        (self.x[i], self.y[i])
    }

    /// Line attributes
    pub fn line(&self) -> &LineAtt {
        &self.line
    }

    /// Marker attributes
    pub fn marker(&self) -> &MarkerAtt {
        &self.marker
    }

    fn in_x_range(&self, x: f64) -> bool {
        match self.x_axis.range_user() {
            Some((min, max)) => x >= min && x <= max,
            None => true,
        }
    }
}

impl RangeSettable for Graph {
    fn set_minimum(&mut self, min: f64) {
        self.minimum = Some(min);
    }

    fn set_maximum(&mut self, max: f64) {
        self.maximum = Some(max);
    }

    fn minimum(&self) -> Option<f64> {
        self.minimum
    }

    fn maximum(&self) -> Option<f64> {
        self.maximum
    }
}

impl Frame for Graph {
    fn x_axis(&self) -> Option<&Axis> {
        Some(&self.x_axis)
    }

    fn x_axis_mut(&mut self) -> Option<&mut Axis> {
        Some(&mut self.x_axis)
    }

    fn y_axis_mut(&mut self) -> Option<&mut Axis> {
        Some(&mut self.y_axis)
    }

    fn range_target(&mut self) -> RangeTarget<'_> {
        RangeTarget::Object(self)
    }

    /// The user range of the X axis, or the extent of the points
    fn visible_x_range(&self) -> Option<(f64, f64)> {
        self.x_axis.range_user().or_else(|| {
            let min = self.x.iter().copied().reduce(f64::min)?;
            let max = self.x.iter().copied().reduce(f64::max)?;
            Some((min, max))
        })
    }
}

impl Styleable for Graph {
    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn line_mut(&mut self) -> &mut LineAtt {
        &mut self.line
    }

    fn marker_mut(&mut self) -> &mut MarkerAtt {
        &mut self.marker
    }

    fn fill_mut(&mut self) -> &mut FillAtt {
        &mut self.fill
    }
}

impl BinnedData for Graph {
    fn visible_bins(&self) -> Vec<Bin> {
        (0..self.len())
            .filter(|&i| self.in_x_range(self.x[i]))
            .map(|i| Bin {
                content: self.y[i],
                error: self.ey[i],
            })
            .collect()
    }

    fn minimum_override(&self) -> Option<f64> {
        self.minimum
    }

    fn maximum_override(&self) -> Option<f64> {
        self.maximum
    }
}

/// Histograms stacked on top of each other.
///
/// The frame axes follow the binning of the first histogram added.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Stack {
    name: String,
    hists: Vec<Hist1D>,
    x_axis: Axis,
    y_axis: Axis,
    minimum: Option<f64>,
    maximum: Option<f64>,
}

impl Stack {
    /// An empty stack
    pub fn new(name: &str) -> Self {
        Stack {
            name: name.to_string(),
            ..Default::default()
        }
    }

    /// Stack name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Stack a histogram on top of the previous ones.
    /// Panics if its binning differs from the histograms already stacked.
    pub fn add(&mut self, hist: Hist1D) {
        match self.hists.first() {
            Some(first) => assert_eq!(
                first.binning(),
                hist.binning(),
                "stacked histograms must share their binning"
            ),
            None => self.x_axis = Axis::binned(hist.binning().clone()),
        }
        self.hists.push(hist);
    }

    /// The stacked histograms, bottom first
    pub fn hists(&self) -> &[Hist1D] {
        &self.hists
    }

    /// The stacked histograms, bottom first
    pub fn hists_mut(&mut self) -> &mut [Hist1D] {
        &mut self.hists
    }

    /// Sum of the stacked histograms, errors added in quadrature
    pub fn sum(&self, name: &str) -> Option<Hist1D> {
        let first = self.hists.first()?;
        let mut sum = Hist1D::new(name, "", first.binning().clone());
        for bin in 0..first.n_bins() {
            let content: f64 = self.hists.iter().map(|h| h.bin_content(bin)).sum();
            let err2: f64 = self.hists.iter().map(|h| h.bin_error(bin).powi(2)).sum();
            sum.set_bin_content(bin, content);
            sum.set_bin_error(bin, err2.sqrt());
        }
        Some(sum)
    }
}

impl RangeSettable for Stack {
    fn set_minimum(&mut self, min: f64) {
        self.minimum = Some(min);
    }

    fn set_maximum(&mut self, max: f64) {
        self.maximum = Some(max);
    }

    fn minimum(&self) -> Option<f64> {
        self.minimum
    }

    fn maximum(&self) -> Option<f64> {
        self.maximum
    }
}

impl Frame for Stack {
    fn x_axis(&self) -> Option<&Axis> {
        Some(&self.x_axis)
    }

    fn x_axis_mut(&mut self) -> Option<&mut Axis> {
        Some(&mut self.x_axis)
    }

    fn y_axis_mut(&mut self) -> Option<&mut Axis> {
        Some(&mut self.y_axis)
    }

    fn range_target(&mut self) -> RangeTarget<'_> {
        RangeTarget::Object(self)
    }
}

impl BinnedData for Stack {
    /// Bins of the stacked total
    fn visible_bins(&self) -> Vec<Bin> {
        let Some(first) = self.hists.first() else {
            return Vec::new();
        };
        self.x_axis
            .visible_bins()
            .filter(|&bin| bin < first.n_bins())
            .map(|bin| Bin {
                content: self.hists.iter().map(|h| h.bin_content(bin)).sum(),
                error: self
                    .hists
                    .iter()
                    .map(|h| h.bin_error(bin).powi(2))
                    .sum::<f64>()
                    .sqrt(),
            })
            .collect()
    }

    fn minimum_override(&self) -> Option<f64> {
        self.minimum
    }

    fn maximum_override(&self) -> Option<f64> {
        self.maximum
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Binning;

    #[test]
    fn stack_total() {
        let b = Binning::uniform(2, 0.0, 2.0);
        let mut s = Stack::new("s");
        s.add(Hist1D::from_contents("a", b.clone(), &[1.0, 4.0]));
        s.add(Hist1D::from_contents("b", b, &[3.0, 5.0]));
        assert_eq!(s.content_maximum(None), Some(9.0));
        let sum = s.sum("tot").unwrap();
        assert_eq!(sum.bin_content(0), 4.0);
        assert_eq!(sum.bin_error(0), 2.0);
    }

    #[test]
    fn stack_range_goes_to_object() {
        let mut s = Stack::new("s");
        match s.range_target() {
            RangeTarget::Object(obj) => obj.set_maximum(3.0),
            RangeTarget::Axis(_) => panic!("stack range must be set on the stack"),
        }
        assert_eq!(RangeSettable::maximum(&s), Some(3.0));
    }

    #[test]
    fn graph_x_extent() {
        let mut g = Graph::new("g");
        g.push(2.0, 1.0, 0.1);
        g.push(-1.0, 3.0, 0.2);
        assert_eq!(g.visible_x_range(), Some((-1.0, 2.0)));
        g.x_axis_mut().unwrap().set_range_user(0.0, 5.0);
        assert_eq!(g.visible_x_range(), Some((0.0, 5.0)));
        assert_eq!(g.visible_bins().len(), 1);
    }
}
