//! Histograms in one and two dimensions

use super::{
    Axis, Bin, BinnedData, Binning, FillAtt, Frame, LineAtt, MarkerAtt, RangeSettable,
    RangeTarget, Styleable,
};

/// A one-dimensional histogram.
///
/// Bins are indexed from 0. Entries outside the binning are dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct Hist1D {
    name: String,
    title: String,
    x_axis: Axis,
    y_axis: Axis,
    contents: Vec<f64>,
    sumw2: Vec<f64>,
    stats: bool,
    minimum: Option<f64>,
    maximum: Option<f64>,
    line: LineAtt,
    marker: MarkerAtt,
    fill: FillAtt,
}

impl Hist1D {
    /// An empty histogram. The statistics box is shown by default.
    pub fn new(name: &str, title: &str, binning: Binning) -> Self {
        let n = binning.n_bins();
        Hist1D {
            name: name.to_string(),
            title: title.to_string(),
            x_axis: Axis::binned(binning),
            y_axis: Axis::new(),
            contents: vec![0.0; n],
            sumw2: vec![0.0; n],
            stats: true,
            minimum: None,
            maximum: None,
            line: LineAtt::default(),
            marker: MarkerAtt::default(),
            fill: FillAtt::default(),
        }
    }

    /// A histogram with the given contents, and errors `sqrt(content)`.
    /// Bins past the end of `contents` are left empty.
    /// Panics if `contents` is longer than the number of bins.
    pub fn from_contents(name: &str, binning: Binning, contents: &[f64]) -> Self {
        let mut h = Hist1D::new(name, "", binning);
        assert!(
            contents.len() <= h.n_bins(),
            "{} contents for {} bins",
            contents.len(),
            h.n_bins()
        );
        for (bin, c) in contents.iter().enumerate() {
            h.contents[bin] = *c;
            h.sumw2[bin] = c.abs();
        }
        h
    }

    /// Histogram name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Histogram title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Number of bins
    pub fn n_bins(&self) -> usize {
        self.contents.len()
    }

    /// The binned X axis
    pub fn x_axis(&self) -> &Axis {
        &self.x_axis
    }

    /// The Y axis
    pub fn y_axis(&self) -> &Axis {
        &self.y_axis
    }

    /// Binning of the X axis
    pub fn binning(&self) -> &Binning {
        // the X axis of a histogram is always binned
        self.x_axis.binning().expect("histogram X axis is binned")
    }

    /// Add `weight` to the bin containing `x`.
    /// Returns the bin, or `None` if `x` is outside the binning.
    pub fn fill(&mut self, x: f64, weight: f64) -> Option<usize> {
        let bin = self.binning().find_bin(x)?;
        self.contents[bin] += weight;
        self.sumw2[bin] += weight * weight;
        Some(bin)
    }

    /// Content of `bin`
    pub fn bin_content(&self, bin: usize) -> f64 {
        self.contents[bin]
    }

    /// Set the content of `bin`
    pub fn set_bin_content(&mut self, bin: usize, content: f64) {
        self.contents[bin] = content;
    }

    /// Error of `bin`
    pub fn bin_error(&self, bin: usize) -> f64 {
        self.sumw2[bin].sqrt()
    }

    /// Set the error of `bin`
    pub fn set_bin_error(&mut self, bin: usize, error: f64) {
        self.sumw2[bin] = error * error;
    }

    /// Sum of all bin contents
    pub fn integral(&self) -> f64 {
        self.contents.iter().sum()
    }

    /// Whether the statistics box is shown
    pub fn stats(&self) -> bool {
        self.stats
    }

    /// Line attributes
    pub fn line(&self) -> &LineAtt {
        &self.line
    }

    /// Marker attributes
    pub fn marker(&self) -> &MarkerAtt {
        &self.marker
    }

    /// Fill attributes
    pub fn fill_att(&self) -> &FillAtt {
        &self.fill
    }

    /// Bin-by-bin ratio to `den`, errors propagated from the numerator only.
    /// Bins where `den` is zero are set to zero.
    /// Panics if the two histograms have a different number of bins.
    pub fn ratio_to(&self, den: &Hist1D, name: &str) -> Hist1D {
        assert_eq!(self.n_bins(), den.n_bins(), "incompatible binnings");
        let mut ratio = Hist1D::new(name, "", self.binning().clone());
        for bin in 0..self.n_bins() {
            let d = den.bin_content(bin);
            if d != 0.0 {
                ratio.set_bin_content(bin, self.bin_content(bin) / d);
                ratio.set_bin_error(bin, self.bin_error(bin) / d.abs());
            }
        }
        ratio
    }
}

impl RangeSettable for Hist1D {
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

impl Frame for Hist1D {
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
        RangeTarget::Axis(&mut self.y_axis)
    }
}

impl Styleable for Hist1D {
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

    fn set_stats(&mut self, show: bool) {
        self.stats = show;
    }
}

impl BinnedData for Hist1D {
    fn visible_bins(&self) -> Vec<Bin> {
        self.x_axis
            .visible_bins()
            .map(|bin| Bin {
                content: self.bin_content(bin),
                error: self.bin_error(bin),
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

/// A two-dimensional histogram.
///
/// Bins are indexed by `(ix, iy)` from `(0, 0)`. The displayed value range (Z) is
/// carried by the histogram itself.
#[derive(Debug, Clone, PartialEq)]
pub struct Hist2D {
    name: String,
    title: String,
    x_axis: Axis,
    y_axis: Axis,
    z_axis: Axis,
    contents: Vec<f64>,
    sumw2: Vec<f64>,
    stats: bool,
    minimum: Option<f64>,
    maximum: Option<f64>,
    line: LineAtt,
    marker: MarkerAtt,
    fill: FillAtt,
}

impl Hist2D {
    /// An empty histogram. The statistics box is shown by default.
    pub fn new(name: &str, title: &str, x: Binning, y: Binning) -> Self {
        let n = x.n_bins() * y.n_bins();
        Hist2D {
            name: name.to_string(),
            title: title.to_string(),
            x_axis: Axis::binned(x),
            y_axis: Axis::binned(y),
            z_axis: Axis::new(),
            contents: vec![0.0; n],
            sumw2: vec![0.0; n],
            stats: true,
            minimum: None,
            maximum: None,
            line: LineAtt::default(),
            marker: MarkerAtt::default(),
            fill: FillAtt::default(),
        }
    }

    /// Histogram name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Histogram title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Binning of the X axis
    pub fn x_binning(&self) -> &Binning {
        self.x_axis.binning().expect("histogram X axis is binned")
    }

    /// Binning of the Y axis
    pub fn y_binning(&self) -> &Binning {
        self.y_axis.binning().expect("histogram Y axis is binned")
    }

    /// The binned X axis
    pub fn x_axis(&self) -> &Axis {
        &self.x_axis
    }

    /// The binned Y axis
    pub fn y_axis(&self) -> &Axis {
        &self.y_axis
    }

    /// The Z axis, holding the content scale
    pub fn z_axis(&self) -> &Axis {
        &self.z_axis
    }

    fn index(&self, ix: usize, iy: usize) -> usize {
        iy * self.x_binning().n_bins() + ix
    }

    /// Add `weight` to the bin containing `(x, y)`.
    /// Returns the bin, or `None` if the point is outside the binning.
    pub fn fill(&mut self, x: f64, y: f64, weight: f64) -> Option<(usize, usize)> {
        let ix = self.x_binning().find_bin(x)?;
        let iy = self.y_binning().find_bin(y)?;
        let idx = self.index(ix, iy);
        self.contents[idx] += weight;
        self.sumw2[idx] += weight * weight;
        Some((ix, iy))
    }

    /// Content of bin `(ix, iy)`
    pub fn bin_content(&self, ix: usize, iy: usize) -> f64 {
        self.contents[self.index(ix, iy)]
    }

    /// Set the content of bin `(ix, iy)`
    pub fn set_bin_content(&mut self, ix: usize, iy: usize, content: f64) {
        let idx = self.index(ix, iy);
        self.contents[idx] = content;
    }

    /// Error of bin `(ix, iy)`
    pub fn bin_error(&self, ix: usize, iy: usize) -> f64 {
        self.sumw2[self.index(ix, iy)].sqrt()
    }

    /// Whether the statistics box is shown
    pub fn stats(&self) -> bool {
        self.stats
    }
}

impl RangeSettable for Hist2D {
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

impl Frame for Hist2D {
    fn x_axis(&self) -> Option<&Axis> {
        Some(&self.x_axis)
    }

    fn x_axis_mut(&mut self) -> Option<&mut Axis> {
        Some(&mut self.x_axis)
    }

    fn y_axis_mut(&mut self) -> Option<&mut Axis> {
        Some(&mut self.y_axis)
    }

    fn z_axis_mut(&mut self) -> Option<&mut Axis> {
        Some(&mut self.z_axis)
    }

    fn range_target(&mut self) -> RangeTarget<'_> {
        RangeTarget::Object(self)
    }
}

impl Styleable for Hist2D {
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

    fn set_stats(&mut self, show: bool) {
        self.stats = show;
    }
}

impl BinnedData for Hist2D {
    fn visible_bins(&self) -> Vec<Bin> {
        let xs = self.x_axis.visible_bins();
        self.y_axis
            .visible_bins()
            .flat_map(|iy| xs.clone().map(move |ix| (ix, iy)))
            .map(|(ix, iy)| Bin {
                content: self.bin_content(ix, iy),
                error: self.bin_error(ix, iy),
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

    #[test]
    fn fill_and_errors() {
        let mut h = Hist1D::new("h", "", Binning::uniform(4, 0.0, 4.0));
        assert_eq!(h.fill(1.5, 2.0), Some(1));
        assert_eq!(h.fill(1.2, 2.0), Some(1));
        assert_eq!(h.fill(7.0, 1.0), None);
        assert_eq!(h.bin_content(1), 4.0);
        assert_eq!(h.bin_error(1), 8.0_f64.sqrt());
        assert_eq!(h.integral(), 4.0);
    }

    #[test]
    fn extrema_follow_visible_range() {
        let mut h = Hist1D::from_contents("h", Binning::uniform(4, 0.0, 4.0), &[1.0, 9.0, 3.0, 2.0]);
        assert_eq!(h.content_maximum(None), Some(9.0));
        assert_eq!(h.content_maximum(Some(5.0)), Some(3.0));
        assert_eq!(h.content_minimum(Some(1.5)), Some(2.0));

        h.x_axis_mut().unwrap().set_range_user(2.0, 4.0);
        assert_eq!(h.content_maximum(None), Some(3.0));
        assert_eq!(h.content_minimum(None), Some(2.0));
    }

    #[test]
    fn short_contents_leave_empty_bins() {
        let h = Hist1D::from_contents("h", Binning::uniform(3, 0.0, 3.0), &[4.0]);
        assert_eq!(h.bin_content(0), 4.0);
        assert_eq!(h.bin_error(0), 2.0);
        assert_eq!(h.bin_content(2), 0.0);
    }

    #[test]
    #[should_panic(expected = "3 contents for 2 bins")]
    fn too_many_contents() {
        Hist1D::from_contents("h", Binning::uniform(2, 0.0, 2.0), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn forced_extrema_win_without_limit() {
        let mut h = Hist1D::from_contents("h", Binning::uniform(2, 0.0, 2.0), &[1.0, 2.0]);
        h.set_maximum(10.0);
        assert_eq!(h.content_maximum(None), Some(10.0));
        assert_eq!(h.content_maximum(Some(5.0)), Some(2.0));
    }

    #[test]
    fn ratio() {
        let num = Hist1D::from_contents("n", Binning::uniform(3, 0.0, 3.0), &[4.0, 0.0, 9.0]);
        let den = Hist1D::from_contents("d", Binning::uniform(3, 0.0, 3.0), &[2.0, 5.0, 0.0]);
        let r = num.ratio_to(&den, "r");
        assert_eq!(r.bin_content(0), 2.0);
        assert_eq!(r.bin_error(0), 1.0);
        assert_eq!(r.bin_content(1), 0.0);
        assert_eq!(r.bin_content(2), 0.0);
    }

    #[test]
    fn hist2d_bins() {
        let mut h = Hist2D::new("h2", "", Binning::uniform(2, 0.0, 2.0), Binning::uniform(3, 0.0, 3.0));
        assert_eq!(h.fill(1.5, 2.5, 3.0), Some((1, 2)));
        assert_eq!(h.bin_content(1, 2), 3.0);
        assert_eq!(h.visible_bins().len(), 6);
        assert_eq!(h.content_maximum(None), Some(3.0));
    }
}
