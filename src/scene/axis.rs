/*!
 * Axis model.
 *
 * An axis carries text attributes (title, labels, ticks) and an optional user range.
 * Axes along a binned dimension also carry the [`Binning`]; their user range then snaps to bins.
 */
use std::ops::Range;

/// Bin edges of a binned dimension
#[derive(Debug, Clone, PartialEq)]
pub struct Binning {
    edges: Vec<f64>,
}

impl Binning {
    /// `n` bins of equal width between `low` and `up`.
    /// Panics if `n` is zero or `low >= up`.
    pub fn uniform(n: usize, low: f64, up: f64) -> Self {
        assert!(n > 0 && low < up, "invalid uniform binning");
        let width = (up - low) / n as f64;
        let edges = (0..=n)
            .map(|i| if i == n { up } else { low + i as f64 * width })
            .collect();
        Binning { edges }
    }

    /// Variable bins given by their edges.
    /// Panics if fewer than two edges are given or if they are not strictly increasing.
    pub fn variable(edges: Vec<f64>) -> Self {
        assert!(edges.len() >= 2, "at least two edges are needed");
        assert!(
            edges.windows(2).all(|w| w[0] < w[1]),
            "edges must be strictly increasing"
        );
        Binning { edges }
    }

    /// Number of bins
    pub fn n_bins(&self) -> usize {
        self.edges.len() - 1
    }

    /// All the edges, `n_bins() + 1` values
    pub fn edges(&self) -> &[f64] {
        &self.edges
    }

    /// Edges between two bins, excluding the outer ones
    pub fn inner_edges(&self) -> &[f64] {
        &self.edges[1..self.edges.len() - 1]
    }

    /// Lower edge of the first bin
    pub fn low(&self) -> f64 {
        self.edges[0]
    }

    /// Upper edge of the last bin
    pub fn up(&self) -> f64 {
        self.edges[self.edges.len() - 1]
    }

    /// Lower edge of a bin
    pub fn bin_low_edge(&self, bin: usize) -> f64 {
        self.edges[bin]
    }

    /// Upper edge of a bin
    pub fn bin_up_edge(&self, bin: usize) -> f64 {
        self.edges[bin + 1]
    }

    /// Center of a bin
    pub fn bin_center(&self, bin: usize) -> f64 {
        0.5 * (self.edges[bin] + self.edges[bin + 1])
    }

    /// The bin containing `x`, if `x` is inside `[low, up)`
    pub fn find_bin(&self, x: f64) -> Option<usize> {
        if !(x >= self.low() && x < self.up()) {
            return None;
        }
        // partition_point returns the number of edges <= x, at least 1 here
        Some(self.edges.partition_point(|e| *e <= x) - 1)
    }

    /// The bin containing `x`, clamped to the first and last bins
    fn find_bin_clamped(&self, x: f64) -> usize {
        if x < self.low() {
            0
        } else {
            self.find_bin(x).unwrap_or(self.n_bins() - 1)
        }
    }
}

/// An axis of a drawable object
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    binning: Option<Binning>,
    title: String,
    center_title: bool,
    title_offset: f32,
    title_size: f32,
    label_size: f32,
    label_offset: f32,
    tick_length: f32,
    ndivisions: i32,
    range: Option<(f64, f64)>,
}

impl Default for Axis {
    fn default() -> Self {
        Axis {
            binning: None,
            title: String::new(),
            center_title: false,
            title_offset: 1.0,
            title_size: 0.035,
            label_size: 0.035,
            label_offset: 0.005,
            tick_length: 0.03,
            ndivisions: 510,
            range: None,
        }
    }
}

impl Axis {
    /// An axis without binning, for value dimensions
    pub fn new() -> Self {
        Self::default()
    }

    /// An axis along a binned dimension
    pub fn binned(binning: Binning) -> Self {
        Axis {
            binning: Some(binning),
            ..Self::default()
        }
    }

    /// The binning of a histogram axis, `None` for a free axis
    pub fn binning(&self) -> Option<&Binning> {
        self.binning.as_ref()
    }

    /// Axis title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Set the axis title
    pub fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    /// Whether the title is centered along the axis
    pub fn is_title_centered(&self) -> bool {
        self.center_title
    }

    /// Center the title along the axis
    pub fn center_title(&mut self, center: bool) {
        self.center_title = center;
    }

    /// Title offset from the axis
    pub fn title_offset(&self) -> f32 {
        self.title_offset
    }

    /// Set the title offset
    pub fn set_title_offset(&mut self, offset: f32) {
        self.title_offset = offset;
    }

    /// Title size
    pub fn title_size(&self) -> f32 {
        self.title_size
    }

    /// Set the title size
    pub fn set_title_size(&mut self, size: f32) {
        self.title_size = size;
    }

    /// Tick label size
    pub fn label_size(&self) -> f32 {
        self.label_size
    }

    /// Set the tick label size
    pub fn set_label_size(&mut self, size: f32) {
        self.label_size = size;
    }

    /// Tick label offset from the axis
    pub fn label_offset(&self) -> f32 {
        self.label_offset
    }

    /// Set the tick label offset
    pub fn set_label_offset(&mut self, offset: f32) {
        self.label_offset = offset;
    }

    /// Tick length
    pub fn tick_length(&self) -> f32 {
        self.tick_length
    }

    /// Set the tick length
    pub fn set_tick_length(&mut self, length: f32) {
        self.tick_length = length;
    }

    /// Number of divisions, encoded as `primary + 100 * secondary + 10000 * tertiary`
    pub fn ndivisions(&self) -> i32 {
        self.ndivisions
    }

    /// Set the divisions code
    pub fn set_ndivisions(&mut self, ndivisions: i32) {
        self.ndivisions = ndivisions;
    }

    /// The user range, as set by [`Axis::set_range_user`]
    pub fn range_user(&self) -> Option<(f64, f64)> {
        self.range
    }

    /// Restrict the displayed range. On a binned axis the range snaps to whole bins.
    pub fn set_range_user(&mut self, min: f64, max: f64) {
        self.range = Some((min, max));
    }

    /// Drop the user range
    pub fn unzoom(&mut self) {
        self.range = None;
    }

    /// Indices of the bins inside the user range, all bins without user range.
    /// Empty for an axis without binning.
    pub fn visible_bins(&self) -> Range<usize> {
        let Some(binning) = &self.binning else {
            return 0..0;
        };
        let Some((min, max)) = self.range else {
            return 0..binning.n_bins();
        };
        let first = binning.find_bin_clamped(min);
        let mut last = binning.find_bin_clamped(max);
        // an upper bound falling exactly on a low edge excludes that bin
        if last > first && binning.bin_low_edge(last) == max {
            last -= 1;
        }
        if last < first {
            return first..first;
        }
        first..last + 1
    }

    /// The visible range: bin edges of the visible bins on a binned axis,
    /// the user range otherwise.
    pub fn visible_range(&self) -> Option<(f64, f64)> {
        match &self.binning {
            Some(binning) => {
                let bins = self.visible_bins();
                if bins.is_empty() {
                    return None;
                }
                Some((
                    binning.bin_low_edge(bins.start),
                    binning.bin_up_edge(bins.end - 1),
                ))
            }
            None => self.range,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_bin() {
        let b = Binning::uniform(10, 0.0, 100.0);
        assert_eq!(b.find_bin(0.0), Some(0));
        assert_eq!(b.find_bin(9.99), Some(0));
        assert_eq!(b.find_bin(10.0), Some(1));
        assert_eq!(b.find_bin(99.9), Some(9));
        assert_eq!(b.find_bin(100.0), None);
        assert_eq!(b.find_bin(-1.0), None);
        assert_eq!(b.find_bin(f64::NAN), None);
    }

    #[test]
    fn variable_binning() {
        let b = Binning::variable(vec![0.0, 1.0, 5.0, 10.0]);
        assert_eq!(b.n_bins(), 3);
        assert_eq!(b.find_bin(4.0), Some(1));
        assert_eq!(b.inner_edges(), &[1.0, 5.0]);
    }

    #[test]
    fn range_snaps_to_bins() {
        let mut ax = Axis::binned(Binning::uniform(10, 0.0, 100.0));
        assert_eq!(ax.visible_bins(), 0..10);
        assert_eq!(ax.visible_range(), Some((0.0, 100.0)));

        ax.set_range_user(15.0, 40.0);
        assert_eq!(ax.visible_bins(), 1..4);
        assert_eq!(ax.visible_range(), Some((10.0, 40.0)));

        ax.set_range_user(-50.0, 500.0);
        assert_eq!(ax.visible_bins(), 0..10);

        ax.unzoom();
        assert_eq!(ax.range_user(), None);
    }

    #[test]
    fn unbinned_visible_range() {
        let mut ax = Axis::new();
        assert_eq!(ax.visible_range(), None);
        ax.set_range_user(0.3, 1.7);
        assert_eq!(ax.visible_range(), Some((0.3, 1.7)));
        assert!(ax.visible_bins().is_empty());
    }
}
