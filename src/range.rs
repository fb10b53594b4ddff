//! Displayed value range over a collection of histograms.
//!
//! The functions accept any iterator of references to [`BinnedData`]:
//! a single histogram (`[&h]`), a slice (`&hists`), or the values of a map (`map.values()`).
use crate::scene::BinnedData;
use crate::{Error, Result};

/// Which end of the range to compute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// Lower end
    Min,
    /// Upper end
    Max,
}

/// Options of [`y_extremum`] and [`y_range`]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RangeOpts {
    /// Values beyond the threshold are ignored:
    /// a maximum is searched strictly below it, a minimum strictly above it.
    /// An infinite threshold is the same as no threshold.
    pub threshold: Option<f64>,
    /// Scan `content + error` for a maximum and `content - error` for a minimum
    pub with_errors: bool,
}

impl RangeOpts {
    /// Set the threshold and return self for chaining
    pub fn with_threshold(self, threshold: f64) -> Self {
        Self {
            threshold: Some(threshold),
            ..self
        }
    }

    /// Include the bin errors and return self for chaining
    pub fn with_errors(self, with_errors: bool) -> Self {
        Self {
            with_errors,
            ..self
        }
    }
}

/// Result of a range computation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Extremum {
    /// A single value
    Value(f64),
    /// The two smallest values, in ascending order.
    /// Returned for a minimum including errors without threshold.
    LowestTwo(f64, f64),
}

impl Extremum {
    /// The extreme value
    pub fn value(&self) -> f64 {
        match self {
            Extremum::Value(v) => *v,
            Extremum::LowestTwo(lowest, _) => *lowest,
        }
    }
}

/// Minimum or maximum displayed value over `hists`.
///
/// Only the bins in the visible X range are considered.
/// Without errors nor threshold, a minimum or maximum forced on an object wins over its contents.
///
/// Fails with [`Error::EmptyInput`] if `hists` is empty,
/// and with [`Error::NoValidBins`] if no bin satisfies the threshold.
pub fn y_extremum<'a, H, I>(hists: I, bound: Bound, opts: &RangeOpts) -> Result<Extremum>
where
    H: BinnedData + ?Sized + 'a,
    I: IntoIterator<Item = &'a H>,
{
    let hists: Vec<&H> = hists.into_iter().collect();
    extremum(&hists, bound, opts)
}

/// Both ends of the displayed value range over `hists`. See [`y_extremum`].
pub fn y_range<'a, H, I>(hists: I, opts: &RangeOpts) -> Result<(Extremum, Extremum)>
where
    H: BinnedData + ?Sized + 'a,
    I: IntoIterator<Item = &'a H>,
{
    let hists: Vec<&H> = hists.into_iter().collect();
    let min = extremum(&hists, Bound::Min, opts)?;
    let max = extremum(&hists, Bound::Max, opts)?;
    Ok((min, max))
}

fn extremum<H: BinnedData + ?Sized>(hists: &[&H], bound: Bound, opts: &RangeOpts) -> Result<Extremum> {
    if hists.is_empty() {
        return Err(Error::EmptyInput);
    }
    let threshold = opts.threshold.filter(|t| t.is_finite());

    if !opts.with_errors {
        let values = hists.iter().filter_map(|h| match bound {
            Bound::Max => h.content_maximum(threshold),
            Bound::Min => h.content_minimum(threshold),
        });
        let value = match bound {
            Bound::Max => values.reduce(f64::max),
            Bound::Min => values.reduce(f64::min),
        };
        return value.map(Extremum::Value).ok_or(Error::NoValidBins);
    }

    let mut values: Vec<f64> = hists
        .iter()
        .flat_map(|h| h.visible_bins())
        .map(|b| match bound {
            Bound::Max => b.content + b.error,
            Bound::Min => b.content - b.error,
        })
        .filter(|v| match (bound, threshold) {
            (_, None) => true,
            (Bound::Max, Some(lim)) => *v < lim,
            (Bound::Min, Some(lim)) => *v > lim,
        })
        .collect();
    if values.is_empty() {
        return Err(Error::NoValidBins);
    }

    match (bound, threshold) {
        (Bound::Max, _) => Ok(Extremum::Value(
            values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        )),
        (Bound::Min, Some(_)) => Ok(Extremum::Value(
            values.iter().copied().fold(f64::INFINITY, f64::min),
        )),
        (Bound::Min, None) => {
            values.sort_by(f64::total_cmp);
            let lowest = values[0];
            let second = values.get(1).copied().unwrap_or(lowest);
            Ok(Extremum::LowestTwo(lowest, second))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::scene::{Binning, Frame, Hist1D, RangeSettable};

    fn hist(name: &str, contents: &[f64]) -> Hist1D {
        Hist1D::from_contents(name, Binning::uniform(contents.len(), 0.0, 1.0), contents)
    }

    fn three() -> Vec<Hist1D> {
        vec![
            hist("a", &[1.0, 3.0, 2.0]),
            hist("b", &[7.0, 4.0, 2.0]),
            hist("c", &[5.0, 0.5, 1.0]),
        ]
    }

    #[test]
    fn maximum_over_collection() {
        let hists = three();
        let max = y_extremum(&hists, Bound::Max, &RangeOpts::default()).unwrap();
        assert_eq!(max, Extremum::Value(7.0));
        let min = y_extremum(&hists, Bound::Min, &RangeOpts::default()).unwrap();
        assert_eq!(min, Extremum::Value(0.5));
    }

    #[test]
    fn threshold_excludes_values() {
        let hists = three();
        let opts = RangeOpts::default().with_threshold(6.0);
        let max = y_extremum(&hists, Bound::Max, &opts).unwrap();
        assert_eq!(max.value(), 5.0);

        let opts = RangeOpts::default().with_threshold(1.0);
        let min = y_extremum(&hists, Bound::Min, &opts).unwrap();
        assert_eq!(min.value(), 2.0);
    }

    #[test]
    fn empty_input() {
        let hists: Vec<Hist1D> = Vec::new();
        assert_eq!(
            y_extremum(&hists, Bound::Max, &RangeOpts::default()),
            Err(Error::EmptyInput)
        );
    }

    #[test]
    fn nothing_below_threshold() {
        let hists = three();
        let opts = RangeOpts::default().with_threshold(0.1).with_errors(true);
        assert_eq!(
            y_extremum(&hists, Bound::Max, &opts),
            Err(Error::NoValidBins)
        );
        let opts = RangeOpts::default().with_threshold(0.1);
        assert_eq!(
            y_extremum(&hists, Bound::Max, &opts),
            Err(Error::NoValidBins)
        );
    }

    #[test]
    fn with_errors() {
        let mut h = hist("h", &[4.0, 9.0, 1.0]);
        h.set_bin_error(0, 0.5);
        h.set_bin_error(1, 3.0);
        h.set_bin_error(2, 0.25);
        let opts = RangeOpts::default().with_errors(true);

        let max = y_extremum([&h], Bound::Max, &opts).unwrap();
        assert_eq!(max, Extremum::Value(12.0));

        let min = y_extremum([&h], Bound::Min, &opts).unwrap();
        assert_eq!(min, Extremum::LowestTwo(0.75, 3.5));

        let min = y_extremum([&h], Bound::Min, &opts.with_threshold(1.0)).unwrap();
        assert_eq!(min, Extremum::Value(3.5));
    }

    #[test]
    fn infinite_threshold_means_none() {
        let mut h = hist("h", &[4.0, 9.0, 1.0]);
        h.set_bin_error(0, 0.5);
        h.set_bin_error(1, 3.0);
        h.set_bin_error(2, 0.25);
        let opts = RangeOpts::default().with_errors(true);

        let min = y_extremum([&h], Bound::Min, &opts.with_threshold(f64::NEG_INFINITY)).unwrap();
        assert_eq!(min, Extremum::LowestTwo(0.75, 3.5));
        let max = y_extremum([&h], Bound::Max, &opts.with_threshold(f64::INFINITY)).unwrap();
        assert_eq!(max, Extremum::Value(12.0));

        // a forced maximum still wins without errors
        h.set_maximum(20.0);
        let opts = RangeOpts::default().with_threshold(f64::INFINITY);
        let max = y_extremum([&h], Bound::Max, &opts).unwrap();
        assert_eq!(max.value(), 20.0);
    }

    #[test]
    fn keyed_collection() {
        let mut map = BTreeMap::new();
        for h in three() {
            map.insert(h.name().to_string(), h);
        }
        let (min, max) = y_range(map.values(), &RangeOpts::default()).unwrap();
        assert_eq!(min.value(), 0.5);
        assert_eq!(max.value(), 7.0);
    }

    #[test]
    fn visible_range_and_overrides() {
        let mut h = Hist1D::from_contents("h", Binning::uniform(4, 0.0, 4.0), &[1.0, 2.0, 3.0, 8.0]);
        h.x_axis_mut().unwrap().set_range_user(0.0, 3.0);
        let max = y_extremum([&h], Bound::Max, &RangeOpts::default()).unwrap();
        assert_eq!(max.value(), 3.0);

        h.set_maximum(20.0);
        let max = y_extremum([&h], Bound::Max, &RangeOpts::default()).unwrap();
        assert_eq!(max.value(), 20.0);
    }
}
