//! Legend boxes at named or explicit positions
use std::str::FromStr;

use crate::defaults;
use crate::geom::NdcRect;
use crate::scene::{FillAtt, Legend};
use crate::{Error, Result};

/// Named legend positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LegendPos {
    /// Top left corner
    Left,
    /// Top right corner
    Right,
    /// Top of the pad, the same box as `Left`
    Top,
}

/// (xmin, xmax, ymin, ymax) of left, right and top, for a single plot
const POSITIONS: [[f32; 4]; 3] = [
    [0.15, 0.57, 0.80, 0.93],
    [0.51, 0.93, 0.80, 0.93],
    [0.15, 0.57, 0.80, 0.93],
];

/// (xmin, xmax, ymin, ymax) of left, right and top, for the upper pad of a ratio layout
const POSITIONS_RATIO: [[f32; 4]; 3] = [
    [0.15, 0.59, 0.74, 0.90],
    [0.50, 0.94, 0.74, 0.90],
    [0.15, 0.59, 0.74, 0.90],
];

impl LegendPos {
    /// The rectangle of this position.
    /// The ratio table sits lower to stay clear of the ratio pad axis.
    pub fn rect(&self, ratio: bool) -> NdcRect {
        let table = if ratio { &POSITIONS_RATIO } else { &POSITIONS };
        let [xmin, xmax, ymin, ymax] = table[*self as usize];
        NdcRect::from_extents(xmin, xmax, ymin, ymax)
    }
}

impl FromStr for LegendPos {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "left" => Ok(LegendPos::Left),
            "right" => Ok(LegendPos::Right),
            "top" => Ok(LegendPos::Top),
            _ => Err(Error::UnknownLegendPos(s.to_string())),
        }
    }
}

/// Where a legend is placed
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Placement {
    /// A preset position, looked up in the table matching the layout
    Named(LegendPos),
    /// An explicit rectangle
    Explicit(NdcRect),
}

/// Options of [`format_legend`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegendOpts {
    /// Text size
    pub size: f32,
    /// Named position or explicit rectangle
    pub placement: Placement,
    /// Whether the legend goes on the upper pad of a ratio layout
    pub ratio: bool,
    /// Number of entry columns
    pub columns: u32,
}

impl Default for LegendOpts {
    fn default() -> Self {
        LegendOpts {
            size: defaults::LEGEND_TEXT_SIZE,
            placement: Placement::Explicit(defaults::legend_rect()),
            ratio: false,
            columns: 1,
        }
    }
}

impl LegendOpts {
    /// Options for a named position given by its tag (`left`, `right` or `top`)
    pub fn named(tag: &str, ratio: bool) -> Result<Self> {
        let pos = tag.parse()?;
        Ok(LegendOpts {
            placement: Placement::Named(pos),
            ratio,
            ..Default::default()
        })
    }

    /// Set a named position and return self for chaining
    pub fn with_pos(self, pos: LegendPos) -> Self {
        Self {
            placement: Placement::Named(pos),
            ..self
        }
    }

    /// Set an explicit rectangle and return self for chaining
    pub fn with_rect(self, rect: NdcRect) -> Self {
        Self {
            placement: Placement::Explicit(rect),
            ..self
        }
    }

    /// Set the text size and return self for chaining
    pub fn with_size(self, size: f32) -> Self {
        Self { size, ..self }
    }

    /// Set the number of columns and return self for chaining
    pub fn with_columns(self, columns: u32) -> Self {
        Self { columns, ..self }
    }

    /// Set whether the target has a ratio pad and return self for chaining
    pub fn with_ratio(self, ratio: bool) -> Self {
        Self { ratio, ..self }
    }

    /// The rectangle the legend will occupy
    pub fn rect(&self) -> NdcRect {
        match self.placement {
            Placement::Named(pos) => {
                log::debug!("legend at {:?} (ratio: {})", pos, self.ratio);
                pos.rect(self.ratio)
            }
            Placement::Explicit(rect) => rect,
        }
    }
}

/// A borderless legend with a transparent background
pub fn format_legend(opts: &LegendOpts) -> Legend {
    let mut leg = Legend::new(opts.rect());
    leg.border_size = 0;
    leg.text_font = defaults::TEXT_FONT;
    leg.text_size = opts.size;
    leg.entry_separation = opts.size / 3.0;
    leg.fill = FillAtt::transparent();
    if opts.columns > 1 {
        leg.columns = opts.columns;
    }
    leg
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_tags() {
        assert_eq!("left".parse::<LegendPos>(), Ok(LegendPos::Left));
        assert_eq!("top".parse::<LegendPos>(), Ok(LegendPos::Top));
        assert_eq!(
            "bottom".parse::<LegendPos>(),
            Err(Error::UnknownLegendPos("bottom".to_string()))
        );
        assert!(LegendOpts::named("center", true).is_err());
    }

    #[test]
    fn ratio_table_for_ratio_layout() {
        let leg = format_legend(&LegendOpts::named("left", true).unwrap());
        assert_eq!(leg.rect, NdcRect::from_extents(0.15, 0.59, 0.74, 0.90));
        assert_ne!(leg.rect, LegendPos::Left.rect(false));

        let leg = format_legend(&LegendOpts::named("right", false).unwrap());
        assert_eq!(leg.rect, NdcRect::from_extents(0.51, 0.93, 0.80, 0.93));
    }

    #[test]
    fn legend_attributes() {
        let leg = format_legend(&LegendOpts::default());
        assert_eq!(leg.rect, NdcRect::from_extents(0.50, 0.9, 0.7, 0.9));
        assert_eq!(leg.border_size, 0);
        assert_eq!(leg.text_font, 42);
        assert_eq!(leg.text_size, 0.035);
        assert_eq!(leg.entry_separation, 0.035 / 3.0);
        assert_eq!(leg.fill.alpha, Some(0.0));
        assert_eq!(leg.columns, 1);

        let leg = format_legend(&LegendOpts::default().with_columns(3));
        assert_eq!(leg.columns, 3);
    }
}
