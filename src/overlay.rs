//! Reference lines drawn over an existing plot.
//!
//! The lines are owned by the pad they are drawn onto.
use crate::scene::{Frame, Hist2D, Line, LineAtt, LineStyle, Pad};
use crate::{Color, Error, Result};

/// Draw one horizontal line per value in `values`, across the X range.
///
/// The X range is `x_range` if given, the visible X range of `reference` otherwise.
/// The first line is dashed, as the nominal reference, the following ones dotted.
pub fn draw_ratio_lines<F: Frame + ?Sized>(
    pad: &mut Pad,
    reference: &F,
    values: &[f64],
    x_range: Option<(f64, f64)>,
) -> Result<()> {
    let (x1, x2) = x_range
        .or_else(|| reference.visible_x_range())
        .ok_or(Error::UndefinedRange)?;
    for (i, &y) in values.iter().enumerate() {
        let style = if i == 0 {
            LineStyle::DASHED
        } else {
            LineStyle::DOTTED
        };
        let att = LineAtt {
            style,
            ..LineAtt::default()
        };
        pad.draw(Line::horizontal(x1, x2, y, att));
    }
    Ok(())
}

/// Draw a black dashed line on every internal bin edge of `hist`,
/// across the full range of the other axis. Returns the number of lines drawn.
pub fn draw_grid_lines(pad: &mut Pad, hist: &Hist2D) -> usize {
    let att = LineAtt {
        color: Color::BLACK,
        style: LineStyle::DASHED,
        ..LineAtt::default()
    };
    let xb = hist.x_binning();
    let yb = hist.y_binning();
    let mut count = 0;
    for &x in xb.inner_edges() {
        pad.draw(Line::vertical(x, yb.low(), yb.up(), att));
        count += 1;
    }
    for &y in yb.inner_edges() {
        pad.draw(Line::horizontal(xb.low(), xb.up(), y, att));
        count += 1;
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::{NdcRect, Size};
    use crate::scene::{Binning, Graph, Hist1D, Primitive};

    fn pad() -> Pad {
        Pad::new("p", "", NdcRect::full(), Size::new(800.0, 300.0))
    }

    fn lines(pad: &Pad) -> Vec<&Line> {
        pad.primitives()
            .iter()
            .filter_map(|p| match p {
                Primitive::Line(l) => Some(l),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn ratio_lines_over_visible_range() {
        let mut h = Hist1D::new("r", "", Binning::uniform(10, 0.0, 100.0));
        h.x_axis_mut().unwrap().set_range_user(15.0, 60.0);
        let mut p = pad();
        draw_ratio_lines(&mut p, &h, &[1.0, 0.5, 1.5], None).unwrap();

        let lines = lines(&p);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].att.style, LineStyle::DASHED);
        assert_eq!(lines[1].att.style, LineStyle::DOTTED);
        assert_eq!(lines[2].att.style, LineStyle::DOTTED);
        assert_eq!((lines[0].x1, lines[0].x2), (10.0, 60.0));
        assert_eq!((lines[1].y1, lines[1].y2), (0.5, 0.5));
    }

    #[test]
    fn explicit_range_wins() {
        let h = Hist1D::new("r", "", Binning::uniform(10, 0.0, 100.0));
        let mut p = pad();
        draw_ratio_lines(&mut p, &h, &[1.0], Some((5.0, 7.0))).unwrap();
        assert_eq!((lines(&p)[0].x1, lines(&p)[0].x2), (5.0, 7.0));
    }

    #[test]
    fn no_range_available() {
        let g = Graph::new("empty");
        let mut p = pad();
        assert_eq!(
            draw_ratio_lines(&mut p, &g, &[1.0], None),
            Err(Error::UndefinedRange)
        );
        assert!(p.primitives().is_empty());
    }

    #[test]
    fn grid_on_inner_edges() {
        let h = Hist2D::new(
            "h2",
            "",
            Binning::variable(vec![0.0, 1.0, 3.0, 6.0]),
            Binning::uniform(2, -1.0, 1.0),
        );
        let mut p = pad();
        assert_eq!(draw_grid_lines(&mut p, &h), 2 + 1);

        let lines = lines(&p);
        assert_eq!(lines.len(), 3);
        assert_eq!(*lines[0], Line::vertical(1.0, -1.0, 1.0, lines[0].att));
        assert_eq!(*lines[2], Line::horizontal(0.0, 6.0, 0.0, lines[2].att));
        assert!(lines.iter().all(|l| l.att.style == LineStyle::DASHED));
        assert!(lines.iter().all(|l| l.att.color == Color::BLACK));
    }
}
