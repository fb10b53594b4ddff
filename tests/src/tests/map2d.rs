use hepstyle::axes::{self, Axis2dOpts};
use hepstyle::layout::{self, CanvasOpts};
use hepstyle::overlay;
use hepstyle::range::{self, Bound, RangeOpts};
use hepstyle::scene::{Binning, Hist2D, LineStyle, Primitive, RangeSettable};

fn map() -> Hist2D {
    let mut h = Hist2D::new(
        "eff2d",
        "",
        Binning::variable(vec![20.0, 30.0, 50.0, 100.0, 200.0]),
        Binning::uniform(4, -2.0, 2.0),
    );
    for ix in 0..4 {
        for iy in 0..4 {
            h.set_bin_content(ix, iy, 0.5 + 0.1 * ix as f64 - 0.05 * iy as f64);
        }
    }
    h
}

#[test]
fn efficiency_map() {
    let mut canvas = layout::single_canvas(&CanvasOpts::default());
    let mut h = map();

    let (lo, hi) = range::y_range([&h], &RangeOpts::default()).unwrap();
    let opts = Axis2dOpts::default()
        .with_titles("p_{T} [GeV]", "#eta")
        .with_z_title("Efficiency")
        .with_z_range(lo.value(), hi.value())
        .with_pad(canvas.pad());
    axes::format_2d_axis(&mut h, &opts);
    assert_eq!(h.minimum(), Some(lo.value()));
    assert_eq!(h.maximum(), Some(hi.value()));
    assert_eq!(h.z_axis().title(), "Efficiency");
    assert_eq!(h.y_axis().title(), "#eta");

    let n = overlay::draw_grid_lines(canvas.pad_mut(), &h);
    assert_eq!(n, (4 - 1) + (4 - 1));

    let prims = canvas.pad().primitives();
    assert_eq!(prims.len(), n);
    for p in prims {
        match p {
            Primitive::Line(l) => assert_eq!(l.att.style, LineStyle::DASHED),
            other => panic!("expected lines only, got {:?}", other),
        }
    }
}

#[test]
fn forced_range_wins_over_contents() {
    let mut h = map();
    axes::format_2d_axis(&mut h, &Axis2dOpts::default().with_z_range(0.0, 2.0));
    let max = range::y_extremum([&h], Bound::Max, &RangeOpts::default()).unwrap();
    assert_eq!(max.value(), 2.0);
    // a threshold bypasses the forced maximum
    let max = range::y_extremum([&h], Bound::Max, &RangeOpts::default().with_threshold(0.75)).unwrap();
    assert!(max.value() < 0.75);
}
