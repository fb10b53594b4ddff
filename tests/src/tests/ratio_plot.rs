use hepstyle::axes::{self, LowerAxisOpts, UpperAxisOpts};
use hepstyle::fit::{self, FitSummary, PaveOpts};
use hepstyle::label::{self, AtlasLabel, LumiLabel};
use hepstyle::layout::{self, CanvasOpts, Layout};
use hepstyle::legend::{self, LegendOpts};
use hepstyle::range::{self, Bound, Extremum, RangeOpts};
use hepstyle::scene::{BinnedData, FillStyle, Line, LineStyle, Primitive, RangeSettable};
use hepstyle::{Style, attr, overlay};

use super::{backgrounds, data};

fn lines(prims: &[Primitive]) -> Vec<&Line> {
    prims
        .iter()
        .filter_map(|p| match p {
            Primitive::Line(l) => Some(l),
            _ => None,
        })
        .collect()
}

#[test]
fn data_over_stacked_backgrounds() {
    let opts = CanvasOpts::default()
        .with_name("c_mjj", "")
        .with_log(false, true)
        .with_style(Style::atlas());
    let mut canvas = layout::ratio_canvas(&opts);

    let mut data = data();
    let mut bkg = backgrounds();
    attr::set_style(&mut data, &attr::StyleOpts::default()).unwrap();
    let colors = ["#E24A33", "#348ABD"];
    for (h, color) in bkg.hists_mut().iter_mut().zip(colors) {
        let opts = attr::StyleOpts::default()
            .with_color(color)
            .with_fill_style(FillStyle::SOLID);
        attr::set_style(h, &opts).unwrap();
    }

    // the stack frame carries the displayed range
    let max = range::y_extremum([&bkg], Bound::Max, &RangeOpts::default()).unwrap();
    assert_eq!(max, Extremum::Value(195.0));
    let data_max = range::y_extremum(
        [&data],
        Bound::Max,
        &RangeOpts::default().with_errors(true),
    )
    .unwrap();
    assert!(data_max.value() > 200.0);

    let upper_opts = UpperAxisOpts::ratio()
        .with_titles("", "Events / 10 GeV")
        .with_log(false, true)
        .with_y_range(0.0, 10.0 * data_max.value())
        .with_pad(canvas.upper());
    axes::format_upper_pad_axis(&mut bkg, &upper_opts);
    assert_eq!(bkg.minimum(), Some(1.0));
    assert_eq!(bkg.maximum(), Some(10.0 * data_max.value()));

    let total = bkg.sum("total").unwrap();
    let mut ratio = data.ratio_to(&total, "ratio");
    attr::set_style(&mut ratio, &attr::StyleOpts::default()).unwrap();
    axes::format_lower_pad_axis(
        &mut ratio,
        &LowerAxisOpts::default().with_titles("m_{jj} [GeV]", "Data / Bkg"),
    );
    let (lo, hi) = range::y_range([&ratio], &RangeOpts::default()).unwrap();
    assert!(lo.value() >= 0.3 && hi.value() <= 1.7);

    let mut leg = legend::format_legend(&LegendOpts::named("right", true).unwrap());
    leg.add_entry(data.name(), "Data", "pe");
    for h in bkg.hists() {
        leg.add_entry(h.name(), h.name(), "f");
    }
    let (upper, lower) = canvas.pads_mut();
    upper.draw(leg);
    label::atlas_label(upper, &AtlasLabel::new(0.2, 0.86));
    label::lumi_label(upper, &LumiLabel::new(0.2, 0.80));
    overlay::draw_ratio_lines(lower, &ratio, &[1.0, 0.5, 1.5], None).unwrap();

    assert_eq!(canvas.upper().primitives().len(), 3);
    let ratio_lines = lines(canvas.lower().primitives());
    assert_eq!(ratio_lines.len(), 3);
    assert_eq!(ratio_lines[0].att.style, LineStyle::DASHED);
    assert_eq!((ratio_lines[0].x1, ratio_lines[0].x2), (0.0, 100.0));
    assert!(ratio_lines[1..].iter().all(|l| l.att.style == LineStyle::DOTTED));

    match &canvas.upper().primitives()[0] {
        Primitive::Legend(leg) => {
            assert_eq!(leg.entries().len(), 3);
            assert_eq!(leg.rect, legend::LegendPos::Right.rect(true));
        }
        other => panic!("expected the legend first, got {:?}", other),
    }

    let canvas = canvas.into_canvas();
    assert_eq!(canvas.subpads().len(), 2);
    assert_eq!(canvas.style(), &Style::atlas());
}

#[test]
fn zoomed_ratio_lines() {
    let mut canvas = layout::ratio_canvas(&CanvasOpts::default());
    let mut ratio = data().ratio_to(&backgrounds().sum("total").unwrap(), "ratio");
    let opts = LowerAxisOpts::default().with_x_range(20.0, 55.0);
    axes::format_lower_pad_axis(&mut ratio, &opts);

    overlay::draw_ratio_lines(canvas.lower_mut(), &ratio, &[1.0], None).unwrap();
    let lines = lines(canvas.lower().primitives());
    assert_eq!((lines[0].x1, lines[0].x2), (20.0, 60.0));
    assert_eq!(ratio.visible_bins().len(), 4);
}

#[test]
fn single_canvas_with_fit() {
    let mut plot = layout::format_canvas(false, &CanvasOpts::default().with_style(Style::plain()));
    assert!(matches!(plot, Layout::Single(_)));

    let mut data = data();
    axes::format_upper_pad_axis(&mut data, &UpperAxisOpts::single().with_titles("m", "Events"));
    assert_eq!(data.x_axis().label_size(), 0.04);

    let fit = FitSummary::new(9.5)
        .with_ndf(8)
        .with_signal(42.0, 0.0)
        .with_parameter("#mu", 0.98, 0.11);
    let pad = plot.main_pad_mut();
    fit::draw_fit_summary(pad, &fit, &PaveOpts::default());
    match &plot.canvas().pad().primitives()[0] {
        Primitive::PaveText(pave) => {
            assert!(pave.lines.iter().any(|l| l == "Z = 0.00"));
            assert_eq!(pave.lines.last().unwrap(), "#mu = 0.98 #pm 0.11");
        }
        other => panic!("expected a text box, got {:?}", other),
    }
}
