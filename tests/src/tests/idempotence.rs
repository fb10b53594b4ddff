//! Formatting twice with the same options leaves the scene as formatting once

use hepstyle::attr::{self, StyleOpts};
use hepstyle::axes::{self, Axis2dOpts, LowerAxisOpts, TextSize, UpperAxisOpts};
use hepstyle::layout::{self, CanvasOpts};
use hepstyle::scene::{Binning, FillStyle, Graph, Hist2D, LineStyle, MarkerStyle};

use super::{backgrounds, data};
use crate::assert_same_scene;

#[test]
fn set_style_twice() {
    let opts = StyleOpts::default()
        .with_color("kAzure-4")
        .with_alpha(0.4)
        .with_fill_style(FillStyle::HATCH_DIAG)
        .with_line_style(LineStyle::DASHED)
        .with_marker(MarkerStyle::OPEN_CIRCLE, 1.2)
        .with_titles("p_{T} [GeV]", "Events")
        .with_x_range(10.0, 80.0)
        .with_y_range(0.0, 500.0);

    let mut once = data();
    attr::set_style(&mut once, &opts).unwrap();
    let mut twice = once.clone();
    attr::set_style(&mut twice, &opts).unwrap();
    assert_same_scene!(once, twice);

    let mut graph = Graph::new("eff");
    graph.push(10.0, 0.8, 0.05);
    graph.push(20.0, 0.9, 0.03);
    attr::set_style(&mut graph, &opts).unwrap();
    let before = graph.clone();
    attr::set_style(&mut graph, &opts).unwrap();
    assert_same_scene!(before, graph);
}

#[test]
fn axis_formatting_twice() {
    let canvas = layout::ratio_canvas(&CanvasOpts::default());
    let upper = UpperAxisOpts::ratio()
        .with_log(false, true)
        .with_y_range(0.0, 1e4)
        .with_text_size(TextSize::Pixels(28.0))
        .with_pad(canvas.upper());
    let lower = LowerAxisOpts::default()
        .with_titles("m [GeV]", "Ratio")
        .with_pad(canvas.lower());

    let mut stack = backgrounds();
    axes::format_upper_pad_axis(&mut stack, &upper);
    let before = stack.clone();
    axes::format_upper_pad_axis(&mut stack, &upper);
    assert_same_scene!(before, stack);

    let mut ratio = data();
    axes::format_lower_pad_axis(&mut ratio, &lower);
    let before = ratio.clone();
    axes::format_lower_pad_axis(&mut ratio, &lower);
    assert_same_scene!(before, ratio);
}

#[test]
fn map_formatting_twice() {
    let mut map = Hist2D::new(
        "eff2d",
        "",
        Binning::variable(vec![20.0, 30.0, 50.0, 100.0]),
        Binning::uniform(5, -2.5, 2.5),
    );
    let opts = Axis2dOpts::default()
        .with_titles("p_{T}", "#eta")
        .with_z_title("Efficiency")
        .with_z_range(0.0, 1.0)
        .with_log_z(true);
    axes::format_2d_axis(&mut map, &opts);
    let before = map.clone();
    axes::format_2d_axis(&mut map, &opts);
    assert_same_scene!(before, map);
}

#[test]
fn layout_is_reproducible() {
    let opts = CanvasOpts::default().with_log(true, true);
    let a = layout::ratio_canvas(&opts);
    let b = layout::ratio_canvas(&opts);
    assert_same_scene!(a, b);
}
