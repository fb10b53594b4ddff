//! Canvas and pads: the drawing surfaces.

use crate::geom::{Margin, NdcRect, Size};
use crate::{Color, Style};

use super::Primitive;

/// A rectangular drawing area with its own margins and coordinate system.
///
/// A pad owns every primitive drawn onto it with [`Pad::draw`],
/// and releases them when it is dropped or cleared.
#[derive(Debug, Clone, PartialEq)]
pub struct Pad {
    name: String,
    title: String,
    rect: NdcRect,
    size_px: Size,
    margin: Margin,
    ticks: (bool, bool),
    log_x: bool,
    log_y: bool,
    log_z: bool,
    grid: (bool, bool),
    fill_color: Color,
    primitives: Vec<Primitive>,
}

impl Pad {
    /// A pad at `rect` of a parent of `parent_px` pixels
    pub fn new(name: &str, title: &str, rect: NdcRect, parent_px: Size) -> Self {
        Pad {
            name: name.to_string(),
            title: title.to_string(),
            rect,
            size_px: parent_px.scale(rect.width(), rect.height()),
            margin: Margin::Even(0.1),
            ticks: (false, false),
            log_x: false,
            log_y: false,
            log_z: false,
            grid: (false, false),
            fill_color: Color::WHITE,
            primitives: Vec::new(),
        }
    }

    /// Pad name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Pad title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Position in the parent, in NDC
    pub fn rect(&self) -> NdcRect {
        self.rect
    }

    /// Physical size in pixels
    pub fn size_px(&self) -> Size {
        self.size_px
    }

    /// Pad margins
    pub fn margin(&self) -> Margin {
        self.margin
    }

    /// Set the pad margins
    pub fn set_margin(&mut self, margin: Margin) {
        self.margin = margin;
    }

    /// Whether ticks are drawn on the opposite X and Y sides
    pub fn ticks(&self) -> (bool, bool) {
        self.ticks
    }

    /// Set ticks on the opposite X and Y sides
    pub fn set_ticks(&mut self, x: bool, y: bool) {
        self.ticks = (x, y);
    }

    /// Whether X is in log scale
    pub fn log_x(&self) -> bool {
        self.log_x
    }

    /// Set the X log scale
    pub fn set_log_x(&mut self, log: bool) {
        self.log_x = log;
    }

    /// Whether Y is in log scale
    pub fn log_y(&self) -> bool {
        self.log_y
    }

    /// Set the Y log scale
    pub fn set_log_y(&mut self, log: bool) {
        self.log_y = log;
    }

    /// Whether Z is in log scale
    pub fn log_z(&self) -> bool {
        self.log_z
    }

    /// Set the Z log scale
    pub fn set_log_z(&mut self, log: bool) {
        self.log_z = log;
    }

    /// Whether grid lines are drawn along X and Y
    pub fn grid(&self) -> (bool, bool) {
        self.grid
    }

    /// Set the X and Y grid lines
    pub fn set_grid(&mut self, x: bool, y: bool) {
        self.grid = (x, y);
    }

    /// Background color
    pub fn fill_color(&self) -> Color {
        self.fill_color
    }

    /// Set the background color
    pub fn set_fill_color(&mut self, color: Color) {
        self.fill_color = color;
    }

    /// Transfer ownership of a primitive to the pad.
    /// Returns its index in [`Pad::primitives`].
    pub fn draw(&mut self, primitive: impl Into<Primitive>) -> usize {
        self.primitives.push(primitive.into());
        log::debug!(
            "pad {}: drew primitive #{}",
            self.name,
            self.primitives.len() - 1
        );
        self.primitives.len() - 1
    }

    /// Primitives in drawing order
    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    /// Release every primitive drawn so far
    pub fn clear(&mut self) {
        self.primitives.clear();
    }
}

/// The top-level drawing surface.
///
/// A canvas is a pad of its own, and may own sub-pads.
/// It keeps the [`Style`] it was created with.
#[derive(Debug, Clone)]
pub struct Canvas {
    pad: Pad,
    width: u32,
    height: u32,
    style: Style,
    subpads: Vec<Pad>,
}

impl Canvas {
    /// A canvas of `width` by `height` pixels, with margins, ticks and background from `style`
    pub fn new(name: &str, title: &str, width: u32, height: u32, style: &Style) -> Self {
        let mut pad = Pad::new(
            name,
            title,
            NdcRect::full(),
            Size::new(width as f32, height as f32),
        );
        pad.set_margin(style.pad_margin);
        pad.set_ticks(style.ticks.0, style.ticks.1);
        pad.set_fill_color(style.background);
        Canvas {
            pad,
            width,
            height,
            style: style.clone(),
            subpads: Vec::new(),
        }
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The style the canvas was built with
    pub fn style(&self) -> &Style {
        &self.style
    }

    /// The canvas drawing area
    pub fn pad(&self) -> &Pad {
        &self.pad
    }

    /// The canvas drawing area
    pub fn pad_mut(&mut self) -> &mut Pad {
        &mut self.pad
    }

    /// Add a sub-pad at `rect`, with the canvas style applied.
    /// Returns its index.
    pub fn add_subpad(&mut self, name: &str, title: &str, rect: NdcRect) -> usize {
        let mut pad = Pad::new(name, title, rect, self.pad.size_px());
        pad.set_margin(self.style.pad_margin);
        pad.set_ticks(self.style.ticks.0, self.style.ticks.1);
        pad.set_fill_color(self.style.background);
        self.subpads.push(pad);
        self.subpads.len() - 1
    }

    /// The sub-pads, in insertion order
    pub fn subpads(&self) -> &[Pad] {
        &self.subpads
    }

    /// The sub-pads, in insertion order
    pub fn subpads_mut(&mut self) -> &mut [Pad] {
        &mut self.subpads
    }

    /// The sub-pad at `idx`
    pub fn subpad(&self, idx: usize) -> Option<&Pad> {
        self.subpads.get(idx)
    }

    /// The sub-pad at `idx`
    pub fn subpad_mut(&mut self, idx: usize) -> Option<&mut Pad> {
        self.subpads.get_mut(idx)
    }
}
