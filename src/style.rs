//! Global style presets.
//!
//! A [`Style`] gathers the process-wide rendering defaults: text, margins, palette and
//! decoration visibility. It is passed explicitly to [`Canvas::new`](crate::scene::Canvas::new).
//!
//! For scripts that rely on a process-wide default, [`install`] sets the style returned by
//! [`current`]. Call it once at startup, before any canvas is created.
//! The first install wins: installing the same preset again does nothing,
//! installing the other preset is ignored with a warning.
use std::sync::OnceLock;

use crate::Color;
use crate::geom::Margin;
use crate::scene::MarkerStyle;

/// The available presets. They are mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Preset {
    /// ATLAS publication style
    Atlas,
    /// Plain style, matching the canvas helpers defaults
    #[default]
    Plain,
}

/// Color palette for 2D maps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Palette {
    /// Blue to yellow "bird" palette
    Bird,
    /// Viridis palette
    Viridis,
}

impl Palette {
    /// Palette code in the renderer
    pub const fn code(&self) -> i32 {
        match self {
            Palette::Bird => 57,
            Palette::Viridis => 112,
        }
    }
}

/// Process-wide rendering defaults.
///
/// Pad margins, ticks and background are applied by [`Canvas::new`](crate::scene::Canvas::new)
/// and [`CanvasOpts::from_style`](crate::layout::CanvasOpts::from_style).
/// Marker and line defaults are applied through [`StyleOpts::from_style`](crate::attr::StyleOpts::from_style).
/// The font, text sizes, decoration switches, error bar ends and palette are hints
/// for the renderer walking the scene, which reads them from [`Canvas::style`](crate::scene::Canvas::style).
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    /// The preset this style was built from
    pub preset: Preset,
    /// Renderer hint: default font code
    pub text_font: u16,
    /// Renderer hint: default text size
    pub text_size: f32,
    /// Renderer hint: axis label size
    pub label_size: f32,
    /// Renderer hint: axis title size
    pub title_size: f32,
    /// Margins of the canvas pads
    pub pad_margin: Margin,
    /// Ticks on the opposite X and Y sides
    pub ticks: (bool, bool),
    /// Fill color of the canvas pads
    pub background: Color,
    /// Renderer hint: whether statistics boxes are drawn at all
    pub show_stats: bool,
    /// Renderer hint: whether object titles are drawn
    pub show_title: bool,
    /// Renderer hint: size of the small lines at the end of error bars
    pub end_error_size: f32,
    /// Marker style of styled objects
    pub marker_style: MarkerStyle,
    /// Marker size of styled objects
    pub marker_size: f32,
    /// Line width of styled objects
    pub line_width: f32,
    /// Renderer hint: palette of 2D maps
    pub palette: Palette,
}

impl Style {
    /// Build the style of a preset
    pub fn preset(preset: Preset) -> Style {
        match preset {
            Preset::Atlas => Style::atlas(),
            Preset::Plain => Style::plain(),
        }
    }

    /// ATLAS publication style
    pub fn atlas() -> Style {
        Style {
            preset: Preset::Atlas,
            text_font: 42,
            text_size: 0.05,
            label_size: 0.05,
            title_size: 0.05,
            pad_margin: (0.05, 0.05, 0.16, 0.16).into(),
            ticks: (true, true),
            background: Color::WHITE,
            show_stats: false,
            show_title: false,
            end_error_size: 0.0,
            marker_style: MarkerStyle::FULL_CIRCLE,
            marker_size: 1.2,
            line_width: 2.0,
            palette: Palette::Bird,
        }
    }

    /// Plain style
    pub fn plain() -> Style {
        Style {
            preset: Preset::Plain,
            text_font: 42,
            text_size: 0.04,
            label_size: 0.04,
            title_size: 0.04,
            pad_margin: (0.05, 0.03, 0.13, 0.13).into(),
            ticks: (true, true),
            background: Color::WHITE,
            show_stats: false,
            show_title: false,
            end_error_size: 2.0,
            marker_style: MarkerStyle::FULL_CIRCLE,
            marker_size: 0.8,
            line_width: 2.0,
            palette: Palette::Viridis,
        }
    }
}

impl Default for Style {
    fn default() -> Self {
        Style::plain()
    }
}

static GLOBAL: OnceLock<Style> = OnceLock::new();

/// Install a preset as the process-wide style.
///
/// Returns the installed style, which is the style of the first preset ever installed.
pub fn install(preset: Preset) -> &'static Style {
    let style = GLOBAL.get_or_init(|| {
        log::debug!("installing {:?} style", preset);
        Style::preset(preset)
    });
    if style.preset != preset {
        log::warn!(
            "{:?} style already installed, ignoring {:?}",
            style.preset,
            preset
        );
    }
    style
}

/// The installed process-wide style, or the plain style if none was installed
pub fn current() -> Style {
    GLOBAL.get().cloned().unwrap_or_default()
}
