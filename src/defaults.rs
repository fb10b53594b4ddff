use crate::geom::{Margin, NdcRect};

pub const CANVAS_WIDTH: u32 = 800;
pub const CANVAS_HEIGHT: u32 = 800;

pub const CANVAS_MARGIN: Margin = Margin::Custom {
    t: 0.05,
    r: 0.03,
    b: 0.13,
    l: 0.13,
};
pub const UPPER_PAD_BOTTOM_MARGIN: f32 = 0.005;
pub const UPPER_PAD_TOP_MARGIN: f32 = 0.08;
pub const LOWER_PAD_BOTTOM_MARGIN: f32 = 0.35;
pub const LOWER_PAD_TOP_MARGIN: f32 = 0.0054;

/// (xlow, ylow, xup, yup)
pub const UPPER_PAD_NDC: [f32; 4] = [0.0, 0.305, 0.99, 1.0];
pub const LOWER_PAD_NDC: [f32; 4] = [0.0, 0.01, 0.99, 0.295];

pub const TEXT_FONT: u16 = 42;

pub const MARKER_STYLE: u8 = 20;
pub const MARKER_SIZE: f32 = 0.8;
pub const LINE_WIDTH: f32 = 2.0;

pub const LOG_FLOOR_SMALL: f64 = 1e-4;
pub const LOG_FLOOR_UNIT: f64 = 1.0;

pub const LOWER_PAD_Y_RANGE: (f64, f64) = (0.3, 1.7);
pub const LOWER_PAD_X_DIVISIONS: i32 = 203;
pub const LOWER_PAD_Y_DIVISIONS: i32 = 504;

pub const LEGEND_TEXT_SIZE: f32 = 0.035;
pub fn legend_rect() -> NdcRect {
    NdcRect::from_extents(0.50, 0.9, 0.7, 0.9)
}

pub const LABEL_TEXT_SIZE: f32 = 0.04;
pub const ATLAS_SUFFIX: &str = "Internal";
pub const SQRT_S_TEV: f64 = 13.0;
pub const LUMI_FB: f64 = 139.0;

pub const FIT_BOX_TEXT_SIZE: f32 = 0.03;
pub fn fit_box_rect() -> NdcRect {
    NdcRect::from_extents(0.55, 0.93, 0.55, 0.90)
}
