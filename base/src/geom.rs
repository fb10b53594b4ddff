/*!
 * Geometric primitives.
 *
 * Pads and boxes are placed in normalized device coordinates (NDC),
 * in the `[0, 1]` range of their parent, with the origin at the bottom-left corner.
 */

use strict_num::FiniteF32;

/// A size in pixels, represented by width and height
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    w: f32,
    h: f32,
}

impl Size {
    /// Build a size from width and height
    pub const fn new(w: f32, h: f32) -> Self {
        Size { w, h }
    }

    /// The width
    pub const fn width(&self) -> f32 {
        self.w
    }

    /// The height
    pub const fn height(&self) -> f32 {
        self.h
    }

    /// The smallest of width and height
    pub fn min_side(&self) -> f32 {
        self.w.min(self.h)
    }

    /// Scale both dimensions by a NDC extent
    pub fn scale(&self, fx: f32, fy: f32) -> Size {
        Size {
            w: self.w * fx,
            h: self.h * fy,
        }
    }
}

/// A rectangle in NDC, represented by its lower-left and upper-right corners
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NdcRect {
    xlow: FiniteF32,
    ylow: FiniteF32,
    xup: FiniteF32,
    yup: FiniteF32,
}

impl NdcRect {
    /// The full `[0, 1] x [0, 1]` area
    pub fn full() -> Self {
        NdcRect::new(0.0, 0.0, 1.0, 1.0)
    }

    /// Build a rectangle from its corners.
    /// Panics if a coordinate is not finite.
    pub fn new(xlow: f32, ylow: f32, xup: f32, yup: f32) -> Self {
        NdcRect {
            xlow: FiniteF32::new(xlow).unwrap(),
            ylow: FiniteF32::new(ylow).unwrap(),
            xup: FiniteF32::new(xup).unwrap(),
            yup: FiniteF32::new(yup).unwrap(),
        }
    }

    /// Build a rectangle from `(xmin, xmax, ymin, ymax)`, the order used by preset tables
    pub fn from_extents(xmin: f32, xmax: f32, ymin: f32, ymax: f32) -> Self {
        NdcRect::new(xmin, ymin, xmax, ymax)
    }

    pub const fn xlow(&self) -> f32 {
        self.xlow.get()
    }

    pub const fn ylow(&self) -> f32 {
        self.ylow.get()
    }

    pub const fn xup(&self) -> f32 {
        self.xup.get()
    }

    pub const fn yup(&self) -> f32 {
        self.yup.get()
    }

    /// The width of the rectangle
    pub const fn width(&self) -> f32 {
        self.xup() - self.xlow()
    }

    /// The height of the rectangle
    pub const fn height(&self) -> f32 {
        self.yup() - self.ylow()
    }

    /// Vertical distance from the top of `self` to the bottom of `above`.
    /// Negative if the two rectangles overlap vertically.
    pub fn gap_below(&self, above: &NdcRect) -> f32 {
        above.ylow() - self.yup()
    }

    /// Test if the rectangle contains a point
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.xlow() && x <= self.xup() && y >= self.ylow() && y <= self.yup()
    }
}

/// Margins of a pad, as fractions of the pad extent
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Margin {
    /// Uniform margin in all directions
    Even(f32),
    /// Vertical and horizontal margin
    Center {
        /// Vertical margin
        v: f32,
        /// Horizontal margin
        h: f32,
    },
    /// Top, right, bottom and left margin
    Custom {
        /// Top margin
        t: f32,
        /// Right margin
        r: f32,
        /// Bottom margin
        b: f32,
        /// Left margin
        l: f32,
    },
}

impl Margin {
    /// The top margin
    pub const fn top(&self) -> f32 {
        match self {
            Margin::Even(p) => *p,
            Margin::Center { v, .. } => *v,
            Margin::Custom { t, .. } => *t,
        }
    }

    /// The right margin
    pub const fn right(&self) -> f32 {
        match self {
            Margin::Even(p) => *p,
            Margin::Center { h, .. } => *h,
            Margin::Custom { r, .. } => *r,
        }
    }

    /// The bottom margin
    pub const fn bottom(&self) -> f32 {
        match self {
            Margin::Even(p) => *p,
            Margin::Center { v, .. } => *v,
            Margin::Custom { b, .. } => *b,
        }
    }

    /// The left margin
    pub const fn left(&self) -> f32 {
        match self {
            Margin::Even(p) => *p,
            Margin::Center { h, .. } => *h,
            Margin::Custom { l, .. } => *l,
        }
    }

    /// The total vertical margin
    pub const fn sum_ver(&self) -> f32 {
        self.top() + self.bottom()
    }

    /// The total horizontal margin
    pub const fn sum_hor(&self) -> f32 {
        self.left() + self.right()
    }

    /// Same margins with a new top side
    pub const fn with_top(self, t: f32) -> Margin {
        Margin::Custom {
            t,
            r: self.right(),
            b: self.bottom(),
            l: self.left(),
        }
    }

    /// Same margins with a new bottom side
    pub const fn with_bottom(self, b: f32) -> Margin {
        Margin::Custom {
            t: self.top(),
            r: self.right(),
            b,
            l: self.left(),
        }
    }
}

impl From<f32> for Margin {
    fn from(value: f32) -> Self {
        Margin::Even(value)
    }
}

impl From<(f32, f32)> for Margin {
    fn from((v, h): (f32, f32)) -> Self {
        Margin::Center { v, h }
    }
}

impl From<(f32, f32, f32, f32)> for Margin {
    fn from((t, r, b, l): (f32, f32, f32, f32)) -> Self {
        Margin::Custom { t, r, b, l }
    }
}
