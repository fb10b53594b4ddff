//! The analysis color table: short symbolic names for the house colors.

use super::ColorU8;

pub const ORANGE: ColorU8 = ColorU8::from_html(b"#E24A33");
pub const PURPLE: ColorU8 = ColorU8::from_html(b"#7A68A6");
pub const BLUE: ColorU8 = ColorU8::from_html(b"#348ABD");
pub const LBLUE: ColorU8 = ColorU8::from_html(b"#68add5");
pub const TURQUOISE: ColorU8 = ColorU8::from_html(b"#188487");
pub const RED: ColorU8 = ColorU8::from_html(b"#A60628");
pub const PINK: ColorU8 = ColorU8::from_html(b"#CF4457");
pub const GREEN: ColorU8 = ColorU8::from_html(b"#32b43c");
pub const LGREEN: ColorU8 = ColorU8::from_html(b"#88de8f");
pub const YELLOW: ColorU8 = ColorU8::from_html(b"#e2a233");
pub const LYELLOW: ColorU8 = ColorU8::from_html(b"#f7fab3");
pub const GREY: ColorU8 = ColorU8::from_html(b"#838283");
pub const GRAY: ColorU8 = GREY;

pub const WHITE: ColorU8 = ColorU8::from_rgb(255, 255, 255);
pub const BLACK: ColorU8 = ColorU8::from_rgb(0, 0, 0);

const TABLE: &[(&str, ColorU8)] = &[
    ("orange", ORANGE),
    ("purple", PURPLE),
    ("blue", BLUE),
    ("lblue", LBLUE),
    ("turquoise", TURQUOISE),
    ("red", RED),
    ("pink", PINK),
    ("green", GREEN),
    ("lgreen", LGREEN),
    ("yellow", YELLOW),
    ("lyellow", LYELLOW),
    ("grey", GREY),
    ("gray", GRAY),
];

/// Look up a name in the table. Matching is exact: table names are lowercase.
pub fn lookup_name(name: &str) -> Option<ColorU8> {
    TABLE.iter().find(|(n, _)| *n == name).map(|(_, c)| *c)
}

/// All the names of the table, in declaration order
pub fn names() -> impl Iterator<Item = &'static str> {
    TABLE.iter().map(|(n, _)| *n)
}
