//! Base primitives shared by the hepstyle crates: colors and NDC geometry.
// hepstyle is released under the MIT License

pub mod color;
pub mod geom;
