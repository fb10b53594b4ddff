#![cfg(test)]

mod harness;
mod tests;

pub(crate) use harness::{SceneDump, assert_same_scene};
