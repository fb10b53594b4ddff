use std::fmt::Debug;

/// Textual dump of a scene object, one attribute per line
pub trait SceneDump {
    fn dump(&self) -> String;
}

impl<T: Debug + ?Sized> SceneDump for T {
    fn dump(&self) -> String {
        format!("{:#?}", self)
    }
}

pub fn check_same_scene(expected: &str, actual: &str) -> Result<(), String> {
    if expected == actual {
        return Ok(());
    }
    let diff = similar::TextDiff::from_lines(expected, actual);
    let mut udiff = diff.unified_diff();
    udiff.header("expected", "actual");
    Err(format!("Scene assertion failed\n{}", udiff))
}

macro_rules! assert_same_scene {
    ($expected:expr, $actual:expr) => {
        if let Err(msg) = $crate::harness::check_same_scene(
            &$crate::SceneDump::dump(&$expected),
            &$crate::SceneDump::dump(&$actual),
        ) {
            panic!("{}", msg);
        }
    };
}

pub(crate) use assert_same_scene;
