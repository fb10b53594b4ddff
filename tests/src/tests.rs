use hepstyle::scene::{Binning, Hist1D, Stack};

mod idempotence;
mod map2d;
mod ratio_plot;

fn binning() -> Binning {
    Binning::uniform(10, 0.0, 100.0)
}

/// Pseudo data, falling with x
fn data() -> Hist1D {
    let mut h = Hist1D::new("data", "Data", binning());
    for bin in 0..10 {
        let x = 5.0 + 10.0 * bin as f64;
        let n = 200 - 15 * bin;
        for _ in 0..n {
            h.fill(x, 1.0);
        }
    }
    h
}

/// Two background components summing close to the data
fn backgrounds() -> Stack {
    let ttbar: Vec<f64> = (0..10).map(|b| 120.0 - 8.0 * b as f64).collect();
    let wjets: Vec<f64> = (0..10).map(|b| 75.0 - 6.0 * b as f64).collect();
    let mut stack = Stack::new("bkg");
    stack.add(Hist1D::from_contents("ttbar", binning(), &ttbar));
    stack.add(Hist1D::from_contents("wjets", binning(), &wjets));
    stack
}
