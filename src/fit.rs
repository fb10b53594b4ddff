//! Fit result summaries drawn as text boxes.
//!
//! Values are printed with 4 decimals when their error is below 0.01, and 2 decimals otherwise.
use statrs::distribution::{ChiSquared, ContinuousCDF};

use crate::defaults;
use crate::geom::NdcRect;
use crate::scene::{FillAtt, Func, Pad, PaveText};

/// A value with its uncertainty
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    /// Central value
    pub value: f64,
    /// Symmetric uncertainty
    pub error: f64,
}

impl Measurement {
    /// A value with its uncertainty
    pub const fn new(value: f64, error: f64) -> Self {
        Measurement { value, error }
    }

    /// `value / error`, or 0 if the error is 0
    pub fn significance(&self) -> f64 {
        if self.error == 0.0 {
            0.0
        } else {
            self.value / self.error
        }
    }

    fn decimals(&self) -> usize {
        if self.error < 0.01 { 4 } else { 2 }
    }

    /// `value #pm error` with the precision given by the error
    pub fn format(&self) -> String {
        let d = self.decimals();
        format!("{:.*} #pm {:.*}", d, self.value, d, self.error)
    }
}

/// A fit result, as produced by an external fitter
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FitSummary {
    /// Chi-square of the fit
    pub chi2: f64,
    /// Number of degrees of freedom. Zero is treated as unknown.
    pub ndf: Option<u32>,
    /// Fitted signal yield
    pub signal: Option<Measurement>,
    /// Fitted background yield
    pub background: Option<Measurement>,
    /// Named fit and nuisance parameters, in display order
    pub parameters: Vec<(String, Measurement)>,
}

impl FitSummary {
    /// A summary with only a chi-square
    pub fn new(chi2: f64) -> Self {
        FitSummary {
            chi2,
            ..Default::default()
        }
    }

    /// Set the degrees of freedom and return self for chaining
    pub fn with_ndf(self, ndf: u32) -> Self {
        Self {
            ndf: Some(ndf),
            ..self
        }
    }

    /// Set the signal yield and return self for chaining
    pub fn with_signal(self, value: f64, error: f64) -> Self {
        Self {
            signal: Some(Measurement::new(value, error)),
            ..self
        }
    }

    /// Set the background yield and return self for chaining
    pub fn with_background(self, value: f64, error: f64) -> Self {
        Self {
            background: Some(Measurement::new(value, error)),
            ..self
        }
    }

    /// Append a parameter and return self for chaining
    pub fn with_parameter(mut self, name: &str, value: f64, error: f64) -> Self {
        self.parameters
            .push((name.to_string(), Measurement::new(value, error)));
        self
    }
}

/// Probability of a chi-square at least as large as `chi2` with `ndf` degrees of freedom
pub fn p_value(chi2: f64, ndf: u32) -> Option<f64> {
    let dist = ChiSquared::new(ndf as f64).ok()?;
    Some(dist.sf(chi2.max(0.0)))
}

fn quality_lines(chi2: f64, ndf: Option<u32>) -> Vec<String> {
    let mut lines = vec![format!("#chi^{{2}} = {:.2}", chi2)];
    if let Some(ndf) = ndf.filter(|n| *n > 0) {
        lines.push(format!(
            "#chi^{{2}}/NDF = {:.2}/{} = {:.2}",
            chi2,
            ndf,
            chi2 / ndf as f64
        ));
        if let Some(p) = p_value(chi2, ndf) {
            lines.push(format!("p-value = {:.4}", p));
        }
    }
    lines
}

/// The text lines summarizing a fit result
pub fn fit_summary_lines(fit: &FitSummary) -> Vec<String> {
    let mut lines = quality_lines(fit.chi2, fit.ndf);
    if let Some(sig) = &fit.signal {
        lines.push(format!("N_{{sig}} = {}", sig.format()));
        lines.push(format!("Z = {:.2}", sig.significance()));
    }
    if let Some(bkg) = &fit.background {
        lines.push(format!("N_{{bkg}} = {}", bkg.format()));
    }
    for (name, m) in &fit.parameters {
        lines.push(format!("{} = {}", name, m.format()));
    }
    lines
}

/// The text lines summarizing a fitted function
pub fn func_summary_lines(func: &Func) -> Vec<String> {
    let mut lines = quality_lines(func.chi2(), Some(func.ndf()));
    for p in func.params() {
        let m = Measurement::new(p.value, p.error);
        lines.push(format!("{} = {}", p.name, m.format()));
    }
    lines
}

/// Options of the summary boxes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaveOpts {
    /// Rectangle of the box, in NDC
    pub rect: NdcRect,
    /// Text size of the lines
    pub text_size: f32,
}

impl Default for PaveOpts {
    fn default() -> Self {
        PaveOpts {
            rect: defaults::fit_box_rect(),
            text_size: defaults::FIT_BOX_TEXT_SIZE,
        }
    }
}

impl PaveOpts {
    /// Set the box rectangle and return self for chaining
    pub fn with_rect(self, rect: NdcRect) -> Self {
        Self { rect, ..self }
    }

    /// Set the text size and return self for chaining
    pub fn with_text_size(self, text_size: f32) -> Self {
        Self { text_size, ..self }
    }
}

fn draw_lines(pad: &mut Pad, lines: Vec<String>, opts: &PaveOpts) -> usize {
    pad.draw(PaveText {
        rect: opts.rect,
        lines,
        text_font: defaults::TEXT_FONT,
        text_size: opts.text_size,
        border_size: 0,
        fill: FillAtt::transparent(),
    })
}

/// Draw the summary of a fit result onto `pad`
pub fn draw_fit_summary(pad: &mut Pad, fit: &FitSummary, opts: &PaveOpts) -> usize {
    draw_lines(pad, fit_summary_lines(fit), opts)
}

/// Draw the summary of a fitted function onto `pad`
pub fn draw_func_summary(pad: &mut Pad, func: &Func, opts: &PaveOpts) -> usize {
    draw_lines(pad, func_summary_lines(func), opts)
}
