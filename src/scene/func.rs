/// A fitted parameter of a [`Func`]
#[derive(Debug, Clone, PartialEq)]
pub struct FuncParam {
    /// Parameter name
    pub name: String,
    /// Fitted value
    pub value: f64,
    /// Fit uncertainty
    pub error: f64,
}

/// A function after a fit: its parameters and the fit quality
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Func {
    name: String,
    params: Vec<FuncParam>,
    chi2: f64,
    ndf: u32,
}

impl Func {
    /// A function without parameters nor fit result
    pub fn new(name: &str) -> Self {
        Func {
            name: name.to_string(),
            ..Default::default()
        }
    }

    /// Function name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append a parameter and return self for chaining
    pub fn with_param(mut self, name: &str, value: f64, error: f64) -> Self {
        self.params.push(FuncParam {
            name: name.to_string(),
            value,
            error,
        });
        self
    }

    /// Set the fit quality and return self for chaining
    pub fn with_fit_quality(self, chi2: f64, ndf: u32) -> Self {
        Func { chi2, ndf, ..self }
    }

    /// The parameters, in declaration order
    pub fn params(&self) -> &[FuncParam] {
        &self.params
    }

    /// Chi-square of the last fit
    pub fn chi2(&self) -> f64 {
        self.chi2
    }

    /// Degrees of freedom of the last fit
    pub fn ndf(&self) -> u32 {
        self.ndf
    }
}
