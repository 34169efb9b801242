//! Core value types shared by the loader, the test engine, and the renderers.

/// Alternative hypothesis for the two-sample test
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alternative {
    /// Two-sided: the group means differ in either direction
    TwoSided,
    /// One-sided: the group 2 mean is greater than the group 1 mean
    Greater,
}

impl Alternative {
    /// Human-readable label used in reports
    pub fn label(&self) -> &'static str {
        match self {
            Alternative::TwoSided => "two-sided",
            Alternative::Greater => "one-sided, group 2 > group 1",
        }
    }
}

/// One column of numeric observations, missing values already removed
#[derive(Debug, Clone)]
pub struct Sample {
    name: String,
    values: Vec<f64>,
}

impl Sample {
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// Column name this sample was drawn from
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of valid observations
    pub fn n(&self) -> usize {
        self.values.len()
    }

    /// Arithmetic mean (NaN when empty)
    pub fn mean(&self) -> f64 {
        self.values.iter().sum::<f64>() / self.values.len() as f64
    }

    /// Unbiased sample variance with n - 1 denominator (NaN when n < 2)
    pub fn variance(&self) -> f64 {
        if self.values.len() < 2 {
            return f64::NAN;
        }
        let n = self.values.len() as f64;
        let mean = self.mean();
        self.values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_statistics() {
        let s = Sample::new("x", vec![1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(s.n(), 5);
        assert!((s.mean() - 3.0).abs() < 1e-12);
        assert!((s.variance() - 2.5).abs() < 1e-12);
    }

    #[test]
    fn test_empty_sample_is_nan() {
        let s = Sample::new("x", vec![]);
        assert!(s.mean().is_nan());
        assert!(s.variance().is_nan());
    }

    #[test]
    fn test_single_value_variance_is_nan() {
        let s = Sample::new("x", vec![7.0]);
        assert!((s.mean() - 7.0).abs() < 1e-12);
        assert!(s.variance().is_nan());
    }
}
