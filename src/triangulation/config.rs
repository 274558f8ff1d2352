//! Triangulation tuning parameters and their validating builder.

use num_traits::Float;

use crate::error::{DelaunayError, Result};
use crate::tolerance::default_eps;

/// Default scale of the super-triangle relative to the input's larger
/// bounding-box dimension.
pub const DEFAULT_SUPER_TRIANGLE_MARGIN: f64 = 20.0;

/// Smallest accepted super-triangle margin.
///
/// Below this the synthetic triangle no longer encloses the bounding box.
pub const MIN_SUPER_TRIANGLE_MARGIN: f64 = 2.0;

/// Parameters for [`Triangulator`](super::Triangulator).
///
/// The defaults reproduce the reference behaviour; most callers never need to
/// change them.
///
/// # Example
///
/// ```
/// use trisweep::triangulation::TriangulationConfig;
///
/// let config: TriangulationConfig<f64> = TriangulationConfig::default();
/// assert_eq!(config.eps, 1.0 / 1_048_576.0);
/// assert_eq!(config.super_triangle_margin, 20.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangulationConfig<F> {
    /// Absolute tolerance for the horizontal-alignment test in the
    /// circumcircle construction and for the in-circle test.
    pub eps: F,

    /// Half-width of the super-triangle in units of the larger bounding-box
    /// dimension.
    ///
    /// Larger values keep the synthetic vertices further from the input,
    /// which matters for near-collinear point sets.
    pub super_triangle_margin: F,
}

impl<F: Float> Default for TriangulationConfig<F> {
    fn default() -> Self {
        Self {
            eps: default_eps(),
            super_triangle_margin: F::from(DEFAULT_SUPER_TRIANGLE_MARGIN)
                .unwrap_or_else(F::max_value),
        }
    }
}

impl<F: Float> TriangulationConfig<F> {
    /// Returns a builder starting from the default values.
    pub fn builder() -> TriangulationConfigBuilder<F> {
        TriangulationConfigBuilder::new()
    }
}

/// Builder for [`TriangulationConfig`] with validation.
///
/// ```
/// use trisweep::triangulation::TriangulationConfigBuilder;
///
/// let config = TriangulationConfigBuilder::<f64>::new()
///     .eps(1e-9)
///     .unwrap()
///     .super_triangle_margin(50.0)
///     .unwrap()
///     .build();
/// assert_eq!(config.eps, 1e-9);
///
/// assert!(TriangulationConfigBuilder::<f64>::new().eps(0.0).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct TriangulationConfigBuilder<F> {
    config: TriangulationConfig<F>,
}

impl<F: Float> TriangulationConfigBuilder<F> {
    /// Creates a new builder with default values.
    ///
    /// Defaults:
    /// - eps: 2^-20
    /// - super_triangle_margin: 20
    pub fn new() -> Self {
        Self {
            config: TriangulationConfig::default(),
        }
    }

    /// Sets the absolute tolerance.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` unless `eps` is finite and strictly positive.
    pub fn eps(mut self, eps: F) -> Result<Self> {
        if !eps.is_finite() || eps <= F::zero() {
            return Err(DelaunayError::InvalidConfig(format!(
                "eps must be finite and positive (got {:?})",
                eps.to_f64()
            )));
        }
        self.config.eps = eps;
        Ok(self)
    }

    /// Sets the super-triangle margin.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if `margin` is not finite or is below
    /// [`MIN_SUPER_TRIANGLE_MARGIN`].
    pub fn super_triangle_margin(mut self, margin: F) -> Result<Self> {
        let min = F::from(MIN_SUPER_TRIANGLE_MARGIN).unwrap_or_else(F::one);
        if !margin.is_finite() || margin < min {
            return Err(DelaunayError::InvalidConfig(format!(
                "super-triangle margin must be finite and >= {} (got {:?})",
                MIN_SUPER_TRIANGLE_MARGIN,
                margin.to_f64()
            )));
        }
        self.config.super_triangle_margin = margin;
        Ok(self)
    }

    /// Builds the configuration.
    pub fn build(self) -> TriangulationConfig<F> {
        self.config
    }
}

impl<F: Float> Default for TriangulationConfigBuilder<F> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tolerance::EPS;

    #[test]
    fn test_defaults() {
        let config: TriangulationConfig<f64> = TriangulationConfig::default();
        assert_eq!(config.eps, EPS);
        assert_eq!(config.super_triangle_margin, 20.0);

        let built = TriangulationConfig::<f64>::builder().build();
        assert_eq!(built, config);
    }

    #[test]
    fn test_defaults_f32() {
        let config: TriangulationConfig<f32> = TriangulationConfig::default();
        assert_eq!(config.eps, 1.0 / 1_048_576.0);
        assert_eq!(config.super_triangle_margin, 20.0);
    }

    #[test]
    fn test_builder_custom() {
        let config = TriangulationConfigBuilder::<f64>::new()
            .eps(1e-6)
            .unwrap()
            .super_triangle_margin(100.0)
            .unwrap()
            .build();
        assert_eq!(config.eps, 1e-6);
        assert_eq!(config.super_triangle_margin, 100.0);
    }

    #[test]
    fn test_builder_invalid_eps() {
        let builder = TriangulationConfigBuilder::<f64>::new();
        assert!(builder.clone().eps(0.0).is_err());
        assert!(builder.clone().eps(-1e-6).is_err());
        assert!(builder.clone().eps(f64::NAN).is_err());
        assert!(builder.eps(f64::INFINITY).is_err());
    }

    #[test]
    fn test_builder_invalid_margin() {
        let builder = TriangulationConfigBuilder::<f64>::new();
        assert!(builder.clone().super_triangle_margin(1.5).is_err());
        assert!(builder.clone().super_triangle_margin(f64::INFINITY).is_err());
        assert!(builder.clone().super_triangle_margin(2.0).is_ok());

        match builder.super_triangle_margin(-3.0) {
            Err(DelaunayError::InvalidConfig(msg)) => assert!(msg.contains("margin")),
            other => panic!("expected InvalidConfig, got {:?}", other),
        }
    }
}
