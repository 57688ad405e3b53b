use serde::Deserialize;
use thiserror::Error;

// Multiple of sigma_d covered by the spatial window on each side
pub const SPATIAL_SIGMA_MULTIPLE: f64 = 3.0;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SmoothingParams {
    /// Spatial spread, in samples.
    pub sigma_d: f64,
    /// Range spread, in measurement units.
    pub sigma_r: f64,
    /// Half-width of the median window used by the outlier stage.
    pub outlier_half_window: usize,
}

impl SmoothingParams {
    pub fn new(sigma_d: f64, sigma_r: f64, outlier_half_window: usize) -> Result<Self, SmoothingError> {
        let params = Self { sigma_d, sigma_r, outlier_half_window };
        params.check_validity()?;

        Ok(params)
    }

    pub fn check_validity(&self) -> Result<(), SmoothingError> {
        // Written so that NaN spreads are rejected too
        if !(self.sigma_d > 0.0) || !self.sigma_d.is_finite() {
            return Err(SmoothingError::InvalidSpatialSpread { sigma_d: self.sigma_d });
        }
        if !(self.sigma_r > 0.0) || !self.sigma_r.is_finite() {
            return Err(SmoothingError::InvalidRangeSpread { sigma_r: self.sigma_r });
        }

        Ok(())
    }

    /// Number of neighbours taken on each side by the bilateral stage: floor(3 * sigma_d).
    pub fn spatial_half_window(&self) -> usize {
        (SPATIAL_SIGMA_MULTIPLE * self.sigma_d) as usize
    }
}

impl Default for SmoothingParams {
    fn default() -> Self {
        Self {
            sigma_d: 10.0,
            sigma_r: 1200.0,
            outlier_half_window: 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SmoothingError {
    #[error("spatial spread must be positive and finite, got {sigma_d}")]
    InvalidSpatialSpread { sigma_d: f64 },
    #[error("range spread must be positive and finite, got {sigma_r}")]
    InvalidRangeSpread { sigma_r: f64 },
}
