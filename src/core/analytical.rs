//! Closed-form steady-state temperature field for 1D conduction.
//!
//! With constant conductivity `k` and a uniform volumetric source `q`, the
//! governing equation `d/dx(k dT/dx) + q = 0` integrates to
//!
//! ```text
//! T(x) = ((T_R - T_L) / L + q / (2k) · (L - x)) · x + T_L
//! ```
//!
//! which collapses to linear interpolation when `q = 0`. Both boundary forms
//! accepted by [`ScenarioParameters`] reduce to the same three coefficients, so
//! a single evaluator serves every scenario.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::scenario::{BoundaryProfile, ScenarioParameters};
use crate::core::types::ProfileSample;
use crate::error::{PlotError, PlotResult};

/// Grid density used when the caller does not ask for a specific one.
pub const DEFAULT_SAMPLE_COUNT: usize = 100;

/// Reduced form `T(x) = (gradient + curvature·(L − x))·x + offset`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfileCoefficients {
    pub gradient: f64,
    pub offset: f64,
    /// `q / (2k)`; zero for source-free problems.
    pub curvature: f64,
    pub domain_length: f64,
}

impl ProfileCoefficients {
    pub fn from_parameters(params: &ScenarioParameters) -> PlotResult<Self> {
        params.validate()?;

        let length = params.domain_length;
        let (gradient, offset) = match params.boundary {
            BoundaryProfile::Dirichlet {
                boundary_temperature_left,
                boundary_temperature_right,
            } => (
                (boundary_temperature_right - boundary_temperature_left) / length,
                boundary_temperature_left,
            ),
            BoundaryProfile::SlopeIntercept { slope, intercept } => (slope, intercept),
        };

        let curvature = match params.thermal_conductivity {
            Some(k) => params.volumetric_heat_source / (2.0 * k),
            None => 0.0,
        };

        Ok(Self {
            gradient,
            offset,
            curvature,
            domain_length: length,
        })
    }

    #[must_use]
    pub fn temperature_at(self, position: f64) -> f64 {
        (self.gradient + self.curvature * (self.domain_length - position)) * position + self.offset
    }

    #[must_use]
    pub fn is_linear(self) -> bool {
        self.curvature == 0.0
    }
}

/// Exact profile sampled on a uniform grid over `[0, L]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticalCurve {
    coefficients: ProfileCoefficients,
    samples: Vec<ProfileSample>,
}

impl AnalyticalCurve {
    #[must_use]
    pub fn coefficients(&self) -> ProfileCoefficients {
        self.coefficients
    }

    #[must_use]
    pub fn samples(&self) -> &[ProfileSample] {
        &self.samples
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[must_use]
    pub fn into_samples(self) -> Vec<ProfileSample> {
        self.samples
    }
}

/// Samples the exact temperature field at `sample_count` evenly spaced
/// positions, both endpoints included.
///
/// `sample_count == 1` yields the single sample at `x = 0`.
pub fn evaluate(params: &ScenarioParameters, sample_count: usize) -> PlotResult<AnalyticalCurve> {
    if sample_count == 0 {
        return Err(PlotError::invalid_parameter(
            "sample_count",
            sample_count,
            "at least 1 sample",
        ));
    }

    let coefficients = ProfileCoefficients::from_parameters(params)?;
    let samples: Vec<ProfileSample> = uniform_grid(coefficients.domain_length, sample_count)
        .into_iter()
        .map(|x| ProfileSample::new(x, coefficients.temperature_at(x)))
        .collect();

    debug!(
        sample_count,
        gradient = coefficients.gradient,
        offset = coefficients.offset,
        curvature = coefficients.curvature,
        "evaluated analytical profile"
    );

    Ok(AnalyticalCurve {
        coefficients,
        samples,
    })
}

/// Evenly spaced positions over `[0, length]`.
///
/// The last position is pinned to `length` so accumulated rounding never
/// moves the right boundary.
#[must_use]
pub fn uniform_grid(length: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![0.0],
        _ => {
            let step = length / (count - 1) as f64;
            let mut grid: Vec<f64> = (0..count).map(|index| index as f64 * step).collect();
            grid[count - 1] = length;
            grid
        }
    }
}
