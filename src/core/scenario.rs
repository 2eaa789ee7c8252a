use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};

/// How the linear part of the profile is pinned down.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "form", rename_all = "snake_case")]
pub enum BoundaryProfile {
    /// Fixed temperatures at `x = 0` and `x = L`.
    Dirichlet {
        boundary_temperature_left: f64,
        boundary_temperature_right: f64,
    },
    /// Explicit `T = slope·x + intercept` before any source contribution.
    SlopeIntercept { slope: f64, intercept: f64 },
}

/// Closed-form problem definition for steady 1D conduction with a uniform
/// volumetric source.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioParameters {
    /// Rod length `L` in metres.
    pub domain_length: f64,
    pub boundary: BoundaryProfile,
    /// Thermal conductivity `k` in W/(m·K). Only required when a source is present.
    #[serde(default)]
    pub thermal_conductivity: Option<f64>,
    /// Volumetric heat generation `q` in W/m³.
    #[serde(default)]
    pub volumetric_heat_source: f64,
}

impl ScenarioParameters {
    #[must_use]
    pub fn dirichlet(
        domain_length: f64,
        boundary_temperature_left: f64,
        boundary_temperature_right: f64,
    ) -> Self {
        Self {
            domain_length,
            boundary: BoundaryProfile::Dirichlet {
                boundary_temperature_left,
                boundary_temperature_right,
            },
            thermal_conductivity: None,
            volumetric_heat_source: 0.0,
        }
    }

    #[must_use]
    pub fn slope_intercept(domain_length: f64, slope: f64, intercept: f64) -> Self {
        Self {
            domain_length,
            boundary: BoundaryProfile::SlopeIntercept { slope, intercept },
            thermal_conductivity: None,
            volumetric_heat_source: 0.0,
        }
    }

    #[must_use]
    pub fn with_heat_source(
        mut self,
        thermal_conductivity: f64,
        volumetric_heat_source: f64,
    ) -> Self {
        self.thermal_conductivity = Some(thermal_conductivity);
        self.volumetric_heat_source = volumetric_heat_source;
        self
    }

    /// 2 cm plate, 100 °C / 200 °C faces, k = 0.5 W/(m·K), q = 1 MW/m³.
    #[must_use]
    pub fn reference_a() -> Self {
        Self::dirichlet(0.02, 100.0, 200.0).with_heat_source(0.5, 1e6)
    }

    /// 0.5 m rod without source, literal `T = 800·x + 100`.
    #[must_use]
    pub fn reference_b() -> Self {
        Self::slope_intercept(0.5, 800.0, 100.0)
    }

    /// Same field as [`Self::reference_b`] expressed through boundary temperatures.
    #[must_use]
    pub fn reference_b_dirichlet() -> Self {
        Self::dirichlet(0.5, 100.0, 500.0)
    }

    pub fn from_json_str(raw: &str) -> PlotResult<Self> {
        let params: Self = serde_json::from_str(raw).map_err(|err| {
            PlotError::invalid_parameter(
                "scenario",
                "<json>",
                format!("a valid scenario document ({err})"),
            )
        })?;
        params.validate()?;
        Ok(params)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> PlotResult<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|err| {
            PlotError::invalid_parameter(
                "scenario_file",
                path.display(),
                format!("a readable scenario file ({err})"),
            )
        })?;
        let params: Self = serde_json::from_str(&raw).map_err(|err| {
            PlotError::invalid_parameter(
                "scenario_file",
                path.display(),
                format!("a valid scenario document ({err})"),
            )
        })?;
        params.validate()?;
        Ok(params)
    }

    /// Checks the invariants that make the closed form well defined.
    pub fn validate(&self) -> PlotResult<()> {
        if !self.domain_length.is_finite() || self.domain_length <= 0.0 {
            return Err(PlotError::invalid_parameter(
                "domain_length",
                self.domain_length,
                "a finite length > 0 m",
            ));
        }

        match self.boundary {
            BoundaryProfile::Dirichlet {
                boundary_temperature_left,
                boundary_temperature_right,
            } => {
                ensure_finite("boundary_temperature_left", boundary_temperature_left)?;
                ensure_finite("boundary_temperature_right", boundary_temperature_right)?;
            }
            BoundaryProfile::SlopeIntercept { slope, intercept } => {
                ensure_finite("slope", slope)?;
                ensure_finite("intercept", intercept)?;
            }
        }

        ensure_finite("volumetric_heat_source", self.volumetric_heat_source)?;

        match self.thermal_conductivity {
            Some(k) if !k.is_finite() || k <= 0.0 => Err(PlotError::invalid_parameter(
                "thermal_conductivity",
                k,
                "a finite conductivity > 0 W/(m·K)",
            )),
            None if self.volumetric_heat_source != 0.0 => Err(PlotError::invalid_parameter(
                "thermal_conductivity",
                "none",
                format!(
                    "a conductivity > 0 W/(m·K) when volumetric_heat_source = {}",
                    self.volumetric_heat_source
                ),
            )),
            _ => Ok(()),
        }
    }
}

fn ensure_finite(name: &'static str, value: f64) -> PlotResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(PlotError::invalid_parameter(name, value, "a finite number"))
    }
}

/// Built-in scenario picked from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScenarioSelector {
    #[default]
    A,
    B,
}

impl ScenarioSelector {
    #[must_use]
    pub fn parameters(self) -> ScenarioParameters {
        match self {
            Self::A => ScenarioParameters::reference_a(),
            Self::B => ScenarioParameters::reference_b(),
        }
    }
}

impl FromStr for ScenarioSelector {
    type Err = PlotError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "a" => Ok(Self::A),
            "b" => Ok(Self::B),
            _ => Err(PlotError::invalid_parameter("scenario", raw, "`a` or `b`")),
        }
    }
}
