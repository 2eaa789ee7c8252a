//! conduction-plot: validation plots for 1D steady-state heat-conduction
//! finite-volume solvers.
//!
//! The crate loads a solver's `position,temperature` results, evaluates the
//! closed-form temperature field for the same boundary-value problem, and
//! presents both in one comparison plot.

pub mod api;
pub mod core;
pub mod error;
pub mod loader;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use crate::api::{PipelineConfig, Presenter, run_pipeline};
pub use crate::core::{AnalyticalCurve, DiscretePoint, ScenarioParameters, evaluate};
pub use crate::error::{PipelineStage, PlotError, PlotResult};
