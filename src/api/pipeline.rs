use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::{
    DEFAULT_SAMPLE_COUNT, DiscretePoint, ProfileCoefficients, ScenarioParameters, Viewport,
    evaluate,
};
use crate::error::{PlotError, PlotResult};
use crate::loader;

use super::{AxisLabels, ComparisonStyle, Presenter};

/// Results location used by the reference solver runs.
pub const DEFAULT_RESULTS_PATH: &str = "build/results.csv";

const DOMAIN_TOLERANCE_RATIO: f64 = 1e-12;

/// Where the comparison ends up.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PresentationTarget {
    /// Interactive window; needs feature `gtk4-adapter`.
    #[default]
    Window,
    /// PNG image; needs feature `cairo-backend`.
    Png { path: PathBuf },
    /// Build and validate the frame without any output.
    Headless,
}

/// Everything one invocation needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub results_path: PathBuf,
    pub scenario: ScenarioParameters,
    #[serde(default = "default_sample_count")]
    pub sample_count: usize,
    #[serde(default)]
    pub labels: AxisLabels,
    #[serde(default)]
    pub style: ComparisonStyle,
    #[serde(default)]
    pub viewport: Viewport,
    #[serde(default)]
    pub target: PresentationTarget,
}

fn default_sample_count() -> usize {
    DEFAULT_SAMPLE_COUNT
}

impl PipelineConfig {
    #[must_use]
    pub fn new(scenario: ScenarioParameters) -> Self {
        Self {
            results_path: PathBuf::from(DEFAULT_RESULTS_PATH),
            scenario,
            sample_count: DEFAULT_SAMPLE_COUNT,
            labels: AxisLabels::default(),
            style: ComparisonStyle::default(),
            viewport: Viewport::default(),
            target: PresentationTarget::default(),
        }
    }

    #[must_use]
    pub fn with_results_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.results_path = path.into();
        self
    }

    #[must_use]
    pub fn with_sample_count(mut self, sample_count: usize) -> Self {
        self.sample_count = sample_count;
        self
    }

    #[must_use]
    pub fn with_target(mut self, target: PresentationTarget) -> Self {
        self.target = target;
        self
    }

    #[must_use]
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }
}

/// Summary of a successful run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipelineReport {
    pub point_count: usize,
    pub sample_count: usize,
    pub coefficients: ProfileCoefficients,
}

/// Runs load → evaluate → present with the presenter chosen by `config.target`.
pub fn run_pipeline(config: &PipelineConfig) -> PlotResult<PipelineReport> {
    let mut presenter = presenter_for_target(config);
    run_with_presenter(config, presenter.as_mut())
}

/// Runs load → evaluate → present through a caller-supplied presenter.
pub fn run_with_presenter<P: Presenter + ?Sized>(
    config: &PipelineConfig,
    presenter: &mut P,
) -> PlotResult<PipelineReport> {
    let points = loader::load(&config.results_path)?;
    info!(
        path = %config.results_path.display(),
        count = points.len(),
        "loaded solver results"
    );

    let curve = evaluate(&config.scenario, config.sample_count)?;
    ensure_points_in_domain(&points, config.scenario.domain_length)?;

    presenter.show(&curve, &points, &config.labels)?;
    info!(presentation = ?config.target, "presented comparison");

    Ok(PipelineReport {
        point_count: points.len(),
        sample_count: curve.len(),
        coefficients: curve.coefficients(),
    })
}

/// Fails on the first solver sample that lies outside `[0, domain_length]`.
pub fn ensure_points_in_domain(points: &[DiscretePoint], domain_length: f64) -> PlotResult<()> {
    let tolerance = domain_length.abs() * DOMAIN_TOLERANCE_RATIO;
    for (index, point) in points.iter().enumerate() {
        if point.position < -tolerance || point.position > domain_length + tolerance {
            return Err(PlotError::PointOutsideDomain {
                index,
                position: point.position,
                domain_length,
            });
        }
    }
    Ok(())
}

/// Picks the presenter for `config.target`, falling back to
/// [`UnavailablePresenter`] when the needed backend is not compiled in.
#[must_use]
pub fn presenter_for_target(config: &PipelineConfig) -> Box<dyn Presenter> {
    debug!(presentation = ?config.target, "selecting presenter");
    match &config.target {
        PresentationTarget::Headless => Box::new(super::FramePresenter::new(
            crate::render::NullRenderer::default(),
            config.style,
            config.viewport,
        )),
        PresentationTarget::Png { path } => png_presenter(path, config),
        PresentationTarget::Window => window_presenter(config),
    }
}

#[cfg(feature = "cairo-backend")]
fn png_presenter(path: &std::path::Path, config: &PipelineConfig) -> Box<dyn Presenter> {
    Box::new(super::PngPresenter::new(path, config.style, config.viewport))
}

#[cfg(not(feature = "cairo-backend"))]
fn png_presenter(path: &std::path::Path, _config: &PipelineConfig) -> Box<dyn Presenter> {
    Box::new(super::UnavailablePresenter::new(format!(
        "cannot write `{}`: built without feature `cairo-backend`",
        path.display()
    )))
}

#[cfg(feature = "gtk4-adapter")]
fn window_presenter(config: &PipelineConfig) -> Box<dyn Presenter> {
    Box::new(crate::platform_gtk::GtkPresenter::new(config.style, config.viewport))
}

#[cfg(not(feature = "gtk4-adapter"))]
fn window_presenter(_config: &PipelineConfig) -> Box<dyn Presenter> {
    Box::new(super::UnavailablePresenter::new(
        "interactive display needs feature `gtk4-adapter`; use --output <png> or --headless",
    ))
}
