mod comparison;
mod pipeline;
mod presenter;
mod render_style;

pub use comparison::{
    AxisLabels, PlotArea, PlotBounds, build_comparison_frame, project_curve_segments,
};
pub use pipeline::{
    DEFAULT_RESULTS_PATH, PipelineConfig, PipelineReport, PresentationTarget,
    ensure_points_in_domain, presenter_for_target, run_pipeline, run_with_presenter,
};
#[cfg(feature = "cairo-backend")]
pub use presenter::PngPresenter;
pub use presenter::{FramePresenter, Presenter, UnavailablePresenter};
pub use render_style::ComparisonStyle;
