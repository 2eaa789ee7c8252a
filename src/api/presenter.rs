//! Presentation capability.
//!
//! Every `Presenter::show` call is synchronous: it returns once the result has
//! been handed to its sink. For the GTK window presenter that means it blocks
//! until the viewer closes the window; for image output it returns after the
//! file is written; for renderer-backed presenters it returns after the
//! renderer consumed the frame.

use crate::core::{AnalyticalCurve, DiscretePoint, Viewport};
use crate::error::{PlotError, PlotResult};
use crate::render::Renderer;

use super::{AxisLabels, ComparisonStyle, build_comparison_frame};

/// Sink that shows the analytical curve next to the solver samples.
pub trait Presenter {
    fn show(
        &mut self,
        curve: &AnalyticalCurve,
        points: &[DiscretePoint],
        labels: &AxisLabels,
    ) -> PlotResult<()>;
}

/// Presents through any [`Renderer`] at a fixed viewport.
#[derive(Debug)]
pub struct FramePresenter<R: Renderer> {
    renderer: R,
    style: ComparisonStyle,
    viewport: Viewport,
}

impl<R: Renderer> FramePresenter<R> {
    #[must_use]
    pub fn new(renderer: R, style: ComparisonStyle, viewport: Viewport) -> Self {
        Self {
            renderer,
            style,
            viewport,
        }
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}

impl<R: Renderer> Presenter for FramePresenter<R> {
    fn show(
        &mut self,
        curve: &AnalyticalCurve,
        points: &[DiscretePoint],
        labels: &AxisLabels,
    ) -> PlotResult<()> {
        let frame = build_comparison_frame(curve, points, labels, &self.style, self.viewport)?;
        self.renderer.render(&frame)
    }
}

/// Stands in for a sink that was not compiled in or cannot start.
#[derive(Debug, Clone)]
pub struct UnavailablePresenter {
    reason: String,
}

impl UnavailablePresenter {
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl Presenter for UnavailablePresenter {
    fn show(
        &mut self,
        _curve: &AnalyticalCurve,
        _points: &[DiscretePoint],
        _labels: &AxisLabels,
    ) -> PlotResult<()> {
        Err(PlotError::RenderUnavailable(self.reason.clone()))
    }
}

#[cfg(feature = "cairo-backend")]
pub use png::PngPresenter;

#[cfg(feature = "cairo-backend")]
mod png {
    use std::path::{Path, PathBuf};

    use tracing::info;

    use super::*;
    use crate::render::{CairoRenderStats, CairoRenderer};

    /// Renders offscreen with Cairo and saves the image as PNG.
    #[derive(Debug)]
    pub struct PngPresenter {
        output: PathBuf,
        style: ComparisonStyle,
        viewport: Viewport,
        last_stats: Option<CairoRenderStats>,
    }

    impl PngPresenter {
        #[must_use]
        pub fn new(output: impl Into<PathBuf>, style: ComparisonStyle, viewport: Viewport) -> Self {
            Self {
                output: output.into(),
                style,
                viewport,
                last_stats: None,
            }
        }

        #[must_use]
        pub fn output(&self) -> &Path {
            &self.output
        }

        #[must_use]
        pub fn last_stats(&self) -> Option<CairoRenderStats> {
            self.last_stats
        }
    }

    impl Presenter for PngPresenter {
        fn show(
            &mut self,
            curve: &AnalyticalCurve,
            points: &[DiscretePoint],
            labels: &AxisLabels,
        ) -> PlotResult<()> {
            let frame = build_comparison_frame(curve, points, labels, &self.style, self.viewport)?;
            let width = i32::try_from(self.viewport.width).map_err(|_| {
                PlotError::InvalidViewport {
                    width: self.viewport.width,
                    height: self.viewport.height,
                }
            })?;
            let height = i32::try_from(self.viewport.height).map_err(|_| {
                PlotError::InvalidViewport {
                    width: self.viewport.width,
                    height: self.viewport.height,
                }
            })?;

            let mut renderer = CairoRenderer::new(width, height)?;
            renderer.set_clear_color(self.style.background_color)?;
            renderer.render(&frame)?;
            renderer.write_png(&self.output)?;
            self.last_stats = Some(renderer.last_stats());

            info!(path = %self.output.display(), "wrote comparison image");
            Ok(())
        }
    }
}
