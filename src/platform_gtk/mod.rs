//! Interactive GTK4 window for the comparison plot.

use std::cell::RefCell;
use std::rc::Rc;

use gtk4 as gtk;
use gtk4::prelude::*;
use tracing::{info, warn};

use crate::api::{AxisLabels, ComparisonStyle, Presenter, build_comparison_frame};
use crate::core::{AnalyticalCurve, DiscretePoint, Viewport};
use crate::error::{PlotError, PlotResult};
use crate::render::{CairoContextRenderer, CairoRenderer};

const APPLICATION_ID: &str = "rs.conduction.plot";
const WINDOW_TITLE: &str = "Analytical vs FVM";

struct Scene {
    curve: AnalyticalCurve,
    points: Vec<DiscretePoint>,
    labels: AxisLabels,
    style: ComparisonStyle,
}

/// Opens a window with the comparison and blocks until it is closed.
///
/// The frame is rebuilt for the current widget size on every redraw, so
/// resizing keeps axes and labels laid out.
#[derive(Debug, Clone)]
pub struct GtkPresenter {
    style: ComparisonStyle,
    initial_viewport: Viewport,
}

impl GtkPresenter {
    #[must_use]
    pub fn new(style: ComparisonStyle, initial_viewport: Viewport) -> Self {
        Self {
            style,
            initial_viewport,
        }
    }
}

impl Presenter for GtkPresenter {
    fn show(
        &mut self,
        curve: &AnalyticalCurve,
        points: &[DiscretePoint],
        labels: &AxisLabels,
    ) -> PlotResult<()> {
        // reject bad input before any window appears; later redraws only log
        // failures, since a window shrunk below the plot insets recovers once
        // it is enlarged again
        build_comparison_frame(curve, points, labels, &self.style, self.initial_viewport)?;

        gtk::init().map_err(|err| {
            PlotError::RenderUnavailable(format!("cannot open a display: {err}"))
        })?;

        let scene = Rc::new(Scene {
            curve: curve.clone(),
            points: points.to_vec(),
            labels: labels.clone(),
            style: self.style,
        });
        let renderer = Rc::new(RefCell::new(CairoRenderer::new(1, 1)?));
        let width = i32::try_from(self.initial_viewport.width).unwrap_or(i32::MAX);
        let height = i32::try_from(self.initial_viewport.height).unwrap_or(i32::MAX);

        let app = gtk::Application::builder()
            .application_id(APPLICATION_ID)
            .build();
        app.connect_activate(move |app| {
            let drawing_area = gtk::DrawingArea::new();
            drawing_area.set_content_width(width);
            drawing_area.set_content_height(height);
            drawing_area.set_draw_func({
                let scene = Rc::clone(&scene);
                let renderer = Rc::clone(&renderer);
                move |_area, context, width, height| {
                    let viewport = Viewport::new(
                        u32::try_from(width.max(1)).unwrap_or(1),
                        u32::try_from(height.max(1)).unwrap_or(1),
                    );
                    let drawn = build_comparison_frame(
                        &scene.curve,
                        &scene.points,
                        &scene.labels,
                        &scene.style,
                        viewport,
                    )
                    .and_then(|frame| {
                        renderer
                            .borrow_mut()
                            .render_on_cairo_context(context, &frame)
                    });
                    // the area stays blank until a size that fits the plot
                    if let Err(err) = drawn {
                        warn!(error = %err, width, height, "skipping comparison redraw");
                    }
                }
            });

            let window = gtk::ApplicationWindow::builder()
                .application(app)
                .title(WINDOW_TITLE)
                .default_width(width)
                .default_height(height)
                .child(&drawing_area)
                .build();
            window.present();
        });

        info!("showing comparison window; blocking until it is closed");
        // process arguments belong to the CLI, not to GTK
        let exit_code = app.run_with_args::<&str>(&[]);
        if exit_code != gtk::glib::ExitCode::SUCCESS {
            return Err(PlotError::RenderUnavailable(format!(
                "display loop exited with {exit_code:?}"
            )));
        }
        Ok(())
    }
}
