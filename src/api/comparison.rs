//! Builds the analytical-vs-FVM comparison scene.
//!
//! The builder is deterministic and side-effect free: the same curve, points,
//! labels, style and viewport always produce the same `RenderFrame`, which is
//! then handed to whichever backend presents it.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::axis_ticks::{
    AXIS_X_TARGET_SPACING_PX, AXIS_Y_TARGET_SPACING_PX, axis_tick_target_count, format_tick,
    nice_ticks,
};
use crate::core::{AnalyticalCurve, DiscretePoint, LinearScale, Viewport};
use crate::error::{PlotError, PlotResult};
use crate::render::{
    CirclePrimitive, LinePrimitive, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive,
};

use super::ComparisonStyle;

const TICK_LABEL_GAP_PX: f64 = 6.0;
const AXIS_TITLE_GAP_PX: f64 = 12.0;
const OUTER_PADDING_PX: f64 = 8.0;
const LEGEND_SWATCH_PX: f64 = 24.0;
const LEGEND_GAP_PX: f64 = 8.0;
const LEGEND_ITEM_GAP_PX: f64 = 20.0;
// no text metrics at frame-build time; good enough for sans fonts
const APPROX_GLYPH_WIDTH_RATIO: f64 = 0.6;

/// Axis titles and legend entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisLabels {
    pub x_axis: String,
    pub y_axis: String,
    pub analytical_series: String,
    pub discrete_series: String,
}

impl Default for AxisLabels {
    fn default() -> Self {
        Self {
            x_axis: "x (m)".to_owned(),
            y_axis: "Temperature (Celsius)".to_owned(),
            analytical_series: "Analytical".to_owned(),
            discrete_series: "FVM".to_owned(),
        }
    }
}

/// Data-space extent shown in the plot area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotBounds {
    pub position: (f64, f64),
    pub temperature: (f64, f64),
}

impl PlotBounds {
    /// Covers `[0, L]`, every discrete point, and both series' temperatures
    /// with the style's padding.
    pub fn from_series(
        curve: &AnalyticalCurve,
        points: &[DiscretePoint],
        style: &ComparisonStyle,
    ) -> PlotResult<Self> {
        let positions = curve
            .samples()
            .iter()
            .map(|sample| sample.position)
            .chain(points.iter().map(|point| point.position));
        let temperatures = curve
            .samples()
            .iter()
            .map(|sample| sample.temperature)
            .chain(points.iter().map(|point| point.temperature));

        let (position_min, position_max) = min_max(positions)
            .map(|(min, max)| (min.min(0.0), max.max(curve.coefficients().domain_length)))
            .unwrap_or((0.0, curve.coefficients().domain_length));
        let (temperature_min, temperature_max) = min_max(temperatures).ok_or_else(|| {
            PlotError::InvalidData("comparison needs at least one temperature sample".to_owned())
        })?;

        let mut low = temperature_min;
        let mut high = temperature_max;
        if high - low < style.min_temperature_span {
            let center = (low + high) / 2.0;
            low = center - style.min_temperature_span / 2.0;
            high = center + style.min_temperature_span / 2.0;
        }
        let padding = (high - low) * style.temperature_padding_ratio;

        Ok(Self {
            position: (position_min, position_max),
            temperature: (low - padding, high + padding),
        })
    }
}

fn min_max(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values.fold(None, |acc, value| match acc {
        None => Some((value, value)),
        Some((min, max)) => Some((min.min(value), max.max(value))),
    })
}

/// Pixel rectangle holding the data (inside the axes).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl PlotArea {
    pub fn for_viewport(viewport: Viewport, style: &ComparisonStyle) -> PlotResult<Self> {
        let area = Self {
            left: style.plot_inset_left_px,
            top: style.plot_inset_top_px,
            right: f64::from(viewport.width) - style.plot_inset_right_px,
            bottom: f64::from(viewport.height) - style.plot_inset_bottom_px,
        };
        if !viewport.is_valid() || area.right <= area.left || area.bottom <= area.top {
            return Err(PlotError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        Ok(area)
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.bottom - self.top
    }
}

/// Builds the comparison scene: grid, axes, analytical line, FVM markers,
/// axis titles and legend.
pub fn build_comparison_frame(
    curve: &AnalyticalCurve,
    points: &[DiscretePoint],
    labels: &AxisLabels,
    style: &ComparisonStyle,
    viewport: Viewport,
) -> PlotResult<RenderFrame> {
    style.validate()?;
    let area = PlotArea::for_viewport(viewport, style)?;
    let bounds = PlotBounds::from_series(curve, points, style)?;

    let x_scale = LinearScale::new(bounds.position.0, bounds.position.1, area.left, area.right)?;
    let y_scale = LinearScale::new(
        bounds.temperature.0,
        bounds.temperature.1,
        area.bottom,
        area.top,
    )?;

    let mut frame = RenderFrame::new(viewport)
        .with_rect(RectPrimitive::new(
            0.0,
            0.0,
            f64::from(viewport.width),
            f64::from(viewport.height),
            style.background_color,
        ));

    push_grid_and_ticks(&mut frame, area, x_scale, y_scale, style)?;
    push_axis_border(&mut frame, area, style);

    frame
        .lines
        .extend(project_curve_segments(curve, x_scale, y_scale, style)?);
    for point in points {
        frame.circles.push(CirclePrimitive::new(
            x_scale.domain_to_pixel(point.position)?,
            y_scale.domain_to_pixel(point.temperature)?,
            style.marker_radius_px,
            style.marker_color,
        ));
    }

    push_axis_titles(&mut frame, area, labels, style);
    if style.show_legend {
        push_legend(&mut frame, area, labels, style);
    }

    debug!(
        lines = frame.lines.len(),
        circles = frame.circles.len(),
        texts = frame.texts.len(),
        "built comparison frame"
    );
    Ok(frame)
}

/// Projects the analytical samples into connected pixel segments.
pub fn project_curve_segments(
    curve: &AnalyticalCurve,
    x_scale: LinearScale,
    y_scale: LinearScale,
    style: &ComparisonStyle,
) -> PlotResult<Vec<LinePrimitive>> {
    let samples = curve.samples();
    if samples.len() < 2 {
        return Ok(Vec::new());
    }

    let mut mapped = Vec::with_capacity(samples.len());
    for sample in samples {
        mapped.push((
            x_scale.domain_to_pixel(sample.position)?,
            y_scale.domain_to_pixel(sample.temperature)?,
        ));
    }

    Ok(mapped
        .windows(2)
        .map(|pair| {
            LinePrimitive::new(
                pair[0].0,
                pair[0].1,
                pair[1].0,
                pair[1].1,
                style.analytical_line_width_px,
                style.analytical_line_color,
            )
        })
        .collect())
}

fn push_grid_and_ticks(
    frame: &mut RenderFrame,
    area: PlotArea,
    x_scale: LinearScale,
    y_scale: LinearScale,
    style: &ComparisonStyle,
) -> PlotResult<()> {
    let x_count = axis_tick_target_count(area.width(), AXIS_X_TARGET_SPACING_PX);
    let (x_ticks, x_step) = nice_ticks(x_scale.domain(), x_count);
    for tick in x_ticks {
        let x = x_scale.domain_to_pixel(tick)?;
        if style.show_grid {
            frame.lines.push(LinePrimitive::new(
                x,
                area.top,
                x,
                area.bottom,
                style.grid_line_width_px,
                style.grid_line_color,
            ));
        }
        frame.texts.push(TextPrimitive::new(
            format_tick(tick, x_step),
            x,
            area.bottom + TICK_LABEL_GAP_PX,
            style.tick_label_font_size_px,
            style.tick_label_color,
            TextHAlign::Center,
        ));
    }

    let y_count = axis_tick_target_count(area.height(), AXIS_Y_TARGET_SPACING_PX);
    let (y_ticks, y_step) = nice_ticks(y_scale.domain(), y_count);
    for tick in y_ticks {
        let y = y_scale.domain_to_pixel(tick)?;
        if style.show_grid {
            frame.lines.push(LinePrimitive::new(
                area.left,
                y,
                area.right,
                y,
                style.grid_line_width_px,
                style.grid_line_color,
            ));
        }
        frame.texts.push(TextPrimitive::new(
            format_tick(tick, y_step),
            area.left - TICK_LABEL_GAP_PX,
            y - style.tick_label_font_size_px / 2.0,
            style.tick_label_font_size_px,
            style.tick_label_color,
            TextHAlign::Right,
        ));
    }

    Ok(())
}

fn push_axis_border(frame: &mut RenderFrame, area: PlotArea, style: &ComparisonStyle) {
    let corners = [
        (area.left, area.top),
        (area.right, area.top),
        (area.right, area.bottom),
        (area.left, area.bottom),
    ];
    for index in 0..corners.len() {
        let (x1, y1) = corners[index];
        let (x2, y2) = corners[(index + 1) % corners.len()];
        frame.lines.push(LinePrimitive::new(
            x1,
            y1,
            x2,
            y2,
            style.axis_border_width_px,
            style.axis_border_color,
        ));
    }
}

fn push_axis_titles(
    frame: &mut RenderFrame,
    area: PlotArea,
    labels: &AxisLabels,
    style: &ComparisonStyle,
) {
    if !labels.x_axis.is_empty() {
        frame.texts.push(TextPrimitive::new(
            labels.x_axis.clone(),
            (area.left + area.right) / 2.0,
            area.bottom + TICK_LABEL_GAP_PX + style.tick_label_font_size_px + AXIS_TITLE_GAP_PX,
            style.axis_title_font_size_px,
            style.axis_title_color,
            TextHAlign::Center,
        ));
    }
    if !labels.y_axis.is_empty() {
        frame.texts.push(
            TextPrimitive::new(
                labels.y_axis.clone(),
                OUTER_PADDING_PX,
                (area.top + area.bottom) / 2.0,
                style.axis_title_font_size_px,
                style.axis_title_color,
                TextHAlign::Center,
            )
            .vertical(),
        );
    }
}

/// Legend row centred in the top inset, so it never overlaps the data.
fn push_legend(
    frame: &mut RenderFrame,
    area: PlotArea,
    labels: &AxisLabels,
    style: &ComparisonStyle,
) {
    let font = style.legend_font_size_px;
    let text_width = |text: &str| text.chars().count() as f64 * font * APPROX_GLYPH_WIDTH_RATIO;
    let box_height = font + 2.0 * LEGEND_GAP_PX;
    let box_width = LEGEND_GAP_PX
        + LEGEND_SWATCH_PX
        + LEGEND_GAP_PX
        + text_width(&labels.analytical_series)
        + LEGEND_ITEM_GAP_PX
        + LEGEND_SWATCH_PX
        + LEGEND_GAP_PX
        + text_width(&labels.discrete_series)
        + LEGEND_GAP_PX;

    let box_x = area.left + (area.width() - box_width).max(0.0) / 2.0;
    let box_y = ((area.top - box_height) / 2.0).max(0.0);
    let center_y = box_y + box_height / 2.0;
    let text_y = center_y - font / 2.0;

    frame.rects.push(
        RectPrimitive::new(box_x, box_y, box_width, box_height, style.legend_box_color)
            .with_border(1.0, style.legend_border_color),
    );

    let mut cursor = box_x + LEGEND_GAP_PX;
    frame.lines.push(LinePrimitive::new(
        cursor,
        center_y,
        cursor + LEGEND_SWATCH_PX,
        center_y,
        style.analytical_line_width_px,
        style.analytical_line_color,
    ));
    cursor += LEGEND_SWATCH_PX + LEGEND_GAP_PX;
    if !labels.analytical_series.is_empty() {
        frame.texts.push(TextPrimitive::new(
            labels.analytical_series.clone(),
            cursor,
            text_y,
            font,
            style.axis_title_color,
            TextHAlign::Left,
        ));
    }
    cursor += text_width(&labels.analytical_series) + LEGEND_ITEM_GAP_PX;

    frame.circles.push(CirclePrimitive::new(
        cursor + LEGEND_SWATCH_PX / 2.0,
        center_y,
        style.marker_radius_px,
        style.marker_color,
    ));
    cursor += LEGEND_SWATCH_PX + LEGEND_GAP_PX;
    if !labels.discrete_series.is_empty() {
        frame.texts.push(TextPrimitive::new(
            labels.discrete_series.clone(),
            cursor,
            text_y,
            font,
            style.axis_title_color,
            TextHAlign::Left,
        ));
    }
}
