use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};
use crate::render::Color;

/// Style contract for the comparison frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparisonStyle {
    pub background_color: Color,
    pub analytical_line_color: Color,
    pub analytical_line_width_px: f64,
    pub marker_color: Color,
    pub marker_radius_px: f64,
    pub grid_line_color: Color,
    pub grid_line_width_px: f64,
    pub axis_border_color: Color,
    pub axis_border_width_px: f64,
    pub tick_label_color: Color,
    pub tick_label_font_size_px: f64,
    pub axis_title_color: Color,
    pub axis_title_font_size_px: f64,
    pub legend_font_size_px: f64,
    pub legend_box_color: Color,
    pub legend_border_color: Color,
    pub show_grid: bool,
    pub show_legend: bool,
    /// Space reserved left of the plot area for tick labels and the y title.
    pub plot_inset_left_px: f64,
    pub plot_inset_right_px: f64,
    pub plot_inset_top_px: f64,
    /// Space reserved below the plot area for tick labels and the x title.
    pub plot_inset_bottom_px: f64,
    /// Fraction of the temperature span added above and below the data.
    pub temperature_padding_ratio: f64,
    /// Smallest temperature span shown, so flat profiles still get an axis.
    pub min_temperature_span: f64,
}

impl Default for ComparisonStyle {
    fn default() -> Self {
        Self {
            background_color: Color::WHITE,
            analytical_line_color: Color::rgb(0.12, 0.47, 0.71),
            analytical_line_width_px: 1.5,
            marker_color: Color::BLACK,
            marker_radius_px: 3.5,
            grid_line_color: Color::rgb(0.88, 0.88, 0.88),
            grid_line_width_px: 1.0,
            axis_border_color: Color::rgb(0.20, 0.20, 0.20),
            axis_border_width_px: 1.0,
            tick_label_color: Color::rgb(0.10, 0.12, 0.16),
            tick_label_font_size_px: 11.0,
            axis_title_color: Color::rgb(0.10, 0.12, 0.16),
            axis_title_font_size_px: 13.0,
            legend_font_size_px: 12.0,
            legend_box_color: Color::rgba(1.0, 1.0, 1.0, 0.85),
            legend_border_color: Color::rgb(0.80, 0.80, 0.80),
            show_grid: true,
            show_legend: true,
            plot_inset_left_px: 80.0,
            plot_inset_right_px: 24.0,
            plot_inset_top_px: 40.0,
            plot_inset_bottom_px: 60.0,
            temperature_padding_ratio: 0.05,
            min_temperature_span: 1.0,
        }
    }
}

impl ComparisonStyle {
    pub fn validate(&self) -> PlotResult<()> {
        for color in [
            self.background_color,
            self.analytical_line_color,
            self.marker_color,
            self.grid_line_color,
            self.axis_border_color,
            self.tick_label_color,
            self.axis_title_color,
            self.legend_box_color,
            self.legend_border_color,
        ] {
            color.validate()?;
        }

        for (name, value) in [
            ("analytical_line_width_px", self.analytical_line_width_px),
            ("marker_radius_px", self.marker_radius_px),
            ("grid_line_width_px", self.grid_line_width_px),
            ("axis_border_width_px", self.axis_border_width_px),
            ("tick_label_font_size_px", self.tick_label_font_size_px),
            ("axis_title_font_size_px", self.axis_title_font_size_px),
            ("legend_font_size_px", self.legend_font_size_px),
            ("min_temperature_span", self.min_temperature_span),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(PlotError::InvalidData(format!(
                    "style `{name}` must be finite and > 0"
                )));
            }
        }

        for (name, value) in [
            ("plot_inset_left_px", self.plot_inset_left_px),
            ("plot_inset_right_px", self.plot_inset_right_px),
            ("plot_inset_top_px", self.plot_inset_top_px),
            ("plot_inset_bottom_px", self.plot_inset_bottom_px),
            ("temperature_padding_ratio", self.temperature_padding_ratio),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(PlotError::InvalidData(format!(
                    "style `{name}` must be finite and >= 0"
                )));
            }
        }

        Ok(())
    }
}
