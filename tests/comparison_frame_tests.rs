use approx::assert_relative_eq;
use conduction_plot::api::{
    AxisLabels, ComparisonStyle, PlotArea, PlotBounds, build_comparison_frame,
    project_curve_segments,
};
use conduction_plot::core::{
    DiscretePoint, LinearScale, ScenarioParameters, Viewport, evaluate,
};
use conduction_plot::render::{TextHAlign, TextOrientation};
use conduction_plot::{PipelineStage, PlotError};

fn scenario_a_points() -> Vec<DiscretePoint> {
    vec![
        DiscretePoint::new(0.0, 100.0),
        DiscretePoint::new(0.005, 200.0),
        DiscretePoint::new(0.0125, 256.25),
        DiscretePoint::new(0.015, 250.0),
        DiscretePoint::new(0.02, 200.0),
    ]
}

#[test]
fn frame_contains_curve_markers_and_labels() {
    let curve = evaluate(&ScenarioParameters::reference_a(), 100).expect("evaluate");
    let points = scenario_a_points();
    let style = ComparisonStyle::default();
    let frame = build_comparison_frame(
        &curve,
        &points,
        &AxisLabels::default(),
        &style,
        Viewport::new(800, 600),
    )
    .expect("frame");
    frame.validate().expect("frame is drawable");

    // one marker per solver point plus the legend swatch
    assert_eq!(frame.circles.len(), points.len() + 1);

    let curve_lines = frame
        .lines
        .iter()
        .filter(|line| line.color == style.analytical_line_color)
        .count();
    // 99 segments plus the legend swatch
    assert_eq!(curve_lines, 100);

    let texts: Vec<&str> = frame.texts.iter().map(|text| text.text.as_str()).collect();
    for expected in ["x (m)", "Temperature (Celsius)", "Analytical", "FVM"] {
        assert!(texts.contains(&expected), "missing label {expected}");
    }

    let y_title = frame
        .texts
        .iter()
        .find(|text| text.text == "Temperature (Celsius)")
        .expect("y title");
    assert_eq!(y_title.orientation, TextOrientation::VerticalUp);
}

#[test]
fn markers_land_inside_the_plot_area() {
    let curve = evaluate(&ScenarioParameters::reference_a(), 50).expect("evaluate");
    let points = scenario_a_points();
    let style = ComparisonStyle::default();
    let viewport = Viewport::new(1024, 640);
    let area = PlotArea::for_viewport(viewport, &style).expect("area");
    let frame =
        build_comparison_frame(&curve, &points, &AxisLabels::default(), &style, viewport)
            .expect("frame");

    for marker in &frame.circles[..points.len()] {
        assert!(marker.x >= area.left && marker.x <= area.right);
        assert!(marker.y >= area.top && marker.y <= area.bottom);
    }
    assert_relative_eq!(frame.circles[0].x, area.left, epsilon = 1e-9);
    assert_relative_eq!(frame.circles[4].x, area.right, epsilon = 1e-9);
    // the hottest sample is drawn highest
    let top_marker = frame.circles[..points.len()]
        .iter()
        .min_by(|a, b| a.y.total_cmp(&b.y))
        .expect("markers");
    assert_relative_eq!(top_marker.x, frame.circles[2].x);
}

#[test]
fn legend_and_grid_can_be_turned_off() {
    let curve = evaluate(&ScenarioParameters::reference_b(), 10).expect("evaluate");
    let points = vec![DiscretePoint::new(0.25, 300.0)];
    let style = ComparisonStyle {
        show_legend: false,
        show_grid: false,
        ..ComparisonStyle::default()
    };
    let frame = build_comparison_frame(
        &curve,
        &points,
        &AxisLabels::default(),
        &style,
        Viewport::new(640, 480),
    )
    .expect("frame");

    assert_eq!(frame.circles.len(), 1);
    assert_eq!(frame.rects.len(), 1);
    // 9 curve segments and 4 border lines
    assert_eq!(frame.lines.len(), 13);
    assert!(!frame.texts.iter().any(|text| text.text == "FVM"));
}

#[test]
fn empty_solver_output_still_plots_the_curve() {
    let curve = evaluate(&ScenarioParameters::reference_b(), 20).expect("evaluate");
    let frame = build_comparison_frame(
        &curve,
        &[],
        &AxisLabels::default(),
        &ComparisonStyle::default(),
        Viewport::default(),
    )
    .expect("frame");

    assert_eq!(frame.circles.len(), 1);
    assert!(!frame.is_empty());
}

#[test]
fn tick_labels_are_aligned_to_their_axes() {
    let curve = evaluate(&ScenarioParameters::reference_b(), 20).expect("evaluate");
    let frame = build_comparison_frame(
        &curve,
        &[],
        &AxisLabels::default(),
        &ComparisonStyle::default(),
        Viewport::default(),
    )
    .expect("frame");

    assert!(frame.texts.iter().any(|text| text.h_align == TextHAlign::Right));
    assert!(frame.texts.iter().any(|text| text.text == "0.5"));
}

#[test]
fn bounds_pad_the_temperature_range() {
    let curve = evaluate(&ScenarioParameters::reference_b(), 10).expect("evaluate");
    let bounds = PlotBounds::from_series(&curve, &[], &ComparisonStyle::default())
        .expect("bounds");

    assert_eq!(bounds.position, (0.0, 0.5));
    assert_relative_eq!(bounds.temperature.0, 80.0, max_relative = 1e-12);
    assert_relative_eq!(bounds.temperature.1, 520.0, max_relative = 1e-12);
}

#[test]
fn flat_profile_gets_a_minimum_span() {
    let curve = evaluate(&ScenarioParameters::dirichlet(1.0, 20.0, 20.0), 10).expect("evaluate");
    let bounds = PlotBounds::from_series(&curve, &[], &ComparisonStyle::default())
        .expect("bounds");
    assert!(bounds.temperature.1 - bounds.temperature.0 >= 1.0);
    assert!(bounds.temperature.0 < 20.0 && bounds.temperature.1 > 20.0);
}

#[test]
fn curve_projection_needs_two_samples() {
    let style = ComparisonStyle::default();
    let x_scale = LinearScale::new(0.0, 0.02, 0.0, 100.0).expect("x scale");
    let y_scale = LinearScale::new(0.0, 300.0, 100.0, 0.0).expect("y scale");

    let single = evaluate(&ScenarioParameters::reference_a(), 1).expect("evaluate");
    assert!(
        project_curve_segments(&single, x_scale, y_scale, &style)
            .expect("project")
            .is_empty()
    );

    let pair = evaluate(&ScenarioParameters::reference_a(), 2).expect("evaluate");
    let segments = project_curve_segments(&pair, x_scale, y_scale, &style).expect("project");
    assert_eq!(segments.len(), 1);
    assert_relative_eq!(segments[0].x2, 100.0);
}

#[test]
fn too_small_viewport_is_rejected() {
    let curve = evaluate(&ScenarioParameters::reference_a(), 10).expect("evaluate");
    let style = ComparisonStyle::default();

    for viewport in [Viewport::new(0, 0), Viewport::new(90, 600), Viewport::new(800, 90)] {
        let err = build_comparison_frame(
            &curve,
            &scenario_a_points(),
            &AxisLabels::default(),
            &style,
            viewport,
        )
        .expect_err("viewport too small");
        assert!(matches!(err, PlotError::InvalidViewport { .. }));
        assert_eq!(err.stage(), PipelineStage::Render);
    }
}

#[test]
fn invalid_style_is_rejected() {
    let curve = evaluate(&ScenarioParameters::reference_a(), 10).expect("evaluate");
    let style = ComparisonStyle {
        marker_radius_px: 0.0,
        ..ComparisonStyle::default()
    };
    let err = build_comparison_frame(
        &curve,
        &[],
        &AxisLabels::default(),
        &style,
        Viewport::default(),
    )
    .expect_err("zero radius");
    assert!(matches!(err, PlotError::InvalidData(_)));
}
