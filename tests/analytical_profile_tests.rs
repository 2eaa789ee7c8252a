use approx::assert_relative_eq;
use conduction_plot::core::{BoundaryProfile, ScenarioParameters, evaluate, uniform_grid};
use conduction_plot::{PipelineStage, PlotError};

#[test]
fn reference_a_hits_boundaries_and_peaks_inside() {
    let curve = evaluate(&ScenarioParameters::reference_a(), 101).expect("evaluate");
    let samples = curve.samples();

    assert_eq!(samples.len(), 101);
    assert_eq!(samples[0].position, 0.0);
    assert_eq!(samples[100].position, 0.02);
    assert_relative_eq!(samples[0].temperature, 100.0, max_relative = 1e-12);
    assert_relative_eq!(samples[100].temperature, 200.0, max_relative = 1e-9);
    assert_relative_eq!(samples[50].position, 0.01, max_relative = 1e-12);
    assert_relative_eq!(samples[50].temperature, 250.0, max_relative = 1e-9);

    let coefficients = curve.coefficients();
    assert!(!coefficients.is_linear());
    assert_relative_eq!(coefficients.curvature, 1e6, max_relative = 1e-12);
    assert_relative_eq!(coefficients.gradient, 5_000.0, max_relative = 1e-12);
}

#[test]
fn reference_b_forms_describe_the_same_line() {
    let literal = evaluate(&ScenarioParameters::reference_b(), 11).expect("slope form");
    let boundary = evaluate(&ScenarioParameters::reference_b_dirichlet(), 11).expect("dirichlet");

    assert!(literal.coefficients().is_linear());
    assert!(boundary.coefficients().is_linear());
    for (a, b) in literal.samples().iter().zip(boundary.samples()) {
        assert_eq!(a.position, b.position);
        assert_relative_eq!(a.temperature, b.temperature, max_relative = 1e-12);
    }

    let last = literal.samples().last().expect("last sample");
    assert_relative_eq!(literal.samples()[0].temperature, 100.0);
    assert_relative_eq!(last.temperature, 500.0, max_relative = 1e-12);
}

#[test]
fn default_grid_has_one_hundred_samples() {
    let curve = evaluate(
        &ScenarioParameters::reference_b(),
        conduction_plot::core::DEFAULT_SAMPLE_COUNT,
    )
    .expect("evaluate");
    assert_eq!(curve.len(), 100);
    assert!(!curve.is_empty());
}

#[test]
fn single_sample_sits_on_the_left_boundary() {
    let curve = evaluate(&ScenarioParameters::reference_a(), 1).expect("evaluate");
    let samples = curve.into_samples();

    assert_eq!(samples.len(), 1);
    assert_eq!(samples[0].position, 0.0);
    assert_relative_eq!(samples[0].temperature, 100.0);
}

#[test]
fn zero_samples_is_rejected_before_evaluation() {
    let err = evaluate(&ScenarioParameters::reference_a(), 0).expect_err("zero samples");
    assert!(matches!(
        err,
        PlotError::InvalidParameter {
            name: "sample_count",
            ..
        }
    ));
    assert_eq!(err.stage(), PipelineStage::Evaluate);
}

#[test]
fn evaluation_is_repeatable() {
    let params = ScenarioParameters::reference_a();
    let first = evaluate(&params, 257).expect("first");
    let second = evaluate(&params, 257).expect("second");
    assert_eq!(first, second);
}

#[test]
fn grid_spacing_is_uniform() {
    let grid = uniform_grid(0.5, 6);
    let expected = [0.0, 0.1, 0.2, 0.3, 0.4, 0.5];
    for (got, want) in grid.iter().zip(expected) {
        assert_relative_eq!(*got, want, epsilon = 1e-15);
    }
}

#[test]
fn invalid_parameters_are_rejected() {
    let cases = [
        (ScenarioParameters::dirichlet(0.0, 1.0, 2.0), "domain_length"),
        (ScenarioParameters::dirichlet(-1.0, 1.0, 2.0), "domain_length"),
        (
            ScenarioParameters::dirichlet(f64::NAN, 1.0, 2.0),
            "domain_length",
        ),
        (
            ScenarioParameters::dirichlet(1.0, f64::INFINITY, 2.0),
            "boundary_temperature_left",
        ),
        (
            ScenarioParameters::slope_intercept(1.0, f64::NAN, 2.0),
            "slope",
        ),
        (
            ScenarioParameters::dirichlet(1.0, 1.0, 2.0).with_heat_source(0.0, 10.0),
            "thermal_conductivity",
        ),
        (
            ScenarioParameters::dirichlet(1.0, 1.0, 2.0).with_heat_source(-2.0, 10.0),
            "thermal_conductivity",
        ),
        (
            ScenarioParameters::dirichlet(1.0, 1.0, 2.0).with_heat_source(1.0, f64::NAN),
            "volumetric_heat_source",
        ),
    ];

    for (params, expected_name) in cases {
        let err = evaluate(&params, 10).expect_err("invalid parameters must fail");
        match err {
            PlotError::InvalidParameter { name, .. } => assert_eq!(name, expected_name),
            other => panic!("unexpected error {other:?}"),
        }
    }
}

#[test]
fn source_without_conductivity_is_rejected() {
    let params = ScenarioParameters {
        domain_length: 1.0,
        boundary: BoundaryProfile::Dirichlet {
            boundary_temperature_left: 0.0,
            boundary_temperature_right: 0.0,
        },
        thermal_conductivity: None,
        volumetric_heat_source: 5.0,
    };
    assert!(evaluate(&params, 3).is_err());
}

#[test]
fn conductivity_without_source_stays_linear() {
    let params = ScenarioParameters::dirichlet(2.0, 10.0, 30.0).with_heat_source(4.0, 0.0);
    let curve = evaluate(&params, 5).expect("evaluate");
    assert!(curve.coefficients().is_linear());
    assert_relative_eq!(curve.samples()[2].temperature, 20.0, max_relative = 1e-12);
}
