use std::path::PathBuf;

use conduction_plot::api::{
    DEFAULT_RESULTS_PATH, PipelineConfig, PresentationTarget, run_pipeline,
};
use conduction_plot::core::{DEFAULT_SAMPLE_COUNT, ScenarioParameters, ScenarioSelector};
use conduction_plot::{PlotError, telemetry};

#[derive(Debug)]
struct CliArgs {
    results_path: PathBuf,
    scenario: ScenarioSelector,
    scenario_file: Option<PathBuf>,
    sample_count: usize,
    target: PresentationTarget,
}

fn main() {
    let _ = telemetry::init_default_tracing();

    let args = match parse_args() {
        Ok(args) => args,
        Err(message) => {
            eprintln!("error: {message}");
            std::process::exit(2);
        }
    };

    if let Err(err) = run(args) {
        eprintln!("error: [{}] {err}", err.stage());
        std::process::exit(1);
    }
}

fn run(args: CliArgs) -> Result<(), PlotError> {
    let scenario = match &args.scenario_file {
        Some(path) => ScenarioParameters::from_json_file(path)?,
        None => args.scenario.parameters(),
    };

    let config = PipelineConfig::new(scenario)
        .with_results_path(args.results_path)
        .with_sample_count(args.sample_count)
        .with_target(args.target);

    let report = run_pipeline(&config)?;
    println!(
        "plotted {} solver point(s) against {} analytical sample(s)",
        report.point_count, report.sample_count
    );
    Ok(())
}

fn parse_args() -> Result<CliArgs, String> {
    let mut results_path = PathBuf::from(DEFAULT_RESULTS_PATH);
    let mut scenario = ScenarioSelector::default();
    let mut scenario_file: Option<PathBuf> = None;
    let mut sample_count = DEFAULT_SAMPLE_COUNT;
    let mut output: Option<PathBuf> = None;
    let mut headless = false;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        // `--scenario=b` and `--scenario b` are both accepted
        let (flag, inline_value) = match arg.split_once('=') {
            Some((flag, value)) if flag.starts_with("--") => {
                (flag.to_owned(), Some(value.to_owned()))
            }
            _ => (arg.clone(), None),
        };
        let mut value = |name: &str| {
            inline_value
                .clone()
                .or_else(|| args.next())
                .ok_or_else(|| format!("missing value for {name}"))
        };

        match flag.as_str() {
            "--results" => results_path = PathBuf::from(value("--results")?),
            "--scenario" => {
                scenario = value("--scenario")?
                    .parse()
                    .map_err(|err: PlotError| err.to_string())?;
            }
            "--scenario-file" => scenario_file = Some(PathBuf::from(value("--scenario-file")?)),
            "--samples" => {
                let raw = value("--samples")?;
                sample_count = raw
                    .parse()
                    .map_err(|_| format!("--samples expects a non-negative integer, got `{raw}`"))?;
            }
            "--output" => output = Some(PathBuf::from(value("--output")?)),
            "--headless" => headless = true,
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            _ => {
                return Err(format!("unknown argument `{arg}`\n\n{}", usage_message()));
            }
        }
    }

    let target = match (output, headless) {
        (Some(_), true) => {
            return Err("--output and --headless are mutually exclusive".to_owned());
        }
        (Some(path), false) => PresentationTarget::Png { path },
        (None, true) => PresentationTarget::Headless,
        (None, false) => PresentationTarget::Window,
    };

    Ok(CliArgs {
        results_path,
        scenario,
        scenario_file,
        sample_count,
        target,
    })
}

fn print_usage() {
    println!("{}", usage_message());
}

fn usage_message() -> String {
    format!(
        "Usage: conduction_plot [options]\n\nOptions:\n  --results <path>         Solver results CSV (default: {DEFAULT_RESULTS_PATH})\n  --scenario <a|b>         Built-in reference scenario (default: a)\n  --scenario-file <path>   JSON scenario definition; overrides --scenario\n  --samples <n>            Analytical grid size (default: {DEFAULT_SAMPLE_COUNT})\n  --output <path>          Write a PNG instead of opening a window\n  --headless               Build and validate the plot without any output\n  -h, --help               Show this message"
    )
}
