pub mod analytical;
pub mod axis_ticks;
pub mod scale;
pub mod scenario;
pub mod types;

pub use analytical::{
    AnalyticalCurve, DEFAULT_SAMPLE_COUNT, ProfileCoefficients, evaluate, uniform_grid,
};
pub use scale::LinearScale;
pub use scenario::{BoundaryProfile, ScenarioParameters, ScenarioSelector};
pub use types::{DiscretePoint, ProfileSample, Viewport};
