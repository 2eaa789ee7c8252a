use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

pub type PlotResult<T> = Result<T, PlotError>;

/// Pipeline stage an error is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    Load,
    Evaluate,
    Render,
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Load => "load",
            Self::Evaluate => "evaluate",
            Self::Render => "render",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("results source `{}` is missing or unreadable: {source}", path.display())]
    MissingSource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "record {line} of `{origin}` is malformed ({reason}): `{record}`; \
         expected `<position>,<temperature>` with two finite numbers"
    )]
    MalformedRecord {
        origin: String,
        line: usize,
        record: String,
        reason: String,
    },

    #[error(
        "point #{index} has position {position} outside the domain [0, {domain_length}]"
    )]
    PointOutsideDomain {
        index: usize,
        position: f64,
        domain_length: f64,
    },

    #[error("invalid parameter `{name}` = {value}: expected {expected}")]
    InvalidParameter {
        name: &'static str,
        value: String,
        expected: String,
    },

    #[error("no output sink available: {0}")]
    RenderUnavailable(String),

    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid render data: {0}")]
    InvalidData(String),
}

impl PlotError {
    pub(crate) fn invalid_parameter(
        name: &'static str,
        value: impl fmt::Display,
        expected: impl Into<String>,
    ) -> Self {
        Self::InvalidParameter {
            name,
            value: value.to_string(),
            expected: expected.into(),
        }
    }

    /// Stage of the load → evaluate → render pass that produced this error.
    #[must_use]
    pub fn stage(&self) -> PipelineStage {
        match self {
            Self::MissingSource { .. }
            | Self::MalformedRecord { .. }
            | Self::PointOutsideDomain { .. } => PipelineStage::Load,
            Self::InvalidParameter { .. } => PipelineStage::Evaluate,
            Self::RenderUnavailable(_) | Self::InvalidViewport { .. } | Self::InvalidData(_) => {
                PipelineStage::Render
            }
        }
    }
}
