use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(800, 600)
    }
}

/// One solver output sample: position in metres, temperature in °C.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiscretePoint {
    pub position: f64,
    pub temperature: f64,
}

impl DiscretePoint {
    #[must_use]
    pub fn new(position: f64, temperature: f64) -> Self {
        Self {
            position,
            temperature,
        }
    }
}

/// One sample of the closed-form temperature field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfileSample {
    pub position: f64,
    pub temperature: f64,
}

impl ProfileSample {
    #[must_use]
    pub fn new(position: f64, temperature: f64) -> Self {
        Self {
            position,
            temperature,
        }
    }
}
