use std::fmt;

use crate::measurements::Measurement;
use crate::observer::{DisplayElement, Observer};

pub const FORECAST: &str = "FORECAST is what you make of it";

/// Doesn't look at the reading at all, it just prints its forecast each time
/// something is published.
#[derive(Debug, Default)]
pub struct ForecastDisplay;

impl ForecastDisplay {
    pub fn new() -> Self {
        Self
    }
}

impl Observer for ForecastDisplay {
    fn update(&mut self, _m: Measurement) {
        self.display();
    }
}

impl DisplayElement for ForecastDisplay {
    fn display(&self) {
        print!("{self}");
    }
}

impl fmt::Display for ForecastDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{FORECAST}\n\n")
    }
}
