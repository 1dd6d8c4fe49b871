use std::fmt;

use crate::measurements::Measurement;
use crate::observer::{DisplayElement, Observer};

/// Keeps every reading it has seen and shows the running mean of each metric.
#[derive(Debug, Default)]
pub struct StatisticsDisplay {
    temperature: Vec<i32>,
    humidity: Vec<i32>,
    pressure: Vec<i32>,

    temperature_mean: f32,
    humidity_mean: f32,
    pressure_mean: f32,
}

impl StatisticsDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// (temperature, humidity, pressure) means over everything received.
    pub fn means(&self) -> (f32, f32, f32) {
        (self.temperature_mean, self.humidity_mean, self.pressure_mean)
    }

    pub fn count(&self) -> usize {
        self.temperature.len()
    }
}

/// Arithmetic mean in single precision, `None` for an empty slice.
pub fn mean(data: &[i32]) -> Option<f32> {
    if data.is_empty() {
        return None;
    }
    let sum: f32 = data.iter().map(|&v| v as f32).sum();

    Some(sum / data.len() as f32)
}

impl Observer for StatisticsDisplay {
    fn update(&mut self, m: Measurement) {
        // append first: the sequences are never empty when the means are taken
        self.temperature.push(m.temperature);
        self.humidity.push(m.humidity);
        self.pressure.push(m.pressure);

        self.recompute_means();

        self.display();
    }
}

impl StatisticsDisplay {
    /// Only valid once at least one reading has been stored.
    pub(super) fn recompute_means(&mut self) {
        assert!(
            !self.temperature.is_empty(),
            "means recomputed before any reading was stored"
        );

        self.temperature_mean = mean(&self.temperature).unwrap_or_default();
        self.humidity_mean = mean(&self.humidity).unwrap_or_default();
        self.pressure_mean = mean(&self.pressure).unwrap_or_default();
    }
}

impl DisplayElement for StatisticsDisplay {
    fn display(&self) {
        print!("{self}");
    }
}

impl fmt::Display for StatisticsDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MEAN conditions are\ntemperature {:.2}\nhumidity {:.2}\n pressure {:.2}\n\n",
            self.temperature_mean, self.humidity_mean, self.pressure_mean
        )
    }
}
