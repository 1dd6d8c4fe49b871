//! The three displays that hang off a `WeatherData` subject. Each keeps its
//! own state and renders a fixed-format text block to stdout on every update.

mod current_conditions;
mod forecast;
mod statistics;

#[cfg(test)]
mod tests;

pub use current_conditions::CurrentConditionsDisplay;
pub use forecast::ForecastDisplay;
pub use statistics::{mean, StatisticsDisplay};
