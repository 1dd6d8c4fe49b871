//! Weather measurements broadcast to a set of displays, observer style.
//!
//! A [`WeatherData`] subject takes readings one at a time (or a whole
//! sequence through [`WeatherData::ingest`]) and pushes each one, in order,
//! to every registered [`Observer`].

pub mod displays;
pub mod measurements;
pub mod observer;

pub use displays::{CurrentConditionsDisplay, ForecastDisplay, StatisticsDisplay};
pub use measurements::{Measurement, WeatherData, DEMO_READINGS};
pub use observer::{DisplayElement, Observer, ObserverRef, Subject};
