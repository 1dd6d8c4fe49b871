use chrono::{DateTime, Local};
use log::debug;

use crate::observer::{same_observer, ObserverRef, Subject};


/// One observation: temperature, humidity and pressure. No validation is done
/// on the values, a negative humidity is carried just like any other reading.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Measurement {
    pub temperature: i32,
    pub humidity: i32,
    pub pressure: i32,
}

impl Measurement {
    pub fn new(temperature: i32, humidity: i32, pressure: i32) -> Self {
        Self {
            temperature,
            humidity,
            pressure,
        }
    }
}

/// The readings the station publishes on a plain run.
pub const DEMO_READINGS: [Measurement; 3] = [
    Measurement {
        temperature: 79,
        humidity: 90,
        pressure: 30,
    },
    Measurement {
        temperature: 80,
        humidity: 90,
        pressure: 20,
    },
    Measurement {
        temperature: 10,
        humidity: 90,
        pressure: 20,
    },
];

/***
 * WeatherData
 *
 *  The WeatherData object is the Observable. As such, it
 *      - has an interface to add/remove observers
 *      - notifies observers every time a new reading is set
 *  It also remembers the latest reading and when it arrived, for anyone who
 * wants to poll instead of subscribe.
 */
#[derive(Default)]
pub struct WeatherData {
    observers: Vec<ObserverRef>,
    latest: Option<Measurement>,
    updated_at: Option<DateTime<Local>>,
}

impl WeatherData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `m` as the latest reading and push it to every observer.
    pub fn set_measurements(&mut self, m: Measurement) {
        let now = Local::now();
        debug!(
            "reading {},{},{} at {} -> {} observer(s)",
            m.temperature,
            m.humidity,
            m.pressure,
            now.format("%d %b %H:%M:%S"),
            self.observers.len()
        );
        self.latest = Some(m);
        self.updated_at = Some(now);

        self.notify_observers(m);
    }

    /// Publish every reading of `readings`, in order. Returns how many were
    /// published.
    pub fn ingest<I>(&mut self, readings: I) -> usize
    where
        I: IntoIterator<Item = Measurement>,
    {
        let mut published = 0;
        for m in readings {
            self.set_measurements(m);
            published += 1;
        }

        published
    }

    pub fn latest(&self) -> Option<Measurement> {
        self.latest
    }

    pub fn updated_at(&self) -> Option<DateTime<Local>> {
        self.updated_at
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}

impl Subject for WeatherData {
    fn register_observer(&mut self, o: ObserverRef) {
        self.observers.push(o);
        debug!("registered observer, {} now attached", self.observers.len());
    }

    fn remove_observer(&mut self, o: &ObserverRef) {
        let before = self.observers.len();
        self.observers.retain(|x| !same_observer(x, o));
        debug!(
            "removed {} registration(s), {} still attached",
            before - self.observers.len(),
            self.observers.len()
        );
    }

    fn notify_observers(&self, m: Measurement) {
        // removal needs &mut self, so the list can't change under this loop
        for obs in self.observers.iter() {
            obs.borrow_mut().update(m);
        }
    }
}
