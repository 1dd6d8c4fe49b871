use std::fmt;

use crate::measurements::Measurement;
use crate::observer::{DisplayElement, Observer};

/// Shows the latest reading only; every update overwrites the previous one.
#[derive(Debug, Default)]
pub struct CurrentConditionsDisplay {
    current: Measurement,
}

impl CurrentConditionsDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Measurement {
        self.current
    }
}

impl Observer for CurrentConditionsDisplay {
    fn update(&mut self, m: Measurement) {
        self.current = m;
        self.display();
    }
}

impl DisplayElement for CurrentConditionsDisplay {
    fn display(&self) {
        print!("{self}");
    }
}

impl fmt::Display for CurrentConditionsDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // the leading space on " pressure" is part of the console format
        write!(
            f,
            "CURRENT conditions are\ntemperature {}\nhumidity {}\n pressure {}\n\n",
            self.current.temperature, self.current.humidity, self.current.pressure
        )
    }
}
