use std::{cell::RefCell, rc::Rc};

use log::info;

use weather_station::{
    CurrentConditionsDisplay, ForecastDisplay, StatisticsDisplay, Subject, WeatherData,
    DEMO_READINGS,
};

fn main() -> anyhow::Result<()> {
    env_logger::try_init()?;

    // the subject the displays care about
    let mut weather_data = WeatherData::new();

    weather_data.register_observer(Rc::new(RefCell::new(CurrentConditionsDisplay::new())));
    weather_data.register_observer(Rc::new(RefCell::new(StatisticsDisplay::new())));
    weather_data.register_observer(Rc::new(RefCell::new(ForecastDisplay::new())));

    let published = weather_data.ingest(DEMO_READINGS);
    info!(
        "published {published} reading(s) to {} observer(s)",
        weather_data.observer_count()
    );

    Ok(())
}
