mod display_tests {
    use crate::displays::forecast::FORECAST;
    use crate::displays::{mean, CurrentConditionsDisplay, ForecastDisplay, StatisticsDisplay};
    use crate::measurements::Measurement;
    use crate::observer::Observer;

    #[test]
    fn current_conditions_starts_at_zero() {
        let d = CurrentConditionsDisplay::new();
        assert_eq!(
            d.to_string(),
            "CURRENT conditions are\ntemperature 0\nhumidity 0\n pressure 0\n\n"
        );
    }

    #[test]
    fn current_conditions_keeps_only_the_latest() {
        let mut d = CurrentConditionsDisplay::new();
        d.update(Measurement::new(79, 90, 30));
        d.update(Measurement::new(-5, 12, 1001));

        assert_eq!(d.current(), Measurement::new(-5, 12, 1001));
        assert_eq!(
            d.to_string(),
            "CURRENT conditions are\ntemperature -5\nhumidity 12\n pressure 1001\n\n"
        );
    }

    #[test]
    fn statistics_means_follow_every_update() {
        let mut d = StatisticsDisplay::new();

        d.update(Measurement::new(79, 90, 30));
        assert_eq!(d.means(), (79.0, 90.0, 30.0));

        d.update(Measurement::new(80, 90, 20));
        assert_eq!(d.means(), (79.5, 90.0, 25.0));

        d.update(Measurement::new(10, 90, 20));
        assert_eq!(d.count(), 3);
        assert_eq!(
            d.to_string(),
            "MEAN conditions are\ntemperature 56.33\nhumidity 90.00\n pressure 23.33\n\n"
        );
    }

    #[test]
    fn statistics_handles_negative_readings() {
        let mut d = StatisticsDisplay::new();
        d.update(Measurement::new(-10, 0, 5));
        d.update(Measurement::new(-20, 1, 6));

        assert_eq!(d.means(), (-15.0, 0.5, 5.5));
    }

    #[test]
    #[should_panic(expected = "before any reading was stored")]
    fn means_need_a_stored_reading() {
        let mut d = StatisticsDisplay::new();
        d.recompute_means();
    }

    #[test]
    fn mean_of_nothing_is_none() {
        assert_eq!(mean(&[]), None);
        assert_eq!(mean(&[4]), Some(4.0));
        assert_eq!(mean(&[1, 2, 3, 4]), Some(2.5));
    }

    #[test]
    fn forecast_ignores_the_reading() {
        let mut d = ForecastDisplay::new();
        let before = d.to_string();

        d.update(Measurement::new(79, 90, 30));
        assert_eq!(d.to_string(), before);
        d.update(Measurement::new(i32::MIN, i32::MAX, 0));
        assert_eq!(d.to_string(), before);

        assert_eq!(before, format!("{FORECAST}\n\n"));
        assert_eq!(before, "FORECAST is what you make of it\n\n");
    }
}
