#[cfg(test)]
mod solar_tests {
    use crate::geo::solar::*;
    use chrono::{DateTime, Duration, FixedOffset, NaiveDate, TimeZone, Timelike, Utc};

    fn istanbul() -> SolarCalculator {
        SolarCalculator::new(Location::new(41.0082, 28.9784).unwrap())
    }

    fn at(offset_hours: i32, y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<FixedOffset> {
        FixedOffset::east_opt(offset_hours * 3600)
            .unwrap()
            .with_ymd_and_hms(y, m, d, h, min, 0)
            .unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_location_validation() {
        assert!(Location::new(40.7128, -74.0060).is_ok());
        assert!(Location::new(90.0, 180.0).is_ok());
        assert!(Location::new(-90.0, -180.0).is_ok());

        assert!(Location::new(91.0, 0.0).is_err());
        assert!(Location::new(-90.5, 0.0).is_err());
        assert!(Location::new(0.0, 181.0).is_err());
        assert!(Location::new(0.0, -360.0).is_err());
        assert!(Location::new(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn test_default_location_is_istanbul() {
        let location = Location::default();
        assert_eq!(location.latitude, 41.0082);
        assert_eq!(location.longitude, 28.9784);
    }

    #[test]
    fn test_istanbul_summer_solstice() {
        let now = at(3, 2024, 6, 21, 12, 0);
        let info = istanbul().info(&now);
        let offset = *now.offset();

        let sunrise = info.times.sunrise().unwrap().with_timezone(&offset);
        let sunset = info.times.sunset().unwrap().with_timezone(&offset);

        assert!(sunrise.hour() < 6, "sunrise at {sunrise}");
        assert!(sunset.hour() >= 20, "sunset at {sunset}");
        assert!(info.is_daytime);
        assert_eq!(info.date, date(2024, 6, 21));
    }

    #[test]
    fn test_istanbul_midnight_is_night() {
        let info = istanbul().info(&at(3, 2024, 6, 21, 0, 0));
        assert!(!info.is_daytime);

        let info = istanbul().info(&at(3, 2024, 12, 21, 23, 30));
        assert!(!info.is_daytime);
    }

    #[test]
    fn test_winter_day_is_shorter_than_summer_day() {
        let calc = istanbul();
        let summer = calc.solar_times(date(2024, 6, 21)).day_length();
        let winter = calc.solar_times(date(2024, 12, 21)).day_length();
        assert!(summer > winter);
        assert!(summer > Duration::hours(14));
        assert!(winter < Duration::hours(10));
    }

    #[test]
    fn test_is_daytime_boundaries() {
        let sunrise = Utc.with_ymd_and_hms(2024, 3, 20, 4, 0, 0).unwrap();
        let sunset = Utc.with_ymd_and_hms(2024, 3, 20, 16, 0, 0).unwrap();

        assert!(is_daytime(sunrise, sunrise, sunset));
        assert!(!is_daytime(sunset, sunrise, sunset));
        assert!(!is_daytime(sunrise - Duration::seconds(1), sunrise, sunset));
        assert!(is_daytime(sunset - Duration::seconds(1), sunrise, sunset));
    }

    #[test]
    fn test_next_transition_before_sunrise() {
        let calc = istanbul();
        let now = at(3, 2024, 6, 21, 3, 0);
        let next = calc.next_transition(&now).unwrap();

        assert_eq!(next.kind, TransitionKind::Sunrise);
        assert_eq!(Some(next.at), calc.solar_times(date(2024, 6, 21)).sunrise());
        assert!(next.at > now.with_timezone(&Utc));
    }

    #[test]
    fn test_next_transition_during_day() {
        let calc = istanbul();
        let now = at(3, 2024, 6, 21, 12, 0);
        let next = calc.next_transition(&now).unwrap();

        assert_eq!(next.kind, TransitionKind::Sunset);
        assert_eq!(Some(next.at), calc.solar_times(date(2024, 6, 21)).sunset());
    }

    #[test]
    fn test_next_transition_after_sunset_uses_tomorrow() {
        let calc = istanbul();
        let now = at(3, 2024, 6, 21, 22, 0);
        let next = calc.next_transition(&now).unwrap();

        assert_eq!(next.kind, TransitionKind::Sunrise);
        assert_eq!(Some(next.at), calc.solar_times(date(2024, 6, 22)).sunrise());
        assert!(next.at > now.with_timezone(&Utc));
        assert!(next.at - now.with_timezone(&Utc) < Duration::hours(12));
    }

    #[test]
    fn test_next_transition_across_year_boundary() {
        let calc = istanbul();
        let now = at(3, 2024, 12, 31, 23, 0);
        let next = calc.next_transition(&now).unwrap();

        assert_eq!(next.kind, TransitionKind::Sunrise);
        assert_eq!(Some(next.at), calc.solar_times(date(2025, 1, 1)).sunrise());
    }

    #[test]
    fn test_next_transition_is_strictly_in_future() {
        let calc = istanbul();
        let start = at(3, 2024, 3, 1, 0, 0);
        for step in 0..(48 * 4) {
            let now = start + Duration::minutes(15 * step);
            let next = calc.next_transition(&now).unwrap();
            assert!(next.at > now.with_timezone(&Utc), "at {now}: {next:?}");
        }
    }

    #[test]
    fn test_next_transition_agrees_with_classification() {
        let calc = istanbul();
        let now = at(3, 2024, 9, 10, 14, 0);
        let info = calc.info(&now);
        let next = calc.next_transition(&now).unwrap();

        // Daytime is followed by sunset and night by sunrise.
        assert!(info.is_daytime);
        assert_eq!(next.kind, TransitionKind::Sunset);

        let just_after = (next.at + Duration::seconds(1)).with_timezone(now.offset());
        assert!(!calc.info(&just_after).is_daytime);
    }

    #[test]
    fn test_polar_night_high_latitude_winter() {
        let calc = SolarCalculator::new(Location::new(75.0, 15.0).unwrap());
        let times = calc.solar_times(date(2024, 12, 21));
        assert_eq!(times, SolarTimes::PolarNight);
        assert!(times.is_polar());
        assert_eq!(times.day_length(), Duration::zero());

        let info = calc.info(&at(1, 2024, 12, 21, 12, 0));
        assert!(!info.is_daytime);
        assert!(calc.next_transition(&at(1, 2024, 12, 21, 12, 0)).is_none());
    }

    #[test]
    fn test_polar_day_high_latitude_summer() {
        let calc = SolarCalculator::new(Location::new(75.0, 15.0).unwrap());
        let times = calc.solar_times(date(2024, 6, 21));
        assert_eq!(times, SolarTimes::PolarDay);
        assert_eq!(times.sunrise(), None);

        let info = calc.info(&at(1, 2024, 6, 21, 0, 30));
        assert!(info.is_daytime);
        assert!(calc.next_transition(&at(1, 2024, 6, 21, 0, 30)).is_none());
    }

    #[test]
    fn test_southern_hemisphere_polar_states_are_reversed() {
        let calc = SolarCalculator::new(Location::new(-75.0, 0.0).unwrap());
        assert_eq!(calc.solar_times(date(2024, 6, 21)), SolarTimes::PolarNight);
        assert_eq!(calc.solar_times(date(2024, 12, 21)), SolarTimes::PolarDay);
    }

    #[test]
    fn test_geometry_reports_hour_angle() {
        let geometry = istanbul().geometry(date(2024, 3, 20));
        let hour_angle = geometry.hour_angle().unwrap();
        // Near the equinox the hour angle is close to 90°.
        assert!((88.0..95.0).contains(&hour_angle), "{hour_angle}");
        assert!(geometry.declination.abs() < 1.0);

        let polar = SolarCalculator::new(Location::new(80.0, 0.0).unwrap())
            .geometry(date(2024, 12, 21));
        assert!(polar.hour_angle().is_none());
    }

    #[test]
    fn test_lower_altitude_widens_the_day() {
        let standard = istanbul();
        let civil = istanbul().with_altitude(-6.0);
        let day = date(2024, 4, 15);

        let standard_times = standard.solar_times(day);
        let civil_times = civil.solar_times(day);

        assert!(civil_times.sunrise().unwrap() < standard_times.sunrise().unwrap());
        assert!(civil_times.sunset().unwrap() > standard_times.sunset().unwrap());
        assert_eq!(civil.altitude(), -6.0);
    }

    #[test]
    fn test_matches_reference_implementation() {
        use sunrise::{Coordinates, SolarDay, SolarEvent};

        let places = [
            (41.0082, 28.9784),   // Istanbul
            (51.5074, -0.1278),   // London
            (40.7128, -74.0060),  // New York
            (1.3521, 103.8198),   // Singapore
            (-33.9249, 18.4241),  // Cape Town
            (-34.6037, -58.3816), // Buenos Aires
        ];
        let days = [
            date(2024, 1, 15),
            date(2024, 3, 20),
            date(2024, 6, 21),
            date(2024, 9, 23),
            date(2024, 12, 21),
        ];
        let tolerance = Duration::minutes(5);

        for (lat, lon) in places {
            let calc = SolarCalculator::new(Location::new(lat, lon).unwrap());
            let coord = Coordinates::new(lat, lon).unwrap();
            for day in days {
                let reference = SolarDay::new(coord, day);
                let expected_rise = reference.event_time(SolarEvent::Sunrise);
                let expected_set = reference.event_time(SolarEvent::Sunset);

                let times = calc.solar_times(day);
                let rise = times.sunrise().unwrap();
                let set = times.sunset().unwrap();

                assert!(
                    (rise - expected_rise).abs() < tolerance,
                    "sunrise at ({lat}, {lon}) on {day}: {rise} vs {expected_rise}"
                );
                assert!(
                    (set - expected_set).abs() < tolerance,
                    "sunset at ({lat}, {lon}) on {day}: {set} vs {expected_set}"
                );
            }
        }
    }
}
