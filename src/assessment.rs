//! Forecast condition assessment
//!
//! Pure classification of one day's readings into a fixed verdict. Checks
//! run in priority order: temperature, then wind, then precipitation.

use std::fmt;

use crate::accuweather::DailyReadings;

/// Fixed classification of a day's forecast
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Sub-zero minimum or above-35 maximum temperature
    UnfavorableTemperature,
    /// Wind speed above 50 km/h
    StrongWind,
    /// Precipitation probability above 70 percent
    LikelyRain,
    /// Nothing objectionable in the readings
    Satisfactory,
}

impl Verdict {
    /// The fixed message rendered for this verdict
    #[must_use]
    pub fn message(&self) -> &'static str {
        match self {
            Verdict::UnfavorableTemperature => "Temperature conditions unfavorable.",
            Verdict::StrongWind => "Wind too strong.",
            Verdict::LikelyRain => "High chance of rain.",
            Verdict::Satisfactory => "Weather conditions satisfactory.",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

/// Classify one day's readings. First match wins; all comparisons are
/// strict, so readings sitting exactly on a threshold stay satisfactory.
#[must_use]
pub fn assess_conditions(readings: &DailyReadings) -> Verdict {
    if readings.min_temp < 0.0 || readings.max_temp > 35.0 {
        return Verdict::UnfavorableTemperature;
    }
    if readings.wind_speed > 50.0 {
        return Verdict::StrongWind;
    }
    if readings.precipitation_chance > 70.0 {
        return Verdict::LikelyRain;
    }
    Verdict::Satisfactory
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn readings(min_temp: f64, max_temp: f64, wind_speed: f64, precip: f64) -> DailyReadings {
        DailyReadings {
            min_temp,
            max_temp,
            wind_speed,
            precipitation_chance: precip,
        }
    }

    #[rstest]
    #[case::cold_morning(-5.0, 10.0, 10.0, 10.0, Verdict::UnfavorableTemperature)]
    #[case::heat_wave(10.0, 36.0, 10.0, 10.0, Verdict::UnfavorableTemperature)]
    #[case::storm(10.0, 20.0, 60.0, 10.0, Verdict::StrongWind)]
    #[case::rainy(10.0, 20.0, 10.0, 80.0, Verdict::LikelyRain)]
    #[case::pleasant(10.0, 20.0, 10.0, 10.0, Verdict::Satisfactory)]
    fn test_classification(
        #[case] min_temp: f64,
        #[case] max_temp: f64,
        #[case] wind_speed: f64,
        #[case] precip: f64,
        #[case] expected: Verdict,
    ) {
        assert_eq!(
            assess_conditions(&readings(min_temp, max_temp, wind_speed, precip)),
            expected
        );
    }

    #[test]
    fn test_temperature_takes_priority() {
        // Wind and precipitation are also over their thresholds here
        let verdict = assess_conditions(&readings(-1.0, 20.0, 90.0, 95.0));
        assert_eq!(verdict, Verdict::UnfavorableTemperature);
    }

    #[test]
    fn test_wind_takes_priority_over_rain() {
        let verdict = assess_conditions(&readings(10.0, 20.0, 60.0, 95.0));
        assert_eq!(verdict, Verdict::StrongWind);
    }

    #[rstest]
    #[case::freezing_point(0.0, 20.0, 10.0, 10.0)]
    #[case::heat_limit(10.0, 35.0, 10.0, 10.0)]
    #[case::wind_limit(10.0, 20.0, 50.0, 10.0)]
    #[case::rain_limit(10.0, 20.0, 10.0, 70.0)]
    fn test_boundaries_stay_satisfactory(
        #[case] min_temp: f64,
        #[case] max_temp: f64,
        #[case] wind_speed: f64,
        #[case] precip: f64,
    ) {
        assert_eq!(
            assess_conditions(&readings(min_temp, max_temp, wind_speed, precip)),
            Verdict::Satisfactory
        );
    }

    #[test]
    fn test_verdict_messages() {
        assert_eq!(
            Verdict::UnfavorableTemperature.to_string(),
            "Temperature conditions unfavorable."
        );
        assert_eq!(Verdict::StrongWind.to_string(), "Wind too strong.");
        assert_eq!(Verdict::LikelyRain.to_string(), "High chance of rain.");
        assert_eq!(
            Verdict::Satisfactory.to_string(),
            "Weather conditions satisfactory."
        );
    }
}
