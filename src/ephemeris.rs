//! Boundary to the external solar ephemeris.
//!
//! All astronomical heavy lifting is delegated to the `solar-positioning`
//! crate (NREL SPA). This module pins the configuration the rest of the crate
//! relies on: sea-level observer, standard atmospheric refraction, and ΔT
//! estimated from the date (Espenak & Meeus). The caller's derived timezone
//! rides in as the `FixedOffset` of the timestamp.

use chrono::{DateTime, FixedOffset};
use solar_positioning::{
    spa, time::DeltaT, Horizon, RefractionCorrection, SolarPosition, SunriseResult,
};

use crate::Result;

/// Observer elevation in meters. The host scene has no terrain altitude input.
const ELEVATION_M: f64 = 0.0;

/// Computes the sun's topocentric position for a local timestamp.
///
/// # Errors
/// Propagates ephemeris failures (out-of-range coordinates, ΔT estimation).
pub(crate) fn solar_position(
    datetime: DateTime<FixedOffset>,
    latitude: f64,
    longitude: f64,
) -> Result<SolarPosition> {
    let delta_t = DeltaT::estimate_from_date_like(datetime)?;
    let position = spa::solar_position(
        datetime,
        latitude,
        longitude,
        ELEVATION_M,
        delta_t,
        Some(RefractionCorrection::standard()),
    )?;
    Ok(position)
}

/// Classifies the day at the given location: regular sunrise/sunset times,
/// polar day, or polar night.
///
/// # Errors
/// Propagates ephemeris failures (out-of-range coordinates, ΔT estimation).
pub(crate) fn sunrise_sunset(
    datetime: DateTime<FixedOffset>,
    latitude: f64,
    longitude: f64,
) -> Result<SunriseResult<DateTime<FixedOffset>>> {
    let delta_t = DeltaT::estimate_from_date_like(datetime)?;
    let result = spa::sunrise_sunset_for_horizon(
        datetime,
        latitude,
        longitude,
        delta_t,
        Horizon::SunriseSunset,
    )?;
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn noon_utc(month: u32, day: u32) -> DateTime<FixedOffset> {
        FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2022, month, day, 12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_position_angles_are_in_range() {
        let position = solar_position(noon_utc(6, 21), 48.21, 16.37).unwrap();
        assert!(position.azimuth() >= 0.0 && position.azimuth() <= 360.0);
        assert!(position.elevation_angle() > 0.0);
        assert!(position.elevation_angle() < 90.0);
    }

    #[test]
    fn test_invalid_coordinates_propagate() {
        assert!(solar_position(noon_utc(6, 21), 95.0, 0.0).is_err());
        assert!(solar_position(noon_utc(6, 21), 0.0, 200.0).is_err());
    }

    #[test]
    fn test_equatorial_day_is_regular() {
        let result = sunrise_sunset(noon_utc(3, 21), 0.0, 0.0).unwrap();
        assert!(result.is_regular_day());
    }
}
