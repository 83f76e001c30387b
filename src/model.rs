//! The sun-path model: slider parameters in, render-space data out.

use chrono::{DateTime, FixedOffset, NaiveTime, TimeZone};
use glam::DVec3;
use solar_positioning::SunriseResult;

use crate::error::{check_hour, Error, Result};
use crate::{calendar, direction, ephemeris};

/// Samples per day at the 5-minute cadence (24 × 12).
const SAMPLES_PER_DAY: u16 = 288;

/// Minutes between consecutive day samples.
const SAMPLE_STEP_MINUTES: u32 = 5;

/// Day-code step for year sampling (every odd day of year).
const YEAR_SAMPLE_STEP: u16 = 2;

/// Sun-path model for one viewport session.
///
/// Owns the five slider parameters (day code, hour, minute, longitude,
/// latitude) plus a timezone offset derived from the longitude, and converts
/// them into render-space sun directions, light rotations and sampled path
/// curves. Every query recomputes from scratch; there is no caching.
///
/// The model is plain owned state: one owner mutates it through the setters
/// and reads results between mutations. There is no interior mutability and
/// no locking.
///
/// # Example
/// ```
/// # use sunpath::SunpathModel;
/// let mut model = SunpathModel::new(172, 12, 0, 112.94, 28.12);
/// assert_eq!(model.timezone_offset(), 8);
///
/// let direction = model.current_position().unwrap();
/// assert!((direction.length() - 1.0).abs() < 1e-9);
/// assert!(direction.y > 0.0); // midsummer noon, sun well above the horizon
///
/// model.set_hour(3);
/// assert!(model.current_position().unwrap().y < 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SunpathModel {
    day_code: u16,
    hour: u32,
    minute: u32,
    longitude: f64,
    latitude: f64,
    /// Whole-hour UTC offset, fixed at construction time.
    timezone_offset: i32,
}

impl SunpathModel {
    /// Creates a model from the five slider parameters.
    ///
    /// The values are stored verbatim; nothing is validated here. Out-of-range
    /// parameters surface as typed errors from the date-construction or
    /// ephemeris step of the first query. The timezone offset is derived once
    /// as `round(longitude / 15)` and never recomputed afterwards.
    #[must_use]
    pub fn new(day_code: u16, hour: u32, minute: u32, longitude: f64, latitude: f64) -> Self {
        Self {
            day_code,
            hour,
            minute,
            longitude,
            latitude,
            timezone_offset: (longitude / 15.0).round() as i32,
        }
    }

    /// Gets the day-of-year code (1 to 365).
    #[must_use]
    pub const fn day_code(&self) -> u16 {
        self.day_code
    }

    /// Gets the hour of day (0 to 23).
    #[must_use]
    pub const fn hour(&self) -> u32 {
        self.hour
    }

    /// Gets the minute of hour (0 to 59).
    #[must_use]
    pub const fn minute(&self) -> u32 {
        self.minute
    }

    /// Gets the longitude in degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Gets the latitude in degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Gets the whole-hour UTC offset derived at construction.
    #[must_use]
    pub const fn timezone_offset(&self) -> i32 {
        self.timezone_offset
    }

    /// Sets the day-of-year code.
    pub fn set_day_code(&mut self, value: u16) {
        self.day_code = value;
    }

    /// Sets the hour of day.
    pub fn set_hour(&mut self, value: u32) {
        self.hour = value;
    }

    /// Sets the minute of hour.
    pub fn set_minute(&mut self, value: u32) {
        self.minute = value;
    }

    /// Sets the longitude in degrees.
    ///
    /// The timezone offset keeps its construction-time value; it is NOT
    /// re-derived from the new longitude. Sessions that drag the longitude
    /// slider keep rendering in the timezone the model was created with.
    pub fn set_longitude(&mut self, value: f64) {
        self.longitude = value;
    }

    /// Sets the latitude in degrees.
    pub fn set_latitude(&mut self, value: f64) {
        self.latitude = value;
    }

    fn fixed_offset(&self) -> Result<FixedOffset> {
        FixedOffset::east_opt(self.timezone_offset * 3600)
            .ok_or(Error::invalid_time("derived UTC offset is out of range"))
    }

    /// The model's current timestamp in its derived fixed offset.
    ///
    /// # Errors
    /// Returns `InvalidDayCode` or `InvalidTimeComponent` if the stored
    /// parameters do not form a valid reference-year timestamp.
    pub fn local_datetime(&self) -> Result<DateTime<FixedOffset>> {
        compose_datetime(self.day_code, self.hour, self.minute, self.fixed_offset()?)
    }

    /// The sun direction for the model's current date and time.
    ///
    /// # Errors
    /// Returns a calendar error for invalid stored parameters, an ephemeris
    /// error for out-of-range coordinates, or `UndefinedDirection` if the sun
    /// stands exactly in the zenith.
    pub fn current_position(&self) -> Result<DVec3> {
        let datetime = self.local_datetime()?;
        let position = ephemeris::solar_position(datetime, self.latitude, self.longitude)?;
        direction::direction_from_angles(position.elevation_angle(), position.azimuth())
    }

    /// The `(pitch, yaw)` pair orienting a distant light along the sun.
    ///
    /// # Errors
    /// Same failure modes as [`current_position`](Self::current_position),
    /// except the zenith singularity (the rotation pair is defined there).
    pub fn dome_rotation_angles(&self) -> Result<(f64, f64)> {
        let datetime = self.local_datetime()?;
        let position = ephemeris::solar_position(datetime, self.latitude, self.longitude)?;
        Ok(direction::dome_rotation(
            position.elevation_angle(),
            position.azimuth(),
        ))
    }

    /// Samples the sun's path across one day at a 5-minute cadence.
    ///
    /// The iterator walks 00:00, 00:05, … 23:55 in order (288 timestamps) and
    /// yields only directions whose up-component is at or above the horizon.
    /// It is lazy, finite and restartable (clone it before iterating to walk
    /// the day again).
    ///
    /// # Errors
    /// Returns `InvalidDayCode` for a day code outside 1..=365, or
    /// `InvalidTimeComponent` if the model's timezone offset is unusable.
    pub fn sample_day(&self, day_code: u16) -> Result<DaySamples> {
        // Fail fast on the date; per-sample errors surface through the items.
        calendar::month_day_from_code(day_code)?;
        Ok(DaySamples {
            day_code,
            latitude: self.latitude,
            longitude: self.longitude,
            offset: self.fixed_offset()?,
            index: 0,
        })
    }

    /// Samples the sun's position at a fixed hour across the year.
    ///
    /// Walks every odd day of year (1, 3, … 365) at the given hour with
    /// minute 0, keeping only above-horizon directions — the analemma
    /// ("figure-8") locus for that hour. With `close_loop` set, the first
    /// retained direction is yielded once more at the end so the curve closes
    /// into a loop; that is a rendering convenience, not a physical sample.
    ///
    /// # Errors
    /// Returns `InvalidTimeComponent` for an hour above 23 or an unusable
    /// timezone offset.
    pub fn sample_year_at_hour(&self, hour: u32, close_loop: bool) -> Result<YearSamples> {
        check_hour(hour)?;
        Ok(YearSamples {
            hour,
            latitude: self.latitude,
            longitude: self.longitude,
            offset: self.fixed_offset()?,
            day_code: 1,
            first_kept: None,
            close_loop,
            closed: false,
        })
    }

    /// Classifies the model's current day: regular sunrise/sunset, polar day
    /// or polar night.
    ///
    /// # Errors
    /// Returns a calendar error for invalid stored parameters or an ephemeris
    /// error for out-of-range coordinates.
    pub fn solar_events(&self) -> Result<SunriseResult<DateTime<FixedOffset>>> {
        let datetime = self.local_datetime()?;
        ephemeris::sunrise_sunset(datetime, self.latitude, self.longitude)
    }

    /// The local sunrise time for the model's current date and location.
    ///
    /// # Errors
    /// Returns `NoTransition` under polar day or polar night, plus the
    /// failure modes of [`solar_events`](Self::solar_events).
    pub fn sunrise_time(&self) -> Result<NaiveTime> {
        match self.solar_events()? {
            SunriseResult::RegularDay { sunrise, .. } => Ok(sunrise.time()),
            SunriseResult::AllDay { .. } => {
                Err(Error::no_transition("polar day: sun never sets"))
            }
            SunriseResult::AllNight { .. } => {
                Err(Error::no_transition("polar night: sun never rises"))
            }
        }
    }

    /// The local sunset time for the model's current date and location.
    ///
    /// # Errors
    /// Returns `NoTransition` under polar day or polar night, plus the
    /// failure modes of [`solar_events`](Self::solar_events).
    pub fn sunset_time(&self) -> Result<NaiveTime> {
        match self.solar_events()? {
            SunriseResult::RegularDay { sunset, .. } => Ok(sunset.time()),
            SunriseResult::AllDay { .. } => {
                Err(Error::no_transition("polar day: sun never sets"))
            }
            SunriseResult::AllNight { .. } => {
                Err(Error::no_transition("polar night: sun never rises"))
            }
        }
    }
}

fn compose_datetime(
    day_code: u16,
    hour: u32,
    minute: u32,
    offset: FixedOffset,
) -> Result<DateTime<FixedOffset>> {
    let naive = calendar::local_datetime(day_code, hour, minute)?;
    offset
        .from_local_datetime(&naive)
        .single()
        .ok_or(Error::invalid_time("local time is ambiguous in the derived offset"))
}

fn sample_direction(
    day_code: u16,
    hour: u32,
    minute: u32,
    latitude: f64,
    longitude: f64,
    offset: FixedOffset,
) -> Result<DVec3> {
    let datetime = compose_datetime(day_code, hour, minute, offset)?;
    let position = ephemeris::solar_position(datetime, latitude, longitude)?;
    direction::direction_from_angles(position.elevation_angle(), position.azimuth())
}

/// Lazy above-horizon sun directions across one day, in time order.
///
/// Created by [`SunpathModel::sample_day`]. Clones carry the walk position,
/// so a clone taken before iterating replays the whole sequence.
#[derive(Debug, Clone)]
pub struct DaySamples {
    day_code: u16,
    latitude: f64,
    longitude: f64,
    offset: FixedOffset,
    index: u16,
}

impl Iterator for DaySamples {
    type Item = Result<DVec3>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.index < SAMPLES_PER_DAY {
            let minutes = u32::from(self.index) * SAMPLE_STEP_MINUTES;
            self.index += 1;
            match sample_direction(
                self.day_code,
                minutes / 60,
                minutes % 60,
                self.latitude,
                self.longitude,
                self.offset,
            ) {
                Ok(direction) if direction.y >= 0.0 => return Some(Ok(direction)),
                Ok(_) => {}
                Err(error) => return Some(Err(error)),
            }
        }
        None
    }
}

/// Lazy above-horizon sun directions at a fixed hour across the year.
///
/// Created by [`SunpathModel::sample_year_at_hour`]. Clones carry the walk
/// position, so a clone taken before iterating replays the whole sequence,
/// including the optional closing sample.
#[derive(Debug, Clone)]
pub struct YearSamples {
    hour: u32,
    latitude: f64,
    longitude: f64,
    offset: FixedOffset,
    day_code: u16,
    first_kept: Option<DVec3>,
    close_loop: bool,
    closed: bool,
}

impl Iterator for YearSamples {
    type Item = Result<DVec3>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.day_code <= 365 {
            let day_code = self.day_code;
            self.day_code += YEAR_SAMPLE_STEP;
            match sample_direction(
                day_code,
                self.hour,
                0,
                self.latitude,
                self.longitude,
                self.offset,
            ) {
                Ok(direction) if direction.y >= 0.0 => {
                    if self.first_kept.is_none() {
                        self.first_kept = Some(direction);
                    }
                    return Some(Ok(direction));
                }
                Ok(_) => {}
                Err(error) => return Some(Err(error)),
            }
        }
        if self.close_loop && !self.closed {
            self.closed = true;
            if let Some(first) = self.first_kept {
                return Some(Ok(first));
            }
        }
        None
    }
}
