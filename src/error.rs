//! Error types for sun-path calculations.

use core::fmt;

/// Result type alias for operations in this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur while deriving sun-path data.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Day code outside the 1..=365 domain of the non-leap lookup table.
    InvalidDayCode {
        /// The invalid day code provided.
        value: u16,
    },
    /// Hour or minute outside its valid range, or a composed timestamp the
    /// calendar refuses.
    InvalidTimeComponent {
        /// Description of the violated constraint.
        message: &'static str,
    },
    /// The direction vector is undefined for the requested altitude
    /// (tangent singularity at ±90°, or non-finite input angles).
    UndefinedDirection {
        /// The offending altitude value in degrees.
        altitude: f64,
    },
    /// Sunrise or sunset does not occur for the date/location combination
    /// (polar day or polar night).
    NoTransition {
        /// Which polar condition suppressed the transition.
        message: &'static str,
    },
    /// Failure reported by the external ephemeris.
    Ephemeris {
        /// The underlying ephemeris error.
        source: solar_positioning::Error,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDayCode { value } => {
                write!(f, "invalid day code {value} (must be between 1 and 365)")
            }
            Self::InvalidTimeComponent { message } => {
                write!(f, "invalid time component: {message}")
            }
            Self::UndefinedDirection { altitude } => {
                write!(
                    f,
                    "direction undefined at altitude {altitude}° (must be strictly between -90° and +90°)"
                )
            }
            Self::NoTransition { message } => {
                write!(f, "no sunrise/sunset transition: {message}")
            }
            Self::Ephemeris { source } => {
                write!(f, "ephemeris error: {source}")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Ephemeris { source } => Some(source),
            _ => None,
        }
    }
}

impl From<solar_positioning::Error> for Error {
    fn from(source: solar_positioning::Error) -> Self {
        Self::Ephemeris { source }
    }
}

impl Error {
    /// Creates an invalid day code error.
    #[must_use]
    pub const fn invalid_day_code(value: u16) -> Self {
        Self::InvalidDayCode { value }
    }

    /// Creates an invalid time component error.
    #[must_use]
    pub const fn invalid_time(message: &'static str) -> Self {
        Self::InvalidTimeComponent { message }
    }

    /// Creates an undefined direction error.
    #[must_use]
    pub const fn undefined_direction(altitude: f64) -> Self {
        Self::UndefinedDirection { altitude }
    }

    /// Creates a missing sunrise/sunset transition error.
    #[must_use]
    pub const fn no_transition(message: &'static str) -> Self {
        Self::NoTransition { message }
    }
}

/// Validates a day code is within the table domain (1 to 365).
///
/// # Errors
/// Returns `InvalidDayCode` if the code is 0 or greater than 365.
pub fn check_day_code(day_code: u16) -> Result<()> {
    if !(1..=365).contains(&day_code) {
        return Err(Error::invalid_day_code(day_code));
    }
    Ok(())
}

/// Validates an hour is within 0 to 23.
///
/// # Errors
/// Returns `InvalidTimeComponent` if the hour is greater than 23.
pub fn check_hour(hour: u32) -> Result<()> {
    if hour > 23 {
        return Err(Error::invalid_time("hour must be between 0 and 23"));
    }
    Ok(())
}

/// Validates a minute is within 0 to 59.
///
/// # Errors
/// Returns `InvalidTimeComponent` if the minute is greater than 59.
pub fn check_minute(minute: u32) -> Result<()> {
    if minute > 59 {
        return Err(Error::invalid_time("minute must be between 0 and 59"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_code_validation() {
        assert!(check_day_code(1).is_ok());
        assert!(check_day_code(172).is_ok());
        assert!(check_day_code(365).is_ok());

        assert!(check_day_code(0).is_err());
        assert!(check_day_code(366).is_err());
        assert!(check_day_code(u16::MAX).is_err());
    }

    #[test]
    fn test_time_component_validation() {
        assert!(check_hour(0).is_ok());
        assert!(check_hour(23).is_ok());
        assert!(check_hour(24).is_err());

        assert!(check_minute(0).is_ok());
        assert!(check_minute(59).is_ok());
        assert!(check_minute(60).is_err());
    }

    #[test]
    fn test_error_display() {
        let err = Error::invalid_day_code(366);
        assert_eq!(
            err.to_string(),
            "invalid day code 366 (must be between 1 and 365)"
        );

        let err = Error::invalid_time("hour must be between 0 and 23");
        assert_eq!(
            err.to_string(),
            "invalid time component: hour must be between 0 and 23"
        );

        let err = Error::undefined_direction(90.0);
        assert_eq!(
            err.to_string(),
            "direction undefined at altitude 90° (must be strictly between -90° and +90°)"
        );

        let err = Error::no_transition("polar night: sun never rises");
        assert_eq!(
            err.to_string(),
            "no sunrise/sunset transition: polar night: sun never rises"
        );
    }

    #[test]
    fn test_ephemeris_error_wrapping() {
        let source = solar_positioning::Error::invalid_latitude(95.0);
        let err = Error::from(source.clone());
        assert_eq!(err, Error::Ephemeris { source });
        assert!(err.to_string().starts_with("ephemeris error:"));
    }
}
