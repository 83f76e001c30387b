//! Conversion from ephemeris angles to render-space quantities.
//!
//! The ephemeris reports the sun in horizontal coordinates: altitude above the
//! horizon and compass azimuth (degrees clockwise from geographic north). The
//! render space is a right-handed Y-up scene where +X points east, +Z points
//! south and the dome sits on the y = 0 ground plane.

use glam::DVec3;

use crate::{Error, Result};

/// Converts an (altitude, azimuth) pair to a render-space unit direction.
///
/// The returned vector points from the scene origin towards the sun. Its
/// up-component (`y`) is non-negative exactly when the sun is at or above the
/// horizon, which is what the path-sampling horizon filter keys on.
///
/// # Errors
/// Returns `UndefinedDirection` when the altitude reaches ±90° (the tangent
/// in the projection is singular there) or when either angle is non-finite.
///
/// # Example
/// ```
/// # use sunpath::direction::direction_from_angles;
/// // Sun on the horizon, due south.
/// let direction = direction_from_angles(0.0, 180.0).unwrap();
/// assert_eq!((direction.x, direction.y, direction.z), (0.0, 0.0, 1.0));
/// ```
pub fn direction_from_angles(altitude: f64, azimuth: f64) -> Result<DVec3> {
    if !altitude.is_finite() || !azimuth.is_finite() || altitude.abs() >= 90.0 {
        return Err(Error::undefined_direction(altitude));
    }
    let bearing = (azimuth - 180.0).to_radians();
    let x = bearing.sin();
    let y = bearing.cos();
    let z = altitude.to_radians().tan();
    // x² + y² = 1, so the norm is at least 1 and the division is safe.
    let length = (x * x + y * y + z * z).sqrt();
    Ok(DVec3::new(-x / length, z / length, y / length))
}

/// Rotation pair for a distant light that should point along the sun.
///
/// Returns `(pitch, yaw)` in degrees as `(-altitude, 180 - azimuth)`: applied
/// as X then Y Euler rotations, the light's forward axis matches the sun
/// direction produced by [`direction_from_angles`].
#[must_use]
pub fn dome_rotation(altitude: f64, azimuth: f64) -> (f64, f64) {
    (-altitude, 180.0 - azimuth)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_directions_are_unit_vectors() {
        for altitude in [-89.0, -45.0, -1.0, 0.0, 10.0, 45.0, 66.5, 89.0] {
            for azimuth in [0.0, 45.0, 90.0, 180.0, 270.0, 359.0] {
                let direction = direction_from_angles(altitude, azimuth).unwrap();
                assert!(
                    (direction.length() - 1.0).abs() < EPSILON,
                    "non-unit direction for alt {altitude}, azm {azimuth}"
                );
            }
        }
    }

    #[test]
    fn test_horizon_south_regression() {
        // Fixed regression value derived from the conversion formula.
        let direction = direction_from_angles(0.0, 180.0).unwrap();
        assert!((direction.x - 0.0).abs() < EPSILON);
        assert!((direction.y - 0.0).abs() < EPSILON);
        assert!((direction.z - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_cardinal_bearings() {
        // Due east on the horizon points along +X.
        let east = direction_from_angles(0.0, 90.0).unwrap();
        assert!((east.x - 1.0).abs() < EPSILON);
        assert!(east.y.abs() < EPSILON);
        assert!(east.z.abs() < EPSILON);

        // Due west on the horizon points along -X.
        let west = direction_from_angles(0.0, 270.0).unwrap();
        assert!((west.x + 1.0).abs() < EPSILON);

        // Due north on the horizon points along -Z.
        let north = direction_from_angles(0.0, 0.0).unwrap();
        assert!((north.z + 1.0).abs() < EPSILON);
        assert!(north.y.abs() < EPSILON);
    }

    #[test]
    fn test_up_component_tracks_altitude_sign() {
        assert!(direction_from_angles(30.0, 120.0).unwrap().y > 0.0);
        assert!(direction_from_angles(-30.0, 120.0).unwrap().y < 0.0);
        // sin(alt) relation: up = tan(alt) / sqrt(1 + tan²(alt))
        let direction = direction_from_angles(45.0, 200.0).unwrap();
        assert!((direction.y - 45.0_f64.to_radians().sin()).abs() < 1e-9);
    }

    #[test]
    fn test_singular_altitudes_fail() {
        assert!(matches!(
            direction_from_angles(90.0, 10.0),
            Err(Error::UndefinedDirection { .. })
        ));
        assert!(matches!(
            direction_from_angles(-90.0, 10.0),
            Err(Error::UndefinedDirection { .. })
        ));
        assert!(direction_from_angles(f64::NAN, 10.0).is_err());
        assert!(direction_from_angles(45.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_dome_rotation_pair() {
        assert_eq!(dome_rotation(66.5, 180.0), (-66.5, 0.0));
        assert_eq!(dome_rotation(-12.0, 90.0), (12.0, 90.0));
        assert_eq!(dome_rotation(0.0, 360.0), (0.0, -180.0));
    }
}
