//! # Sunpath
//!
//! Sun-path modelling for 3D viewports: given a geocoordinate and a
//! slider-encoded date and time, this crate computes render-space sun
//! directions, day arcs and analemma ("figure-8") curves, compass geometry
//! for the base of the sun-path dome, and rotation/visibility updates for a
//! distant light that tracks the sun.
//!
//! The astronomical heavy lifting is delegated to the
//! [`solar-positioning`](https://crates.io/crates/solar-positioning) crate
//! (NREL SPA); this crate owns everything between that ephemeris and the
//! renderer.
//!
//! ## Quick Start
//!
//! ### Sun direction and light rotation
//! ```rust
//! use sunpath::SunpathModel;
//!
//! // Day code 172 is June 21; coordinates are Changsha.
//! let model = SunpathModel::new(172, 12, 0, 112.94, 28.12);
//!
//! let direction = model.current_position().unwrap();
//! assert!((direction.length() - 1.0).abs() < 1e-9);
//!
//! let (pitch, yaw) = model.dome_rotation_angles().unwrap();
//! println!("distant light rotation: ({pitch:.1}°, {yaw:.1}°)");
//! ```
//!
//! ### Sampled path curves
//! ```rust
//! use sunpath::{Result, SunpathModel};
//! use glam::DVec3;
//!
//! let model = SunpathModel::new(80, 9, 30, -0.12, 51.5);
//!
//! // Above-horizon samples across the equinox day, every 5 minutes.
//! let day: Vec<DVec3> = model
//!     .sample_day(80)
//!     .unwrap()
//!     .collect::<Result<_>>()
//!     .unwrap();
//! assert!(!day.is_empty() && day.len() < 288);
//!
//! // The closed noon analemma across the year.
//! let year: Vec<DVec3> = model
//!     .sample_year_at_hour(12, true)
//!     .unwrap()
//!     .collect::<Result<_>>()
//!     .unwrap();
//! assert_eq!(year.first(), year.last());
//! ```
//!
//! ### Scene geometry
//! ```rust
//! use sunpath::scene::figure::sunpath_figure;
//! use sunpath::{SceneConfig, SunpathModel};
//!
//! let model = SunpathModel::new(230, 12, 30, 112.94, 28.12);
//! let config = SceneConfig::default();
//!
//! let figure = sunpath_figure(&model, &config).unwrap();
//! assert!(figure.current_day.is_some());
//! assert!(!figure.analemmas.is_empty());
//! ```
//!
//! ## Coordinate Systems
//!
//! - Ephemeris side: **altitude** 0° = horizon, 90° = zenith; **azimuth** 0° =
//!   North, measured clockwise (0° to 360°).
//! - Render side: right-handed, Y-up unit directions with +X east and +Z
//!   south; the compass sits on the y = 0 ground plane.
//!
//! Dates are 1-based day-of-year codes on a fixed non-leap calendar (1 to
//! 365); times are local civil time in a whole-hour UTC offset derived from
//! the longitude at model construction.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::float_cmp, // Exact comparisons of fixed reference values in tests
)]

// Public API exports
pub use crate::error::{Error, Result};
pub use crate::light::{DistantLightParams, SunlightState, SunlightUpdate};
pub use crate::model::{DaySamples, SunpathModel, YearSamples};
pub use crate::scene::{Polyline, Rgb, SceneConfig};

/// Day classification re-exported from the ephemeris crate, as returned by
/// [`SunpathModel::solar_events`].
pub use solar_positioning::SunriseResult;

// Core modules
pub mod calendar;
pub mod direction;
pub mod error;
pub mod light;
pub mod model;
pub mod scene;

// Internal boundary to the external ephemeris
mod ephemeris;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_to_figure_pipeline() {
        let model = SunpathModel::new(172, 12, 0, 0.0, 0.0);
        let config = SceneConfig::default();

        let figure = scene::figure::sunpath_figure(&model, &config).unwrap();
        assert!(figure.current_day.is_some());
        assert_eq!(figure.compass.rings.len(), 2);

        let mut light = SunlightState::new();
        let update = light.update(&model).unwrap().unwrap();
        assert!(update.visible);
    }
}
