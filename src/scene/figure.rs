//! Sun-path figure assembly: day arcs, analemmas, compass and info labels.
//!
//! Mirrors what the viewport draws for one session: the current day's arc
//! highlighted, the solstice and equinox arcs in the body color, two
//! intermediate arcs muted, one closed analemma per hour, the compass, and —
//! when enabled — sunrise/sunset/timestamp labels anchored around the dome.

use chrono::{NaiveDateTime, NaiveTime};
use glam::DVec3;

use super::compass::{self, CompassGeometry};
use super::{place_points, Polyline, Rgb, SceneConfig};
use crate::model::SunpathModel;
use crate::{Error, Result};

/// Day codes of the solstice and equinox arcs drawn in the body color
/// (June 21, December 21, March 21).
const PRIMARY_DAY_CODES: [u16; 3] = [172, 355, 80];

/// Day codes of the intermediate arcs drawn muted (April 20, October 22).
const SECONDARY_DAY_CODES: [u16; 2] = [110, 295];

/// Reorders path samples so they connect into a sensible curve.
///
/// Day arcs are sampled from midnight, so a curve can start mid-sky and wrap
/// around through sunrise. The list is rotated to begin just past the lowest
/// point on the western side, which puts the visual start of the curve at the
/// horizon. Lists without western points are returned unchanged.
#[must_use]
pub fn sort_path_points(points: &[DVec3]) -> Vec<DVec3> {
    let lowest_west = points
        .iter()
        .enumerate()
        .filter(|(_, point)| point.x < 0.0)
        .min_by(|(_, a), (_, b)| a.y.total_cmp(&b.y))
        .map(|(index, _)| index);

    match lowest_west {
        Some(index) => {
            let split = index + 1;
            let mut sorted = Vec::with_capacity(points.len());
            sorted.extend_from_slice(&points[split..]);
            sorted.extend_from_slice(&points[..split]);
            sorted
        }
        None => points.to_vec(),
    }
}

/// The sun's arc across one day, sorted and placed in world space.
///
/// Returns `None` when the sun never rises on that day at the model's
/// location.
///
/// # Errors
/// Returns `InvalidDayCode` for a day code outside 1..=365 and propagates
/// calendar/ephemeris failures from the sampling.
pub fn day_curve(
    model: &SunpathModel,
    config: &SceneConfig,
    day_code: u16,
    color: Rgb,
    thickness: f32,
) -> Result<Option<Polyline>> {
    let samples = model.sample_day(day_code)?.collect::<Result<Vec<_>>>()?;
    Ok(build_curve(config, &samples, color, thickness))
}

/// The analemma ("figure-8") curve for one hour, sorted and placed in world
/// space.
///
/// Returns `None` when the sun is below the horizon at that hour all year.
///
/// # Errors
/// Returns `InvalidTimeComponent` for an hour above 23 and propagates
/// calendar/ephemeris failures from the sampling.
pub fn analemma(
    model: &SunpathModel,
    config: &SceneConfig,
    hour: u32,
    color: Rgb,
    thickness: f32,
    close_loop: bool,
) -> Result<Option<Polyline>> {
    let samples = model
        .sample_year_at_hour(hour, close_loop)?
        .collect::<Result<Vec<_>>>()?;
    Ok(build_curve(config, &samples, color, thickness))
}

fn build_curve(
    config: &SceneConfig,
    samples: &[DVec3],
    color: Rgb,
    thickness: f32,
) -> Option<Polyline> {
    if samples.is_empty() {
        return None;
    }
    let points = place_points(config, &sort_path_points(samples));
    Some(Polyline {
        points,
        color,
        thickness,
    })
}

/// Sunrise/sunset/timestamp labels with their anchor points around the dome.
#[derive(Debug, Clone, PartialEq)]
pub struct InfoLabels {
    /// Local sunrise time; `None` under polar day or polar night.
    pub sunrise: Option<NaiveTime>,
    /// Local sunset time; `None` under polar day or polar night.
    pub sunset: Option<NaiveTime>,
    /// The model's current timestamp.
    pub timestamp: NaiveDateTime,
    /// Anchor east of the dome for the sunrise label.
    pub sunrise_anchor: DVec3,
    /// Anchor west of the dome for the sunset label.
    pub sunset_anchor: DVec3,
    /// Anchor north of the dome for the timestamp label.
    pub timestamp_anchor: DVec3,
}

/// The complete drawing set for one session.
#[derive(Debug, Clone)]
pub struct SunpathFigure {
    /// The highlighted arc for the model's current day, if the sun rises.
    pub current_day: Option<Polyline>,
    /// Solstice, equinox and intermediate arcs.
    pub day_curves: Vec<Polyline>,
    /// One closed analemma per hour with any daylight.
    pub analemmas: Vec<Polyline>,
    /// The compass at the base of the dome.
    pub compass: CompassGeometry,
    /// Info labels, present when the configuration asks for them.
    pub info: Option<InfoLabels>,
}

/// Builds the full sun-path figure for a model and session configuration.
///
/// # Errors
/// Propagates calendar and ephemeris failures from the sampled curves; an
/// invalid current day code in the model fails here rather than rendering an
/// empty figure.
pub fn sunpath_figure(model: &SunpathModel, config: &SceneConfig) -> Result<SunpathFigure> {
    let current_day = day_curve(model, config, model.day_code(), Rgb::HIGHLIGHT, 1.5)?;

    let mut day_curves = Vec::new();
    for day_code in PRIMARY_DAY_CODES {
        if let Some(curve) = day_curve(model, config, day_code, config.color, 1.3)? {
            day_curves.push(curve);
        }
    }
    for day_code in SECONDARY_DAY_CODES {
        if let Some(curve) = day_curve(model, config, day_code, Rgb::GRAY, 1.0)? {
            day_curves.push(curve);
        }
    }

    let mut analemmas = Vec::new();
    for hour in 0..24 {
        if let Some(curve) = analemma(model, config, hour, config.color, 0.5, true)? {
            analemmas.push(curve);
        }
    }

    let info = if config.show_info {
        Some(info_labels(model, config)?)
    } else {
        None
    };

    log::debug!(
        "sun-path figure: {} day arcs, {} analemmas, info {}",
        day_curves.len() + usize::from(current_day.is_some()),
        analemmas.len(),
        info.is_some(),
    );

    Ok(SunpathFigure {
        current_day,
        day_curves,
        analemmas,
        compass: compass::compass(config),
        info,
    })
}

fn info_labels(model: &SunpathModel, config: &SceneConfig) -> Result<InfoLabels> {
    let anchors = compass::ring_points(config, 1.5, 90);
    Ok(InfoLabels {
        sunrise: transition_or_none(model.sunrise_time())?,
        sunset: transition_or_none(model.sunset_time())?,
        timestamp: model.local_datetime()?.naive_local(),
        sunrise_anchor: anchors[0],
        sunset_anchor: anchors[2],
        timestamp_anchor: anchors[3],
    })
}

// Polar day/night means "no label", not a failed figure.
fn transition_or_none(result: Result<NaiveTime>) -> Result<Option<NaiveTime>> {
    match result {
        Ok(time) => Ok(Some(time)),
        Err(Error::NoTransition { .. }) => Ok(None),
        Err(error) => Err(error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_rotates_past_lowest_western_point() {
        let points = [
            DVec3::new(1.0, 5.0, 0.0),
            DVec3::new(-1.0, 0.0, 0.0),
            DVec3::new(-1.0, 2.0, 0.0),
            DVec3::new(2.0, 3.0, 0.0),
        ];
        let sorted = sort_path_points(&points);
        assert_eq!(
            sorted,
            vec![
                DVec3::new(-1.0, 2.0, 0.0),
                DVec3::new(2.0, 3.0, 0.0),
                DVec3::new(1.0, 5.0, 0.0),
                DVec3::new(-1.0, 0.0, 0.0),
            ]
        );
    }

    #[test]
    fn test_sort_keeps_order_without_western_points() {
        let points = [
            DVec3::new(1.0, 5.0, 0.0),
            DVec3::new(2.0, 3.0, 0.0),
            DVec3::new(0.0, 1.0, 0.0),
        ];
        assert_eq!(sort_path_points(&points), points.to_vec());
    }

    #[test]
    fn test_sort_handles_lowest_point_at_end() {
        let points = [DVec3::new(1.0, 1.0, 0.0), DVec3::new(-1.0, 0.0, 0.0)];
        assert_eq!(sort_path_points(&points), points.to_vec());
    }

    #[test]
    fn test_empty_samples_build_no_curve() {
        let config = SceneConfig::default();
        assert!(build_curve(&config, &[], Rgb::WHITE, 1.0).is_none());
    }
}
