//! Distant-light tracking for the sun direction.
//!
//! The host represents the sun as a distant light; this module derives the
//! parameter edits for it. [`SunlightState`] remembers the last emitted dome
//! rotation and stays silent while the model's sun direction is unchanged, so
//! redraws that touch other parameters do not churn the light transform.

use serde::{Deserialize, Serialize};

use crate::model::SunpathModel;
use crate::Result;

/// Creation attributes for the host's distant light.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistantLightParams {
    /// Angular diameter of the light source in degrees.
    pub angle: f64,
    /// Light intensity in the host's units.
    pub intensity: f64,
}

impl Default for DistantLightParams {
    fn default() -> Self {
        Self {
            angle: 1.0,
            intensity: 3000.0,
        }
    }
}

/// One rotation/visibility edit for the tracked light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunlightUpdate {
    /// Pitch in degrees (rotation about X).
    pub pitch: f64,
    /// Yaw in degrees (rotation about Y).
    pub yaw: f64,
    /// Whether the light should be visible; false while the sun is below the
    /// horizon.
    pub visible: bool,
}

/// Change detector emitting light edits only when the sun actually moved.
#[derive(Debug, Clone, Default)]
pub struct SunlightState {
    last_rotation: Option<(f64, f64)>,
}

impl SunlightState {
    /// Creates a tracker with no remembered rotation.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Computes the light edit for the model's current state.
    ///
    /// Returns `Ok(None)` when the dome rotation matches the last emitted
    /// update.
    ///
    /// # Errors
    /// Propagates calendar and ephemeris failures from the model queries.
    pub fn update(&mut self, model: &SunpathModel) -> Result<Option<SunlightUpdate>> {
        let rotation = model.dome_rotation_angles()?;
        if self.last_rotation == Some(rotation) {
            return Ok(None);
        }
        let direction = model.current_position()?;
        let visible = direction.y >= 0.0;
        self.last_rotation = Some(rotation);
        log::debug!(
            "sunlight update: pitch {:.2}°, yaw {:.2}°, visible {visible}",
            rotation.0,
            rotation.1,
        );
        Ok(Some(SunlightUpdate {
            pitch: rotation.0,
            yaw: rotation.1,
            visible,
        }))
    }

    /// Forgets the last emitted rotation, e.g. after the light was deleted
    /// and recreated by the host.
    pub fn reset(&mut self) {
        self.last_rotation = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_light_params() {
        let params = DistantLightParams::default();
        assert!((params.angle - 1.0).abs() < f64::EPSILON);
        assert!((params.intensity - 3000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_update_deduplicates_unchanged_rotation() {
        let model = SunpathModel::new(172, 12, 0, 112.94, 28.12);
        let mut state = SunlightState::new();

        let first = state.update(&model).unwrap();
        assert!(first.is_some());
        assert!(state.update(&model).unwrap().is_none());

        state.reset();
        assert!(state.update(&model).unwrap().is_some());
    }

    #[test]
    fn test_update_tracks_model_mutation() {
        let mut model = SunpathModel::new(172, 12, 0, 112.94, 28.12);
        let mut state = SunlightState::new();

        let noon = state.update(&model).unwrap().unwrap();
        assert!(noon.visible);

        model.set_hour(2);
        let night = state.update(&model).unwrap().unwrap();
        assert!(!night.visible);
        // Below the horizon the pitch flips positive (-altitude).
        assert!(night.pitch > 0.0);
    }
}
