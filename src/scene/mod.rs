//! Render-facing scene geometry: configuration, colors, polylines, placement.
//!
//! The host application owns the actual scene graph; this module produces the
//! plain geometry it draws — polylines in world space plus anchor points for
//! text labels. Everything is derived from one [`SceneConfig`] that the
//! session constructs once and passes by reference to the collaborators that
//! need it.

pub mod compass;
pub mod figure;

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Multiplier from the session scale slider to world units.
const WORLD_SCALE_FACTOR: f64 = 200.0;

/// 8-bit RGB color triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Creates a color from its channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Default body color for path curves and compass rings.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Muted color for secondary curves and compass spokes.
    pub const GRAY: Self = Self::new(128, 128, 128);

    /// Accent color for the current-day arc, tick marks and arrowheads.
    pub const HIGHLIGHT: Self = Self::new(255, 160, 40);
}

/// Shared per-session scene configuration.
///
/// Constructed once at session start and passed down; there is no implicit
/// process-wide state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneConfig {
    /// World-space origin of the sun-path dome.
    pub origin: DVec3,
    /// Scale slider value; see [`world_scale`](Self::world_scale).
    pub scale: f64,
    /// Body color for path curves and compass rings.
    pub color: Rgb,
    /// Whether sunrise/sunset/timestamp labels are produced with the figure.
    pub show_info: bool,
    /// Whether the distant light should track the sun.
    pub sun_enabled: bool,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            origin: DVec3::ZERO,
            scale: 50.0,
            color: Rgb::WHITE,
            show_info: false,
            sun_enabled: false,
        }
    }
}

impl SceneConfig {
    /// Radius of the sun-path dome in world units (`scale` × 200).
    #[must_use]
    pub fn world_scale(&self) -> f64 {
        self.scale * WORLD_SCALE_FACTOR
    }
}

/// One renderable linear curve.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    /// World-space points, connected in order.
    pub points: Vec<DVec3>,
    /// Line color.
    pub color: Rgb,
    /// Line thickness in the host's units.
    pub thickness: f32,
}

/// Scales unit-sphere points to the dome radius and moves them to the origin.
#[must_use]
pub fn place_points(config: &SceneConfig, points: &[DVec3]) -> Vec<DVec3> {
    let scale = config.world_scale();
    points
        .iter()
        .map(|point| *point * scale + config.origin)
        .collect()
}
