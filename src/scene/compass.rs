//! Compass geometry for the base of the sun-path dome.
//!
//! Two concentric rings on the ground plane, radial spokes, arrowheads and
//! tick marks, plus anchor points for the cardinal and degree labels the host
//! renders as text. All circles live on y = 0 regardless of the configured
//! origin height; the compass marks the ground under the dome.

use glam::DVec3;

use super::{Polyline, Rgb, SceneConfig};

/// Anchor for a text label the host renders.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelAnchor {
    /// Label text.
    pub text: String,
    /// World-space anchor position.
    pub position: DVec3,
}

/// The full compass drawing set.
#[derive(Debug, Clone)]
pub struct CompassGeometry {
    /// The two concentric base rings.
    pub rings: Vec<Polyline>,
    /// Radial spokes from the outer anchor ring to the origin.
    pub spokes: Vec<Polyline>,
    /// Closed arrowhead triangles between the cardinal directions.
    pub arrows: Vec<Polyline>,
    /// 30°-step tick marks on the inner ring.
    pub ticks: Vec<Polyline>,
    /// Anchors for the E/S/W/N labels.
    pub cardinal_labels: Vec<LabelAnchor>,
    /// Anchors for the degree labels (90, 120, … 330, 0, 30, 60).
    pub degree_labels: Vec<LabelAnchor>,
    /// Length of one tick-mark segment, for dependent marker sizing.
    pub tick_length: f64,
}

/// Points of a ground-plane circle around the configured origin.
///
/// `offset` multiplies the dome radius; `step_degrees` is the angular step.
/// The walk covers 0° to 360° inclusive, so a step that divides 360 produces
/// a closed ring whose first and last points coincide. Coordinates are
/// rounded to 3 decimals.
///
/// # Panics
/// Panics if `step_degrees` is 0.
#[must_use]
pub fn ring_points(config: &SceneConfig, offset: f64, step_degrees: u32) -> Vec<DVec3> {
    assert_ne!(step_degrees, 0, "ring step must be positive");
    let radius = config.world_scale() * offset;
    let mut points = Vec::with_capacity((360 / step_degrees + 2) as usize);
    let mut angle = 0;
    while angle <= 360 {
        let radians = f64::from(angle).to_radians();
        let x = config.origin.x + radius * radians.cos();
        let z = config.origin.z + radius * radians.sin();
        points.push(DVec3::new(round3(x), 0.0, round3(z)));
        angle += step_degrees;
    }
    points
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Builds the complete compass for a session configuration.
#[must_use]
pub fn compass(config: &SceneConfig) -> CompassGeometry {
    let mut rings = Vec::with_capacity(2);
    for offset in [1.0, 1.04] {
        rings.push(Polyline {
            points: ring_points(config, offset, 1),
            color: config.color,
            thickness: 1.1,
        });
    }

    // Cardinal anchors at increasing radii: arrow bases, arrow tips and the
    // label positions beyond them.
    let inner_anchors = ring_points(config, 1.15, 90);
    let outer_anchors = ring_points(config, 1.25, 90);
    let arrow_ring = ring_points(config, 1.15, 2);
    let label_anchors = ring_points(config, 1.33, 90);

    let spokes = outer_anchors
        .iter()
        .map(|&point| Polyline {
            points: vec![point, config.origin],
            color: Rgb::GRAY,
            thickness: 1.0,
        })
        .collect();

    // One arrowhead just past each cardinal direction, built from the dense
    // ring: indices 1, 46, 91, 136 sit at 2°, 92°, 182° and 272°.
    let mut arrows = Vec::with_capacity(4);
    for (side, index) in (1..181_usize).step_by(45).enumerate() {
        let base = outer_anchors[side];
        let tip = arrow_ring[index];
        let flank = inner_anchors[side];
        arrows.push(Polyline {
            points: vec![base, tip, flank, base],
            color: Rgb::HIGHLIGHT,
            thickness: 1.5,
        });
    }

    let tick_inner = ring_points(config, 1.0, 30);
    let tick_outer = ring_points(config, 1.06, 30);
    let tick_length = tick_outer[3].z - tick_inner[3].z;
    let ticks = tick_inner
        .iter()
        .zip(&tick_outer)
        .map(|(&inner, &outer)| Polyline {
            points: vec![inner, outer],
            color: Rgb::HIGHLIGHT,
            thickness: 1.5,
        })
        .collect();

    let cardinal_labels = ["E", "S", "W", "N"]
        .iter()
        .zip(&label_anchors)
        .map(|(&text, &position)| LabelAnchor {
            text: text.to_owned(),
            position,
        })
        .collect();

    // Degree labels start at the 0° ring position, which faces east; the
    // sequence is rotated so each anchor shows its compass bearing.
    let degree_anchors = ring_points(config, 1.1, 30);
    let degree_labels = (0..12_usize)
        .map(|index| LabelAnchor {
            text: ((index * 30 + 90) % 360).to_string(),
            position: degree_anchors[index],
        })
        .collect();

    CompassGeometry {
        rings,
        spokes,
        arrows,
        ticks,
        cardinal_labels,
        degree_labels,
        tick_length,
    }
}
