//! Builds the full sun-path figure for one session and prints what the host
//! would draw.

use sunpath::scene::figure::sunpath_figure;
use sunpath::{SceneConfig, SunlightState, SunpathModel};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let model = SunpathModel::new(230, 12, 30, 112.94, 28.12);
    let config = SceneConfig {
        show_info: true,
        sun_enabled: true,
        ..SceneConfig::default()
    };

    let figure = sunpath_figure(&model, &config)?;

    if let Some(current) = &figure.current_day {
        println!("current-day arc: {} points", current.points.len());
    }
    for (index, curve) in figure.day_curves.iter().enumerate() {
        println!("day arc {index}: {} points", curve.points.len());
    }
    println!("analemmas: {}", figure.analemmas.len());
    for curve in &figure.analemmas {
        println!("  {} points, thickness {}", curve.points.len(), curve.thickness);
    }

    let compass = &figure.compass;
    println!(
        "compass: {} rings, {} spokes, {} arrows, {} ticks, tick length {:.1}",
        compass.rings.len(),
        compass.spokes.len(),
        compass.arrows.len(),
        compass.ticks.len(),
        compass.tick_length
    );

    if let Some(info) = &figure.info {
        println!("timestamp: {}", info.timestamp);
        match (info.sunrise, info.sunset) {
            (Some(sunrise), Some(sunset)) => {
                println!("sunrise: {sunrise}, sunset: {sunset}");
            }
            _ => println!("no sunrise/sunset transition today"),
        }
    }

    if config.sun_enabled {
        let mut light = SunlightState::new();
        if let Some(update) = light.update(&model)? {
            println!(
                "sunlight: pitch {:.2}°, yaw {:.2}°, visible {}",
                update.pitch, update.yaw, update.visible
            );
        }
    }

    Ok(())
}
