//! Sun position and sunrise/sunset report for a handful of cities.

use sunpath::{SunpathModel, SunriseResult};

#[derive(Debug)]
struct City {
    name: &'static str,
    latitude: f64,
    longitude: f64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let cities = [
        City {
            name: "Longyearbyen, Norway (Arctic)",
            latitude: 78.22,
            longitude: 15.65,
        },
        City {
            name: "London, United Kingdom",
            latitude: 51.5,
            longitude: -0.12,
        },
        City {
            name: "Changsha, China",
            latitude: 28.12,
            longitude: 112.94,
        },
        City {
            name: "Singapore",
            latitude: 1.283333,
            longitude: 103.833333,
        },
        City {
            name: "Auckland, New Zealand",
            latitude: -36.840556,
            longitude: 174.74,
        },
    ];

    // June solstice at local noon; day code 172 is June 21.
    for city in &cities {
        let model = SunpathModel::new(172, 12, 0, city.longitude, city.latitude);

        println!("=== {} ===", city.name);
        println!(
            "Coordinates: {:.2}°, {:.2}° (UTC{:+})",
            city.latitude,
            city.longitude,
            model.timezone_offset()
        );

        let direction = model.current_position()?;
        println!(
            "Sun direction at noon: ({:.3}, {:.3}, {:.3})",
            direction.x, direction.y, direction.z
        );

        let (pitch, yaw) = model.dome_rotation_angles()?;
        println!("Distant light rotation: pitch {pitch:.2}°, yaw {yaw:.2}°");

        match model.solar_events()? {
            SunriseResult::RegularDay {
                sunrise,
                transit,
                sunset,
            } => {
                println!("Sunrise: {}", sunrise.format("%H:%M:%S"));
                println!("Transit: {}", transit.format("%H:%M:%S"));
                println!("Sunset: {}", sunset.format("%H:%M:%S"));
            }
            SunriseResult::AllDay { .. } => println!("Midnight sun: no sunset today"),
            SunriseResult::AllNight { .. } => println!("Polar night: no sunrise today"),
        }
        println!();
    }

    Ok(())
}
