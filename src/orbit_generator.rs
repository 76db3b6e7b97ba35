// src/orbit_generator.rs

use crate::body::Body;
use crate::config::SimulationConfig;
use crate::error::SimError;
use crate::forces::G;
use crate::system::System;
use crate::vector::{Planar, Vec2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::Uniform;
use std::f64::consts::TAU;

pub const SOLAR_MASS: f64 = 1.989e30;
pub const AU: f64 = 1.496e11;
const SECONDS_PER_DAY: f64 = 86_400.0;

const ROGUE_SPEED: f64 = 2e4;
const JUPITER_RADIUS: f64 = 778.5e9;

/// Orbital parameters for a body placed around a parent.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitConfig {
    pub radius: f64,
    pub mass: f64,
    pub color: String,
    /// Position angle in radians; drawn uniformly from [0, 2π) when `None`.
    pub angle: Option<f64>,
    pub days_per_frame: u32,
}

pub struct PlanetTemplate {
    pub name: &'static str,
    pub radius: f64,
    pub mass: f64,
    pub color: &'static str,
}

pub const PLANETS: [PlanetTemplate; 6] = [
    PlanetTemplate {
        name: "mercury",
        radius: 57.91e9,
        mass: 3.285e23,
        color: "gray",
    },
    PlanetTemplate {
        name: "venus",
        radius: 108.2e9,
        mass: 4.867e24,
        color: "white",
    },
    PlanetTemplate {
        name: "earth",
        radius: 149.6e9,
        mass: 5.972e24,
        color: "c",
    },
    PlanetTemplate {
        name: "mars",
        radius: 227.9e9,
        mass: 6.39e23,
        color: "r",
    },
    PlanetTemplate {
        name: "jupiter",
        radius: 778.5e9,
        mass: 1.898e27,
        color: "brown",
    },
    PlanetTemplate {
        name: "saturn",
        radius: 1.434e12,
        mass: 5.68e26,
        color: "yellow",
    },
];

/// Kepler's third law scaled to Earth's year, clamped to [60, 365] days.
pub fn orbital_period_days(radius: f64) -> f64 {
    let period = 365.0 * (radius / AU).powf(1.5);
    period.min(365.0).max(60.0)
}

pub fn trail_length(radius: f64, days_per_frame: u32) -> usize {
    (0.8 * (orbital_period_days(radius) / days_per_frame as f64)) as usize
}

/// Places a body on a circular orbit around `parent`.
pub fn in_orbit_of<R: Rng + ?Sized>(
    parent: &Body,
    name: &str,
    orbit: &OrbitConfig,
    rng: &mut R,
) -> Result<Body, SimError> {
    let angle = match orbit.angle {
        Some(angle) => angle,
        None => {
            let range = Uniform::new(0.0, TAU)
                .map_err(|e| SimError::InvalidConfig(format!("angle range: {}", e)))?;
            rng.sample(range)
        }
    };

    let radial = Vec2::new(orbit.radius * angle.cos(), orbit.radius * angle.sin());
    let direction = radial.perpendicular().normalized()?;
    let speed = (G * parent.mass / orbit.radius).sqrt();

    Ok(Body::new(
        name,
        parent.position + radial,
        parent.velocity + speed * direction,
        orbit.mass,
        orbit.color.clone(),
        trail_length(orbit.radius, orbit.days_per_frame),
    ))
}

/// The intruder: a straight-line trajectory at 20 km/s, starting far enough
/// out to reach Jupiter's distance after `days_to_pass` days.
pub fn produce_rogue(days_to_pass: u32, solar_masses: f64) -> Body {
    let radius = ROGUE_SPEED * days_to_pass as f64 * SECONDS_PER_DAY + JUPITER_RADIUS;
    Body::new(
        "rogue",
        Vec2::new(-radius, 5.0 * AU),
        Vec2::new(ROGUE_SPEED, 0.0),
        SOLAR_MASS * solar_masses,
        "yellow",
        0,
    )
}

pub fn sun() -> Body {
    Body::new("sun", Vec2::zeros(), Vec2::zeros(), SOLAR_MASS, "yellow", 0)
}

/// Builds the default system: the sun, six planets in `PLANETS` order with
/// seeded random angles, then the rogue.
pub fn initialize_bodies(config: &SimulationConfig) -> Result<System, SimError> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut system = System::new();
    let sun = sun();
    system.insert(sun.clone())?;

    for planet in PLANETS.iter() {
        let orbit = OrbitConfig {
            radius: planet.radius,
            mass: planet.mass,
            color: planet.color.to_string(),
            angle: None,
            days_per_frame: config.days_per_frame,
        };
        let body = in_orbit_of(&sun, planet.name, &orbit, &mut rng)?;
        log::debug!("placed {}", body);
        system.insert(body)?;
    }

    system.insert(produce_rogue(config.days_to_pass, config.solar_mass))?;
    Ok(system)
}
