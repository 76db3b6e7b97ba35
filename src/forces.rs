// src/forces.rs

use crate::body::Body;
use crate::error::SimError;
use crate::system::System;
use crate::vector::Planar;

pub const G: f64 = 6.674e-11;

/// Separation (m) under which the lighter body of a pair is destroyed.
/// A proximity threshold, well above the real solar radius of 7e8 m.
pub const COLLISION_DISTANCE: f64 = 4e9;

/// Applies the mutual attraction of one pair to both accelerations and flags
/// the lighter body if the pair is inside the collision distance. On equal
/// masses `p2` is the one destroyed.
pub fn compute_forces(p1: &mut Body, p2: &mut Body) -> Result<(), SimError> {
    let displacement = p1.position - p2.position;
    let r = displacement.norm();
    let direction = displacement.normalized()?;

    let force = G * p1.mass * p2.mass / (r * r);
    p1.acceleration -= direction * force / p1.mass;
    p2.acceleration += direction * force / p2.mass;

    if r < COLLISION_DISTANCE {
        if p1.mass < p2.mass {
            p1.destroyed = true;
        } else {
            p2.destroyed = true;
        }
    }
    Ok(())
}

/// One full force pass over the system. Must finish before any position is
/// moved in the same tick.
pub fn accumulate_forces(system: &mut System) -> Result<(), SimError> {
    let pairs: Vec<(usize, usize)> = system.pairs().collect();
    for (i, j) in pairs {
        let (p1, p2) = system.pair_mut(i, j);
        compute_forces(p1, p2)?;
    }
    Ok(())
}
