use crate::error::SimError;
use crate::system::System;
use crate::vector::Vec2;

pub trait Solver {
    /// Moves every body forward by `dt` seconds using the accelerations
    /// already accumulated, then re-centers the system on `center_on`.
    fn advance(&self, system: &mut System, dt: f64, center_on: &str) -> Result<(), SimError>;
    fn name(&self) -> String;
}

/// First-order symplectic Euler: position moves with the old velocity, then
/// velocity picks up this tick's acceleration.
pub struct SemiImplicitEuler;

impl Solver for SemiImplicitEuler {
    fn name(&self) -> String {
        "SemiImplicitEuler".to_string()
    }

    fn advance(&self, system: &mut System, dt: f64, center_on: &str) -> Result<(), SimError> {
        // snapshot is taken after the force pass and before anything moves
        let reference = system
            .get(center_on)
            .ok_or_else(|| SimError::InvalidBody {
                name: center_on.to_string(),
            })?;
        let (ref_pos, ref_vel) = (reference.position, reference.velocity);

        for obj in system.bodies_mut() {
            obj.position += dt * obj.velocity;
            obj.velocity += dt * obj.acceleration;
            obj.acceleration = Vec2::zeros();

            obj.position -= ref_pos;
            obj.velocity -= ref_vel;
        }
        Ok(())
    }
}
