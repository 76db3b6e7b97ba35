// src/vector.rs

use crate::error::SimError;
use nalgebra::Vector2;

pub type Vec2 = Vector2<f64>;

/// Plane operations nalgebra does not spell the way the simulation needs.
pub trait Planar: Sized {
    /// Rotates a quarter turn clockwise: `(x, y) -> (y, -x)`.
    fn perpendicular(&self) -> Self;

    /// `v / |v|`, refusing the zero vector instead of producing NaNs.
    fn normalized(&self) -> Result<Self, SimError>;
}

impl Planar for Vec2 {
    fn perpendicular(&self) -> Self {
        Vec2::new(self.y, -self.x)
    }

    fn normalized(&self) -> Result<Self, SimError> {
        let norm = self.norm();
        if norm == 0.0 {
            return Err(SimError::DivisionByZero);
        }
        Ok(*self / norm)
    }
}
