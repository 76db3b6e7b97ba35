// src/body.rs

use crate::vector::Vec2;
use std::collections::VecDeque;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub name: String,
    pub position: Vec2,
    pub velocity: Vec2,
    pub acceleration: Vec2,
    pub mass: f64,
    pub color: String,
    pub trail_max_length: usize,
    pub trail: VecDeque<Vec2>,
    pub destroyed: bool,
}

impl Body {
    pub fn new(
        name: impl Into<String>,
        position: Vec2,
        velocity: Vec2,
        mass: f64,
        color: impl Into<String>,
        trail_max_length: usize,
    ) -> Self {
        Body {
            name: name.into(),
            position,
            velocity,
            acceleration: Vec2::zeros(),
            mass,
            color: color.into(),
            trail_max_length,
            trail: VecDeque::with_capacity(trail_max_length + 1),
            destroyed: false,
        }
    }

    /// Records the current position, evicting the oldest sample once the
    /// trail is over its length.
    pub fn update_trail(&mut self) {
        self.trail.push_back(self.position);
        while self.trail.len() > self.trail_max_length {
            self.trail.pop_front();
        }
    }

    /// Scatter marker size used by the renderer.
    pub fn marker_size(&self) -> f64 {
        4e-4 * self.mass.powf(1.0 / 6.0)
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}(m={:.2e}, p=[{:.2e}, {:.2e}], v=[{:.2e}, {:.2e}])",
            self.name, self.mass, self.position.x, self.position.y, self.velocity.x, self.velocity.y
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drifting(trail_max_length: usize) -> Body {
        Body::new(
            "probe",
            Vec2::zeros(),
            Vec2::new(1.0, 0.0),
            1.0,
            "white",
            trail_max_length,
        )
    }

    #[test]
    fn trail_is_bounded_fifo() {
        let mut body = drifting(3);
        for step in 0..10 {
            body.position = Vec2::new(step as f64, 0.0);
            body.update_trail();
            assert!(body.trail.len() <= 3);
        }
        assert_eq!(body.trail.len(), 3);
        let xs: Vec<f64> = body.trail.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![7.0, 8.0, 9.0]);
    }

    #[test]
    fn zero_length_trail_stays_empty() {
        let mut body = drifting(0);
        body.update_trail();
        body.update_trail();
        assert!(body.trail.is_empty());
    }

    #[test]
    fn display_is_compact() {
        let body = drifting(0);
        assert_eq!(
            body.to_string(),
            "probe(m=1.00e0, p=[0.00e0, 0.00e0], v=[1.00e0, 0.00e0])"
        );
    }
}
