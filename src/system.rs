// src/system.rs

use crate::body::Body;
use crate::error::SimError;
use itertools::Itertools;

/// Name-unique set of active bodies. Insertion order is kept because pair
/// enumeration order decides the floating-point summation order.
#[derive(Debug, Clone, Default)]
pub struct System {
    bodies: Vec<Body>,
}

impl System {
    pub fn new() -> Self {
        System { bodies: Vec::new() }
    }

    pub fn insert(&mut self, body: Body) -> Result<(), SimError> {
        if self.index_of(&body.name).is_some() {
            return Err(SimError::DuplicateBody { name: body.name });
        }
        self.bodies.push(body);
        Ok(())
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.bodies.iter().position(|b| b.name == name)
    }

    pub fn get(&self, name: &str) -> Option<&Body> {
        self.bodies.iter().find(|b| b.name == name)
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn bodies_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn names(&self) -> Vec<String> {
        self.bodies.iter().map(|b| b.name.clone()).collect()
    }

    /// Every unordered pair of indices exactly once:
    /// (0, 1), (0, 2), .., (0, n-1), (1, 2), ..
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> {
        (0..self.bodies.len()).tuple_combinations()
    }

    /// Mutable access to two distinct bodies at once.
    pub fn pair_mut(&mut self, i: usize, j: usize) -> (&mut Body, &mut Body) {
        assert!(i < j, "pair indices must be ordered");
        let (left, right) = self.bodies.split_at_mut(j);
        (&mut left[i], &mut right[0])
    }

    /// Drops every body flagged as destroyed and returns them in system order.
    pub fn remove_destroyed(&mut self) -> Vec<Body> {
        if !self.bodies.iter().any(|b| b.destroyed) {
            return Vec::new();
        }
        let (destroyed, alive): (Vec<Body>, Vec<Body>) =
            self.bodies.drain(..).partition(|b| b.destroyed);
        self.bodies = alive;
        destroyed
    }
}
