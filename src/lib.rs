pub mod body;
pub mod config;
pub mod error;
pub mod experiment;
pub mod forces;
pub mod orbit_generator;
pub mod render;
pub mod simulation;
pub mod solvers;
pub mod system;
pub mod vector;

pub use body::Body;
pub use config::SimulationConfig;
pub use error::SimError;
pub use orbit_generator::{in_orbit_of, initialize_bodies, produce_rogue, OrbitConfig};
pub use render::{CsvFrameWriter, Frame, FrameRenderer};
pub use simulation::{Destruction, RunSummary, Simulation};
pub use solvers::{SemiImplicitEuler, Solver};
pub use system::System;
pub use vector::{Planar, Vec2};
