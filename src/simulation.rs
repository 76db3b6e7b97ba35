// src/simulation.rs

use crate::body::Body;
use crate::config::{SimulationConfig, DT, TICKS_PER_DAY};
use crate::error::SimError;
use crate::forces::accumulate_forces;
use crate::orbit_generator::initialize_bodies;
use crate::render::{Frame, FrameRenderer};
use crate::solvers::{SemiImplicitEuler, Solver};
use crate::system::System;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info, warn};
use std::time::Instant;

/// A body removed during a run and the simulated day it happened on.
#[derive(Debug, Clone, PartialEq)]
pub struct Destruction {
    pub name: String,
    pub day: u32,
}

#[derive(Debug, Clone)]
pub struct RunSummary {
    pub center_on: String,
    pub solver: String,
    pub first_frame: usize,
    /// Index the next pass should start from to continue the numbering.
    pub next_frame: usize,
    pub frames_rendered: usize,
    pub days_elapsed: u32,
    pub destroyed: Vec<Destruction>,
    pub execution_duration: f64,
    pub final_state: System,
}

impl RunSummary {
    pub fn survivors(&self) -> Vec<String> {
        self.final_state.names()
    }
}

pub struct Simulation {
    config: SimulationConfig,
    solver: Box<dyn Solver>,
    show_progress: bool,
}

impl Simulation {
    pub fn new(config: SimulationConfig) -> Result<Self, SimError> {
        config.validate()?;
        Ok(Simulation {
            config,
            solver: Box::new(SemiImplicitEuler),
            show_progress: false,
        })
    }

    pub fn with_solver(mut self, solver: Box<dyn Solver>) -> Self {
        self.solver = solver;
        self
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Runs the default system from fresh, seeded initial conditions.
    pub fn run(
        &self,
        renderer: &mut dyn FrameRenderer,
        center_on: &str,
        initial_frame: usize,
    ) -> Result<RunSummary, SimError> {
        let system = initialize_bodies(&self.config)?;
        self.run_system(system, renderer, center_on, initial_frame)
    }

    /// Runs an arbitrary body set for the configured number of days.
    pub fn run_system(
        &self,
        mut system: System,
        renderer: &mut dyn FrameRenderer,
        center_on: &str,
        initial_frame: usize,
    ) -> Result<RunSummary, SimError> {
        let start = Instant::now();
        let total_days = self.config.total_days();
        let days_per_frame = self.config.days_per_frame;

        info!(
            "simulating {} days centered on '{}' with {} ({} bodies, seed {})",
            total_days,
            center_on,
            self.solver.name(),
            system.len(),
            self.config.seed
        );
        for body in system.bodies() {
            debug!("initial {}", body);
        }

        let pb = self.progress_bar(total_days);
        let mut destroyed = Vec::new();
        let mut days_elapsed = 0;
        let mut frame_index = initial_frame;

        while days_elapsed < total_days {
            for tick in 0..self.config.ticks_per_frame() {
                let day = days_elapsed + tick / TICKS_PER_DAY;
                for body in self.tick(&mut system, center_on)? {
                    if body.name == center_on {
                        warn!("reference body '{}' destroyed on day {}", body.name, day);
                    } else {
                        info!("{} destroyed on day {}", body.name, day);
                    }
                    destroyed.push(Destruction {
                        name: body.name,
                        day,
                    });
                }
            }

            for body in system.bodies_mut() {
                body.update_trail();
            }
            renderer.render(&Frame {
                index: frame_index,
                day: days_elapsed,
                center_on,
                bodies: system.bodies(),
            })?;
            debug!("frame {} rendered (day {})", frame_index, days_elapsed);

            frame_index += 1;
            days_elapsed += days_per_frame;
            pb.inc(days_per_frame as u64);
        }

        pb.finish_with_message("Simulation complete");
        let summary = RunSummary {
            center_on: center_on.to_string(),
            solver: self.solver.name(),
            first_frame: initial_frame,
            next_frame: frame_index,
            frames_rendered: frame_index - initial_frame,
            days_elapsed,
            destroyed,
            execution_duration: start.elapsed().as_secs_f64(),
            final_state: system,
        };
        info!(
            "rendered {} frames in {:.2}s, {} bodies remain",
            summary.frames_rendered,
            summary.execution_duration,
            summary.final_state.len()
        );
        Ok(summary)
    }

    /// One physics step: full force pass, integration and re-centering, then
    /// removal of anything destroyed. Returns the removed bodies.
    pub fn tick(&self, system: &mut System, center_on: &str) -> Result<Vec<Body>, SimError> {
        accumulate_forces(system)?;
        self.solver.advance(system, DT, center_on)?;
        Ok(system.remove_destroyed())
    }

    fn progress_bar(&self, total_days: u32) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }
        let pb = ProgressBar::new(total_days as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] day {pos}/{len} ({eta})")
        {
            pb.set_style(style.progress_chars("#>-"));
        }
        pb
    }
}
