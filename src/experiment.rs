use crate::config::SimulationConfig;
use crate::simulation::RunSummary;
use chrono::Utc;
use serde::Serialize;
use std::error::Error;
use std::fs::OpenOptions;
use std::path::Path;

#[derive(Serialize)]
struct RunRecord {
    date: String,
    center_on: String,
    solver: String,
    seed: u64,
    solar_mass: f64,
    days_per_frame: u32,
    first_frame: usize,
    frames_rendered: usize,
    destroyed: String,
    survivors: String,
    execution_duration: f64,
    config: String,
}

/// Appends one row describing a finished pass to `log_path`, writing the
/// header only when the file is new.
pub fn export_run(
    log_path: &Path,
    config: &SimulationConfig,
    summary: &RunSummary,
) -> Result<(), Box<dyn Error>> {
    let destroyed = summary
        .destroyed
        .iter()
        .map(|d| format!("{}@{}", d.name, d.day))
        .collect::<Vec<_>>()
        .join(";");
    let record = RunRecord {
        date: Utc::now().to_rfc3339(),
        center_on: summary.center_on.clone(),
        solver: summary.solver.clone(),
        seed: config.seed,
        solar_mass: config.solar_mass,
        days_per_frame: config.days_per_frame,
        first_frame: summary.first_frame,
        frames_rendered: summary.frames_rendered,
        destroyed,
        survivors: summary.survivors().join(";"),
        execution_duration: summary.execution_duration,
        config: serde_json::to_string(config)?,
    };

    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file_exists = log_path.exists();
    let file = OpenOptions::new().append(true).create(true).open(log_path)?;

    let mut wtr = csv::WriterBuilder::new()
        .has_headers(!file_exists)
        .from_writer(file);

    wtr.serialize(record)?;
    wtr.flush()?;
    Ok(())
}
