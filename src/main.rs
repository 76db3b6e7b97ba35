use anyhow::{anyhow, Context, Result};
use chrono::Utc;
use clap::Parser;
use log::info;
use rogue_star::experiment::export_run;
use rogue_star::{CsvFrameWriter, Simulation, SimulationConfig};
use std::path::PathBuf;

/// Solar system with a rogue star passing through. Writes one CSV per frame.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Mass of the rogue body in solar masses
    #[arg(long, default_value_t = 1.0)]
    solar_mass: f64,

    #[arg(long, default_value_t = 5)]
    days_per_frame: u32,

    #[arg(long, default_value_t = 12345)]
    seed: u64,

    /// Days until the rogue reaches Jupiter's distance; the run lasts 5x this
    #[arg(long, default_value_t = 600)]
    days_to_pass: u32,

    #[arg(long, default_value = "frames")]
    output_root: PathBuf,

    #[arg(long)]
    no_progress: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = SimulationConfig {
        solar_mass: args.solar_mass,
        days_per_frame: args.days_per_frame,
        seed: args.seed,
        days_to_pass: args.days_to_pass,
    };
    let run_dir = args.output_root.join(config.run_tag(Utc::now()));
    std::fs::create_dir_all(&run_dir)
        .with_context(|| format!("creating {}", run_dir.display()))?;
    info!("writing frames to {}", run_dir.display());

    let sim = Simulation::new(config)?.with_progress(!args.no_progress);
    let mut writer = CsvFrameWriter::new(&run_dir);
    let log_path = args.output_root.join("runs.csv");

    let mut next_frame = 0;
    for center_on in ["sun", "rogue"] {
        let summary = sim
            .run(&mut writer, center_on, next_frame)
            .with_context(|| format!("simulation centered on {}", center_on))?;
        export_run(&log_path, sim.config(), &summary)
            .map_err(|e| anyhow!("writing {}: {}", log_path.display(), e))?;
        next_frame = summary.next_frame;
    }

    info!("{} frames written to {}", next_frame, writer.dir().display());
    Ok(())
}
