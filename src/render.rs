// src/render.rs

use crate::body::Body;
use crate::error::SimError;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Half-width of the square view window in meters (Saturn's orbit).
pub const VIEW_LIMIT: f64 = 1.434e12;

/// What the renderer gets once per frame.
#[derive(Debug)]
pub struct Frame<'a> {
    pub index: usize,
    /// Simulated days elapsed before this frame's batch of ticks.
    pub day: u32,
    pub center_on: &'a str,
    pub bodies: &'a [Body],
}

pub trait FrameRenderer {
    fn render(&mut self, frame: &Frame<'_>) -> Result<(), SimError>;
}

#[derive(Serialize)]
struct FrameRow<'a> {
    day: u32,
    name: &'a str,
    color: &'a str,
    mass: f64,
    marker_size: f64,
    kind: &'static str,
    x: f64,
    y: f64,
    in_view: bool,
}

impl<'a> FrameRow<'a> {
    fn new(day: u32, body: &'a Body, kind: &'static str, x: f64, y: f64) -> Self {
        FrameRow {
            day,
            name: &body.name,
            color: &body.color,
            mass: body.mass,
            marker_size: body.marker_size(),
            kind,
            x,
            y,
            in_view: x.abs() <= VIEW_LIMIT && y.abs() <= VIEW_LIMIT,
        }
    }
}

/// Writes each frame as `<dir>/<index:05>.csv`: one `body` row per body at
/// its current position followed by one `trail` row per trail sample.
pub struct CsvFrameWriter {
    dir: PathBuf,
}

impl CsvFrameWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        CsvFrameWriter { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn frame_path(&self, index: usize) -> PathBuf {
        self.dir.join(format!("{:05}.csv", index))
    }

    fn write_frame(&self, frame: &Frame<'_>) -> Result<(), csv::Error> {
        fs::create_dir_all(&self.dir)?;
        let mut wtr = csv::Writer::from_path(self.frame_path(frame.index))?;

        for body in frame.bodies {
            let (x, y) = (body.position.x, body.position.y);
            wtr.serialize(FrameRow::new(frame.day, body, "body", x, y))?;
            for sample in &body.trail {
                wtr.serialize(FrameRow::new(frame.day, body, "trail", sample.x, sample.y))?;
            }
        }
        wtr.flush()?;
        Ok(())
    }
}

impl FrameRenderer for CsvFrameWriter {
    fn render(&mut self, frame: &Frame<'_>) -> Result<(), SimError> {
        self.write_frame(frame)
            .map_err(|e| SimError::render(frame.index, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::Vec2;

    fn scratch_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir()
            .join(format!("rogue_star_render_{}_{}", tag, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn writes_body_and_trail_rows() {
        let dir = scratch_dir("rows");
        let mut earth = Body::new("earth", Vec2::new(1.0, 2.0), Vec2::zeros(), 5.972e24, "c", 4);
        earth.update_trail();
        earth.position = Vec2::new(3.0, 4.0);
        earth.update_trail();
        let bodies = vec![earth];

        let mut writer = CsvFrameWriter::new(&dir);
        writer
            .render(&Frame {
                index: 12,
                day: 60,
                center_on: "sun",
                bodies: &bodies,
            })
            .unwrap();

        let text = fs::read_to_string(dir.join("00012.csv")).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "day,name,color,mass,marker_size,kind,x,y,in_view");
        assert_eq!(lines.len(), 4);
        assert!(lines[1].ends_with(",body,3.0,4.0,true"));
        assert!(lines[2].ends_with(",trail,1.0,2.0,true"));
        assert!(lines[3].ends_with(",trail,3.0,4.0,true"));
        assert!(lines[1].starts_with("60,earth,c,"));

        let far = vec![Body::new(
            "rogue",
            Vec2::new(-1.8e12, 7.48e11),
            Vec2::zeros(),
            1.989e30,
            "yellow",
            0,
        )];
        writer
            .render(&Frame {
                index: 13,
                day: 65,
                center_on: "sun",
                bodies: &far,
            })
            .unwrap();
        let text = fs::read_to_string(writer.frame_path(13)).unwrap();
        assert!(text.lines().nth(1).unwrap().ends_with(",false"));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn unwritable_target_is_a_render_failure() {
        let dir = scratch_dir("blocked");
        fs::create_dir_all(dir.parent().unwrap()).unwrap();
        // a regular file where the frame directory should be
        fs::write(&dir, b"occupied").unwrap();

        let mut writer = CsvFrameWriter::new(&dir);
        let err = writer
            .render(&Frame {
                index: 3,
                day: 15,
                center_on: "sun",
                bodies: &[],
            })
            .unwrap_err();
        assert!(matches!(err, SimError::RenderFailure { frame: 3, .. }));

        fs::remove_file(&dir).unwrap();
    }
}
