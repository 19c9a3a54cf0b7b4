// Author: Dustin Pilgrim
// License: MIT

use std::path::{Path, PathBuf};

use beaverdam_core::{show_resize_cursor, Border, Corner, DragMode, Geometry};
use eventline::{debug, info, warn};

use crate::annotation::Annotation;
use crate::cli::Cmd;
use crate::config::BeaverdamConfig;
use crate::cursor::CursorSlot;
use crate::paths::ensure_parent_dir;
use crate::render::PixmapSurface;

pub fn run_cmd(cmd: Cmd, cfg: &BeaverdamConfig) -> Result<(), String> {
    match cmd {
        Cmd::Render { file, frame, width, height, out } => {
            let ann = load_annotation(&file, cfg)?;
            let out = out.unwrap_or_else(|| default_render_path(cfg, frame));
            let drawn = render_frame(&ann, frame, width, height, cfg, &out)?;
            info!("rendered frame {} ({} boxes) to {}", frame, drawn, out.display());
            println!("{drawn} boxes -> {}", out.display());
            Ok(())
        }

        Cmd::Hit { file, frame, x, y } => {
            let ann = load_annotation(&file, cfg)?;
            let hits = hit_report(&ann, frame, x, y);
            debug!("hit ({}, {}) at frame {}: {} boxes", x, y, frame, hits.len());
            if hits.is_empty() {
                println!("nothing at ({x}, {y}) on frame {frame}");
            }
            for hit in hits {
                println!(
                    "{}: border={} corner={} cursor={}",
                    hit.thing,
                    hit.border.map_or("-".into(), |b| format!("{b:?}")),
                    hit.corner.map_or("-".into(), |c| format!("{c:?}")),
                    hit.cursor_name
                );
            }
            Ok(())
        }

        Cmd::Drag { file, frame, from, to, out } => {
            let ann = load_annotation(&file, cfg)?;
            let Some(outcome) = drag(&ann, frame, from, to) else {
                warn!("drag missed every box at frame {}", frame);
                return Err(format!("no box under ({}, {}) on frame {frame}", from.0, from.1));
            };
            if outcome.new_keyframe {
                info!("thing {}: new keyframe at frame {}", outcome.thing, frame);
            }
            debug!("thing {}: {:?} -> {:?}", outcome.thing, outcome.mode, outcome.geometry);

            let out = out.unwrap_or(file);
            ann.save(&out)?;
            println!("{} updated -> {}", outcome.thing, out.display());
            Ok(())
        }
    }
}

fn load_annotation(file: &Path, cfg: &BeaverdamConfig) -> Result<Annotation, String> {
    let ann = Annotation::load(file, cfg.default_fill)?;
    info!("loaded {} things from {}", ann.things.len(), file.display());
    for thing in &ann.things {
        debug!(
            "thing {}: {} keyframes at {:?}",
            thing.id,
            thing.keyframe_count(),
            thing.keyframe_frames()
        );
    }
    Ok(ann)
}

fn default_render_path(cfg: &BeaverdamConfig, frame: u32) -> PathBuf {
    cfg.output_directory.join(format!("frame-{frame:05}.png"))
}

/// Draws every box at `frame` and writes the PNG. Returns the box count.
pub fn render_frame(
    ann: &Annotation,
    frame: u32,
    width: u32,
    height: u32,
    cfg: &BeaverdamConfig,
    out: &Path,
) -> Result<usize, String> {
    let mut surface = PixmapSurface::new(width, height, cfg.background_colour)?;

    let boxes = ann.boxes_at(frame);
    for (_, b) in &boxes {
        b.draw(&mut surface);
    }

    ensure_parent_dir(out).map_err(|e| format!("create output dir: {e}"))?;
    surface.save_png(out)?;

    Ok(boxes.len())
}

#[derive(Debug, Clone, PartialEq)]
pub struct Hit {
    pub thing: String,
    pub border: Option<Border>,
    pub corner: Option<Corner>,
    pub cursor_name: &'static str,
}

/// Every box containing (x, y), with its handle classification.
pub fn hit_report(ann: &Annotation, frame: u32, x: f64, y: f64) -> Vec<Hit> {
    ann.boxes_at(frame)
        .into_iter()
        .filter(|(_, b)| b.contains(x, y))
        .map(|(thing, b)| {
            let border = b.classify_border(x, y);
            let corner = b.classify_corner(x, y);

            let mut cursor = CursorSlot::default();
            show_resize_cursor(&mut cursor, border, corner);

            Hit {
                thing: thing.id.clone(),
                border,
                corner,
                cursor_name: cursor.cursor_name,
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct DragOutcome {
    pub thing: String,
    pub mode: DragMode,
    /// The box was interpolated and is now a new keyframe.
    pub new_keyframe: bool,
    pub geometry: Geometry,
}

/// Press at `from`, release at `to` on the first box that takes the press.
pub fn drag(ann: &Annotation, frame: u32, from: (f64, f64), to: (f64, f64)) -> Option<DragOutcome> {
    let (thing, b, mode) = ann
        .boxes_at(frame)
        .into_iter()
        .find_map(|(thing, b)| DragMode::pick(&b, from.0, from.1).map(|m| (thing, b, m)))?;

    let new_keyframe = b.is_interpolated();
    mode.apply(&b, to.0, to.1);

    Some(DragOutcome {
        thing: thing.id.clone(),
        mode,
        new_keyframe,
        geometry: b.geometry(),
    })
}

#[cfg(test)]
mod tests {
    use beaverdam_core::Fill;

    use super::*;
    use crate::annotation::AnnotationRecord;

    fn sample() -> Annotation {
        let rec: AnnotationRecord = serde_json::from_str(
            r##"{ "things": [
                { "id": "car", "fill": "#ff0000", "keyframes": [
                    { "x": 0, "y": 0, "w": 10, "h": 10, "frame": 0 }
                ]},
                { "id": "sign", "keyframes": [
                    { "x": 5, "y": 5, "w": 20, "h": 20, "frame": 2 }
                ]}
            ]}"##,
        )
        .unwrap();
        Annotation::from_record(&rec, Fill::WHITE)
    }

    #[test]
    fn hits_report_handles_and_cursor() {
        let ann = sample();

        let hits = hit_report(&ann, 3, 10.0, 10.0);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].thing, "car");
        assert_eq!(hits[0].border, Some(Border::BottomRight));
        assert_eq!(hits[0].corner, Some(Corner::BottomRight));
        assert_eq!(hits[0].cursor_name, "nesw-resize");
        assert_eq!(hits[1].thing, "sign");
        assert_eq!(hits[1].border, None);
        assert_eq!(hits[1].cursor_name, "default");

        let hits = hit_report(&ann, 3, 5.0, 1.0);
        assert_eq!(hits[0].border, Some(Border::Top));
        assert_eq!(hits[0].cursor_name, "ns-resize");
    }

    #[test]
    fn frames_before_a_thing_starts_have_no_box() {
        let ann = sample();
        let hits = hit_report(&ann, 1, 10.0, 10.0);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].thing, "car");
    }

    #[test]
    fn drag_materializes_held_box() {
        let ann = sample();
        let outcome = drag(&ann, 5, (10.0, 5.0), (30.0, 5.0)).unwrap();
        assert_eq!(outcome.thing, "car");
        assert_eq!(outcome.mode, DragMode::Resize(Border::Right));
        assert!(outcome.new_keyframe);
        assert_eq!(outcome.geometry, Geometry::new(0.0, 0.0, 30.0, 10.0));

        let car = &ann.things[0];
        assert_eq!(car.keyframe_frames(), vec![0, 5]);
        assert_eq!(car.box_at(5).unwrap().w(), 30.0);
        assert_eq!(car.box_at(0).unwrap().w(), 10.0);
    }

    #[test]
    fn drag_on_empty_space_does_nothing() {
        let ann = sample();
        assert_eq!(drag(&ann, 5, (100.0, 100.0), (0.0, 0.0)), None);
        assert_eq!(ann.things[0].keyframe_count(), 1);
    }

    #[test]
    fn render_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("renders").join("f.png");
        let cfg = BeaverdamConfig::default();

        let n = render_frame(&sample(), 2, 32, 32, &cfg, &out).unwrap();
        assert_eq!(n, 2);
        assert!(out.exists());
    }
}
