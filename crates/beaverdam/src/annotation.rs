// Author: Dustin Pilgrim
// License: MIT

use std::cell::RefCell;
use std::fs;
use std::path::Path;
use std::rc::Rc;

use beaverdam_core::{BoxRecord, Fill, FrameBox, KeyframeOwner};
use serde::{Deserialize, Serialize};

use crate::paths::ensure_parent_dir;

/// On-disk form of one annotated object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThingRecord {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<Fill>,
    #[serde(default)]
    pub keyframes: Vec<BoxRecord>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnnotationRecord {
    #[serde(default)]
    pub things: Vec<ThingRecord>,
}

/// An annotated object: a fill colour plus keyframes sorted by frame.
pub struct Thing {
    pub id: String,
    fill: Fill,
    fill_is_default: bool,
    keyframes: RefCell<Vec<FrameBox>>,
}

impl Thing {
    pub fn from_record(rec: &ThingRecord, default_fill: Fill) -> Rc<Self> {
        let thing = Rc::new(Self {
            id: rec.id.clone(),
            fill: rec.fill.unwrap_or(default_fill),
            fill_is_default: rec.fill.is_none(),
            keyframes: RefCell::new(Vec::with_capacity(rec.keyframes.len())),
        });

        for kf in &rec.keyframes {
            let b = FrameBox::from_record(kf, &thing);
            thing.insert_keyframe(&b);
        }

        thing
    }

    /// Interpolated boxes are never stored, so every keyframe is written.
    pub fn to_record(&self) -> ThingRecord {
        ThingRecord {
            id: self.id.clone(),
            fill: (!self.fill_is_default).then_some(self.fill),
            keyframes: self
                .keyframes
                .borrow()
                .iter()
                .filter_map(FrameBox::to_record)
                .collect(),
        }
    }

    pub fn keyframe_count(&self) -> usize {
        self.keyframes.borrow().len()
    }

    pub fn keyframe_frames(&self) -> Vec<u32> {
        self.keyframes.borrow().iter().map(FrameBox::frame).collect()
    }

    /// Stored keyframe at `frame`, else the closest earlier keyframe held
    /// as an interpolated box. `None` before the first keyframe.
    pub fn box_at(&self, frame: u32) -> Option<FrameBox> {
        let keyframes = self.keyframes.borrow();
        match keyframes.binary_search_by_key(&frame, FrameBox::frame) {
            Ok(idx) => Some(keyframes[idx].clone()),
            Err(0) => None,
            Err(idx) => Some(keyframes[idx - 1].interpolated_copy(frame)),
        }
    }
}

impl KeyframeOwner for Thing {
    fn insert_keyframe(&self, frame_box: &FrameBox) {
        let mut keyframes = self.keyframes.borrow_mut();
        match keyframes.binary_search_by_key(&frame_box.frame(), FrameBox::frame) {
            Ok(idx) => keyframes[idx] = frame_box.clone(),
            Err(idx) => keyframes.insert(idx, frame_box.clone()),
        }
    }

    fn fill(&self) -> Fill {
        self.fill
    }
}

/// All things of one annotated video.
pub struct Annotation {
    pub things: Vec<Rc<Thing>>,
}

impl Annotation {
    pub fn from_record(rec: &AnnotationRecord, default_fill: Fill) -> Self {
        Self {
            things: rec
                .things
                .iter()
                .map(|t| Thing::from_record(t, default_fill))
                .collect(),
        }
    }

    pub fn to_record(&self) -> AnnotationRecord {
        AnnotationRecord {
            things: self.things.iter().map(|t| t.to_record()).collect(),
        }
    }

    pub fn load(path: &Path, default_fill: Fill) -> Result<Self, String> {
        let text = fs::read_to_string(path)
            .map_err(|e| format!("read annotation {}: {e}", path.display()))?;
        let rec: AnnotationRecord = serde_json::from_str(&text)
            .map_err(|e| format!("parse annotation {}: {e}", path.display()))?;
        Ok(Self::from_record(&rec, default_fill))
    }

    pub fn save(&self, path: &Path) -> Result<(), String> {
        let json = serde_json::to_string_pretty(&self.to_record())
            .map_err(|e| format!("encode annotation: {e}"))?;
        ensure_parent_dir(path).map_err(|e| format!("create output dir: {e}"))?;
        fs::write(path, json).map_err(|e| format!("write annotation {}: {e}", path.display()))
    }

    /// (thing, its box at `frame`) for every thing that has one.
    pub fn boxes_at(&self, frame: u32) -> Vec<(Rc<Thing>, FrameBox)> {
        self.things
            .iter()
            .filter_map(|t| t.box_at(frame).map(|b| (t.clone(), b)))
            .collect()
    }
}
