// Author: Dustin Pilgrim
// License: MIT

use serde::{Deserialize, Serialize};

/// Persisted form of a concrete box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxRecord {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    pub frame: u32,
}
