// colour.rs
// Author: Dustin Pilgrim
// License: MIT
//
// Fill colour of a thing. Format: 0xAARRGGBB

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Fill(pub u32);

impl Fill {
    pub const BLACK: Fill = Fill(0xFF00_0000);
    pub const WHITE: Fill = Fill(0xFFFF_FFFF);

    #[inline]
    pub fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Fill(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32))
    }

    #[inline]
    pub fn a(self) -> u8 { ((self.0 >> 24) & 0xFF) as u8 }
    #[inline]
    pub fn r(self) -> u8 { ((self.0 >> 16) & 0xFF) as u8 }
    #[inline]
    pub fn g(self) -> u8 { ((self.0 >> 8) & 0xFF) as u8 }
    #[inline]
    pub fn b(self) -> u8 { (self.0 & 0xFF) as u8 }

    /// Keeps RGB, swaps alpha.
    #[inline]
    pub fn with_alpha(self, alpha: u8) -> Self {
        Fill((self.0 & 0x00FF_FFFF) | ((alpha as u32) << 24))
    }

    pub fn is_opaque(self) -> bool {
        self.a() == 0xFF
    }
}

impl Default for Fill {
    fn default() -> Self {
        // default blue
        Fill(0xFF0A_84FF)
    }
}

impl FromStr for Fill {
    type Err = CoreError;

    /// Accepts `#RRGGBB` (opaque) or `#AARRGGBB`.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = |reason| CoreError::InvalidColour {
            input: s.to_string(),
            reason,
        };

        let hex = s
            .trim()
            .strip_prefix('#')
            .ok_or_else(|| invalid("colour must start with #"))?;

        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid("invalid hex colour"));
        }

        let value = u32::from_str_radix(hex, 16).map_err(|_| invalid("invalid hex colour"))?;

        match hex.len() {
            6 => Ok(Fill(0xFF00_0000 | value)),
            8 => Ok(Fill(value)),
            _ => Err(invalid("colour must be 6 or 8 hex digits (RRGGBB or AARRGGBB)")),
        }
    }
}

impl fmt::Display for Fill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "#{:06x}", self.0 & 0x00FF_FFFF)
        } else {
            write!(f, "#{:08x}", self.0)
        }
    }
}

impl TryFrom<String> for Fill {
    type Error = CoreError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<Fill> for String {
    fn from(fill: Fill) -> Self {
        fill.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rgb_as_opaque() {
        let fill: Fill = "#ff8000".parse().unwrap();
        assert_eq!(fill, Fill(0xFFFF_8000));
        assert_eq!((fill.a(), fill.r(), fill.g(), fill.b()), (0xFF, 0xFF, 0x80, 0x00));
    }

    #[test]
    fn parses_argb_and_keeps_alpha() {
        let fill: Fill = " #80112233 ".parse().unwrap();
        assert_eq!(fill.a(), 0x80);
        assert_eq!(fill.to_string(), "#80112233");
    }

    #[test]
    fn rejects_malformed_colours() {
        assert!("ff8000".parse::<Fill>().is_err());
        assert!("#ff80".parse::<Fill>().is_err());
        assert!("#gg8000".parse::<Fill>().is_err());
        assert!("#+f8000".parse::<Fill>().is_err());
    }

    #[test]
    fn displays_opaque_as_rgb() {
        assert_eq!(Fill::from_argb(0xFF, 0x12, 0x34, 0x56).to_string(), "#123456");
        assert_eq!(Fill::BLACK.with_alpha(0x40), Fill(0x4000_0000));
    }

    #[test]
    fn serializes_as_hex_string() {
        let json = serde_json::to_string(&Fill(0xFF00_FF00)).unwrap();
        assert_eq!(json, "\"#00ff00\"");
        let back: Fill = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Fill(0xFF00_FF00));
        assert!(serde_json::from_str::<Fill>("\"green\"").is_err());
    }
}
