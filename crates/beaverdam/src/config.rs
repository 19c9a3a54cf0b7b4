// Author: Dustin Pilgrim
// License: MIT

use std::path::{Path, PathBuf};

use beaverdam_core::Fill;
use rune_cfg::RuneConfig;

use crate::paths::{default_output_dir, expand_env};

#[derive(Debug, Clone)]
pub struct BeaverdamConfig {
    /// Used for things that carry no fill of their own.
    pub default_fill: Fill,
    pub background_colour: Fill,
    pub output_directory: PathBuf,
}

impl Default for BeaverdamConfig {
    fn default() -> Self {
        Self {
            default_fill: Fill::default(),
            background_colour: Fill(0xFF0F_1115),
            output_directory: default_output_dir(),
        }
    }
}

/// Missing file means defaults.
pub fn load(path: &Path) -> Result<BeaverdamConfig, String> {
    if !path.exists() {
        return Ok(BeaverdamConfig::default());
    }

    let rc = RuneConfig::from_file(path).map_err(|e| format!("failed to read config: {e}"))?;

    parse_config(&rc)
}

fn parse_config(rc: &RuneConfig) -> Result<BeaverdamConfig, String> {
    let mut cfg = BeaverdamConfig::default();

    if !rc.has("beaverdam") {
        return Ok(cfg);
    }

    if let Some(fill) = colour_at(rc, "beaverdam.default_fill")? {
        cfg.default_fill = fill;
    }

    if let Some(bg) = colour_at(rc, "beaverdam.background_colour")? {
        cfg.background_colour = bg;
    }

    if let Some(dir) = rc
        .get_optional::<String>("beaverdam.output_directory")
        .map_err(|e| format!("config error at beaverdam.output_directory: {e}"))?
    {
        cfg.output_directory = expand_env(&dir);
    }

    Ok(cfg)
}

fn colour_at(rc: &RuneConfig, key: &str) -> Result<Option<Fill>, String> {
    let Some(s) = rc
        .get_optional::<String>(key)
        .map_err(|e| format!("config error at {key}: {e}"))?
    else {
        return Ok(None);
    };

    s.parse::<Fill>()
        .map(Some)
        .map_err(|e| format!("config error at {key}: {e}"))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn write_config(dir: &tempfile::TempDir, body: &str) -> PathBuf {
        let path = dir.path().join("beaverdam.rune");
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load(&dir.path().join("nope.rune")).unwrap();
        assert_eq!(cfg.default_fill, Fill::default());
        assert_eq!(cfg.background_colour, Fill(0xFF0F_1115));
    }

    #[test]
    fn reads_every_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            &dir,
            concat!(
                "beaverdam:\n",
                "  default_fill \"#ff0000\"\n",
                "  background_colour \"#102030\"\n",
                "  output_directory \"$env.HOME/renders\"\n",
                "end\n",
            ),
        );

        let cfg = load(&path).unwrap();
        assert_eq!(cfg.default_fill, Fill(0xFFFF_0000));
        assert_eq!(cfg.background_colour, Fill(0xFF10_2030));
        if let Ok(home) = std::env::var("HOME") {
            assert_eq!(cfg.output_directory, PathBuf::from(home).join("renders"));
        }
    }

    #[test]
    fn bad_colour_names_the_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            &dir,
            "beaverdam:\n  default_fill \"red\"\nend\n",
        );

        let err = load(&path).unwrap_err();
        assert!(err.starts_with("config error at beaverdam.default_fill"), "{err}");
        assert!(err.contains("must start with #"), "{err}");
    }

    #[test]
    fn other_sections_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "player:\n  theme \"dark\"\nend\n");

        let cfg = load(&path).unwrap();
        assert_eq!(cfg.default_fill, Fill::default());
    }
}
