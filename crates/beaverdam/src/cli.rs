// Author: Dustin Pilgrim
// License: MIT

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "beaverdam", version, about = "Keyframe boxes for video annotation.")]
pub struct Args {
    /// Log to stderr (in addition to the log file)
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Override log file path (default: $XDG_STATE_HOME/beaverdam/beaverdam.log)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Override config path (default: $XDG_CONFIG_HOME/beaverdam/beaverdam.rune)
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub cmd: Cmd,
}

#[derive(Debug, Subcommand)]
pub enum Cmd {
    /// Render every thing's box at a frame to a PNG
    Render {
        /// Annotation file (JSON)
        file: PathBuf,
        #[arg(long, short = 'f')]
        frame: u32,
        #[arg(long, default_value_t = 1280)]
        width: u32,
        #[arg(long, default_value_t = 720)]
        height: u32,
        /// Output PNG (default: <output_directory>/frame-NNNNN.png)
        #[arg(long, short = 'o')]
        out: Option<PathBuf>,
    },

    /// Report which box, edge and corner a pointer position is on
    Hit {
        file: PathBuf,
        #[arg(long, short = 'f')]
        frame: u32,
        #[arg(long, allow_hyphen_values = true)]
        x: f64,
        #[arg(long, allow_hyphen_values = true)]
        y: f64,
    },

    /// Drag a box (move or resize) and save the annotation
    Drag {
        file: PathBuf,
        #[arg(long, short = 'f')]
        frame: u32,
        /// Press position, X,Y
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        from: (f64, f64),
        /// Release position, X,Y
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        to: (f64, f64),
        /// Where to write the result (default: overwrite FILE)
        #[arg(long, short = 'o')]
        out: Option<PathBuf>,
    },
}

pub fn parse_point(s: &str) -> Result<(f64, f64), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got \"{s}\""))?;
    let x = x.trim().parse().map_err(|e| format!("bad x in \"{s}\": {e}"))?;
    let y = y.trim().parse().map_err(|e| format!("bad y in \"{s}\": {e}"))?;
    Ok((x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_parse() {
        assert_eq!(parse_point("3,4.5"), Ok((3.0, 4.5)));
        assert_eq!(parse_point(" -1 , 2 "), Ok((-1.0, 2.0)));
        assert!(parse_point("3").is_err());
        assert!(parse_point("a,4").is_err());
    }

    #[test]
    fn drag_args() {
        let args = Args::try_parse_from([
            "beaverdam", "drag", "ann.json", "--frame", "4", "--from", "10,5", "--to", "-3,5",
        ])
        .unwrap();
        match args.cmd {
            Cmd::Drag { frame, from, to, out, .. } => {
                assert_eq!(frame, 4);
                assert_eq!(from, (10.0, 5.0));
                assert_eq!(to, (-3.0, 5.0));
                assert!(out.is_none());
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
