use std::path::PathBuf;

use anyhow::Context as _;
use blockfall_engine::GameController;
use log::info;

use crate::{command::play::app::PlayApp, logging, tui::Runtime};

mod app;

const DEFAULT_FRAME_RATE: f64 = 60.0;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    /// Seed for the piece sequence (random when omitted)
    #[clap(long)]
    seed: Option<u64>,
    /// Updates per second; each update feeds the real elapsed time to the fall timer
    #[clap(long, default_value_t = DEFAULT_FRAME_RATE)]
    frame_rate: f64,
    /// Write log output to this file
    #[clap(long)]
    log_file: Option<PathBuf>,
}

impl Default for PlayArg {
    fn default() -> Self {
        Self {
            seed: None,
            frame_rate: DEFAULT_FRAME_RATE,
            log_file: None,
        }
    }
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let PlayArg {
        seed,
        frame_rate,
        log_file,
    } = arg;

    if !frame_rate.is_finite() || *frame_rate <= 0.0 {
        anyhow::bail!("frame rate must be a positive number, got {frame_rate}");
    }
    if let Some(path) = log_file {
        logging::init_file_logger(path)?;
    }

    let controller = match seed {
        Some(seed) => GameController::with_seed(*seed),
        None => GameController::new(),
    };
    info!("starting game (seed: {seed:?}, frame rate: {frame_rate})");

    let mut app = PlayApp::new(controller, *frame_rate);
    Runtime::new()
        .run(&mut app)
        .context("terminal I/O failed")?;

    info!("quit with score {}", app.controller().score());
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Debug, Parser)]
    struct Cli {
        #[clap(flatten)]
        arg: PlayArg,
    }

    #[test]
    fn test_defaults() {
        let Cli { arg } = Cli::try_parse_from(["blockfall"]).unwrap();
        assert_eq!(arg.seed, None);
        assert!((arg.frame_rate - DEFAULT_FRAME_RATE).abs() < f64::EPSILON);
        assert_eq!(arg.log_file, None);
    }

    #[test]
    fn test_options() {
        let Cli { arg } = Cli::try_parse_from([
            "blockfall",
            "--seed",
            "42",
            "--frame-rate",
            "30",
            "--log-file",
            "game.log",
        ])
        .unwrap();
        assert_eq!(arg.seed, Some(42));
        assert!((arg.frame_rate - 30.0).abs() < f64::EPSILON);
        assert_eq!(arg.log_file, Some(PathBuf::from("game.log")));
    }

    #[test]
    fn test_rejects_non_positive_frame_rate() {
        let arg = PlayArg {
            frame_rate: 0.0,
            ..PlayArg::default()
        };
        let err = run(&arg).unwrap_err();
        assert!(err.to_string().contains("frame rate"));
    }
}
