//! `podview play` handler.

use std::path::{Path, PathBuf};

use anyhow::Result;

use podview::player::{run_player, SessionOptions};
use podview::transcript::SpeakerId;
use podview::Config;

/// Load config, fold in CLI overrides, and run a player session.
#[cfg(not(tarpaulin_include))]
pub fn handle_play(
    transcript: &Path,
    audio: Option<PathBuf>,
    speed: Option<f64>,
    speakers: Vec<(SpeakerId, String)>,
) -> Result<()> {
    let config = Config::load()?;
    let opts = SessionOptions {
        audio,
        speed,
        speakers,
    };
    run_player(transcript, &opts, &config)
}
