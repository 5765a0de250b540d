//! Command-line interface definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use podview::transcript::SpeakerId;

#[derive(Parser)]
#[command(
    name = "podview",
    version,
    about = "Terminal podcast transcript viewer",
    long_about = "Plays timed transcripts as animated speaker-bubble subtitles,\n\
                  synchronized against a playback clock."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Play a transcript in the terminal
    Play {
        /// Transcript JSON file
        transcript: PathBuf,

        /// WAV file to take the media duration from
        #[arg(long)]
        audio: Option<PathBuf>,

        /// Initial playback speed multiplier
        #[arg(long)]
        speed: Option<f64>,

        /// Speaker label override, e.g. --speaker 1=Alice (repeatable)
        #[arg(long = "speaker", value_name = "ID=NAME", value_parser = parse_speaker_spec)]
        speakers: Vec<(SpeakerId, String)>,
    },

    /// Summarize a transcript without playing it
    Info {
        /// Transcript JSON file
        transcript: PathBuf,
    },

    /// Show or edit the configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the current configuration as TOML
    Show,
    /// Print the config file path
    Path,
    /// Open the config file in $EDITOR
    Edit,
}

/// Parse a `--speaker` spec of the form `ID=NAME`.
fn parse_speaker_spec(spec: &str) -> Result<(SpeakerId, String), String> {
    let (id, name) = spec
        .split_once('=')
        .ok_or_else(|| format!("expected ID=NAME, got '{}'", spec))?;
    let id: SpeakerId = id
        .trim()
        .parse()
        .map_err(|_| format!("invalid speaker id '{}'", id))?;
    if name.is_empty() {
        return Err("speaker name is empty".to_string());
    }
    Ok((id, name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_speaker_spec_accepts_id_equals_name() {
        assert_eq!(
            parse_speaker_spec("1=Alice").unwrap(),
            (1, "Alice".to_string())
        );
        assert_eq!(
            parse_speaker_spec("2=Dr. Smith").unwrap(),
            (2, "Dr. Smith".to_string())
        );
    }

    #[test]
    fn parse_speaker_spec_rejects_bad_input() {
        assert!(parse_speaker_spec("Alice").is_err());
        assert!(parse_speaker_spec("x=Alice").is_err());
        assert!(parse_speaker_spec("1=").is_err());
    }

    #[test]
    fn cli_parses_play_command() {
        use clap::Parser;
        let cli = Cli::try_parse_from([
            "podview",
            "play",
            "episode.json",
            "--audio",
            "episode.wav",
            "--speaker",
            "1=Host",
        ])
        .unwrap();
        match cli.command {
            Command::Play {
                transcript,
                audio,
                speakers,
                ..
            } => {
                assert_eq!(transcript, PathBuf::from("episode.json"));
                assert_eq!(audio, Some(PathBuf::from("episode.wav")));
                assert_eq!(speakers, vec![(1, "Host".to_string())]);
            }
            _ => panic!("expected play command"),
        }
    }
}
