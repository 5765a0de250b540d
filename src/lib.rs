//! podview - terminal podcast transcript viewer.
//!
//! Synchronizes a playback clock with time-stamped, speaker-tagged transcript
//! segments and renders them as animated speaker-bubble subtitles with a
//! typewriter effect.
//!
//! The crate splits into:
//!
//! - [`transcript`]: document model, JSON parsing, and speaker-turn grouping
//! - [`engine`]: the synchronization core (active-turn resolution, typewriter
//!   animation, render contract)
//! - [`player`]: the terminal player (playback clock, input, rendering, loop)
//! - [`audio`]: WAV duration probing
//! - [`config`]: TOML configuration
//!
//! # Example
//!
//! ```
//! use podview::engine::{SubtitleEngine, TypingTuning};
//! use podview::transcript::TranscriptDocument;
//!
//! let doc = TranscriptDocument::parse_str(
//!     r#"[{"speaker": 1, "segments": [{"startTime": 0.0, "endTime": 2.0, "text": "Hi"}]}]"#,
//! ).unwrap();
//!
//! let mut engine = SubtitleEngine::new(TypingTuning::default());
//! assert_eq!(engine.load_transcript(&doc), 1);
//! ```

pub mod audio;
pub mod config;
pub mod engine;
pub mod player;
pub mod transcript;

pub use config::Config;
pub use engine::SubtitleEngine;
pub use transcript::TranscriptDocument;
