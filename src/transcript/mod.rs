//! Transcript document model and JSON parsing.
//!
//! A transcript is a collection of per-speaker entries, each carrying the
//! timed text segments attributed to that speaker. The on-disk format is the
//! JSON produced by the companion Whisper analysis step:
//!
//! ```json
//! [
//!   {"speaker": 1, "segments": [{"startTime": 0.0, "endTime": 2.0, "text": "Hi"}]},
//!   {"speaker": 2, "segments": [{"startTime": 6.0, "endTime": 8.0, "text": "Hello"}]}
//! ]
//! ```
//!
//! Entries and segments may arrive in any order; the grouper sorts them.

mod grouper;

use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub use grouper::{group_turns, TurnGroup, TURN_GAP_SECS};

/// Identifier for a speaker in the conversation (typically 1 or 2).
pub type SpeakerId = u32;

/// Errors that can occur while loading a transcript document.
#[derive(Debug, thiserror::Error)]
pub enum TranscriptError {
    #[error("Failed to open transcript: {path}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read transcript")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse transcript JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A single timed utterance within a speaker entry.
///
/// `end_time < start_time` is a caller error and is not validated here; the
/// grouper and animator treat it as an unchecked precondition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimedText {
    pub start_time: f64,
    pub end_time: f64,
    pub text: String,
}

/// All segments attributed to one speaker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeakerEntry {
    pub speaker: SpeakerId,
    pub segments: Vec<TimedText>,
}

/// A segment tagged with its speaker, produced by flattening entries.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub speaker: SpeakerId,
    pub start_time: f64,
    pub end_time: f64,
    pub text: String,
}

/// Complete transcript document as loaded from disk.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TranscriptDocument {
    pub entries: Vec<SpeakerEntry>,
}

impl TranscriptDocument {
    /// Parse a transcript document from a path.
    pub fn parse<P: AsRef<Path>>(path: P) -> Result<Self, TranscriptError> {
        let path = path.as_ref();
        let file = fs::File::open(path).map_err(|source| TranscriptError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse_reader(BufReader::new(file))
    }

    /// Parse a transcript document from a reader.
    pub fn parse_reader<R: Read>(mut reader: R) -> Result<Self, TranscriptError> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;
        Self::parse_str(&content)
    }

    /// Parse a transcript document from a string.
    pub fn parse_str(content: &str) -> Result<Self, TranscriptError> {
        let entries: Vec<SpeakerEntry> = serde_json::from_str(content)?;
        Ok(TranscriptDocument { entries })
    }

    /// True when the document carries no segments at all.
    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(|e| e.segments.is_empty())
    }

    /// Total number of segments across all speakers.
    pub fn segment_count(&self) -> usize {
        self.entries.iter().map(|e| e.segments.len()).sum()
    }

    /// Distinct speaker ids in ascending order.
    pub fn speakers(&self) -> Vec<SpeakerId> {
        let mut ids: Vec<SpeakerId> = self.entries.iter().map(|e| e.speaker).collect();
        ids.sort_unstable();
        ids.dedup();
        ids
    }

    /// End time of the last segment, i.e. the transcript's duration.
    ///
    /// Used as the playback duration when no audio file is available.
    pub fn duration(&self) -> f64 {
        self.entries
            .iter()
            .flat_map(|e| e.segments.iter())
            .map(|s| s.end_time)
            .fold(0.0, f64::max)
    }

    /// Flatten all entries into speaker-tagged segments (document order).
    pub fn flatten(&self) -> Vec<Segment> {
        self.entries
            .iter()
            .flat_map(|entry| {
                entry.segments.iter().map(move |s| Segment {
                    speaker: entry.speaker,
                    start_time: s.start_time,
                    end_time: s.end_time,
                    text: s.text.clone(),
                })
            })
            .collect()
    }
}
