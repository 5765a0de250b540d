//! Speaker turn grouping.
//!
//! Merges the flat multi-speaker segment list into ordered speaker turns: runs
//! of consecutive segments from one speaker, split whenever the speaker
//! changes or the silence between segments grows past [`TURN_GAP_SECS`].

use tracing::debug;

use super::{Segment, SpeakerEntry, SpeakerId};

/// Silence gap (seconds) that splits two same-speaker segments into
/// separate turns.
pub const TURN_GAP_SECS: f64 = 2.0;

/// A run of segments from one speaker, merged across small silence gaps.
#[derive(Debug, Clone, PartialEq)]
pub struct TurnGroup {
    pub speaker: SpeakerId,
    pub segments: Vec<Segment>,
    /// Start time of the first segment.
    pub start_time: f64,
    /// End time of the last segment, updated as segments are appended.
    pub end_time: f64,
    /// Segment texts joined with single spaces.
    pub full_text: String,
}

impl TurnGroup {
    fn new(segment: Segment) -> Self {
        Self {
            speaker: segment.speaker,
            start_time: segment.start_time,
            end_time: segment.end_time,
            full_text: segment.text.clone(),
            segments: vec![segment],
        }
    }

    fn push(&mut self, segment: Segment) {
        self.end_time = segment.end_time;
        self.full_text.push(' ');
        self.full_text.push_str(&segment.text);
        self.segments.push(segment);
    }

    /// Wall-clock length of the turn in seconds.
    pub fn duration(&self) -> f64 {
        self.end_time - self.start_time
    }
}

/// Group all segments from all speakers into time-ordered speaker turns.
///
/// Segments are merged into one sequence sorted ascending by start time
/// (stable for ties), then scanned left to right: a new turn starts when the
/// speaker changes or when the gap to the previous segment's end exceeds
/// [`TURN_GAP_SECS`], even for the same speaker.
///
/// Empty input yields an empty group list. Segments with
/// `end_time < start_time` are an unchecked caller precondition.
pub fn group_turns(entries: &[SpeakerEntry]) -> Vec<TurnGroup> {
    let mut segments: Vec<Segment> = entries
        .iter()
        .flat_map(|entry| {
            entry.segments.iter().map(move |s| Segment {
                speaker: entry.speaker,
                start_time: s.start_time,
                end_time: s.end_time,
                text: s.text.clone(),
            })
        })
        .collect();

    // Stable sort keeps document order for identical start times.
    segments.sort_by(|a, b| a.start_time.total_cmp(&b.start_time));

    let mut groups: Vec<TurnGroup> = Vec::new();
    let mut current: Option<TurnGroup> = None;

    for segment in segments {
        match current.as_mut() {
            Some(group)
                if group.speaker == segment.speaker
                    && segment.start_time - group.end_time <= TURN_GAP_SECS =>
            {
                group.push(segment);
            }
            _ => {
                if let Some(done) = current.take() {
                    groups.push(done);
                }
                current = Some(TurnGroup::new(segment));
            }
        }
    }

    if let Some(done) = current.take() {
        groups.push(done);
    }

    debug!(groups = groups.len(), "grouped transcript into speaker turns");
    groups
}
