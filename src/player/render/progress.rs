//! Progress bar rendering.
//!
//! Displays playback progress with speaker-turn markers, so upcoming turns
//! are visible on the timeline before the playhead reaches them.

use crate::transcript::{SpeakerId, TurnGroup};

/// A turn's start position on the timeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TurnMark {
    pub time: f64,
    pub speaker: SpeakerId,
}

/// Collect timeline marks from the group list, one per turn start.
pub fn collect_turn_marks(groups: &[TurnGroup]) -> Vec<TurnMark> {
    groups
        .iter()
        .map(|g| TurnMark {
            time: g.start_time,
            speaker: g.speaker,
        })
        .collect()
}

/// Format a duration in seconds to MM:SS.
pub fn format_duration(seconds: f64) -> String {
    let total_secs = seconds.max(0.0) as u64;
    let mins = total_secs / 60;
    let secs = total_secs % 60;
    format!("{:02}:{:02}", mins, secs)
}

/// Cell of the progress bar, used to pick glyph and color at render time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BarCell {
    /// Track before the playhead
    Filled,
    /// Track after the playhead
    Empty,
    /// The playhead itself
    Playhead,
    /// A turn start, carrying its speaker for coloring
    Mark(SpeakerId),
}

/// Build the progress bar cells.
///
/// The playhead wins over a mark occupying the same cell; marks keep their
/// identity on both sides of the playhead so the speaker coloring survives
/// the fill.
pub fn build_progress_cells(
    bar_width: usize,
    current_time: f64,
    total_duration: f64,
    marks: &[TurnMark],
) -> (Vec<BarCell>, usize) {
    let progress = if total_duration > 0.0 {
        (current_time / total_duration).clamp(0.0, 1.0)
    } else {
        1.0
    };

    let filled = (bar_width as f64 * progress) as usize;

    let mut cells: Vec<BarCell> = (0..bar_width)
        .map(|i| {
            if i < filled {
                BarCell::Filled
            } else {
                BarCell::Empty
            }
        })
        .collect();

    for mark in marks {
        let pos = if total_duration > 0.0 {
            ((mark.time / total_duration) * bar_width as f64) as usize
        } else {
            0
        };
        if pos < bar_width {
            cells[pos] = BarCell::Mark(mark.speaker);
        }
    }

    if filled < bar_width {
        cells[filled] = BarCell::Playhead;
    }

    (cells, filled)
}
