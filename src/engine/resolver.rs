//! Active-group resolution.
//!
//! Given the immutable group list, the current playhead time, and the
//! previously active group, decides which speaker turn should be on screen.
//! Short silences between turns hold the previous bubble instead of clearing
//! it, which models natural pauses in speech.

use tracing::debug;

use crate::transcript::TurnGroup;

/// Tolerance (seconds) around a group's time range, absorbing float and
/// timer jitter at turn boundaries.
pub const TIME_TOLERANCE_SECS: f64 = 0.1;

/// Maximum silence (seconds) before the next turn during which the previous
/// bubble is held on screen instead of being cleared.
pub const HOLD_GAP_SECS: f64 = 3.0;

/// Outcome of resolving the playhead against the group list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The playhead is inside this group's time range.
    Active(usize),
    /// No group is active, but the next one starts soon; keep showing the
    /// previously active group.
    Hold(usize),
    /// No group is active and none starts soon; the display should clear.
    Clear,
    /// No group is active and nothing was on screen; nothing to do.
    Idle,
}

impl Resolution {
    /// The group index that should be on screen, if any.
    pub fn index(&self) -> Option<usize> {
        match *self {
            Resolution::Active(i) | Resolution::Hold(i) => Some(i),
            Resolution::Clear | Resolution::Idle => None,
        }
    }
}

/// Resolve which group is active at `current_time`.
///
/// A group is active when `current_time` lies within
/// `[start_time - TIME_TOLERANCE_SECS, end_time + TIME_TOLERANCE_SECS]`;
/// first match wins. Groups are non-overlapping after grouping, so at most
/// one matches under well-formed data; overlapping ranges are unmodeled and
/// resolve arbitrarily by scan order.
///
/// When no group matches, the nearest upcoming group decides between holding
/// the previous bubble (gap of at most [`HOLD_GAP_SECS`]) and clearing.
/// Clearing without a previously active group is a no-op ([`Resolution::Idle`]).
pub fn resolve(groups: &[TurnGroup], current_time: f64, previous: Option<usize>) -> Resolution {
    let mut next_start = f64::INFINITY;

    for (i, group) in groups.iter().enumerate() {
        if current_time >= group.start_time - TIME_TOLERANCE_SECS
            && current_time <= group.end_time + TIME_TOLERANCE_SECS
        {
            return Resolution::Active(i);
        }
        if group.start_time > current_time && group.start_time < next_start {
            next_start = group.start_time;
        }
    }

    let Some(previous) = previous else {
        return Resolution::Idle;
    };

    let gap = next_start - current_time;
    if gap <= HOLD_GAP_SECS {
        debug!(gap, held = previous, "silence gap, holding previous turn");
        Resolution::Hold(previous)
    } else {
        debug!(current_time, "no upcoming turn within hold window, clearing");
        Resolution::Clear
    }
}
