//! Subtitle synchronization engine.
//!
//! The engine owns the core state machine: speaker-turn groups built from the
//! loaded transcript, the index of the turn currently on screen, and the
//! typewriter animator. The host drives it with a high-frequency time-advance
//! notification and receives render instructions through [`RenderAdapter`].
//!
//! # Architecture
//!
//! - `resolver`: which turn is active at the current playhead position
//! - `animator`: target text computation and the paced character reveal
//! - `adapter`: the render contract the host implements
//!
//! Within one notification, resolution happens before the animation update,
//! and any reveal step scheduled by a prior notification is cancelled before
//! a new target is computed.

mod adapter;
mod animator;
mod resolver;

use std::collections::HashMap;

use tracing::{debug, info};

pub use adapter::{RenderAdapter, StatusKind, StatusNotice};
pub use animator::{
    reveal_target, RevealTarget, TypingAnimator, TypingTuning, BASE_DELAY_MS, MIN_DELAY_MS,
    SNAP_PROGRESS,
};
pub use resolver::{resolve, Resolution, HOLD_GAP_SECS, TIME_TOLERANCE_SECS};

use crate::transcript::{group_turns, SpeakerId, TranscriptDocument, TurnGroup};

/// Subtitle synchronization core.
///
/// All mutable session state lives here and is touched only from the single
/// event-processing context; there is no internal concurrency.
pub struct SubtitleEngine {
    groups: Vec<TurnGroup>,
    speaker_names: HashMap<SpeakerId, String>,
    active_index: Option<usize>,
    animator: TypingAnimator,
    /// Last (text, cursor) pair pushed to the adapter, to keep
    /// `update_text` calls minimal.
    emitted: Option<(String, bool)>,
}

impl SubtitleEngine {
    pub fn new(tuning: TypingTuning) -> Self {
        Self::with_animator(TypingAnimator::new(tuning))
    }

    /// Engine with a deterministic typing cadence, for tests.
    pub fn seeded(tuning: TypingTuning, seed: u64) -> Self {
        Self::with_animator(TypingAnimator::seeded(tuning, seed))
    }

    fn with_animator(animator: TypingAnimator) -> Self {
        Self {
            groups: Vec::new(),
            speaker_names: HashMap::new(),
            active_index: None,
            animator,
            emitted: None,
        }
    }

    /// Build speaker turns from a transcript document, replacing any prior
    /// set entirely, and reset playback state. Returns the turn count.
    pub fn load_transcript(&mut self, doc: &TranscriptDocument) -> usize {
        self.groups = group_turns(&doc.entries);
        self.active_index = None;
        self.animator.reset();
        self.emitted = None;
        info!(
            turns = self.groups.len(),
            segments = doc.segment_count(),
            "transcript loaded"
        );
        self.groups.len()
    }

    /// The speaker turns built by the last load, in time order.
    pub fn groups(&self) -> &[TurnGroup] {
        &self.groups
    }

    /// Index of the turn currently on screen.
    pub fn active_index(&self) -> Option<usize> {
        self.active_index
    }

    /// Text currently displayed by the animator.
    pub fn displayed_text(&self) -> &str {
        self.animator.display().0
    }

    /// True while a reveal chain is catching up to its target.
    pub fn animation_in_flight(&self) -> bool {
        self.animator.in_flight()
    }

    /// Set the display name for a speaker. Read at render time only: future
    /// label lookups change, already-displayed text does not.
    pub fn set_speaker_label(&mut self, id: SpeakerId, name: impl Into<String>) {
        self.speaker_names.insert(id, name.into());
    }

    /// Display name for a speaker, falling back to `"Speaker <id>"`.
    pub fn speaker_label(&self, id: SpeakerId) -> String {
        self.speaker_names
            .get(&id)
            .cloned()
            .unwrap_or_else(|| format!("Speaker {}", id))
    }

    /// Process one time-advance notification.
    ///
    /// `current_time` is the playhead position in seconds; `now_ms` is a
    /// monotonically non-decreasing wall timestamp used to pace the reveal
    /// animation.
    pub fn on_time_advanced(
        &mut self,
        current_time: f64,
        now_ms: u64,
        out: &mut dyn RenderAdapter,
    ) {
        match resolver::resolve(&self.groups, current_time, self.active_index) {
            Resolution::Active(index) => {
                if self.active_index != Some(index) {
                    self.transition_to(index, out);
                }
                if let Some(target) = animator::reveal_target(&self.groups[index], current_time) {
                    self.animator.retarget(&target, now_ms);
                }
                // No matching segment inside the turn: hold the last target
            }
            Resolution::Hold(_) => {
                // Short silence: keep the bubble and let any reveal chain
                // keep converging
            }
            Resolution::Clear => {
                debug!(current_time, "clearing subtitle display");
                self.active_index = None;
                self.animator.reset();
                self.emitted = None;
                out.clear(false);
            }
            Resolution::Idle => {}
        }

        self.animator.tick(now_ms);
        self.flush_text(out);
    }

    /// Slide to a new turn: fresh bubble, empty reveal state.
    fn transition_to(&mut self, index: usize, out: &mut dyn RenderAdapter) {
        let group = &self.groups[index];
        debug!(
            index,
            speaker = group.speaker,
            start = group.start_time,
            end = group.end_time,
            "transitioning to turn"
        );
        self.animator.reset();
        self.emitted = None;
        let label = self.speaker_label(group.speaker);
        out.begin_group(index, group.speaker, &label);
        self.active_index = Some(index);
    }

    /// Push the animator's display to the adapter when it changed.
    fn flush_text(&mut self, out: &mut dyn RenderAdapter) {
        if self.active_index.is_none() {
            return;
        }
        let (text, cursor) = self.animator.display();
        let (text, cursor) = (text.to_string(), cursor);
        if self
            .emitted
            .as_ref()
            .is_some_and(|(t, c)| *t == text && *c == cursor)
        {
            return;
        }
        out.update_text(&text, cursor);
        self.emitted = Some((text, cursor));
    }

    /// Reset playback state, force-clearing the display.
    pub fn reset(&mut self, out: &mut dyn RenderAdapter) {
        debug!("engine reset");
        self.active_index = None;
        self.animator.reset();
        self.emitted = None;
        out.clear(true);
    }

    /// Playback reached the end of the media: clear and announce completion.
    pub fn playback_ended(&mut self, out: &mut dyn RenderAdapter) {
        self.active_index = None;
        self.animator.reset();
        self.emitted = None;
        out.clear(false);
        out.status(&StatusNotice::completed());
    }
}
