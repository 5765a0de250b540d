//! Typewriter reveal animation.
//!
//! Two halves: [`reveal_target`] computes the substring of a turn's full text
//! that should be visible at the current playhead position, and
//! [`TypingAnimator`] paces the on-screen text toward that target one
//! character at a time with a human-like cadence.
//!
//! The animator is a cooperative self-rescheduling task: it keeps at most one
//! pending reveal step (a due timestamp), which the driving loop fires via
//! [`TypingAnimator::tick`]. Every new target computation cancels the pending
//! step and replaces it, so two reveal chains can never race on the same
//! display. Timestamps are plain milliseconds supplied by the caller, which
//! keeps the cadence testable with a synthetic clock.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::trace;

use crate::transcript::TurnGroup;

/// Base delay between revealed characters, in milliseconds.
pub const BASE_DELAY_MS: f64 = 60.0;

/// Lower bound on the per-character delay, in milliseconds.
pub const MIN_DELAY_MS: f64 = 20.0;

/// Segment progress at which the remainder of the segment is revealed at
/// once, avoiding visibly truncated trailing characters.
pub const SNAP_PROGRESS: f64 = 0.90;

/// Cadence tuning for the reveal animation. Presentation only; the animator's
/// endpoint does not depend on these values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TypingTuning {
    pub base_delay_ms: f64,
    pub min_delay_ms: f64,
}

impl Default for TypingTuning {
    fn default() -> Self {
        Self {
            base_delay_ms: BASE_DELAY_MS,
            min_delay_ms: MIN_DELAY_MS,
        }
    }
}

/// Text that should be visible for a turn at some playhead position.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealTarget {
    pub text: String,
    /// True while the current segment is only partially revealed.
    pub show_cursor: bool,
}

/// Compute the visible substring of `group.full_text` at `current_time`.
///
/// Locates the segment whose time range contains `current_time` (first
/// match). Returns `None` when no segment contains it (between segments of
/// one turn, or in a held silence gap), in which case the caller keeps the
/// last computed target. All text from segments strictly before the current
/// one is complete (each followed by a single space); the current segment
/// reveals `floor(char_count * progress)` characters, or everything once
/// progress reaches [`SNAP_PROGRESS`].
///
/// Character counts are Unicode scalar counts, never byte offsets.
pub fn reveal_target(group: &TurnGroup, current_time: f64) -> Option<RevealTarget> {
    let index = group
        .segments
        .iter()
        .position(|s| current_time >= s.start_time && current_time <= s.end_time)?;
    let segment = &group.segments[index];

    let mut text = String::new();
    for done in &group.segments[..index] {
        text.push_str(&done.text);
        text.push(' ');
    }

    let span = segment.end_time - segment.start_time;
    // A zero-length segment counts as complete
    let progress = if span > 0.0 {
        ((current_time - segment.start_time) / span).clamp(0.0, 1.0)
    } else {
        1.0
    };

    let total_chars = segment.text.chars().count();
    let typed_chars = if progress >= SNAP_PROGRESS {
        total_chars
    } else {
        (total_chars as f64 * progress).floor() as usize
    };

    text.extend(segment.text.chars().take(typed_chars));

    Some(RevealTarget {
        text,
        show_cursor: typed_chars < total_chars,
    })
}

/// Pending reveal step: one character due at `due_ms`.
#[derive(Debug, Clone, Copy)]
struct RevealStep {
    due_ms: u64,
    /// Per-chain base delay, sampled once when the chain starts.
    chain_delay_ms: f64,
}

/// Incremental typewriter state for the currently displayed turn.
///
/// Displayed text is always a prefix of the most recent target. When a new
/// target is no longer than (or not an extension of) what is displayed, the
/// display snaps instantly; otherwise characters are revealed one step at a
/// time until the display catches up or a newer target preempts the chain.
#[derive(Debug)]
pub struct TypingAnimator {
    displayed: String,
    target: String,
    cursor_at_end: bool,
    pending: Option<RevealStep>,
    tuning: TypingTuning,
    rng: StdRng,
}

impl TypingAnimator {
    pub fn new(tuning: TypingTuning) -> Self {
        Self::with_rng(tuning, StdRng::from_entropy())
    }

    /// Animator with a deterministic cadence, for tests.
    pub fn seeded(tuning: TypingTuning, seed: u64) -> Self {
        Self::with_rng(tuning, StdRng::seed_from_u64(seed))
    }

    fn with_rng(tuning: TypingTuning, rng: StdRng) -> Self {
        Self {
            displayed: String::new(),
            target: String::new(),
            cursor_at_end: false,
            pending: None,
            tuning,
            rng,
        }
    }

    /// Currently displayed text and whether the trailing cursor should show.
    ///
    /// The cursor is visible while a reveal chain is in flight, and after
    /// completion whenever the last target asked for it.
    pub fn display(&self) -> (&str, bool) {
        let cursor = self.pending.is_some() || self.cursor_at_end;
        (&self.displayed, cursor)
    }

    /// True while a reveal step is scheduled.
    pub fn in_flight(&self) -> bool {
        self.pending.is_some()
    }

    /// Drop all state, e.g. on turn change or playback reset.
    pub fn reset(&mut self) {
        self.displayed.clear();
        self.target.clear();
        self.cursor_at_end = false;
        self.pending = None;
    }

    /// Point the animator at a new target. Cancels any pending reveal step.
    ///
    /// Targets that do not extend the displayed text snap instantly (seeks
    /// backward, turn resets). Growing targets reveal the first new character
    /// immediately and schedule the rest. Returns true when the displayed
    /// text changed.
    pub fn retarget(&mut self, target: &RevealTarget, now_ms: u64) -> bool {
        self.pending = None;
        self.target.clear();
        self.target.push_str(&target.text);
        self.cursor_at_end = target.show_cursor;

        let displayed_chars = self.displayed.chars().count();
        let target_chars = self.target.chars().count();

        if target_chars <= displayed_chars || !self.target.starts_with(&self.displayed) {
            // Shrinking or diverging target: snap, never animate a deletion
            let changed = self.displayed != self.target;
            self.displayed.clear();
            self.displayed.push_str(&self.target);
            return changed;
        }

        let chain_delay_ms = self.tuning.base_delay_ms * self.rng.gen_range(0.6..1.4);
        let typed = self.reveal_one(chain_delay_ms, now_ms);
        debug_assert!(typed, "growing target must reveal at least one character");
        true
    }

    /// Fire the pending reveal step if it is due. Returns true when the
    /// displayed text changed.
    ///
    /// Catches up over multiple due steps in one call when the driving loop
    /// stalls, so the display converges to the target regardless of tick
    /// granularity.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        let mut changed = false;
        while let Some(step) = self.pending {
            if step.due_ms > now_ms {
                break;
            }
            self.pending = None;
            changed |= self.reveal_one(step.chain_delay_ms, step.due_ms);
        }
        changed
    }

    /// Append the next target character and schedule the following step.
    fn reveal_one(&mut self, chain_delay_ms: f64, now_ms: u64) -> bool {
        let Some(next) = self.target.chars().nth(self.displayed.chars().count()) else {
            return false;
        };
        self.displayed.push(next);
        trace!(char = %next, len = self.displayed.len(), "reveal step");

        if self.displayed.chars().count() < self.target.chars().count() {
            let delay = self.char_delay_ms(next, chain_delay_ms);
            self.pending = Some(RevealStep {
                due_ms: now_ms + delay,
                chain_delay_ms,
            });
        }
        true
    }

    /// Delay before the character following `typed`, in milliseconds.
    ///
    /// Pauses longer after punctuation and line breaks, speeds up after
    /// spaces, and jitters slightly so the cadence never feels mechanical.
    fn char_delay_ms(&mut self, typed: char, chain_delay_ms: f64) -> u64 {
        let modifier = match typed {
            ',' | '.' | '!' | '?' => 2.5,
            ' ' => 0.7,
            '\n' => 3.0,
            _ => 1.0,
        };
        let jitter = self.rng.gen_range(-10.0..10.0);
        let delay = chain_delay_ms * modifier + jitter;
        delay.max(self.tuning.min_delay_ms) as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transcript::{group_turns, SpeakerEntry, TimedText};

    fn sample_group() -> TurnGroup {
        let entries = [SpeakerEntry {
            speaker: 1,
            segments: vec![
                TimedText {
                    start_time: 0.0,
                    end_time: 2.0,
                    text: "Hi".to_string(),
                },
                TimedText {
                    start_time: 2.5,
                    end_time: 4.0,
                    text: "there".to_string(),
                },
            ],
        }];
        group_turns(&entries).remove(0)
    }

    fn animator() -> TypingAnimator {
        TypingAnimator::seeded(TypingTuning::default(), 7)
    }

    /// Run the animator's clock forward until the chain completes.
    fn drain(animator: &mut TypingAnimator, mut now: u64) -> u64 {
        while animator.in_flight() {
            now += 5;
            animator.tick(now);
        }
        now
    }

    #[test]
    fn target_is_partial_within_segment() {
        let group = sample_group();
        // t=1.0: progress 0.5 through "Hi" (2 chars) reveals 1
        let target = reveal_target(&group, 1.0).unwrap();
        assert_eq!(target.text, "H");
        assert!(target.show_cursor);
    }

    #[test]
    fn target_snaps_to_full_segment_at_ninety_percent() {
        let group = sample_group();
        // t=1.8: progress 0.9 reveals all of "Hi"
        let target = reveal_target(&group, 1.8).unwrap();
        assert_eq!(target.text, "Hi");
        assert!(!target.show_cursor);
    }

    #[test]
    fn target_includes_completed_segments() {
        let group = sample_group();
        // Inside the second segment, the first is complete plus a space
        let target = reveal_target(&group, 2.5).unwrap();
        assert!(target.text.starts_with("Hi "));
    }

    #[test]
    fn target_at_segment_end_is_complete() {
        let group = sample_group();
        let target = reveal_target(&group, 4.0).unwrap();
        assert_eq!(target.text, "Hi there");
        assert!(!target.show_cursor);
    }

    #[test]
    fn between_segments_returns_none() {
        let group = sample_group();
        // 2.0 < t < 2.5 falls in the intra-turn gap
        assert!(reveal_target(&group, 2.2).is_none());
    }

    #[test]
    fn target_length_is_monotonic_in_time() {
        let group = sample_group();
        let mut last_len = 0;
        let mut t = 0.0;
        while t <= 4.0 {
            if let Some(target) = reveal_target(&group, t) {
                let len = target.text.chars().count();
                assert!(len >= last_len, "target shrank at t={}", t);
                last_len = len;
            }
            t += 0.05;
        }
        assert_eq!(last_len, "Hi there".chars().count());
    }

    #[test]
    fn target_counts_chars_not_bytes() {
        let entries = [SpeakerEntry {
            speaker: 1,
            segments: vec![TimedText {
                start_time: 0.0,
                end_time: 4.0,
                text: "안녕하세요".to_string(),
            }],
        }];
        let group = group_turns(&entries).remove(0);
        // Progress 0.5 over 5 chars reveals 2 whole characters
        let target = reveal_target(&group, 2.0).unwrap();
        assert_eq!(target.text, "안녕");
    }

    #[test]
    fn growing_target_reveals_first_char_immediately() {
        let mut a = animator();
        let changed = a.retarget(
            &RevealTarget {
                text: "Hi".to_string(),
                show_cursor: true,
            },
            0,
        );
        assert!(changed);
        assert_eq!(a.display().0, "H");
        assert!(a.in_flight());
    }

    #[test]
    fn chain_converges_to_target() {
        let mut a = animator();
        a.retarget(
            &RevealTarget {
                text: "Hello, world".to_string(),
                show_cursor: false,
            },
            0,
        );
        drain(&mut a, 0);
        let (text, cursor) = a.display();
        assert_eq!(text, "Hello, world");
        assert!(!cursor);
    }

    #[test]
    fn displayed_is_always_prefix_of_target() {
        let mut a = animator();
        a.retarget(
            &RevealTarget {
                text: "Hello there".to_string(),
                show_cursor: true,
            },
            0,
        );
        let mut now = 0;
        while a.in_flight() {
            now += 5;
            a.tick(now);
            assert!("Hello there".starts_with(a.display().0));
        }
    }

    #[test]
    fn shrinking_target_snaps_instantly() {
        let mut a = animator();
        a.retarget(
            &RevealTarget {
                text: "Hello there".to_string(),
                show_cursor: false,
            },
            0,
        );
        drain(&mut a, 0);

        // A shorter target (e.g. after a seek backward) never animates down
        a.retarget(
            &RevealTarget {
                text: "Hel".to_string(),
                show_cursor: true,
            },
            1000,
        );
        assert_eq!(a.display().0, "Hel");
        assert!(!a.in_flight());
    }

    #[test]
    fn diverging_target_snaps_instead_of_mixing_text() {
        let mut a = animator();
        a.retarget(
            &RevealTarget {
                text: "abc".to_string(),
                show_cursor: false,
            },
            0,
        );
        drain(&mut a, 0);

        // Same length, different text: snap, never splice chains
        a.retarget(
            &RevealTarget {
                text: "xyzw".to_string(),
                show_cursor: false,
            },
            1000,
        );
        assert_eq!(a.display().0, "xyzw");
    }

    #[test]
    fn retarget_cancels_pending_step() {
        let mut a = animator();
        a.retarget(
            &RevealTarget {
                text: "abcdef".to_string(),
                show_cursor: true,
            },
            0,
        );
        assert!(a.in_flight());

        // Preempt with a longer target before the chain finishes
        a.retarget(
            &RevealTarget {
                text: "abcdefgh".to_string(),
                show_cursor: false,
            },
            10,
        );
        drain(&mut a, 10);
        assert_eq!(a.display().0, "abcdefgh");
    }

    #[test]
    fn reset_clears_display() {
        let mut a = animator();
        a.retarget(
            &RevealTarget {
                text: "Hi".to_string(),
                show_cursor: true,
            },
            0,
        );
        a.reset();
        assert_eq!(a.display(), ("", false));
        assert!(!a.in_flight());
    }

    #[test]
    fn tick_catches_up_after_stall() {
        let mut a = animator();
        a.retarget(
            &RevealTarget {
                text: "abcdefgh".to_string(),
                show_cursor: false,
            },
            0,
        );
        // One huge jump instead of fine-grained ticks
        a.tick(1_000_000);
        assert_eq!(a.display().0, "abcdefgh");
        assert!(!a.in_flight());
    }

    #[test]
    fn char_delay_stays_within_bounds() {
        let mut a = animator();
        let chain = BASE_DELAY_MS * 1.4;
        for ch in ['a', ' ', ',', '.', '!', '?', '\n'] {
            for _ in 0..50 {
                let delay = a.char_delay_ms(ch, chain);
                assert!(delay >= MIN_DELAY_MS as u64, "delay {} below floor", delay);
                // 3.0 is the largest modifier; +10 covers jitter
                assert!(delay as f64 <= chain * 3.0 + 10.0);
            }
        }
    }

    #[test]
    fn punctuation_pauses_longer_than_spaces() {
        let mut a = animator();
        let chain = BASE_DELAY_MS;
        let avg = |a: &mut TypingAnimator, ch| -> f64 {
            (0..200).map(|_| a.char_delay_ms(ch, chain) as f64).sum::<f64>() / 200.0
        };
        let after_period = avg(&mut a, '.');
        let after_space = avg(&mut a, ' ');
        assert!(after_period > after_space);
    }
}
