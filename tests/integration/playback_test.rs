//! End-to-end playback scenario driving the engine through a render adapter.

use podview::engine::{
    RenderAdapter, StatusKind, StatusNotice, SubtitleEngine, TypingTuning,
};
use podview::transcript::{SpeakerId, TranscriptDocument};

use super::helpers::SAMPLE_TRANSCRIPT;

/// Render adapter double that records the instruction stream.
#[derive(Debug, Default)]
struct Recording {
    begun: Vec<(usize, SpeakerId, String)>,
    texts: Vec<(String, bool)>,
    clears: Vec<bool>,
    statuses: Vec<StatusKind>,
}

impl RenderAdapter for Recording {
    fn begin_group(&mut self, index: usize, speaker: SpeakerId, label: &str) {
        self.begun.push((index, speaker, label.to_string()));
    }

    fn update_text(&mut self, text: &str, show_cursor: bool) {
        self.texts.push((text.to_string(), show_cursor));
    }

    fn clear(&mut self, forced: bool) {
        self.clears.push(forced);
    }

    fn status(&mut self, notice: &StatusNotice) {
        self.statuses.push(notice.kind);
    }
}

fn engine() -> SubtitleEngine {
    let doc = TranscriptDocument::parse_str(SAMPLE_TRANSCRIPT).unwrap();
    let mut engine = SubtitleEngine::seeded(TypingTuning::default(), 99);
    engine.set_speaker_label(1, "Human");
    engine.set_speaker_label(2, "AI");
    engine.load_transcript(&doc);
    engine
}

/// Drive the engine from `from` to `to` seconds in playhead time, mapping
/// playhead seconds onto wall milliseconds.
fn advance(engine: &mut SubtitleEngine, out: &mut Recording, from: f64, to: f64) {
    let mut t = from;
    while t <= to {
        engine.on_time_advanced(t, (t * 1000.0) as u64, out);
        t += 0.03;
    }
}

#[test]
fn full_conversation_plays_through() {
    let mut engine = engine();
    let mut out = Recording::default();

    advance(&mut engine, &mut out, 0.0, 9.5);

    // Two turns opened, in order, with their configured labels
    assert_eq!(out.begun.len(), 2);
    assert_eq!(out.begun[0], (0, 1, "Human".to_string()));
    assert_eq!(out.begun[1], (1, 2, "AI".to_string()));

    // Display cleared exactly once, gracefully, after the last turn
    assert_eq!(out.clears, vec![false]);
}

#[test]
fn typed_text_grows_monotonically_within_a_turn() {
    let mut engine = engine();
    let mut out = Recording::default();

    advance(&mut engine, &mut out, 0.0, 4.0);

    let first_turn: Vec<&(String, bool)> = out.texts.iter().collect();
    let mut last_len = 0;
    for (text, _) in first_turn {
        let len = text.chars().count();
        assert!(len >= last_len, "display shrank within a turn: {:?}", text);
        last_len = len;
    }
    assert_eq!(engine.displayed_text(), "Hi there");
}

#[test]
fn every_emitted_text_is_prefix_of_turn_text() {
    let mut engine = engine();
    let mut out = Recording::default();

    advance(&mut engine, &mut out, 0.0, 4.0);
    for (text, _) in &out.texts {
        assert!(
            "Hi there".starts_with(text.as_str()),
            "{:?} is not a prefix",
            text
        );
    }
}

#[test]
fn silence_between_turns_holds_first_bubble() {
    let mut engine = engine();
    let mut out = Recording::default();

    // Through the first turn and into the 4.0-6.0 silence
    advance(&mut engine, &mut out, 0.0, 5.5);

    assert_eq!(engine.active_index(), Some(0));
    assert!(out.clears.is_empty());
    assert_eq!(out.begun.len(), 1);
}

#[test]
fn seek_backward_snaps_display_down() {
    let mut engine = engine();
    let mut out = Recording::default();

    advance(&mut engine, &mut out, 0.0, 3.9);
    let long = engine.displayed_text().chars().count();
    assert!(long > 3);

    // Jump back near the start of the turn
    engine.on_time_advanced(0.6, 10_000, &mut out);
    let short = engine.displayed_text().chars().count();
    assert!(short < long, "display did not snap down after seek");
    assert!("Hi there".starts_with(engine.displayed_text()));
}

#[test]
fn seek_across_turns_switches_bubble() {
    let mut engine = engine();
    let mut out = Recording::default();

    engine.on_time_advanced(1.0, 0, &mut out);
    assert_eq!(engine.active_index(), Some(0));

    // Seek straight into the second turn
    engine.on_time_advanced(7.0, 100, &mut out);
    assert_eq!(engine.active_index(), Some(1));
    assert_eq!(out.begun.len(), 2);
    assert!("Hello".starts_with(engine.displayed_text()));
}

#[test]
fn reset_mid_playback_force_clears() {
    let mut engine = engine();
    let mut out = Recording::default();

    advance(&mut engine, &mut out, 0.0, 2.0);
    engine.reset(&mut out);

    assert_eq!(engine.active_index(), None);
    assert_eq!(engine.displayed_text(), "");
    assert_eq!(out.clears, vec![true]);
}

#[test]
fn playback_end_announces_completion() {
    let mut engine = engine();
    let mut out = Recording::default();

    advance(&mut engine, &mut out, 0.0, 8.0);
    engine.playback_ended(&mut out);

    assert_eq!(out.statuses, vec![StatusKind::Completed]);
    assert_eq!(engine.displayed_text(), "");
}
