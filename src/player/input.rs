//! Keyboard input handling for the player.
//!
//! Maps key events onto clock and engine operations: play/pause, seeking,
//! turn navigation, speed changes, and the help overlay.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use crate::engine::{RenderAdapter, SubtitleEngine};
use crate::player::clock::PlaybackClock;
use crate::player::state::{InputResult, PlayerState};

/// Seconds moved per arrow-key seek.
pub const SEEK_STEP_SECS: f64 = 10.0;

/// Handle a keyboard event.
pub fn handle_key_event(
    key: KeyEvent,
    state: &mut PlayerState,
    clock: &mut PlaybackClock,
    engine: &mut SubtitleEngine,
    out: &mut dyn RenderAdapter,
) -> InputResult {
    // If help is showing, any key closes it
    if state.show_help {
        state.show_help = false;
        state.needs_render = true;
        return InputResult::Continue;
    }

    match key.code {
        // === Quit ===
        KeyCode::Char('q') | KeyCode::Esc => InputResult::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => InputResult::Quit,

        // === Help ===
        KeyCode::Char('?') => {
            state.toggle_help();
            InputResult::Continue
        }

        // === Playback controls ===
        KeyCode::Char(' ') => {
            // Play-again after completion starts over from the top
            if !clock.is_playing() && clock.at_end() {
                clock.seek(0.0);
            }
            clock.toggle();
            debug!(playing = clock.is_playing(), "toggled playback");
            state.needs_render = true;
            InputResult::Continue
        }
        KeyCode::Char('+') | KeyCode::Char('=') => {
            clock.speed_up();
            state.needs_render = true;
            InputResult::Continue
        }
        KeyCode::Char('-') | KeyCode::Char('_') => {
            clock.speed_down();
            state.needs_render = true;
            InputResult::Continue
        }

        // === Seeking ===
        KeyCode::Left => {
            clock.seek_by(-SEEK_STEP_SECS);
            debug!(time = clock.current_time(), "seek backward");
            state.needs_render = true;
            InputResult::Continue
        }
        KeyCode::Right => {
            clock.seek_by(SEEK_STEP_SECS);
            debug!(time = clock.current_time(), "seek forward");
            state.needs_render = true;
            InputResult::Continue
        }
        KeyCode::Home => {
            clock.seek(0.0);
            state.needs_render = true;
            InputResult::Continue
        }

        // === Turn navigation ===
        KeyCode::Char('n') => {
            if let Some(start) = next_turn_start(engine, clock.current_time()) {
                clock.seek(start);
                state.needs_render = true;
            }
            InputResult::Continue
        }
        KeyCode::Char('p') => {
            if let Some(start) = previous_turn_start(engine, clock.current_time()) {
                clock.seek(start);
                state.needs_render = true;
            }
            InputResult::Continue
        }

        // === Restart ===
        KeyCode::Char('r') => {
            clock.pause();
            clock.seek(0.0);
            engine.reset(out);
            state.needs_render = true;
            InputResult::Continue
        }

        _ => InputResult::Continue,
    }
}

/// Start time of the first turn after the playhead.
fn next_turn_start(engine: &SubtitleEngine, current_time: f64) -> Option<f64> {
    engine
        .groups()
        .iter()
        .map(|g| g.start_time)
        .find(|&start| start > current_time)
}

/// Start time of the last turn beginning before the playhead.
///
/// A small slack skips back past the turn that just started, so pressing `p`
/// repeatedly walks turn by turn instead of sticking to the current one.
fn previous_turn_start(engine: &SubtitleEngine, current_time: f64) -> Option<f64> {
    engine
        .groups()
        .iter()
        .map(|g| g.start_time)
        .filter(|&start| start < current_time - 0.5)
        .last()
}
