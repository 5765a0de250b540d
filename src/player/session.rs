//! Player session: terminal setup and the main loop.
//!
//! The loop is the single event-processing context: it polls the keyboard
//! with a short timeout, reads the playhead from the clock, feeds one
//! time-advance notification to the engine, and redraws. The engine's reveal
//! steps fire inside the same loop, so nothing here needs synchronization.

use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::{cursor, execute, terminal};
use tracing::{debug, info};

use crate::audio;
use crate::config::Config;
use crate::engine::{RenderAdapter, StatusNotice, SubtitleEngine};
use crate::player::clock::PlaybackClock;
use crate::player::input::handle_key_event;
use crate::player::render::{collect_turn_marks, TerminalRenderer};
use crate::player::state::{InputResult, PlayerState};
use crate::transcript::{SpeakerId, TranscriptDocument};

/// Options carried from the CLI into a player session.
#[derive(Debug, Default)]
pub struct SessionOptions {
    /// WAV file to probe for the media duration
    pub audio: Option<PathBuf>,
    /// Initial speed override
    pub speed: Option<f64>,
    /// Speaker label overrides
    pub speakers: Vec<(SpeakerId, String)>,
}

/// Restores the terminal on drop, so a panic inside the loop cannot leave
/// the shell in raw mode.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        terminal::enable_raw_mode().context("Failed to enable raw mode")?;
        execute!(io::stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// Run the player on a transcript file.
#[cfg(not(tarpaulin_include))]
pub fn run_player(transcript: &Path, opts: &SessionOptions, config: &Config) -> Result<()> {
    let doc = TranscriptDocument::parse(transcript)
        .with_context(|| format!("Failed to load transcript: {}", transcript.display()))?;

    let mut engine = SubtitleEngine::new(config.typing_tuning());
    for speaker in &config.speakers {
        engine.set_speaker_label(speaker.id, speaker.label.clone());
    }
    for (id, label) in &opts.speakers {
        engine.set_speaker_label(*id, label.clone());
    }

    let turns = engine.load_transcript(&doc);
    let marks = collect_turn_marks(engine.groups());

    // Media duration: probed audio when available, transcript end otherwise
    let duration = opts
        .audio
        .as_deref()
        .and_then(audio::probe_duration)
        .unwrap_or_else(|| doc.duration());
    info!(turns, duration, "starting player session");

    let mut clock = PlaybackClock::new(duration);
    clock.set_speed(opts.speed.unwrap_or(config.player.default_speed));

    let mut renderer = TerminalRenderer::new();
    renderer.status(&if turns == 0 {
        StatusNotice::empty()
    } else {
        StatusNotice::ready()
    });

    let _guard = TerminalGuard::enter()?;
    let (cols, rows) = terminal::size().context("Failed to read terminal size")?;
    let mut state = PlayerState::new(cols, rows);
    let mut stdout = io::stdout();

    let started = Instant::now();
    let tick = Duration::from_millis(config.player.tick_ms.max(1));

    loop {
        if event::poll(tick)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    let result =
                        handle_key_event(key, &mut state, &mut clock, &mut engine, &mut renderer);
                    if result == InputResult::Quit {
                        break;
                    }
                }
                Event::Resize(new_cols, new_rows) => {
                    state.handle_resize(new_cols, new_rows);
                }
                _ => {}
            }
        }

        let now_ms = started.elapsed().as_millis() as u64;
        engine.on_time_advanced(clock.current_time(), now_ms, &mut renderer);
        renderer.expire_fades(now_ms);

        if clock.is_playing() && clock.at_end() {
            clock.pause();
            engine.playback_ended(&mut renderer);
            debug!("playback reached end of media");
        }

        if state.needs_render || renderer.take_dirty() || clock.is_playing() {
            renderer.draw(&mut stdout, &state, &clock, &marks)?;
            state.needs_render = false;
        }
    }

    Ok(())
}
