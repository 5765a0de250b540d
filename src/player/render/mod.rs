//! Terminal rendering for the player.
//!
//! `TerminalRenderer` implements the engine's render contract and owns the
//! visual state: the current bubble, the previous (dimmed) bubble, a bubble
//! fading out after a clear, and the latest status notice. Drawing goes
//! straight to the terminal as ANSI sequences over the raw-mode screen.

mod bubble;
mod help;
mod progress;
mod status;

use std::io::Write;

use anyhow::Result;

use crate::engine::{RenderAdapter, StatusNotice};
use crate::player::clock::PlaybackClock;
use crate::player::state::PlayerState;
use crate::transcript::SpeakerId;

pub use bubble::{align_offset, build_bubble, wrap_text, BubbleAlign, CURSOR_GLYPH};
pub use help::HELP_LINES;
pub use progress::{
    build_progress_cells, collect_turn_marks, format_duration, BarCell, TurnMark,
};
pub use status::{build_notice_lines, build_status_line};

/// Grace delay before a cleared bubble disappears, in milliseconds.
pub const FADE_GRACE_MS: u64 = 600;

// ANSI color codes
const RESET: &str = "\x1b[0m";
const DIM: &str = "\x1b[2m";
const WHITE: &str = "\x1b[97m";
const GREEN: &str = "\x1b[32m";
const DARK_GREY: &str = "\x1b[90m";
const GREY: &str = "\x1b[37m";
const CYAN: &str = "\x1b[36m";
const MAGENTA: &str = "\x1b[35m";
const YELLOW: &str = "\x1b[33m";

/// Color for a speaker's bubbles and timeline marks.
fn speaker_color(speaker: SpeakerId) -> &'static str {
    match speaker {
        1 => CYAN,
        2 => MAGENTA,
        _ => YELLOW,
    }
}

/// One on-screen speaker bubble.
#[derive(Debug, Clone)]
struct Bubble {
    /// Group index token, used to dedupe repeated `begin_group` calls
    index: usize,
    speaker: SpeakerId,
    label: String,
    text: String,
    show_cursor: bool,
}

/// A bubble lingering after a graceful clear.
#[derive(Debug, Clone)]
struct FadingBubble {
    bubble: Bubble,
    /// Set on the first expiry check after the clear
    expires_at_ms: Option<u64>,
}

/// Terminal implementation of the render contract.
#[derive(Debug, Default)]
pub struct TerminalRenderer {
    current: Option<Bubble>,
    previous: Option<Bubble>,
    fading: Option<FadingBubble>,
    notice: Option<StatusNotice>,
    dirty: bool,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when visual state changed since the last draw. Clears the flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Label of the speaker currently on screen, for the status bar.
    pub fn active_label(&self) -> Option<&str> {
        self.current.as_ref().map(|b| b.label.as_str())
    }

    /// Drop a faded bubble once its grace delay has passed.
    pub fn expire_fades(&mut self, now_ms: u64) {
        if let Some(fading) = &mut self.fading {
            match fading.expires_at_ms {
                None => fading.expires_at_ms = Some(now_ms + FADE_GRACE_MS),
                Some(at) if now_ms >= at => {
                    self.fading = None;
                    self.dirty = true;
                }
                Some(_) => {}
            }
        }
    }

    /// Draw a full frame.
    pub fn draw<W: Write>(
        &mut self,
        w: &mut W,
        state: &PlayerState,
        clock: &PlaybackClock,
        marks: &[TurnMark],
    ) -> Result<()> {
        let cols = state.term_cols as usize;
        let view_rows = state.view_rows() as usize;

        let mut frame = String::with_capacity(cols * state.term_rows as usize);

        let content = if state.show_help {
            self.help_rows(view_rows)
        } else {
            self.content_rows(cols, view_rows)
        };

        for row in 0..view_rows {
            frame.push_str(&format!("\x1b[{};1H\x1b[K", row + 1));
            if let Some(line) = content.get(row) {
                frame.push_str(line);
            }
        }

        // Chrome: separator, progress bar, status bar
        frame.push_str(&format!("\x1b[{};1H\x1b[K", view_rows + 1));
        frame.push_str(DARK_GREY);
        frame.push_str(&"─".repeat(cols));
        frame.push_str(RESET);

        frame.push_str(&format!("\x1b[{};1H\x1b[K", view_rows + 2));
        frame.push_str(&self.progress_row(cols, clock, marks));

        frame.push_str(&format!("\x1b[{};1H\x1b[K", view_rows + 3));
        frame.push_str(GREY);
        frame.push_str(&build_status_line(
            clock.is_playing(),
            clock.current_time(),
            clock.duration(),
            clock.speed(),
            self.active_label(),
        ));
        frame.push_str(RESET);

        write!(w, "{}", frame)?;
        w.flush()?;
        Ok(())
    }

    /// Subtitle-area rows: bubbles bottom-anchored, or a centered notice.
    fn content_rows(&self, cols: usize, view_rows: usize) -> Vec<String> {
        let mut rows: Vec<String> = Vec::new();

        let ghost = self
            .previous
            .as_ref()
            .or(self.fading.as_ref().map(|f| &f.bubble));
        if let Some(bubble) = ghost {
            rows.extend(render_bubble_lines(bubble, cols, true));
            rows.push(String::new());
        }
        if let Some(bubble) = &self.current {
            rows.extend(render_bubble_lines(bubble, cols, false));
        }

        if rows.is_empty() {
            if let Some(notice) = &self.notice {
                return centered_rows(&build_notice_lines(notice), cols, view_rows);
            }
            return rows;
        }

        // Bottom-anchor the bubbles inside the view area
        if rows.len() < view_rows {
            let mut padded = vec![String::new(); view_rows - rows.len()];
            padded.extend(rows);
            padded
        } else {
            // Keep the newest lines when the area is too small
            rows.split_off(rows.len() - view_rows)
        }
    }

    fn help_rows(&self, view_rows: usize) -> Vec<String> {
        HELP_LINES
            .iter()
            .take(view_rows)
            .map(|l| format!("  {}", l))
            .collect()
    }

    fn progress_row(&self, cols: usize, clock: &PlaybackClock, marks: &[TurnMark]) -> String {
        let bar_width = cols.saturating_sub(16).max(4);
        let (cells, _) = build_progress_cells(
            bar_width,
            clock.current_time(),
            clock.duration(),
            marks,
        );

        let mut out = String::with_capacity(bar_width * 4);
        out.push(' ');
        for cell in cells {
            match cell {
                BarCell::Filled => {
                    out.push_str(GREEN);
                    out.push('━');
                }
                BarCell::Empty => {
                    out.push_str(DARK_GREY);
                    out.push('─');
                }
                BarCell::Playhead => {
                    out.push_str(WHITE);
                    out.push('⏺');
                }
                BarCell::Mark(speaker) => {
                    out.push_str(speaker_color(speaker));
                    out.push('◆');
                }
            }
        }
        out.push_str(GREY);
        out.push_str(&format!(
            " {}/{}",
            format_duration(clock.current_time()),
            format_duration(clock.duration())
        ));
        out.push_str(RESET);
        out
    }
}

/// Lay out one bubble as colored, alignment-padded rows.
fn render_bubble_lines(bubble: &Bubble, cols: usize, dim: bool) -> Vec<String> {
    let max_width = (cols * 2 / 3).max(20);
    let lines = build_bubble(&bubble.label, &bubble.text, bubble.show_cursor, max_width);

    let align = if bubble.speaker == 2 {
        BubbleAlign::Right
    } else {
        BubbleAlign::Left
    };
    let bubble_width = lines
        .first()
        .map(|l| unicode_width::UnicodeWidthStr::width(l.as_str()))
        .unwrap_or(0);
    // Two columns of breathing room on either side
    let offset = 2 + align_offset(align, bubble_width + 4, cols);

    let color = speaker_color(bubble.speaker);
    lines
        .into_iter()
        .map(|line| {
            let mut row = String::new();
            row.push_str(&" ".repeat(offset));
            if dim {
                row.push_str(DIM);
            }
            row.push_str(color);
            row.push_str(&line);
            row.push_str(RESET);
            row
        })
        .collect()
}

/// Center `lines` horizontally and vertically inside the view area.
fn centered_rows(lines: &[String], cols: usize, view_rows: usize) -> Vec<String> {
    let top = view_rows.saturating_sub(lines.len()) / 2;
    let mut rows = vec![String::new(); top];
    for line in lines {
        let width = unicode_width::UnicodeWidthStr::width(line.as_str());
        let pad = cols.saturating_sub(width) / 2;
        rows.push(format!("{}{}{}{}", " ".repeat(pad), GREY, line, RESET));
    }
    rows
}

impl RenderAdapter for TerminalRenderer {
    fn begin_group(&mut self, index: usize, speaker: SpeakerId, label: &str) {
        // Idempotent against repeated notifications for the same group
        if self.current.as_ref().is_some_and(|b| b.index == index) {
            return;
        }
        self.previous = self.current.take();
        self.fading = None;
        self.notice = None;
        self.current = Some(Bubble {
            index,
            speaker,
            label: label.to_string(),
            text: String::new(),
            show_cursor: true,
        });
        self.dirty = true;
    }

    fn update_text(&mut self, text: &str, show_cursor: bool) {
        if let Some(bubble) = &mut self.current {
            if bubble.text != text || bubble.show_cursor != show_cursor {
                bubble.text.clear();
                bubble.text.push_str(text);
                bubble.show_cursor = show_cursor;
                self.dirty = true;
            }
        }
    }

    fn clear(&mut self, forced: bool) {
        self.previous = None;
        if forced {
            self.current = None;
            self.fading = None;
        } else if let Some(bubble) = self.current.take() {
            self.fading = Some(FadingBubble {
                bubble,
                expires_at_ms: None,
            });
        }
        self.dirty = true;
    }

    fn status(&mut self, notice: &StatusNotice) {
        self.notice = Some(notice.clone());
        self.dirty = true;
    }
}
