//! Player UI state.
//!
//! Playback timing lives in [`crate::player::PlaybackClock`]; this struct
//! carries the terminal-facing state: viewport dimensions, overlay flags, and
//! the redraw flag.

/// Result of processing an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Continue playback/rendering
    Continue,
    /// Exit the player
    Quit,
}

/// Terminal-facing player state.
#[derive(Debug)]
pub struct PlayerState {
    /// Whether the help overlay is visible
    pub show_help: bool,
    /// Current terminal width
    pub term_cols: u16,
    /// Current terminal height
    pub term_rows: u16,
    /// True when the screen needs to be redrawn
    pub needs_render: bool,
}

impl PlayerState {
    /// Number of chrome lines (separator + progress + status bar)
    pub const STATUS_LINES: u16 = 3;

    pub fn new(term_cols: u16, term_rows: u16) -> Self {
        Self {
            show_help: false,
            term_cols,
            term_rows,
            needs_render: true,
        }
    }

    /// Rows available to the subtitle area.
    pub fn view_rows(&self) -> u16 {
        self.term_rows.saturating_sub(Self::STATUS_LINES)
    }

    /// Handle a terminal resize event.
    pub fn handle_resize(&mut self, new_cols: u16, new_rows: u16) {
        self.term_cols = new_cols;
        self.term_rows = new_rows;
        self.needs_render = true;
    }

    /// Toggle the help overlay.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
        self.needs_render = true;
    }
}
