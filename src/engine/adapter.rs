//! Render adapter contract.
//!
//! The engine never touches the terminal directly; it emits render
//! instructions through this trait, and the player's terminal renderer (or a
//! test double) carries them out.

use crate::transcript::SpeakerId;

/// Status notification kinds surfaced to the host UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Loading,
    Ready,
    Empty,
    Error,
    Completed,
}

/// A status notification: title + icon + optional subtitle, no stricter
/// schema than that.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusNotice {
    pub kind: StatusKind,
    pub icon: &'static str,
    pub title: String,
    pub subtitle: Option<String>,
}

impl StatusNotice {
    pub fn loading() -> Self {
        Self {
            kind: StatusKind::Loading,
            icon: "◌",
            title: "Loading content...".to_string(),
            subtitle: Some("Just a moment".to_string()),
        }
    }

    pub fn ready() -> Self {
        Self {
            kind: StatusKind::Ready,
            icon: "▶",
            title: "Ready to play".to_string(),
            subtitle: Some("Press space to start the podcast".to_string()),
        }
    }

    pub fn empty() -> Self {
        Self {
            kind: StatusKind::Empty,
            icon: "○",
            title: "Waiting for audio".to_string(),
            subtitle: Some("Load a transcript to get started".to_string()),
        }
    }

    pub fn error(detail: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            icon: "✖",
            title: "Load failed".to_string(),
            subtitle: Some(detail.into()),
        }
    }

    pub fn completed() -> Self {
        Self {
            kind: StatusKind::Completed,
            icon: "✔",
            title: "Playback complete".to_string(),
            subtitle: Some("Press space to play again".to_string()),
        }
    }
}

/// Receiver for the engine's render instructions.
///
/// Within one time-advance notification the engine calls at most one of
/// `begin_group`/`clear`, followed by `update_text` when the visible text
/// changed. Implementations carry the currently displayed group token
/// themselves and must treat a repeated `begin_group` for that group as a
/// no-op.
pub trait RenderAdapter {
    /// A new speaker turn became active: slide the current bubble to the
    /// "previous" slot and open a fresh one for this turn.
    fn begin_group(&mut self, index: usize, speaker: SpeakerId, label: &str);

    /// Update the current bubble's text and trailing-cursor visibility.
    fn update_text(&mut self, text: &str, show_cursor: bool);

    /// Remove the current bubble. Graceful fade-out on natural silence;
    /// immediate when `forced` (reset, playback end).
    fn clear(&mut self, forced: bool);

    /// Show a status notification.
    fn status(&mut self, notice: &StatusNotice);
}
