//! Status bar and status notice rendering.

use unicode_width::UnicodeWidthStr;

use crate::engine::StatusNotice;
use crate::player::render::progress::format_duration;

/// Build the status bar text (uncolored, unpadded).
///
/// Shows the play state, playhead position, speed, and either the active
/// speaker or a hint to press `?`.
pub fn build_status_line(
    playing: bool,
    current_time: f64,
    total_duration: f64,
    speed: f64,
    active_label: Option<&str>,
) -> String {
    let state = if playing { "▶" } else { "⏸" };
    let time = format!(
        "{}/{}",
        format_duration(current_time),
        format_duration(total_duration)
    );
    let speaking = match active_label {
        Some(label) => format!("  {}", label),
        None => String::new(),
    };
    format!(
        " {} {}  {:.2}x{}  ? help  q quit",
        state, time, speed, speaking
    )
}

/// Build a status notice as boxed plain lines: icon + title, then the
/// subtitle underneath.
pub fn build_notice_lines(notice: &StatusNotice) -> Vec<String> {
    let headline = format!("{}  {}", notice.icon, notice.title);
    let width = notice
        .subtitle
        .as_deref()
        .map(UnicodeWidthStr::width)
        .unwrap_or(0)
        .max(headline.width());

    let mut lines = Vec::with_capacity(4);
    lines.push(format!("┌{}┐", "─".repeat(width + 2)));
    lines.push(format!(
        "│ {}{} │",
        headline,
        " ".repeat(width - headline.width())
    ));
    if let Some(subtitle) = &notice.subtitle {
        lines.push(format!(
            "│ {}{} │",
            subtitle,
            " ".repeat(width - subtitle.width())
        ));
    }
    lines.push(format!("└{}┘", "─".repeat(width + 2)));
    lines
}
