//! `podview info` handler.
//!
//! Prints a summary of a transcript - speakers, turn layout, duration -
//! without entering the player.

use std::path::Path;

use anyhow::{Context, Result};

use podview::player::render::format_duration;
use podview::transcript::{group_turns, TranscriptDocument, TurnGroup};
use podview::Config;

/// Longest turn-text preview printed per line.
const PREVIEW_CHARS: usize = 50;

/// Summarize a transcript file to stdout.
pub fn handle_info(transcript: &Path) -> Result<()> {
    let doc = TranscriptDocument::parse(transcript)
        .with_context(|| format!("Failed to load transcript: {}", transcript.display()))?;
    let config = Config::load().unwrap_or_default();
    let groups = group_turns(&doc.entries);

    print!("{}", render_summary(transcript, &doc, &groups, &config));
    Ok(())
}

/// Build the summary text. Split from [`handle_info`] so tests can exercise
/// it without touching stdout.
fn render_summary(
    path: &Path,
    doc: &TranscriptDocument,
    groups: &[TurnGroup],
    config: &Config,
) -> String {
    let label = |id| {
        config
            .speakers
            .iter()
            .find(|s| s.id == id)
            .map(|s| s.label.clone())
            .unwrap_or_else(|| format!("Speaker {}", id))
    };

    let mut out = String::new();
    out.push_str(&format!("Transcript: {}\n", path.display()));
    out.push_str(&format!("  speakers: {}\n", doc.speakers().len()));
    out.push_str(&format!("  segments: {}\n", doc.segment_count()));
    out.push_str(&format!("  turns:    {}\n", groups.len()));
    out.push_str(&format!(
        "  duration: {}\n",
        format_duration(doc.duration())
    ));

    if !groups.is_empty() {
        out.push('\n');
    }
    for group in groups {
        let preview: String = group.full_text.chars().take(PREVIEW_CHARS).collect();
        let ellipsis = if group.full_text.chars().count() > PREVIEW_CHARS {
            "..."
        } else {
            ""
        };
        out.push_str(&format!(
            "  [{}-{}] {}: {}{}\n",
            format_duration(group.start_time),
            format_duration(group.end_time),
            label(group.speaker),
            preview,
            ellipsis
        ));
    }
    out
}
