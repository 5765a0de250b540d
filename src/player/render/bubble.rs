//! Speaker bubble layout.
//!
//! Pure text layout for the subtitle bubbles: word wrapping by display width
//! and box assembly. Colors and screen positioning are applied by the
//! renderer; everything here returns plain strings so it can be tested
//! without a terminal.

use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

/// Horizontal placement of a bubble in the subtitle area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BubbleAlign {
    Left,
    Right,
}

/// Cursor glyph appended while a segment is still being revealed.
pub const CURSOR_GLYPH: char = '▌';

/// Word-wrap `text` to lines of at most `width` display columns.
///
/// Words wider than the limit are hard-broken. Returns at least one line
/// (possibly empty) so an empty bubble still has a body row.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines: Vec<String> = Vec::new();
    let mut line = String::new();
    let mut line_width = 0usize;

    for word in text.split(' ') {
        let word_width = word.width();

        if word_width > width {
            // Hard-break an oversized word character by character
            for ch in word.chars() {
                let ch_width = ch.width().unwrap_or(0);
                if line_width + ch_width > width {
                    lines.push(std::mem::take(&mut line));
                    line_width = 0;
                }
                line.push(ch);
                line_width += ch_width;
            }
            continue;
        }

        let needed = if line.is_empty() {
            word_width
        } else {
            line_width + 1 + word_width
        };
        if needed > width && !line.is_empty() {
            lines.push(std::mem::take(&mut line));
            line_width = 0;
        }
        if !line.is_empty() {
            line.push(' ');
            line_width += 1;
        }
        line.push_str(word);
        line_width += word_width;
    }

    lines.push(line);
    lines
}

/// Assemble a bubble as plain lines: a top border carrying the speaker
/// label, padded body lines, and a bottom border.
///
/// `max_width` bounds the whole bubble including borders. The trailing
/// cursor glyph is appended to the last body line while `show_cursor` holds.
pub fn build_bubble(label: &str, text: &str, show_cursor: bool, max_width: usize) -> Vec<String> {
    // Borders and one space of padding on each side
    let inner_width = max_width.saturating_sub(4).max(4);

    let mut body = if text.is_empty() && show_cursor {
        vec![String::new()]
    } else {
        wrap_text(text, inner_width)
    };
    if show_cursor {
        // Keep the cursor inside the wrap limit
        if body.last().is_some_and(|l| l.width() + 1 > inner_width) {
            body.push(String::new());
        }
        if let Some(last) = body.last_mut() {
            last.push(CURSOR_GLYPH);
        }
    }

    let content_width = body
        .iter()
        .map(|l| l.width())
        .chain(std::iter::once(label.width() + 2))
        .max()
        .unwrap_or(0)
        .min(inner_width.max(label.width() + 2));

    let mut lines = Vec::with_capacity(body.len() + 2);

    // Top border: ╭─ Label ──────╮
    let mut top = String::from("╭─ ");
    top.push_str(label);
    top.push(' ');
    let used = 3 + label.width() + 1;
    let total = content_width + 4;
    for _ in used..total.saturating_sub(1) {
        top.push('─');
    }
    top.push('╮');
    lines.push(top);

    for line in &body {
        let pad = content_width.saturating_sub(line.width());
        lines.push(format!("│ {}{} │", line, " ".repeat(pad)));
    }

    let mut bottom = String::from("╰");
    for _ in 0..content_width + 2 {
        bottom.push('─');
    }
    bottom.push('╯');
    lines.push(bottom);

    lines
}

/// Left padding that places a bubble of `bubble_width` columns according to
/// its alignment inside `area_width` columns.
pub fn align_offset(align: BubbleAlign, bubble_width: usize, area_width: usize) -> usize {
    match align {
        BubbleAlign::Left => 0,
        BubbleAlign::Right => area_width.saturating_sub(bubble_width),
    }
}
