//! Help overlay content.

/// Key binding summary shown by the `?` overlay.
pub const HELP_LINES: &[&str] = &[
    "podview keys",
    "",
    "  space      play / pause",
    "  ← / →      seek 10s back / forward",
    "  n / p      next / previous speaker turn",
    "  + / -      playback speed up / down",
    "  home       jump to start",
    "  r          restart (paused at 0:00)",
    "  ?          toggle this help",
    "  q / esc    quit",
    "",
    "press any key to close",
];
