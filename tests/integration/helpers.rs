//! Shared fixtures for integration tests.

use std::path::PathBuf;

use tempfile::TempDir;

/// The two-turn conversation used across the suite: speaker 1 says
/// "Hi" + "there" (0.5s gap merges them), speaker 2 answers "Hello" after a
/// 2s silence.
pub const SAMPLE_TRANSCRIPT: &str = r#"[
    {"speaker": 1, "segments": [
        {"startTime": 0.0, "endTime": 2.0, "text": "Hi"},
        {"startTime": 2.5, "endTime": 4.0, "text": "there"}
    ]},
    {"speaker": 2, "segments": [
        {"startTime": 6.0, "endTime": 8.0, "text": "Hello"}
    ]}
]"#;

/// Write transcript JSON into a temp dir and return (dir, path).
///
/// Keep the `TempDir` alive for as long as the path is used.
pub fn temp_transcript(content: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("transcript.json");
    std::fs::write(&path, content).expect("write fixture");
    (dir, path)
}
