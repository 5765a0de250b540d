//! Integration tests for transcript loading from disk.

use super::helpers::{temp_transcript, SAMPLE_TRANSCRIPT};
use podview::transcript::{group_turns, TranscriptDocument};

#[test]
fn loads_transcript_from_file() {
    let (_dir, path) = temp_transcript(SAMPLE_TRANSCRIPT);
    let doc = TranscriptDocument::parse(&path).expect("should parse fixture");

    assert_eq!(doc.segment_count(), 3);
    assert_eq!(doc.speakers(), vec![1, 2]);
    assert_eq!(doc.duration(), 8.0);
}

#[test]
fn grouping_loaded_document_matches_expected_turns() {
    let (_dir, path) = temp_transcript(SAMPLE_TRANSCRIPT);
    let doc = TranscriptDocument::parse(&path).unwrap();
    let groups = group_turns(&doc.entries);

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].full_text, "Hi there");
    assert_eq!(groups[0].start_time, 0.0);
    assert_eq!(groups[0].end_time, 4.0);
    assert_eq!(groups[1].full_text, "Hello");
    assert_eq!(groups[1].speaker, 2);
}

#[test]
fn missing_file_is_an_error() {
    let result = TranscriptDocument::parse("/nonexistent/dir/transcript.json");
    assert!(result.is_err());
}

#[test]
fn malformed_json_is_an_error() {
    let (_dir, path) = temp_transcript("{ this is not json ]");
    assert!(TranscriptDocument::parse(&path).is_err());
}

#[test]
fn empty_array_loads_as_empty_document() {
    let (_dir, path) = temp_transcript("[]");
    let doc = TranscriptDocument::parse(&path).unwrap();
    assert!(doc.is_empty());
    assert!(group_turns(&doc.entries).is_empty());
}
