//! Audio media probing.
//!
//! Audio decoding and playback are delegated to the platform; the player only
//! needs the media duration to size its timeline. A failed probe is never
//! fatal: the caller falls back to the transcript's end time.

use std::path::Path;

use tracing::warn;

/// Duration of a WAV file in seconds, or `None` when the file is missing or
/// not readable as WAV.
pub fn probe_duration(path: &Path) -> Option<f64> {
    match hound::WavReader::open(path) {
        Ok(reader) => {
            let spec = reader.spec();
            if spec.sample_rate == 0 {
                return None;
            }
            Some(f64::from(reader.duration()) / f64::from(spec.sample_rate))
        }
        Err(err) => {
            warn!(
                error = %err,
                path = %path.display(),
                "audio probe failed, falling back to transcript duration"
            );
            None
        }
    }
}
