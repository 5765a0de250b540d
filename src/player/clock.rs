//! Playback clock.
//!
//! Stands in for the media-playback primitive: exposes `current_time`,
//! `duration`, play/pause, seeking, and a speed multiplier. Time advances
//! against the wall clock while playing; pausing freezes the playhead by
//! folding the elapsed span into a fixed offset.

use std::time::Instant;

/// Minimum playback speed multiplier.
pub const MIN_SPEED: f64 = 0.25;

/// Maximum playback speed multiplier.
pub const MAX_SPEED: f64 = 4.0;

/// Wall-clock driven playhead over a fixed-duration piece of media.
#[derive(Debug)]
pub struct PlaybackClock {
    playing: bool,
    speed: f64,
    /// Wall time of the last play/seek/speed rebase.
    origin: Instant,
    /// Playhead position at `origin`, in seconds.
    offset: f64,
    duration: f64,
}

impl PlaybackClock {
    /// Clock for media of the given duration (seconds), paused at zero.
    pub fn new(duration: f64) -> Self {
        Self {
            playing: false,
            speed: 1.0,
            origin: Instant::now(),
            offset: 0.0,
            duration: duration.max(0.0),
        }
    }

    /// Current playhead position in seconds, clamped to `[0, duration]`.
    pub fn current_time(&self) -> f64 {
        let time = if self.playing {
            self.offset + self.origin.elapsed().as_secs_f64() * self.speed
        } else {
            self.offset
        };
        time.clamp(0.0, self.duration)
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// True once the playhead has reached the end of the media.
    pub fn at_end(&self) -> bool {
        self.duration > 0.0 && self.current_time() >= self.duration
    }

    pub fn play(&mut self) {
        if !self.playing {
            self.rebase();
            self.playing = true;
        }
    }

    pub fn pause(&mut self) {
        if self.playing {
            self.offset = self.current_time();
            self.playing = false;
        }
    }

    pub fn toggle(&mut self) {
        if self.playing {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Move the playhead to `time` (clamped), preserving the play state.
    pub fn seek(&mut self, time: f64) {
        self.offset = time.clamp(0.0, self.duration);
        self.origin = Instant::now();
    }

    /// Seek relative to the current position.
    pub fn seek_by(&mut self, delta: f64) {
        let target = self.current_time() + delta;
        self.seek(target);
    }

    /// Change the speed multiplier without moving the playhead.
    pub fn set_speed(&mut self, speed: f64) {
        self.rebase();
        self.speed = speed.clamp(MIN_SPEED, MAX_SPEED);
    }

    /// Increase playback speed by a 1.5x step.
    pub fn speed_up(&mut self) {
        self.set_speed(self.speed * 1.5);
    }

    /// Decrease playback speed by a 1.5x step.
    pub fn speed_down(&mut self) {
        self.set_speed(self.speed / 1.5);
    }

    /// Fold elapsed time into the offset and restart the origin.
    fn rebase(&mut self) {
        self.offset = self.current_time();
        self.origin = Instant::now();
    }
}
