use crate::core::error::{FooterError, FooterResult};
use crate::domain::config::{MAX_FPS, MIN_FPS};

pub fn check_fps(fps: f64) -> FooterResult<()> {
    if (MIN_FPS..=MAX_FPS).contains(&fps) {
        Ok(())
    } else {
        Err(FooterError::FrameRateOutOfRange { requested: fps, min: MIN_FPS, max: MAX_FPS })
    }
}

/// Elapsed-time gate that turns display refreshes into logical frames.
///
/// A frame is due once strictly more than `interval_ms` has passed since the
/// last one. The remainder is carried over so the average rate stays exact
/// whatever the host refresh rate is.
#[derive(Clone, Debug)]
pub struct FrameClock {
    fps: f64,
    interval_ms: f64,
    last_frame: Option<f64>,
}

impl FrameClock {
    pub fn new(fps: f64) -> Self {
        let fps = fps.clamp(MIN_FPS, MAX_FPS);
        Self { fps, interval_ms: 1000.0 / fps, last_frame: None }
    }

    pub fn fps(&self) -> f64 {
        self.fps
    }

    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    /// Rejects anything outside [1, 30] (NaN included) and keeps the old rate
    pub fn set_fps(&mut self, fps: f64) -> FooterResult<()> {
        check_fps(fps)?;
        self.fps = fps;
        self.interval_ms = 1000.0 / fps;
        Ok(())
    }

    /// The next poll only sets the baseline
    pub fn reset(&mut self) {
        self.last_frame = None;
    }

    /// True when a logical frame is due at `now` (milliseconds)
    pub fn poll(&mut self, now: f64) -> bool {
        let Some(last) = self.last_frame else {
            self.last_frame = Some(now);
            return false;
        };

        let elapsed = now - last;
        if elapsed > self.interval_ms {
            self.last_frame = Some(now - (elapsed % self.interval_ms));
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_poll_sets_baseline() {
        let mut clock = FrameClock::new(8.0);
        assert!(!clock.poll(1000.0));
        assert!(!clock.poll(1125.0));
        assert!(clock.poll(1125.5));
    }

    #[test]
    fn remainder_is_carried_over() {
        let mut clock = FrameClock::new(8.0);
        clock.poll(0.0);
        assert!(clock.poll(130.0));
        // baseline is now 125, not 130
        assert!(clock.poll(250.5));
    }

    #[test]
    fn long_gaps_produce_a_single_frame() {
        let mut clock = FrameClock::new(8.0);
        clock.poll(0.0);
        assert!(clock.poll(10_000.5));
        assert!(!clock.poll(10_001.0));
    }

    #[test]
    fn out_of_range_rates_keep_the_old_interval() {
        let mut clock = FrameClock::new(8.0);
        for bad in [0.0, -5.0, 31.0, f64::NAN] {
            assert!(clock.set_fps(bad).is_err());
            assert_eq!(clock.interval_ms(), 125.0);
        }
        assert!(clock.set_fps(30.0).is_ok());
        assert!((clock.interval_ms() - 33.333).abs() < 0.001);
    }
}
