//! Flick gesture detection over a sliding window of hand speed samples.
//!
//! While a hold is locked, the primary hand's speed is sampled once per
//! frame into a short ring. The threshold policy fires mid-hold the moment
//! a sample clears the cutoff; the median policy waits for the hold to be
//! released and fires on the window median, which a single tracking spike
//! cannot drag over the floor.

use std::collections::VecDeque;

use telekin_core::config::SessionConfig;
use telekin_core::enums::FlickPolicy;

/// A recognized flick gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Flick {
    /// Gesture strength in m/s (the firing sample or the window median).
    pub strength: f32,
}

/// Sliding-window gesture detector. One per session; only sampled while a
/// hold is locked.
#[derive(Debug, Default)]
pub struct FlickDetector {
    samples: VecDeque<f32>,
}

impl FlickDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one hand speed sample. Under the threshold policy this may
    /// fire immediately; the window is cleared when it does.
    pub fn sample(&mut self, speed: f32, config: &SessionConfig) -> Option<Flick> {
        self.samples.push_back(speed);
        while self.samples.len() > config.flick_sample_window.max(1) {
            self.samples.pop_front();
        }

        if config.flick_policy == FlickPolicy::Threshold
            && speed > config.flick_cutoff_speed
            && speed >= config.flick_strength_floor
        {
            self.samples.clear();
            return Some(Flick { strength: speed });
        }
        None
    }

    /// End the gesture window (the hold was released). Under the median
    /// policy this is the firing point; either way the window is consumed.
    pub fn release(&mut self, config: &SessionConfig) -> Option<Flick> {
        let window: Vec<f32> = self.samples.drain(..).collect();
        if config.flick_policy != FlickPolicy::Median {
            return None;
        }
        let strength = median(&window)?;
        if strength >= config.flick_strength_floor {
            Some(Flick { strength })
        } else {
            None
        }
    }

    /// Discard any pending samples without firing.
    pub fn reset(&mut self) {
        self.samples.clear();
    }

    #[cfg(test)]
    fn sample_count(&self) -> usize {
        self.samples.len()
    }
}

/// Upper-middle median: for an even count the higher of the two central
/// values is taken, which leans toward firing on a genuine flick.
fn median(values: &[f32]) -> Option<f32> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f32::total_cmp);
    Some(sorted[sorted.len() / 2])
}
