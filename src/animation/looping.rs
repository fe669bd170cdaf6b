//! Indefinitely repeating decorative animations.
//!
//! Loops are pure functions of the time elapsed since they were attached plus a fixed
//! per-instance delay; they hold no timer state of their own.

use crate::{
    animation::{
        ease::Ease,
        tween::{Lerp, Property, VisualProps},
    },
    foundation::core::{ElementId, Millis},
    foundation::error::{PageError, PageResult},
};

/// Keyframes for one property, evenly spaced over `period` and repeated forever.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LoopTrack {
    pub property: Property,
    pub keys: Vec<f64>,
    pub period: Millis,
    /// Applied to each segment between consecutive keys.
    #[serde(default = "default_loop_ease")]
    pub ease: Ease,
}

fn default_loop_ease() -> Ease {
    Ease::EaseInOut
}

impl LoopTrack {
    pub fn new(property: Property, keys: Vec<f64>, period: Millis) -> Self {
        Self {
            property,
            keys,
            period,
            ease: default_loop_ease(),
        }
    }

    pub fn validate(&self) -> PageResult<()> {
        if self.keys.is_empty() {
            return Err(PageError::validation("loop track needs at least one key"));
        }
        if !self.keys.iter().all(|k| k.is_finite()) {
            return Err(PageError::validation("loop track keys must be finite"));
        }
        if self.period.is_zero() {
            return Err(PageError::validation("loop track period must be > 0"));
        }
        if !self.ease.is_valid() {
            return Err(PageError::validation(format!(
                "invalid easing curve {:?}",
                self.ease
            )));
        }
        Ok(())
    }

    /// Value at `local` time since the loop started running (after any delay).
    pub fn sample(&self, local: Millis) -> f64 {
        let Some(&first) = self.keys.first() else {
            return 0.0;
        };
        if self.keys.len() == 1 || self.period.is_zero() {
            return first;
        }

        let segments = (self.keys.len() - 1) as f64;
        let in_period = (local.0 % self.period.0) as f64 / self.period.0 as f64;
        let pos = in_period * segments;
        let seg = (pos.floor() as usize).min(self.keys.len() - 2);
        let t = pos - seg as f64;
        f64::lerp(&self.keys[seg], &self.keys[seg + 1], self.ease.apply(t))
    }
}

/// A group of looping tracks attached to one element.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LoopAnimation {
    pub tracks: Vec<LoopTrack>,
    /// Fixed start offset. `None` lets the scheduler derive a per-element phase.
    #[serde(default)]
    pub delay: Option<Millis>,
}

impl LoopAnimation {
    pub fn new(tracks: Vec<LoopTrack>) -> Self {
        Self {
            tracks,
            delay: None,
        }
    }

    pub fn with_delay(mut self, delay: Millis) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn validate(&self) -> PageResult<()> {
        if self.tracks.is_empty() {
            return Err(PageError::validation("loop animation has no tracks"));
        }
        for track in &self.tracks {
            track.validate()?;
        }
        Ok(())
    }

    /// Longest track period; used as the reference for derived phase offsets.
    pub fn period(&self) -> Millis {
        self.tracks
            .iter()
            .map(|t| t.period)
            .max()
            .unwrap_or(Millis::ZERO)
    }

    /// Overwrite the animated properties of `props` with their values at `elapsed`.
    ///
    /// Until `delay` has passed each track holds its first key.
    pub fn apply(&self, elapsed: Millis, delay: Millis, props: &mut VisualProps) {
        let local = elapsed.saturating_sub(delay);
        for track in &self.tracks {
            let Some(&first) = track.keys.first() else {
                continue;
            };
            let value = if elapsed < delay {
                first
            } else {
                track.sample(local)
            };
            props.set(track.property, value);
        }
    }
}

const GOLDEN_FRACTION: f64 = 0.618_033_988_749_895;

/// Deterministic phase offset for `id` within `period`.
///
/// Successive ids land on the golden-ratio low-discrepancy sequence, so no two elements
/// sharing a period start at the same phase.
pub fn derived_phase(id: ElementId, period: Millis) -> Millis {
    let frac = ((f64::from(id.0) + 1.0) * GOLDEN_FRACTION).fract();
    Millis((frac * period.0 as f64).round() as u64)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/looping.rs"]
mod tests;
