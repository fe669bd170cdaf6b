//! Rotating hero background with per-slot crossfades.

use crate::{
    animation::{ease::Ease, tween::Tween},
    foundation::core::Millis,
    foundation::error::{PageError, PageResult},
    foundation::timer::IntervalTimer,
};

/// Default time each hero image stays current.
pub const DEFAULT_INTERVAL: Millis = Millis(6000);

/// Opacity transition applied when the current image changes.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Crossfade {
    pub duration: Millis,
    pub ease: Ease,
}

impl Default for Crossfade {
    fn default() -> Self {
        Self {
            duration: Millis(1500),
            ease: Ease::EaseInOut,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Lifecycle {
    Idle,
    Running,
    TornDown,
}

#[derive(Clone, Debug)]
struct Slot {
    src: String,
    blank: bool,
    fade: Tween<f64>,
    fade_started: Millis,
}

/// Render-ready state of one hero slot.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct HeroSlotView {
    pub src: String,
    pub alt: String,
    /// Set only for the first slot, which is visible before the timer ever fires.
    pub priority: bool,
    pub target_opacity: f64,
    pub opacity: f64,
    /// The asset failed to load; the slot renders fully transparent.
    pub blank: bool,
}

/// Cycles a fixed, non-empty list of images on a recurring timer.
///
/// The rotator is the only writer of its index: it changes solely through [`poll`]
/// while mounted. Polling before mount or after unmount has no effect.
///
/// [`poll`]: HeroRotator::poll
#[derive(Clone, Debug)]
pub struct HeroRotator {
    slots: Vec<Slot>,
    current: usize,
    timer: IntervalTimer,
    crossfade: Crossfade,
    lifecycle: Lifecycle,
}

impl HeroRotator {
    pub fn new(images: Vec<String>, interval: Millis, crossfade: Crossfade) -> PageResult<Self> {
        if images.is_empty() {
            return Err(PageError::validation(
                "hero rotator needs at least one image",
            ));
        }
        if !crossfade.ease.is_valid() {
            return Err(PageError::validation(format!(
                "invalid crossfade easing {:?}",
                crossfade.ease
            )));
        }
        let timer = IntervalTimer::new(interval)?;

        let slots = images
            .into_iter()
            .enumerate()
            .map(|(i, src)| Slot {
                src,
                blank: false,
                fade: resting(i == 0, crossfade),
                fade_started: Millis::ZERO,
            })
            .collect();

        Ok(Self {
            slots,
            current: 0,
            timer,
            crossfade,
            lifecycle: Lifecycle::Idle,
        })
    }

    /// Start the rotation timer. The first advance happens one interval after `now`.
    pub fn mount(&mut self, now: Millis) {
        if self.lifecycle != Lifecycle::Idle {
            tracing::debug!(lifecycle = ?self.lifecycle, "hero rotator already mounted");
            return;
        }
        self.lifecycle = Lifecycle::Running;
        self.timer.start(now);
        for slot in &mut self.slots {
            slot.fade_started = now;
        }
    }

    /// Cancel the timer. No index change is possible afterwards.
    pub fn unmount(&mut self) {
        self.timer.cancel();
        self.lifecycle = Lifecycle::TornDown;
    }

    pub fn is_running(&self) -> bool {
        self.lifecycle == Lifecycle::Running
    }

    /// Deliver every timer firing due by `now`. Returns the number of advances.
    ///
    /// A long gap is applied in constant time: only the advances whose crossfades can
    /// still be running are replayed.
    pub fn poll(&mut self, now: Millis) -> u64 {
        if !self.is_running() {
            return 0;
        }
        let Some(due) = self.timer.poll_due(now) else {
            return 0;
        };

        let replay = due.count.min(self.replay_window());
        let skipped = due.count - replay;
        if skipped > 0 {
            let len = self.slots.len() as u64;
            self.current = ((self.current as u64 + skipped % len) % len) as usize;
            self.settle(due.at(skipped - 1));
        }
        for i in skipped..due.count {
            self.advance(due.at(i));
        }
        due.count
    }

    /// Advances whose crossfade may still be running at the next firing.
    fn replay_window(&self) -> u64 {
        let interval = self.timer.period().0;
        self.crossfade.duration.0.div_ceil(interval) + 1
    }

    /// Put every slot at rest on its target opacity as of `at`.
    fn settle(&mut self, at: Millis) {
        let current = self.current;
        for (i, slot) in self.slots.iter_mut().enumerate() {
            slot.fade = resting(i == current, self.crossfade);
            slot.fade_started = at;
        }
    }

    fn advance(&mut self, at: Millis) {
        self.current = (self.current + 1) % self.slots.len();
        let current = self.current;
        let Crossfade { duration, ease } = self.crossfade;
        for (i, slot) in self.slots.iter_mut().enumerate() {
            let from = slot.fade.sample(at.saturating_sub(slot.fade_started));
            let to = if i == current { 1.0 } else { 0.0 };
            slot.fade = Tween {
                from,
                to,
                duration,
                delay: Millis::ZERO,
                ease,
            };
            slot.fade_started = at;
        }
        tracing::trace!(index = current, at = at.0, "hero advanced");
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn interval(&self) -> Millis {
        self.timer.period()
    }

    pub fn crossfade(&self) -> Crossfade {
        self.crossfade
    }

    /// Opacity the slot is animating toward: 1 for the current slot, 0 otherwise.
    pub fn target_opacity(&self, slot: usize) -> f64 {
        if slot == self.current { 1.0 } else { 0.0 }
    }

    /// Sampled opacity of `slot` at `now`. Blank and out-of-range slots are transparent.
    pub fn opacity_at(&self, slot: usize, now: Millis) -> f64 {
        match self.slots.get(slot) {
            Some(s) if !s.blank => s.fade.sample(now.saturating_sub(s.fade_started)),
            _ => 0.0,
        }
    }

    /// Record that the asset in `slot` could not be resolved.
    ///
    /// The slot stays transparent for the rest of the session; the cycle is unaffected.
    pub fn mark_failed(&mut self, slot: usize) {
        let Some(s) = self.slots.get_mut(slot) else {
            tracing::debug!(slot, "asset failure reported for unknown hero slot");
            return;
        };
        if !s.blank {
            tracing::warn!(src = %s.src, slot, "failed to load hero image");
            s.blank = true;
        }
    }

    /// Mark every slot whose source equals `src` as failed. Returns `true` if any matched.
    pub fn mark_failed_src(&mut self, src: &str) -> bool {
        let hits: Vec<usize> = self
            .slots
            .iter()
            .enumerate()
            .filter(|(_, s)| s.src == src)
            .map(|(i, _)| i)
            .collect();
        for &i in &hits {
            self.mark_failed(i);
        }
        !hits.is_empty()
    }

    pub fn slots(&self, now: Millis) -> Vec<HeroSlotView> {
        self.slots
            .iter()
            .enumerate()
            .map(|(i, s)| HeroSlotView {
                src: s.src.clone(),
                alt: format!("Hero image {}", i + 1),
                priority: i == 0,
                target_opacity: self.target_opacity(i),
                opacity: self.opacity_at(i, now),
                blank: s.blank,
            })
            .collect()
    }
}

fn resting(visible: bool, crossfade: Crossfade) -> Tween<f64> {
    let o = if visible { 1.0 } else { 0.0 };
    Tween {
        from: o,
        to: o,
        duration: crossfade.duration,
        delay: Millis::ZERO,
        ease: crossfade.ease,
    }
}

#[cfg(test)]
#[path = "../tests/unit/hero/rotator.rs"]
mod tests;
