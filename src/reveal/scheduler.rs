//! One-shot enter animations gated on viewport visibility, plus decorative loops.
//!
//! Records live in an append-only arena indexed by [`ElementId`]. An id is never reused,
//! and a record's `entered` flag only ever goes from `false` to `true`, so duplicate or
//! late intersection callbacks are harmless.

use crate::{
    animation::{
        looping::{LoopAnimation, derived_phase},
        tween::{Tween, VisualProps},
    },
    foundation::core::{ElementId, Millis, Rect},
    foundation::error::{PageError, PageResult},
    reveal::intersect::intersects,
};

/// What starts an element's enter animation.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RevealTrigger {
    /// Plays once as soon as the element is registered.
    Mount,
    /// Plays once the first time the element crosses into the viewport.
    InView {
        #[serde(default)]
        margin_px: f64,
    },
}

impl Default for RevealTrigger {
    fn default() -> Self {
        Self::InView { margin_px: 0.0 }
    }
}

/// Registration data for one animated element.
#[derive(Clone, Debug, PartialEq)]
pub struct RevealSpec {
    pub key: String,
    pub bounds: Rect,
    pub trigger: RevealTrigger,
    pub enter: Tween,
}

/// Emitted the one time an element's enter animation starts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RevealFired {
    pub id: ElementId,
    pub at: Millis,
}

#[derive(Clone, Debug)]
struct AttachedLoop {
    anim: LoopAnimation,
    attached_at: Millis,
    delay: Millis,
}

#[derive(Clone, Debug)]
struct RevealRecord {
    spec: RevealSpec,
    entered_at: Option<Millis>,
    live: bool,
    looping: Option<AttachedLoop>,
}

/// Render-ready reveal state of one element.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct RevealView {
    pub id: ElementId,
    pub key: String,
    pub entered: bool,
    /// The enter tween has run to completion.
    pub settled: bool,
    pub props: VisualProps,
}

#[derive(Clone, Debug, Default)]
pub struct RevealScheduler {
    records: Vec<RevealRecord>,
    torn_down: bool,
}

impl RevealScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an element and return its id.
    ///
    /// Mount-triggered elements enter immediately at `now`. Registering after
    /// [`teardown`](Self::teardown) yields an id whose record is already inert.
    pub fn register(&mut self, spec: RevealSpec, now: Millis) -> PageResult<ElementId> {
        spec.enter.validate()?;
        let Ok(index) = u32::try_from(self.records.len()) else {
            return Err(PageError::validation(
                "too many elements registered for reveal",
            ));
        };
        let id = ElementId(index);

        let live = !self.torn_down;
        if !live {
            tracing::debug!(key = %spec.key, "reveal registration after teardown");
        }
        let entered_at = match spec.trigger {
            RevealTrigger::Mount if live => Some(now),
            _ => None,
        };
        self.records.push(RevealRecord {
            spec,
            entered_at,
            live,
            looping: None,
        });
        Ok(id)
    }

    /// Attach a decorative loop that runs from `now` until the element is removed.
    ///
    /// Without an explicit delay the loop gets a per-element phase offset.
    pub fn attach_loop(
        &mut self,
        id: ElementId,
        anim: LoopAnimation,
        now: Millis,
    ) -> PageResult<()> {
        anim.validate()?;
        let record = self
            .records
            .get_mut(id.index())
            .ok_or_else(|| PageError::validation(format!("unknown element {id:?}")))?;
        if !record.live {
            tracing::debug!(key = %record.spec.key, "loop attach on removed element ignored");
            return Ok(());
        }
        let delay = match anim.delay {
            Some(delay) => delay,
            None => derived_phase(id, anim.period()),
        };
        record.looping = Some(AttachedLoop {
            anim,
            attached_at: now,
            delay,
        });
        Ok(())
    }

    /// Intersection callback for one element.
    ///
    /// Fires the enter animation on the first visible crossing only.
    pub fn observe(
        &mut self,
        id: ElementId,
        is_intersecting: bool,
        now: Millis,
    ) -> Option<RevealFired> {
        let record = self.records.get_mut(id.index())?;
        if !record.live || !is_intersecting || record.entered_at.is_some() {
            return None;
        }
        if !matches!(record.spec.trigger, RevealTrigger::InView { .. }) {
            return None;
        }
        record.entered_at = Some(now);
        tracing::trace!(key = %record.spec.key, at = now.0, "reveal fired");
        Some(RevealFired { id, at: now })
    }

    /// Test every still-observed element against `viewport` and fire the ones now visible.
    pub fn scan(&mut self, viewport: Rect, now: Millis) -> Vec<RevealFired> {
        let mut fired = Vec::new();
        for i in 0..self.records.len() {
            let record = &self.records[i];
            let RevealTrigger::InView { margin_px } = record.spec.trigger else {
                continue;
            };
            let visible = intersects(record.spec.bounds, viewport, margin_px);
            if let Some(f) = self.observe(ElementId(i as u32), visible, now) {
                fired.push(f);
            }
        }
        fired
    }

    /// Stop observing `id` and drop its loop.
    pub fn remove(&mut self, id: ElementId) {
        if let Some(record) = self.records.get_mut(id.index()) {
            record.live = false;
            record.looping = None;
        }
    }

    /// Remove every element and refuse new observation.
    pub fn teardown(&mut self) {
        for record in &mut self.records {
            record.live = false;
            record.looping = None;
        }
        self.torn_down = true;
    }

    pub fn has_entered(&self, id: ElementId) -> bool {
        self.records
            .get(id.index())
            .is_some_and(|r| r.entered_at.is_some())
    }

    pub fn is_live(&self, id: ElementId) -> bool {
        self.records.get(id.index()).is_some_and(|r| r.live)
    }

    /// Live elements still waiting for their first visible crossing.
    pub fn observed_count(&self) -> usize {
        self.records
            .iter()
            .filter(|r| {
                r.live
                    && r.entered_at.is_none()
                    && matches!(r.spec.trigger, RevealTrigger::InView { .. })
            })
            .count()
    }

    /// Live elements with a running loop.
    pub fn looping_count(&self) -> usize {
        self.records
            .iter()
            .filter(|r| r.live && r.looping.is_some())
            .count()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up a registered element by key.
    pub fn find(&self, key: &str) -> Option<ElementId> {
        self.records
            .iter()
            .position(|r| r.spec.key == key)
            .map(|i| ElementId(i as u32))
    }

    /// Loop phase delay in effect for `id`, if it has a loop.
    pub fn loop_delay(&self, id: ElementId) -> Option<Millis> {
        self.records
            .get(id.index())
            .and_then(|r| r.looping.as_ref())
            .map(|l| l.delay)
    }

    /// Sampled visual state of a live element: its enter pose with any loop layered on top.
    pub fn props_at(&self, id: ElementId, now: Millis) -> Option<VisualProps> {
        let record = self.records.get(id.index()).filter(|r| r.live)?;
        let mut props = match record.entered_at {
            Some(at) => record.spec.enter.sample(now.saturating_sub(at)),
            None => record.spec.enter.from,
        };
        if let Some(l) = &record.looping {
            l.anim
                .apply(now.saturating_sub(l.attached_at), l.delay, &mut props);
        }
        Some(props)
    }

    /// Views for every live element, in registration order.
    pub fn views(&self, now: Millis) -> Vec<RevealView> {
        (0..self.records.len())
            .map(|i| ElementId(i as u32))
            .filter_map(|id| {
                let props = self.props_at(id, now)?;
                let record = &self.records[id.index()];
                let settled = record
                    .entered_at
                    .is_some_and(|at| record.spec.enter.is_finished(now.saturating_sub(at)));
                Some(RevealView {
                    id,
                    key: record.spec.key.clone(),
                    entered: record.entered_at.is_some(),
                    settled,
                    props,
                })
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/scheduler.rs"]
mod tests;
