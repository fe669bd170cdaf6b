use std::collections::BTreeSet;

use crate::{
    foundation::core::{ElementId, Millis, Rect, join_asset_path},
    foundation::error::{PageError, PageResult},
    gallery::{
        loader::{FetchResponse, ManifestLoadState, ManifestLoader, ManifestRequest},
        manifest::tile_enter,
        source::ManifestSource,
    },
    hero::HeroRotator,
    page::config::PageConfig,
    page::snapshot::{LinkView, PageSnapshot, ScrollBehavior, ScrollCommand},
    reveal::{
        intersect::viewport_at,
        scheduler::{RevealFired, RevealScheduler, RevealSpec, RevealTrigger},
    },
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Created,
    Mounted,
    Unmounted,
}

/// Composes hero rotation, the gallery manifest load and scroll reveals for one page.
///
/// The host drives it: `mount`, then any interleaving of `tick`, `scroll`,
/// `complete_manifest` and `report_asset_failure`, then `unmount`.
#[derive(Debug)]
pub struct PageController {
    config: PageConfig,
    hero: HeroRotator,
    loader: ManifestLoader,
    reveal: RevealScheduler,
    gallery_tiles: Vec<ElementId>,
    gallery_blank: BTreeSet<usize>,
    scroll_y: f64,
    phase: Phase,
}

impl PageController {
    pub fn new(config: PageConfig) -> PageResult<Self> {
        config.validate()?;
        let hero = HeroRotator::new(
            config.hero.images.clone(),
            config.hero.interval,
            config.hero.crossfade,
        )?;
        let loader = ManifestLoader::new(config.manifest.clone());
        Ok(Self {
            config,
            hero,
            loader,
            reveal: RevealScheduler::new(),
            gallery_tiles: Vec::new(),
            gallery_blank: BTreeSet::new(),
            scroll_y: 0.0,
            phase: Phase::Created,
        })
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    pub fn hero(&self) -> &HeroRotator {
        &self.hero
    }

    pub fn loader(&self) -> &ManifestLoader {
        &self.loader
    }

    pub fn reveal(&self) -> &RevealScheduler {
        &self.reveal
    }

    pub fn is_mounted(&self) -> bool {
        self.phase == Phase::Mounted
    }

    /// Start the hero timer, register animated elements and issue the manifest request.
    ///
    /// Returns the request the host must fulfil and hand back through
    /// [`complete_manifest`](Self::complete_manifest). Mounting twice returns `None`.
    #[tracing::instrument(skip_all, fields(now = now.0))]
    pub fn mount(&mut self, now: Millis) -> PageResult<Option<ManifestRequest>> {
        if self.phase != Phase::Created {
            tracing::debug!("page already mounted");
            return Ok(None);
        }

        self.hero.mount(now);
        for section in &self.config.sections {
            for el in &section.elements {
                let id = self.reveal.register(
                    RevealSpec {
                        key: el.key.clone(),
                        bounds: el.bounds,
                        trigger: el.trigger,
                        enter: el.enter.clone(),
                    },
                    now,
                )?;
                if let Some(anim) = &el.looping {
                    self.reveal.attach_loop(id, anim.clone(), now)?;
                }
            }
        }
        self.phase = Phase::Mounted;
        self.reveal.scan(self.viewport(), now);

        tracing::info!(
            hero_images = self.hero.len(),
            elements = self.reveal.len(),
            manifest = %self.loader.location(),
            "page mounted"
        );
        Ok(self.loader.begin())
    }

    /// Apply the outcome of the manifest request.
    ///
    /// Failures are absorbed into an empty gallery. Loaded tiles are registered for reveal
    /// and any already on screen fire immediately.
    pub fn complete_manifest(
        &mut self,
        outcome: PageResult<FetchResponse>,
        now: Millis,
    ) -> Vec<RevealFired> {
        if !self.loader.settle(outcome) {
            return Vec::new();
        }
        let ManifestLoadState::Loaded(items) = self.loader.state() else {
            return Vec::new();
        };
        let count = items.len();
        let Some(section) = self.config.section(&self.config.gallery.section) else {
            return Vec::new();
        };
        let origin = (section.bounds.x0, section.bounds.y0);
        let layout = &self.config.gallery;

        for i in 0..count {
            let spec = RevealSpec {
                key: format!("gallery-tile-{i}"),
                bounds: layout.tile_bounds(origin, i),
                trigger: RevealTrigger::InView {
                    margin_px: layout.margin_px,
                },
                enter: tile_enter(i),
            };
            match self.reveal.register(spec, now) {
                Ok(id) => self.gallery_tiles.push(id),
                Err(e) => tracing::warn!(tile = i, error = %e, "gallery tile not registered"),
            }
        }
        self.reveal.scan(self.viewport(), now)
    }

    /// Fulfil `request` synchronously from `source` and apply the result.
    pub fn fetch_manifest(
        &mut self,
        request: &ManifestRequest,
        source: &dyn ManifestSource,
        now: Millis,
    ) -> Vec<RevealFired> {
        let outcome = source.fetch(request);
        self.complete_manifest(outcome, now)
    }

    /// Advance the virtual clock: deliver due hero timer firings. Returns the advance count.
    pub fn tick(&mut self, now: Millis) -> u64 {
        if self.phase != Phase::Mounted {
            return 0;
        }
        self.hero.poll(now)
    }

    /// Scroll position changed; fire reveals for newly visible elements.
    pub fn scroll(&mut self, scroll_y: f64, now: Millis) -> Vec<RevealFired> {
        if self.phase != Phase::Mounted {
            return Vec::new();
        }
        self.scroll_y = scroll_y.max(0.0);
        self.reveal.scan(self.viewport(), now)
    }

    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    pub fn viewport(&self) -> Rect {
        viewport_at(
            self.scroll_y,
            self.config.viewport.width,
            self.config.viewport.height,
        )
    }

    /// A hero image or gallery asset failed to load. Its slot stays blank.
    ///
    /// Reports for a source the page does not display are an [`PageError::Asset`] error.
    /// Reports after unmount are ignored.
    pub fn report_asset_failure(&mut self, src: &str) -> PageResult<()> {
        if self.phase != Phase::Mounted {
            return Ok(());
        }
        if self.hero.mark_failed_src(src) {
            return Ok(());
        }
        let root = &self.config.assets_root;
        let hit = self
            .loader
            .items()
            .iter()
            .position(|item| join_asset_path(root, &item.file) == src);
        let Some(i) = hit else {
            return Err(PageError::asset(format!(
                "'{src}' is not shown on this page"
            )));
        };
        if self.gallery_blank.insert(i) {
            tracing::warn!(src, tile = i, "failed to load gallery asset");
        }
        Ok(())
    }

    /// Smooth-scroll target for `section`, or `None` if no such section exists.
    pub fn scroll_to_section(&self, section: &str) -> Option<ScrollCommand> {
        let Some(s) = self.config.section(section) else {
            tracing::debug!(section, "scroll target not found");
            return None;
        };
        Some(ScrollCommand {
            section: s.id.clone(),
            top: s.bounds.y0,
            behavior: ScrollBehavior::Smooth,
        })
    }

    /// The hero's "scroll to next section" affordance.
    pub fn scroll_to_next(&self) -> Option<ScrollCommand> {
        self.scroll_to_section(&self.config.next_section)
    }

    pub fn gallery_tile_ids(&self) -> &[ElementId] {
        &self.gallery_tiles
    }

    pub fn snapshot(&self, now: Millis) -> PageSnapshot {
        PageSnapshot {
            at: now,
            hero_index: self.hero.current_index(),
            hero: self.hero.slots(now),
            gallery: self
                .loader
                .view(&self.config.assets_root, &self.gallery_blank),
            reveals: self.reveal.views(now),
            links: self.config.links.iter().map(LinkView::from).collect(),
        }
    }

    /// Cancel the hero timer, stop every observer and loop, and drop late fetch results.
    #[tracing::instrument(skip(self))]
    pub fn unmount(&mut self) {
        if self.phase == Phase::Unmounted {
            return;
        }
        self.hero.unmount();
        self.reveal.teardown();
        self.loader.detach();
        self.phase = Phase::Unmounted;
        tracing::info!("page unmounted");
    }
}

impl Drop for PageController {
    fn drop(&mut self) {
        if self.phase == Phase::Mounted {
            self.unmount();
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/controller.rs"]
mod tests;
