use std::collections::BTreeSet;
use std::path::Path;

use crate::{
    animation::{looping::LoopAnimation, tween::Tween},
    foundation::core::{Millis, Rect},
    foundation::error::{PageError, PageResult},
    hero::{Crossfade, DEFAULT_INTERVAL},
    reveal::scheduler::RevealTrigger,
};

/// Everything needed to build one page controller.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub hero: HeroConfig,
    /// Site-absolute location of the gallery manifest.
    pub manifest: String,
    /// Static-assets root that manifest file names are resolved against.
    pub assets_root: String,
    pub viewport: ViewportSize,
    pub sections: Vec<SectionConfig>,
    pub gallery: GalleryLayout,
    /// Section the "scroll to next" affordance brings into view.
    pub next_section: String,
    pub links: Vec<OutboundLink>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct HeroConfig {
    pub images: Vec<String>,
    pub interval: Millis,
    pub crossfade: Crossfade,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            images: vec![
                "/assets/1.jpg".to_owned(),
                "/assets/2.jpg".to_owned(),
                "/assets/3.jpg".to_owned(),
            ],
            interval: DEFAULT_INTERVAL,
            crossfade: Crossfade::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ViewportSize {
    pub width: f64,
    pub height: f64,
}

impl Default for ViewportSize {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 800.0,
        }
    }
}

/// A page section and the animated elements inside it. Bounds are in page coordinates.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SectionConfig {
    pub id: String,
    pub bounds: Rect,
    #[serde(default)]
    pub elements: Vec<ElementConfig>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ElementConfig {
    pub key: String,
    pub bounds: Rect,
    #[serde(default)]
    pub trigger: RevealTrigger,
    pub enter: Tween,
    #[serde(default, rename = "loop", skip_serializing_if = "Option::is_none")]
    pub looping: Option<LoopAnimation>,
}

/// Grid placement of gallery tiles inside the gallery section.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GalleryLayout {
    pub section: String,
    pub columns: u32,
    pub tile_size: f64,
    pub gap: f64,
    /// Distance from the section top to the first row.
    pub offset_top: f64,
    pub margin_px: f64,
}

impl Default for GalleryLayout {
    fn default() -> Self {
        Self {
            section: "gallery".to_owned(),
            columns: 3,
            tile_size: 400.0,
            gap: 24.0,
            offset_top: 200.0,
            margin_px: -50.0,
        }
    }
}

impl GalleryLayout {
    /// Page-space bounds of tile `index` in a section whose top-left is `origin`.
    pub fn tile_bounds(&self, origin: (f64, f64), index: usize) -> Rect {
        let cols = self.columns.max(1) as usize;
        let (row, col) = (index / cols, index % cols);
        let step = self.tile_size + self.gap;
        let x0 = origin.0 + col as f64 * step;
        let y0 = origin.1 + self.offset_top + row as f64 * step;
        Rect::new(x0, y0, x0 + self.tile_size, y0 + self.tile_size)
    }
}

/// External link opened in a new browsing context.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct OutboundLink {
    pub key: String,
    pub label: String,
    pub href: String,
}

impl OutboundLink {
    pub const TARGET: &'static str = "_blank";
    pub const REL: &'static str = "noopener noreferrer";
}

impl PageConfig {
    pub fn from_json_str(s: &str) -> PageResult<Self> {
        serde_json::from_str(s)
            .map_err(|e| PageError::serde(format!("page config: {e}")))
    }

    pub fn from_path(path: &Path) -> PageResult<Self> {
        let s = std::fs::read_to_string(path).map_err(|e| {
            PageError::Other(anyhow::Error::new(e).context(format!(
                "read page config '{}'",
                path.display()
            )))
        })?;
        Self::from_json_str(&s)
    }

    pub fn section(&self, id: &str) -> Option<&SectionConfig> {
        self.sections.iter().find(|s| s.id == id)
    }

    pub fn validate(&self) -> PageResult<()> {
        if self.hero.images.is_empty() {
            return Err(PageError::validation("hero.images must be non-empty"));
        }
        if self.hero.interval.is_zero() {
            return Err(PageError::validation("hero.interval must be > 0"));
        }
        if !self.hero.crossfade.ease.is_valid() {
            return Err(PageError::validation(
                "hero.crossfade.ease is not a valid curve",
            ));
        }
        if self.manifest.trim().is_empty() {
            return Err(PageError::validation("manifest location is empty"));
        }
        if !(self.viewport.width > 0.0 && self.viewport.height > 0.0) {
            return Err(PageError::validation("viewport size must be positive"));
        }

        let mut ids = BTreeSet::new();
        let mut keys = BTreeSet::new();
        for section in &self.sections {
            if !ids.insert(section.id.as_str()) {
                return Err(PageError::validation(format!(
                    "duplicate section id '{}'",
                    section.id
                )));
            }
            check_bounds(&section.bounds, &section.id)?;
            for el in &section.elements {
                if !keys.insert(el.key.as_str()) {
                    return Err(PageError::validation(format!(
                        "duplicate element key '{}'",
                        el.key
                    )));
                }
                check_bounds(&el.bounds, &el.key)?;
                if let RevealTrigger::InView { margin_px } = el.trigger {
                    if !margin_px.is_finite() {
                        return Err(PageError::validation(format!(
                            "element '{}' margin must be finite",
                            el.key
                        )));
                    }
                }
                el.enter.validate()?;
                if let Some(l) = &el.looping {
                    l.validate()?;
                }
            }
        }

        for (what, id) in [
            ("next_section", &self.next_section),
            ("gallery.section", &self.gallery.section),
        ] {
            if !ids.contains(id.as_str()) {
                return Err(PageError::validation(format!(
                    "{what} refers to unknown section '{id}'"
                )));
            }
        }
        if self.gallery.columns == 0 {
            return Err(PageError::validation("gallery.columns must be > 0"));
        }
        let grid = &self.gallery;
        if !(grid.tile_size > 0.0 && grid.gap >= 0.0 && grid.margin_px.is_finite()) {
            return Err(PageError::validation(
                "gallery layout values are out of range",
            ));
        }
        for link in &self.links {
            if link.href.trim().is_empty() {
                return Err(PageError::validation(format!(
                    "link '{}' has an empty href",
                    link.key
                )));
            }
        }
        Ok(())
    }
}

fn check_bounds(r: &Rect, what: &str) -> PageResult<()> {
    let finite = [r.x0, r.y0, r.x1, r.y1].iter().all(|v| v.is_finite());
    if !finite || r.x0 > r.x1 || r.y0 > r.y1 {
        return Err(PageError::validation(format!(
            "'{what}' bounds must be finite with x0 <= x1 and y0 <= y1"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/page/config.rs"]
mod tests;
