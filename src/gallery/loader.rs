use std::collections::BTreeSet;

use crate::{
    foundation::error::{PageError, PageResult},
    gallery::manifest::{GalleryItem, GalleryTile, parse_manifest},
};

/// Label shown while the manifest is in flight and whenever the gallery ends up empty.
pub const EMPTY_GALLERY_LABEL: &str = "Loading gallery...";

/// A pending manifest fetch handed to the host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ManifestRequest {
    pub location: String,
}

/// Raw result of a completed fetch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl FetchResponse {
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Lifecycle of the one manifest load a page performs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ManifestLoadState {
    Unloaded,
    Loading,
    Loaded(Vec<GalleryItem>),
    /// Rendered exactly like `Loaded(vec![])`; the reason is kept for diagnostics.
    Failed { reason: String },
}

impl ManifestLoadState {
    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Loaded(_) | Self::Failed { .. })
    }
}

/// What the gallery section should show.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum GalleryView {
    Loading { label: String },
    Grid { tiles: Vec<GalleryTile> },
    Empty { label: String },
}

/// Fetches the gallery manifest at most once and absorbs every failure into an empty list.
#[derive(Clone, Debug)]
pub struct ManifestLoader {
    location: String,
    state: ManifestLoadState,
    detached: bool,
}

impl ManifestLoader {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            state: ManifestLoadState::Unloaded,
            detached: false,
        }
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn state(&self) -> &ManifestLoadState {
        &self.state
    }

    /// Issue the single request. Returns `None` if a load was already started or the
    /// loader has been detached.
    pub fn begin(&mut self) -> Option<ManifestRequest> {
        if self.detached || self.state != ManifestLoadState::Unloaded {
            tracing::debug!(location = %self.location, "manifest load already issued");
            return None;
        }
        self.state = ManifestLoadState::Loading;
        Some(ManifestRequest {
            location: self.location.clone(),
        })
    }

    /// Publish the outcome of the request. Returns `true` when the outcome was applied.
    ///
    /// Only the first completion after [`begin`](Self::begin) counts; completions that
    /// arrive after [`detach`](Self::detach) are dropped.
    pub fn settle(&mut self, outcome: PageResult<FetchResponse>) -> bool {
        if self.detached {
            tracing::debug!(location = %self.location, "late manifest completion dropped");
            return false;
        }
        if self.state != ManifestLoadState::Loading {
            tracing::debug!(location = %self.location, "unexpected manifest completion ignored");
            return false;
        }

        self.state = match decode(outcome) {
            Ok(items) => {
                tracing::debug!(
                    location = %self.location,
                    items = items.len(),
                    "manifest loaded"
                );
                ManifestLoadState::Loaded(items)
            }
            Err(e) => {
                tracing::warn!(
                    location = %self.location,
                    error = %e,
                    "manifest load failed; showing empty gallery"
                );
                ManifestLoadState::Failed {
                    reason: e.to_string(),
                }
            }
        };
        true
    }

    /// Stop accepting completions. The current state is kept.
    pub fn detach(&mut self) {
        self.detached = true;
    }

    /// Loaded items; empty while loading and after a failure.
    pub fn items(&self) -> &[GalleryItem] {
        match &self.state {
            ManifestLoadState::Loaded(items) => items,
            _ => &[],
        }
    }

    pub fn view(&self, assets_root: &str, blank: &BTreeSet<usize>) -> GalleryView {
        match &self.state {
            ManifestLoadState::Unloaded | ManifestLoadState::Loading => GalleryView::Loading {
                label: EMPTY_GALLERY_LABEL.to_owned(),
            },
            ManifestLoadState::Loaded(items) if !items.is_empty() => GalleryView::Grid {
                tiles: items
                    .iter()
                    .enumerate()
                    .map(|(i, item)| GalleryTile {
                        blank: blank.contains(&i),
                        ..GalleryTile::new(i, item, assets_root)
                    })
                    .collect(),
            },
            ManifestLoadState::Loaded(_) | ManifestLoadState::Failed { .. } => GalleryView::Empty {
                label: EMPTY_GALLERY_LABEL.to_owned(),
            },
        }
    }
}

fn decode(outcome: PageResult<FetchResponse>) -> PageResult<Vec<GalleryItem>> {
    let resp = outcome?;
    if !resp.is_success() {
        return Err(PageError::manifest(format!(
            "unexpected status {}",
            resp.status
        )));
    }
    parse_manifest(&resp.body)
}

#[cfg(test)]
#[path = "../../tests/unit/gallery/loader.rs"]
mod tests;
