use crate::{
    animation::{
        ease::Ease,
        tween::{Property, Tween, VisualProps},
    },
    foundation::core::{Millis, join_asset_path},
    foundation::error::{PageError, PageResult},
};

/// Kind of media referenced by a manifest entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

/// One manifest entry. Manifest order is display order.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GalleryItem {
    /// Path relative to the static-assets root.
    pub file: String,
    #[serde(rename = "type")]
    pub kind: MediaKind,
}

impl GalleryItem {
    pub fn image(file: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            kind: MediaKind::Image,
        }
    }

    pub fn video(file: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            kind: MediaKind::Video,
        }
    }
}

/// Decode a manifest body: a JSON array of `{ "file": string, "type": "image" | "video" }`.
///
/// Unknown extra keys are ignored; anything else that deviates from the shape fails
/// the whole manifest.
pub fn parse_manifest(body: &[u8]) -> PageResult<Vec<GalleryItem>> {
    serde_json::from_slice(body)
        .map_err(|e| PageError::manifest(format!("malformed manifest: {e}")))
}

/// Playback flags for inline video tiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct VideoPlayback {
    pub autoplay: bool,
    pub muted: bool,
    pub looped: bool,
    pub inline: bool,
}

impl VideoPlayback {
    /// Silent, looping, inline autoplay.
    pub const AMBIENT: Self = Self {
        autoplay: true,
        muted: true,
        looped: true,
        inline: true,
    };
}

/// Render-ready gallery tile.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct GalleryTile {
    pub index: usize,
    pub src: String,
    pub alt: String,
    pub kind: MediaKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub playback: Option<VideoPlayback>,
    pub blank: bool,
}

impl GalleryTile {
    pub fn new(index: usize, item: &GalleryItem, assets_root: &str) -> Self {
        let (alt, playback) = match item.kind {
            MediaKind::Image => (format!("Gallery image {}", index + 1), None),
            MediaKind::Video => (
                format!("Gallery video {}", index + 1),
                Some(VideoPlayback::AMBIENT),
            ),
        };
        Self {
            index,
            src: join_asset_path(assets_root, &item.file),
            alt,
            kind: item.kind,
            playback,
            blank: false,
        }
    }
}

/// Delay between consecutive tile entrances.
pub const TILE_STAGGER: Millis = Millis(150);

/// Enter animation for the tile at `index`: rises, grows and straightens, alternating tilt.
pub fn tile_enter(index: usize) -> Tween {
    let tilt = if index % 2 == 0 { -5.0 } else { 5.0 };
    let from = VisualProps::hidden()
        .with(Property::Y, 50.0)
        .with(Property::Scale, 0.8)
        .with(Property::RotateDeg, tilt);
    let delay = Millis(TILE_STAGGER.0.saturating_mul(index as u64));
    Tween {
        from,
        to: VisualProps::IDENTITY,
        duration: Millis(600),
        delay,
        ease: Ease::SMOOTH,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/gallery/manifest.rs"]
mod tests;
