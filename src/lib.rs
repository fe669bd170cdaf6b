//! Longscroll drives the stateful parts of a single long-scroll presentational page.
//!
//! Three independent activities are composed by [`PageController`]:
//!
//! - [`HeroRotator`] cycles hero images on a recurring timer with per-slot crossfades
//! - [`ManifestLoader`] fetches the gallery manifest once and degrades to an empty gallery
//! - [`RevealScheduler`] fires one-shot enter animations on first visibility and runs
//!   decorative loops
//!
//! Everything runs on a virtual millisecond clock supplied by the host, so a page's state is
//! a pure function of the inputs it has been fed.
#![forbid(unsafe_code)]

pub mod animation;
pub mod foundation;
pub mod gallery;
pub mod hero;
pub mod page;
pub mod reveal;

pub use crate::animation::ease::Ease;
pub use crate::animation::looping::{LoopAnimation, LoopTrack};
pub use crate::animation::tween::{Lerp, Property, Tween, VisualProps};
pub use crate::foundation::core::{ElementId, Millis, Point, Rect, Vec2};
pub use crate::foundation::error::{PageError, PageResult};
pub use crate::foundation::timer::IntervalTimer;
pub use crate::gallery::loader::{
    EMPTY_GALLERY_LABEL, FetchResponse, GalleryView, ManifestLoadState, ManifestLoader,
    ManifestRequest,
};
pub use crate::gallery::manifest::{GalleryItem, GalleryTile, MediaKind, parse_manifest};
pub use crate::gallery::source::{DirSource, ManifestSource};
pub use crate::hero::{Crossfade, HeroRotator, HeroSlotView};
pub use crate::page::config::{
    ElementConfig, GalleryLayout, HeroConfig, OutboundLink, PageConfig, SectionConfig,
    ViewportSize,
};
pub use crate::page::controller::PageController;
pub use crate::page::snapshot::{LinkView, PageSnapshot, ScrollBehavior, ScrollCommand};
pub use crate::reveal::intersect::{intersects, viewport_at};
pub use crate::reveal::scheduler::{
    RevealFired, RevealScheduler, RevealSpec, RevealTrigger, RevealView,
};
