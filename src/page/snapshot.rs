use crate::{
    foundation::core::Millis, gallery::loader::GalleryView, hero::HeroSlotView,
    page::config::OutboundLink, reveal::scheduler::RevealView,
};

/// Everything a renderer needs to draw the page at one instant.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PageSnapshot {
    pub at: Millis,
    pub hero_index: usize,
    pub hero: Vec<HeroSlotView>,
    pub gallery: GalleryView,
    pub reveals: Vec<RevealView>,
    pub links: Vec<LinkView>,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct LinkView {
    pub key: String,
    pub label: String,
    pub href: String,
    pub target: &'static str,
    pub rel: &'static str,
}

impl From<&OutboundLink> for LinkView {
    fn from(link: &OutboundLink) -> Self {
        Self {
            key: link.key.clone(),
            label: link.label.clone(),
            href: link.href.clone(),
            target: OutboundLink::TARGET,
            rel: OutboundLink::REL,
        }
    }
}

/// How the host should scroll.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrollBehavior {
    Smooth,
}

/// Instruction to bring a section into view.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ScrollCommand {
    pub section: String,
    pub top: f64,
    pub behavior: ScrollBehavior,
}
