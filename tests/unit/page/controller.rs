use super::*;
use crate::gallery::loader::{EMPTY_GALLERY_LABEL, GalleryView};

const BODY: &str = r#"[{"file":"x.jpg","type":"image"},{"file":"y.mp4","type":"video"}]"#;

fn mounted() -> PageController {
    let mut page = PageController::new(PageConfig::default()).unwrap();
    assert!(page.mount(Millis::ZERO).unwrap().is_some());
    page
}

#[test]
fn invalid_config_is_rejected() {
    let mut cfg = PageConfig::default();
    cfg.hero.images.clear();
    assert!(PageController::new(cfg).is_err());
}

#[test]
fn mount_issues_one_request_and_starts_rotation() {
    let mut page = PageController::new(PageConfig::default()).unwrap();
    assert_eq!(page.tick(Millis(6000)), 0);

    let req = page.mount(Millis::ZERO).unwrap().unwrap();
    assert_eq!(req.location, "/data/gallery.json");
    assert!(page.mount(Millis(1)).unwrap().is_none());
    assert!(page.is_mounted());

    assert_eq!(page.tick(Millis(6000)), 1);
    assert_eq!(page.hero().current_index(), 1);
}

#[test]
fn hero_intro_plays_on_mount_while_lower_sections_wait() {
    let page = mounted();
    let r = page.reveal();
    assert!(r.has_entered(r.find("hero-title").unwrap()));
    assert!(!r.has_entered(r.find("letter-card").unwrap()));
    assert!(!r.has_entered(r.find("closing-note").unwrap()));
}

#[test]
fn scrolling_reveals_sections_once() {
    let mut page = mounted();
    let fired = page.scroll(800.0, Millis(100));
    let card = page.reveal().find("letter-card").unwrap();
    assert!(fired.iter().any(|f| f.id == card));

    page.scroll(0.0, Millis(200));
    let again = page.scroll(800.0, Millis(300));
    assert!(again.iter().all(|f| f.id != card));
}

#[test]
fn gallery_shows_placeholder_until_settled() {
    let page = mounted();
    assert_eq!(
        page.snapshot(Millis(10)).gallery,
        GalleryView::Loading {
            label: EMPTY_GALLERY_LABEL.to_owned()
        }
    );
}

#[test]
fn loaded_tiles_are_registered_for_reveal() {
    let mut page = mounted();
    page.complete_manifest(Ok(FetchResponse::ok(BODY)), Millis(50));
    assert_eq!(page.gallery_tile_ids().len(), 2);
    let first = page.gallery_tile_ids()[0];
    assert!(!page.reveal().has_entered(first));

    page.scroll(2600.0, Millis(100));
    assert!(page.reveal().has_entered(first));
}

#[test]
fn failed_manifest_registers_no_tiles() {
    let mut page = mounted();
    let failed = FetchResponse {
        status: 500,
        body: vec![],
    };
    page.complete_manifest(Ok(failed), Millis(50));
    assert!(page.gallery_tile_ids().is_empty());
    let gallery = page.snapshot(Millis(60)).gallery;
    assert!(matches!(gallery, GalleryView::Empty { .. }));
}

#[test]
fn scroll_targets_resolve_or_no_op() {
    let page = mounted();
    let next = page.scroll_to_next().unwrap();
    assert_eq!(next.section, "letter-podcast");
    assert_eq!(next.top, 800.0);
    assert_eq!(next.behavior, ScrollBehavior::Smooth);
    assert!(page.scroll_to_section("does-not-exist").is_none());
}

#[test]
fn asset_failures_blank_only_their_slot() {
    let mut page = mounted();
    page.complete_manifest(Ok(FetchResponse::ok(BODY)), Millis(50));
    page.report_asset_failure("/assets/2.jpg").unwrap();
    page.report_asset_failure("/assets/y.mp4").unwrap();
    let unknown = page.report_asset_failure("/assets/unknown.png");
    assert!(matches!(unknown, Err(PageError::Asset(_))));

    let snap = page.snapshot(Millis(100));
    assert!(snap.hero[1].blank);
    assert!(!snap.hero[0].blank);
    let GalleryView::Grid { tiles } = snap.gallery else {
        panic!("expected grid");
    };
    assert!(!tiles[0].blank);
    assert!(tiles[1].blank);
}

#[test]
fn unmount_cancels_everything() {
    let mut page = mounted();
    page.tick(Millis(6000));
    page.unmount();

    assert_eq!(page.tick(Millis(60_000)), 0);
    assert_eq!(page.hero().current_index(), 1);
    assert_eq!(page.reveal().observed_count(), 0);
    assert_eq!(page.reveal().looping_count(), 0);
    assert!(page.scroll(2000.0, Millis(61_000)).is_empty());
    let late = page.complete_manifest(Ok(FetchResponse::ok(BODY)), Millis(62_000));
    assert!(late.is_empty());
    assert!(page.gallery_tile_ids().is_empty());
}

#[test]
fn asset_failures_after_unmount_are_ignored() {
    let mut page = mounted();
    page.complete_manifest(Ok(FetchResponse::ok(BODY)), Millis(50));
    page.unmount();

    page.report_asset_failure("/assets/1.jpg").unwrap();
    page.report_asset_failure("/assets/x.jpg").unwrap();
    page.report_asset_failure("/assets/unknown.png").unwrap();

    let snap = page.snapshot(Millis(100));
    assert!(snap.hero.iter().all(|slot| !slot.blank));
    let GalleryView::Grid { tiles } = snap.gallery else {
        panic!("expected grid");
    };
    assert!(tiles.iter().all(|tile| !tile.blank));
}

#[test]
fn snapshot_carries_links_for_new_browsing_context() {
    let page = mounted();
    let snap = page.snapshot(Millis::ZERO);
    assert_eq!(snap.links.len(), 3);
    for link in &snap.links {
        assert_eq!(link.target, "_blank");
        assert_eq!(link.rel, "noopener noreferrer");
    }
}
