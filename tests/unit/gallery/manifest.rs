use super::*;

#[test]
fn parses_items_in_order() {
    let body = br#"[{"file":"x.jpg","type":"image"},{"file":"y.mp4","type":"video"}]"#;
    let items = parse_manifest(body).unwrap();
    let expected = vec![GalleryItem::image("x.jpg"), GalleryItem::video("y.mp4")];
    assert_eq!(items, expected);
}

#[test]
fn extra_keys_are_ignored() {
    let body = br#"[{"file":"x.jpg","type":"image","caption":"hi"}]"#;
    assert_eq!(parse_manifest(body).unwrap().len(), 1);
}

#[test]
fn shape_deviations_fail() {
    for body in [
        &br#"{"file":"x.jpg","type":"image"}"#[..],
        br#"[{"file":"x.jpg","type":"audio"}]"#,
        br#"[{"type":"image"}]"#,
        br#"[{"file":3,"type":"image"}]"#,
        br#"<html>not found</html>"#,
        b"",
    ] {
        let err = parse_manifest(body).unwrap_err();
        assert!(matches!(err, PageError::Manifest(_)), "{err}");
    }
}

#[test]
fn empty_array_is_a_valid_manifest() {
    assert!(parse_manifest(b"[]").unwrap().is_empty());
}

#[test]
fn tiles_resolve_under_assets_root() {
    let img = GalleryTile::new(0, &GalleryItem::image("x.jpg"), "/assets/");
    assert_eq!(img.src, "/assets/x.jpg");
    assert_eq!(img.alt, "Gallery image 1");
    assert!(img.playback.is_none());

    let vid = GalleryTile::new(1, &GalleryItem::video("y.mp4"), "/assets");
    assert_eq!(vid.src, "/assets/y.mp4");
    assert_eq!(vid.playback, Some(VideoPlayback::AMBIENT));
}

#[test]
fn tile_entrances_stagger_and_alternate_tilt() {
    let a = tile_enter(0);
    let b = tile_enter(1);
    let c = tile_enter(4);
    assert_eq!(a.delay, Millis::ZERO);
    assert_eq!(b.delay, Millis(150));
    assert_eq!(c.delay, Millis(600));
    assert_eq!(a.from.rotate_deg, -5.0);
    assert_eq!(b.from.rotate_deg, 5.0);
    assert_eq!(a.to, VisualProps::IDENTITY);
}
