use super::*;

#[test]
fn arithmetic_saturates() {
    assert_eq!(Millis(5).saturating_sub(Millis(9)), Millis::ZERO);
    assert_eq!(Millis(u64::MAX).saturating_add(Millis(1)), Millis(u64::MAX));
    assert_eq!(Millis(9).saturating_sub(Millis(5)), Millis(4));
}

#[test]
fn asset_paths_join_with_single_separator() {
    assert_eq!(join_asset_path("/assets/", "x.jpg"), "/assets/x.jpg");
    assert_eq!(join_asset_path("/assets", "/x.jpg"), "/assets/x.jpg");
    let nested = join_asset_path("/assets", "clips/y.mp4");
    assert_eq!(nested, "/assets/clips/y.mp4");
}
