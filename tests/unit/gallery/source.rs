use super::*;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = PathBuf::from("target").join("unit_source").join(name);
    std::fs::create_dir_all(dir.join("data")).unwrap();
    dir
}

fn request(location: &str) -> ManifestRequest {
    ManifestRequest {
        location: location.to_owned(),
    }
}

#[test]
fn locations_normalize_to_relative_paths() {
    for raw in [
        "/data/gallery.json",
        "./data//gallery.json",
        "/data/gallery.json?v=2",
    ] {
        assert_eq!(normalize_location(raw).unwrap(), "data/gallery.json");
    }
    assert!(normalize_location("/../etc/passwd").is_err());
    assert!(normalize_location("/").is_err());
}

#[test]
fn dir_source_reads_existing_file() {
    let dir = scratch_dir("existing");
    std::fs::write(dir.join("data/gallery.json"), "[]").unwrap();
    let source = DirSource::new(&dir);
    let resp = source.fetch(&request("/data/gallery.json")).unwrap();
    assert!(resp.is_success());
    assert_eq!(resp.body, b"[]");
}

#[test]
fn dir_source_answers_404_for_missing_file() {
    let dir = scratch_dir("missing");
    let source = DirSource::new(&dir);
    let resp = source.fetch(&request("/data/nope.json")).unwrap();
    assert_eq!(resp.status, 404);
    assert!(!resp.is_success());
}

#[test]
fn closures_are_sources() {
    let src = |_: &ManifestRequest| Ok::<_, PageError>(FetchResponse::ok("[]"));
    assert_eq!(src.fetch(&request("/x.json")).unwrap().status, 200);
}
