use std::fs;
use tempfile::TempDir;
use textvec::infrastructure::models::locator::ModelLocator;

fn locator(tmp: &TempDir) -> ModelLocator {
    ModelLocator::new(tmp.path().to_path_buf())
}

#[test]
fn locate_misses_when_nothing_is_cached() {
    let tmp = TempDir::new().unwrap();
    let loc = locator(&tmp);
    assert_eq!(loc.locate("BAAI/bge-m3"), None);
    // Determinism: same answer absent filesystem changes.
    assert_eq!(loc.locate("BAAI/bge-m3"), None);
}

#[test]
fn locate_finds_owner_name_layout() {
    let tmp = TempDir::new().unwrap();
    let expected = tmp.path().join("BAAI").join("bge-m3");
    fs::create_dir_all(&expected).unwrap();

    let loc = locator(&tmp);
    assert_eq!(loc.locate("BAAI/bge-m3"), Some(expected.clone()));
    assert_eq!(loc.locate("BAAI/bge-m3"), Some(expected));
}

#[test]
fn owner_name_layout_wins_over_flattened_layouts() {
    let tmp = TempDir::new().unwrap();
    let nested = tmp.path().join("BAAI").join("bge-m3");
    fs::create_dir_all(&nested).unwrap();
    fs::create_dir_all(tmp.path().join("BAAI-bge-m3")).unwrap();
    fs::create_dir_all(tmp.path().join("BAAI_bge-m3")).unwrap();

    assert_eq!(locator(&tmp).locate("BAAI/bge-m3"), Some(nested));
}

#[test]
fn dash_flattened_layout_is_found() {
    let tmp = TempDir::new().unwrap();
    let flattened = tmp.path().join("BAAI-bge-m3");
    fs::create_dir_all(&flattened).unwrap();

    assert_eq!(locator(&tmp).locate("BAAI/bge-m3"), Some(flattened));
}

#[test]
fn underscore_flattened_layout_is_found() {
    let tmp = TempDir::new().unwrap();
    let flattened = tmp.path().join("BAAI_bge-m3");
    fs::create_dir_all(&flattened).unwrap();

    assert_eq!(locator(&tmp).locate("BAAI/bge-m3"), Some(flattened));
}

#[test]
fn single_segment_id_is_used_verbatim() {
    let tmp = TempDir::new().unwrap();
    let expected = tmp.path().join("local-model");
    fs::create_dir_all(&expected).unwrap();

    assert_eq!(locator(&tmp).locate("local-model"), Some(expected));
}

#[test]
fn download_target_uses_owner_name_layout() {
    let tmp = TempDir::new().unwrap();
    let loc = locator(&tmp);
    assert_eq!(
        loc.download_target("BAAI/bge-m3"),
        tmp.path().join("BAAI").join("bge-m3")
    );
}
