//! Integration tests for loading icon sets from disk.

use std::fs;

use manganize_icons::icon_set::{IconCategory, IconName, IconSetLoader};
use tempfile::TempDir;

const STAR: &str = r##"<svg viewBox="0 0 16 16" style="width: 16px; height: 16px;"><path d="M8 1l2 5h5l-4 3 2 6-5-4-5 4 2-6-4-3h5z" fill="#000080"/></svg>"##;
const ALT_HOME: &str = r#"<svg viewBox="0 0 24 24"><rect width="24" height="24"/></svg>"#;
const ALT_CLOSE: &str = r#"<svg viewBox="0 0 24 24"><path d="M4 4l16 16"/></svg>"#;

fn write(dir: &std::path::Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).unwrap();
}

#[test]
fn test_load_set_from_directory() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "star.svg", &format!("\n  {STAR}\n"));
    write(temp.path(), "notes.txt", "not an icon");
    write(temp.path(), "broken.svg", "<div>not svg</div>");
    write(temp.path(), "bad name.svg", STAR);
    fs::create_dir(temp.path().join("nested.svg")).unwrap();

    let set = IconSetLoader::load_set("extra", temp.path(), IconCategory::Custom).unwrap();

    assert_eq!(set.id(), "extra");
    assert_eq!(set.category(), IconCategory::Custom);
    assert_eq!(set.names(), vec!["star"]);
    // Surrounding whitespace is trimmed
    assert_eq!(set.get("star").unwrap().markup(), STAR);
}

#[test]
fn test_discover_sets() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();

    fs::create_dir(first.path().join("brand")).unwrap();
    write(&first.path().join("brand"), "home.svg", ALT_HOME);

    fs::create_dir(second.path().join("brand")).unwrap();
    write(&second.path().join("brand"), "star.svg", STAR);
    fs::create_dir(second.path().join("extras")).unwrap();
    write(&second.path().join("extras"), "star.svg", STAR);

    let mut loader =
        IconSetLoader::with_paths(vec![first.path().to_path_buf(), second.path().to_path_buf()]);
    assert_eq!(loader.discover_sets().unwrap(), 2);

    assert!(loader.has_set("brand"));
    assert!(loader.has_set("extras"));
    // The first search path providing an ID wins
    let brand = loader.get_set("brand").unwrap();
    assert_eq!(brand.names(), vec!["home"]);

    let mut ids: Vec<_> = loader.set_ids().collect();
    ids.sort_unstable();
    assert_eq!(ids, vec!["brand", "extras"]);
    assert_eq!(loader.sets().count(), 2);
}

#[test]
fn test_discovered_sets_override_builtins() {
    let root = TempDir::new().unwrap();
    fs::create_dir(root.path().join("brand")).unwrap();
    write(&root.path().join("brand"), "home.svg", ALT_HOME);
    write(&root.path().join("brand"), "close.svg", ALT_CLOSE);

    let mut loader = IconSetLoader::with_paths(vec![root.path().to_path_buf()]);
    loader.discover_sets().unwrap();
    let resolver = loader.into_resolver();

    assert_eq!(resolver.resolve(IconName::HOME), ALT_HOME);
    assert_eq!(resolver.resolve(IconName::CLOSE), ALT_CLOSE);
    assert_eq!(resolver.provider(IconName::HOME).map(|s| s.id()), Some("brand"));

    // Names the override does not provide still come from the built-ins
    assert_eq!(
        resolver.resolve(IconName::SUCCESS),
        manganize_icons::resolve(IconName::SUCCESS)
    );
    assert_eq!(resolver.resolve("doesNotExist"), "");

    let close = resolver
        .shadowed()
        .into_iter()
        .find(|s| s.name == IconName::CLOSE)
        .unwrap();
    assert_eq!(close.winner, "brand");
    assert_eq!(close.shadowed, vec!["status".to_string(), "toolbar".to_string()]);
}

#[test]
fn test_rediscover_clears_previous_sets() {
    let root = TempDir::new().unwrap();
    fs::create_dir(root.path().join("old")).unwrap();

    let mut loader = IconSetLoader::with_paths(vec![root.path().to_path_buf()]);
    assert_eq!(loader.discover_sets().unwrap(), 1);

    fs::remove_dir(root.path().join("old")).unwrap();
    assert_eq!(loader.discover_sets().unwrap(), 0);
    assert!(!loader.has_set("old"));
}

#[test]
fn test_unreadable_icon_is_skipped() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "star.svg", STAR);
    fs::write(temp.path().join("latin1.svg"), b"caf\xe9").unwrap();

    let set = IconSetLoader::load_set("extra", temp.path(), IconCategory::Custom).unwrap();
    assert_eq!(set.names(), vec!["star"]);
}

#[test]
fn test_bad_file_does_not_stop_discovery() {
    let root = TempDir::new().unwrap();
    fs::create_dir(root.path().join("a")).unwrap();
    write(&root.path().join("a"), "star.svg", STAR);
    fs::create_dir(root.path().join("b")).unwrap();
    write(&root.path().join("b"), "home.svg", ALT_HOME);
    fs::write(root.path().join("b").join("latin1.svg"), b"caf\xe9").unwrap();

    let mut loader = IconSetLoader::with_paths(vec![root.path().to_path_buf()]);
    assert_eq!(loader.discover_sets().unwrap(), 2);
    assert_eq!(loader.get_set("a").unwrap().names(), vec!["star"]);
    assert_eq!(loader.get_set("b").unwrap().names(), vec!["home"]);
}

#[test]
fn test_svg_extension_is_case_insensitive() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "Star.SVG", STAR);
    write(temp.path(), "home.Svg", ALT_HOME);

    let set = IconSetLoader::load_set("extra", temp.path(), IconCategory::Custom).unwrap();
    assert_eq!(set.names(), vec!["Star", "home"]);
}
