use scenegen::screenshots::renumber_screens;
use scenegen::Error;
use std::fs;
use std::path::Path;

fn touch(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).unwrap();
}

fn listing(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    names.sort();
    names
}

#[test]
fn renames_newest_first() {
    let dir = tempfile::tempdir().expect("tempdir");
    touch(dir.path(), "10_a.png", "ten");
    touch(dir.path(), "2_b.png", "two");
    touch(dir.path(), "7_c.png", "seven");
    touch(dir.path(), "notes.txt", "left alone");

    let plan = renumber_screens(dir.path()).unwrap();
    assert_eq!(plan.len(), 3);

    assert_eq!(listing(dir.path()), ["1.png", "2.png", "3.png", "notes.txt"]);
    assert_eq!(fs::read_to_string(dir.path().join("1.png")).unwrap(), "ten");
    assert_eq!(fs::read_to_string(dir.path().join("2.png")).unwrap(), "seven");
    assert_eq!(fs::read_to_string(dir.path().join("3.png")).unwrap(), "two");
}

#[test]
fn bad_prefix_touches_nothing() {
    let dir = tempfile::tempdir().expect("tempdir");
    touch(dir.path(), "3_a.png", "");
    touch(dir.path(), "screenshot.png", "");

    let err = renumber_screens(dir.path()).unwrap_err();
    assert!(matches!(err, Error::MissingIndexPrefix(_)));
    assert_eq!(listing(dir.path()), ["3_a.png", "screenshot.png"]);
}

#[test]
fn existing_target_is_not_overwritten() {
    let dir = tempfile::tempdir().expect("tempdir");
    touch(dir.path(), "4_a.png", "");
    touch(dir.path(), "9_b.png", "");
    fs::create_dir(dir.path().join("2.png")).unwrap();

    let err = renumber_screens(dir.path()).unwrap_err();
    assert!(matches!(err, Error::RenameCollision(p) if p.ends_with("2.png")));
    assert_eq!(listing(dir.path()), ["2.png", "4_a.png", "9_b.png"]);
}

#[test]
fn missing_directory_is_an_io_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = renumber_screens(&dir.path().join("screenshots")).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}
