use std::fs;
use std::path::Path;

use fsbrowse::{BrowseError, BrowserState, ExternalOpener, LocalFileSystem};

struct NoOpener;

impl ExternalOpener for NoOpener {
    fn open(&self, _path: &Path) -> fsbrowse::Result<()> {
        Ok(())
    }
}

/// `root/` with `a.txt` and `sub/`
fn fixture() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), b"hello").unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    dir
}

fn browser(dir: &Path) -> BrowserState<LocalFileSystem, NoOpener> {
    BrowserState::new(LocalFileSystem, NoOpener, dir).unwrap()
}

#[test]
fn delete_selected_file_on_disk() {
    let root = fixture();
    let mut browser = browser(root.path());

    browser.select(root.path().join("a.txt"));
    assert!(browser.request_delete());
    browser.confirm_delete().unwrap();

    assert!(browser.selection().is_none());
    assert!(!browser.delete_pending());
    assert!(!root.path().join("a.txt").exists());
    assert!(!browser.list_current_directory().unwrap().contains_name("a.txt"));
}

#[test]
fn rename_selected_file_on_disk() {
    let root = fixture();
    let mut browser = browser(root.path());

    browser.select("a.txt");
    browser.request_rename();
    browser.confirm_rename("b.txt").unwrap();

    assert_eq!(browser.selection(), Some(root.path().join("b.txt").as_path()));
    let listing = browser.list_current_directory().unwrap();
    assert!(listing.contains_name("b.txt"));
    assert!(!listing.contains_name("a.txt"));
    assert_eq!(fs::read(root.path().join("b.txt")).unwrap(), b"hello");
}

#[test]
fn navigate_into_and_back_up() {
    let root = fixture();
    let mut browser = browser(root.path());

    browser.select("a.txt");
    browser.navigate_into("sub").unwrap();
    assert_eq!(browser.current_dir(), root.path().join("sub"));
    assert!(browser.selection().is_none());

    assert!(matches!(
        browser.navigate_into("missing").unwrap_err(),
        BrowseError::NotFound(_)
    ));

    browser.navigate_up();
    assert_eq!(browser.current_dir(), root.path());
    assert!(matches!(
        browser.navigate_into("a.txt").unwrap_err(),
        BrowseError::NotADirectory(_)
    ));
}

#[test]
fn filtered_count_ignores_directories_named_like_files() {
    let root = tempfile::tempdir().unwrap();
    for name in ["one.txt", "two.txt", "three.txt", "readme.md"] {
        fs::write(root.path().join(name), b"").unwrap();
    }
    for name in ["dir.txt", "other.txt"] {
        fs::create_dir(root.path().join(name)).unwrap();
    }

    let browser = browser(root.path());
    assert_eq!(browser.filtered_count(".txt").unwrap(), 3);
    assert_eq!(browser.filtered_count("").unwrap(), 0);
}

#[test]
fn listing_a_removed_directory_fails_until_navigating_up() {
    let root = fixture();
    let mut browser = browser(root.path());
    browser.navigate_into("sub").unwrap();
    fs::remove_dir(root.path().join("sub")).unwrap();

    assert!(browser.list_current_directory().is_err());
    browser.navigate_up();
    assert!(browser.list_current_directory().is_ok());
}

#[test]
fn starts_in_working_directory() {
    let browser = BrowserState::in_working_dir(LocalFileSystem, NoOpener).unwrap();
    assert_eq!(browser.current_dir(), std::env::current_dir().unwrap());
    assert!(browser.selection().is_none());
}

#[test]
fn dotdot_cannot_point_the_browser_at_a_sibling() {
    let root = tempfile::tempdir().unwrap();
    fs::create_dir(root.path().join("b")).unwrap();
    fs::create_dir(root.path().join("c")).unwrap();
    let mut browser = browser(&root.path().join("b"));

    assert!(matches!(
        browser.navigate_into("../c").unwrap_err(),
        BrowseError::InvalidName(_)
    ));
    browser.select(root.path().join("c"));
    browser.request_delete();
    browser.confirm_delete().unwrap();

    assert!(root.path().join("b").is_dir());
    assert!(browser.list_current_directory().is_ok());
}
