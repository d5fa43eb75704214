use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

#[allow(deprecated)]
fn vapps() -> Command {
    Command::cargo_bin("vapps").expect("binary built")
}

#[test]
fn routes_lists_every_page() {
    let dir = TempDir::new().expect("tempdir");

    vapps()
        .current_dir(dir.path())
        .arg("routes")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("/\n"))
        .stdout(predicate::str::contains("/apps/ai-poster/privacy\n"))
        .stdout(predicate::str::contains("/tr/apps/qr-sessions\n"));
}

#[test]
fn routes_pairs_are_locale_major() {
    let dir = TempDir::new().expect("tempdir");

    vapps()
        .current_dir(dir.path())
        .args(["routes", "--pairs"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("en\tviona\n"))
        .stdout(predicate::str::ends_with("tr\tai-poster\n"));
}

#[test]
fn export_writes_pages_and_sitemap() {
    let dir = TempDir::new().expect("tempdir");
    let out = dir.path().join("dist");

    vapps()
        .current_dir(dir.path())
        .args(["export", "--lastmod", "2025-01-27", "--year", "2025", "--out"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 14 pages, 7 redirects"));

    let home = std::fs::read_to_string(out.join("tr/index.html")).expect("tr home");
    assert!(home.contains("<html lang=\"tr\">"));
    assert!(home.contains("© 2025"));

    let stub = std::fs::read_to_string(out.join("en/index.html")).expect("redirect stub");
    assert!(stub.contains("url=/"));

    let sitemap = std::fs::read_to_string(out.join("sitemap.xml")).expect("sitemap");
    assert!(sitemap.contains("<lastmod>2025-01-27</lastmod>"));
    assert!(out.join("robots.txt").is_file());
}

#[test]
fn explicit_config_changes_default_locale() {
    let dir = TempDir::new().expect("tempdir");
    let config = dir.path().join("site.toml");
    std::fs::write(&config, "[site]\ndefault_locale = \"tr\"\n").expect("write config");

    vapps()
        .current_dir(dir.path())
        .arg("--config")
        .arg(&config)
        .arg("routes")
        .assert()
        .success()
        .stdout(predicate::str::contains("/en/apps/viona\n"));
}

#[test]
fn invalid_lastmod_is_rejected() {
    vapps().args(["export", "--lastmod", "yesterday"]).assert().failure();
}
