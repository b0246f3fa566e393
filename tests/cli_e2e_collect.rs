//! End-to-end tests for the `collect` command.
//!
//! These tests invoke the actual CLI binary and check the rewritten
//! documents and staged images from a user's perspective.

mod common;
use common::prelude::*;

#[test]
#[cfg_attr(not(feature = "integration-tests"), ignore)]
fn test_collect_stages_outside_images() {
    let fixture = TestFixture::new()
        .with_binary_file("assets/logo.png", b"logo")
        .with_doc("index.md", "# API\n\n![Logo](../assets/logo.png)\n");

    fixture
        .command()
        .arg("collect")
        .arg("--working-dir")
        .arg(fixture.src())
        .arg("--staging-dir")
        .arg("_img")
        .arg("--counter-names")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 images collected"));

    fixture
        .child("src/_img/logo.png")
        .assert(predicate::path::exists());
    fixture
        .child("src/index.md")
        .assert("# API\n\n![Logo](_img/logo.png)\n");
    fixture
        .child("assets/logo.png")
        .assert(predicate::path::exists());
}

#[test]
#[cfg_attr(not(feature = "integration-tests"), ignore)]
fn test_collect_defaults_to_current_directory() {
    let fixture = TestFixture::new()
        .with_binary_file("shared.png", b"png")
        .with_doc("guide/usage.md", "![Shared](../../shared.png)");

    fixture
        .command()
        .current_dir(fixture.src())
        .arg("collect")
        .assert()
        .success();

    let usage = std::fs::read_to_string(fixture.src().join("guide/usage.md")).unwrap();
    assert!(usage.starts_with("![Shared](../img_"));
    assert!(usage.contains("/shared_"));
}

#[test]
#[cfg_attr(not(feature = "integration-tests"), ignore)]
fn test_collect_quiet_prints_nothing() {
    let fixture = TestFixture::new().with_doc("index.md", "![Remote](https://x.test/a.png)");

    fixture
        .command()
        .arg("--quiet")
        .arg("collect")
        .arg("--working-dir")
        .arg(fixture.src())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
#[cfg_attr(not(feature = "integration-tests"), ignore)]
fn test_collect_missing_image_fails() {
    let fixture = TestFixture::new().with_doc("index.md", "![Gone](../gone.png)");

    fixture
        .command()
        .arg("collect")
        .arg("--working-dir")
        .arg(fixture.src())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Collect failed"))
        .stderr(predicate::str::contains("index.md"));

    fixture
        .child("src/index.md")
        .assert("![Gone](../gone.png)");
}

#[test]
#[cfg_attr(not(feature = "integration-tests"), ignore)]
fn test_collect_missing_working_dir() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .arg("collect")
        .arg("--working-dir")
        .arg(fixture.path().join("nope"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Working directory not found"));
}
