use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

const TEMPLATE: &str = "<html><head><title>{{HEAD_TITLE}}</title></head>\n<body>{{CONTENT}}</body></html>\n";

fn write_site(root: &Path) -> Result<(), Box<dyn std::error::Error>> {
    fs::create_dir_all(root.join("site").join("about"))?;
    fs::write(
        root.join("site").join("index.md"),
        "# Welcome\n\n![](TOC)\n\n## Usage\n",
    )?;
    fs::write(
        root.join("site").join("about").join("index.md"),
        "title: About Us\n\nSome text.\n",
    )?;
    fs::write(root.join("template.html"), TEMPLATE)?;
    Ok(())
}

#[allow(deprecated)]
fn palila() -> Result<Command, Box<dyn std::error::Error>> {
    Ok(Command::cargo_bin("palila")?)
}

#[test]
fn build_then_clean() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    write_site(dir.path())?;

    palila()?
        .current_dir(dir.path())
        .args(["build", "--root", "site", "--template", "template.html"])
        .assert()
        .success();

    let home = fs::read_to_string(dir.path().join("site").join("index.html"))?;
    assert!(home.contains("<title>site</title>"));
    assert!(home.contains("<h2 id='usage'><a href=\"#usage\">Usage</a></h2>"));
    assert!(home.contains("<li><a href=\"#usage\">Usage</a></li>"));

    let about = fs::read_to_string(dir.path().join("site").join("about").join("index.html"))?;
    assert!(about.contains("<title>About Us</title>"));

    palila()?
        .current_dir(dir.path())
        .args(["clean", "--root", "site"])
        .assert()
        .success();

    assert!(!dir.path().join("site").join("index.html").exists());
    assert!(!dir.path().join("site").join("about").join("index.html").exists());
    assert!(dir.path().join("site").join("about").join("index.md").exists());
    Ok(())
}

#[test]
fn build_reads_config_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    write_site(dir.path())?;
    fs::write(
        dir.path().join("palila.yml"),
        "root: site\ntemplate: template.html\n",
    )?;

    palila()?
        .current_dir(dir.path())
        .args(["--config", "palila.yml", "build"])
        .assert()
        .success();

    assert!(dir.path().join("site").join("about").join("index.html").exists());
    Ok(())
}

#[test]
fn build_fails_for_missing_root() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    fs::write(dir.path().join("template.html"), TEMPLATE)?;

    palila()?
        .current_dir(dir.path())
        .args(["build", "--root", "nowhere", "--template", "template.html"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("folder does not exist"));
    Ok(())
}

#[test]
fn build_fails_when_template_is_a_folder() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    write_site(dir.path())?;

    palila()?
        .current_dir(dir.path())
        .args(["build", "--root", "site", "--template", "site"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("file does not exist"));

    assert!(!dir.path().join("site").join("index.html").exists());
    Ok(())
}

#[test]
fn page_builds_single_folder() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    write_site(dir.path())?;

    palila()?
        .current_dir(dir.path())
        .args([
            "page",
            "--folder",
            "site/about",
            "--template",
            "template.html",
            "--root",
            "site",
        ])
        .assert()
        .success();

    assert!(dir.path().join("site").join("about").join("index.html").exists());
    assert!(!dir.path().join("site").join("index.html").exists());
    Ok(())
}

#[test]
fn clean_accepts_keep_going() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    write_site(dir.path())?;
    fs::write(dir.path().join("site").join("index.html"), "old")?;

    palila()?
        .current_dir(dir.path())
        .args(["clean", "--root", "site", "--keep-going"])
        .assert()
        .success();

    assert!(!dir.path().join("site").join("index.html").exists());
    Ok(())
}
