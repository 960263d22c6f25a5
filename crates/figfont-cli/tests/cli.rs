use assert_cmd::Command;
use predicates::prelude::*;

fn figfont() -> Command {
    Command::cargo_bin("figfont").unwrap()
}

#[test]
fn list_prints_catalog() {
    figfont()
        .arg("list")
        .assert()
        .success()
        .stdout("standard\nslant\nterm\n");
}

#[test]
fn render_with_bundled_font() {
    figfont()
        .args(["render", "-f", "slant", "H.W"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("    __  ___       __\n"));
}

#[test]
fn render_joins_words_and_overrides_layout() {
    figfont()
        .args(["render", "-f", "term", "--layout", "full", "--rtl", "ab", "cd"])
        .assert()
        .success()
        .stdout("dc ba\n");
}

#[test]
fn inspect_reports_metadata() {
    figfont()
        .args(["inspect", "standard"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Height: 6 (baseline 5)"))
        .stdout(predicate::str::contains("104 required, 0 code-tagged"));
}

#[test]
fn unknown_font_fails() {
    figfont()
        .args(["render", "-f", "no-such-font", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown font"));
}

#[test]
fn font_loaded_from_path() {
    let path = std::env::temp_dir().join(format!("figfont-cli-{}.flf", std::process::id()));
    std::fs::write(&path, figfont::test_support::FontSource::new(1).build()).unwrap();
    figfont()
        .args(["render", "-f"])
        .arg(&path)
        .arg("ok")
        .assert()
        .success()
        .stdout("ok\n");
    std::fs::remove_file(&path).unwrap();
}
