//! CLI integration tests
//!
//! Each test runs the binary against a throwaway install root passed via
//! `--root`. `LC_ALL` is pinned so assertions see the English catalog.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const SOURCE_CSV: &str = "AppName,PackageName,LauncherActivity\n\
                          MyApp,com.example.app,com.example.app.MainActivity\n\
                          Other,com.example.other,com.example.other.Main\n";

fn cmd(root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("iconsmith").unwrap();
    cmd.arg("--root").arg(root).arg("-q");
    cmd.env("LC_ALL", "en_US.UTF-8");
    cmd.env_remove("LANG");
    cmd
}

/// Fresh install root with one input CSV dropped in.
fn root_with_input(csv: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("input")).unwrap();
    fs::write(dir.path().join("input").join("apps.csv"), csv).unwrap();
    dir
}

fn fill_icon_names(root: &Path) {
    let data_csv = root.join("map").join("data.csv");
    let filled = fs::read_to_string(&data_csv)
        .unwrap()
        .lines()
        .enumerate()
        .map(|(i, line)| {
            if i == 0 {
                line.to_string()
            } else {
                format!("{line}icon_{i}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
        + "\n";
    fs::write(&data_csv, filled).unwrap();
}

fn android_project(dir: &Path) -> PathBuf {
    let target = dir.join("project");
    fs::create_dir_all(target.join("app/src/main/res/xml")).unwrap();
    fs::create_dir_all(target.join("app/src/main/assets")).unwrap();
    target
}

// ============================================================================
// CLI surface
// ============================================================================

#[test]
fn help_lists_the_three_functions() {
    Command::cargo_bin("iconsmith")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("add"))
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("copy"));
}

#[test]
fn no_arguments_prints_usage_and_fails() {
    Command::cargo_bin("iconsmith")
        .unwrap()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn unknown_function_fails() {
    Command::cargo_bin("iconsmith")
        .unwrap()
        .arg("frobnicate")
        .assert()
        .failure();
}

// ============================================================================
// add
// ============================================================================

#[test]
fn add_imports_rows_with_blank_icon_names() {
    let root = root_with_input(SOURCE_CSV);

    cmd(root.path())
        .arg("add")
        .assert()
        .success()
        .stdout(predicate::str::contains("Found input file: apps.csv"))
        .stdout(predicate::str::contains("  + MyApp"))
        .stdout(predicate::str::contains("  + Other"));

    let store = fs::read_to_string(root.path().join("map/data.csv")).unwrap();
    assert_eq!(
        store,
        "AppName,PackageName,LauncherActivity,IconName\n\
         MyApp,com.example.app,com.example.app.MainActivity,\n\
         Other,com.example.other,com.example.other.Main,\n"
    );
}

#[test]
fn add_is_idempotent_per_key() {
    let root = root_with_input(SOURCE_CSV);

    cmd(root.path()).arg("add").assert().success();
    let first = fs::read_to_string(root.path().join("map/data.csv")).unwrap();

    cmd(root.path())
        .arg("add")
        .assert()
        .success()
        .stdout(predicate::str::contains("No new data"));

    let second = fs::read_to_string(root.path().join("map/data.csv")).unwrap();
    assert_eq!(first, second);
}

#[test]
fn add_appends_only_genuinely_new_rows() {
    let root = root_with_input(SOURCE_CSV);
    cmd(root.path()).arg("add").assert().success();

    let extended = format!("{SOURCE_CSV}Third,com.example.third,com.example.third.Main\n");
    fs::write(root.path().join("input/apps.csv"), extended).unwrap();

    cmd(root.path())
        .arg("add")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 new rows to import"))
        .stdout(predicate::str::contains("  + Third"));

    let store = fs::read_to_string(root.path().join("map/data.csv")).unwrap();
    assert_eq!(store.lines().count(), 4);
}

#[test]
fn add_without_input_file_exits_10() {
    let root = TempDir::new().unwrap();
    fs::create_dir_all(root.path().join("input")).unwrap();

    cmd(root.path())
        .arg("add")
        .assert()
        .code(10)
        .stderr(predicate::str::contains("no CSV file"));
}

#[test]
fn add_with_two_input_files_exits_11() {
    let root = root_with_input(SOURCE_CSV);
    fs::write(root.path().join("input/extra.csv"), "x\n").unwrap();

    cmd(root.path())
        .arg("add")
        .assert()
        .code(11)
        .stderr(predicate::str::contains("2 CSV files"));
}

#[test]
fn add_with_empty_input_exits_12() {
    let root = root_with_input("");

    cmd(root.path()).arg("add").assert().code(12);
}

#[test]
fn add_with_wrong_header_exits_13_showing_both_headers() {
    let root = root_with_input(
        "AppName,Package,LauncherActivity\n\
         MyApp,com.example.app,com.example.app.MainActivity\n",
    );

    cmd(root.path())
        .arg("add")
        .assert()
        .code(13)
        .stderr(predicate::str::contains(
            "expected: AppName,PackageName,LauncherActivity",
        ))
        .stderr(predicate::str::contains("AppName,Package,LauncherActivity"));

    assert!(!root.path().join("map/data.csv").exists());
}

#[test]
fn add_with_short_row_exits_14_naming_the_row() {
    let root = root_with_input(
        "AppName,PackageName,LauncherActivity\n\
         MyApp,com.example.app,com.example.app.MainActivity\n\
         Broken,com.example.broken\n",
    );

    cmd(root.path())
        .arg("add")
        .assert()
        .code(14)
        .stderr(predicate::str::contains("row 3"));
}

// ============================================================================
// generate
// ============================================================================

#[test]
fn generate_without_store_exits_20() {
    let root = TempDir::new().unwrap();

    cmd(root.path())
        .arg("generate")
        .assert()
        .code(20)
        .stderr(predicate::str::contains("run `add` first"));
}

#[test]
fn generate_with_blank_icon_name_exits_23_naming_row_and_app() {
    let root = root_with_input(SOURCE_CSV);
    cmd(root.path()).arg("add").assert().success();

    cmd(root.path())
        .arg("generate")
        .assert()
        .code(23)
        .stderr(predicate::str::contains("row 2"))
        .stderr(predicate::str::contains("MyApp"));

    assert!(!root.path().join("output").exists());
}

#[test]
fn generate_writes_all_five_artifacts() {
    let root = root_with_input(SOURCE_CSV);
    cmd(root.path()).arg("add").assert().success();
    fill_icon_names(root.path());

    cmd(root.path())
        .arg("generate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated appfilter.xml"))
        .stdout(predicate::str::contains("Generated theme_resources.xml"));

    for name in [
        "appfilter.xml",
        "appmap.xml",
        "drawable.xml",
        "icon_pack.xml",
        "theme_resources.xml",
    ] {
        assert!(
            root.path().join("output").join(name).is_file(),
            "missing {name}"
        );
    }

    let appfilter = fs::read_to_string(root.path().join("output/appfilter.xml")).unwrap();
    assert!(appfilter.contains(
        "component=\"ComponentInfo{com.example.app/com.example.app.MainActivity}\""
    ));
    assert!(appfilter.contains("drawable=\"icon_1\""));
}

#[test]
fn generate_warns_once_per_missing_template() {
    let root = root_with_input(SOURCE_CSV);
    cmd(root.path()).arg("add").assert().success();
    fill_icon_names(root.path());

    cmd(root.path())
        .arg("generate")
        .assert()
        .success()
        .stdout(predicate::str::contains("icon_pack_template.xml not found"))
        .stdout(predicate::str::contains(
            "theme_resources_template.xml not found",
        ));
}

#[test]
fn generate_with_malformed_store_row_exits_14() {
    let root = TempDir::new().unwrap();
    fs::create_dir_all(root.path().join("map")).unwrap();
    fs::write(
        root.path().join("map/data.csv"),
        "AppName,PackageName,LauncherActivity,IconName\n\
         MyApp,com.example.app,com.example.app.MainActivity\n",
    )
    .unwrap();

    cmd(root.path()).arg("generate").assert().code(14);
}

#[test]
fn generate_with_three_column_store_header_exits_22() {
    let root = TempDir::new().unwrap();
    fs::create_dir_all(root.path().join("map")).unwrap();
    fs::write(
        root.path().join("map/data.csv"),
        "AppName,PackageName,LauncherActivity\n",
    )
    .unwrap();

    cmd(root.path()).arg("generate").assert().code(22);
}

// ============================================================================
// copy
// ============================================================================

fn generated_root() -> TempDir {
    let root = root_with_input(SOURCE_CSV);
    cmd(root.path()).arg("add").assert().success();
    fill_icon_names(root.path());
    cmd(root.path()).arg("generate").assert().success();
    root
}

#[test]
fn copy_places_every_artifact_in_both_directories() {
    let root = generated_root();
    let target = android_project(root.path());

    cmd(root.path())
        .arg("copy")
        .arg(&target)
        .assert()
        .success()
        .stdout(predicate::str::contains("Copied to"));

    for name in [
        "appfilter.xml",
        "appmap.xml",
        "drawable.xml",
        "icon_pack.xml",
        "theme_resources.xml",
    ] {
        assert!(target.join("app/src/main/res/xml").join(name).is_file());
        assert!(target.join("app/src/main/assets").join(name).is_file());
    }
}

#[test]
fn copy_to_missing_target_exits_30() {
    let root = generated_root();

    cmd(root.path())
        .arg("copy")
        .arg(root.path().join("nope"))
        .assert()
        .code(30);
}

#[test]
fn copy_lists_both_missing_subdirectories_at_once() {
    let root = generated_root();
    let target = root.path().join("project");
    fs::create_dir_all(&target).unwrap();

    cmd(root.path())
        .arg("copy")
        .arg(&target)
        .assert()
        .code(31)
        .stderr(predicate::str::contains("res/xml"))
        .stderr(predicate::str::contains("assets"));
}

#[test]
fn copy_lists_all_missing_artifacts_at_once() {
    let root = generated_root();
    fs::remove_file(root.path().join("output/appmap.xml")).unwrap();
    fs::remove_file(root.path().join("output/drawable.xml")).unwrap();
    let target = android_project(root.path());

    cmd(root.path())
        .arg("copy")
        .arg(&target)
        .assert()
        .code(32)
        .stderr(predicate::str::contains("appmap.xml"))
        .stderr(predicate::str::contains("drawable.xml"));
}

#[test]
fn copy_without_target_reads_the_config_file() {
    let root = generated_root();
    let target = android_project(root.path());
    fs::create_dir_all(root.path().join("config")).unwrap();
    fs::write(
        root.path().join("config/config.json"),
        format!(r#"{{"target_dir": "{}"}}"#, target.display()),
    )
    .unwrap();

    cmd(root.path())
        .arg("copy")
        .assert()
        .success()
        .stdout(predicate::str::contains("config/config.json"));

    assert!(target.join("app/src/main/res/xml/appfilter.xml").is_file());
}

#[test]
fn copy_without_target_or_config_exits_40() {
    let root = generated_root();

    cmd(root.path()).arg("copy").assert().code(40);
}

#[test]
fn copy_with_malformed_config_exits_41() {
    let root = generated_root();
    fs::create_dir_all(root.path().join("config")).unwrap();
    fs::write(root.path().join("config/config.json"), "{oops").unwrap();

    cmd(root.path()).arg("copy").assert().code(41);
}

#[test]
fn copy_with_empty_target_dir_field_exits_42() {
    let root = generated_root();
    fs::create_dir_all(root.path().join("config")).unwrap();
    fs::write(
        root.path().join("config/config.json"),
        r#"{"target_dir": ""}"#,
    )
    .unwrap();

    cmd(root.path()).arg("copy").assert().code(42);
}

// ============================================================================
// Locale selection
// ============================================================================

#[test]
fn chinese_locale_uses_the_zh_catalog() {
    let root = TempDir::new().unwrap();
    fs::create_dir_all(root.path().join("input")).unwrap();

    // Ship the repo catalogs into the install root.
    let repo_locales = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("locales");
    fs::create_dir_all(root.path().join("locales")).unwrap();
    for tag in ["en_US.json", "zh_CN.json"] {
        fs::copy(repo_locales.join(tag), root.path().join("locales").join(tag)).unwrap();
    }

    Command::cargo_bin("iconsmith")
        .unwrap()
        .arg("--root")
        .arg(root.path())
        .arg("-q")
        .arg("add")
        .env("LC_ALL", "zh_CN.UTF-8")
        .env_remove("LANG")
        .assert()
        .code(10)
        .stderr(predicate::str::contains("没有找到 CSV 文件"));
}
