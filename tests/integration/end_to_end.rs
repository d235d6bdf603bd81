// tests/integration/end_to_end.rs
use std::path::Path;

use clap::Parser;
use svg_bundle::{Args, run};
use svg_bundle_shared_kernel::{BundleError, DomainError, InfrastructureError};

#[path = "../common/mod.rs"]
mod common;
use common::TempWorkspace;

fn args(extra: &[&str]) -> Args {
    Args::try_parse_from(std::iter::once("svg_bundle").chain(extra.iter().copied())).expect("valid args")
}

fn theme(name: &str, dir: &Path) -> String {
    format!("{name}={}", dir.display())
}

fn bundle_error(err: &anyhow::Error) -> &BundleError {
    err.downcast_ref::<BundleError>().expect("bundle error")
}

/// Two themes under `ws`, writing `light.txt` / `dark.txt` into `ws/out`.
fn two_theme_args(ws: &TempWorkspace, extra: &[&str]) -> Args {
    let out = ws.create_dir("out");
    let light = theme("light", &ws.join("Light_mode"));
    let dark = theme("dark", &ws.join("Dark_Mode"));
    let out = out.display().to_string();
    let mut all = vec!["--theme", light.as_str(), "--theme", dark.as_str(), "--out-dir", out.as_str()];
    all.extend_from_slice(extra);
    args(&all)
}

#[test]
fn bundles_nested_files_with_short_names() {
    let ws = TempWorkspace::new("e2e_basic");
    ws.create_file("Light_mode/a.svg", "C1");
    ws.create_file("Light_mode/sub/b.svg", "C2");
    ws.create_file("Dark_Mode/a.svg", "D1");

    let report = run(&two_theme_args(&ws, &[])).expect("build succeeds");

    assert_eq!(ws.read("out/light.txt"), "a\nC1\nb\nC2\n");
    assert_eq!(ws.read("out/dark.txt"), "a\nD1\n");
    assert_eq!(report.themes[0].entries, 2);
    assert_eq!(report.themes[1].entries, 1);
}

#[test]
fn relative_names_keep_directories() {
    let ws = TempWorkspace::new("e2e_relative");
    ws.create_file("Light_mode/modes/Dorian.svg", "<svg/>");
    ws.create_dir("Dark_Mode");

    run(&two_theme_args(&ws, &["--relative-names"])).expect("build succeeds");

    assert_eq!(ws.read("out/light.txt"), "modes/Dorian\n<svg/>\n");
}

#[test]
fn rebuilding_an_unchanged_tree_is_byte_identical() {
    let ws = TempWorkspace::new("e2e_idempotent");
    for name in ["z.svg", "a.svg", "m/one.svg", "m/two.svg"] {
        ws.create_file(&format!("Light_mode/{name}"), format!("<svg id=\"{name}\"/>\n"));
    }
    ws.create_file("Dark_Mode/x.svg", "x");

    let args = two_theme_args(&ws, &[]);
    run(&args).unwrap();
    let first = ws.read("out/light.txt");
    run(&args).unwrap();
    assert_eq!(ws.read("out/light.txt"), first);
}

#[test]
fn empty_theme_writes_empty_file() {
    let ws = TempWorkspace::new("e2e_empty");
    ws.create_file("Light_mode/readme.md", "not an icon");
    ws.create_dir("Dark_Mode");

    run(&two_theme_args(&ws, &[])).unwrap();

    assert!(ws.exists("out/light.txt"));
    assert_eq!(ws.read("out/light.txt"), "");
    assert_eq!(ws.read("out/dark.txt"), "");
}

#[test]
fn only_matching_extension_is_bundled() {
    let ws = TempWorkspace::new("e2e_ext");
    ws.create_file("Light_mode/icon.svg", "keep");
    ws.create_file("Light_mode/icon.png", "drop");
    ws.create_file("Light_mode/deep/er/icon.svgz", "drop");
    ws.create_file("Light_mode/deep/er/notes.txt", "drop");
    ws.create_dir("Dark_Mode");

    run(&two_theme_args(&ws, &[])).unwrap();

    assert_eq!(ws.read("out/light.txt"), "icon\nkeep\n");
}

#[test]
fn existing_output_is_replaced() {
    let ws = TempWorkspace::new("e2e_overwrite");
    ws.create_file("Light_mode/a.svg", "C1");
    ws.create_dir("Dark_Mode");
    ws.create_file("out/light.txt", "old content that should disappear entirely\n".repeat(20));

    run(&two_theme_args(&ws, &[])).unwrap();

    assert_eq!(ws.read("out/light.txt"), "a\nC1\n");
}

#[test]
fn unreadable_file_leaves_every_output_untouched() {
    let ws = TempWorkspace::new("e2e_failure");
    ws.create_file("Light_mode/a.svg", "C1");
    ws.create_file("Dark_Mode/broken.svg", [0xffu8, 0xfe, 0x80]);
    ws.create_file("out/light.txt", "previous light");

    let err = run(&two_theme_args(&ws, &[])).unwrap_err();

    assert!(matches!(
        bundle_error(&err).root_cause(),
        BundleError::Infrastructure(InfrastructureError::FileRead { .. })
    ));
    assert_eq!(ws.read("out/light.txt"), "previous light");
    assert!(!ws.exists("out/dark.txt"));
}

#[test]
fn missing_root_aborts_before_writing() {
    let ws = TempWorkspace::new("e2e_missing_root");
    ws.create_file("Light_mode/a.svg", "C1");

    let err = run(&two_theme_args(&ws, &[])).unwrap_err();

    assert!(matches!(
        bundle_error(&err).root_cause(),
        BundleError::Infrastructure(InfrastructureError::Traversal { .. })
    ));
    assert!(!ws.exists("out/light.txt"));
}

#[test]
fn file_without_expected_prefix_is_an_error() {
    let ws = TempWorkspace::new("e2e_prefix");
    ws.create_file("Light_mode/LM_a.svg", "C1");
    ws.create_file("Light_mode/b.svg", "C2");
    ws.create_dir("Dark_Mode");

    let err = run(&two_theme_args(&ws, &["--strip-prefix", "LM_"])).unwrap_err();

    assert!(matches!(
        bundle_error(&err).root_cause(),
        BundleError::Domain(DomainError::ShortName { .. })
    ));
    assert!(!ws.exists("out/light.txt"));
}

#[test]
fn strip_prefix_shortens_names() {
    let ws = TempWorkspace::new("e2e_strip");
    ws.create_file("Light_mode/LM_Circle_C.svg", "C");
    ws.create_dir("Dark_Mode");

    run(&two_theme_args(&ws, &["--strip-prefix", "LM_"])).unwrap();

    assert_eq!(ws.read("out/light.txt"), "Circle_C\nC\n");
}

#[test]
fn strip_prefix_can_target_one_theme() {
    let ws = TempWorkspace::new("e2e_scoped_strip");
    ws.create_file("Light_mode/LM_Aeolian.svg", "L");
    ws.create_file("Dark_Mode/DM_Aeolian.svg", "D");

    run(&two_theme_args(&ws, &["--strip-prefix", "light=LM_", "--strip-prefix", "dark=DM_"])).unwrap();

    assert_eq!(ws.read("out/light.txt"), "Aeolian\nL\n");
    assert_eq!(ws.read("out/dark.txt"), "Aeolian\nD\n");
}

#[test]
fn global_prefix_fails_on_theme_with_other_prefix() {
    let ws = TempWorkspace::new("e2e_global_strip");
    ws.create_file("Light_mode/LM_Aeolian.svg", "L");
    ws.create_file("Dark_Mode/DM_Aeolian.svg", "D");

    let err = run(&two_theme_args(&ws, &["--strip-prefix", "LM_"])).unwrap_err();

    assert!(err.to_string().contains("Theme 'dark' failed"));
    assert!(!ws.exists("out/light.txt"));
}

#[test]
fn yaml_config_drives_the_build() {
    let ws = TempWorkspace::new("e2e_yaml");
    ws.create_file("icons/light/LM_a.svg", "C1");
    ws.create_file("icons/dark/DM_a.svg", "D1");
    let config = ws.create_file(
        "bundle.yaml",
        "themes:\n\
         \x20 - name: light_mode\n\
         \x20   input: icons/light\n\
         \x20   output: Light_mode.txt\n\
         \x20   strip_prefix: LM_\n\
         \x20 - name: dark_mode\n\
         \x20   input: icons/dark\n\
         \x20   output: Dark_mode.txt\n\
         \x20   strip_prefix: DM_\n",
    );

    let config = config.display().to_string();
    run(&args(&["--config", config.as_str()])).unwrap();

    assert_eq!(ws.read("Light_mode.txt"), "a\nC1\n");
    assert_eq!(ws.read("Dark_mode.txt"), "a\nD1\n");
}

#[test]
fn duplicate_theme_names_are_rejected() {
    let ws = TempWorkspace::new("e2e_duplicate");
    ws.create_dir("Light_mode");
    let light = theme("same", &ws.join("Light_mode"));

    let err = run(&args(&["--theme", light.as_str(), "--theme", light.as_str()])).unwrap_err();

    assert!(matches!(
        bundle_error(&err),
        BundleError::Domain(DomainError::InvalidConfiguration { .. })
    ));
}
