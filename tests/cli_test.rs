use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;

const PAGE: &str = r#"<html><body><div class="slider"><div class="slides-container"><div>A</div><div>B</div><div>C</div><div>D</div></div></div></body></html>"#;

fn run_command(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_carousel"))
        .args(args)
        .env_remove("SLIDER_CLASS")
        .env_remove("SLIDER_AUTOPLAY_CLASS")
        .env_remove("SLIDER_INTERVAL_MS")
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_render_command() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let input = temp_dir.path().join("page.xhtml");
    let output = temp_dir.path().join("rendered.xhtml");
    fs::write(&input, PAGE).expect("Failed to write page");

    let result = run_command(&[
        "render",
        "-i",
        input.to_str().unwrap(),
        "-o",
        output.to_str().unwrap(),
    ]);
    assert!(result.status.success(), "Command failed: {:?}", result);

    let html = fs::read_to_string(&output).expect("Failed to read output");
    assert_eq!(html.matches(r#"<span class="dot"#).count(), 4);
}

#[test]
fn test_simulate_command_prints_each_step() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let input = temp_dir.path().join("page.xhtml");
    fs::write(&input, PAGE).expect("Failed to write page");

    let result = run_command(&[
        "simulate",
        "-i",
        input.to_str().unwrap(),
        "--steps",
        "next,next,prev,goto:3,next",
    ]);
    assert!(result.status.success(), "Command failed: {:?}", result);

    let stdout = String::from_utf8_lossy(&result.stdout);
    let slides: Vec<&str> = stdout
        .lines()
        .filter_map(|line| line.split_whitespace().find(|w| w.starts_with("slide=")))
        .collect();
    assert_eq!(
        slides,
        vec!["slide=1", "slide=2", "slide=1", "slide=3", "slide=0"]
    );
    assert!(stdout.lines().last().unwrap().ends_with("direction=backward"));
}

#[test]
fn test_simulate_command_rejects_bad_step() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let input = temp_dir.path().join("page.xhtml");
    fs::write(&input, PAGE).expect("Failed to write page");

    let result = run_command(&["simulate", "-i", input.to_str().unwrap(), "--steps", "jump"]);
    assert!(!result.status.success());
    assert!(String::from_utf8_lossy(&result.stderr).contains("unknown step"));
}

#[test]
fn test_simulate_wait_uses_interval_override() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let input = temp_dir.path().join("page.xhtml");
    fs::write(&input, PAGE.replace(r#"class="slider""#, r#"class="slider auto-play""#))
        .expect("Failed to write page");

    let result = run_command(&[
        "--interval-ms",
        "100",
        "simulate",
        "-i",
        input.to_str().unwrap(),
        "--steps",
        "wait:250",
    ]);
    assert!(result.status.success(), "Command failed: {:?}", result);
    assert!(String::from_utf8_lossy(&result.stdout).contains("t=250ms wait:250   slide=2"));
}
