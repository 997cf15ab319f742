//! Integration tests for the CLI
//!
//! Run the built `weather-card` binary in a scratch directory so no local
//! config file leaks in.

#![allow(clippy::panic)] // Allow panic! in tests for clear failure messages

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

fn weather_card(dir: &Path, args: &[&str], stdin: Option<&str>) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_weather-card"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .env_remove("WEATHER_CARD_CONFIG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    if let Some(input) = stdin {
        child
            .stdin
            .take()
            .unwrap()
            .write_all(input.as_bytes())
            .unwrap();
    } else {
        drop(child.stdin.take());
    }

    child.wait_with_output().unwrap()
}

fn stdout(output: &Output) -> String {
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout.clone()).unwrap()
}

const BEIJING: &str = r#"{
    "city": "北京",
    "temperature": "22°C",
    "condition": "晴天",
    "humidity": "45%",
    "windSpeed": "3km/h",
    "description": "今天北京天气晴朗"
}"#;

#[test]
fn render_json_from_stdin() {
    let dir = tempfile::tempdir().unwrap();
    let output = weather_card(dir.path(), &["render", "--format", "json"], Some(BEIJING));
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();

    assert_eq!(value["icon"], "☀️");
    assert_eq!(value["background"], "from-yellow-400 to-orange-500");
    assert_eq!(value["temperature"], "22°C");
    assert_eq!(value["windSpeed"], "3km/h");
    assert_eq!(value["reveal"], "visible");
}

#[test]
fn render_without_mount_is_hidden() {
    let dir = tempfile::tempdir().unwrap();
    let output = weather_card(dir.path(), &["render", "--no-mount"], Some(BEIJING));
    let html = stdout(&output);

    assert!(html.contains(r#"data-reveal="hidden""#));
    assert!(html.contains("opacity-0 translate-y-4"));
}

#[test]
fn render_unknown_condition_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let output = weather_card(
        dir.path(),
        &["render", "--format", "json"],
        Some(r#"{"city":"北京","condition":"龙卷风"}"#),
    );
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();

    assert_eq!(value["icon"], "🌤️");
    assert_eq!(value["background"], "from-blue-400 to-blue-600");
    assert_eq!(value["humidity"], "");
}

#[test]
fn render_strict_rejects_blank_fields() {
    let dir = tempfile::tempdir().unwrap();
    let output = weather_card(
        dir.path(),
        &["render", "--strict"],
        Some(r#"{"city":"北京","condition":"晴天"}"#),
    );
    assert!(!output.status.success());
}

#[test]
fn render_reads_input_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("record.json");
    std::fs::write(&path, BEIJING).unwrap();

    let output = weather_card(
        dir.path(),
        &["render", "--input", "record.json", "--format", "text"],
        None,
    );
    assert!(stdout(&output).starts_with("☀️ 北京 (晴天)"));
}

#[test]
fn config_file_sets_transition() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("weather-card.toml"),
        "[card]\ntransition_ms = 800\neasing = \"ease-in\"\n",
    )
    .unwrap();

    let output = weather_card(dir.path(), &["render"], Some(BEIJING));
    assert!(stdout(&output).contains("transition-all duration-800 ease-in"));
}

#[test]
fn visuals_and_conditions() {
    let dir = tempfile::tempdir().unwrap();

    let visuals = stdout(&weather_card(dir.path(), &["visuals", "多云"], None));
    assert_eq!(visuals.trim(), "⛅  from-gray-400 to-gray-600");

    let conditions = stdout(&weather_card(dir.path(), &["conditions"], None));
    assert_eq!(conditions.lines().count(), 8);
    assert!(conditions.contains("大雨\t🌧️  from-blue-600 to-blue-800"));
}

#[test]
fn replay_keeps_reveal_across_updates() {
    let dir = tempfile::tempdir().unwrap();
    let stream = r#"[
        {"id": "6f1c2a8e-4b1d-4c56-9a43-1d2e3f4a5b6c", "name": "weather",
         "props": {"city": "上海", "condition": "多云"}},
        {"id": "00000000-0000-4000-8000-000000000001", "name": "chart", "props": {}},
        {"id": "6f1c2a8e-4b1d-4c56-9a43-1d2e3f4a5b6c", "name": "weather",
         "props": {"city": "上海", "condition": "大雨"}}
    ]"#;

    let output = stdout(&weather_card(dir.path(), &["replay", "--input", "-"], Some(stream)));
    let cards: Vec<serde_json::Value> = serde_json::Deserializer::from_str(&output)
        .into_iter()
        .collect::<Result<_, _>>()
        .unwrap();

    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0]["icon"], "⛅");
    assert_eq!(cards[1]["icon"], "🌧️");
    assert_eq!(cards[1]["background"], "from-blue-600 to-blue-800");
    assert_eq!(cards[1]["reveal"], "visible");
}

#[test]
fn demo_answers_named_city() {
    let dir = tempfile::tempdir().unwrap();
    let output = stdout(&weather_card(dir.path(), &["demo", "广州天气如何"], None));

    assert!(output.starts_with("🌤️ "));
    assert!(output.contains("☁️ 广州 (阴天)"));
}

#[test]
fn config_prints_effective_settings() {
    let dir = tempfile::tempdir().unwrap();
    let output = stdout(&weather_card(dir.path(), &["config"], None));

    assert!(output.contains("transition_ms = 500"));
    assert!(output.contains("[telemetry]"));
}

#[test]
fn invalid_record_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = weather_card(dir.path(), &["render"], Some("not json"));
    assert!(!output.status.success());
}
