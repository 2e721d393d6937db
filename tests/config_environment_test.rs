// ABOUTME: Unit tests for environment-driven server configuration
// ABOUTME: Validates defaults, overrides, workout parsing, and rejection of bad values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Repcount Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;

use repcount_server::config::{parse_workout, Environment, LogLevel, ServerConfig};
use repcount_server::errors::ErrorCode;
use repcount_server::models::FrameSize;
use serial_test::serial;

const CONFIG_VARS: &[&str] = &[
    "ENVIRONMENT",
    "RUST_LOG",
    "HTTP_HOST",
    "HTTP_PORT",
    "CORS_ALLOWED_ORIGINS",
    "FRAME_WIDTH",
    "FRAME_HEIGHT",
    "MIN_LANDMARK_VISIBILITY",
    "DEFAULT_WORKOUT",
];

fn clear_config_env() {
    for key in CONFIG_VARS {
        env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_from_env_defaults() {
    clear_config_env();

    let config = ServerConfig::from_env().unwrap();
    assert_eq!(config, ServerConfig::default());
    assert_eq!(config.http_host, "127.0.0.1");
    assert_eq!(config.http_port, 8000);
    assert_eq!(config.cors_allowed_origins, "*");
    assert_eq!(config.frame, FrameSize { width: 1280, height: 720 });
    assert_eq!(config.environment, Environment::Development);
    assert_eq!(config.log_level, LogLevel::Info);
    assert!(!config.default_workout.is_empty());
}

#[test]
#[serial]
fn test_from_env_overrides() {
    clear_config_env();
    env::set_var("ENVIRONMENT", "production");
    env::set_var("HTTP_HOST", "0.0.0.0");
    env::set_var("HTTP_PORT", "9100");
    env::set_var("FRAME_WIDTH", "640");
    env::set_var("FRAME_HEIGHT", "480");
    env::set_var("MIN_LANDMARK_VISIBILITY", "0.25");
    env::set_var("DEFAULT_WORKOUT", "squats:30, lunges:45");

    let config = ServerConfig::from_env().unwrap();
    clear_config_env();

    assert_eq!(config.environment, Environment::Production);
    assert!(config.environment.is_production());
    assert_eq!(config.http_host, "0.0.0.0");
    assert_eq!(config.http_port, 9100);
    assert_eq!(config.frame, FrameSize { width: 640, height: 480 });
    assert!((config.min_landmark_visibility - 0.25).abs() < f32::EPSILON);
    assert_eq!(config.default_workout.len(), 2);
    assert_eq!(config.default_workout[1].exercise, "lunges");
    assert_eq!(config.default_workout[1].duration_secs, 45);
}

#[test]
#[serial]
fn test_empty_default_workout_is_allowed() {
    clear_config_env();
    env::set_var("DEFAULT_WORKOUT", "");

    let config = ServerConfig::from_env().unwrap();
    clear_config_env();

    assert!(config.default_workout.is_empty());
    assert!(config.summary().contains("(empty)"));
}

#[test]
#[serial]
fn test_invalid_values_are_rejected() {
    let cases = [
        ("HTTP_PORT", "not-a-port"),
        ("HTTP_PORT", "70000"),
        ("FRAME_WIDTH", "0"),
        ("FRAME_HEIGHT", "-5"),
        ("MIN_LANDMARK_VISIBILITY", "1.5"),
        ("DEFAULT_WORKOUT", "squats:ten"),
    ];

    for (key, value) in cases {
        clear_config_env();
        env::set_var(key, value);
        let error = ServerConfig::from_env().unwrap_err();
        assert_eq!(error.code, ErrorCode::ConfigInvalid, "{key}={value}");
    }
    clear_config_env();
}

#[test]
fn test_parse_workout_keeps_names_verbatim() {
    let entries = parse_workout("Arms_Raise:10,standing_crunch_cross:20").unwrap();
    assert_eq!(entries[0].exercise, "Arms_Raise");
    assert_eq!(entries[1].exercise, "standing_crunch_cross");
    assert_eq!(entries[1].duration_secs, 20);

    assert!(parse_workout("squats").is_err());
    assert!(parse_workout(":10").is_err());
}

#[test]
fn test_summary_lists_settings() {
    let summary = ServerConfig::default().summary();
    assert!(summary.contains("HTTP: 127.0.0.1:8000"));
    assert!(summary.contains("Frame: 1280x720"));
}
