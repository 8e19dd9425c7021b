//! CLI tests
//!
//! Covers argument parsing, exit codes, and the JSON output envelope.

use clap::Parser;
use lexitui::cli::{Cli, Command, ExitCode, JsonOutput};

// =============================================================================
// CLI Argument Parsing Tests
// =============================================================================

#[test]
fn test_no_args_is_tui_mode() {
    let cli = Cli::parse_from(["lexitui"]);
    assert!(!cli.is_cli_mode());
}

#[test]
fn test_define_command_basic() {
    let cli = Cli::parse_from(["lexitui", "define", "hello"]);
    assert!(cli.is_cli_mode());
    match cli.command {
        Some(Command::Define(cmd)) => {
            assert_eq!(cmd.word, "hello");
            assert_eq!(cmd.limit, 10); // default
        }
        None => panic!("Expected Define command"),
    }
}

#[test]
fn test_define_alias() {
    let cli = Cli::parse_from(["lexitui", "d", "cat"]);
    match cli.command {
        Some(Command::Define(cmd)) => assert_eq!(cmd.word, "cat"),
        None => panic!("Expected Define command"),
    }
}

#[test]
fn test_define_with_limit() {
    let cli = Cli::parse_from(["lexitui", "define", "run", "--limit", "3"]);
    match cli.command {
        Some(Command::Define(cmd)) => {
            assert_eq!(cmd.word, "run");
            assert_eq!(cmd.limit, 3);
        }
        None => panic!("Expected Define command"),
    }
}

#[test]
fn test_define_requires_word() {
    let result = Cli::try_parse_from(["lexitui", "define"]);
    assert!(result.is_err());
}

#[test]
fn test_json_flag_is_global() {
    let cli = Cli::parse_from(["lexitui", "define", "hello", "--json"]);
    assert!(cli.json);

    let cli = Cli::parse_from(["lexitui", "--json", "define", "hello"]);
    assert!(cli.json);
}

#[test]
fn test_quiet_flag() {
    let cli = Cli::parse_from(["lexitui", "-q", "define", "hello"]);
    assert!(cli.quiet);
}

#[test]
fn test_multi_word_query_stays_one_argument() {
    let cli = Cli::parse_from(["lexitui", "define", "ice cream"]);
    match cli.command {
        Some(Command::Define(cmd)) => assert_eq!(cmd.word, "ice cream"),
        None => panic!("Expected Define command"),
    }
}

// =============================================================================
// Exit Code Tests
// =============================================================================

#[test]
fn test_exit_code_conversions() {
    assert_eq!(i32::from(ExitCode::Success), 0);
    assert_eq!(i32::from(ExitCode::Error), 1);
    assert_eq!(i32::from(ExitCode::InvalidArgs), 2);
    assert_eq!(i32::from(ExitCode::NetworkError), 3);
    assert_eq!(i32::from(ExitCode::NotFound), 4);
}

// =============================================================================
// JSON Envelope Tests
// =============================================================================

#[test]
fn test_json_success_envelope() {
    let output = JsonOutput::success(serde_json::json!({"word": "hello"}));
    let s = serde_json::to_string(&output).unwrap();
    assert!(s.contains("\"data\""));
    assert!(s.contains("\"hello\""));
    assert!(!s.contains("\"error\""));
    assert!(!s.contains("\"exit_code\""));
}

#[test]
fn test_json_error_envelope() {
    let output = JsonOutput::<()>::error_msg("Word not found", ExitCode::NotFound);
    let value: serde_json::Value = serde_json::to_value(&output).unwrap();
    assert_eq!(value["error"], "Word not found");
    assert_eq!(value["exit_code"], 4);
    assert!(value.get("data").is_none());
}
