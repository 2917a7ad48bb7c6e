use std::fs;

use clap::Parser;
use concordancer::cli::args::ConcordancerArgs;
use concordancer::cli::commands::execute_command;
use concordancer::error::ConcordanceError;
use concordancer::report::REPORT_FILE_NAME;

use tempfile::tempdir;

const TEXT: &str = "The man is happy. The dog is happy but the cat is sad.";

fn parse(args: &[&str]) -> ConcordancerArgs {
    ConcordancerArgs::try_parse_from(std::iter::once("concordancer").chain(args.iter().copied()))
        .unwrap()
}

#[test]
fn test_concordance_command_writes_report() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("text.txt");
    fs::write(&input, TEXT).unwrap();
    let input = input.to_str().unwrap();
    let output_dir = dir.path().to_str().unwrap();

    let args = parse(&[
        "--quiet",
        "concordance",
        input,
        "Happy!",
        "--left",
        "2",
        "--right",
        "1",
        "--sort",
        "left",
        "--output-dir",
        output_dir,
    ]);
    execute_command(args).unwrap();

    assert_eq!(
        fs::read_to_string(dir.path().join(REPORT_FILE_NAME)).unwrap(),
        "dog is happy but\nman is happy the"
    );
}

#[test]
fn test_run_command_with_config_file() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("text.txt");
    fs::write(&input, TEXT).unwrap();
    let config_path = dir.path().join("config.json");
    let json = serde_json::json!({
        "input_path": input,
        "word": "happy",
        "right_context_size": 0,
        "output_dir": dir.path(),
    });
    fs::write(&config_path, json.to_string()).unwrap();

    // The --left flag overrides the default left context from the config.
    let args = parse(&[
        "--format",
        "json",
        "run",
        "--config",
        config_path.to_str().unwrap(),
        "--left",
        "1",
    ]);
    execute_command(args).unwrap();

    assert_eq!(
        fs::read_to_string(dir.path().join(REPORT_FILE_NAME)).unwrap(),
        "is happy\nis happy"
    );
}

#[test]
fn test_top_and_adjacent_commands() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("text.txt");
    let stop_words = dir.path().join("stop.txt");
    fs::write(&input, TEXT).unwrap();
    fs::write(&stop_words, "the is").unwrap();

    let args = parse(&[
        "top",
        input.to_str().unwrap(),
        "-n",
        "3",
        "--stop-words",
        stop_words.to_str().unwrap(),
    ]);
    execute_command(args).unwrap();

    let args = parse(&["--format", "json", "adjacent", input.to_str().unwrap(), "cat"]);
    execute_command(args).unwrap();
}

#[test]
fn test_missing_input_is_reported() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing.txt");

    let args = parse(&["top", missing.to_str().unwrap()]);
    let err = execute_command(args).unwrap_err();

    assert!(matches!(err, ConcordanceError::FileAccess { .. }));
    assert!(err.to_string().contains("missing.txt"));
}
