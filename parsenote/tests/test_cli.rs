use clap::Parser;
use parsenote::cli::{Args, Invocation};
use std::path::PathBuf;

#[test]
fn given_single_file_when_parsing_then_invocation_is_parse() {
    // Arrange
    let args = vec!["parsenote", "note.xml"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    assert_eq!(parsed.invocation(), Invocation::Parse(PathBuf::from("note.xml")));
    assert!(!parsed.json);
    assert_eq!(parsed.verbose, 0);
}

#[test]
fn given_no_arguments_when_parsing_then_succeeds_as_misuse() {
    // Arrange
    let args = vec!["parsenote"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    assert!(parsed.files.is_empty());
    assert_eq!(parsed.invocation(), Invocation::Misuse);
}

#[test]
fn given_two_files_when_parsing_then_invocation_is_misuse() {
    // Arrange
    let args = vec!["parsenote", "a.xml", "b.xml"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    assert_eq!(parsed.files.len(), 2);
    assert_eq!(parsed.invocation(), Invocation::Misuse);
}

#[test]
fn given_short_help_flag_when_parsing_then_invocation_is_help() {
    // Arrange
    let args = vec!["parsenote", "-h"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    assert_eq!(parsed.help, 1);
    assert_eq!(parsed.invocation(), Invocation::Help);
}

#[test]
fn given_long_help_flag_when_parsing_then_invocation_is_help() {
    // Arrange
    let args = vec!["parsenote", "--help"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    assert_eq!(parsed.invocation(), Invocation::Help);
}

#[test]
fn given_help_with_file_when_parsing_then_invocation_is_misuse() {
    // Arrange
    let args = vec!["parsenote", "-h", "note.xml"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    assert_eq!(parsed.invocation(), Invocation::Misuse);
}

#[test]
fn given_json_flag_when_parsing_then_json_is_true() {
    // Arrange
    let args = vec!["parsenote", "--json", "note.xml"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    assert!(parsed.json);
    assert_eq!(parsed.invocation(), Invocation::Parse(PathBuf::from("note.xml")));
}

#[test]
fn given_verbose_flag_when_parsing_then_increments_count() {
    // Arrange
    let args = vec!["parsenote", "-vv", "note.xml"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    assert_eq!(parsed.verbose, 2);
    assert_eq!(parsed.files, vec![PathBuf::from("note.xml")]);
}

#[test]
fn given_repeated_help_flag_when_parsing_then_invocation_is_misuse() {
    // Arrange
    let args = vec!["parsenote", "-h", "-h"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    assert_eq!(parsed.help, 2);
    assert_eq!(parsed.invocation(), Invocation::Misuse);
}

#[test]
fn given_help_with_added_flag_when_parsing_then_invocation_is_help() {
    // Arrange
    let args = vec!["parsenote", "-h", "--json"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    assert_eq!(parsed.invocation(), Invocation::Help);
}

#[test]
fn given_unknown_dash_word_when_parsing_then_treats_it_as_file() {
    // Arrange
    let args = vec!["parsenote", "-x"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    assert_eq!(parsed.invocation(), Invocation::Parse(PathBuf::from("-x")));
}

#[test]
fn given_unknown_long_flag_with_file_when_parsing_then_invocation_is_misuse() {
    // Arrange
    let args = vec!["parsenote", "--bogus", "note.xml"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    assert_eq!(parsed.files.len(), 2);
    assert_eq!(parsed.invocation(), Invocation::Misuse);
}

#[test]
fn given_flag_after_file_when_parsing_then_counts_as_second_file() {
    // Arrange
    let args = vec!["parsenote", "note.xml", "--json"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    assert!(!parsed.json);
    assert_eq!(parsed.invocation(), Invocation::Misuse);
}
