use crate::commands::tests::utils::parse_cli;
use crate::commands::tests::utils::temp_dir_with_files;
use crate::commands::tokens::format_token_line;
use gqlscan::GraphQLLexer;
use std::process::ExitCode;

#[test]
fn token_lines_use_one_based_positions() {
    let mut lexer = GraphQLLexer::new("\n  query");
    assert_eq!(format_token_line(&lexer.next_token()), r#"Name("query") @2:3"#);
    assert_eq!(format_token_line(&lexer.next_token()), "EndOfFile @2:8");
}

#[tokio::test]
async fn prints_every_token_through_end_of_file() {
    let dir = temp_dir_with_files(&[("q.graphql", "{ a }")]);
    let path = dir.join("q.graphql");
    let mut cli = parse_cli(&["tokens", path.to_str().expect("utf-8 temp path")]);
    let cmd = cli.cmd.take().expect("subcommand");

    let result = cmd.run(cli).await;
    assert_eq!(result.exit_code, ExitCode::SUCCESS);
    assert_eq!(
        result.stdout.as_deref(),
        Some("BraceLeft @1:1\nName(\"a\") @1:3\nBraceRight @1:5\nEndOfFile @1:6"),
    );
    assert!(result.stderr.is_none());
}

#[tokio::test]
async fn lexical_errors_fail_but_still_print_tokens() {
    let dir = temp_dir_with_files(&[("bad.graphql", "a & b")]);
    let path = dir.join("bad.graphql");
    let mut cli = parse_cli(&["tokens", path.to_str().expect("utf-8 temp path")]);
    let cmd = cli.cmd.take().expect("subcommand");

    let result = cmd.run(cli).await;
    assert_eq!(result.exit_code, ExitCode::FAILURE);
    let stdout = result.stdout.expect("token listing");
    assert!(stdout.contains("LexError"));
    assert!(stdout.ends_with("EndOfFile @1:6"));
    assert!(result.stderr.expect("error summary").contains("1 lexical error(s)"));
}

#[tokio::test]
async fn missing_file_is_reported() {
    let dir = temp_dir_with_files(&[]);
    let path = dir.join("missing.graphql");
    let mut cli = parse_cli(&["tokens", path.to_str().expect("utf-8 temp path")]);
    let cmd = cli.cmd.take().expect("subcommand");

    let result = cmd.run(cli).await;
    assert_eq!(result.exit_code, ExitCode::FAILURE);
    assert!(result.stderr.expect("error").contains("Failed to read"));
}
