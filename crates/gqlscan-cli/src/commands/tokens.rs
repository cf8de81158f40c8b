use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::output_utils::RED_X;
use gqlscan::GraphQLLexer;
use gqlscan::token::GraphQLToken;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct TokensCmd {
    #[arg(
        help="Path to the GraphQL file to tokenize.",
        name="FILE_PATH",
    )]
    file_path: PathBuf,
}

#[inherent::inherent]
impl RunnableCommand for TokensCmd {
    pub async fn run(self, cli: Cli) -> CommandResult {
        let source = match tokio::fs::read_to_string(&self.file_path).await {
            Ok(source) => source,
            Err(e) => return CommandResult::stderr(format_args!(
                "{RED_X} Failed to read `{}`: {e}",
                self.file_path.display(),
            )),
        };
        log::debug!(
            "Tokenizing `{}` ({} bytes).",
            self.file_path.display(),
            source.len(),
        );

        let lexer =
            GraphQLLexer::with_options(&source, &cli.parser_options())
                .with_file_path(&self.file_path);

        let mut lines = vec![];
        let mut num_errors = 0;
        for token in lexer {
            if token.is_error() {
                log::trace!("Lexical error: {}", token.value);
                num_errors += 1;
            }
            lines.push(format_token_line(&token));
        }

        let stdout = lines.join("\n");
        if num_errors > 0 {
            CommandResult::partial_failure(stdout, format!(
                "{RED_X} Found {num_errors} lexical error(s) in `{}`.",
                self.file_path.display(),
            ))
        } else {
            CommandResult::stdout(format_args!("{stdout}"))
        }
    }
}

/// Renders one token as `Kind("value") @line:col` with a 1-based line and
/// UTF-8 column.
pub(super) fn format_token_line(token: &GraphQLToken) -> String {
    let start = &token.span.start_inclusive;
    format!("{token} @{}:{}", start.line() + 1, start.col_utf8() + 1)
}
