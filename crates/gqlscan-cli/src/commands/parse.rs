use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::output_utils::GREEN_CHECK;
use crate::output_utils::RED_X;
use anyhow::Context;
use gqlscan::GraphQLLexer;
use gqlscan::GraphQLParser;
use gqlscan::GraphQLParserOptions;
use std::collections::BTreeSet;
use std::path::Path;
use std::path::PathBuf;
use tokio::task::JoinSet;
use walkdir::WalkDir;

#[derive(Debug, clap::Args)]
pub(crate) struct ParseCmd {
    #[arg(
        default_values_t=["graphql".to_string(), "gql".to_string()],
        help="File extensions to treat as GraphQL documents when walking \
             directories.",
        long,
        value_delimiter=',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        help="GraphQL files, or directories to search for GraphQL files.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

#[derive(Debug)]
enum FileOutcome {
    Parsed {
        num_fragments: usize,
        num_operations: usize,
    },
    Failed {
        diagnostic: String,
    },
}

#[inherent::inherent]
impl RunnableCommand for ParseCmd {
    pub async fn run(self, cli: Cli) -> CommandResult {
        let file_paths = match self.collect_file_paths() {
            Ok(file_paths) => file_paths,
            Err(e) => return CommandResult::stderr(format_args!("{RED_X} {e:#}")),
        };
        if file_paths.is_empty() {
            return CommandResult::stderr(format_args!(
                "{RED_X} No files with extension(s) {:?} found.",
                self.graphql_file_exts,
            ));
        }
        log::debug!("Parsing {} GraphQL file(s).", file_paths.len());

        let options = cli.parser_options();
        let mut tasks = JoinSet::new();
        for file_path in file_paths {
            let options = options.clone();
            tasks.spawn(async move {
                let outcome = parse_file(&file_path, &options).await;
                (file_path, outcome)
            });
        }

        let mut results = vec![];
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(result) => results.push(result),
                Err(e) => return CommandResult::stderr(format_args!(
                    "{RED_X} Parse task failed: {e}",
                )),
            }
        }
        results.sort_by(|(a, _), (b, _)| a.cmp(b));

        let mut stdout_lines = vec![];
        let mut stderr_lines = vec![];
        for (file_path, outcome) in results {
            match outcome {
                Ok(FileOutcome::Parsed { num_fragments, num_operations }) =>
                    stdout_lines.push(format!(
                        "{GREEN_CHECK} {}: {num_operations} operation(s), \
                        {num_fragments} fragment(s)",
                        file_path.display(),
                    )),
                Ok(FileOutcome::Failed { diagnostic }) =>
                    stderr_lines.push(format!(
                        "{RED_X} {}\n{diagnostic}",
                        file_path.display(),
                    )),
                Err(e) =>
                    stderr_lines.push(format!("{RED_X} {e:#}")),
            }
        }

        if stderr_lines.is_empty() {
            CommandResult::stdout(format_args!("{}", stdout_lines.join("\n")))
        } else {
            CommandResult::partial_failure(
                stdout_lines.join("\n"),
                stderr_lines.join("\n"),
            )
        }
    }
}

impl ParseCmd {
    fn collect_file_paths(&self) -> anyhow::Result<BTreeSet<PathBuf>> {
        let mut file_paths = BTreeSet::new();
        for path in &self.file_or_dir_paths {
            let path = path.canonicalize().with_context(|| {
                format!("Failed to resolve path `{}`", path.display())
            })?;
            log::trace!("Walking `{}`...", path.display());

            for entry in WalkDir::new(&path).follow_links(true) {
                let entry = entry.with_context(|| {
                    format!("Failed to walk `{}`", path.display())
                })?;
                if entry.file_type().is_file()
                    && has_graphql_ext(entry.path(), &self.graphql_file_exts) {
                    file_paths.insert(entry.into_path());
                }
            }
        }

        // A single explicitly named file is parsed whatever its extension.
        if file_paths.is_empty()
            && let [only_path] = self.file_or_dir_paths.as_slice()
            && only_path.is_file() {
            log::warn!(
                "`{}` does not have one of the GraphQL file extensions {:?}; \
                parsing it anyway.",
                only_path.display(),
                self.graphql_file_exts,
            );
            file_paths.insert(only_path.to_path_buf());
        }

        Ok(file_paths)
    }
}

pub(super) fn has_graphql_ext(path: &Path, exts: &[String]) -> bool {
    let Some(ext) = path.extension().and_then(|ext| ext.to_str()) else {
        return false;
    };
    exts.iter().any(|graphql_ext| graphql_ext.trim_start_matches('.') == ext)
}

async fn parse_file(
    file_path: &Path,
    options: &GraphQLParserOptions,
) -> anyhow::Result<FileOutcome> {
    let source = tokio::fs::read_to_string(file_path).await.with_context(|| {
        format!("Failed to read `{}`", file_path.display())
    })?;
    log::trace!("Read {} bytes from `{}`.", source.len(), file_path.display());

    let lexer =
        GraphQLLexer::with_options(&source, options)
            .with_file_path(file_path);
    let parser = GraphQLParser::from_token_source_with_options(lexer, options);
    Ok(match parser.parse_document() {
        Ok(document) => FileOutcome::Parsed {
            num_fragments: document.fragments().count(),
            num_operations: document.operations().count(),
        },
        Err(error) => FileOutcome::Failed {
            diagnostic: error.format_detailed(Some(&source)),
        },
    })
}
