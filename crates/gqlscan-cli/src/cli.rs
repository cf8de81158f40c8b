use clap::CommandFactory;
use crate::commands;
use gqlscan::GraphQLParserOptions;

#[derive(clap::Parser, Debug)]
#[command(name = "gqlscan", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) cmd: Option<commands::CommandEnum>,

    #[arg(
        help="Enable verbose output.",
        global=true,
        long,
        short='v',
    )]
    pub verbose: bool,

    #[arg(
        help="Accept numbers with no digits after `.` or after an exponent \
             marker (e.g. `1.` or `2e`).",
        global=true,
        long,
    )]
    pub lenient_numbers: bool,

    #[arg(
        default_value_t=GraphQLParserOptions::DEFAULT_MAX_TYPE_NESTING_DEPTH,
        help="Maximum nesting depth of list type references.",
        global=true,
        long,
    )]
    pub max_type_nesting_depth: usize,
}
impl Cli {
    pub(crate) fn parser_options(&self) -> GraphQLParserOptions {
        GraphQLParserOptions {
            strict_number_literals: !self.lenient_numbers,
            max_type_nesting_depth: self.max_type_nesting_depth,
        }
    }

    pub(crate) async fn run_default(self) -> anyhow::Result<()> {
        Self::command().print_help()?;
        Ok(())
    }
}
