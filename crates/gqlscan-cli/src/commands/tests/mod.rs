mod tokens_cmd_tests;
mod utils;
