mod graphql_lexer_property_tests;
mod utils;
