mod document_serialization_tests;
mod graphql_parser_fragment_tests;
mod graphql_parser_oracle_tests;
mod utils;
