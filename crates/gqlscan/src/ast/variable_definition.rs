use crate::GraphQLSourceSpan;
use crate::ast::Name;
use crate::ast::TypeReference;
use crate::token::GraphQLToken;

/// A variable declared in an operation's parentheses:
/// `$name: Type = default`.
///
/// See
/// [Variable Definitions](https://spec.graphql.org/October2021/#VariableDefinition)
/// in the GraphQL spec.
#[derive(Clone, Debug, PartialEq)]
#[derive(serde::Deserialize, serde::Serialize)]
pub struct VariableDefinition {
    /// The variable name, without the `$`.
    pub name: Name,
    pub type_reference: TypeReference,
    /// The single raw token after `=` (an `Int`, `Float`, `String` or
    /// `Name`), if a default was given.
    pub default_value: Option<GraphQLToken>,
    /// From the `$` through the type or default value.
    pub span: GraphQLSourceSpan,
}
