use crate::GraphQLSourceSpan;
use crate::ast::Name;
use crate::ast::SelectionSet;

/// A named fragment: `fragment Name on Type { ... }`.
///
/// See
/// [Fragments](https://spec.graphql.org/October2021/#FragmentDefinition)
/// in the GraphQL spec.
#[derive(Clone, Debug, PartialEq)]
#[derive(serde::Deserialize, serde::Serialize)]
pub struct FragmentDefinition {
    pub name: Name,
    /// The named type after `on`.
    pub type_condition: Name,
    pub selection_set: SelectionSet,
    pub span: GraphQLSourceSpan,
}
