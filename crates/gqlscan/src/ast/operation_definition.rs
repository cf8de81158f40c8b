use crate::GraphQLSourceSpan;
use crate::ast::Name;
use crate::ast::OperationKind;
use crate::ast::SelectionSet;
use crate::ast::VariableDefinition;

/// An operation: a query, mutation or subscription.
///
/// The shorthand form `{ ... }` is a `Query` with no name and no variable
/// definitions. The `span` runs from the operation keyword (or the opening
/// `{` of a shorthand query) through the closing `}` of its selection set.
///
/// See
/// [Operations](https://spec.graphql.org/October2021/#sec-Language.Operations)
/// in the GraphQL spec.
#[derive(Clone, Debug, PartialEq)]
#[derive(serde::Deserialize, serde::Serialize)]
pub struct OperationDefinition {
    pub kind: OperationKind,
    pub name: Option<Name>,
    pub variable_definitions: Vec<VariableDefinition>,
    pub selection_set: SelectionSet,
    pub span: GraphQLSourceSpan,
}

impl OperationDefinition {
    /// Whether this operation was written in the `{ ... }` shorthand form.
    pub fn is_shorthand(&self) -> bool {
        self.kind == OperationKind::Query
            && self.name.is_none()
            && self.variable_definitions.is_empty()
            && self.span.start_inclusive == self.selection_set.span.start_inclusive
    }
}
