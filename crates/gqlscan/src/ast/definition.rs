use crate::GraphQLSourceSpan;
use crate::ast::FragmentDefinition;
use crate::ast::OperationDefinition;

/// A top-level definition in an executable document.
///
/// See
/// [Executable Definitions](https://spec.graphql.org/October2021/#ExecutableDefinition)
/// in the GraphQL spec.
#[derive(Clone, Debug, PartialEq)]
#[derive(serde::Deserialize, serde::Serialize)]
pub enum Definition {
    Operation(OperationDefinition),
    Fragment(FragmentDefinition),
}

impl Definition {
    pub fn span(&self) -> &GraphQLSourceSpan {
        match self {
            Self::Operation(operation) => &operation.span,
            Self::Fragment(fragment) => &fragment.span,
        }
    }
}
